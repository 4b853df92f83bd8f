//! Configuration types for the accesslog command-line tool.
//!
//! [`Config::load`] layers the built-in defaults, the user file at
//! `~/.config/accesslog/config.toml` (if present) and an optional explicit
//! file. [`Config::load_from`] does the same with the user file passed in,
//! and [`Config::defaults`] never touches the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
format = "tsv"

[input]
skip_unmatched = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// How parsed records are written.
///
/// Both `--format` and the config file go through [`FromStr`](std::str::FromStr),
/// so either accepts any letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// One tab-separated row per record.
    #[default]
    Tsv,
    /// One JSON object per record.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?} (expected tsv or json)")),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// `[input]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Drop lines that do not match the combined log format instead of
    /// emitting an empty record for them.
    #[serde(default)]
    pub skip_unmatched: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Layer the user config file (if it exists) and then `explicit` over
    /// the built-in defaults. An explicit path that does not exist is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(user_config_path().as_deref(), explicit)
    }

    /// Same as [`Config::load`] with the user file given explicitly. A
    /// missing user file is skipped.
    pub fn load_from(user: Option<&Path>, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = defaults_builder();
        if let Some(path) = user {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path));
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// The built-in defaults alone.
    pub fn defaults() -> Self {
        defaults_builder()
            .build()
            .and_then(|layered| layered.try_deserialize())
            .expect("embedded DEFAULT_CONFIG is valid")
    }
}

fn defaults_builder() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
}

/// `$XDG_CONFIG_HOME/accesslog/config.toml`, falling back to
/// `$HOME/.config/accesslog/config.toml`. `None` when neither variable is set.
fn user_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("accesslog").join("config.toml"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
