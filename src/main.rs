use std::io::{BufWriter, Write};
use std::path::PathBuf;

use accesslog::config::{Config, OutputFormat};
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "accesslog", about = "Parse Apache combined access logs")]
struct Cli {
    /// Log files to parse (plain, .gz, .tar.gz or .tgz).
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format: tsv or json. Overrides the config file.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Drop lines that do not match the combined log format.
    #[arg(long)]
    skip_unmatched: bool,

    /// Config file to layer over the defaults and ~/.config/accesslog/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let format = cli.format.unwrap_or(config.output.format);
    let skip_unmatched = cli.skip_unmatched || config.input.skip_unmatched;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0usize;

    for path in &cli.files {
        let records = match accesslog::parse_file(path) {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "skipping file");
                eprintln!("accesslog: {err}");
                failed += 1;
                continue;
            }
        };

        for record in records.iter().filter(|r| !skip_unmatched || r.is_matched()) {
            match format {
                OutputFormat::Tsv => writeln!(out, "{record}")?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut out, record)?;
                    writeln!(out)?;
                }
            }
        }
    }

    out.flush()?;

    if failed > 0 {
        anyhow::bail!("{failed} of {} file(s) could not be read", cli.files.len());
    }
    Ok(())
}
