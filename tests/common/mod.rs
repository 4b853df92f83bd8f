//! Shared test utilities for accesslog integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod archives;
pub mod assertions;
pub mod fixtures;

pub use archives::*;
pub use fixtures::*;
