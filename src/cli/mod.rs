//! # CLI Module
//!
//! Command-line surface of the documentation server.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Serve a specification document, optionally with a rendered docs UI:
//!
//! ```bash
//! specdocs serve openapi.json --flavor swagger --port 8080
//! ```
//!
//! The single positional argument is the path or URL of the document. See
//! `specdocs serve --help` for the full flag set (base path, UI flavor and
//! path, flatten, host/port, asset source prefix).
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use specdocs::cli::run_cli;
//!
//! run_cli()?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, run_serve, Cli, Commands};
