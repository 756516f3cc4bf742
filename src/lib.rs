//! Core library entry for the `modeldoc` CLI.
//!
//! Two batch stages share a single text hand-off:
//!
//! 1. [`extract`] turns the host framework's model descriptors into a
//!    PlantUML class diagram.
//! 2. [`dictionary`] re-reads that diagram and renders a markdown data
//!    dictionary.
//!
//! The diagram file stays between them so it can be viewed or hand-edited
//! before the dictionary is generated.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dictionary;
pub mod extract;
pub mod manifest;
pub mod model;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are reported through the error path but are not failures.
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
