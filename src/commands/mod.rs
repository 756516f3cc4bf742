//! Command dispatch and handlers.

pub mod dictionary;
pub mod extract;
pub mod generate;

use std::env;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler against the real disk.
///
/// # Errors
///
/// Returns an error string if the current directory is unavailable or the
/// selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let current_dir =
        env::current_dir().map_err(|e| format!("failed to get current directory: {e}"))?;
    let config = Config::resolve(&cli.options, &current_dir);
    log::debug!("resolved configuration: {config:?}");

    let ctx = ServiceContext::live();
    dispatch_with_context(&cli.command, &ctx, &config)
}

/// Dispatch a command with the given service context and configuration.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::Extract => extract::run(ctx, config).map(|_| ()),
        Command::Dictionary => dictionary::run(ctx, config).map(|_| ()),
        Command::Generate => generate::run(ctx, config),
    }
}
