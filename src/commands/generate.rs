//! `modeldoc generate` command.

use crate::config::Config;
use crate::context::ServiceContext;

use super::{dictionary, extract};

/// Execute the `generate` command: `extract`, then `dictionary`.
///
/// The stages still hand off through the diagram file, so the result is the
/// same as running them one after the other.
///
/// # Errors
///
/// Returns an error string if either stage fails.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<(), String> {
    extract::run(ctx, config)?;
    dictionary::run(ctx, config)?;
    Ok(())
}
