//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::dictionary::Locale;

/// Top-level CLI parser for `modeldoc`.
#[derive(Debug, Parser)]
#[command(
    name = "modeldoc",
    version,
    about = "Generate a class diagram and a data dictionary from ORM models"
)]
pub struct Cli {
    /// Settings shared by every command.
    #[command(flatten)]
    pub options: Options,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the class diagram from the model manifest.
    Extract,
    /// Write the data dictionary from the class diagram.
    Dictionary,
    /// Run `extract` then `dictionary`.
    Generate,
}

/// Options shared by every command. Relative paths resolve against the
/// project root.
#[derive(Debug, Args)]
pub struct Options {
    /// Project root directory [default: current directory].
    #[arg(long, global = true, env = "MODELDOC_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,
    /// Project name [default: basename of the project root].
    #[arg(long, global = true, env = "MODELDOC_PROJECT_NAME")]
    pub project_name: Option<String>,
    /// Model manifest written by the host framework [default: models.yaml].
    #[arg(long, global = true, env = "MODELDOC_MANIFEST")]
    pub manifest: Option<PathBuf>,
    /// Class diagram file [default: result.puml].
    #[arg(long, global = true, env = "MODELDOC_DIAGRAM")]
    pub diagram: Option<PathBuf>,
    /// Data dictionary output file [default: data_dict.md].
    #[arg(long, global = true, env = "MODELDOC_DICTIONARY")]
    pub output: Option<PathBuf>,
    /// Document title [default: capitalized project name].
    #[arg(long, global = true)]
    pub title: Option<String>,
    /// Wording of the dictionary document.
    #[arg(long, global = true, value_enum, ignore_case = true, env = "MODELDOC_LOCALE")]
    pub locale: Option<Locale>,
    /// Make written files editable by everyone.
    #[arg(
        long,
        global = true,
        env = "MODELDOC_EDITABLE",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub editable: bool,
}
