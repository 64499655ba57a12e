//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all docsync
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `sync`: Extract apiDocJS comments and update the documentation files
//! - `init`: Initialize docsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source directory to scan for apiDocJS comments (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory holding the apidoc output files (overrides config file)
    #[arg(long)]
    pub apidoc_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file for the version history (overrides config file)
    #[arg(long)]
    pub output: Option<String>,

    /// Scan the source directory recursively
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract apiDocJS comments and update the version history and apidoc.json
    Sync(SyncCommand),
    /// Initialize a new .docsyncrc.json configuration file
    Init,
}
