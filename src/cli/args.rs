// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RuleOverrides;

/// commitfmt - Commit message format checker
///
/// Checks a commit message against a fixed style policy and reports
/// every violation with its position.
#[derive(Parser, Debug)]
#[command(name = "commitfmt")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message format checker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check a commit message (default command)
    Check(CheckArgs),

    /// Manage the commit-msg hook
    Hooks(HooksArgs),

    /// Print version information
    Version,

    /// Write an example commitfmt.toml
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Message file to check, `-` for stdin (default: .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE", conflicts_with = "rev")]
    pub file: Option<PathBuf>,

    /// Check the message of a commit, or every commit in an A..B range
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Remove git comment lines before checking
    #[arg(long)]
    pub strip_comments: bool,

    /// Override the maximum body line length
    #[arg(long, value_name = "N")]
    pub body_max_line_length: Option<usize>,

    /// Warn when the title is longer than N characters
    #[arg(long, value_name = "N")]
    pub title_max_length: Option<usize>,

    /// Skip a rule by name (repeatable)
    #[arg(long, value_name = "RULE")]
    pub disable: Vec<String>,
}

impl CheckArgs {
    /// Rule overrides given on the command line.
    pub fn overrides(&self) -> RuleOverrides {
        RuleOverrides {
            body_max_line_length: self.body_max_line_length,
            title_max_length: self.title_max_length,
            title_allowed_punctuation: None,
            disabled: self.disable.clone(),
        }
    }
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace an existing hook (it is backed up)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the configuration
    #[arg(long, default_value = "commitfmt.toml")]
    pub path: PathBuf,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}
