// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// validate-commit-msg - commit-msg hook for `type(scope): subject` headers
///
/// Run with the path git passes to the commit-msg hook. Exits 0 when the
/// message is accepted and 1 (with the reason on stderr) when it is not.
#[derive(Parser, Debug)]
#[command(name = "validate-commit-msg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate a commit message file", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Optional command; without one, FILE is validated
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File containing the commit message (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text on stderr (default)
    Text,
    /// JSON on stdout
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a commit message file
    Check(CheckArgs),

    /// Manage the git commit-msg hook
    Hooks(HooksArgs),

    /// Print version information
    Version,

    /// Write a commented configuration file
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// File containing the commit message
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
        /// Replace (and back up) an existing foreign hook
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the commit-msg hook
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
}

impl Cli {
    /// The command to run: an explicit subcommand, or a check of FILE.
    pub fn effective_command(&self) -> Option<Commands> {
        match (&self.command, &self.file) {
            (Some(command), _) => Some(command.clone()),
            (None, Some(file)) => Some(Commands::Check(CheckArgs { file: file.clone() })),
            (None, None) => None,
        }
    }

    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_file() {
        let args = Cli::parse_from(["validate-commit-msg", ".git/COMMIT_EDITMSG"]);
        assert!(args.command.is_none());
        match args.effective_command() {
            Some(Commands::Check(check)) => {
                assert_eq!(check.file, PathBuf::from(".git/COMMIT_EDITMSG"))
            }
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["validate-commit-msg", "check", "msg.txt", "--format", "json"]);
        assert!(matches!(args.command, Some(Commands::Check(_))));
        assert!(args.wants_json());
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["validate-commit-msg", "hooks", "install", "--force"]);
        match args.command {
            Some(Commands::Hooks(HooksArgs {
                action: HooksAction::Install { force },
            })) => assert!(force),
            other => panic!("Expected hooks install, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["validate-commit-msg", "--debug", "-c", "x.toml", "msg"]);
        assert!(args.debug);
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert!(!args.wants_json());
    }

    #[test]
    fn test_no_arguments() {
        let args = Cli::parse_from(["validate-commit-msg"]);
        assert!(args.effective_command().is_none());
    }
}
