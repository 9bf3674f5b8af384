// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::CommitMsgConfig;
use crate::error::{CommitMsgError, ConfigError, Result, ResultExt};
use crate::hooks::{HookManager, HookStatus};
use crate::rules::CommitMessageValidator;
use console::style;
use std::path::Path;

use super::args::{CheckArgs, Cli, Commands, HooksAction, HooksArgs, InitArgs};
use super::report::write_rejection;

/// Name of the file written by `init`.
const CONFIG_FILE: &str = "commit-msg.toml";

/// Run the CLI with the given arguments.
///
/// A rejected message has already been reported when this returns
/// `Err(CommitMsgError::Validation(_))`.
pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.effective_command() else {
        return Err(CommitMsgError::WithContext {
            context: "usage".to_string(),
            message: "a commit message FILE is required (see --help)".to_string(),
        });
    };

    match command {
        Commands::Check(args) => {
            let config = load_config(&cli)?;
            run_check(&cli, &config, args)
        }
        Commands::Hooks(args) => run_hooks(args),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

fn load_config(cli: &Cli) -> Result<CommitMsgConfig> {
    if let Some(config_path) = &cli.config {
        CommitMsgConfig::load_from(config_path)
    } else {
        CommitMsgConfig::load()
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CommitMsgConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Checking commit message in {:?}", args.file);

    let content = std::fs::read(&args.file).map_err(|source| CommitMsgError::ReadMessage {
        path: args.file.clone(),
        source,
    })?;

    let validator = CommitMessageValidator::with_config(content, config.rules.clone());
    let result = validator.validate();

    if cli.wants_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else if let Some(err) = result.error() {
        write_rejection(&mut std::io::stderr().lock(), err, &result.message)?;
    }

    result.into_result().map_err(CommitMsgError::from)
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { force } => {
            manager.install(force)?;
            println!("{} Installed commit-msg hook", style("✓").green().bold());
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("{} Uninstalled commit-msg hook", style("✓").green().bold());
        }
        HooksAction::Status => {
            let line = match manager.status()? {
                HookStatus::Installed => format!("{} commit-msg", style("✓").green().bold()),
                HookStatus::Foreign => format!(
                    "{} commit-msg {}",
                    style("⚠").yellow().bold(),
                    style("(installed by another tool)").dim()
                ),
                HookStatus::Missing => format!("{} commit-msg", style("✗").red().bold()),
            };
            println!("{}", line);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("validate-commit-msg {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(CommitMsgError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("init")?;

    println!("{} Created {}", style("✓").green().bold(), CONFIG_FILE);

    Ok(())
}
