// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::PathBuf;

use crate::config::{example_config, Config};
use crate::error::{CfError, ConfigError, Result, ResultExt, ValidationError};
use crate::git;
use crate::rules::{Report, RuleEngine};

use super::args::{CheckArgs, Cli, Commands, HooksAction, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // Only `check` reads the configuration file
    match cli.effective_command() {
        Commands::Check(args) => {
            let config = load_config(&cli)?;
            if !config.ui.color {
                console::set_colors_enabled(false);
            }
            run_check(&cli, &config, args)
        }
        Commands::Hooks(args) => run_hooks(args.action),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(config_path) => Config::load_from(config_path),
        None => Config::load(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &Config, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let config = config.with_rule_overrides(&args.overrides())?;
    let engine = RuleEngine::new(config.rules);

    let reports = match args.rev {
        Some(ref rev) if rev.contains("..") => engine.check_range(rev)?,
        Some(ref rev) => vec![engine.check_commit(rev)?],
        None => {
            let path = match args.file {
                Some(ref path) => path.clone(),
                None => default_message_path()?,
            };
            vec![engine.check_file(&path, args.strip_comments)?]
        }
    };

    print_reports(&reports, cli.format);

    let errors: usize = reports.iter().map(Report::error_count).sum();
    let warnings: usize = reports.iter().map(Report::warning_count).sum();

    if errors > 0 || (args.strict && warnings > 0) {
        Err(CfError::Validation(ValidationError::Failed { errors, warnings }))
    } else {
        Ok(())
    }
}

fn default_message_path() -> Result<PathBuf> {
    Ok(git::open_repo()?.commit_editmsg_path())
}

fn print_reports(reports: &[Report], format: Option<OutputFormat>) {
    match format {
        Some(OutputFormat::Json) => {
            let json: Vec<_> = reports.iter().map(Report::to_json).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for report in reports {
                report.print();
            }
        }
    }
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    use crate::hooks::{HookManager, HOOK_NAME};

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { force } => {
            manager.install(force)?;
            println!("✓ Installed {} hook", HOOK_NAME);
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled {} hook", HOOK_NAME);
        }
        HooksAction::Status => {
            let icon = if manager.is_installed()? { "✓" } else { "✗" };
            println!("{} {}", icon, HOOK_NAME);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commitfmt {}", crate::version::version_string());
    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(CfError::Config(ConfigError::AlreadyExists { path: args.path }));
    }

    std::fs::write(&args.path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created {}", args.path.display());

    Ok(())
}
