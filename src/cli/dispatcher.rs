//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers and returns the process
//! exit code.

use crate::backends::{ManagerRegistry, PathProbe, SystemRunner};
use crate::cli::args::{Cli, Command, GlobalFlags, TargetArgs};
use crate::commands::{self, Context};
use crate::config::Settings;
use crate::core::{Detector, Operation, PlatformSignal, requested_manager};
use crate::error::{PkgxError, Result};
use crate::project_identity;
use crate::ui as output;
use clap::CommandFactory;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<i32> {
    match &args.command {
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| PkgxError::Other(format!("Failed to print help: {}", e)))?;
            Ok(0)
        }
        Some(Command::Version) => Ok(commands::version::run()),
        Some(Command::Completions { shell }) => Ok(commands::completions::run(*shell)),
        Some(Command::ListManagers { format }) => {
            load_settings(&args.global)?;
            with_host(|ctx| commands::list_managers::run(ctx, *format))
        }
        Some(command) => {
            let settings = load_settings(&args.global)?;
            let (operation, packages, target) = operation_request(command).ok_or_else(|| {
                PkgxError::Other(format!("Unhandled command: {:?}", command))
            })?;

            let env_manager = std::env::var(project_identity::manager_env_key()).ok();
            let options = commands::operation::OperationOptions {
                operation,
                packages,
                manager: requested_manager(
                    target.manager.as_deref(),
                    env_manager.as_deref(),
                    settings.manager.as_deref(),
                ),
                dry_run: target.dry_run,
            };

            with_host(|ctx| commands::operation::run(ctx, options))
        }
    }
}

/// Final outcome of an invocation once the interrupt flag is known.
///
/// A user interrupt overrides whatever the command returned, including a
/// manager's own exit code.
pub fn settle(outcome: Result<i32>, interrupted: bool) -> Result<i32> {
    if interrupted {
        return Err(PkgxError::Interrupted);
    }
    outcome
}

/// Map a package subcommand to its operation, package list and target flags.
pub(crate) fn operation_request(command: &Command) -> Option<(Operation, Vec<String>, &TargetArgs)> {
    match command {
        Command::Install { packages, target } => {
            Some((Operation::Install, packages.clone(), target))
        }
        Command::Remove { packages, target } => Some((Operation::Remove, packages.clone(), target)),
        Command::Update { target } => Some((Operation::Update, Vec::new(), target)),
        Command::Upgrade { packages, target } => {
            Some((Operation::Upgrade, packages.clone(), target))
        }
        Command::Search { query, target } => Some((Operation::Search, vec![query.clone()], target)),
        Command::ListManagers { .. } | Command::Version | Command::Completions { .. } => None,
    }
}

/// Load settings and apply their terminal preferences; flags win.
fn load_settings(global: &GlobalFlags) -> Result<Settings> {
    let settings = Settings::load()?;

    if global.color.is_none() {
        output::init_colors(settings.color);
    }
    if settings.verbose && !global.quiet {
        output::set_verbose(true);
    }

    Ok(settings)
}

/// Build the per-invocation host view and run `f` against it.
fn with_host<F>(f: F) -> Result<i32>
where
    F: FnOnce(&Context<'_>) -> Result<i32>,
{
    let registry = ManagerRegistry::builtin();
    let detector = Detector::default();
    let platform = PlatformSignal::current();
    output::verbose(&format!(
        "Platform: {} (markers: {:?})",
        platform.os, platform.markers
    ));

    let ctx = Context {
        registry: &registry,
        detector: &detector,
        platform: &platform,
        probe: &PathProbe,
        runner: &SystemRunner,
    };
    f(&ctx)
}

#[cfg(test)]
mod tests;
