//! Package operations (install, remove, update, upgrade, search)

use crate::backends::Dispatcher;
use crate::commands::Context;
use crate::core::{ManagerRequest, Operation, resolve_manager};
use crate::error::{PkgxError, Result};
use crate::ui as output;
use crate::utils::sanitize;

pub struct OperationOptions {
    pub operation: Operation,
    /// Packages, or the single search query
    pub packages: Vec<String>,
    pub manager: Option<ManagerRequest>,
    pub dry_run: bool,
}

/// Run one operation and return the process exit code.
///
/// A non-zero code from the manager itself is returned as-is, not as an error.
pub fn run(ctx: &Context<'_>, options: OperationOptions) -> Result<i32> {
    if options.operation.requires_packages() && options.packages.is_empty() {
        return Err(PkgxError::InvalidPackageName(format!(
            "'{}' needs at least one package",
            options.operation
        )));
    }
    match options.operation {
        Operation::Search => options
            .packages
            .iter()
            .try_for_each(|query| sanitize::validate_search_query(query))?,
        _ => sanitize::validate_package_names(&options.packages)?,
    }

    let manager = resolve_manager(
        ctx.registry,
        options.manager.as_ref(),
        ctx.detector,
        ctx.platform,
        ctx.probe,
    )?;

    if options.dry_run {
        output::note(&format!("Using package manager: {}", manager.name));
    }

    let result = Dispatcher::new(ctx.runner).try_execute(
        manager,
        options.operation,
        &options.packages,
        options.dry_run,
    )?;

    if !result.stdout.is_empty() {
        println!("{}", result.stdout);
    }
    if !result.success() {
        output::verbose(&format!(
            "{} {} exited with status {}",
            manager.command, options.operation, result.exit_code
        ));
    }

    Ok(result.exit_code)
}
