use super::{operation_request, settle};
use crate::cli::args::Cli;
use crate::core::Operation;
use crate::error::PkgxError;
use crate::project_identity;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec![project_identity::BINARY_NAME];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("valid command line")
}

fn request(args: &[&str]) -> Option<(Operation, Vec<String>, Option<String>, bool)> {
    let cli = parse(args);
    let command = cli.command.as_ref()?;
    operation_request(command).map(|(op, packages, target)| {
        (op, packages, target.manager.clone(), target.dry_run)
    })
}

#[test]
fn install_maps_packages_and_target() {
    assert_eq!(
        request(&["install", "git", "vim", "--manager", "apk"]),
        Some((
            Operation::Install,
            vec!["git".to_string(), "vim".to_string()],
            Some("apk".to_string()),
            false
        ))
    );
}

#[test]
fn search_query_becomes_single_package() {
    assert_eq!(
        request(&["search", "firefox", "-n"]),
        Some((Operation::Search, vec!["firefox".to_string()], None, true))
    );
}

#[test]
fn update_has_no_packages() {
    let (op, packages, _, _) = request(&["update"]).expect("operation");
    assert_eq!(op, Operation::Update);
    assert!(packages.is_empty());
}

#[test]
fn upgrade_keeps_optional_packages() {
    let (op, packages, _, _) = request(&["upgrade"]).expect("operation");
    assert_eq!(op, Operation::Upgrade);
    assert!(packages.is_empty());

    let (_, packages, _, _) = request(&["upgrade", "git"]).expect("operation");
    assert_eq!(packages, vec!["git".to_string()]);
}

#[test]
fn non_package_commands_are_not_operations() {
    assert!(request(&["list-managers"]).is_none());
    assert!(request(&["version"]).is_none());
}

#[test]
fn settle_passes_outcome_through_without_interrupt() {
    assert_eq!(settle(Ok(0), false).unwrap(), 0);
    assert_eq!(settle(Ok(100), false).unwrap(), 100);
    assert!(matches!(
        settle(Err(PkgxError::UnknownManager("x".into())), false),
        Err(PkgxError::UnknownManager(_))
    ));
}

#[test]
fn interrupt_overrides_manager_code() {
    for outcome in [Ok(0), Ok(100), Err(PkgxError::Other("boom".into()))] {
        let err = settle(outcome, true).unwrap_err();
        assert!(matches!(err, PkgxError::Interrupted));
        assert_eq!(err.exit_code(), 130);
    }
}
