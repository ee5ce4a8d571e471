use super::*;
use crate::backends::registry::ManagerRegistry;
use std::cell::RefCell;

/// Records invocations instead of spawning.
#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<(String, Vec<String>)>>,
    exit_code: i32,
    fail_spawn: bool,
}

impl CommandRunner for RecordingRunner {
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<i32> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        if self.fail_spawn {
            return Err(PkgxError::SpawnFailed {
                command: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
            });
        }
        Ok(self.exit_code)
    }
}

fn pkgs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn manager(name: &str) -> ManagerDescriptor {
    ManagerRegistry::builtin()
        .get(name)
        .cloned()
        .expect("builtin manager")
}

#[test]
fn dry_run_reports_command_without_spawning() {
    let runner = RecordingRunner::default();
    let dispatcher = Dispatcher::new(&runner);

    let result = dispatcher.execute(
        &manager("apt"),
        Operation::Install,
        &pkgs(&["git", "vim"]),
        true,
    );

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "Would run: apt install -y git vim");
    assert!(runner.calls.borrow().is_empty());
}

#[test]
fn dry_run_uses_manager_command_not_name() {
    let runner = RecordingRunner::default();
    let result = Dispatcher::new(&runner).execute(
        &manager("chocolatey"),
        Operation::Upgrade,
        &[],
        true,
    );
    assert_eq!(result.stdout, "Would run: choco upgrade all -y");
}

#[test]
fn dry_run_update_ignores_packages() {
    let runner = RecordingRunner::default();
    let result = Dispatcher::new(&runner).execute(
        &manager("zypper"),
        Operation::Update,
        &pkgs(&["ignored"]),
        true,
    );
    assert_eq!(result.stdout, "Would run: zypper refresh");
}

#[test]
fn unsupported_search_fails_without_spawning() {
    let runner = RecordingRunner::default();
    let result = Dispatcher::new(&runner).execute(
        &manager("microdnf"),
        Operation::Search,
        &pkgs(&["x"]),
        false,
    );

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("search"));
    assert!(result.stderr.contains("microdnf"));
    assert!(runner.calls.borrow().is_empty());
}

#[test]
fn unsupported_search_is_refused_in_dry_run_too() {
    let runner = RecordingRunner::default();
    let result = Dispatcher::new(&runner).execute(
        &manager("microdnf"),
        Operation::Search,
        &pkgs(&["x"]),
        true,
    );
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty());
}

#[test]
fn real_run_spawns_once_with_built_args() {
    let runner = RecordingRunner::default();
    let result = Dispatcher::new(&runner).execute(
        &manager("apk"),
        Operation::Remove,
        &pkgs(&["curl"]),
        false,
    );

    assert!(result.success());
    assert_eq!(
        *runner.calls.borrow(),
        vec![("apk".to_string(), pkgs(&["del", "curl"]))]
    );
}

#[test]
fn child_exit_code_is_propagated_verbatim() {
    let runner = RecordingRunner {
        exit_code: 100,
        ..Default::default()
    };
    let result = Dispatcher::new(&runner).execute(
        &manager("apt"),
        Operation::Install,
        &pkgs(&["nope"]),
        false,
    );
    assert_eq!(result.exit_code, 100);
    assert!(result.stderr.is_empty());
}

#[test]
fn spawn_failure_reports_exit_one_with_reason() {
    let runner = RecordingRunner {
        fail_spawn: true,
        ..Default::default()
    };
    let result = Dispatcher::new(&runner).execute(
        &manager("dnf"),
        Operation::Update,
        &[],
        false,
    );
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Failed to run 'dnf'"));
    assert_eq!(runner.calls.borrow().len(), 1);
}

#[test]
fn try_execute_keeps_typed_error() {
    let runner = RecordingRunner::default();
    let err = Dispatcher::new(&runner)
        .try_execute(&manager("microdnf"), Operation::Search, &pkgs(&["x"]), false)
        .unwrap_err();
    assert!(matches!(
        err,
        PkgxError::UnsupportedOperation {
            operation: Operation::Search,
            ..
        }
    ));
}
