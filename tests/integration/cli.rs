use predicates::prelude::*;
use ui_cli::test_utils::TestProject;

use crate::common::{ui_add, ui_cmd};

#[test]
fn test_help_lists_commands() {
    ui_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_add_requires_components() {
    ui_cmd().arg("add").assert().failure().stderr(predicate::str::contains("COMPONENTS"));
}

#[test]
fn test_add_rejects_components_with_all() {
    let project = TestProject::new().unwrap();

    ui_add(project.path(), &["button"]).arg("--all").assert().failure();
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    ui_cmd().args(["--verbose", "--quiet", "init"]).assert().failure();
}

/// Quiet mode still prints the preflight report
#[test]
fn test_quiet_keeps_preflight_report() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();

    ui_add(project.path(), &["button"])
        .arg("--quiet")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("components.json file was not found"));
}
