use predicates::prelude::*;
use ui_cli::test_utils::TestProject;

use crate::common::{ui_add, ui_init};

#[test]
fn test_init_writes_config() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();

    ui_init(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"))
        .stdout(predicate::str::contains("components.json"));

    let content = std::fs::read_to_string(project.path().join("components.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["$schema"], "https://ui.shadcn.com/schema.json");
    assert_eq!(value["aliases"]["components"], "@/components");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_config_raw("{}").unwrap();

    ui_init(project.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(project.path().join("components.json")).unwrap();
    assert_eq!(content, "{}");

    ui_init(project.path()).arg("--force").assert().success();
}

#[test]
fn test_init_missing_directory() {
    let project = TestProject::new().unwrap();

    ui_init(&project.missing_path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Directory does not exist"));
}

/// A project fails the gate until it is initialized
#[test]
fn test_init_then_add() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();

    ui_add(project.path(), &["button"]).assert().failure().code(1);
    ui_init(project.path()).assert().success();
    ui_add(project.path(), &["button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to add button"));
}
