use predicates::prelude::*;
use ui_cli::config::RawConfig;
use ui_cli::test_utils::TestProject;

use crate::common::ui_add;

/// Target directory that does not exist
#[test]
fn test_add_missing_directory() {
    let project = TestProject::new().unwrap();

    ui_add(&project.missing_path(), &["button"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist or is empty."))
        .stdout(predicate::str::contains("Ready to add").not());
}

/// Directory without package.json
#[test]
fn test_add_directory_without_package_json() {
    let project = TestProject::new().unwrap();
    project.write_default_config().unwrap();

    ui_add(project.path(), &["button"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist or is empty."))
        .stderr(predicate::str::contains("was not found").not());
}

/// Valid project without components.json
#[test]
fn test_add_missing_config() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();

    ui_add(project.path(), &["button"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("components.json file was not found at"))
        .stderr(predicate::str::contains("by running the init command."))
        .stderr(predicate::str::contains(
            "Learn more at https://ui.shadcn.com/docs/components-json.",
        ))
        .stderr(predicate::str::contains("Failed to read").not())
        .stderr(predicate::str::contains("does not exist or is empty").not());
}

/// components.json that is not valid JSON
#[test]
fn test_add_malformed_config() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_config_raw("{ \"style\": \"new-york\", ").unwrap();

    ui_add(project.path(), &["button"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read the components.json file."))
        .stderr(predicate::str::contains("was not found").not());
}

/// components.json with fields the schema does not know
#[test]
fn test_add_config_with_unknown_fields() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_config_raw(r#"{ "style": "new-york", "unexpected": 1 }"#).unwrap();

    ui_add(project.path(), &["button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read the components.json file."));
}

/// Fully configured project passes the gate
#[test]
fn test_add_valid_project() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_default_config().unwrap();
    project
        .write_file(
            "tsconfig.json",
            r#"{
  // path aliases
  "compilerOptions": { "baseUrl": ".", "paths": { "@/*": ["./src/*"] } }
}"#,
        )
        .unwrap();

    ui_add(project.path(), &["button", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to add button, card to"))
        .stdout(predicate::str::contains("ui"))
        .stderr(predicate::str::contains("Failed").not());
}

/// --silent suppresses the success line
#[test]
fn test_add_valid_project_silent() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_config(&RawConfig::default()).unwrap();

    ui_add(project.path(), &["button"])
        .arg("--silent")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// --all is accepted in place of component names
#[test]
fn test_add_all_components() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_default_config().unwrap();

    ui_add(project.path(), &[])
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to add all components"));
}

/// Running the gate twice gives the same result
#[test]
fn test_add_failure_is_repeatable() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();

    let first = ui_add(project.path(), &["button"]).output().unwrap();
    let second = ui_add(project.path(), &["button"]).output().unwrap();

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stderr, second.stderr);
}

/// Verbose mode still reports failures and exits 1
#[test]
fn test_add_verbose_failure() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();

    ui_add(project.path(), &["button"])
        .arg("--verbose")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("components.json file was not found"));
}

/// A literal `$` in the target path is not treated as an undefined variable
#[test]
fn test_add_path_with_dollar_sign() {
    let project = TestProject::new().unwrap();
    project.write_file("my$app/package.json", "{}").unwrap();
    project.write_file("my$app/components.json", "{}").unwrap();

    ui_add(&project.path().join("my$app"), &["button"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read the components.json file."))
        .stderr(predicate::str::contains("Invalid options").not());
}

/// --no-progress keeps the verbose spinner hidden without the environment variable
#[test]
fn test_add_verbose_with_no_progress_flag() {
    let project = TestProject::new().unwrap().with_package_json().unwrap();
    project.write_default_config().unwrap();

    ui_add(project.path(), &["button"])
        .env_remove("UI_NO_PROGRESS")
        .args(["--verbose", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to add button"))
        .stderr(predicate::str::contains("✔").not());
}
