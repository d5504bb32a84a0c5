//! Common helpers for ui-cli integration tests.

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// A `ui` command with spinners and colors disabled.
pub fn ui_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ui").unwrap();
    cmd.env("UI_NO_PROGRESS", "1")
        .env("NO_COLOR", "1")
        .env_remove("UI_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// `ui add <components> --cwd <cwd>`.
pub fn ui_add(cwd: &Path, components: &[&str]) -> Command {
    let mut cmd = ui_cmd();
    cmd.arg("add").args(components).arg("--cwd").arg(cwd);
    cmd
}

/// `ui init --cwd <cwd>`.
pub fn ui_init(cwd: &Path) -> Command {
    let mut cmd = ui_cmd();
    cmd.arg("init").arg("--cwd").arg(cwd);
    cmd
}
