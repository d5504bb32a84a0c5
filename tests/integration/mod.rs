//! Integration test suite for ui-cli
//!
//! End-to-end tests that run the `ui` binary against temporary projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **add**: preflight gate of the `add` command
//! - **init**: `components.json` creation and the init-then-add workflow
//! - **cli**: argument parsing and global flags

#[path = "../common/mod.rs"]
mod common;

mod add;
mod cli;
mod init;
