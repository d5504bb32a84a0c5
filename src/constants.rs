//! Global constants used throughout the ui-cli codebase.
//!
//! File names, documentation links and environment variable names that are
//! referenced by more than one module live here so they are easy to find.

/// Name of the project configuration file written by `ui init`.
pub const CONFIG_FILE_NAME: &str = "components.json";

/// Name of the package manifest whose presence marks a non-empty project.
pub const PACKAGE_MANIFEST_FILE_NAME: &str = "package.json";

/// TypeScript project configuration consulted for import aliases.
pub const TSCONFIG_FILE_NAME: &str = "tsconfig.json";

/// JavaScript project configuration, used when no `tsconfig.json` exists.
pub const JSCONFIG_FILE_NAME: &str = "jsconfig.json";

/// Documentation page describing `components.json`.
pub const CONFIG_DOCS_URL: &str = "https://ui.shadcn.com/docs/components-json";

/// JSON schema referenced from generated `components.json` files.
pub const CONFIG_SCHEMA_URL: &str = "https://ui.shadcn.com/schema.json";

/// Environment variable that disables spinners and progress bars when set.
pub const NO_PROGRESS_ENV: &str = "UI_NO_PROGRESS";

/// Environment variable that overrides the log filter (falls back to `RUST_LOG`).
pub const LOG_ENV: &str = "UI_LOG";

/// Message shown next to the preflight spinner.
pub const PREFLIGHT_SPINNER_MESSAGE: &str = "Preflight checks.";
