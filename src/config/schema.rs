//! Serde types mirroring `components.json`.
//!
//! Keys are camelCase on disk. Unknown keys are rejected so typos surface as a
//! failed config read instead of being silently ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::CONFIG_SCHEMA_URL;

/// The `components.json` file exactly as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    /// JSON schema reference, kept for editor tooling.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Component style, e.g. `new-york`.
    pub style: String,

    /// Whether the project uses React Server Components.
    #[serde(default)]
    pub rsc: bool,

    /// Whether components are written as TypeScript.
    #[serde(default = "default_true")]
    pub tsx: bool,

    /// Tailwind integration settings.
    pub tailwind: TailwindConfig,

    /// Icon library used by generated components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_library: Option<String>,

    /// Import aliases for generated files.
    pub aliases: Aliases,
}

/// The `tailwind` section of `components.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TailwindConfig {
    /// Path to `tailwind.config.*`, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,

    /// Path to the global CSS file, relative to the project root.
    pub css: String,

    /// Base color palette name.
    pub base_color: String,

    /// Whether theming uses CSS variables.
    #[serde(default = "default_true")]
    pub css_variables: bool,

    /// Optional utility class prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// The `aliases` section of `components.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aliases {
    /// Alias for the components directory, e.g. `@/components`.
    pub components: String,
    /// Alias for the `cn` utilities module, e.g. `@/lib/utils`.
    pub utils: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
}

/// Absolute filesystem locations derived from the raw config.
///
/// Alias-derived entries are `None` when the alias could not be mapped through
/// the project's `tsconfig.json`/`jsconfig.json` paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPaths {
    pub cwd: PathBuf,
    pub tailwind_config: Option<PathBuf>,
    pub tailwind_css: PathBuf,
    pub components: Option<PathBuf>,
    pub utils: Option<PathBuf>,
    pub ui: Option<PathBuf>,
    pub lib: Option<PathBuf>,
    pub hooks: Option<PathBuf>,
}

/// A loaded `components.json` together with its resolved paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub raw: RawConfig,
    pub resolved_paths: ResolvedPaths,
}

const fn default_true() -> bool {
    true
}

impl Default for RawConfig {
    /// The configuration written by `ui init`.
    fn default() -> Self {
        Self {
            schema: Some(CONFIG_SCHEMA_URL.to_string()),
            style: "new-york".to_string(),
            rsc: false,
            tsx: true,
            tailwind: TailwindConfig {
                config: None,
                css: "src/index.css".to_string(),
                base_color: "neutral".to_string(),
                css_variables: true,
                prefix: None,
            },
            icon_library: Some("lucide".to_string()),
            aliases: Aliases {
                components: "@/components".to_string(),
                utils: "@/lib/utils".to_string(),
                ui: Some("@/components/ui".to_string()),
                lib: Some("@/lib".to_string()),
                hooks: Some("@/hooks".to_string()),
            },
        }
    }
}
