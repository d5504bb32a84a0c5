//! Import alias resolution through `tsconfig.json` / `jsconfig.json`.
//!
//! `components.json` refers to directories by import alias (`@/components`).
//! The project's `compilerOptions.paths` map those aliases to real directories,
//! relative to `compilerOptions.baseUrl`. Both files are JSONC in practice, so
//! comments and trailing commas are stripped before parsing.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::schema::{RawConfig, ResolvedPaths};
use crate::constants::{JSCONFIG_FILE_NAME, TSCONFIG_FILE_NAME};
use crate::utils::normalize_path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectJsConfig {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    base_url: Option<String>,
    #[serde(default)]
    paths: BTreeMap<String, Vec<String>>,
}

/// Alias patterns loaded from the project's TypeScript/JavaScript config.
#[derive(Debug, Clone)]
pub struct PathAliases {
    base: PathBuf,
    patterns: Vec<(String, String)>,
}

impl PathAliases {
    /// Loads aliases from `tsconfig.json`, falling back to `jsconfig.json`.
    ///
    /// Returns `None` when neither file exists or the file cannot be parsed.
    pub async fn load(cwd: &Path) -> Option<Self> {
        for name in [TSCONFIG_FILE_NAME, JSCONFIG_FILE_NAME] {
            let path = cwd.join(name);
            let content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(_) => continue,
            };

            return match serde_json::from_str::<ProjectJsConfig>(&strip_jsonc(&content)) {
                Ok(parsed) => Some(Self::from_compiler_options(cwd, parsed.compiler_options)),
                Err(e) => {
                    tracing::debug!("Ignoring unparseable {}: {}", path.display(), e);
                    None
                }
            };
        }
        None
    }

    fn from_compiler_options(cwd: &Path, options: CompilerOptions) -> Self {
        let base = normalize_path(&cwd.join(options.base_url.as_deref().unwrap_or(".")));
        let patterns = options
            .paths
            .into_iter()
            .filter_map(|(pattern, targets)| targets.into_iter().next().map(|t| (pattern, t)))
            .collect();
        Self {
            base,
            patterns,
        }
    }

    /// Maps an import alias to a filesystem path.
    ///
    /// Exact patterns win over wildcards; among wildcards the longest prefix wins.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<PathBuf> {
        if let Some((_, target)) = self.patterns.iter().find(|(pattern, _)| pattern == alias) {
            return Some(normalize_path(&self.base.join(target)));
        }

        self.patterns
            .iter()
            .filter_map(|(pattern, target)| {
                let prefix = pattern.strip_suffix('*')?;
                let rest = alias.strip_prefix(prefix)?;
                Some((prefix.len(), target.replacen('*', rest, 1)))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, target)| normalize_path(&self.base.join(target)))
    }
}

/// Resolves every path referenced by `raw` relative to `cwd`.
pub async fn resolve_config_paths(cwd: &Path, raw: &RawConfig) -> ResolvedPaths {
    let aliases = PathAliases::load(cwd).await;
    let resolve = |alias: &str| aliases.as_ref().and_then(|a| a.resolve(alias));

    let components = resolve(&raw.aliases.components);
    let utils = resolve(&raw.aliases.utils);

    let ui = match &raw.aliases.ui {
        Some(alias) => resolve(alias),
        None => components.as_ref().map(|c| c.join("ui")),
    };
    let lib = match &raw.aliases.lib {
        Some(alias) => resolve(alias),
        None => utils.as_ref().and_then(|u| u.parent().map(Path::to_path_buf)),
    };
    let hooks = match &raw.aliases.hooks {
        Some(alias) => resolve(alias),
        None => components
            .as_ref()
            .and_then(|c| c.parent().map(|p| p.join("hooks"))),
    };

    ResolvedPaths {
        cwd: cwd.to_path_buf(),
        tailwind_config: raw.tailwind.config.as_ref().map(|c| normalize_path(&cwd.join(c))),
        tailwind_css: normalize_path(&cwd.join(&raw.tailwind.css)),
        components,
        utils,
        ui,
        lib,
        hooks,
    }
}

/// Removes `//` and `/* */` comments and trailing commas outside of strings.
fn strip_jsonc(input: &str) -> String {
    strip_trailing_commas(&strip_comments(input))
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Expects comment-free input.
fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars.clone().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some('}' | ']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}
