//! Pre-commit hook registry
//!
//! Describes every check an external hook runner may invoke: what it is
//! called, which file types it wants, which paths it must never see and the
//! command to execute. Nothing in this module runs a hook or filters files;
//! the runner owns scheduling, file selection and process handling.

mod catalog;
mod export;
mod registry;

use crate::toolchain::RustTools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use catalog::{CATALOG, EntryTemplate, HookDefinition};
pub use export::{ExportFormat, export_registry, pre_commit_config};
pub use registry::{Registry, RegistryError, build_registry, build_registry_from};

/// One fully merged registry entry.
///
/// Built once by the registry and read-only from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookSpec {
    id: String,
    enabled: bool,
    display_name: String,
    description: String,
    file_types: BTreeSet<String>,
    excluded_paths: BTreeSet<String>,
    entry_point: String,
}

impl HookSpec {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// File types the runner should pass to this hook; empty means all
    pub fn file_types(&self) -> &BTreeSet<String> {
        &self.file_types
    }

    pub fn excluded_paths(&self) -> &BTreeSet<String> {
        &self.excluded_paths
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// First word of the entry point, i.e. the program the runner spawns
    pub fn program(&self) -> &str {
        self.entry_point
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}

/// Per-hook settings layered over the catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookOverride {
    /// Enable or disable the hook; hooks are enabled unless told otherwise
    pub enable: Option<bool>,
    /// Replaces the default excluded paths for this hook
    pub excludes: Option<Vec<String>>,
}

/// Inputs shared by every registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookDefaults {
    /// Excluded paths for every hook without its own `excludes`
    pub excluded_paths: BTreeSet<String>,
    pub overrides: BTreeMap<String, HookOverride>,
    /// Binaries substituted into the Rust hooks' entry points
    pub rust: RustTools,
}

impl HookDefaults {
    pub fn with_excludes<I, S>(excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_paths: excludes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_override(mut self, id: impl Into<String>, hook: HookOverride) -> Self {
        self.overrides.insert(id.into(), hook);
        self
    }
}
