//! Configuration management for envguard
//!
//! Settings are layered with figment: embedded defaults, the user's config,
//! the repository config, an explicit `--config` file and finally
//! `ENVGUARD_*` environment variables. The merged result is extracted into
//! [`EnvguardConfig`] and turned into explicit inputs for the hook registry
//! and the toolchain selector; neither builder reads configuration itself.

mod core;
mod formats;
mod smart_load;

use crate::hooks::{HookDefaults, HookOverride};
use crate::toolchain::{Baseline, PlatformPolicy, RustTools};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

pub use self::core::{ConfigSources, DEFAULT_CONFIG};
pub use formats::ConfigFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Main configuration structure for envguard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvguardConfig {
    pub hooks: HooksConfig,
    pub toolchain: ToolchainConfig,
    /// Rust build-tool override
    pub rust: RustTools,
}

/// Hook registry settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Excluded paths applied to every hook without its own `excludes`
    pub excludes: Vec<String>,

    /// Per-hook `enable` / `excludes`, keyed by hook id
    pub overrides: BTreeMap<String, HookOverride>,
}

/// Toolchain selection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub frontend: String,
    pub stdlib: String,
    pub unknown_platform: PlatformPolicy,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        let baseline = Baseline::llvm();
        Self {
            frontend: baseline.compiler_frontend,
            stdlib: baseline.standard_library,
            unknown_platform: PlatformPolicy::default(),
        }
    }
}

impl EnvguardConfig {
    /// Inputs for [`crate::hooks::build_registry`]
    pub fn hook_defaults(&self) -> HookDefaults {
        HookDefaults {
            excluded_paths: self.hooks.excludes.iter().cloned().collect(),
            overrides: self.hooks.overrides.clone(),
            rust: self.rust.clone(),
        }
    }

    /// Baseline for [`crate::toolchain::select_toolchain`]
    pub fn baseline(&self) -> Baseline {
        Baseline::new(&self.toolchain.frontend, &self.toolchain.stdlib)
    }

    pub fn platform_policy(&self) -> PlatformPolicy {
        self.toolchain.unknown_platform
    }
}
