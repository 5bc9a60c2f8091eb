//! Registry exports
//!
//! Renders the registry for consumers outside this process: plain JSON,
//! YAML or TOML dumps of every hook, or a `.pre-commit-config.yaml` with a
//! single `local` repository.

use super::{HookSpec, Registry};
use crate::shared::glob::exclude_regex;
use anyhow::{Context, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Toml,
    PreCommit,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "toml" => Ok(ExportFormat::Toml),
            "pre-commit" | "precommit" => Ok(ExportFormat::PreCommit),
            _ => anyhow::bail!(
                "Unsupported format: {}. Use json, yaml, toml or pre-commit",
                s
            ),
        }
    }
}

#[derive(Debug, Serialize)]
struct PreCommitConfig<'a> {
    repos: Vec<PreCommitRepo<'a>>,
}

#[derive(Debug, Serialize)]
struct PreCommitRepo<'a> {
    repo: &'static str,
    hooks: Vec<PreCommitHook<'a>>,
}

#[derive(Debug, Serialize)]
struct PreCommitHook<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    entry: &'a str,
    language: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    types: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<String>,
}

impl<'a> PreCommitHook<'a> {
    fn from_spec(hook: &'a HookSpec) -> Result<Self> {
        let excludes: Vec<&str> = hook.excluded_paths().iter().map(String::as_str).collect();
        let exclude = exclude_regex(&excludes)
            .with_context(|| format!("Failed to translate excludes of hook '{}'", hook.id()))?;

        Ok(Self {
            id: hook.id(),
            name: hook.display_name(),
            description: Some(hook.description()).filter(|d| !d.is_empty()),
            entry: hook.entry_point(),
            language: "system",
            types: hook.file_types().iter().map(String::as_str).collect(),
            exclude,
        })
    }
}

/// Render a `.pre-commit-config.yaml` document for the enabled hooks.
pub fn pre_commit_config(registry: &Registry) -> Result<String> {
    let hooks = registry
        .enabled()
        .map(PreCommitHook::from_spec)
        .collect::<Result<Vec<_>>>()?;

    let config = PreCommitConfig {
        repos: vec![PreCommitRepo {
            repo: "local",
            hooks,
        }],
    };

    serde_yml::to_string(&config).context("Failed to serialize pre-commit configuration")
}

/// Export the registry in the given format.
pub fn export_registry(registry: &Registry, format: ExportFormat) -> Result<String> {
    let output = match format {
        ExportFormat::Json => serde_json::to_string_pretty(registry)?,
        ExportFormat::Yaml => serde_yml::to_string(registry)?,
        ExportFormat::Toml => toml::to_string_pretty(registry)?,
        ExportFormat::PreCommit => pre_commit_config(registry)?,
    };
    Ok(output)
}
