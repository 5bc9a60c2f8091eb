use super::catalog::{CATALOG, HookDefinition};
use super::{HookDefaults, HookOverride, HookSpec};
use crate::shared::glob::compile_pattern;
use serde::Serialize;
use std::collections::btree_map::{self, Entry};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors raised while building the registry. All of them mean the hook
/// table or its configuration is malformed and must be fixed by hand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate hook id '{0}' in hook table")]
    DuplicateId(String),

    #[error("override given for unknown hook '{0}'")]
    UnknownOverride(String),

    #[error("invalid exclude pattern '{pattern}' for hook '{hook}': {message}")]
    InvalidPattern {
        hook: String,
        pattern: String,
        message: String,
    },
}

/// Hook identifier to [`HookSpec`] mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    hooks: BTreeMap<String, HookSpec>,
}

impl Registry {
    pub fn get(&self, id: &str) -> Option<&HookSpec> {
        self.hooks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.hooks.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, HookSpec> {
        self.hooks.values()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &HookSpec> {
        self.hooks.values().filter(|hook| hook.enabled())
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a HookSpec;
    type IntoIter = btree_map::Values<'a, String, HookSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the registry from the built-in catalog.
pub fn build_registry(defaults: &HookDefaults) -> Result<Registry, RegistryError> {
    build_registry_from(CATALOG, defaults)
}

/// Build a registry from an arbitrary hook table, merging each row over
/// `defaults`.
pub fn build_registry_from(
    table: &[HookDefinition],
    defaults: &HookDefaults,
) -> Result<Registry, RegistryError> {
    let mut hooks = BTreeMap::new();

    for definition in table {
        let spec = merge(definition, defaults.overrides.get(definition.id), defaults)?;
        match hooks.entry(definition.id.to_string()) {
            Entry::Occupied(entry) => return Err(RegistryError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(spec);
            }
        }
    }

    if let Some(unknown) = defaults.overrides.keys().find(|id| !hooks.contains_key(*id)) {
        return Err(RegistryError::UnknownOverride(unknown.clone()));
    }

    tracing::debug!(
        hooks = hooks.len(),
        default_excludes = defaults.excluded_paths.len(),
        "built hook registry"
    );

    Ok(Registry { hooks })
}

fn merge(
    definition: &HookDefinition,
    hook_override: Option<&HookOverride>,
    defaults: &HookDefaults,
) -> Result<HookSpec, RegistryError> {
    let excluded_paths: BTreeSet<String> =
        match hook_override.and_then(|o| o.excludes.as_ref()) {
            Some(excludes) => excludes.iter().cloned().collect(),
            None => defaults.excluded_paths.clone(),
        };

    for pattern in &excluded_paths {
        compile_pattern(pattern).map_err(|err| RegistryError::InvalidPattern {
            hook: definition.id.to_string(),
            pattern: pattern.clone(),
            message: err.kind().to_string(),
        })?;
    }

    let enabled = hook_override.and_then(|o| o.enable).unwrap_or(true);
    tracing::trace!(hook = definition.id, enabled, "merged hook definition");

    Ok(HookSpec {
        id: definition.id.to_string(),
        enabled,
        display_name: definition.name.to_string(),
        description: definition.description.to_string(),
        file_types: definition.types.iter().map(|t| t.to_string()).collect(),
        excluded_paths,
        entry_point: definition.entry.render(&defaults.rust),
    })
}
