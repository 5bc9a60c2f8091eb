use super::smart_load;
use super::{ConfigError, EnvguardConfig};
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};
use std::path::{Path, PathBuf};

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "ENVGUARD_";

/// Where configuration layers are read from.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Directory holding the user config (`config.{toml,json,yaml,yml}`)
    pub user_dir: Option<PathBuf>,
    /// Directory holding the repository config (`envguard.{toml,json,yaml,yml}`)
    pub repo_dir: PathBuf,
    /// Explicit config file; must exist when given
    pub custom: Option<PathBuf>,
    /// Prefix of environment variables; `__` separates nested keys
    pub env_prefix: String,
}

impl ConfigSources {
    /// Standard locations: `$HOME/.config/envguard` and the current directory
    pub fn discover(custom: Option<&str>) -> Self {
        Self {
            user_dir: std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config").join("envguard")),
            repo_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            custom: custom.map(PathBuf::from),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Build the layered figment, lowest priority first.
    pub fn figment(&self) -> Result<Figment, ConfigError> {
        tracing::trace!(sources = ?self, "CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(user_dir) = &self.user_dir {
            figment = merge_all_formats(figment, user_dir, "config");
        }
        figment = merge_all_formats(figment, &self.repo_dir, "envguard");

        if let Some(custom) = &self.custom {
            if !custom.is_file() {
                return Err(ConfigError::Missing(custom.clone()));
            }
            tracing::debug!("CONFIG LOAD: Using custom config {}", custom.display());
            figment = figment.merge(smart_load::auto(custom));
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed(&self.env_prefix).split("__")))
    }
}

fn merge_all_formats(figment: Figment, dir: &Path, stem: &str) -> Figment {
    figment
        .merge(Toml::file(dir.join(format!("{stem}.toml"))))
        .merge(Json::file(dir.join(format!("{stem}.json"))))
        .merge(Yaml::file(dir.join(format!("{stem}.yaml"))))
        .merge(Yaml::file(dir.join(format!("{stem}.yml"))))
}

impl EnvguardConfig {
    /// Load configuration from the standard locations
    pub fn load(custom_config: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_from(&ConfigSources::discover(custom_config))
    }

    pub fn load_from(sources: &ConfigSources) -> Result<Self, ConfigError> {
        Self::from_figment(&sources.figment()?)
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: EnvguardConfig = figment.extract()?;
        tracing::debug!(
            excludes = config.hooks.excludes.len(),
            overrides = config.hooks.overrides.len(),
            frontend = %config.toolchain.frontend,
            "CONFIG LOAD: Done"
        );
        Ok(config)
    }

    /// Built-in defaults only
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_figment(&Figment::from(Toml::string(DEFAULT_CONFIG)))
    }
}
