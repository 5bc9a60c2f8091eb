//! Configuration command implementations
//!
//! Commands for inspecting and validating envguard configuration.

use crate::cli::ConfigCommands;
use crate::cli::Output;
use crate::config::{ConfigFormat, EnvguardConfig};
use crate::hooks::build_registry;
use crate::toolchain::{Platform, select_toolchain_with};
use anyhow::Result;
use std::process::ExitCode;

/// Execute config commands
pub async fn execute(
    cmd: ConfigCommands,
    custom_config: Option<&str>,
    output: &Output,
) -> Result<ExitCode> {
    match cmd {
        ConfigCommands::Show { format } => show(custom_config, &format, output),
        ConfigCommands::Validate => validate(custom_config, output),
    }
}

fn show(custom_config: Option<&str>, format: &str, output: &Output) -> Result<ExitCode> {
    let format: ConfigFormat = format.parse()?;
    let config = EnvguardConfig::load(custom_config)?;
    output.data(&config.export_highlighted(format)?);
    Ok(ExitCode::SUCCESS)
}

fn validate(custom_config: Option<&str>, output: &Output) -> Result<ExitCode> {
    output.header("✅ Validating Configuration");

    let config = match EnvguardConfig::load(custom_config) {
        Ok(config) => config,
        Err(err) => {
            output.error("Configuration could not be loaded");
            output.indent(&format!("Error: {}", err));
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut valid = true;

    match build_registry(&config.hook_defaults()) {
        Ok(registry) => {
            output.success(&format!(
                "Hook registry: {} hooks ({} enabled)",
                registry.len(),
                registry.enabled().count()
            ));
        }
        Err(err) => {
            valid = false;
            output.error("Hook registry is invalid");
            output.indent(&format!("Error: {}", err));
        }
    }

    let platform = Platform::detect();
    match select_toolchain_with(&platform, &config.baseline(), config.platform_policy()) {
        Ok(spec) => {
            output.success(&format!(
                "Toolchain for {}: {} + {} with {} linker",
                spec.platform(),
                spec.compiler_frontend(),
                spec.standard_library(),
                spec.linker()
            ));
        }
        Err(err) => {
            valid = false;
            output.error("No toolchain for this host");
            output.indent(&format!("Error: {}", err));
        }
    }

    if valid {
        output.success("Configuration is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
