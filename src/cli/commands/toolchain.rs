//! Toolchain command implementations

use crate::cli::Output;
use crate::cli::ToolchainCommands;
use crate::config::EnvguardConfig;
use crate::toolchain::{Platform, ToolchainSpec, select_toolchain_with};
use anyhow::Result;
use std::process::ExitCode;

/// Execute toolchain commands
pub async fn execute(
    cmd: ToolchainCommands,
    custom_config: Option<&str>,
    output: &Output,
) -> Result<ExitCode> {
    let config = EnvguardConfig::load(custom_config)?;

    match cmd {
        ToolchainCommands::Show { platform, format } => {
            let spec = select(&config, platform)?;
            match format.to_lowercase().as_str() {
                "text" => show(&spec, output),
                "json" => output.data(&serde_json::to_string_pretty(&spec)?),
                _ => anyhow::bail!("Unsupported format: {}. Use text or json", format),
            }
        }
        ToolchainCommands::Env { platform } => {
            let spec = select(&config, platform)?;
            for (key, value) in spec.environment(&config.rust) {
                output.data(&format!("{key}={value}"));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn select(config: &EnvguardConfig, platform: Option<Platform>) -> Result<ToolchainSpec> {
    let platform = platform.unwrap_or_else(Platform::detect);
    let spec = select_toolchain_with(&platform, &config.baseline(), config.platform_policy())?;
    Ok(spec)
}

fn show(spec: &ToolchainSpec, output: &Output) {
    output.header("🔧 Selected Toolchain");
    output.key_value("Platform:", spec.platform().as_str(), false);
    output.key_value("Compiler frontend:", spec.compiler_frontend(), true);
    output.key_value("C++ driver:", &spec.cxx_driver(), false);
    output.key_value("Standard library:", spec.standard_library(), true);
    output.key_value("Linker:", spec.linker().as_str(), true);
}
