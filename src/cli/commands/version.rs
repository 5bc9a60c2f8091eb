//! Version command implementation

use crate::cli::Output;
use crate::toolchain::Platform;
use anyhow::Result;
use std::process::ExitCode;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<ExitCode> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");
    let repository = env!("CARGO_PKG_REPOSITORY");

    output.header("🚀 envguard Version Information");
    output.status_indicator("VERSION", &format!("{} v{}", name, version), true);

    output.category("About");
    output.key_value("Description:", description, false);
    output.key_value("Repository:", repository, false);

    output.category("Build Information");
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value("Host platform:", Platform::detect().as_str(), false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    output.blank_line();
    Ok(ExitCode::SUCCESS)
}
