use super::{Baseline, Linker, Platform, PlatformPolicy, ToolchainSpec};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolchainError {
    #[error("unsupported platform '{0}': no toolchain is defined for it")]
    UnsupportedPlatform(String),
}

/// Select the toolchain for `platform`.
///
/// Darwin keeps the baseline's default linker since mold does not support
/// it. Every other platform, including unlisted ones, gets mold.
pub fn select_toolchain(platform: &Platform, baseline: &Baseline) -> ToolchainSpec {
    let platform = platform.canonical();
    let linker = match platform {
        Platform::Darwin => Linker::Default,
        Platform::Linux | Platform::Other(_) => Linker::Mold,
    };

    tracing::debug!(
        platform = %platform,
        linker = %linker,
        frontend = %baseline.compiler_frontend,
        stdlib = %baseline.standard_library,
        "selected toolchain"
    );

    baseline.compose(linker, &platform)
}

/// Like [`select_toolchain`], but lets the caller refuse unlisted platforms.
pub fn select_toolchain_with(
    platform: &Platform,
    baseline: &Baseline,
    policy: PlatformPolicy,
) -> Result<ToolchainSpec, ToolchainError> {
    if let (Platform::Other(name), PlatformPolicy::Reject) = (platform.canonical(), policy) {
        return Err(ToolchainError::UnsupportedPlatform(name));
    }
    Ok(select_toolchain(platform, baseline))
}
