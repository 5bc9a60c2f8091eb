//! Checks implemented by envguard itself
//!
//! These back the registry entries whose entry point is
//! `envguard check <name>`. The hook runner invokes them like any external
//! program: matched file paths as arguments, pass/fail as the exit code.

pub mod forbid_binary;

use std::process::ExitCode;

/// Outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
}

impl CheckStatus {
    pub fn code(self) -> u8 {
        match self {
            CheckStatus::Passed => 0,
            CheckStatus::Failed => 1,
        }
    }
}

impl From<CheckStatus> for ExitCode {
    fn from(status: CheckStatus) -> Self {
        ExitCode::from(status.code())
    }
}
