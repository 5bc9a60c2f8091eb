//! Built-in check entry points
//!
//! Invoked by the hook runner with matched files as arguments. Output and
//! exit code follow the check's contract exactly, so nothing else is
//! printed here.

use crate::checks::forbid_binary;
use crate::cli::CheckCommands;
use anyhow::Result;
use std::io;
use std::process::ExitCode;

/// Execute check commands
pub async fn execute(cmd: CheckCommands) -> Result<ExitCode> {
    match cmd {
        CheckCommands::ForbidBinary { files } => {
            let mut stderr = io::stderr().lock();
            let status = forbid_binary::run(&files, &mut stderr, console::colors_enabled_stderr())?;
            Ok(status.into())
        }
    }
}
