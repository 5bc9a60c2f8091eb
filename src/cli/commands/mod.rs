//! Command implementations for envguard CLI
//!
//! Each command is organized into its own module.

pub mod check;
pub mod config;
pub mod hooks;
pub mod toolchain;
pub mod version;
