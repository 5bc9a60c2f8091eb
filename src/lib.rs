//! # envguard
//!
//! Declarative configuration for a development environment:
//!
//! - a **hook registry**: the pre-commit checks a project runs, each with
//!   its enable flag, file types, excluded paths and entry point, built from
//!   a static catalog merged with explicit defaults;
//! - a **toolchain selector**: the compiler frontend, C++ standard library
//!   and linker for the host platform, composed into one immutable value.
//!
//! Both are pure builders. Running hooks and compiling code is left to the
//! hook runner and the build system that consume their output.
//!
//! ```
//! use envguard::hooks::{HookDefaults, build_registry};
//! use envguard::toolchain::{Baseline, Linker, Platform, select_toolchain};
//!
//! let registry = build_registry(&HookDefaults::with_excludes(["vendor/**"])).unwrap();
//! assert!(registry.contains("forbid-binary"));
//!
//! let spec = select_toolchain(&Platform::Darwin, &Baseline::llvm());
//! assert_eq!(spec.linker(), Linker::Default);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod hooks;
pub mod shared;
pub mod toolchain;
pub mod utils;

pub use cli::{Cli, Output};
pub use config::EnvguardConfig;

/// Result type alias for envguard operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
