//! Toolchain selection
//!
//! Composes the single [`ToolchainSpec`] a build uses: a compiler frontend and
//! C++ standard library taken from a [`Baseline`], plus a linker chosen from
//! the host [`Platform`]. The result is built in one step and never patched
//! afterwards, so a half-initialised combination can't be observed.
//!
//! [`RustTools`] is the separate override for the Rust build tooling
//! (`cargo` and `rustfmt` binaries). It does not take part in linker
//! selection; it is layered next to the toolchain when rendering an
//! environment and is read by the Rust hooks.

mod platform;
mod select;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use platform::{Platform, PlatformPolicy};
pub use select::{ToolchainError, select_toolchain, select_toolchain_with};

/// Compiler frontend and standard library pair produced by the environment
/// builder. Treated as an opaque input to selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub compiler_frontend: String,
    pub standard_library: String,
}

impl Baseline {
    pub fn new(compiler_frontend: impl Into<String>, standard_library: impl Into<String>) -> Self {
        Self {
            compiler_frontend: compiler_frontend.into(),
            standard_library: standard_library.into(),
        }
    }

    /// LLVM based environment: clang with libc++
    pub fn llvm() -> Self {
        Self::new("clang", "libc++")
    }

    /// Combine the baseline with a linker for a given platform.
    fn compose(&self, linker: Linker, platform: &Platform) -> ToolchainSpec {
        ToolchainSpec {
            compiler_frontend: self.compiler_frontend.clone(),
            standard_library: self.standard_library.clone(),
            linker,
            platform: platform.clone(),
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::llvm()
    }
}

/// Linker choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linker {
    /// Whatever the compiler driver links with when not told otherwise
    Default,
    /// The mold linker; not available on darwin
    Mold,
}

impl Linker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Linker::Default => "default",
            Linker::Mold => "mold",
        }
    }

    /// Whether this linker can be used on the given platform
    pub fn is_supported_on(&self, platform: &Platform) -> bool {
        match self {
            Linker::Default => true,
            Linker::Mold => platform.canonical() != Platform::Darwin,
        }
    }
}

impl fmt::Display for Linker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composed build environment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainSpec {
    compiler_frontend: String,
    standard_library: String,
    linker: Linker,
    platform: Platform,
}

impl ToolchainSpec {
    pub fn compiler_frontend(&self) -> &str {
        &self.compiler_frontend
    }

    pub fn standard_library(&self) -> &str {
        &self.standard_library
    }

    pub fn linker(&self) -> Linker {
        self.linker
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// C++ driver matching the configured C frontend
    pub fn cxx_driver(&self) -> String {
        match self.compiler_frontend.as_str() {
            "clang" => "clang++".to_string(),
            "gcc" => "g++".to_string(),
            other => other.to_string(),
        }
    }

    /// Render the toolchain, plus the Rust tool override, as environment
    /// variables for a build system.
    ///
    /// `LDFLAGS` is only emitted when a non-default linker was selected.
    pub fn environment(&self, rust: &RustTools) -> Vec<(String, String)> {
        let mut vars = vec![
            ("CC".to_string(), self.compiler_frontend.clone()),
            ("CXX".to_string(), self.cxx_driver()),
            (
                "CXXFLAGS".to_string(),
                format!("-stdlib={}", self.standard_library),
            ),
        ];

        if self.linker != Linker::Default {
            vars.push(("LDFLAGS".to_string(), format!("-fuse-ld={}", self.linker)));
        }

        vars.push(("CARGO".to_string(), rust.cargo.clone()));
        vars.push(("RUSTFMT".to_string(), rust.rustfmt.clone()));
        vars
    }
}

/// Binaries used for Rust builds and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RustTools {
    pub cargo: String,
    pub rustfmt: String,
}

impl Default for RustTools {
    fn default() -> Self {
        Self {
            cargo: "cargo".to_string(),
            rustfmt: "rustfmt".to_string(),
        }
    }
}
