//! Built-in hook table
//!
//! The static list of checks the registry knows about. Entry points are
//! templates so that the Rust hooks can pick up the configured `cargo` and
//! `rustfmt` binaries without the registry reading any ambient state.

use crate::toolchain::RustTools;

/// How a hook's entry point is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTemplate {
    /// An external binary referenced by name, used verbatim
    Command(&'static str),
    /// A Rust tooling command line; `{cargo}` and `{rustfmt}` are replaced
    /// with the configured binaries
    Rust(&'static str),
    /// A check implemented by this crate, run as `envguard check <name> --`
    /// so that file names starting with `-` stay file names
    Builtin(&'static str),
}

impl EntryTemplate {
    pub fn render(&self, rust: &RustTools) -> String {
        match self {
            EntryTemplate::Command(command) => (*command).to_string(),
            EntryTemplate::Rust(template) => template
                .replace("{cargo}", &rust.cargo)
                .replace("{rustfmt}", &rust.rustfmt),
            EntryTemplate::Builtin(check) => {
                format!("{} check {} --", env!("CARGO_PKG_NAME"), check)
            }
        }
    }
}

/// A catalog row before defaults are merged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub types: &'static [&'static str],
    pub entry: EntryTemplate,
}

pub const CATALOG: &[HookDefinition] = &[
    HookDefinition {
        id: "check-added-large-files",
        name: "check for added large files",
        description: "Prevent giant files from being committed.",
        types: &[],
        entry: EntryTemplate::Command("check-added-large-files"),
    },
    HookDefinition {
        id: "check-merge-conflicts",
        name: "check for merge conflicts",
        description: "Check for files that contain merge conflict strings.",
        types: &["text"],
        entry: EntryTemplate::Command("check-merge-conflict"),
    },
    HookDefinition {
        id: "clang-format",
        name: "clang-format",
        description: "Format C/C++ sources with the project's .clang-format style.",
        types: &["c", "c++"],
        entry: EntryTemplate::Command("clang-format -style=file -i"),
    },
    HookDefinition {
        id: "end-of-file-fixer",
        name: "fix end of files",
        description: "Ensure files end in exactly one newline.",
        types: &["text"],
        entry: EntryTemplate::Command("end-of-file-fixer"),
    },
    HookDefinition {
        id: "forbid-binary",
        name: "forbid binary files",
        description: "Reject commits that add binary files.",
        types: &["binary"],
        entry: EntryTemplate::Builtin("forbid-binary"),
    },
    HookDefinition {
        id: "nixpkgs-fmt",
        name: "nixpkgs-fmt",
        description: "Nix code formatter for nixpkgs.",
        types: &["nix"],
        entry: EntryTemplate::Command("nixpkgs-fmt"),
    },
    HookDefinition {
        id: "rustfmt",
        name: "rustfmt",
        description: "Check Rust formatting with the configured toolchain.",
        types: &["rust"],
        entry: EntryTemplate::Rust("env RUSTFMT={rustfmt} {cargo} fmt -- --check"),
    },
    HookDefinition {
        id: "shellcheck",
        name: "shellcheck",
        description: "Static analysis for shell scripts.",
        types: &["shell"],
        entry: EntryTemplate::Command("shellcheck"),
    },
    HookDefinition {
        id: "shfmt",
        name: "shfmt",
        description: "",
        types: &["shell"],
        entry: EntryTemplate::Command("shfmt -w -s"),
    },
    HookDefinition {
        id: "trim-trailing-whitespace",
        name: "trim trailing whitespace",
        description: "Trim trailing whitespace.",
        types: &["text"],
        entry: EntryTemplate::Command("trailing-whitespace-fixer"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|hook| hook.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_builtin_entry_runs_this_binary() {
        let entry = EntryTemplate::Builtin("forbid-binary").render(&RustTools::default());
        assert_eq!(entry, "envguard check forbid-binary --");
    }

    #[test]
    fn test_rust_entry_uses_configured_binaries() {
        let rust = RustTools {
            cargo: "/nix/store/abc-cargo/bin/cargo".to_string(),
            rustfmt: "/nix/store/def-rustfmt/bin/rustfmt".to_string(),
        };
        let entry = EntryTemplate::Rust("env RUSTFMT={rustfmt} {cargo} fmt -- --check").render(&rust);
        assert_eq!(
            entry,
            "env RUSTFMT=/nix/store/def-rustfmt/bin/rustfmt /nix/store/abc-cargo/bin/cargo fmt -- --check"
        );
    }

    #[test]
    fn test_command_entry_is_verbatim() {
        let entry = EntryTemplate::Command("shfmt -w -s").render(&RustTools::default());
        assert_eq!(entry, "shfmt -w -s");
    }
}
