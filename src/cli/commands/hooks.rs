//! Hook registry command implementations
//!
//! Lists, shows and exports the registry. Listing reports whether each
//! entry point's program is on PATH; that is informational only, the
//! registry itself never checks.

use crate::cli::HooksCommands;
use crate::cli::Output;
use crate::config::EnvguardConfig;
use crate::hooks::{ExportFormat, HookSpec, Registry, build_registry, export_registry};
use crate::utils::{command_exists, truncate_string};
use anyhow::{Context, Result};
use console::style;
use std::process::ExitCode;

/// Execute hooks commands
pub async fn execute(
    cmd: HooksCommands,
    custom_config: Option<&str>,
    output: &Output,
) -> Result<ExitCode> {
    let config = EnvguardConfig::load(custom_config)?;
    let registry = build_registry(&config.hook_defaults()).context("Hook registry is invalid")?;

    match cmd {
        HooksCommands::List => list(&registry, output),
        HooksCommands::Show { id } => show(&registry, &id, output),
        HooksCommands::Export { format } => export(&registry, &format, output),
    }
}

fn list(registry: &Registry, output: &Output) -> Result<ExitCode> {
    output.header("📋 Registered Hooks");
    output.verbose(&format!("{} hooks in registry", registry.len()));

    for hook in registry {
        let types = join_or(hook.file_types().iter(), "all files");
        if hook.enabled() {
            output.success(&format!("{} {}", hook.id(), style(format!("({types})")).dim()));
        } else {
            output.info(&format!("○ {} (disabled)", hook.id()));
        }
        output.indent(&truncate_string(hook.entry_point(), 72));

        if hook.enabled() && !command_exists(hook.program()) {
            output.warning(&format!("'{}' not found on PATH", hook.program()));
        }
    }

    output.blank_line();
    output.table_row(
        "Enabled",
        &format!("{} of {}", registry.enabled().count(), registry.len()),
    );
    Ok(ExitCode::SUCCESS)
}

fn show(registry: &Registry, id: &str, output: &Output) -> Result<ExitCode> {
    let Some(hook) = registry.get(id) else {
        let known: Vec<&str> = registry.ids().collect();
        anyhow::bail!("Unknown hook: {}. Known hooks: {}", id, known.join(", "));
    };

    print_hook(hook, output);
    Ok(ExitCode::SUCCESS)
}

fn print_hook(hook: &HookSpec, output: &Output) {
    output.header(&format!("🪝 {}", hook.display_name()));
    output.key_value("Id:", hook.id(), true);
    output.key_value("Enabled:", &hook.enabled().to_string(), hook.enabled());
    if !hook.description().is_empty() {
        output.key_value("Description:", hook.description(), false);
    }
    output.key_value(
        "File types:",
        &join_or(hook.file_types().iter(), "all files"),
        false,
    );
    output.key_value(
        "Excluded paths:",
        &join_or(hook.excluded_paths().iter(), "none"),
        false,
    );
    output.key_value("Entry point:", hook.entry_point(), false);
}

fn export(registry: &Registry, format: &str, output: &Output) -> Result<ExitCode> {
    let format: ExportFormat = format.parse()?;
    output.data(&export_registry(registry, format)?);
    Ok(ExitCode::SUCCESS)
}

fn join_or<'a>(items: impl Iterator<Item = &'a String>, empty: &str) -> String {
    let joined: Vec<&str> = items.map(String::as_str).collect();
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined.join(", ")
    }
}
