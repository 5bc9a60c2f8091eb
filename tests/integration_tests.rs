//! Integration tests for envguard CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command running in an empty directory so no repository config leaks in
fn envguard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("envguard").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hooks"))
        .stdout(predicate::str::contains("toolchain"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envguard"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_forbid_binary_without_files_passes_silently() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["check", "forbid-binary"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_forbid_binary_rejects_one_file() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["check", "forbid-binary", "a.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Found binary file: a.png"));
}

#[test]
fn test_forbid_binary_reports_each_file() {
    let dir = TempDir::new().unwrap();
    let assert = envguard(&dir)
        .args(["check", "forbid-binary", "a.png", "b.jpg"])
        .assert()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[ERROR] Found binary file: a.png"));
    assert!(lines[1].contains("[ERROR] Found binary file: b.jpg"));
}

#[test]
fn test_forbid_binary_takes_dash_names_as_files() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["check", "forbid-binary", "-logo.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Found binary file: -logo.png"));
}

#[test]
fn test_forbid_binary_does_not_read_flags_from_file_names() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["check", "forbid-binary", "-q"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Found binary file: -q"));

    let assert = envguard(&dir)
        .args(["check", "forbid-binary", "a.png", "-q", "-v"])
        .assert()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Found binary file: -q"));
    assert!(lines[2].contains("Found binary file: -v"));
}

#[test]
fn test_forbid_binary_entry_point_separates_files() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["check", "forbid-binary", "--", "--config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Found binary file: --config"));
}

#[test]
fn test_forbid_binary_stderr_has_no_log_lines() {
    let dir = TempDir::new().unwrap();
    let assert = envguard(&dir)
        .env("RUST_LOG", "trace")
        .args(["check", "forbid-binary", "a.png"])
        .assert()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("[ERROR] Found binary file: a.png"));
}

/// The check must not depend on configuration being loadable
#[test]
fn test_forbid_binary_ignores_broken_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("envguard.toml"), "[toolchain\nbroken").unwrap();

    envguard(&dir)
        .args(["check", "forbid-binary"])
        .assert()
        .code(0);
}

#[test]
fn test_toolchain_env_on_darwin() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["toolchain", "env", "--platform", "darwin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CC=clang\n"))
        .stdout(predicate::str::contains("CXXFLAGS=-stdlib=libc++"))
        .stdout(predicate::str::contains("LDFLAGS").not());
}

#[test]
fn test_toolchain_env_on_linux() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["toolchain", "env", "--platform", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LDFLAGS=-fuse-ld=mold"));
}

#[test]
fn test_toolchain_show_json() {
    let dir = TempDir::new().unwrap();
    let assert = envguard(&dir)
        .args(["toolchain", "show", "--platform", "darwin", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["compiler_frontend"], "clang");
    assert_eq!(value["standard_library"], "libc++");
    assert_eq!(value["linker"], "default");
    assert_eq!(value["platform"], "darwin");
}

#[test]
fn test_unknown_platform_rejected_by_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("envguard.toml"),
        "[toolchain]\nunknown_platform = \"reject\"\n",
    )
    .unwrap();

    envguard(&dir)
        .args(["toolchain", "show", "--platform", "plan9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported platform 'plan9'"));
}

#[test]
fn test_unknown_platform_is_linux_like_by_default() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["toolchain", "env", "--platform", "plan9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LDFLAGS=-fuse-ld=mold"));
}

#[test]
fn test_hooks_export_pre_commit() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("envguard.toml"),
        r#"
[hooks]
excludes = ["vendor/**"]

[hooks.overrides.nixpkgs-fmt]
enable = false
"#,
    )
    .unwrap();

    envguard(&dir)
        .args(["hooks", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo: local"))
        .stdout(predicate::str::contains("entry: envguard check forbid-binary"))
        .stdout(predicate::str::contains("exclude:"))
        .stdout(predicate::str::contains("id: nixpkgs-fmt").not());
}

#[test]
fn test_hooks_export_keeps_non_ascii_excludes() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("envguard.toml"),
        "[hooks]\nexcludes = [\"données/**\"]\n",
    )
    .unwrap();

    envguard(&dir)
        .args(["hooks", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("données/"))
        .stdout(predicate::str::contains("\\xc3").not());
}

#[test]
fn test_hooks_export_json_uses_custom_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ci.yaml");
    fs::write(&config, "hooks:\n  excludes:\n    - \"*.snap\"\n").unwrap();

    let assert = envguard(&dir)
        .args(["hooks", "export", "--format", "json", "--config"])
        .arg(&config)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["shellcheck"]["excluded_paths"][0], "*.snap");
    assert_eq!(value["forbid-binary"]["file_types"][0], "binary");
}

#[test]
fn test_hooks_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["hooks", "show", "black"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown hook: black"));
}

#[test]
fn test_hooks_show() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["hooks", "show", "clang-format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clang-format -style=file -i"));
}

#[test]
fn test_config_validate_reports_unknown_override() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("envguard.toml"),
        "[hooks.overrides.black]\nenable = false\n",
    )
    .unwrap();

    envguard(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hook registry is invalid"));
}

#[test]
fn test_config_validate_defaults() {
    let dir = TempDir::new().unwrap();
    envguard(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_show_merges_repo_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("envguard.toml"),
        "[rust]\ncargo = \"/opt/rust/bin/cargo\"\n",
    )
    .unwrap();

    envguard(&dir)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/rust/bin/cargo"));
}
