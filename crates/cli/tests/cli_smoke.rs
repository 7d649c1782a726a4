//! CLI smoke tests for gnbuild.
//!
//! These tests check argument handling, configuration failures and dry runs.
//! Nothing here runs a real tool: the fake checkout only contains empty files.

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG_EXIT_CODE: i32 = 78;

/// Get a Command for the gnbuild binary.
fn gnbuild_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("gnbuild");
  cmd.env_remove("V8_USE_GOMA").env_remove("RUST_LOG");
  cmd
}

/// Create a temp V8 checkout with empty GN and Ninja files for a Linux host.
fn fake_checkout() -> TempDir {
  let temp = TempDir::new().unwrap();
  touch(&temp.path().join("buildtools/linux64/gn"));
  touch(&temp.path().join("_depot_tools/ninja"));
  temp
}

fn touch(path: &Path) {
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(path, "").unwrap();
}

/// A command with every required option set against `checkout`.
fn build_cmd(checkout: &TempDir, mode: &str, host_os: &str) -> Command {
  let mut cmd = gnbuild_cmd();
  cmd
    .arg("--mode")
    .arg(mode)
    .arg("--v8-path")
    .arg(checkout.path())
    .arg("--build-path")
    .arg(checkout.path().join("out"))
    .arg("--host-os")
    .arg(host_os);
  cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  gnbuild_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"))
    .stdout(predicate::str::contains("--flag"))
    .stdout(predicate::str::contains("V8_USE_GOMA"));
}

#[test]
fn version_flag_works() {
  gnbuild_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("gnbuild"));
}

#[test]
fn missing_required_options_is_a_usage_error() {
  gnbuild_cmd().arg("--mode").arg("Release").assert().code(2);
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn missing_target_os_fails_before_running_tools() {
  let checkout = fake_checkout();

  build_cmd(&checkout, "Release", "linux")
    .arg("--flag")
    .arg("target_cpu=\"x64\"")
    .assert()
    .code(CONFIG_EXIT_CODE)
    .stderr(predicate::str::contains("no target_os was set"));
}

#[test]
fn unsupported_host_fails_with_config_code() {
  let checkout = fake_checkout();

  build_cmd(&checkout, "Release", "freebsd")
    .arg("--flag")
    .arg("target_os=\"linux\"")
    .assert()
    .code(CONFIG_EXIT_CODE)
    .stderr(predicate::str::contains("not supported"));
}

#[test]
fn invalid_mode_fails_with_config_code() {
  let checkout = fake_checkout();

  build_cmd(&checkout, "release", "linux")
    .arg("--flag")
    .arg("target_os=\"linux\"")
    .assert()
    .code(CONFIG_EXIT_CODE)
    .stderr(predicate::str::contains("invalid build mode"));
}

#[test]
fn missing_source_root_fails_with_config_code() {
  let temp = TempDir::new().unwrap();

  gnbuild_cmd()
    .args(["--mode", "Debug", "--host-os", "linux", "--flag", "target_os=\"linux\""])
    .arg("--v8-path")
    .arg(temp.path().join("no-v8-here"))
    .arg("--build-path")
    .arg(temp.path().join("out"))
    .assert()
    .code(CONFIG_EXIT_CODE);
}

#[test]
fn missing_toolchain_fails_with_config_code() {
  let empty = TempDir::new().unwrap();

  build_cmd(&empty, "Release", "linux")
    .arg("--flag")
    .arg("target_os=\"linux\"")
    .assert()
    .code(CONFIG_EXIT_CODE)
    .stderr(predicate::str::contains("gn not found"));
}

// =============================================================================
// Dry run
// =============================================================================

#[test]
fn dry_run_prints_both_commands() {
  let checkout = fake_checkout();

  build_cmd(&checkout, "Release", "linux")
    .args(["--flag", "target_os=\"linux\"", "--flag", "v8_enable_disassembler=0"])
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run"))
    .stdout(predicate::str::contains(" gen "))
    .stdout(predicate::str::contains("v8_enable_disassembler=false"))
    .stdout(predicate::str::contains("use_sysroot=false"))
    .stdout(predicate::str::contains("-v -C"))
    .stdout(predicate::str::contains("v8_monolith"))
    .stdout(predicate::str::contains("use_goma").not());
}

#[test]
fn underscore_option_names_are_accepted() {
  let checkout = fake_checkout();

  gnbuild_cmd()
    .args(["--mode", "Debug", "--host_os", "linux", "--flag", "target_os=\"linux\""])
    .arg("--v8_path")
    .arg(checkout.path())
    .arg("--build_path")
    .arg(checkout.path().join("out"))
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("is_debug=true"));
}

#[test]
fn dry_run_json_reports_goma_flags() {
  let checkout = fake_checkout();

  let output = build_cmd(&checkout, "Release", "linux")
    .args(["--flag", "target_os=\"linux\"", "--dry-run", "--output", "json"])
    .env("V8_USE_GOMA", "1")
    .output()
    .unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["executed"], false);

  let gen_args = report["generate"]["args"].as_array().unwrap();
  assert_eq!(gen_args[0], "gen");
  assert!(gen_args[2].as_str().unwrap().ends_with("use_goma=true"));

  let build_args = report["build"]["args"].as_array().unwrap();
  assert_eq!(build_args.last().unwrap(), "-j500");
}

#[test]
fn goma_toggle_needs_literal_one() {
  let checkout = fake_checkout();

  build_cmd(&checkout, "Release", "linux")
    .args(["--flag", "target_os=\"linux\"", "--dry-run"])
    .env("V8_USE_GOMA", "true")
    .assert()
    .success()
    .stdout(predicate::str::contains("use_goma").not())
    .stdout(predicate::str::contains("-j500").not());
}
