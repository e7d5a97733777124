//! End-to-end tests for the `srcset-sizes` binary.
//!
//! Each test runs the built binary in a fresh temp directory so the default
//! `./sizes.toml` lookup is isolated.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_srcset-sizes"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run srcset-sizes")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("stdout is not JSON")
}

// ---------------------------------------------------------------------------
// Config-driven commands
// ---------------------------------------------------------------------------

#[test]
fn plan_uses_stock_defaults_without_config() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), &["plan"]));
    assert!(out.contains("Sizes\n    100vw\n"));
    assert!(out.contains("005 2560px"));
    assert!(out.ends_with("5 widths from 5 breakpoints\n"));
}

#[test]
fn plan_reads_sizes_toml_from_cwd() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("sizes.toml"),
        r#"
[sizes]
s = "50vw"
l = "320px"

[widths]
densities = [2.0]
"#,
    )
    .unwrap();

    let value = json(&run(tmp.path(), &["plan", "--json"]));
    assert_eq!(
        value["sizes"],
        serde_json::json!(["(min-width:1025px) 320px", "50vw"])
    );
    assert_eq!(value["base_widths"], serde_json::json!([320, 512]));
    assert_eq!(value["widths"], serde_json::json!([320, 512, 640, 1024]));
}

#[test]
fn explicit_config_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hero.toml");
    std::fs::write(&path, "[sizes]\ns = \"95vw\"\nl = \"45vw\"\n").unwrap();

    let value = json(&run(
        tmp.path(),
        &["srcset", "--config", path.to_str().unwrap(), "--json"],
    ));
    assert_eq!(value, serde_json::json!([576, 608, 864, 973, 1152]));
}

#[test]
fn sizes_lists_largest_first() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("sizes.toml"),
        "[sizes]\ns = \"100vw\"\nm = \"50vw\"\n",
    )
    .unwrap();
    let out = stdout(&run(tmp.path(), &["sizes"]));
    assert_eq!(out, "(min-width:641px) 50vw\n100vw\n");
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("sizes.toml"), "[sizes]\ns = \"30vh\"\n").unwrap();
    let output = run(tmp.path(), &["plan"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("vh unit is not supported"));
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["plan", "--config", "nope.toml"]);
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// Width commands
// ---------------------------------------------------------------------------

#[test]
fn sample_command() {
    let tmp = TempDir::new().unwrap();
    let args = ["sample", "--max", "5", "--json", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
    assert_eq!(json(&run(tmp.path(), &args)), serde_json::json!([2, 4, 6, 8, 10]));
}

#[test]
fn sample_too_many_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["sample", "--max", "3", "100", "200"]);
    assert!(!output.status.success());
}

#[test]
fn interval_command() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(
        tmp.path(),
        &["interval", "--min", "100", "100", "150", "200", "350", "400"],
    ));
    assert_eq!(out, "001 100px\n002 200px\n003 400px\n");
}

#[test]
fn interval_rejects_zero_gap() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["interval", "--min", "0", "100", "100", "50"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn retina_command_keeps_insertion_order() {
    let tmp = TempDir::new().unwrap();
    let value = json(&run(
        tmp.path(),
        &["retina", "--density", "2", "--density", "3", "--density", "4", "--json", "3"],
    ));
    assert_eq!(value, serde_json::json!([3, 6, 9, 12]));
}

#[test]
fn retina_rejects_non_positive_density() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["retina", "--density", "0", "100"]);
    assert!(!output.status.success());
}

#[test]
fn gen_config_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let generated = stdout(&run(tmp.path(), &["gen-config"]));
    std::fs::write(tmp.path().join("sizes.toml"), generated).unwrap();
    let value = json(&run(tmp.path(), &["plan", "--json"]));
    assert_eq!(value["sizes"], serde_json::json!(["100vw"]));
}
