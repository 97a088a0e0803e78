//! Integration test helpers for cargo-prepare
//!
//! Tests run the real binary against temp directories containing a manifest,
//! then inspect the file left behind.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A minimal but realistic package manifest.
#[allow(unused)]
pub const BASIC_MANIFEST: &str = r#"[package]
name = "demo"
version = "0.1.0"
edition = "2021"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
"#;

/// Creates a temp directory holding the given Cargo.toml.
#[allow(unused)]
pub fn create_package(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), manifest).unwrap();
    temp
}

/// Runs `cargo-prepare prepare <extra_args>` in `dir`.
#[allow(unused)]
pub fn run_prepare(dir: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("cargo-prepare");
    cmd.arg("prepare").args(extra_args).current_dir(dir);
    cmd.assert()
}

#[allow(unused)]
pub fn read_manifest(dir: &Path) -> String {
    fs::read_to_string(dir.join("Cargo.toml")).unwrap()
}
