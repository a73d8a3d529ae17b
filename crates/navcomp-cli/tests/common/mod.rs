#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/navcomp_minimal.json")
        .canonicalize()
        .expect("fixture catalog present")
}

/// `navcomp` pointed at the fixture catalog with a throwaway route cache.
pub fn prepare_command() -> (Command, TempDir) {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("navcomp");
    cmd.env("RUST_LOG", "error")
        .env("NAVCOMP_CATALOG", fixture_path())
        .env("NAVCOMP_ROUTE_CACHE", temp_dir.path().join("routecache.json"));
    (cmd, temp_dir)
}
