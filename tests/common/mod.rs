//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::{NamedTempFile, TempDir};

/// Write `contents` to a fresh temporary file.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// A temporary directory holding `name` with `contents`.
pub fn temp_dir_with(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}

/// Command for the `asciifold` binary, isolated from the user's config.
pub fn asciifold(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_asciifold"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("ASCIIFOLD_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Run the binary with `args` and `stdin`, returning its output.
pub fn run_asciifold(config: &Path, args: &[&str], stdin: &str) -> Output {
    run_asciifold_bytes(config, args, stdin.as_bytes())
}

/// Like [`run_asciifold`] with raw stdin bytes.
pub fn run_asciifold_bytes(config: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = asciifold(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn asciifold");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for asciifold")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}
