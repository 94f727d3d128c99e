//! End-to-end runs of the `asciifold` binary.

use std::process::Stdio;

use crate::common::{asciifold, run_asciifold, run_asciifold_bytes, stdout_of, temp_file};

fn empty_config() -> tempfile::NamedTempFile {
    temp_file("")
}

#[test]
fn folds_joined_arguments() {
    let config = empty_config();
    let output = run_asciifold(config.path(), &["Ren\u{00E9}e", "M\u{00FC}ller"], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Renee Muller\n");
}

#[test]
fn folds_stdin_line_by_line() {
    let config = empty_config();
    let output = run_asciifold(
        config.path(),
        &["--greek"],
        "Stra\u{00DF}e\n\u{03B1}-helix\n\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Strasse\nalpha-helix\n\n");
}

#[test]
fn invalid_utf8_on_stdin_keeps_going() {
    let config = empty_config();
    let output = run_asciifold_bytes(config.path(), &[], b"caf\xe9\nStra\xc3\x9fe\r\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "caf\nStrasse\n");
}

#[test]
fn xml_flag_escapes() {
    let config = empty_config();
    let output = run_asciifold(config.path(), &["--xml", "a<b & \u{2264}"], "");
    assert_eq!(stdout_of(&output), "a&lt;b &amp; &lt;=\n");
}

#[test]
fn author_field_flag() {
    let config = empty_config();
    let output = run_asciifold(config.path(), &["--field", "author", "Wei\u{03B2}"], "");
    assert_eq!(stdout_of(&output), "Weiss\n");
}

#[test]
fn prose_field_with_homoglyphs() {
    let config = empty_config();
    let output = run_asciifold(
        config.path(),
        &["--homoglyphs", "--greek", "--field", "prose", "Fu\u{03D0}ball \u{03D0}-Faltblatt"],
        "",
    );
    assert_eq!(stdout_of(&output), "Fussball beta-Faltblatt\n");
}

#[test]
fn keep_unicode_skips_transliteration() {
    let config = empty_config();
    let output = run_asciifold(
        config.path(),
        &["--keep-unicode", "--field", "author", "Wei\u{03B2}"],
        "",
    );
    assert_eq!(stdout_of(&output), "Wei\u{00DF}\n");
}

#[test]
fn explicit_extension_file() {
    let config = empty_config();
    let table = temp_file("4E2D\tzhong \n56FD\tguo\n");
    let table_path = table.path().to_str().unwrap();
    let output = run_asciifold(
        config.path(),
        &["--extensions", table_path, "\u{4E2D}\u{56FD}"],
        "",
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "zhong guo\n");
}

#[test]
fn missing_explicit_extension_file_fails() {
    let config = empty_config();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let output = run_asciifold(
        config.path(),
        &["--extensions", missing.to_str().unwrap(), "x"],
        "",
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load extension table"), "{stderr}");
}

#[test]
fn no_extensions_ignores_configured_table() {
    let table = temp_file("4E2D\tzhong\n");
    let config = temp_file(&format!(
        "[extensions]\npath = {:?}\n",
        table.path().to_str().unwrap()
    ));

    let with = run_asciifold(config.path(), &["a\u{4E2D}b"], "");
    assert_eq!(stdout_of(&with), "azhongb\n");

    let without = run_asciifold(config.path(), &["--no-extensions", "a\u{4E2D}b"], "");
    assert_eq!(stdout_of(&without), "ab\n");
}

#[test]
fn explicit_extension_file_overrides_disabled_config() {
    let table = temp_file("4E2D\tzhong\n");
    let config = temp_file("[extensions]\nenabled = false\n");

    let disabled = run_asciifold(config.path(), &["a\u{4E2D}b"], "");
    assert_eq!(stdout_of(&disabled), "ab\n");

    let output = run_asciifold(
        config.path(),
        &["--extensions", table.path().to_str().unwrap(), "a\u{4E2D}b"],
        "",
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "azhongb\n");
}

#[test]
fn config_enables_features() {
    let config = temp_file("[fold]\nspell_greek = true\nfield = \"author\"\n");
    let output = run_asciifold(config.path(), &["\u{03B1} Wei\u{03B2}"], "");
    assert_eq!(stdout_of(&output), "alpha Weiss\n");
}

#[test]
fn invalid_config_is_an_error() {
    let config = temp_file("[fold\n");
    let output = run_asciifold(config.path(), &["x"], "");
    assert!(!output.status.success());
}

#[test]
fn conflicting_extension_flags_are_rejected() {
    let config = empty_config();
    let status = asciifold(config.path())
        .args(["--extensions", "x.txt", "--no-extensions", "y"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!status.success());
}
