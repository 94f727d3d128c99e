//! Config files feeding fold options.

use std::env;

use asciifold_config::{AsciifoldConfig, ConfigError};
use asciifold_core::{FieldKind, FoldOptions};

use crate::common::temp_file;

#[test]
fn full_config_file() {
    let file = temp_file(
        r#"
[fold]
spell_greek = true
reencode_xml = true
homoglyphs = true
field = "Prose"

[extensions]
enabled = true
path = "${PATH}/extras.txt"
"#,
    );
    let config = AsciifoldConfig::load_from(file.path()).unwrap();

    assert_eq!(
        config.fold_options(),
        FoldOptions {
            homoglyphs: true,
            field: FieldKind::Prose,
            transliterate: true,
            spell_greek: true,
            reencode_xml: true,
        }
    );
    assert!(config.extensions_enabled());
    let expected = format!("{}/extras.txt", env::var("PATH").unwrap_or_default());
    assert_eq!(
        config.extension_path().unwrap().to_string_lossy(),
        expected.trim()
    );
}

#[test]
fn empty_file_means_defaults() {
    let file = temp_file("");
    let config = AsciifoldConfig::load_from(file.path()).unwrap();
    assert_eq!(config.fold_options(), FoldOptions::default());
    assert!(config.extensions_enabled());
    assert!(config.extension_path().is_none());
}

#[test]
fn disabled_extensions() {
    let file = temp_file("[extensions]\nenabled = false\n");
    let config = AsciifoldConfig::load_from(file.path()).unwrap();
    assert!(!config.extensions_enabled());
}

#[test]
fn unknown_keys_are_rejected() {
    let file = temp_file("[fold]\nspell_greeks = true\n");
    let err = AsciifoldConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AsciifoldConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
