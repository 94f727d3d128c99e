//! Configuration for asciifold.
//!
//! Read from `~/.asciifold/config.toml`, or from the file named by
//! `ASCIIFOLD_CONFIG`:
//!
//! ```toml
//! [fold]
//! spell_greek = true
//! reencode_xml = false
//! homoglyphs = true
//! field = "prose"     # plain | author | prose
//!
//! [extensions]
//! enabled = true
//! path = "${HOME}/share/asciifold/unicode-extras.txt"
//! ```
//!
//! Every key is optional; anything missing falls back to [`FoldOptions::default`]
//! and the extension table beside the executable.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use asciifold_core::{FieldKind, FoldOptions};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "ASCIIFOLD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsciifoldConfig {
    pub fold: Option<FoldConfig>,
    pub extensions: Option<ExtensionsConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoldConfig {
    pub spell_greek: Option<bool>,
    pub reencode_xml: Option<bool>,
    pub homoglyphs: Option<bool>,
    pub transliterate: Option<bool>,
    pub field: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionsConfig {
    pub enabled: Option<bool>,
    pub path: Option<String>,
}

/// Expand `${VAR}` references from the environment. Unset variables expand to
/// nothing; an unterminated `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl AsciifoldConfig {
    /// Load the config, logging and discarding any error.
    ///
    /// Returns `None` when there is no config file.
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Fold options from the `[fold]` section; unknown field kinds are logged
    /// and treated as `plain`.
    #[must_use]
    pub fn fold_options(&self) -> FoldOptions {
        let defaults = FoldOptions::default();
        let Some(fold) = &self.fold else {
            return defaults;
        };

        let field = match fold.field.as_deref().map(str::parse::<FieldKind>) {
            None => defaults.field,
            Some(Ok(field)) => field,
            Some(Err(err)) => {
                tracing::warn!("{err}; using {}", defaults.field);
                defaults.field
            }
        };

        FoldOptions {
            homoglyphs: fold.homoglyphs.unwrap_or(defaults.homoglyphs),
            field,
            transliterate: fold.transliterate.unwrap_or(defaults.transliterate),
            spell_greek: fold.spell_greek.unwrap_or(defaults.spell_greek),
            reencode_xml: fold.reencode_xml.unwrap_or(defaults.reencode_xml),
        }
    }

    #[must_use]
    pub fn extensions_enabled(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.enabled)
            .unwrap_or(true)
    }

    /// Configured extension table path with `${VAR}` references expanded.
    #[must_use]
    pub fn extension_path(&self) -> Option<PathBuf> {
        let raw = self.extensions.as_ref()?.path.as_deref()?;
        let expanded = expand_env_vars(raw);
        let trimmed = expanded.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".asciifold").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use asciifold_core::{FieldKind, FoldOptions};

    use super::{AsciifoldConfig, ConfigError, expand_env_vars};

    fn parse(content: &str) -> AsciifoldConfig {
        AsciifoldConfig::parse(content, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("");
        assert_eq!(config.fold_options(), FoldOptions::default());
        assert!(config.extensions_enabled());
        assert_eq!(config.extension_path(), None);
    }

    #[test]
    fn fold_section_overrides_defaults() {
        let config = parse(
            r#"
            [fold]
            spell_greek = true
            homoglyphs = true
            field = "author"
            "#,
        );
        let options = config.fold_options();
        assert!(options.spell_greek);
        assert!(options.homoglyphs);
        assert!(!options.reencode_xml);
        assert!(options.transliterate);
        assert_eq!(options.field, FieldKind::Author);
    }

    #[test]
    fn unknown_field_kind_falls_back_to_plain() {
        let config = parse("[fold]\nfield = \"headline\"\n");
        assert_eq!(config.fold_options().field, FieldKind::Plain);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AsciifoldConfig::parse("[fold]\nspell = true\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn extension_section() {
        let config = parse("[extensions]\nenabled = false\npath = \"/opt/extras.txt\"\n");
        assert!(!config.extensions_enabled());
        assert_eq!(
            config.extension_path(),
            Some(PathBuf::from("/opt/extras.txt"))
        );
    }

    #[test]
    fn blank_extension_path_is_none() {
        let config = parse("[extensions]\npath = \"  \"\n");
        assert_eq!(config.extension_path(), None);
    }

    #[test]
    fn expands_env_vars() {
        let path = env::var("PATH").unwrap_or_default();
        assert_eq!(expand_env_vars("a${PATH}b"), format!("a{path}b"));
        assert_eq!(expand_env_vars("${ASCIIFOLD_SURELY_UNSET_VAR}x"), "x");
        assert_eq!(expand_env_vars("${}x"), "x");
        assert_eq!(expand_env_vars("keep ${open"), "keep ${open");
        assert_eq!(expand_env_vars("caf\u{00E9}"), "caf\u{00E9}");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fold]\nreencode_xml = true").unwrap();
        let config = AsciifoldConfig::load_from(file.path()).unwrap();
        assert!(config.fold_options().reencode_xml);
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AsciifoldConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
