//! Supplementary code point table loaded from disk.
//!
//! The extension table covers ranges the static tables leave out (CJK
//! ideographs, compatibility ideographs, and the Private Use Area U+E000 to
//! U+F8FF, which sits inside [`EXTENSION_WINDOW`]). It is read from
//! `help/unicode-extras.txt` beside the running executable the first time a
//! lookup needs it, and published through a `OnceLock`: concurrent callers
//! block on the single load and then share one immutable table. A failed load
//! leaves an empty table in place for the rest of the process.
//!
//! # File format
//!
//! One mapping per line, two tab-separated columns:
//!
//! ```text
//! 4E2D\tzhong
//! 0x6587\twen
//! ```
//!
//! The first column is a hexadecimal code point (`0x` and `U+` prefixes are
//! accepted). The second is the replacement, kept verbatim, so leading and
//! trailing spaces are significant. Lines of any other shape are skipped.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::{env, fs, io};

use thiserror::Error;

use crate::resolve::Resolver;

/// Location of the extension table relative to the executable's directory.
pub const EXTENSION_FILE: &str = "help/unicode-extras.txt";

/// Code points for which the extension table is consulted: CJK Extension A up
/// to, but not including, the Alphabetic Presentation Forms block.
///
/// The Private Use Area (U+E000..=U+F8FF) lies inside the window, so local
/// glyph assignments can be given replacements in the extension file.
pub const EXTENSION_WINDOW: RangeInclusive<char> = '\u{3400}'..='\u{FAFF}';

static GLOBAL: OnceLock<ExtensionTable> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("cannot locate the running executable: {0}")]
    Executable(#[source] io::Error),
    #[error("failed to read extension table {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtensionError {
    /// True when the file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            ExtensionError::Executable(_) => false,
            ExtensionError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

/// Why a single line of the extension file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 2 tab-separated columns, found {0}")]
    ColumnCount(usize),
    #[error("invalid hex code point '{0}'")]
    InvalidHex(String),
    #[error("U+{0:04X} is not a Unicode scalar value")]
    NotScalar(u32),
    #[error("replacement '{0}' is not printable ASCII")]
    NotAscii(String),
}

/// Outcome of building an [`ExtensionTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load was attempted; the table is empty by construction.
    Disabled,
    /// The source was read. `skipped` counts malformed lines.
    Loaded {
        path: Option<PathBuf>,
        entries: usize,
        skipped: usize,
    },
    /// The source could not be read; the table is empty.
    Unavailable { path: Option<PathBuf>, reason: String },
}

/// Immutable supplementary mapping from code point to replacement.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    entries: HashMap<char, String>,
    state: LoadState,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExtensionTable {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            state: LoadState::Disabled,
        }
    }

    /// Parse extension table text, skipping malformed lines.
    #[must_use]
    pub fn parse(text: &str, path: Option<PathBuf>) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for (idx, line) in text.lines().enumerate() {
            match parse_line(line) {
                Ok(Some((c, replacement))) => {
                    if let Some(previous) = entries.insert(c, replacement) {
                        tracing::debug!(
                            line = idx + 1,
                            code_point = %c.escape_unicode(),
                            %previous,
                            "Duplicate extension entry; later line wins"
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    skipped += 1;
                    tracing::debug!(line = idx + 1, "Skipping extension line: {e}");
                }
            }
        }

        let state = LoadState::Loaded {
            path,
            entries: entries.len(),
            skipped,
        };
        Self { entries, state }
    }

    /// Read and parse the table at `path`.
    pub fn load(path: &Path) -> Result<Self, ExtensionError> {
        let text = fs::read_to_string(path).map_err(|source| ExtensionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text, Some(path.to_path_buf()));
        if let LoadState::Loaded {
            entries, skipped, ..
        } = &table.state
        {
            tracing::debug!(path = %path.display(), entries, skipped, "Extension table loaded");
            if *skipped > 0 {
                tracing::warn!(
                    path = %path.display(),
                    skipped,
                    "Extension table contains malformed lines"
                );
            }
        }
        Ok(table)
    }

    /// Like [`load`](Self::load), but a failure yields an empty table whose
    /// state records the reason.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => Self::unavailable(Some(path.to_path_buf()), &e),
        }
    }

    fn unavailable(path: Option<PathBuf>, error: &ExtensionError) -> Self {
        if error.is_not_found() {
            tracing::debug!("Extension table not present: {error}");
        } else {
            tracing::warn!("Extension table unavailable: {error}");
        }
        Self {
            entries: HashMap::new(),
            state: LoadState::Unavailable {
                path,
                reason: error.to_string(),
            },
        }
    }

    #[must_use]
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }
}

impl Resolver for ExtensionTable {
    fn name(&self) -> &str {
        "extensions"
    }

    fn lookup(&self, c: char) -> Option<&str> {
        self.get(c)
    }
}

/// Resolver over the process-wide table; the first lookup triggers the load.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalExtensions;

impl Resolver for GlobalExtensions {
    fn name(&self) -> &str {
        "extensions"
    }

    fn lookup(&self, c: char) -> Option<&str> {
        global().get(c)
    }
}

/// Parse one line of the extension file.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<(char, String)>, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let columns: Vec<&str> = line.split('\t').collect();
    let [hex, replacement] = columns.as_slice() else {
        return Err(LineError::ColumnCount(columns.len()));
    };

    let digits = hex.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .or_else(|| digits.strip_prefix("U+"))
        .or_else(|| digits.strip_prefix("u+"))
        .unwrap_or(digits);
    // from_str_radix tolerates a leading sign.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LineError::InvalidHex((*hex).to_string()));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| LineError::InvalidHex((*hex).to_string()))?;
    let c = char::from_u32(value).ok_or(LineError::NotScalar(value))?;

    if !replacement.bytes().all(|b| (0x20..0x7f).contains(&b)) {
        return Err(LineError::NotAscii((*replacement).to_string()));
    }

    Ok(Some((c, (*replacement).to_string())))
}

/// Default table location: [`EXTENSION_FILE`] under the executable's directory.
pub fn default_path() -> Result<PathBuf, ExtensionError> {
    let exe = env::current_exe().map_err(ExtensionError::Executable)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(EXTENSION_FILE))
}

/// The process-wide extension table, loading it on first use.
pub fn global() -> &'static ExtensionTable {
    GLOBAL.get_or_init(load_default)
}

/// Install the process-wide table before first use.
///
/// Returns `false` if a table was already installed or loaded; the existing
/// table is kept.
pub fn install(table: ExtensionTable) -> bool {
    GLOBAL.set(table).is_ok()
}

/// True once the process-wide table has been installed or loaded.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

fn load_default() -> ExtensionTable {
    match default_path() {
        Ok(path) => ExtensionTable::load_or_empty(&path),
        Err(e) => ExtensionTable::unavailable(None, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtensionTable, LineError, LoadState, parse_line};
    use std::io::Write;

    #[test]
    fn parses_hex_and_keeps_spaces() {
        assert_eq!(
            parse_line("4E2D\tzhong "),
            Ok(Some(('\u{4E2D}', "zhong ".to_string())))
        );
        assert_eq!(
            parse_line("0x6587\t wen"),
            Ok(Some(('\u{6587}', " wen".to_string())))
        );
        assert_eq!(
            parse_line("U+E000\t(logo)"),
            Ok(Some(('\u{E000}', "(logo)".to_string())))
        );
    }

    #[test]
    fn empty_replacement_is_allowed() {
        assert_eq!(parse_line("FA0E\t"), Ok(Some(('\u{FA0E}', String::new()))));
    }

    #[test]
    fn strips_carriage_return() {
        assert_eq!(
            parse_line("4E00\tyi \r"),
            Ok(Some(('\u{4E00}', "yi ".to_string())))
        );
    }

    #[test]
    fn blank_lines_are_not_errors() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("\r"), Ok(None));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line("4E2D"), Err(LineError::ColumnCount(1)));
        assert_eq!(parse_line("4E2D\ta\tb"), Err(LineError::ColumnCount(3)));
        assert_eq!(
            parse_line("XYZ\tq"),
            Err(LineError::InvalidHex("XYZ".to_string()))
        );
        assert_eq!(parse_line("D800\tq"), Err(LineError::NotScalar(0xD800)));
        assert_eq!(parse_line("110000\tq"), Err(LineError::NotScalar(0x11_0000)));
        assert_eq!(
            parse_line("4E2D\t\u{4E2D}"),
            Err(LineError::NotAscii("\u{4E2D}".to_string()))
        );
    }

    #[test]
    fn signed_code_points_are_invalid_hex() {
        for hex in ["+4E2D", "U++4E2D", "0x+4E2D", "-4E2D", "U+", ""] {
            assert_eq!(
                parse_line(&format!("{hex}\tzhong")),
                Err(LineError::InvalidHex(hex.to_string())),
                "{hex:?}"
            );
        }
    }

    #[test]
    fn parse_skips_bad_lines_and_keeps_the_rest() {
        let text = "4E2D\tzhong \nnot a mapping\n\n6587\twen \nD800\tx\n";
        let table = ExtensionTable::parse(text, None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('\u{4E2D}'), Some("zhong "));
        assert_eq!(table.get('\u{6587}'), Some("wen "));
        assert_eq!(
            table.state(),
            &LoadState::Loaded {
                path: None,
                entries: 2,
                skipped: 2
            }
        );
    }

    #[test]
    fn later_duplicate_wins() {
        let table = ExtensionTable::parse("4E2D\tfirst\n4E2D\tsecond\n", None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('\u{4E2D}'), Some("second"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "4E2D\tzhong ").unwrap();
        writeln!(file, "garbage").unwrap();
        let table = ExtensionTable::load(file.path()).unwrap();
        assert_eq!(table.get('\u{4E2D}'), Some("zhong "));
        assert!(matches!(
            table.state(),
            LoadState::Loaded { entries: 1, skipped: 1, .. }
        ));
    }

    #[test]
    fn missing_file_yields_unavailable_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("help").join("unicode-extras.txt");
        let err = ExtensionTable::load(&path).unwrap_err();
        assert!(err.is_not_found());

        let table = ExtensionTable::load_or_empty(&path);
        assert!(table.is_empty());
        assert!(matches!(table.state(), LoadState::Unavailable { .. }));
    }

    #[test]
    fn empty_table_is_disabled() {
        let table = ExtensionTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.state(), &LoadState::Disabled);
    }
}
