//! The full fold: homoglyph normalization followed by transliteration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::extensions::ExtensionTable;
use crate::homoglyph::{self, HomoglyphOptions};
use crate::transliterate::{TransliterateOptions, Transliterator};

/// What kind of text is being folded; selects the eszett/beta policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// No eszett/beta correction.
    #[default]
    Plain,
    /// Author names: every beta is read as `ß`.
    Author,
    /// Running text: each occurrence is judged from its word.
    Prose,
}

impl FieldKind {
    pub const VARIANTS: &'static [&'static str] = &["plain", "author", "prose"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::Plain => "plain",
            FieldKind::Author => "author",
            FieldKind::Prose => "prose",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field kind '{raw}'; expected one of: {:?}", FieldKind::VARIANTS)]
pub struct ParseFieldKindError {
    raw: String,
}

impl ParseFieldKindError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for FieldKind {
    type Err = ParseFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "" => Ok(FieldKind::Plain),
            "author" | "authors" => Ok(FieldKind::Author),
            "prose" | "text" => Ok(FieldKind::Prose),
            _ => Err(ParseFieldKindError { raw: s.to_string() }),
        }
    }
}

/// Options for [`fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldOptions {
    pub homoglyphs: bool,
    pub field: FieldKind,
    /// Run the transliteration stage. When false the output keeps Unicode
    /// and only the normalizer runs.
    pub transliterate: bool,
    pub spell_greek: bool,
    pub reencode_xml: bool,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            homoglyphs: false,
            field: FieldKind::Plain,
            transliterate: true,
            spell_greek: false,
            reencode_xml: false,
        }
    }
}

impl FoldOptions {
    #[must_use]
    pub fn homoglyph_options(&self) -> HomoglyphOptions {
        HomoglyphOptions {
            homoglyphs: self.homoglyphs,
            author_field: self.field == FieldKind::Author,
            prose: self.field == FieldKind::Prose,
        }
    }

    #[must_use]
    pub fn transliterate_options(&self) -> TransliterateOptions {
        TransliterateOptions {
            spell_greek: self.spell_greek,
            reencode_xml: self.reencode_xml,
        }
    }
}

/// Reusable pipeline; builds its resolver chain once.
#[derive(Debug)]
pub struct Folder<'a> {
    options: FoldOptions,
    transliterator: Transliterator<'a>,
}

impl Folder<'static> {
    #[must_use]
    pub fn new(options: FoldOptions) -> Self {
        Self {
            options,
            transliterator: Transliterator::new(options.transliterate_options()),
        }
    }
}

impl<'a> Folder<'a> {
    #[must_use]
    pub fn with_extensions(options: FoldOptions, extensions: &'a ExtensionTable) -> Self {
        Self {
            options,
            transliterator: Transliterator::with_extensions(
                options.transliterate_options(),
                extensions,
            ),
        }
    }

    #[must_use]
    pub fn options(&self) -> &FoldOptions {
        &self.options
    }

    #[must_use]
    pub fn fold(&self, input: &str) -> String {
        let normalized = homoglyph::normalize(input, self.options.homoglyph_options());
        if self.options.transliterate {
            self.transliterator.transliterate(&normalized)
        } else {
            normalized
        }
    }
}

/// Run the whole pipeline once using the process-wide extension table.
#[must_use]
pub fn fold(input: &str, options: &FoldOptions) -> String {
    Folder::new(*options).fold(input)
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::{FieldKind, FoldOptions, Folder};
    use crate::extensions::ExtensionTable;

    fn folder(options: FoldOptions) -> Folder<'static> {
        static EMPTY: OnceLock<ExtensionTable> = OnceLock::new();
        Folder::with_extensions(options, EMPTY.get_or_init(ExtensionTable::empty))
    }

    #[test]
    fn field_kind_parses() {
        assert_eq!("Author".parse::<FieldKind>(), Ok(FieldKind::Author));
        assert_eq!(" prose ".parse::<FieldKind>(), Ok(FieldKind::Prose));
        assert_eq!("".parse::<FieldKind>(), Ok(FieldKind::Plain));
        let err = "title".parse::<FieldKind>().unwrap_err();
        assert_eq!(err.raw(), "title");
        assert!(err.to_string().contains("plain"));
    }

    #[test]
    fn author_field_then_ascii() {
        let options = FoldOptions {
            field: FieldKind::Author,
            ..FoldOptions::default()
        };
        assert_eq!(folder(options).fold("Wei\u{03B2}, \"J.\""), "Weiss, 'J.'");
    }

    #[test]
    fn prose_with_greek_spelling() {
        let options = FoldOptions {
            field: FieldKind::Prose,
            homoglyphs: true,
            spell_greek: true,
            ..FoldOptions::default()
        };
        assert_eq!(
            folder(options).fold("TGF-\u{00DF}1 in der Stra\u{03D0}e"),
            "TGF-beta1 in der Strasse"
        );
    }

    #[test]
    fn without_transliteration_keeps_unicode() {
        let options = FoldOptions {
            field: FieldKind::Author,
            transliterate: false,
            ..FoldOptions::default()
        };
        assert_eq!(folder(options).fold("Wei\u{03B2}"), "Wei\u{00DF}");
    }

    #[test]
    fn xml_output_is_escaped() {
        let options = FoldOptions {
            reencode_xml: true,
            ..FoldOptions::default()
        };
        assert_eq!(folder(options).fold("A & B \u{2264} C"), "A &amp; B &lt;= C");
    }
}
