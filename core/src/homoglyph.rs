//! Homoglyph and author-field corrections applied before transliteration.
//!
//! Three independent passes run per character, in this order:
//!
//! 1. **Homoglyphs**: look-alike beta forms become `β` (U+03B2) and Latin open
//!    E becomes Greek epsilon.
//! 2. **Author field**: any beta becomes `ß`, capital `Β` becomes `B`, and a
//!    double quote becomes an apostrophe.
//! 3. **Prose**: `ß`, beta, and `ẞ` are settled by
//!    [`ContextWindow::is_german`].
//!
//! Context for the prose pass is read from the input after control characters
//! are removed and homoglyphs canonicalized, never from rewrites made earlier
//! in the same call.

use crate::disambiguate::ContextWindow;

const GREEK_SMALL_BETA: char = '\u{03B2}';
const GREEK_CAPITAL_BETA: char = '\u{0392}';
const SHARP_S: char = '\u{00DF}';
const CAPITAL_SHARP_S: char = '\u{1E9E}';

/// Look-alike beta forms: curled beta, modifier small beta, subscript beta.
const BETA_VARIANTS: [char; 3] = ['\u{03D0}', '\u{1D5D}', '\u{1D66}'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomoglyphOptions {
    pub homoglyphs: bool,
    pub author_field: bool,
    pub prose: bool,
}

impl HomoglyphOptions {
    /// True when no pass is enabled and only control stripping remains.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !(self.homoglyphs || self.author_field || self.prose)
    }
}

/// Resolve ambiguous glyphs in `input` according to the given flags.
#[must_use]
pub fn normalize_homoglyphs(
    input: &str,
    do_homoglyphs: bool,
    is_author_field: bool,
    is_prose: bool,
) -> String {
    normalize(
        input,
        HomoglyphOptions {
            homoglyphs: do_homoglyphs,
            author_field: is_author_field,
            prose: is_prose,
        },
    )
}

#[must_use]
pub fn normalize(input: &str, options: HomoglyphOptions) -> String {
    let chars: Vec<char> = input
        .chars()
        .filter(|&c| c >= ' ')
        .map(|c| {
            if options.homoglyphs {
                canonicalize(c)
            } else {
                c
            }
        })
        .collect();

    if options.is_noop() {
        return chars.into_iter().collect();
    }

    let mut out = String::with_capacity(input.len());
    for (idx, &original) in chars.iter().enumerate() {
        let mut c = original;
        if options.author_field {
            c = author_field(c);
        }
        if options.prose {
            c = prose(&chars, idx, c);
        }
        out.push(c);
    }
    out
}

/// Map a look-alike glyph to its canonical Greek form.
#[must_use]
pub fn canonicalize(c: char) -> char {
    match c {
        c if BETA_VARIANTS.contains(&c) => GREEK_SMALL_BETA,
        '\u{0190}' => '\u{0395}',
        '\u{025B}' => '\u{03B5}',
        other => other,
    }
}

fn is_beta(c: char) -> bool {
    c == GREEK_SMALL_BETA || BETA_VARIANTS.contains(&c)
}

fn author_field(c: char) -> char {
    match c {
        c if is_beta(c) => SHARP_S,
        GREEK_CAPITAL_BETA => 'B',
        '"' => '\'',
        other => other,
    }
}

fn prose(chars: &[char], idx: usize, c: char) -> char {
    let verdict = |require_all_caps| {
        ContextWindow::around(chars, idx).is_some_and(|w| w.is_german(require_all_caps))
    };
    match c {
        SHARP_S if !verdict(false) => GREEK_SMALL_BETA,
        c if is_beta(c) && verdict(false) => SHARP_S,
        CAPITAL_SHARP_S if !verdict(true) => GREEK_SMALL_BETA,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{HomoglyphOptions, canonicalize, normalize, normalize_homoglyphs};

    #[test]
    fn control_characters_are_skipped() {
        assert_eq!(normalize_homoglyphs("a\u{0}b\tc", false, false, false), "abc");
    }

    #[test]
    fn beta_variants_canonicalize() {
        for variant in ['\u{03D0}', '\u{1D5D}', '\u{1D66}'] {
            assert_eq!(canonicalize(variant), '\u{03B2}');
        }
        assert_eq!(canonicalize('\u{0190}'), '\u{0395}');
        assert_eq!(canonicalize('\u{025B}'), '\u{03B5}');
        assert_eq!(canonicalize('x'), 'x');
    }

    #[test]
    fn homoglyph_pass_is_idempotent() {
        let input = "TGF-\u{03D0}1 \u{0190}psilon \u{025B} \u{1D5D}\u{1D66} Stra\u{00DF}e";
        let once = normalize_homoglyphs(input, true, false, false);
        let twice = normalize_homoglyphs(&once, true, false, false);
        assert_eq!(once, twice);
        assert_eq!(once, "TGF-\u{03B2}1 \u{0395}psilon \u{03B5} \u{03B2}\u{03B2} Stra\u{00DF}e");
    }

    #[test]
    fn homoglyphs_off_leaves_variants() {
        assert_eq!(normalize_homoglyphs("\u{03D0}", false, false, false), "\u{03D0}");
    }

    #[test]
    fn author_field_fixes_beta_and_quotes() {
        assert_eq!(
            normalize_homoglyphs("Wei\u{03B2}, \"Hans\"", false, true, false),
            "Wei\u{00DF}, 'Hans'"
        );
        assert_eq!(normalize_homoglyphs("\u{0392}ernd", false, true, false), "Bernd");
        assert_eq!(normalize_homoglyphs("Gro\u{03D0}", false, true, false), "Gro\u{00DF}");
    }

    #[test]
    fn prose_restores_eszett_in_german_words() {
        assert_eq!(
            normalize_homoglyphs("die Stra\u{03B2}e ist lang", false, false, true),
            "die Stra\u{00DF}e ist lang"
        );
    }

    #[test]
    fn prose_turns_misplaced_eszett_into_beta() {
        assert_eq!(
            normalize_homoglyphs("TGF-\u{00DF}1 levels", false, false, true),
            "TGF-\u{03B2}1 levels"
        );
        assert_eq!(
            normalize_homoglyphs("\u{00DF}-sheet", false, false, true),
            "\u{03B2}-sheet"
        );
    }

    #[test]
    fn prose_keeps_greek_beta_in_symbols() {
        assert_eq!(
            normalize_homoglyphs("IL-1\u{03B2} and \u{03B2}-actin", false, false, true),
            "IL-1\u{03B2} and \u{03B2}-actin"
        );
    }

    #[test]
    fn prose_capital_sharp_s() {
        assert_eq!(
            normalize_homoglyphs("STRA\u{1E9E}E", false, false, true),
            "STRA\u{1E9E}E"
        );
        assert_eq!(
            normalize_homoglyphs("Stra\u{1E9E}e", false, false, true),
            "Stra\u{03B2}e"
        );
    }

    #[test]
    fn prose_consults_variants_after_canonicalization() {
        let options = HomoglyphOptions {
            homoglyphs: true,
            author_field: false,
            prose: true,
        };
        assert_eq!(normalize("Fu\u{03D0}ball", options), "Fu\u{00DF}ball");
        assert_eq!(normalize("\u{03D0}-Faltblatt", options), "\u{03B2}-Faltblatt");
    }

    #[test]
    fn noop_options_only_strip_controls() {
        let options = HomoglyphOptions::default();
        assert!(options.is_noop());
        assert_eq!(normalize("\u{03B2}\r\n\u{00DF}", options), "\u{03B2}\u{00DF}");
    }
}
