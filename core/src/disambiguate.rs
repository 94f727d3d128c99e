//! Eszett versus beta disambiguation.
//!
//! `ß` (U+00DF) and `β` (U+03B2) look alike and are routinely swapped by OCR and
//! by data-entry tools. Whether a given occurrence is German depends only on the
//! word around it:
//!
//! - the glyph must not start the word,
//! - every other character of the word must be German (Latin letters, umlauts,
//!   `ß`, hyphen, parentheses),
//! - the character right before it must be a vowel,
//! - the word must not be all capitals, unless the glyph is the capital `ẞ`,
//!   which only appears in all-caps text.
//!
//! The vowel rule is an approximation. German spells `ß` after long vowels and
//! diphthongs, so a consonant before the glyph is read as Greek even in the
//! rare words where that is wrong.

use asciifold_tables::german;

/// Decide whether the glyph between `left` and `right` is the German letter.
///
/// `left` is trimmed to the text after its last whitespace and `right` to the
/// text before its first whitespace before the word is judged.
#[must_use]
pub fn is_german_letter(left: &str, right: &str, require_all_caps: bool) -> bool {
    let left = left.rsplit(char::is_whitespace).next().unwrap_or_default();
    let right = right.split(char::is_whitespace).next().unwrap_or_default();
    judge(left.chars(), right.chars(), left.chars().next_back(), require_all_caps)
}

/// Same verdict as [`is_german_letter`] for the glyph at `chars[index]`.
#[must_use]
pub fn is_german_letter_at(chars: &[char], index: usize, require_all_caps: bool) -> bool {
    ContextWindow::around(chars, index).is_some_and(|window| window.is_german(require_all_caps))
}

/// The partial words immediately left and right of an ambiguous glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    left: &'a [char],
    right: &'a [char],
}

impl<'a> ContextWindow<'a> {
    /// Window around `chars[index]`, bounded by whitespace on both sides.
    ///
    /// Returns `None` when `index` is out of bounds.
    #[must_use]
    pub fn around(chars: &'a [char], index: usize) -> Option<Self> {
        if index >= chars.len() {
            return None;
        }
        let before = &chars[..index];
        let after = &chars[index + 1..];
        let start = before
            .iter()
            .rposition(|c| c.is_whitespace())
            .map_or(0, |pos| pos + 1);
        let end = after
            .iter()
            .position(|c| c.is_whitespace())
            .unwrap_or(after.len());
        Some(Self {
            left: &before[start..],
            right: &after[..end],
        })
    }

    #[must_use]
    pub fn left(&self) -> &'a [char] {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> &'a [char] {
        self.right
    }

    #[must_use]
    pub fn is_german(&self, require_all_caps: bool) -> bool {
        judge(
            self.left.iter().copied(),
            self.right.iter().copied(),
            self.left.last().copied(),
            require_all_caps,
        )
    }
}

fn judge(
    left: impl Iterator<Item = char>,
    right: impl Iterator<Item = char>,
    neighbor: Option<char>,
    require_all_caps: bool,
) -> bool {
    // Word-initial glyphs are never German.
    let Some(neighbor) = neighbor else {
        return false;
    };

    let mut all_caps = true;
    for c in left.chain(right) {
        if !german::is_german_letter(c) {
            return false;
        }
        all_caps &= german::is_german_capital(c);
    }

    if !german::is_german_vowel(neighbor) {
        return false;
    }

    all_caps == require_all_caps
}

#[cfg(test)]
mod tests {
    use super::{ContextWindow, is_german_letter, is_german_letter_at};

    #[test]
    fn vowel_before_glyph_is_german() {
        assert!(is_german_letter("stra", "e ", false));
        assert!(is_german_letter("Die Stra", "e ist lang", false));
        assert!(is_german_letter("gro", "", false));
    }

    #[test]
    fn consonant_before_glyph_is_not_german() {
        assert!(!is_german_letter("str", "e ", false));
        assert!(!is_german_letter("M", "stab", false));
        assert!(is_german_letter("Ma", "stab", false));
    }

    #[test]
    fn word_initial_glyph_is_not_german() {
        assert!(!is_german_letter("", "eta", false));
        assert!(!is_german_letter("the ", "-sheet", false));
    }

    #[test]
    fn foreign_characters_reject() {
        assert!(!is_german_letter("stra", "e,", false));
        assert!(!is_german_letter("1a", "", false));
        assert!(!is_german_letter("ca\u{00E9}a", "", false));
    }

    #[test]
    fn all_caps_word_reads_as_greek_symbol() {
        assert!(!is_german_letter("TGF", "", false));
        assert!(!is_german_letter("STRA", "E", false));
    }

    #[test]
    fn capital_sharp_s_requires_all_caps() {
        assert!(is_german_letter("STRA", "E", true));
        assert!(is_german_letter("GRO", "-KREUZ", true));
        assert!(!is_german_letter("Stra", "e", true));
    }

    #[test]
    fn umlaut_vowel_counts() {
        assert!(is_german_letter("Gr\u{00FC}", "e", false));
        assert!(is_german_letter("F\u{00FC}", "e", false));
    }

    #[test]
    fn window_stops_at_whitespace() {
        let chars: Vec<char> = "die Stra\u{00DF}e ist".chars().collect();
        let window = ContextWindow::around(&chars, 8).unwrap();
        assert_eq!(window.left(), &['S', 't', 'r', 'a']);
        assert_eq!(window.right(), &['e']);
        assert!(is_german_letter_at(&chars, 8, false));
    }

    #[test]
    fn window_at_edges() {
        let chars: Vec<char> = "\u{03B2}eta".chars().collect();
        let window = ContextWindow::around(&chars, 0).unwrap();
        assert!(window.left().is_empty());
        assert!(!window.is_german(false));
        assert!(ContextWindow::around(&chars, 4).is_none());
        assert!(!is_german_letter_at(&chars, 9, false));
    }

    #[test]
    fn slice_and_str_entry_points_agree() {
        let cases = [
            ("Stra", "e"),
            ("str", "e"),
            ("TGF", ""),
            ("STRA", "E"),
            ("gro", ""),
            ("ca1", "x"),
        ];
        for (left, right) in cases {
            let text = format!("{left}\u{00DF}{right}");
            let chars: Vec<char> = text.chars().collect();
            let index = left.chars().count();
            for caps in [false, true] {
                assert_eq!(
                    is_german_letter(left, right, caps),
                    is_german_letter_at(&chars, index, caps),
                    "{left:?} {right:?} caps={caps}"
                );
            }
        }
    }
}
