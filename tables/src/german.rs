//! Letter classes used to decide whether a sharp-s/beta glyph sits inside a
//! German word.

/// Letters (and word-internal punctuation) that may appear in a German word.
#[must_use]
pub fn is_german_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'Ä' | 'Ö' | 'Ü' | 'ä' | 'ö' | 'ü' | 'ß' | '\u{1E9E}' | '-' | '(' | ')'
        )
}

/// Capital-letter class. Hyphen and parentheses are neutral and count as
/// capitals so that `GEN-NAME` still reads as an all-caps word.
#[must_use]
pub fn is_german_capital(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Ä' | 'Ö' | 'Ü' | '\u{1E9E}' | '-' | '(' | ')')
}

/// Plain and umlauted vowels, either case.
#[must_use]
pub fn is_german_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U' | 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü'
    )
}

#[cfg(test)]
mod tests {
    use super::{is_german_capital, is_german_letter, is_german_vowel};

    #[test]
    fn umlauts_are_letters() {
        for c in ['ä', 'Ö', 'ü', 'ß', '\u{1E9E}'] {
            assert!(is_german_letter(c), "{c}");
        }
    }

    #[test]
    fn greek_and_digits_are_not_letters() {
        for c in ['\u{03B2}', '1', '.', ' ', 'é'] {
            assert!(!is_german_letter(c), "{c:?}");
        }
    }

    #[test]
    fn capital_class_is_subset_of_letters() {
        for c in ['A', 'Z', 'Ä', '\u{1E9E}', '-', '(', ')'] {
            assert!(is_german_capital(c));
            assert!(is_german_letter(c));
        }
        assert!(!is_german_capital('ß'));
        assert!(!is_german_capital('a'));
    }

    #[test]
    fn vowels_include_umlauts() {
        assert!(is_german_vowel('ä'));
        assert!(is_german_vowel('U'));
        assert!(!is_german_vowel('y'));
        assert!(!is_german_vowel('r'));
    }
}
