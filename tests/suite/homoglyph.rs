//! Homoglyph normalization combined with transliteration.

use asciifold_core::{
    HomoglyphOptions, TransliterateOptions, Transliterator, homoglyph, is_german_letter,
    normalize_homoglyphs,
};

fn ascii(text: &str, spell_greek: bool) -> String {
    Transliterator::without_extensions(TransliterateOptions {
        spell_greek,
        reencode_xml: false,
    })
    .transliterate(text)
}

#[test]
fn author_names_come_out_german() {
    let fixed = normalize_homoglyphs("Wei\u{03B2}, M\u{00FC}ller \"Jr\"", true, true, false);
    assert_eq!(fixed, "Wei\u{00DF}, M\u{00FC}ller 'Jr'");
    assert_eq!(ascii(&fixed, true), "Weiss, Muller 'Jr'");
}

#[test]
fn prose_mixes_german_and_greek() {
    let text = "Die Stra\u{03B2}e und TGF-\u{00DF}1 im Fu\u{03D0}ball";
    let fixed = normalize_homoglyphs(text, true, false, true);
    assert_eq!(fixed, "Die Stra\u{00DF}e und TGF-\u{03B2}1 im Fu\u{00DF}ball");
    assert_eq!(ascii(&fixed, true), "Die Strasse und TGF-beta1 im Fussball");
}

#[test]
fn open_e_becomes_epsilon() {
    let fixed = normalize_homoglyphs("PKC\u{025B} and \u{0190}", true, false, false);
    assert_eq!(ascii(&fixed, true), "PKCepsilon and Epsilon");
}

#[test]
fn prose_verdict_matches_disambiguator() {
    let cases = ["gro\u{00DF}", "Ma\u{00DF}stab", "\u{00DF}-Faltblatt", "IL\u{00DF}"];
    for word in cases {
        let (left, right) = word.split_once('\u{00DF}').unwrap();
        let fixed = normalize_homoglyphs(word, false, false, true);
        let expected = if is_german_letter(left, right, false) {
            word.to_string()
        } else {
            word.replace('\u{00DF}', "\u{03B2}")
        };
        assert_eq!(fixed, expected, "{word}");
    }
}

#[test]
fn options_struct_and_flags_agree() {
    let text = "\u{03D0} Stra\u{03B2}e \"x\"";
    for homoglyphs in [false, true] {
        for author_field in [false, true] {
            for prose in [false, true] {
                let options = HomoglyphOptions {
                    homoglyphs,
                    author_field,
                    prose,
                };
                assert_eq!(
                    homoglyph::normalize(text, options),
                    normalize_homoglyphs(text, homoglyphs, author_field, prose)
                );
            }
        }
    }
}
