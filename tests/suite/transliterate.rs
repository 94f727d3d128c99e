//! Transliteration through the public entry points.

use asciifold_core::{
    ExtensionTable, ResolverChain, TransliterateOptions, Transliterator, transliterate,
};
use asciifold_tables::{ASCII, GREEK, SYMBOLS};

fn offline(spell_greek: bool, reencode_xml: bool) -> Transliterator<'static> {
    Transliterator::without_extensions(TransliterateOptions {
        spell_greek,
        reencode_xml,
    })
}

#[test]
fn output_is_always_printable_ascii() {
    let input = "Ærøskøbing \u{2192} Łódź, 5\u{00B0}C \u{00BD} \u{20AC}10 \u{2460} \u{0416}\u{1F600}\t\u{7}";
    for spell in [false, true] {
        for xml in [false, true] {
            let out = offline(spell, xml).transliterate(input);
            assert!(
                out.bytes().all(|b| (0x20..0x7f).contains(&b)),
                "spell={spell} xml={xml}: {out:?}"
            );
        }
    }
}

#[test]
fn global_entry_point_matches_offline_outside_extension_window() {
    let input = "Fran\u{00E7}ois \u{03B1}-helix \u{2264} 3 <tag>";
    for spell in [false, true] {
        for xml in [false, true] {
            assert_eq!(
                transliterate(input, spell, xml),
                offline(spell, xml).transliterate(input)
            );
        }
    }
}

#[test]
fn mixed_scripts_fold() {
    assert_eq!(
        offline(false, false).transliterate("\u{0416}ukov, \u{00C6}sop & Ma\u{00F1}ana"),
        "Zhukov, AEsop & Manana"
    );
    assert_eq!(
        offline(false, false).transliterate("5\u{00D7}10 \u{2192} \u{2018}x\u{2019}"),
        "5x10 -> 'x'"
    );
    assert_eq!(offline(false, false).transliterate("\u{FF21}\u{2460}"), "A(1)");
}

#[test]
fn spelled_greek_keeps_case_of_initial() {
    let t = offline(true, false);
    assert_eq!(t.transliterate("\u{03A9} \u{03C9}"), "Omega omega");
    assert_eq!(t.transliterate("\u{00B5}m"), "mum");
    assert_eq!(offline(false, false).transliterate("\u{00B5}m"), "um");
}

#[test]
fn xml_escaping_is_applied_last() {
    let t = offline(true, true);
    assert_eq!(t.transliterate("\u{03B1} < \u{03B2} & \u{2264}"), "alpha &lt; beta &amp; &lt;=");
}

#[test]
fn custom_chain_from_tables() {
    let chain = ResolverChain::new().with(&GREEK).with(&ASCII).with(&SYMBOLS);
    assert_eq!(chain.lookup('\u{03B2}'), Some("beta"));
    assert_eq!(chain.lookup('\u{00F1}'), Some("n"));
    assert_eq!(chain.lookup('\u{20AC}'), Some("EUR"));
    assert_eq!(chain.lookup('\u{4E2D}'), None);
}

#[test]
fn explicit_extension_table_does_not_touch_global() {
    let table = ExtensionTable::parse("5B57\tzi \n", None);
    let t = Transliterator::with_extensions(TransliterateOptions::default(), &table);
    assert_eq!(t.transliterate("\u{6F22}\u{5B57}"), "zi ");
}
