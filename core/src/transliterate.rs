//! Per-code-point transliteration to printable ASCII.
//!
//! Each scalar value of the input is classified in order:
//!
//! 1. ASCII: control characters (`<= 0x1F`) are dropped, everything else is
//!    copied.
//! 2. The [`ResolverChain`] is probed: spelled Greek (when enabled), then the
//!    ASCII, symbol, and override tables, then the extension table for code
//!    points inside [`EXTENSION_WINDOW`].
//! 3. Anything left, including combining diacritics that have already merged
//!    with their base letter, is dropped.
//!
//! The transform never fails; unmappable input shrinks instead.

use std::borrow::Cow;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use aho_corasick::AhoCorasick;
use asciifold_tables::{GREEK, STATIC_TABLES};

use crate::extensions::{EXTENSION_WINDOW, ExtensionTable, GlobalExtensions};
use crate::resolve::{Gated, Resolver, ResolverChain};

/// Combining Diacritical Marks block.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

const XML_METACHARACTERS: [&str; 3] = ["&", "<", ">"];
const XML_ENTITIES: [&str; 3] = ["&amp;", "&lt;", "&gt;"];

static XML_AUTOMATON: OnceLock<Option<AhoCorasick>> = OnceLock::new();

/// One shared transliterator per option combination, indexed by
/// [`shared_index`].
static SHARED: [OnceLock<Transliterator<'static>>; 4] = [const { OnceLock::new() }; 4];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransliterateOptions {
    /// Spell Greek letters out (`alpha`, `Beta`) instead of folding them to a
    /// single Latin letter.
    pub spell_greek: bool,
    /// Escape `<`, `>` and `&` as XML entities after transliteration.
    pub reencode_xml: bool,
}

/// Transliterator bound to one set of options and one extension source.
#[derive(Debug)]
pub struct Transliterator<'a> {
    options: TransliterateOptions,
    chain: ResolverChain<'a>,
}

impl Transliterator<'static> {
    /// Uses the process-wide extension table, loading it on first need.
    #[must_use]
    pub fn new(options: TransliterateOptions) -> Self {
        Self::build(options, GlobalExtensions)
    }

    /// Process-wide instance for `options`, built on first use.
    #[must_use]
    pub fn shared(options: TransliterateOptions) -> &'static Self {
        SHARED[shared_index(options)].get_or_init(|| Self::new(options))
    }

    /// Static tables only; the extension table is never consulted.
    #[must_use]
    pub fn without_extensions(options: TransliterateOptions) -> Self {
        Self {
            options,
            chain: static_chain(options),
        }
    }
}

impl<'a> Transliterator<'a> {
    /// Uses `extensions` in place of the process-wide table.
    #[must_use]
    pub fn with_extensions(options: TransliterateOptions, extensions: &'a ExtensionTable) -> Self {
        Self::build(options, extensions)
    }

    fn build(options: TransliterateOptions, extensions: impl Resolver + 'a) -> Self {
        let mut chain = static_chain(options);
        chain.push(Gated::new(extensions, EXTENSION_WINDOW));
        Self { options, chain }
    }

    #[must_use]
    pub fn options(&self) -> TransliterateOptions {
        self.options
    }

    #[must_use]
    pub fn chain(&self) -> &ResolverChain<'a> {
        &self.chain
    }

    #[must_use]
    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            self.push_folded(c, &mut out);
        }

        if self.options.reencode_xml {
            match escape_xml(&out) {
                Cow::Borrowed(_) => out,
                Cow::Owned(escaped) => escaped,
            }
        } else {
            out
        }
    }

    fn push_folded(&self, c: char, out: &mut String) {
        if c.is_ascii() {
            if c >= ' ' {
                out.push(c);
            }
            return;
        }

        if let Some(replacement) = self.chain.lookup(c) {
            out.push_str(replacement);
        } else if !COMBINING_MARKS.contains(&c) {
            tracing::trace!(code_point = %c.escape_unicode(), "Dropping unmapped character");
        }
    }
}

fn shared_index(options: TransliterateOptions) -> usize {
    (usize::from(options.spell_greek) << 1) | usize::from(options.reencode_xml)
}

fn static_chain<'a>(options: TransliterateOptions) -> ResolverChain<'a> {
    let mut chain = ResolverChain::new();
    if options.spell_greek {
        chain.push(&GREEK);
    }
    for table in &STATIC_TABLES {
        chain.push(*table);
    }
    chain
}

/// Transliterate `input` using the process-wide extension table.
#[must_use]
pub fn transliterate(input: &str, spell_greek: bool, reencode_xml: bool) -> String {
    Transliterator::shared(TransliterateOptions {
        spell_greek,
        reencode_xml,
    })
    .transliterate(input)
}

/// Escape XML metacharacters, borrowing when there are none.
#[must_use]
pub fn escape_xml(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>']) {
        return Cow::Borrowed(input);
    }

    if let Some(ac) = xml_automaton() {
        return Cow::Owned(ac.replace_all(input, &XML_ENTITIES));
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn xml_automaton() -> Option<&'static AhoCorasick> {
    XML_AUTOMATON
        .get_or_init(|| match AhoCorasick::new(XML_METACHARACTERS) {
            Ok(ac) => Some(ac),
            Err(e) => {
                tracing::warn!("XML escape automaton build failed; using fallback ({e})");
                None
            }
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::ptr;

    use super::{TransliterateOptions, Transliterator, escape_xml};
    use crate::extensions::ExtensionTable;

    fn plain() -> Transliterator<'static> {
        Transliterator::without_extensions(TransliterateOptions::default())
    }

    fn with(spell_greek: bool, reencode_xml: bool) -> Transliterator<'static> {
        Transliterator::without_extensions(TransliterateOptions {
            spell_greek,
            reencode_xml,
        })
    }

    #[test]
    fn printable_ascii_passes_through() {
        let input: String = (0x20u8..0x7f).map(char::from).collect();
        assert_eq!(plain().transliterate(&input), input);
    }

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(plain().transliterate("a\tb\nc\u{0}d\u{1f}e"), "abcde");
    }

    #[test]
    fn latin_diacritics_fold() {
        assert_eq!(plain().transliterate("Ren\u{00E9}e M\u{00FC}ller"), "Renee Muller");
        assert_eq!(plain().transliterate("\u{0141}\u{00F3}d\u{017A}"), "Lodz");
        assert_eq!(plain().transliterate("Stra\u{00DF}e"), "Strasse");
    }

    #[test]
    fn combining_marks_are_absorbed() {
        assert_eq!(plain().transliterate("e\u{0301}"), "e");
        assert_eq!(plain().transliterate("n\u{0303}o\u{0308}"), "no");
    }

    #[test]
    fn greek_spelling_toggle() {
        assert_eq!(with(true, false).transliterate("\u{03B1}"), "alpha");
        assert_eq!(with(false, false).transliterate("\u{03B1}"), "a");
        assert_eq!(
            with(true, false).transliterate("TGF-\u{03B2}1"),
            "TGF-beta1"
        );
        assert_eq!(with(true, false).transliterate("\u{0394}G"), "DeltaG");
    }

    #[test]
    fn symbols_expand() {
        assert_eq!(plain().transliterate("10 \u{2126}"), "10  (ohm) ");
        assert_eq!(plain().transliterate("\u{201C}hi\u{201D}\u{2014}ok"), "\"hi\"--ok");
        assert_eq!(plain().transliterate("\u{FB01}ne"), "fine");
    }

    #[test]
    fn unmapped_characters_vanish() {
        assert_eq!(plain().transliterate("a\u{4E2D}b"), "ab");
        assert_eq!(plain().transliterate("\u{1F600}"), "");
        assert_eq!(plain().transliterate(""), "");
    }

    #[test]
    fn xml_reencoding() {
        assert_eq!(with(false, true).transliterate("<a & b>"), "&lt;a &amp; b&gt;");
        assert_eq!(with(false, false).transliterate("<a & b>"), "<a & b>");
        // Metacharacters produced by the tables are escaped too.
        assert_eq!(with(false, true).transliterate("\u{00AB}x\u{00BB}"), "&lt;&lt;x&gt;&gt;");
    }

    #[test]
    fn escape_xml_borrows_clean_input() {
        assert!(matches!(escape_xml("plain text"), Cow::Borrowed(_)));
        assert_eq!(escape_xml("a<b"), "a&lt;b");
    }

    #[test]
    fn extension_table_fills_window() {
        let table = ExtensionTable::parse("4E2D\tzhong \n0041\tnever\n", None);
        let t = Transliterator::with_extensions(TransliterateOptions::default(), &table);
        assert_eq!(t.transliterate("\u{4E2D}guo"), "zhong guo");
        // ASCII never reaches the extension tier.
        assert_eq!(t.transliterate("A"), "A");
    }

    #[test]
    fn static_tables_outrank_extensions() {
        // U+3001 is covered by the symbol table, below the window.
        let table = ExtensionTable::parse("3001\tcomma\nFF0C\tcomma\n", None);
        let t = Transliterator::with_extensions(TransliterateOptions::default(), &table);
        assert_eq!(t.transliterate("\u{3001}"), ",");
        assert_eq!(t.transliterate("\u{FF0C}"), ",");
    }

    #[test]
    fn extensions_outside_window_are_ignored() {
        let table = ExtensionTable::parse("1F600\tsmile\n", None);
        let t = Transliterator::with_extensions(TransliterateOptions::default(), &table);
        assert_eq!(t.transliterate("\u{1F600}"), "");
    }

    #[test]
    fn shared_instances_are_reused_per_options() {
        let combos = [(false, false), (false, true), (true, false), (true, true)];
        for (spell_greek, reencode_xml) in combos {
            let options = TransliterateOptions {
                spell_greek,
                reencode_xml,
            };
            let first = Transliterator::shared(options);
            assert!(ptr::eq(first, Transliterator::shared(options)));
            assert_eq!(first.options(), options);
            assert_eq!(first.chain().len(), if spell_greek { 5 } else { 4 });
        }
        assert!(!ptr::eq(
            Transliterator::shared(TransliterateOptions::default()),
            Transliterator::shared(TransliterateOptions {
                spell_greek: true,
                reencode_xml: false,
            })
        ));
    }

    #[test]
    fn chain_order() {
        let table = ExtensionTable::empty();
        let t = Transliterator::with_extensions(
            TransliterateOptions {
                spell_greek: true,
                reencode_xml: false,
            },
            &table,
        );
        assert_eq!(
            t.chain().names().collect::<Vec<_>>(),
            ["greek", "ascii", "symbols", "extra", "extensions"]
        );
    }
}
