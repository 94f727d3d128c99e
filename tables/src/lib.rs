//! Code point replacement tables for asciifold.
//!
//! This crate is pure data: every table is a sorted static slice of
//! `(char, replacement)` pairs with no IO and no dependencies. The engine in
//! `asciifold-core` decides the order in which tables are probed.

mod ascii;
mod extra;
pub mod german;
mod greek;
mod symbols;

pub use ascii::ASCII;
pub use extra::EXTRA;
pub use greek::GREEK;
pub use symbols::SYMBOLS;

/// An immutable map from a code point to its ASCII replacement.
///
/// Entries must be sorted by code point with no duplicates; lookups use
/// binary search. Replacements may be empty (the glyph is dropped) or carry
/// spaces that keep expansions from fusing with neighbouring words.
#[derive(Debug, Clone, Copy)]
pub struct CodePointMap {
    name: &'static str,
    entries: &'static [(char, &'static str)],
}

impl CodePointMap {
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [(char, &'static str)]) -> Self {
        Self { name, entries }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&c, |&(key, _)| key)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// The static tables probed after Greek spelling, in priority order.
pub static STATIC_TABLES: [&CodePointMap; 3] = [&ASCII, &SYMBOLS, &EXTRA];

#[cfg(test)]
mod tests {
    use super::{ASCII, CodePointMap, EXTRA, GREEK, STATIC_TABLES, SYMBOLS};

    fn all_tables() -> [&'static CodePointMap; 4] {
        [&ASCII, &SYMBOLS, &EXTRA, &GREEK]
    }

    #[test]
    fn tables_are_sorted_and_unique() {
        for table in all_tables() {
            let keys: Vec<char> = table.iter().map(|(c, _)| c).collect();
            for pair in keys.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "{}: {:?} is not strictly before {:?}",
                    table.name(),
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn replacements_are_printable_ascii() {
        for table in all_tables() {
            for (c, replacement) in table.iter() {
                assert!(
                    replacement.bytes().all(|b| (0x20..0x7f).contains(&b)),
                    "{}: U+{:04X} maps to non-printable {replacement:?}",
                    table.name(),
                    c as u32
                );
            }
        }
    }

    #[test]
    fn no_table_maps_ascii_or_combining_marks() {
        for table in all_tables() {
            for (c, _) in table.iter() {
                assert!(!c.is_ascii(), "{}: {c:?}", table.name());
                assert!(
                    !('\u{0300}'..='\u{036F}').contains(&c),
                    "{}: combining mark U+{:04X}",
                    table.name(),
                    c as u32
                );
            }
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(ASCII.get('é'), Some("e"));
        assert_eq!(ASCII.get('ß'), Some("ss"));
        assert_eq!(SYMBOLS.get('\u{2126}'), Some(" (ohm) "));
        assert_eq!(SYMBOLS.get('\u{2014}'), Some("--"));
        assert_eq!(EXTRA.get('\u{FB01}'), Some("fi"));
        assert_eq!(GREEK.get('\u{03B1}'), Some("alpha"));
        assert_eq!(GREEK.get('\u{0392}'), Some("Beta"));
        assert_eq!(GREEK.get('\u{03BB}'), Some("lambda"));
        assert_eq!(ASCII.get('\u{4E2D}'), None);
    }

    #[test]
    fn priority_order_is_ascii_symbols_extra() {
        let names: Vec<&str> = STATIC_TABLES.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["ascii", "symbols", "extra"]);
    }
}
