//! Ordered lookup chain over replacement tables.
//!
//! Each tier implements [`Resolver`]; a [`ResolverChain`] probes tiers in the
//! order they were pushed and returns the first hit.

use std::fmt;
use std::ops::RangeInclusive;

use asciifold_tables::CodePointMap;

/// One tier of the lookup chain.
pub trait Resolver: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    fn lookup(&self, c: char) -> Option<&str>;
}

impl Resolver for CodePointMap {
    fn name(&self) -> &str {
        CodePointMap::name(self)
    }

    fn lookup(&self, c: char) -> Option<&str> {
        self.get(c)
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, c: char) -> Option<&str> {
        (**self).lookup(c)
    }
}

/// Restricts a resolver to a contiguous code point range.
#[derive(Debug, Clone)]
pub struct Gated<R> {
    inner: R,
    range: RangeInclusive<char>,
}

impl<R> Gated<R> {
    pub fn new(inner: R, range: RangeInclusive<char>) -> Self {
        Self { inner, range }
    }
}

impl<R: Resolver> Resolver for Gated<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn lookup(&self, c: char) -> Option<&str> {
        if self.range.contains(&c) {
            self.inner.lookup(c)
        } else {
            None
        }
    }
}

/// Resolvers probed in priority order.
#[derive(Default)]
pub struct ResolverChain<'a> {
    tiers: Vec<Box<dyn Resolver + 'a>>,
}

impl<'a> ResolverChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, resolver: impl Resolver + 'a) -> Self {
        self.push(resolver);
        self
    }

    pub fn push(&mut self, resolver: impl Resolver + 'a) {
        self.tiers.push(Box::new(resolver));
    }

    #[must_use]
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.tiers.iter().find_map(|tier| tier.lookup(c))
    }

    /// Names of the tiers, highest priority first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|tier| tier.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl fmt::Debug for ResolverChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Gated, Resolver, ResolverChain};
    use asciifold_tables::CodePointMap;

    static FIRST: CodePointMap = CodePointMap::new("first", &[('\u{00E9}', "e1")]);
    static SECOND: CodePointMap =
        CodePointMap::new("second", &[('\u{00E9}', "e2"), ('\u{00F1}', "n")]);

    #[test]
    fn earlier_tier_wins() {
        let chain = ResolverChain::new().with(&FIRST).with(&SECOND);
        assert_eq!(chain.lookup('é'), Some("e1"));
        assert_eq!(chain.lookup('ñ'), Some("n"));
        assert_eq!(chain.lookup('x'), None);
    }

    #[test]
    fn names_follow_priority() {
        let chain = ResolverChain::new().with(&SECOND).with(&FIRST);
        assert_eq!(chain.names().collect::<Vec<_>>(), ["second", "first"]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn gate_hides_entries_outside_range() {
        let gated = Gated::new(&SECOND, '\u{00F0}'..='\u{00FF}');
        assert_eq!(gated.lookup('ñ'), Some("n"));
        assert_eq!(gated.lookup('é'), None);
        assert_eq!(gated.name(), "second");
    }
}
