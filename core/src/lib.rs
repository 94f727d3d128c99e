//! Unicode to ASCII folding engine.
//!
//! - [`transliterate`]: maps every code point through layered tables to
//!   printable ASCII.
//! - [`normalize_homoglyphs`]: settles look-alike glyphs (`ß` vs `β`, open E
//!   vs epsilon) before transliteration.
//! - [`is_german_letter`]: the word-level eszett/beta verdict both rely on.
//! - [`fold`]: the two passes composed from one [`FoldOptions`].
//!
//! Nothing here fails. Unmappable characters are dropped and a missing
//! extension table only narrows coverage.

pub mod disambiguate;
pub mod extensions;
pub mod homoglyph;
pub mod pipeline;
mod resolve;
pub mod transliterate;

pub use disambiguate::{ContextWindow, is_german_letter, is_german_letter_at};
pub use extensions::{ExtensionError, ExtensionTable, LineError, LoadState};
pub use homoglyph::{HomoglyphOptions, normalize_homoglyphs};
pub use pipeline::{FieldKind, FoldOptions, Folder, ParseFieldKindError, fold};
pub use resolve::{Gated, Resolver, ResolverChain};
pub use transliterate::{TransliterateOptions, Transliterator, escape_xml, transliterate};
