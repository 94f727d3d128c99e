mod cli;
mod config;
mod extensions;
mod fold;
mod homoglyph;
mod transliterate;
