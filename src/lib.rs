//! Bidirectional transliteration between romaji, hiragana, and katakana.
//!
//! Conversion is driven by prefix trees built from romanisation tables and a
//! longest-match parser over them. Trees for each direction and option set are
//! built once and shared process-wide behind [`warm_cache`]/[`reset_cache`].
//!
//! The high-level entry points are [`to_kana`], [`to_romaji`], [`to_hiragana`],
//! and [`to_katakana`], each with a `_with` variant taking [`ConvertOptions`].
//! Script detection ([`is_hiragana`], [`is_romaji`], ...) and tokenisation
//! ([`tokenize`]) operate without touching the mapping trees.

pub mod convert;
pub mod detect;
pub mod mapping;
pub mod okurigana;
pub mod tokenize;
pub mod trace_init;
pub mod unicode;

pub use convert::{
    to_hiragana, to_hiragana_with, to_kana, to_kana_with, to_katakana, to_katakana_with,
    to_romaji, to_romaji_with, ConvertOptions, ParseRomanizationError, ParseScriptError,
    Romanization, Script,
};
pub use detect::{
    is_hiragana, is_japanese, is_japanese_augmented, is_kana, is_kanji, is_katakana, is_mixed,
    is_romaji, is_romaji_augmented,
};
pub use mapping::{apply_mapping, CustomMapping, MapNode, MatchSpan};
pub use okurigana::strip_okurigana;
pub use tokenize::{tokenize, tokenize_compact, Token, TokenKind, Tokens};

/// Pre-builds the four base mapping trees so the first conversion on a hot
/// path does not pay the construction cost.
pub fn warm_cache() {
    mapping::cache::warm();
}

/// Drops all memoised mapping trees. Subsequent conversions rebuild on demand.
pub fn reset_cache() {
    mapping::cache::reset();
}
