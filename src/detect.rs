//! String-level script detection built on the per-character classifier.
//!
//! Every predicate returns `false` for empty input.

use crate::unicode::{
    is_char_hiragana, is_char_japanese, is_char_kana, is_char_kanji, is_char_katakana,
    is_char_romaji,
};

/// Tests if `input` is entirely hiragana.
pub fn is_hiragana(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_char_hiragana)
}

/// Tests if `input` is entirely katakana.
pub fn is_katakana(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_char_katakana)
}

/// Tests if `input` is entirely kana (hiragana and/or katakana).
pub fn is_kana(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_char_kana)
}

/// Tests if `input` is entirely kanji (CJK ideographs).
pub fn is_kanji(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_char_kanji)
}

/// Tests if `input` contains only Japanese text: kanji, kana, zenkaku
/// letters/numbers and Japanese punctuation. `augmented` allows extra
/// characters (e.g. a hyphen inside a loanword) through the check.
pub fn is_japanese_augmented(input: &str, augmented: &[char]) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| is_char_japanese(c) || augmented.contains(&c))
}

pub fn is_japanese(input: &str) -> bool {
    is_japanese_augmented(input, &[])
}

/// Tests if `input` contains only romaji characters (Hepburn macrons allowed).
pub fn is_romaji_augmented(input: &str, augmented: &[char]) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| is_char_romaji(c) || augmented.contains(&c))
}

pub fn is_romaji(input: &str) -> bool {
    is_romaji_augmented(input, &[])
}

/// Tests if `input` mixes kana and romaji. With `ignore_kanji` the presence
/// of kanji does not disqualify the mix; without it any kanji makes this
/// `false`.
pub fn is_mixed(input: &str, ignore_kanji: bool) -> bool {
    !input.is_empty()
        && input.chars().any(is_char_kana)
        && input.chars().any(is_char_romaji)
        && (ignore_kanji || !input.chars().any(is_char_kanji))
}
