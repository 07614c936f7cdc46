//! Okurigana stripping, a thin helper over the tokenizer.

use crate::detect::{is_japanese, is_kana};
use crate::tokenize::tokenize;
use crate::unicode::{is_char_kana, is_char_kanji};

/// Strips the trailing okurigana from `input` (or the leading ones with
/// `leading`). With `match_kanji` the input is treated as the furigana of
/// that kanji text, and the kana token to strip is taken from it instead.
///
/// Returns the input unchanged when it isn't Japanese, doesn't carry kana
/// in the position being stripped, or the matcher is unusable.
pub fn strip_okurigana(input: &str, leading: bool, match_kanji: Option<&str>) -> String {
    let invalid_matcher = match match_kanji {
        Some(kanji) => !kanji.chars().any(is_char_kanji),
        None => is_kana(input),
    };
    let missing_edge_kana = if leading {
        !input.chars().next().is_some_and(is_char_kana)
    } else {
        !input.chars().next_back().is_some_and(is_char_kana)
    };
    if !is_japanese(input) || missing_edge_kana || invalid_matcher {
        return input.to_string();
    }

    let chars = match_kanji.unwrap_or(input);
    let tokens: Vec<String> = tokenize(chars).map(|t| t.text).collect();
    let strip = if leading { tokens.first() } else { tokens.last() };
    match strip {
        Some(token) if leading => input
            .strip_prefix(token.as_str())
            .unwrap_or(input)
            .to_string(),
        Some(token) => input
            .strip_suffix(token.as_str())
            .unwrap_or(input)
            .to_string(),
        None => input.to_string(),
    }
}
