//! Script-run tokenisation of mixed Japanese–English text.
//!
//! A token is a maximal run of characters sharing one [`TokenKind`]. The
//! compact scheme coarsens classification to three buckets so that runs merge
//! across spaces, adjoining kana and kanji, and numerals fold into "other".

use std::iter::FusedIterator;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::unicode::{
    is_char_english_numeral, is_char_english_punctuation, is_char_english_space,
    is_char_hiragana, is_char_japanese, is_char_japanese_numeral, is_char_japanese_punctuation,
    is_char_japanese_space, is_char_kanji, is_char_katakana, is_char_romaji,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    En,
    Ja,
    EnglishNumeral,
    JapaneseNumeral,
    EnglishPunctuation,
    JapanesePunctuation,
    Kanji,
    Hiragana,
    Katakana,
    Space,
    Other,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::En => "en",
            TokenKind::Ja => "ja",
            TokenKind::EnglishNumeral => "english_numeral",
            TokenKind::JapaneseNumeral => "japanese_numeral",
            TokenKind::EnglishPunctuation => "english_punctuation",
            TokenKind::JapanesePunctuation => "japanese_punctuation",
            TokenKind::Kanji => "kanji",
            TokenKind::Hiragana => "hiragana",
            TokenKind::Katakana => "katakana",
            TokenKind::Space => "space",
            TokenKind::Other => "other",
        }
    }
}

/// Classifies a single character, either fine-grained or into the compact
/// {En, Ja, Other} scheme.
pub fn char_type(c: char, compact: bool) -> TokenKind {
    if compact {
        if is_char_japanese_numeral(c) || is_char_english_numeral(c) {
            TokenKind::Other
        } else if is_char_english_space(c) {
            TokenKind::En
        } else if is_char_english_punctuation(c) {
            TokenKind::Other
        } else if is_char_japanese_space(c) {
            TokenKind::Ja
        } else if is_char_japanese_punctuation(c) {
            TokenKind::Other
        } else if is_char_japanese(c) {
            TokenKind::Ja
        } else if is_char_romaji(c) {
            TokenKind::En
        } else {
            TokenKind::Other
        }
    } else if is_char_japanese_numeral(c) {
        TokenKind::JapaneseNumeral
    } else if is_char_english_numeral(c) {
        TokenKind::EnglishNumeral
    } else if is_char_english_space(c) || is_char_japanese_space(c) {
        TokenKind::Space
    } else if is_char_english_punctuation(c) {
        TokenKind::EnglishPunctuation
    } else if is_char_japanese_punctuation(c) {
        TokenKind::JapanesePunctuation
    } else if is_char_kanji(c) {
        TokenKind::Kanji
    } else if is_char_hiragana(c) {
        TokenKind::Hiragana
    } else if is_char_katakana(c) {
        TokenKind::Katakana
    } else if is_char_japanese(c) {
        TokenKind::Ja
    } else if is_char_romaji(c) {
        TokenKind::En
    } else {
        TokenKind::Other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Lazy iterator over script-run tokens. Restartable by calling
/// [`tokenize`] again; carries no state between calls.
pub struct Tokens<'a> {
    chars: std::iter::Peekable<Chars<'a>>,
    compact: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let first = self.chars.next()?;
        let kind = char_type(first, self.compact);
        let mut text = String::new();
        text.push(first);
        while let Some(&c) = self.chars.peek() {
            if char_type(c, self.compact) != kind {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        Some(Token { kind, text })
    }
}

impl FusedIterator for Tokens<'_> {}

/// Splits `input` into maximal same-kind runs under the fine-grained scheme.
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens {
        chars: input.chars().peekable(),
        compact: false,
    }
}

/// Splits `input` into runs under the compact {en, ja, other} scheme, so
/// that e.g. spaces merge with surrounding English and kanji with kana.
pub fn tokenize_compact(input: &str) -> Tokens<'_> {
    Tokens {
        chars: input.chars().peekable(),
        compact: true,
    }
}
