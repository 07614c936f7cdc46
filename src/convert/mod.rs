//! The four public conversions: to_kana, to_romaji, to_hiragana,
//! to_katakana.
//!
//! All of them are total over text. Unmapped input echoes through
//! unchanged, empty input yields an empty string.

mod options;
mod shift;

#[cfg(test)]
mod tests;

pub use options::{ConvertOptions, ParseRomanizationError, ParseScriptError, Romanization, Script};
pub use shift::{hiragana_to_katakana, katakana_to_hiragana};

use tracing::debug_span;

use crate::detect::{is_katakana, is_mixed, is_romaji};
use crate::mapping::{self, apply_mapping};
use crate::unicode::{is_char_english_punctuation, is_char_uppercase};

/// Converts romaji to kana: lowercase becomes hiragana, uppercase katakana.
pub fn to_kana(input: &str) -> String {
    to_kana_with(input, &ConvertOptions::default())
}

pub fn to_kana_with(input: &str, options: &ConvertOptions) -> String {
    let _span = debug_span!("to_kana", len = input.len()).entered();
    let tree = mapping::romaji_to_kana_tree(
        options.use_obsolete_kana,
        options.custom_mapping.as_ref(),
    );
    let chars: Vec<char> = input.chars().collect();
    let lowered: String = chars.iter().map(|c| c.to_ascii_lowercase()).collect();

    let mut out = String::new();
    for span in apply_mapping(&lowered, &tree, options.convert_ending) {
        match span.value {
            // An undecided tail stays as the user typed it.
            None => out.extend(&chars[span.start..]),
            Some(kana) => {
                let enforce_hiragana = options.enforce == Some(Script::Hiragana);
                let enforce_katakana = options.enforce == Some(Script::Katakana)
                    || chars[span.start..span.end]
                        .iter()
                        .all(|&c| is_char_uppercase(c));
                if enforce_hiragana || !enforce_katakana {
                    out.push_str(&kana);
                } else {
                    out.push_str(&hiragana_to_katakana(&kana));
                }
            }
        }
    }
    out
}

/// Converts kana to romaji using the selected romanisation scheme.
pub fn to_romaji(input: &str) -> String {
    to_romaji_with(input, &ConvertOptions::default())
}

pub fn to_romaji_with(input: &str, options: &ConvertOptions) -> String {
    let _span = debug_span!("to_romaji", len = input.len()).entered();
    let tree =
        mapping::kana_to_romaji_tree(options.romanization, options.custom_mapping.as_ref());
    // Normalise script first so the tree only needs hiragana keys.
    let hira = katakana_to_hiragana(input, true);
    let chars: Vec<char> = input.chars().collect();

    let mut out = String::new();
    for span in apply_mapping(&hira, &tree, options.convert_ending) {
        match span.value {
            None => out.extend(&chars[span.start..]),
            Some(romaji) => {
                let source: String = chars[span.start..span.end].iter().collect();
                if options.uppercase_katakana && is_katakana(&source) {
                    out.push_str(&romaji.to_uppercase());
                } else {
                    out.push_str(&romaji);
                }
            }
        }
    }
    out
}

/// Converts any input to hiragana: katakana is codeshifted, romaji routed
/// through to_kana.
pub fn to_hiragana(input: &str) -> String {
    to_hiragana_with(input, &ConvertOptions::default())
}

pub fn to_hiragana_with(input: &str, options: &ConvertOptions) -> String {
    let _span = debug_span!("to_hiragana", len = input.len()).entered();
    if options.pass_romaji {
        return katakana_to_hiragana(input, false);
    }
    if is_mixed(input, true) {
        let converted = katakana_to_hiragana(input, false);
        return to_kana_with(&converted, &kana_options(options));
    }
    if is_romaji(input) || input.chars().any(is_char_english_punctuation) {
        return to_kana_with(input, &kana_options(options));
    }
    katakana_to_hiragana(input, false)
}

/// Converts any input to katakana: hiragana is codeshifted, romaji routed
/// through to_kana first.
pub fn to_katakana(input: &str) -> String {
    to_katakana_with(input, &ConvertOptions::default())
}

pub fn to_katakana_with(input: &str, options: &ConvertOptions) -> String {
    let _span = debug_span!("to_katakana", len = input.len()).entered();
    if options.pass_romaji {
        return hiragana_to_katakana(input);
    }
    if is_mixed(input, true) || is_romaji(input) || input.chars().any(is_char_english_punctuation)
    {
        let hiragana = to_kana_with(input, &kana_options(options));
        return hiragana_to_katakana(&hiragana);
    }
    hiragana_to_katakana(input)
}

/// The to_kana options used internally by to_hiragana/to_katakana: only the
/// mapping-affecting fields carry over, and the output script is pinned to
/// hiragana so casing can't flip spans to katakana midway.
fn kana_options(options: &ConvertOptions) -> ConvertOptions {
    ConvertOptions {
        use_obsolete_kana: options.use_obsolete_kana,
        custom_mapping: options.custom_mapping.clone(),
        convert_ending: options.convert_ending,
        enforce: Some(Script::Hiragana),
        ..ConvertOptions::default()
    }
}
