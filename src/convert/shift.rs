//! Direct kana block codepoint shifting and long-vowel-mark expansion.

use crate::unicode::{
    is_char_hiragana, is_char_katakana, is_char_long_dash, is_char_slash_dot, HIRAGANA_START,
    KATAKANA_START,
};

/// ヵ and ヶ have no hiragana counterpart in common use; the shift leaves
/// them alone.
fn is_kana_as_symbol(c: char) -> bool {
    matches!(c, 'ヵ' | 'ヶ')
}

fn long_vowel(romaji: char) -> Option<char> {
    match romaji {
        'a' => Some('あ'),
        'i' => Some('い'),
        'u' => Some('う'),
        'e' => Some('え'),
        // long o is spelled おう
        'o' => Some('う'),
        _ => None,
    }
}

fn shift(c: char, offset: i32) -> char {
    let code = c as i32 + offset;
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(c)
}

/// Shifts every hiragana letter up into the katakana block. ー and ・ are
/// shared symbols, not directional, and pass through unchanged.
pub fn hiragana_to_katakana(input: &str) -> String {
    let offset = KATAKANA_START as i32 - HIRAGANA_START as i32;
    let mut kata = String::with_capacity(input.len());
    for c in input.chars() {
        if is_char_long_dash(c) || is_char_slash_dot(c) {
            kata.push(c);
        } else if is_char_hiragana(c) {
            kata.push(shift(c, offset));
        } else {
            kata.push(c);
        }
    }
    kata
}

/// Shifts katakana down into the hiragana block, expanding an inner ー into
/// the long vowel of the preceding mora (トーキョー → とうきょう).
///
/// `destination_romaji` keeps round-tripping correct for long o spelled with
/// the prolonged mark: when the result feeds straight into kana → romaji
/// parsing, the mark after オ becomes a literal "o" (→ "oo"), not おう.
pub fn katakana_to_hiragana(input: &str, destination_romaji: bool) -> String {
    let chars: Vec<char> = input.chars().collect();
    let offset = HIRAGANA_START as i32 - KATAKANA_START as i32;
    let mut hira = String::with_capacity(input.len());
    let mut previous_kana: Option<char> = None;

    for (index, &c) in chars.iter().enumerate() {
        // Short circuit to avoid an incorrect codeshift for ー and ・.
        if is_char_slash_dot(c) || (index == 0 && is_char_long_dash(c)) || is_kana_as_symbol(c) {
            hira.push(c);
        } else if previous_kana.is_some() && index > 0 && is_char_long_dash(c) {
            let romaji = previous_kana
                .map(|kana| super::to_romaji(&kana.to_string()))
                .unwrap_or_default();
            let last = romaji.chars().last().unwrap_or(' ');
            let prev_was_katakana = is_char_katakana(chars[index - 1]);
            if prev_was_katakana && last == 'o' && destination_romaji {
                hira.push('o');
            } else {
                match long_vowel(last) {
                    Some(vowel_kana) => hira.push(vowel_kana),
                    None => hira.push(c),
                }
            }
        } else if !is_char_long_dash(c) && is_char_katakana(c) {
            let shifted = shift(c, offset);
            previous_kana = Some(shifted);
            hira.push(shifted);
        } else {
            previous_kana = None;
            hira.push(c);
        }
    }
    hira
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("とうきょう"), "トウキョウ");
        assert_eq!(hiragana_to_katakana("すげー"), "スゲー");
        assert_eq!(hiragana_to_katakana("あ・い"), "ア・イ");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("トウキョウ", false), "とうきょう");
        assert_eq!(katakana_to_hiragana("ア・イ", false), "あ・い");
    }

    #[test]
    fn test_long_vowel_expansion() {
        assert_eq!(katakana_to_hiragana("トーキョー", false), "とうきょう");
        assert_eq!(katakana_to_hiragana("スー", false), "すう");
        assert_eq!(katakana_to_hiragana("バレーボール", false), "ばれえぼうる");
    }

    #[test]
    fn test_initial_long_dash_passes_through() {
        assert_eq!(katakana_to_hiragana("ー", false), "ー");
        assert_eq!(katakana_to_hiragana("ーア", false), "ーあ");
    }

    #[test]
    fn test_long_o_for_romaji_destination() {
        // オー reads "oo" on the way to romaji, おう otherwise
        assert_eq!(katakana_to_hiragana("オー", true), "おo");
        assert_eq!(katakana_to_hiragana("オー", false), "おう");
    }

    #[test]
    fn test_kana_symbols_kept() {
        assert_eq!(katakana_to_hiragana("ヶ", false), "ヶ");
        assert_eq!(katakana_to_hiragana("ヵ", false), "ヵ");
    }
}
