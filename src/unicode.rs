//! Character-level Unicode classification for Japanese text.
//!
//! All predicates are range tests over fixed inclusive codepoint tables.
//! They are total: any `char` classifies to `true` or `false`, never a panic.

/// Inclusive codepoint range.
pub type Range = (u32, u32);

pub const HIRAGANA_START: u32 = 0x3041;
pub const HIRAGANA_END: u32 = 0x3096;
pub const KATAKANA_START: u32 = 0x30A1;
pub const KATAKANA_END: u32 = 0x30FC;
pub const KANJI_START: u32 = 0x4E00;
pub const KANJI_END: u32 = 0x9FAF;
pub const PROLONGED_SOUND_MARK: u32 = 0x30FC;
pub const KANA_SLASH_DOT: u32 = 0x30FB;

const HIRAGANA_BLOCK: Range = (0x3040, 0x309F);
const KATAKANA_BLOCK: Range = (0x30A0, 0x30FF);
const HANKAKU_KATAKANA: Range = (0xFF66, 0xFF9F);
const KANA_PUNCTUATION: Range = (0xFF61, 0xFF65);
const KATAKANA_PUNCTUATION: Range = (0x30FB, 0x30FC);
const CJK_SYMBOLS_PUNCTUATION: Range = (0x3000, 0x303F);
const COMMON_CJK: Range = (0x4E00, 0x9FFF);
const RARE_CJK: Range = (0x3400, 0x4DBF);

const ZENKAKU_NUMBERS: Range = (0xFF10, 0xFF19);
const ZENKAKU_UPPERCASE: Range = (0xFF21, 0xFF3A);
const ZENKAKU_LOWERCASE: Range = (0xFF41, 0xFF5A);
const ZENKAKU_PUNCTUATION_1: Range = (0xFF01, 0xFF0F);
const ZENKAKU_PUNCTUATION_2: Range = (0xFF1A, 0xFF1F);
const ZENKAKU_PUNCTUATION_3: Range = (0xFF3B, 0xFF3F);
const ZENKAKU_PUNCTUATION_4: Range = (0xFF5B, 0xFF60);
const ZENKAKU_SYMBOLS_CURRENCY: Range = (0xFFE0, 0xFFEE);

const MODERN_ENGLISH: Range = (0x0000, 0x007F);
const SMART_QUOTES: [Range; 2] = [(0x2018, 0x2019), (0x201C, 0x201D)];

/// Ā ā, Ē ē, Ī ī, Ō ō, Ū ū.
const HEPBURN_MACRONS: [Range; 5] = [
    (0x0100, 0x0101),
    (0x0112, 0x0113),
    (0x012A, 0x012B),
    (0x014C, 0x014D),
    (0x016A, 0x016B),
];

pub const KANA_RANGES: [Range; 4] = [
    HIRAGANA_BLOCK,
    KATAKANA_BLOCK,
    KANA_PUNCTUATION,
    HANKAKU_KATAKANA,
];

pub const JA_PUNCTUATION_RANGES: [Range; 8] = [
    CJK_SYMBOLS_PUNCTUATION,
    KANA_PUNCTUATION,
    KATAKANA_PUNCTUATION,
    ZENKAKU_PUNCTUATION_1,
    ZENKAKU_PUNCTUATION_2,
    ZENKAKU_PUNCTUATION_3,
    ZENKAKU_PUNCTUATION_4,
    ZENKAKU_SYMBOLS_CURRENCY,
];

/// Everything that counts as Japanese text: kana, punctuation, zenkaku
/// letters and numbers, and the common/rare CJK ideograph blocks.
pub const JAPANESE_RANGES: [Range; 16] = [
    HIRAGANA_BLOCK,
    KATAKANA_BLOCK,
    KANA_PUNCTUATION,
    HANKAKU_KATAKANA,
    CJK_SYMBOLS_PUNCTUATION,
    KATAKANA_PUNCTUATION,
    ZENKAKU_PUNCTUATION_1,
    ZENKAKU_PUNCTUATION_2,
    ZENKAKU_PUNCTUATION_3,
    ZENKAKU_PUNCTUATION_4,
    ZENKAKU_SYMBOLS_CURRENCY,
    ZENKAKU_UPPERCASE,
    ZENKAKU_LOWERCASE,
    ZENKAKU_NUMBERS,
    COMMON_CJK,
    RARE_CJK,
];

pub const ROMAJI_RANGES: [Range; 6] = [
    MODERN_ENGLISH,
    HEPBURN_MACRONS[0],
    HEPBURN_MACRONS[1],
    HEPBURN_MACRONS[2],
    HEPBURN_MACRONS[3],
    HEPBURN_MACRONS[4],
];

pub const EN_PUNCTUATION_RANGES: [Range; 6] = [
    (0x20, 0x2F),
    (0x3A, 0x3F),
    (0x5B, 0x60),
    (0x7B, 0x7E),
    SMART_QUOTES[0],
    SMART_QUOTES[1],
];

/// Tests a character against a list of inclusive codepoint ranges.
pub fn is_char_in_ranges(c: char, ranges: &[Range]) -> bool {
    let code = c as u32;
    ranges.iter().any(|&(start, end)| start <= code && code <= end)
}

pub fn is_char_long_dash(c: char) -> bool {
    c as u32 == PROLONGED_SOUND_MARK
}

pub fn is_char_slash_dot(c: char) -> bool {
    c as u32 == KANA_SLASH_DOT
}

/// Hiragana, plus ー and ・ which are shared kana symbols rather than
/// directional katakana. Keeping them hiragana-compatible lets the
/// katakana→hiragana codeshift treat them as pass-through.
pub fn is_char_hiragana(c: char) -> bool {
    if is_char_long_dash(c) || is_char_slash_dot(c) {
        return true;
    }
    let code = c as u32;
    (HIRAGANA_START..=HIRAGANA_END).contains(&code)
}

/// Katakana, plus ー and ・ (see [`is_char_hiragana`]).
pub fn is_char_katakana(c: char) -> bool {
    if is_char_long_dash(c) || is_char_slash_dot(c) {
        return true;
    }
    let code = c as u32;
    (KATAKANA_START..=KATAKANA_END).contains(&code)
}

pub fn is_char_kana(c: char) -> bool {
    is_char_hiragana(c) || is_char_katakana(c)
}

pub fn is_char_kanji(c: char) -> bool {
    let code = c as u32;
    (KANJI_START..=KANJI_END).contains(&code)
}

pub fn is_char_japanese(c: char) -> bool {
    is_char_in_ranges(c, &JAPANESE_RANGES)
}

/// Romaji in the broad sense: ASCII plus the Hepburn macron vowels.
pub fn is_char_romaji(c: char) -> bool {
    is_char_in_ranges(c, &ROMAJI_RANGES)
}

pub fn is_char_english_punctuation(c: char) -> bool {
    is_char_in_ranges(c, &EN_PUNCTUATION_RANGES)
}

pub fn is_char_japanese_punctuation(c: char) -> bool {
    is_char_in_ranges(c, &JA_PUNCTUATION_RANGES)
}

pub fn is_char_punctuation(c: char) -> bool {
    is_char_english_punctuation(c) || is_char_japanese_punctuation(c)
}

pub fn is_char_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_char_english_numeral(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_char_japanese_numeral(c: char) -> bool {
    let code = c as u32;
    (ZENKAKU_NUMBERS.0..=ZENKAKU_NUMBERS.1).contains(&code)
}

pub fn is_char_english_space(c: char) -> bool {
    c == ' '
}

pub fn is_char_japanese_space(c: char) -> bool {
    c == '\u{3000}'
}

pub fn is_char_vowel(c: char, include_y: bool) -> bool {
    let c = c.to_ascii_lowercase();
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o') || (include_y && c == 'y')
}

pub fn is_char_consonant(c: char, include_y: bool) -> bool {
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o') && (include_y || c != 'y')
}
