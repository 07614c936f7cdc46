//! Builder for the romaji → kana mapping tree.
//!
//! Construction layers passes over a flat kunrei-flavoured base table:
//! yōon combinations, symbol equivalences, vowel constructions, alias
//! spellings (installed as deep copies, never shared subtrees), small-letter
//! forms, irregular special cases, and gemination siblings. Not exactly
//! kunrei shiki: e.g. ぢゃ is reached via "dya" rather than "zya" to avoid
//! clashing with じゃ.

use super::custom::CustomMapping;
use super::tree::MapNode;

const BASE: &[(&str, &str)] = &[
    ("a", "あ"),
    ("i", "い"),
    ("u", "う"),
    ("e", "え"),
    ("o", "お"),
    ("ka", "か"),
    ("ki", "き"),
    ("ku", "く"),
    ("ke", "け"),
    ("ko", "こ"),
    ("sa", "さ"),
    ("si", "し"),
    ("su", "す"),
    ("se", "せ"),
    ("so", "そ"),
    ("ta", "た"),
    ("ti", "ち"),
    ("tu", "つ"),
    ("te", "て"),
    ("to", "と"),
    ("na", "な"),
    ("ni", "に"),
    ("nu", "ぬ"),
    ("ne", "ね"),
    ("no", "の"),
    ("ha", "は"),
    ("hi", "ひ"),
    ("hu", "ふ"),
    ("he", "へ"),
    ("ho", "ほ"),
    ("ma", "ま"),
    ("mi", "み"),
    ("mu", "む"),
    ("me", "め"),
    ("mo", "も"),
    ("ya", "や"),
    ("yu", "ゆ"),
    ("yo", "よ"),
    ("ra", "ら"),
    ("ri", "り"),
    ("ru", "る"),
    ("re", "れ"),
    ("ro", "ろ"),
    ("wa", "わ"),
    ("wi", "ゐ"),
    ("we", "ゑ"),
    ("wo", "を"),
    ("ga", "が"),
    ("gi", "ぎ"),
    ("gu", "ぐ"),
    ("ge", "げ"),
    ("go", "ご"),
    ("za", "ざ"),
    ("zi", "じ"),
    ("zu", "ず"),
    ("ze", "ぜ"),
    ("zo", "ぞ"),
    ("da", "だ"),
    ("di", "ぢ"),
    ("du", "づ"),
    ("de", "で"),
    ("do", "ど"),
    ("ba", "ば"),
    ("bi", "び"),
    ("bu", "ぶ"),
    ("be", "べ"),
    ("bo", "ぼ"),
    ("pa", "ぱ"),
    ("pi", "ぴ"),
    ("pu", "ぷ"),
    ("pe", "ぺ"),
    ("po", "ぽ"),
    ("va", "ゔぁ"),
    ("vi", "ゔぃ"),
    ("vu", "ゔ"),
    ("ve", "ゔぇ"),
    ("vo", "ゔぉ"),
];

const SPECIAL_SYMBOLS: &[(&str, &str)] = &[
    (".", "。"),
    (",", "、"),
    (":", "："),
    ("/", "・"),
    ("!", "！"),
    ("?", "？"),
    ("~", "〜"),
    ("-", "ー"),
    ("‘", "「"),
    ("’", "」"),
    ("“", "『"),
    ("”", "』"),
    ("[", "［"),
    ("]", "］"),
    ("(", "（"),
    (")", "）"),
    ("{", "｛"),
    ("}", "｝"),
];

/// Consonant onsets and the i-column kana they contract through (kyo → き + ょ).
const CONSONANTS: &[(&str, &str)] = &[
    ("k", "き"),
    ("s", "し"),
    ("t", "ち"),
    ("n", "に"),
    ("h", "ひ"),
    ("m", "み"),
    ("r", "り"),
    ("g", "ぎ"),
    ("z", "じ"),
    ("d", "ぢ"),
    ("b", "び"),
    ("p", "ぴ"),
    ("v", "ゔ"),
    ("q", "く"),
    ("f", "ふ"),
];

const SMALL_Y: &[(&str, &str)] = &[
    ("ya", "ゃ"),
    ("yi", "ぃ"),
    ("yu", "ゅ"),
    ("ye", "ぇ"),
    ("yo", "ょ"),
];

const SMALL_VOWELS: &[(&str, &str)] = &[
    ("a", "ぁ"),
    ("i", "ぃ"),
    ("u", "ぅ"),
    ("e", "ぇ"),
    ("o", "ぉ"),
];

/// Typing one spelling should behave exactly like having typed the other.
/// Order matters: the plain aliases install first, then the exceptions
/// overwrite the affected leaves of the freshly copied subtrees.
const ALIASES: &[(&str, &str)] = &[
    ("sh", "sy"), // sha -> sya
    ("ch", "ty"), // cho -> tyo
    ("cy", "ty"), // cyo -> tyo
    ("chy", "ty"), // chyu -> tyu
    ("shy", "sy"), // shya -> sya
    ("dj", "dy"), // dja -> dya
    ("j", "zy"),  // ja -> zya
    ("jy", "zy"), // jye -> zye
    // exceptions to the rules above
    ("shi", "si"),
    ("chi", "ti"),
    ("tsu", "tu"),
    ("dzu", "du"),
    ("ji", "zi"),
    ("dji", "di"),
    ("fu", "hu"),
];

/// xtu → っ etc.; small vowels and small y rows are appended below.
const SMALL_LETTERS_BASE: &[(&str, &str)] = &[
    ("tu", "っ"),
    ("wa", "ゎ"),
    ("ka", "ヵ"),
    ("ke", "ヶ"),
];

/// Mappings that follow no notable pattern.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("yi", "い"),
    ("wu", "う"),
    ("ye", "いぇ"),
    ("wi", "うぃ"),
    ("we", "うぇ"),
    ("kwa", "くぁ"),
    ("whu", "う"),
    // it's not thya for てゃ but tha, and tha is not てぁ but てゃ
    ("tha", "てゃ"),
    ("thu", "てゅ"),
    ("tho", "てょ"),
    ("dha", "でゃ"),
    ("dhu", "でゅ"),
    ("dho", "でょ"),
];

/// Onsets that combine with small vowels: swi → すぃ and friends.
const AIUEO_CONSTRUCTIONS: &[(&str, &str)] = &[
    ("wh", "う"),
    ("qw", "く"),
    ("q", "く"),
    ("gw", "ぐ"),
    ("sw", "す"),
    ("ts", "つ"),
    ("th", "て"),
    ("tw", "と"),
    ("dh", "で"),
    ("dw", "ど"),
    ("fw", "ふ"),
    ("f", "ふ"),
];

/// Spellings whose alias rules give alternate forms of a key, e.g.
/// "tu" → "tsu" because typing ts behaves like typing t.
fn alternatives(key: &str) -> Vec<String> {
    let mut items = Vec::new();
    for &(alias, target) in ALIASES.iter().chain(&[("c", "k")]) {
        if let Some(rest) = key.strip_prefix(target) {
            items.push(format!("{alias}{rest}"));
        }
    }
    items
}

/// Builds the full romaji → kana tree.
pub fn build() -> MapNode {
    let mut tree = MapNode::from_pairs(BASE);

    // kya, syo, ... : consonant + small y row
    for &(consonant, y_kana) in CONSONANTS {
        for &(roma, small) in SMALL_Y {
            tree.insert(
                &format!("{consonant}{roma}"),
                format!("{y_kana}{small}"),
            );
        }
    }

    for &(symbol, jsymbol) in SPECIAL_SYMBOLS {
        tree.insert(symbol, jsymbol);
    }

    // things like うぃ, くぃ
    for &(consonant, kana) in AIUEO_CONSTRUCTIONS {
        for &(vowel, small) in SMALL_VOWELS {
            tree.insert(&format!("{consonant}{vowel}"), format!("{kana}{small}"));
        }
    }

    // the moraic nasal in its different spellings
    for n_spelling in ["n", "n'", "xn"] {
        tree.insert(n_spelling, "ん");
    }

    // c behaves like k, except for ch- which the aliases below overwrite.
    // A copy, not a shared subtree: later passes mutate both independently.
    if let Some(k) = tree.subtree("k") {
        let k = k.clone();
        tree.set_subtree("c", k);
    }

    for &(alias, target) in ALIASES {
        if let Some(source) = tree.subtree(target) {
            let source = source.clone();
            tree.set_subtree(alias, source);
        }
    }

    // small letters: xtu → っ, ltu → っ, plus alias spellings (ltsu → っ)
    let small_letters: Vec<(String, String)> = SMALL_LETTERS_BASE
        .iter()
        .chain(SMALL_VOWELS)
        .chain(SMALL_Y)
        .map(|&(r, k)| (r.to_string(), k.to_string()))
        .collect();
    for (roma, kana) in &small_letters {
        for prefix in ["x", "l"] {
            tree.insert(&format!("{prefix}{roma}"), kana.clone());
        }
        for alt in alternatives(roma) {
            for prefix in ["x", "l"] {
                tree.insert(&format!("{prefix}{alt}"), kana.clone());
            }
        }
    }

    for &(roma, kana) in SPECIAL_CASES {
        tree.insert(roma, kana);
    }

    // gemination: kka → っか etc., a doubled-initial sibling for every
    // consonant subtree. "nn" is the moraic nasal, not a sokuon, so the
    // doubled entry under n is dropped again afterwards.
    let geminable: Vec<char> = CONSONANTS
        .iter()
        .map(|&(c, _)| c.chars().next().unwrap_or(' '))
        .chain(['c', 'y', 'w', 'j'])
        .collect();
    for consonant in geminable {
        if let Some(subtree) = tree.child(consonant) {
            let doubled = subtree.map_values(&|v| format!("っ{v}"));
            let mut path = String::new();
            path.push(consonant);
            path.push(consonant);
            tree.set_subtree(&path, doubled);
        }
    }
    tree.subtree_mut("n").remove_child('n');

    tree
}

/// The archaic wi/we kana, applied as an override on the base tree.
pub fn obsolete_kana_mapping() -> CustomMapping {
    [("wi", "ゐ"), ("we", "ゑ")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
