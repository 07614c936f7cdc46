//! Builders for the kana → romaji mapping trees (Hepburn and Kunrei).

use crate::convert::Romanization;

use super::tree::MapNode;

const BASE_HEPBURN: &[(&str, &str)] = &[
    ("あ", "a"),
    ("い", "i"),
    ("う", "u"),
    ("え", "e"),
    ("お", "o"),
    ("か", "ka"),
    ("き", "ki"),
    ("く", "ku"),
    ("け", "ke"),
    ("こ", "ko"),
    ("さ", "sa"),
    ("し", "shi"),
    ("す", "su"),
    ("せ", "se"),
    ("そ", "so"),
    ("た", "ta"),
    ("ち", "chi"),
    ("つ", "tsu"),
    ("て", "te"),
    ("と", "to"),
    ("な", "na"),
    ("に", "ni"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("は", "ha"),
    ("ひ", "hi"),
    ("ふ", "fu"),
    ("へ", "he"),
    ("ほ", "ho"),
    ("ま", "ma"),
    ("み", "mi"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("や", "ya"),
    ("ゆ", "yu"),
    ("よ", "yo"),
    ("わ", "wa"),
    ("ゐ", "wi"),
    ("ゑ", "we"),
    ("を", "wo"),
    ("ん", "n"),
    ("が", "ga"),
    ("ぎ", "gi"),
    ("ぐ", "gu"),
    ("げ", "ge"),
    ("ご", "go"),
    ("ざ", "za"),
    ("じ", "ji"),
    ("ず", "zu"),
    ("ぜ", "ze"),
    ("ぞ", "zo"),
    ("だ", "da"),
    ("ぢ", "dji"),
    ("づ", "dzu"),
    ("で", "de"),
    ("ど", "do"),
    ("ば", "ba"),
    ("び", "bi"),
    ("ぶ", "bu"),
    ("べ", "be"),
    ("ぼ", "bo"),
    ("ぱ", "pa"),
    ("ぴ", "pi"),
    ("ぷ", "pu"),
    ("ぺ", "pe"),
    ("ぽ", "po"),
    ("ゔぁ", "va"),
    ("ゔぃ", "vi"),
    ("ゔ", "vu"),
    ("ゔぇ", "ve"),
    ("ゔぉ", "vo"),
];

const BASE_KUNREI: &[(&str, &str)] = &[
    ("あ", "a"),
    ("い", "i"),
    ("う", "u"),
    ("え", "e"),
    ("お", "o"),
    ("か", "ka"),
    ("き", "ki"),
    ("く", "ku"),
    ("け", "ke"),
    ("こ", "ko"),
    ("さ", "sa"),
    ("し", "si"),
    ("す", "su"),
    ("せ", "se"),
    ("そ", "so"),
    ("た", "ta"),
    ("ち", "ti"),
    ("つ", "tu"),
    ("て", "te"),
    ("と", "to"),
    ("な", "na"),
    ("に", "ni"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("は", "ha"),
    ("ひ", "hi"),
    ("ふ", "hu"),
    ("へ", "he"),
    ("ほ", "ho"),
    ("ま", "ma"),
    ("み", "mi"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("や", "ya"),
    ("ゆ", "yu"),
    ("よ", "yo"),
    ("わ", "wa"),
    ("ゐ", "i"),
    ("ゑ", "e"),
    ("を", "o"),
    ("ん", "n"),
    ("が", "ga"),
    ("ぎ", "gi"),
    ("ぐ", "gu"),
    ("げ", "ge"),
    ("ご", "go"),
    ("ざ", "za"),
    ("じ", "zi"),
    ("ず", "zu"),
    ("ぜ", "ze"),
    ("ぞ", "zo"),
    ("だ", "da"),
    ("ぢ", "zi"),
    ("づ", "zu"),
    ("で", "de"),
    ("ど", "do"),
    ("ば", "ba"),
    ("び", "bi"),
    ("ぶ", "bu"),
    ("べ", "be"),
    ("ぼ", "bo"),
    ("ぱ", "pa"),
    ("ぴ", "pi"),
    ("ぷ", "pu"),
    ("ぺ", "pe"),
    ("ぽ", "po"),
    ("ゔぁ", "va"),
    ("ゔぃ", "vi"),
    ("ゔ", "vu"),
    ("ゔぇ", "ve"),
    ("ゔぉ", "vo"),
];

const SPECIAL_SYMBOLS: &[(&str, &str)] = &[
    ("。", "."),
    ("、", ","),
    ("：", ":"),
    ("・", "/"),
    ("！", "!"),
    ("？", "?"),
    ("〜", "~"),
    ("ー", "-"),
    ("「", "‘"),
    ("」", "’"),
    ("『", "“"),
    ("』", "”"),
    ("［", "["),
    ("］", "]"),
    ("（", "("),
    ("）", ")"),
    ("｛", "{"),
    ("｝", "}"),
    ("　", " "),
];

/// Kana that ん is ambiguous before: んい must become "n'i", not "ni".
const AMBIGUOUS_VOWELS: &[char] = &['あ', 'い', 'う', 'え', 'お', 'や', 'ゆ', 'よ'];

const SMALL_Y: &[(&str, &str)] = &[("ゃ", "ya"), ("ゅ", "yu"), ("ょ", "yo")];
const SMALL_Y_EXTRA: &[(&str, &str)] = &[("ぃ", "yi"), ("ぇ", "ye")];
const SMALL_AIUEO: &[(&str, &str)] = &[
    ("ぁ", "a"),
    ("ぃ", "i"),
    ("ぅ", "u"),
    ("ぇ", "e"),
    ("ぉ", "o"),
];

/// Kana whose yōon forms derive from their own first romaji letter.
const YOON_KANA: &[&str] = &["き", "に", "ひ", "み", "り", "ぎ", "び", "ぴ", "ゔ", "く", "ふ"];

/// In Hepburn the sibilant/affricate row keeps its digraph onset: しゃ →
/// sha, not sya. Kunrei has no such row; those kana follow the regular
/// first-letter rule instead (しゃ → sya).
const YOON_EXCEPTIONS: &[(&str, &str)] = &[("し", "sh"), ("ち", "ch"), ("じ", "j"), ("ぢ", "dj")];

const YOON_SIBILANTS: &[&str] = &["し", "ち", "じ", "ぢ"];

const SMALL_KANA: &[(&str, &str)] = &[
    ("っ", ""),
    ("ゃ", "ya"),
    ("ゅ", "yu"),
    ("ょ", "yo"),
    ("ぁ", "a"),
    ("ぃ", "i"),
    ("ぅ", "u"),
    ("ぇ", "e"),
    ("ぉ", "o"),
];

/// Onset consonant a sokuon doubles for each following romaji initial.
/// y and vowels are excluded: っや → "ya", っあ → "a".
fn sokuon_onset(c: char) -> Option<char> {
    match c {
        'c' => Some('t'),
        'b' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'm' | 'p' | 'q' | 'r' | 's' | 't' | 'v'
        | 'w' | 'x' | 'z' => Some(c),
        _ => None,
    }
}

/// Rewrites every terminal for the っ subtree: prefix the onset consonant of
/// the mora that follows. Vowel-initial and symbol values get no doubling.
fn resolve_tsu(tree: &MapNode) -> MapNode {
    tree.map_values(&|v| match v.chars().next().and_then(sokuon_onset) {
        Some(onset) => format!("{onset}{v}"),
        None => v.to_string(),
    })
}

fn build_from(
    base: &'static [(&'static str, &'static str)],
    digraph_yoon: bool,
) -> MapNode {
    let mut tree = MapNode::from_pairs(base);

    for &(jsymbol, symbol) in SPECIAL_SYMBOLS {
        tree.insert(jsymbol, symbol);
    }
    for &(kana, roma) in SMALL_Y.iter().chain(SMALL_AIUEO) {
        tree.insert(kana, roma);
    }

    // きゃ → kya, きぃ → kyi: first romaji letter of the kana + y-row
    let regular_yoon: Vec<&str> = if digraph_yoon {
        YOON_KANA.to_vec()
    } else {
        YOON_KANA.iter().chain(YOON_SIBILANTS).copied().collect()
    };
    for kana in regular_yoon {
        let first = tree
            .subtree(kana)
            .and_then(|n| n.value())
            .and_then(|v| v.chars().next());
        let Some(first) = first else { continue };
        for &(y_kana, y_roma) in SMALL_Y.iter().chain(SMALL_Y_EXTRA) {
            tree.insert(&format!("{kana}{y_kana}"), format!("{first}{y_roma}"));
        }
    }

    // じゃ → ja, じぃ → jyi, じぇ → je
    if digraph_yoon {
        for &(kana, roma) in YOON_EXCEPTIONS {
            for &(y_kana, y_roma) in SMALL_Y {
                let vowel = &y_roma[1..];
                tree.insert(&format!("{kana}{y_kana}"), format!("{roma}{vowel}"));
            }
            tree.insert(&format!("{kana}ぃ"), format!("{roma}yi"));
            tree.insert(&format!("{kana}ぇ"), format!("{roma}e"));
        }
    }

    // きっぷ → kippu: the っ subtree is the whole tree with doubled onsets
    let tsu = resolve_tsu(&tree);
    tree.set_subtree("っ", tsu);

    for &(kana, roma) in SMALL_KANA {
        tree.insert(kana, roma);
    }

    // んい → n'i and friends
    for &kana in AMBIGUOUS_VOWELS {
        let vowel_roma = tree
            .subtree(&kana.to_string())
            .and_then(|n| n.value())
            .unwrap_or_default()
            .to_string();
        tree.insert(&format!("ん{kana}"), format!("n'{vowel_roma}"));
    }

    tree
}

/// Builds the kana → romaji tree for the given romanisation scheme.
pub fn build(romanization: Romanization) -> MapNode {
    match romanization {
        Romanization::Hepburn => build_from(BASE_HEPBURN, true),
        Romanization::Kunrei => build_from(BASE_KUNREI, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(tree: &MapNode, path: &str) -> Option<String> {
        tree.subtree(path)
            .and_then(|n| n.value())
            .map(str::to_string)
    }

    #[test]
    fn test_scheme_differences() {
        let hepburn = build(Romanization::Hepburn);
        let kunrei = build(Romanization::Kunrei);
        assert_eq!(value_of(&hepburn, "し"), Some("shi".into()));
        assert_eq!(value_of(&kunrei, "し"), Some("si".into()));
        assert_eq!(value_of(&hepburn, "つ"), Some("tsu".into()));
        assert_eq!(value_of(&kunrei, "つ"), Some("tu".into()));
        assert_eq!(value_of(&hepburn, "ふ"), Some("fu".into()));
        assert_eq!(value_of(&kunrei, "ふ"), Some("hu".into()));
    }

    #[test]
    fn test_yoon() {
        let tree = build(Romanization::Hepburn);
        assert_eq!(value_of(&tree, "きゃ"), Some("kya".into()));
        assert_eq!(value_of(&tree, "きぃ"), Some("kyi".into()));
        assert_eq!(value_of(&tree, "ぴょ"), Some("pyo".into()));
    }

    #[test]
    fn test_yoon_exceptions() {
        let hepburn = build(Romanization::Hepburn);
        assert_eq!(value_of(&hepburn, "しゃ"), Some("sha".into()));
        assert_eq!(value_of(&hepburn, "ちょ"), Some("cho".into()));
        assert_eq!(value_of(&hepburn, "じゃ"), Some("ja".into()));
        assert_eq!(value_of(&hepburn, "じぇ"), Some("je".into()));
        assert_eq!(value_of(&hepburn, "じぃ"), Some("jyi".into()));
        // kunrei has no digraph row, the first-letter rule applies
        let kunrei = build(Romanization::Kunrei);
        assert_eq!(value_of(&kunrei, "しゃ"), Some("sya".into()));
        assert_eq!(value_of(&kunrei, "ちょ"), Some("tyo".into()));
        assert_eq!(value_of(&kunrei, "じゃ"), Some("zya".into()));
    }

    #[test]
    fn test_sokuon() {
        let tree = build(Romanization::Hepburn);
        assert_eq!(value_of(&tree, "っぷ"), Some("ppu".into()));
        assert_eq!(value_of(&tree, "っち"), Some("tchi".into()));
        assert_eq!(value_of(&tree, "っか"), Some("kka".into()));
        // no onset, no doubling
        assert_eq!(value_of(&tree, "っあ"), Some("a".into()));
        // standalone っ contributes nothing
        assert_eq!(value_of(&tree, "っ"), Some("".into()));
    }

    #[test]
    fn test_nasal_disambiguation() {
        let tree = build(Romanization::Hepburn);
        assert_eq!(value_of(&tree, "んい"), Some("n'i".into()));
        assert_eq!(value_of(&tree, "んや"), Some("n'ya".into()));
        assert_eq!(value_of(&tree, "ん"), Some("n".into()));
        // only the ambiguous vowels get the apostrophe
        assert_eq!(tree.subtree("んか"), None);
    }

    #[test]
    fn test_symbols() {
        let tree = build(Romanization::Hepburn);
        assert_eq!(value_of(&tree, "。"), Some(".".into()));
        assert_eq!(value_of(&tree, "　"), Some(" ".into()));
        assert_eq!(value_of(&tree, "ー"), Some("-".into()));
    }
}
