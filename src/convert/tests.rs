use super::*;
use crate::mapping::CustomMapping;

fn custom(pairs: &[(&str, &str)]) -> ConvertOptions {
    ConvertOptions {
        custom_mapping: Some(pairs.iter().map(|&(k, v)| (k, v)).collect::<CustomMapping>()),
        ..ConvertOptions::default()
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(to_kana(""), "");
    assert_eq!(to_romaji(""), "");
    assert_eq!(to_hiragana(""), "");
    assert_eq!(to_katakana(""), "");
}

#[test]
fn test_to_kana_basic() {
    assert_eq!(to_kana("onaji"), "おなじ");
    assert_eq!(to_kana("buttsuuji"), "ぶっつうじ");
    assert_eq!(to_kana("hiragana"), "ひらがな");
}

#[test]
fn test_to_kana_case_selects_script() {
    assert_eq!(to_kana("ONAJI buttsuuji"), "オナジ ぶっつうじ");
    assert_eq!(to_kana("座禅‘zazen’スタイル"), "座禅「ざぜん」スタイル");
}

#[test]
fn test_to_kana_enforce_wins_over_casing() {
    let kata = ConvertOptions {
        enforce: Some(Script::Katakana),
        ..ConvertOptions::default()
    };
    assert_eq!(to_kana_with("onaji", &kata), "オナジ");
    let hira = ConvertOptions {
        enforce: Some(Script::Hiragana),
        ..ConvertOptions::default()
    };
    assert_eq!(to_kana_with("ONAJI", &hira), "おなじ");
}

#[test]
fn test_gemination() {
    assert_eq!(to_kana("kitte"), "きって");
    assert_eq!(to_kana("ekki"), "えっき");
    assert_eq!(to_romaji("きっぷ"), "kippu");
    assert_eq!(to_romaji("ざっし"), "zasshi");
    assert_eq!(to_romaji("けっか"), "kekka");
    assert_eq!(to_romaji("いっちにち"), "itchinichi");
}

#[test]
fn test_contracted_sounds() {
    assert_eq!(to_kana("kyoto"), "きょと");
    assert_eq!(to_kana("chakku"), "ちゃっく");
    assert_eq!(to_romaji("しゃ"), "sha");
    let kunrei = ConvertOptions {
        romanization: Romanization::Kunrei,
        ..ConvertOptions::default()
    };
    assert_eq!(to_romaji_with("しゃ", &kunrei), "sya");
    assert_eq!(to_romaji_with("し", &kunrei), "si");
    assert_eq!(to_romaji_with("つ", &kunrei), "tu");
}

#[test]
fn test_nasal_disambiguation() {
    assert_eq!(to_romaji("んい"), "n'i");
    assert_eq!(to_romaji("きんえん"), "kin'en");
    assert_eq!(to_romaji("かんな"), "kanna");
    assert_eq!(to_kana("n'i"), "んい");
}

#[test]
fn test_long_vowels() {
    assert_eq!(to_romaji("とうきょう"), "toukyou");
    assert_eq!(to_romaji("トーキョー"), "tookyoo");
    assert_eq!(to_hiragana(&to_katakana("とうきょう")), "とうきょう");
    assert_eq!(to_hiragana("スーパー"), "すうぱあ");
}

#[test]
fn test_obsolete_kana() {
    assert_eq!(to_kana("wi"), "うぃ");
    let opts = ConvertOptions {
        use_obsolete_kana: true,
        ..ConvertOptions::default()
    };
    assert_eq!(to_kana_with("wi", &opts), "ゐ");
    assert_eq!(to_kana_with("we", &opts), "ゑ");
    // base mapping not polluted by the variant
    assert_eq!(to_kana("wi"), "うぃ");
}

#[test]
fn test_custom_mapping_to_kana() {
    let opts = custom(&[("wi", "ヰ")]);
    assert_eq!(to_kana_with("wi wa ka", &opts), "ヰ わ か");
    // unrelated conversions see the plain tree
    assert_eq!(to_kana("wi"), "うぃ");
}

#[test]
fn test_custom_mapping_to_romaji() {
    let opts = custom(&[("じゃ", "jya"), ("べ", "bye")]);
    assert_eq!(to_romaji_with("じゃべ", &opts), "jyabye");
    assert_eq!(to_romaji("じゃ"), "ja");
}

#[test]
fn test_undecided_tail() {
    let keep = ConvertOptions {
        convert_ending: false,
        ..ConvertOptions::default()
    };
    assert_eq!(to_kana_with("ky", &keep), "ky");
    assert_eq!(to_kana_with("kak", &keep), "かk");
    assert_eq!(to_kana_with("kan", &keep), "かn");
    // forcing resolves the tail to whatever terminal exists at that node
    assert_eq!(to_kana("kan"), "かん");
    assert_eq!(to_kana("ky"), "ky");
}

#[test]
fn test_to_hiragana() {
    assert_eq!(to_hiragana("toukyou, オオサカ"), "とうきょう、 おおさか");
    assert_eq!(to_hiragana("only カナ"), "おんly かな");
    assert_eq!(to_hiragana("カタカナ"), "かたかな");
}

#[test]
fn test_to_katakana() {
    assert_eq!(to_katakana("toukyou, おおさか"), "トウキョウ、 オオサカ");
    assert_eq!(to_katakana("ひらがな"), "ヒラガナ");
}

#[test]
fn test_pass_romaji() {
    let opts = ConvertOptions {
        pass_romaji: true,
        ..ConvertOptions::default()
    };
    assert_eq!(to_hiragana_with("only カナ", &opts), "only かな");
    assert_eq!(to_katakana_with("only かな", &opts), "only カナ");
}

#[test]
fn test_uppercase_katakana_romaji() {
    let opts = ConvertOptions {
        uppercase_katakana: true,
        ..ConvertOptions::default()
    };
    assert_eq!(to_romaji_with("ひらがな カタカナ", &opts), "hiragana KATAKANA");
    assert_eq!(to_romaji("ひらがな カタカナ"), "hiragana katakana");
}

#[test]
fn test_unmapped_passes_through() {
    assert_eq!(to_kana("hiragana!?"), "ひらがな！？");
    assert_eq!(to_kana("hira@gana"), "ひら@がな");
    assert_eq!(to_romaji("あqあ"), "aqa");
    assert_eq!(to_kana("1234"), "1234");
}

#[test]
fn test_round_trip_lowercase_romaji() {
    for s in ["kana", "watashi", "onaji", "toukyou", "kitte", "sakana"] {
        assert_eq!(to_romaji(&to_kana(s)), s, "round trip failed for {s}");
    }
}

#[test]
fn test_direction_idempotence() {
    for s in ["とうきょう", "カタカナ", "ひらがなとカタカナ"] {
        assert_eq!(
            to_hiragana(&to_katakana(s)),
            to_hiragana(s),
            "idempotence failed for {s}"
        );
    }
}
