//! Paradigms of real headwords against the embedded rule table.

use super::{faces, table};
use crate::category::Category;
use crate::conjugate::{conjugate, conjugate_tag, Conjugations};
use crate::pos::PosClass;

fn conj(word: &str, tag: &str) -> Conjugations {
    conjugate_tag(table(), word, tag).unwrap_or_else(|| panic!("{word} ({tag}) not applicable"))
}

/// Plain face of the first variant of a category.
fn plain(c: &Conjugations, category: Category) -> Option<&str> {
    c.get(category).first().and_then(|v| v.plain.as_deref())
}

#[test]
fn i_adjective() {
    let c = conj("美味しい", "adj-i");
    assert_eq!(
        faces(&c.non_past[0]),
        (
            Some("美味しい"),
            Some("美味しいです"),
            Some("美味しくない"),
            Some("美味しくないです")
        )
    );
    assert_eq!(plain(&c, Category::Past), Some("美味しかった"));
    assert_eq!(
        c.past[0].plain_negative.as_deref(),
        Some("美味しくなかった")
    );
    assert_eq!(plain(&c, Category::Conjunctive), Some("美味しくて"));
    assert_eq!(plain(&c, Category::Provisional), Some("美味しければ"));
    assert_eq!(plain(&c, Category::Volitional), Some("美味しかろう"));
    assert_eq!(plain(&c, Category::Conditional), Some("美味しかったら"));
    assert_eq!(plain(&c, Category::Alternative), Some("美味しかったり"));
    assert_eq!(plain(&c, Category::Continuative), Some("美味しく"));
}

#[test]
fn i_adjective_has_no_verbal_categories() {
    let c = conj("美味しい", "adj-i");
    for category in [
        Category::Potential,
        Category::Passive,
        Category::Causative,
        Category::CausativePassive,
        Category::Imperative,
    ] {
        assert!(c.get(category).is_empty(), "{category} should be empty");
    }
}

#[test]
fn formal_negative_without_plain_counterpart_is_kept() {
    let c = conj("美味しい", "adj-i");
    assert_eq!(c.non_past.len(), 2);
    assert_eq!(
        faces(&c.non_past[1]),
        (None, None, None, Some("美味しくありません"))
    );
    assert_eq!(
        c.past[1].formal_negative.as_deref(),
        Some("美味しくありませんでした")
    );
}

#[test]
fn adjective_ii_switches_to_yo_in_kana() {
    let kana = conj("いい", "adj-ix");
    assert_eq!(
        faces(&kana.non_past[0]),
        (
            Some("いい"),
            Some("いいです"),
            Some("よくない"),
            Some("よくないです")
        )
    );
    assert_eq!(plain(&kana, Category::Past), Some("よかった"));
    assert_eq!(
        faces(&kana.volitional[0]),
        (
            Some("よかろう"),
            Some("いいでしょう"),
            Some("よくないだろう"),
            Some("よくないでしょう")
        )
    );

    let kanji = conj("良い", "adj-ix");
    assert_eq!(
        kanji.non_past[0].plain_negative.as_deref(),
        Some("良くない")
    );
    assert_eq!(plain(&kanji, Category::Past), Some("良かった"));
}

#[test]
fn godan_bu() {
    let c = conj("遊ぶ", "v5b");
    assert_eq!(
        faces(&c.non_past[0]),
        (
            Some("遊ぶ"),
            Some("遊びます"),
            Some("遊ばない"),
            Some("遊びません")
        )
    );
    assert_eq!(plain(&c, Category::Past), Some("遊んだ"));
    assert_eq!(plain(&c, Category::Conjunctive), Some("遊んで"));
    assert_eq!(plain(&c, Category::Provisional), Some("遊べば"));
    assert_eq!(plain(&c, Category::Potential), Some("遊べる"));
    assert_eq!(plain(&c, Category::Passive), Some("遊ばれる"));
    assert_eq!(plain(&c, Category::Causative), Some("遊ばせる"));
    assert_eq!(
        plain(&c, Category::CausativePassive),
        Some("遊ばせられる")
    );
    assert_eq!(plain(&c, Category::Volitional), Some("遊ぼう"));
    assert_eq!(plain(&c, Category::Imperative), Some("遊べ"));
    assert_eq!(plain(&c, Category::Conditional), Some("遊んだら"));
    assert_eq!(plain(&c, Category::Alternative), Some("遊んだり"));
    assert_eq!(plain(&c, Category::Continuative), Some("遊び"));
}

#[test]
fn godan_short_causative_variants() {
    let c = conj("遊ぶ", "v5b");
    assert_eq!(c.causative.len(), 2);
    assert_eq!(
        faces(&c.causative[1]),
        (
            Some("遊ばす"),
            Some("遊ばします"),
            Some("遊ばさない"),
            Some("遊ばしません")
        )
    );
    assert_eq!(
        c.causative_passive[1].plain.as_deref(),
        Some("遊ばされる")
    );

    // さされる is avoided for -su verbs.
    let c = conj("話す", "v5s");
    assert_eq!(c.causative_passive.len(), 1);
    assert_eq!(plain(&c, Category::CausativePassive), Some("話させられる"));
}

#[test]
fn godan_euphonic_te_and_ta_forms() {
    let cases = [
        ("游ぐ", "v5g", "游いだ", "游いで"),
        ("書く", "v5k", "書いた", "書いて"),
        ("行く", "v5k-s", "行った", "行って"),
        ("いく", "v5k-s", "いった", "いって"),
        ("読む", "v5m", "読んだ", "読んで"),
        ("死ぬ", "v5n", "死んだ", "死んで"),
        ("取る", "v5r", "取った", "取って"),
        ("話す", "v5s", "話した", "話して"),
        ("待つ", "v5t", "待った", "待って"),
        ("買う", "v5u", "買った", "買って"),
        ("問う", "v5u-s", "問うた", "問うて"),
    ];
    for (word, tag, past, te) in cases {
        let c = conj(word, tag);
        assert_eq!(plain(&c, Category::Past), Some(past), "{word} past");
        assert_eq!(plain(&c, Category::Conjunctive), Some(te), "{word} te");
    }
}

#[test]
fn godan_negative_a_row() {
    let cases = [
        ("游ぐ", "v5g", "游がない"),
        ("待つ", "v5t", "待たない"),
        ("買う", "v5u", "買わない"),
        ("死ぬ", "v5n", "死なない"),
    ];
    for (word, tag, negative) in cases {
        let c = conj(word, tag);
        assert_eq!(c.non_past[0].plain_negative.as_deref(), Some(negative));
    }
}

#[test]
fn godan_aru_honorific() {
    let c = conj("なさる", "v5aru");
    assert_eq!(c.non_past[0].formal.as_deref(), Some("なさいます"));
    assert_eq!(
        faces(&c.imperative[0]),
        (Some("なさい"), Some("なさいませ"), Some("なさるな"), None)
    );
    let continuative: Vec<_> = c.continuative.iter().map(|v| v.plain.as_deref()).collect();
    assert_eq!(continuative, vec![Some("なさり"), Some("なさい")]);
}

#[test]
fn irregular_aru_negatives() {
    let kana = conj("ある", "v5r-i");
    assert_eq!(
        faces(&kana.non_past[0]),
        (
            Some("ある"),
            Some("あります"),
            Some("ない"),
            Some("ありません")
        )
    );
    assert_eq!(kana.past[0].plain_negative.as_deref(), Some("なかった"));
    assert!(kana.potential.is_empty());

    let kanji = conj("有る", "v5r-i");
    assert_eq!(kanji.non_past[0].plain_negative.as_deref(), Some("無い"));
    assert_eq!(kanji.past[0].plain_negative.as_deref(), Some("無かった"));
    assert_eq!(plain(&kanji, Category::Past), Some("有った"));
}

#[test]
fn ichidan() {
    let c = conj("食べる", "v1");
    assert_eq!(
        faces(&c.non_past[0]),
        (
            Some("食べる"),
            Some("食べます"),
            Some("食べない"),
            Some("食べません")
        )
    );
    assert_eq!(plain(&c, Category::Past), Some("食べた"));
    assert_eq!(plain(&c, Category::Passive), Some("食べられる"));
    assert_eq!(plain(&c, Category::Causative), Some("食べさせる"));
    assert_eq!(plain(&c, Category::Volitional), Some("食べよう"));
    assert_eq!(plain(&c, Category::Continuative), Some("食べ"));

    let potential: Vec<_> = c.potential.iter().map(|v| v.plain.as_deref()).collect();
    assert_eq!(potential, vec![Some("食べられる"), Some("食べれる")]);
    let imperative: Vec<_> = c.imperative.iter().map(|v| v.plain.as_deref()).collect();
    assert_eq!(imperative, vec![Some("食べろ"), Some("食べよ")]);
}

#[test]
fn ichidan_kureru_imperative() {
    let c = conj("くれる", "v1-s");
    assert_eq!(c.imperative.len(), 1);
    assert_eq!(plain(&c, Category::Imperative), Some("くれ"));
    assert_eq!(plain(&c, Category::Past), Some("くれた"));
}

#[test]
fn kuru_kana_stem_changes() {
    let c = conj("くる", "vk");
    assert_eq!(
        faces(&c.non_past[0]),
        (Some("くる"), Some("きます"), Some("こない"), Some("きません"))
    );
    assert_eq!(plain(&c, Category::Past), Some("きた"));
    assert_eq!(plain(&c, Category::Provisional), Some("くれば"));
    assert_eq!(plain(&c, Category::Potential), Some("こられる"));
    assert_eq!(plain(&c, Category::Volitional), Some("こよう"));
    assert_eq!(
        c.volitional[0].plain_negative.as_deref(),
        Some("くるまい")
    );
    assert_eq!(plain(&c, Category::Imperative), Some("こい"));
    assert_eq!(plain(&c, Category::Continuative), Some("き"));
}

#[test]
fn kuru_kanji_keeps_stem() {
    let c = conj("来る", "vk");
    assert_eq!(
        faces(&c.non_past[0]),
        (Some("来る"), Some("来ます"), Some("来ない"), Some("来ません"))
    );
    assert_eq!(plain(&c, Category::Past), Some("来た"));
    assert_eq!(plain(&c, Category::Imperative), Some("来い"));
    assert_eq!(plain(&c, Category::Continuative), Some("来"));
}

#[test]
fn suru_included() {
    let c = conj("する", "vs-i");
    assert_eq!(
        faces(&c.non_past[0]),
        (Some("する"), Some("します"), Some("しない"), Some("しません"))
    );
    assert_eq!(plain(&c, Category::Potential), Some("できる"));
    assert_eq!(plain(&c, Category::Passive), Some("される"));
    let imperative: Vec<_> = c.imperative.iter().map(|v| v.plain.as_deref()).collect();
    assert_eq!(imperative, vec![Some("しろ"), Some("せよ")]);

    let c = conj("勉強する", "vs-i");
    assert_eq!(plain(&c, Category::Past), Some("勉強した"));
    assert_eq!(plain(&c, Category::Potential), Some("勉強できる"));
}

#[test]
fn suru_special_and_zuru() {
    let c = conj("愛する", "vs-s");
    assert_eq!(c.non_past[0].plain_negative.as_deref(), Some("愛さない"));
    assert_eq!(c.non_past[1].plain_negative.as_deref(), Some("愛しない"));
    assert_eq!(plain(&c, Category::Potential), Some("愛せる"));
    assert_eq!(plain(&c, Category::Volitional), Some("愛そう"));

    let c = conj("信ずる", "vz");
    assert_eq!(c.non_past[0].plain_negative.as_deref(), Some("信じない"));
    assert_eq!(plain(&c, Category::Potential), Some("信じられる"));
    assert_eq!(c.imperative[1].plain.as_deref(), Some("信ぜよ"));
}

#[test]
fn not_applicable_inputs() {
    let t = table();
    for class in PosClass::INFLECTABLE {
        assert_eq!(conjugate(t, "る", class), None, "{class}");
        assert_eq!(conjugate(t, "", class), None, "{class}");
    }
    assert_eq!(conjugate(t, "本", PosClass::Uninflectable), None);
    assert_eq!(conjugate_tag(t, "日本語", "n"), None);
    assert_eq!(conjugate_tag(t, "静か", "adj-na"), None);
    assert_eq!(conjugate_tag(t, "勉強", "vs"), None);
    assert_eq!(conjugate_tag(t, "遊ぶ", "unknown"), None);
}

#[test]
fn every_class_has_a_non_past_paradigm() {
    let words = [
        (PosClass::AdjI, "高い"),
        (PosClass::AdjIx, "いい"),
        (PosClass::Ichidan, "見る"),
        (PosClass::IchidanKureru, "くれる"),
        (PosClass::GodanAru, "下さる"),
        (PosClass::GodanBu, "飛ぶ"),
        (PosClass::GodanGu, "泳ぐ"),
        (PosClass::GodanKu, "書く"),
        (PosClass::GodanIku, "行く"),
        (PosClass::GodanMu, "読む"),
        (PosClass::GodanNu, "死ぬ"),
        (PosClass::GodanRu, "取る"),
        (PosClass::GodanRuIrregular, "ある"),
        (PosClass::GodanSu, "話す"),
        (PosClass::GodanTsu, "待つ"),
        (PosClass::GodanU, "買う"),
        (PosClass::GodanUSpecial, "問う"),
        (PosClass::Kuru, "来る"),
        (PosClass::SuruIncluded, "する"),
        (PosClass::SuruSpecial, "察する"),
        (PosClass::Zuru, "信ずる"),
    ];
    for (class, word) in words {
        let c = conjugate(table(), word, class).unwrap();
        assert!(!c.non_past.is_empty(), "{class} {word}");
        assert!(!c.is_empty());
    }
}

#[test]
fn iter_visits_categories_in_canonical_order() {
    let c = conj("遊ぶ", "v5b");
    let order: Vec<Category> = c.iter().map(|(cat, _)| cat).collect();
    assert_eq!(order, Category::ALL.to_vec());
    for (cat, variants) in c.iter() {
        assert_eq!(variants, c.get(cat));
    }
}
