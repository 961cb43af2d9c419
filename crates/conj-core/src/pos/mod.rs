//! Part-of-speech resolution: JMdict tag → inflection class.
//!
//! Only the classes listed in [`PosClass::INFLECTABLE`] have rows in the rule
//! table. Everything else, including plain nouns (`n`), adjectival nouns
//! (`adj-na`) and bare verbal nouns (`vs`), resolves to
//! [`PosClass::Uninflectable`] and is skipped by the engine.

mod gloss;

pub use gloss::gloss;

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PosClass {
    /// 形容詞 (`adj-i`)
    AdjI,
    /// いい/良い (`adj-ix`)
    AdjIx,
    /// 一段 (`v1`)
    Ichidan,
    /// くれる (`v1-s`)
    IchidanKureru,
    /// なさる, いらっしゃる (`v5aru`)
    GodanAru,
    GodanBu,
    GodanGu,
    GodanKu,
    /// 行く (`v5k-s`)
    GodanIku,
    GodanMu,
    GodanNu,
    GodanRu,
    /// ある (`v5r-i`)
    GodanRuIrregular,
    GodanSu,
    GodanTsu,
    GodanU,
    /// 問う, 請う (`v5u-s`)
    GodanUSpecial,
    /// 来る (`vk`)
    Kuru,
    /// する and headwords that include it (`vs-i`)
    SuruIncluded,
    /// 愛する etc. (`vs-s`)
    SuruSpecial,
    /// 信ずる etc. (`vz`)
    Zuru,
    Uninflectable,
}

impl PosClass {
    pub const INFLECTABLE: [PosClass; 21] = [
        PosClass::AdjI,
        PosClass::AdjIx,
        PosClass::Ichidan,
        PosClass::IchidanKureru,
        PosClass::GodanAru,
        PosClass::GodanBu,
        PosClass::GodanGu,
        PosClass::GodanKu,
        PosClass::GodanIku,
        PosClass::GodanMu,
        PosClass::GodanNu,
        PosClass::GodanRu,
        PosClass::GodanRuIrregular,
        PosClass::GodanSu,
        PosClass::GodanTsu,
        PosClass::GodanU,
        PosClass::GodanUSpecial,
        PosClass::Kuru,
        PosClass::SuruIncluded,
        PosClass::SuruSpecial,
        PosClass::Zuru,
    ];

    /// Stable numeric id used in the first column of the rule table.
    /// `Uninflectable` has id 0 and never appears in a table.
    pub fn id(self) -> u16 {
        match self {
            PosClass::AdjI => 1,
            PosClass::AdjIx => 2,
            PosClass::Ichidan => 10,
            PosClass::IchidanKureru => 11,
            PosClass::GodanAru => 20,
            PosClass::GodanBu => 21,
            PosClass::GodanGu => 22,
            PosClass::GodanKu => 23,
            PosClass::GodanIku => 24,
            PosClass::GodanMu => 25,
            PosClass::GodanNu => 26,
            PosClass::GodanRu => 27,
            PosClass::GodanRuIrregular => 28,
            PosClass::GodanSu => 29,
            PosClass::GodanTsu => 30,
            PosClass::GodanU => 31,
            PosClass::GodanUSpecial => 32,
            PosClass::Kuru => 40,
            PosClass::SuruIncluded => 41,
            PosClass::SuruSpecial => 42,
            PosClass::Zuru => 43,
            PosClass::Uninflectable => 0,
        }
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::INFLECTABLE.iter().copied().find(|c| c.id() == id)
    }

    /// The JMdict tag this class is resolved from.
    pub fn tag(self) -> &'static str {
        match self {
            PosClass::AdjI => "adj-i",
            PosClass::AdjIx => "adj-ix",
            PosClass::Ichidan => "v1",
            PosClass::IchidanKureru => "v1-s",
            PosClass::GodanAru => "v5aru",
            PosClass::GodanBu => "v5b",
            PosClass::GodanGu => "v5g",
            PosClass::GodanKu => "v5k",
            PosClass::GodanIku => "v5k-s",
            PosClass::GodanMu => "v5m",
            PosClass::GodanNu => "v5n",
            PosClass::GodanRu => "v5r",
            PosClass::GodanRuIrregular => "v5r-i",
            PosClass::GodanSu => "v5s",
            PosClass::GodanTsu => "v5t",
            PosClass::GodanU => "v5u",
            PosClass::GodanUSpecial => "v5u-s",
            PosClass::Kuru => "vk",
            PosClass::SuruIncluded => "vs-i",
            PosClass::SuruSpecial => "vs-s",
            PosClass::Zuru => "vz",
            PosClass::Uninflectable => "",
        }
    }

    pub fn is_inflectable(self) -> bool {
        self != PosClass::Uninflectable
    }
}

impl fmt::Display for PosClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosClass::Uninflectable => f.write_str("uninflectable"),
            class => f.write_str(class.tag()),
        }
    }
}

/// Map a part-of-speech tag to its inflection class.
///
/// Total: unknown tags resolve to [`PosClass::Uninflectable`].
pub fn resolve(tag: &str) -> PosClass {
    match tag.trim() {
        "adj-i" => PosClass::AdjI,
        "adj-ix" => PosClass::AdjIx,
        "v1" => PosClass::Ichidan,
        "v1-s" => PosClass::IchidanKureru,
        "v5aru" => PosClass::GodanAru,
        "v5b" => PosClass::GodanBu,
        "v5g" => PosClass::GodanGu,
        "v5k" => PosClass::GodanKu,
        "v5k-s" => PosClass::GodanIku,
        "v5m" => PosClass::GodanMu,
        "v5n" => PosClass::GodanNu,
        "v5r" => PosClass::GodanRu,
        "v5r-i" => PosClass::GodanRuIrregular,
        "v5s" => PosClass::GodanSu,
        "v5t" => PosClass::GodanTsu,
        "v5u" => PosClass::GodanU,
        "v5u-s" => PosClass::GodanUSpecial,
        "vk" => PosClass::Kuru,
        "vs-i" => PosClass::SuruIncluded,
        "vs-s" => PosClass::SuruSpecial,
        "vz" => PosClass::Zuru,
        _ => PosClass::Uninflectable,
    }
}
