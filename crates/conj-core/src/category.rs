use std::fmt;

use serde::Serialize;

/// One of the thirteen conjugation categories, in canonical order.
///
/// The numeric id (1..=13) is the value used in the rule table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NonPast,
    Past,
    Conjunctive,
    Provisional,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Volitional,
    Imperative,
    Conditional,
    Alternative,
    Continuative,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::NonPast,
        Category::Past,
        Category::Conjunctive,
        Category::Provisional,
        Category::Potential,
        Category::Passive,
        Category::Causative,
        Category::CausativePassive,
        Category::Volitional,
        Category::Imperative,
        Category::Conditional,
        Category::Alternative,
        Category::Continuative,
    ];

    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id).checked_sub(1)?).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::NonPast => "non_past",
            Category::Past => "past",
            Category::Conjunctive => "conjunctive",
            Category::Provisional => "provisional",
            Category::Potential => "potential",
            Category::Passive => "passive",
            Category::Causative => "causative",
            Category::CausativePassive => "causative_passive",
            Category::Volitional => "volitional",
            Category::Imperative => "imperative",
            Category::Conditional => "conditional",
            Category::Alternative => "alternative",
            Category::Continuative => "continuative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
