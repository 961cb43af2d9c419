//! Conjugation engine: headword + class → full paradigm.
//!
//! For every category the engine tries ordinals 1..=9 and, within each,
//! the four faces (plain/formal × affirmative/negative). Each face present
//! in the rule table is built with [`construct`]; ordinals with no face at
//! all are dropped. Empty categories mean "does not apply to this class".

mod construct;
#[cfg(test)]
mod tests;

pub use construct::{construct, StemKind};

use serde::Serialize;
use tracing::trace;

use crate::category::Category;
use crate::pos::{self, PosClass};
use crate::rules::{RuleKey, RuleTable, MAX_ORDINAL};

/// Headwords shorter than this (in characters) are never conjugated.
pub const MIN_HEADWORD_CHARS: usize = 2;

/// One ordinal's surface forms. Absent faces are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_negative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formal_negative: Option<String>,
}

impl Variant {
    pub fn face(&self, negative: bool, formal: bool) -> Option<&str> {
        match (negative, formal) {
            (false, false) => self.plain.as_deref(),
            (false, true) => self.formal.as_deref(),
            (true, false) => self.plain_negative.as_deref(),
            (true, true) => self.formal_negative.as_deref(),
        }
    }

    fn face_mut(&mut self, negative: bool, formal: bool) -> &mut Option<String> {
        match (negative, formal) {
            (false, false) => &mut self.plain,
            (false, true) => &mut self.formal,
            (true, false) => &mut self.plain_negative,
            (true, true) => &mut self.formal_negative,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_none()
            && self.formal.is_none()
            && self.plain_negative.is_none()
            && self.formal_negative.is_none()
    }
}

/// The full paradigm of a headword, one variant list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conjugations {
    pub non_past: Vec<Variant>,
    pub past: Vec<Variant>,
    pub conjunctive: Vec<Variant>,
    pub provisional: Vec<Variant>,
    pub potential: Vec<Variant>,
    pub passive: Vec<Variant>,
    pub causative: Vec<Variant>,
    pub causative_passive: Vec<Variant>,
    pub volitional: Vec<Variant>,
    pub imperative: Vec<Variant>,
    pub conditional: Vec<Variant>,
    pub alternative: Vec<Variant>,
    pub continuative: Vec<Variant>,
}

impl Conjugations {
    pub fn get(&self, category: Category) -> &[Variant] {
        match category {
            Category::NonPast => &self.non_past,
            Category::Past => &self.past,
            Category::Conjunctive => &self.conjunctive,
            Category::Provisional => &self.provisional,
            Category::Potential => &self.potential,
            Category::Passive => &self.passive,
            Category::Causative => &self.causative,
            Category::CausativePassive => &self.causative_passive,
            Category::Volitional => &self.volitional,
            Category::Imperative => &self.imperative,
            Category::Conditional => &self.conditional,
            Category::Alternative => &self.alternative,
            Category::Continuative => &self.continuative,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Variant> {
        match category {
            Category::NonPast => &mut self.non_past,
            Category::Past => &mut self.past,
            Category::Conjunctive => &mut self.conjunctive,
            Category::Provisional => &mut self.provisional,
            Category::Potential => &mut self.potential,
            Category::Passive => &mut self.passive,
            Category::Causative => &mut self.causative,
            Category::CausativePassive => &mut self.causative_passive,
            Category::Volitional => &mut self.volitional,
            Category::Imperative => &mut self.imperative,
            Category::Conditional => &mut self.conditional,
            Category::Alternative => &mut self.alternative,
            Category::Continuative => &mut self.continuative,
        }
    }

    /// Categories in canonical order with their variants.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Variant])> {
        Category::ALL.into_iter().map(move |cat| (cat, self.get(cat)))
    }

    /// True if no category has any variant.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, variants)| variants.is_empty())
    }
}

/// Conjugate `word` as a member of `class`.
///
/// Returns `None` (not applicable) if the word has fewer than
/// [`MIN_HEADWORD_CHARS`] characters or the class is uninflectable.
pub fn conjugate(table: &RuleTable, word: &str, class: PosClass) -> Option<Conjugations> {
    if !class.is_inflectable() {
        return None;
    }
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < MIN_HEADWORD_CHARS {
        return None;
    }

    let mut result = Conjugations::default();
    for category in Category::ALL {
        *result.get_mut(category) = conjugate_category(table, &chars, class, category);
    }
    trace!(word, %class, "conjugated");
    Some(result)
}

/// Resolve `tag` and conjugate.
pub fn conjugate_tag(table: &RuleTable, word: &str, tag: &str) -> Option<Conjugations> {
    conjugate(table, word, pos::resolve(tag))
}

fn conjugate_category(
    table: &RuleTable,
    chars: &[char],
    class: PosClass,
    category: Category,
) -> Vec<Variant> {
    let mut variants = Vec::new();
    for ordinal in 1..=MAX_ORDINAL {
        let mut variant = Variant::default();
        for negative in [false, true] {
            for formal in [false, true] {
                let key = RuleKey {
                    class,
                    category,
                    negative,
                    formal,
                    ordinal,
                };
                let Some(rule) = table.get(&key) else {
                    continue;
                };
                *variant.face_mut(negative, formal) = construct(chars, rule);
            }
        }
        if !variant.is_empty() {
            variants.push(variant);
        }
    }
    variants
}
