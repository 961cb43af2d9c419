//! Conjugation rule table.
//!
//! `RuleTable` maps a [`RuleKey`] (class, category, negation, formality,
//! ordinal) to the [`Rule`] that builds that surface form from a headword.
//! A table is built once, validated as a whole, and never mutated afterwards,
//! so it can be shared freely between threads.

mod table_io;

use std::collections::HashMap;
use std::fmt;
use std::io;

use crate::category::Category;
use crate::conjugate::{StemKind, MIN_HEADWORD_CHARS};
use crate::pos::PosClass;

/// Ordinals run from 1 to this value inclusive.
pub const MAX_ORDINAL: u8 = 9;

/// Embedded default rule table source.
pub const DEFAULT_RULES_TSV: &str = include_str!("conjo.tsv");

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("rule table has no rows")]
    Empty,

    #[error("line {line}: expected {expected} columns, got {got}")]
    ColumnCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: expected header pos/conj/neg/fml/onum/stem/okuri/euphr/euphk")]
    Header { line: usize },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: unknown class id {id}")]
    UnknownClass { line: usize, id: u16 },

    #[error("line {line}: unknown category id {id}")]
    UnknownCategory { line: usize, id: u8 },

    #[error("line {line}: ordinal {ordinal} outside 1..={MAX_ORDINAL}")]
    OrdinalOutOfRange { line: usize, ordinal: u8 },

    #[error("line {line}: effective trim {effective} exceeds {max} characters")]
    TrimTooLong {
        line: usize,
        effective: usize,
        max: usize,
    },

    #[error("line {line}: duplicate rule {key}")]
    DuplicateKey { line: usize, key: RuleKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    pub class: PosClass,
    pub category: Category,
    pub negative: bool,
    pub formal: bool,
    pub ordinal: u8,
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, neg={}, fml={}, #{})",
            self.class, self.category, self.negative, self.formal, self.ordinal
        )
    }
}

/// How to derive one surface form from a headword.
///
/// The last `trim` characters are dropped, then the euphonic override for
/// the headword's stem kind (if any) and the okurigana are appended. A
/// non-empty override replaces one more character of the headword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub trim: usize,
    pub okurigana: String,
    pub euphonic_kana: String,
    pub euphonic_kanji: String,
}

impl Rule {
    pub fn euphonic(&self, kind: StemKind) -> &str {
        match kind {
            StemKind::Phonetic => &self.euphonic_kana,
            StemKind::Logographic => &self.euphonic_kanji,
        }
    }

    /// Characters removed from the headword for a stem of the given kind.
    pub fn effective_trim(&self, kind: StemKind) -> usize {
        if self.euphonic(kind).is_empty() {
            self.trim
        } else {
            self.trim + 1
        }
    }

    /// Largest trim over both stem kinds.
    pub fn max_trim(&self) -> usize {
        self.effective_trim(StemKind::Phonetic)
            .max(self.effective_trim(StemKind::Logographic))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<RuleKey, Rule>,
}

impl RuleTable {
    /// Build a table from `(key, rule)` pairs, validating every row.
    ///
    /// Rows are numbered from 1 in the order given; the number is reported
    /// in errors.
    pub fn new(rows: impl IntoIterator<Item = (RuleKey, Rule)>) -> Result<Self, RuleError> {
        let mut table = Self::default();
        for (i, (key, rule)) in rows.into_iter().enumerate() {
            table.insert(i + 1, key, rule)?;
        }
        Ok(table)
    }

    /// Parse the embedded default table.
    pub fn embedded() -> Result<Self, RuleError> {
        Self::from_tsv(DEFAULT_RULES_TSV)
    }

    fn insert(&mut self, line: usize, key: RuleKey, rule: Rule) -> Result<(), RuleError> {
        if !key.class.is_inflectable() {
            return Err(RuleError::UnknownClass {
                line,
                id: key.class.id(),
            });
        }
        if key.ordinal == 0 || key.ordinal > MAX_ORDINAL {
            return Err(RuleError::OrdinalOutOfRange {
                line,
                ordinal: key.ordinal,
            });
        }
        let effective = rule.max_trim();
        if effective > MIN_HEADWORD_CHARS {
            return Err(RuleError::TrimTooLong {
                line,
                effective,
                max: MIN_HEADWORD_CHARS,
            });
        }
        if self.rules.contains_key(&key) {
            return Err(RuleError::DuplicateKey { line, key });
        }
        self.rules.insert(key, rule);
        Ok(())
    }

    pub fn get(&self, key: &RuleKey) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &Rule)> {
        let mut rows: Vec<_> = self.rules.iter().collect();
        rows.sort_by_key(|(key, _)| **key);
        rows.into_iter()
    }

    /// Classes that have at least one rule, sorted.
    pub fn classes(&self) -> Vec<PosClass> {
        let mut classes: Vec<PosClass> = self.rules.keys().map(|k| k.class).collect();
        classes.sort();
        classes.dedup();
        classes
    }

    /// Rules that a loop abandoning the formal slot whenever the plain slot
    /// of the same polarity is missing would never reach.
    ///
    /// The engine itself looks up every slot, so these rules are emitted; the
    /// list exists to audit rule data against that older loop shape.
    pub fn legacy_shadowed(&self) -> Vec<RuleKey> {
        let mut shadowed: Vec<RuleKey> = self
            .rules
            .keys()
            .filter(|key| {
                key.formal
                    && !self.rules.contains_key(&RuleKey {
                        formal: false,
                        ..**key
                    })
            })
            .copied()
            .collect();
        shadowed.sort();
        shadowed
    }
}
