//! Rule-driven conjugation engine for Japanese dictionary headwords.
//!
//! A [`rules::RuleTable`] is loaded once and shared read-only; [`conjugate()`]
//! turns a `(headword, part-of-speech)` pair into the full paradigm of
//! inflected forms across the thirteen [`Category`] values.

pub mod category;
pub mod conjugate;
pub mod pos;
pub mod rules;
pub mod settings;
pub mod unicode;

pub use category::Category;
pub use conjugate::{conjugate, conjugate_tag, Conjugations, Variant, MIN_HEADWORD_CHARS};
pub use pos::PosClass;
pub use rules::{Rule, RuleError, RuleKey, RuleTable};
