//! Batch conjugation of dictionary entries and JSON export by section.

mod sections;
mod writer;

use serde::Serialize;

use conj_core::settings::ConjugateSettings;
use conj_core::unicode::is_kana;
use conj_core::{conjugate_tag, Conjugations, RuleTable};

use crate::dict_source::Entry;

pub use sections::{build_sections, Section};
pub use writer::{write_export, ExportError, ExportSummary, SectionInfo, MANIFEST_FILE};

/// Conjugated paradigm of one written form of an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormConjugations {
    pub form: String,
    /// Form is written entirely in kana.
    pub kana: bool,
    /// Part-of-speech tag that produced the paradigm.
    pub pos: String,
    pub conjugations: Conjugations,
}

/// Conjugates the forms of `entry` under the tags of its first sense.
///
/// Kanji forms come first, then readings, each gated by `opts`. Tags are tried
/// in order and a form keeps the first paradigm it gets; forms no tag applies
/// to are left out.
pub fn conjugate_entry(
    table: &RuleTable,
    entry: &Entry,
    opts: &ConjugateSettings,
) -> Vec<FormConjugations> {
    let kanji = entry.kanji.iter().filter(|_| opts.kanji_forms);
    let readings = entry.readings.iter().filter(|_| opts.reading_forms);
    let forms: Vec<&String> = kanji.chain(readings).collect();

    let mut out: Vec<FormConjugations> = Vec::new();
    for tag in entry.primary_pos() {
        for &form in &forms {
            if out.iter().any(|c| c.form == *form) {
                continue;
            }
            if let Some(conjugations) = conjugate_tag(table, form, tag) {
                out.push(FormConjugations {
                    form: form.clone(),
                    kana: is_kana(form),
                    pos: tag.clone(),
                    conjugations,
                });
            }
        }
    }
    // kanji forms first, then readings, whichever tag filled them
    out.sort_by_key(|c| forms.iter().position(|f| **f == c.form));
    out
}
