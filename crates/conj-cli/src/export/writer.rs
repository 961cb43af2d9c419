use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use conj_core::pos::gloss;
use conj_core::settings::{ConjugateSettings, Metadata, Settings};
use conj_core::RuleTable;

use super::{conjugate_entry, FormConjugations, Section};
use crate::dict_source::{Entry, Sense};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub id: u32,
    pub initial: char,
    pub file: String,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub sections: Vec<SectionInfo>,
    pub conjugated_forms: usize,
}

#[derive(Serialize)]
struct Manifest<'a> {
    #[serde(flatten)]
    metadata: &'a Metadata,
    date: String,
    sections: &'a [SectionInfo],
}

#[derive(Serialize)]
struct SectionDoc<'a> {
    id: u32,
    initial: char,
    entries: Vec<EntryDoc<'a>>,
}

#[derive(Serialize)]
struct EntryDoc<'a> {
    kanji: &'a [String],
    readings: &'a [String],
    senses: Vec<SenseDoc<'a>>,
    conjugations: Vec<FormConjugations>,
}

#[derive(Serialize)]
struct SenseDoc<'a> {
    /// Display labels; tags without one are kept verbatim.
    pos: Vec<&'a str>,
    gloss: &'a [String],
}

impl<'a> From<&'a Sense> for SenseDoc<'a> {
    fn from(sense: &'a Sense) -> Self {
        SenseDoc {
            pos: sense
                .pos
                .iter()
                .map(|tag| gloss(tag).unwrap_or(tag.as_str()))
                .collect(),
            gloss: &sense.gloss,
        }
    }
}

/// Writes one `section-<codepoint>.json` per section plus `manifest.json`
/// into `out_dir`.
///
/// Sections are conjugated and written by `settings.export.workers` scoped
/// threads taking sections in order. After a failed section no worker starts
/// another one, no manifest is written, and the error of the earliest failed
/// section is returned. Sections already in flight still finish.
pub fn write_export(
    table: &RuleTable,
    sections: &[Section],
    settings: &Settings,
    out_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(out_dir)?;

    let workers = settings.export.workers.clamp(1, sections.len().max(1));
    info!(sections = sections.len(), workers, out_dir = %out_dir.display(), "exporting");

    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let (result_tx, result_rx) = mpsc::channel();
    thread::scope(|scope| {
        for _ in 0..workers {
            let (next, failed) = (&next, &failed);
            let result_tx = result_tx.clone();
            let opts = &settings.conjugate;
            scope.spawn(move || {
                while !failed.load(Ordering::Acquire) {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(section) = sections.get(index) else {
                        return;
                    };
                    let result = write_section(table, section, opts, out_dir);
                    if result.is_err() {
                        failed.store(true, Ordering::Release);
                    }
                    if result_tx.send((index, result)).is_err() {
                        return;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut infos = Vec::with_capacity(sections.len());
    let mut conjugated_forms = 0;
    let mut first_error: Option<(usize, ExportError)> = None;
    for (index, result) in result_rx {
        match result {
            Ok((info, forms)) => {
                infos.push(info);
                conjugated_forms += forms;
            }
            Err(e) => {
                if first_error.as_ref().map_or(true, |(i, _)| index < *i) {
                    first_error = Some((index, e));
                }
            }
        }
    }
    if let Some((index, e)) = first_error {
        warn!(section = sections[index].id(), error = %e, "export aborted");
        return Err(e);
    }
    infos.sort_by_key(|info| info.id);

    let manifest = Manifest {
        metadata: &settings.metadata,
        date: OffsetDateTime::now_utc().date().to_string(),
        sections: &infos,
    };
    write_json(&out_dir.join(MANIFEST_FILE), &manifest)?;
    info!(
        sections = infos.len(),
        conjugated_forms, "wrote export manifest"
    );

    Ok(ExportSummary {
        sections: infos,
        conjugated_forms,
    })
}

fn write_section(
    table: &RuleTable,
    section: &Section,
    opts: &ConjugateSettings,
    out_dir: &Path,
) -> Result<(SectionInfo, usize), ExportError> {
    let entries: Vec<EntryDoc> = section
        .entries
        .iter()
        .map(|entry| entry_doc(table, entry, opts))
        .collect();
    let forms = entries.iter().map(|e| e.conjugations.len()).sum();

    let file = section.file_name();
    write_json(
        &out_dir.join(&file),
        &SectionDoc {
            id: section.id(),
            initial: section.initial,
            entries,
        },
    )?;
    debug!(file = %file, entries = section.entries.len(), forms, "wrote section");

    Ok((
        SectionInfo {
            id: section.id(),
            initial: section.initial,
            file,
            entries: section.entries.len(),
        },
        forms,
    ))
}

fn entry_doc<'a>(table: &RuleTable, entry: &'a Entry, opts: &ConjugateSettings) -> EntryDoc<'a> {
    EntryDoc {
        kanji: &entry.kanji,
        readings: &entry.readings,
        senses: entry.senses.iter().map(SenseDoc::from).collect(),
        conjugations: conjugate_entry(table, entry, opts),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
