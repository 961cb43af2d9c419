use std::collections::BTreeMap;

use conj_core::settings::ExportSettings;
use tracing::debug;

use crate::dict_source::Entry;

/// Entries sharing the first character of their first reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub initial: char,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn id(&self) -> u32 {
        u32::from(self.initial)
    }

    pub fn file_name(&self) -> String {
        format!("section-{}.json", self.id())
    }
}

/// Groups entries into sections ordered by initial character.
///
/// Entries without a reading, or whose reading starts outside the configured
/// section ranges, are dropped. Within a section entries are ordered by first
/// reading; ties keep source order.
pub fn build_sections(entries: Vec<Entry>, export: &ExportSettings) -> Vec<Section> {
    let total = entries.len();
    let mut by_initial: BTreeMap<char, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        let Some(initial) = entry.first_reading().and_then(|r| r.chars().next()) else {
            continue;
        };
        if export.is_section_initial(initial) {
            by_initial.entry(initial).or_default().push(entry);
        }
    }

    let sections: Vec<Section> = by_initial
        .into_iter()
        .map(|(initial, mut entries)| {
            entries.sort_by(|a, b| a.first_reading().cmp(&b.first_reading()));
            Section { initial, entries }
        })
        .collect();
    let kept: usize = sections.iter().map(|s| s.entries.len()).sum();
    debug!(
        sections = sections.len(),
        kept,
        dropped = total - kept,
        "grouped entries"
    );
    sections
}
