use std::path::Path;
use std::process;

use tracing::info;

use crate::dict_source::{self, DictSource};
use crate::export::{build_sections, write_export};

use super::config_ops::{load_rules, load_settings};

fn source(name: &str) -> Box<dyn DictSource> {
    dict_source::from_name(name).unwrap_or_else(|| {
        eprintln!("Error: unknown source '{name}' (available: jmdict)");
        process::exit(1);
    })
}

pub fn fetch(source_name: &str, output_dir: &str, force: bool) {
    let path = die!(
        source(source_name).fetch(Path::new(output_dir), force),
        "Error fetching dictionary: {}"
    );
    eprintln!("Dictionary at {}", path.display());
}

pub fn export(
    source_name: &str,
    dict_file: &str,
    out_dir: &str,
    rules: Option<&str>,
    settings_file: Option<&str>,
) {
    let settings = load_settings(settings_file);
    let table = load_rules(rules);

    let entries = die!(
        source(source_name).parse_file(Path::new(dict_file)),
        "Error parsing dictionary: {}"
    );
    let entry_count = entries.len();
    let sections = build_sections(entries, &settings.export);
    info!(entries = entry_count, sections = sections.len(), "grouped dictionary");

    let summary = die!(
        write_export(&table, &sections, settings, Path::new(out_dir)),
        "Error writing export: {}"
    );
    let exported: usize = summary.sections.iter().map(|s| s.entries).sum();
    eprintln!(
        "Wrote {} sections ({exported} of {entry_count} entries, {} conjugated forms) to {out_dir}",
        summary.sections.len(),
        summary.conjugated_forms
    );
}
