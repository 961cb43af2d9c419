use std::fs;
use std::path::Path;

use conj_core::rules::DEFAULT_RULES_TSV;
use conj_core::settings::{self, Settings};
use conj_core::RuleTable;

pub fn rules_export() {
    print!("{DEFAULT_RULES_TSV}");
}

pub fn rules_validate(file: &str) {
    let table = die!(RuleTable::open(Path::new(file)), "Error: {}");
    let shadowed = table.legacy_shadowed();
    println!(
        "OK: {} rules, {} classes, {} formal rules without a plain counterpart",
        table.len(),
        table.classes().len(),
        shadowed.len()
    );
    for key in shadowed {
        println!("  {key}");
    }
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: export.workers={}, conjugate.kanji_forms={}, conjugate.reading_forms={}, metadata.title={:?}",
        s.export.workers, s.conjugate.kanji_forms, s.conjugate.reading_forms, s.metadata.title
    );
}

/// Install `file` as the process settings (if given) and return them.
pub fn load_settings(file: Option<&str>) -> &'static Settings {
    if let Some(file) = file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    settings::settings()
}

/// The rule table at `file`, or the embedded default.
pub fn load_rules(file: Option<&str>) -> RuleTable {
    match file {
        Some(file) => die!(RuleTable::open(Path::new(file)), "Error loading rules {file}: {}"),
        None => die!(RuleTable::embedded(), "Error loading embedded rules: {}"),
    }
}
