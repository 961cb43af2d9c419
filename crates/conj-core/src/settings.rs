//! Driver settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The rule table is not part of the settings: it is built explicitly and
//! passed to the engine.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub conjugate: ConjugateSettings,
    pub export: ExportSettings,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConjugateSettings {
    pub kanji_forms: bool,
    pub reading_forms: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub workers: usize,
    section_ranges: Vec<[u32; 2]>,
}

impl ExportSettings {
    /// True if a section may start with `c`.
    pub fn is_section_initial(&self, c: char) -> bool {
        let c = u32::from(c);
        self.section_ranges
            .iter()
            .any(|&[lo, hi]| (lo..=hi).contains(&c))
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct Metadata {
    pub uid: String,
    pub title: String,
    pub creator: String,
    pub copyright: String,
    pub language: String,
    pub in_lang: String,
    pub out_lang: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    if s.export.workers == 0 {
        return Err(SettingsError::InvalidValue {
            field: "export.workers".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    for (i, &[lo, hi]) in s.export.section_ranges.iter().enumerate() {
        if lo > hi || char::from_u32(lo).is_none() || char::from_u32(hi).is_none() {
            return Err(SettingsError::InvalidValue {
                field: format!("export.section_ranges[{i}]"),
                reason: format!("[{lo:#X}, {hi:#X}] is not a valid code-point range"),
            });
        }
    }

    check_non_empty!(metadata.uid);
    check_non_empty!(metadata.title);
    check_non_empty!(metadata.creator);
    check_non_empty!(metadata.copyright);
    check_non_empty!(metadata.language);
    check_non_empty!(metadata.in_lang);
    check_non_empty!(metadata.out_lang);

    Ok(())
}
