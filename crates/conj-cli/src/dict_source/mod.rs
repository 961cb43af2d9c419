mod jmdict;

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use jmdict::JmdictSource;

/// A pluggable dictionary source that turns a raw dictionary file into entries.
pub trait DictSource {
    /// Parse the dictionary file at `path`.
    fn parse_file(&self, path: &Path) -> Result<Vec<Entry>, DictSourceError>;

    /// Download the raw dictionary file into `dest_dir` and return its path.
    /// An existing file is kept unless `force` is set.
    fn fetch(&self, dest_dir: &Path, force: bool) -> Result<PathBuf, DictSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// One dictionary entry: written forms, readings and senses in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kanji: Vec<String>,
    pub readings: Vec<String>,
    pub senses: Vec<Sense>,
}

impl Entry {
    /// First reading, used for section grouping and ordering.
    pub fn first_reading(&self) -> Option<&str> {
        self.readings.first().map(String::as_str)
    }

    /// Part-of-speech tags of the first sense.
    pub fn primary_pos(&self) -> &[String] {
        self.senses
            .first()
            .map(|s| s.pos.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sense {
    /// Part-of-speech tags as written in the source (`v5b`, `adj-i`, ...).
    pub pos: Vec<String>,
    pub gloss: Vec<String>,
}

/// Create a `DictSource` by name. Returns `None` for unknown source names.
pub fn from_name(name: &str) -> Option<Box<dyn DictSource>> {
    match name {
        "jmdict" => Some(Box::new(JmdictSource)),
        _ => None,
    }
}
