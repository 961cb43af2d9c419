use std::collections::HashMap;
use std::convert::Infallible;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use quick_xml::de::{Deserializer, EntityResolver};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::BytesText;
use serde::Deserialize;
use tracing::{debug, info};

use super::{DictSource, DictSourceError, Entry, Sense};

const JMDICT_URL: &str = "http://ftp.edrdg.org/pub/Nihongo/JMdict_e.gz";
const JMDICT_FILE: &str = "JMdict_e.gz";
const MAX_DOWNLOAD_BYTES: u64 = 256 * 1024 * 1024;
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// JMdict XML source (EDRDG).
///
/// Accepts the gzip-compressed release as distributed or the plain XML.
/// Part-of-speech and misc markers are DTD entities (`&v5b;`); they are kept
/// as their entity names rather than expanded to the English descriptions.
pub struct JmdictSource;

impl DictSource for JmdictSource {
    fn parse_file(&self, path: &Path) -> Result<Vec<Entry>, DictSourceError> {
        let mut reader = BufReader::new(File::open(path)?);
        let gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
        debug!(path = %path.display(), gzip, "reading JMdict");
        let entries = if gzip {
            parse_reader(BufReader::new(GzDecoder::new(reader)))?
        } else {
            parse_reader(reader)?
        };
        info!(path = %path.display(), entries = entries.len(), "parsed JMdict");
        Ok(entries)
    }

    fn fetch(&self, dest_dir: &Path, force: bool) -> Result<PathBuf, DictSourceError> {
        let dest = dest_dir.join(JMDICT_FILE);
        if dest.exists() && !force {
            info!(path = %dest.display(), "JMdict already present, skipping download");
            return Ok(dest);
        }
        fs::create_dir_all(dest_dir)?;

        info!(url = JMDICT_URL, "downloading JMdict");
        let body = ureq::get(JMDICT_URL)
            .call()
            .map_err(|e| DictSourceError::Http(format!("{JMDICT_URL}: {e}")))?
            .into_body()
            .with_config()
            .limit(MAX_DOWNLOAD_BYTES)
            .read_to_vec()
            .map_err(|e| DictSourceError::Http(format!("{JMDICT_URL}: {e}")))?;
        fs::write(&dest, &body)?;
        info!(path = %dest.display(), bytes = body.len(), "wrote JMdict");
        Ok(dest)
    }
}

fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Entry>, DictSourceError> {
    let mut de = Deserializer::with_resolver(reader, EntityNames::default());
    let doc = JmdictXml::deserialize(&mut de)
        .map_err(|e| DictSourceError::Parse(format!("JMdict XML: {e}")))?;
    Ok(doc.entries.into_iter().map(Entry::from).collect())
}

/// Resolves each entity declared in the document type to its own name.
#[derive(Default)]
struct EntityNames(HashMap<String, String>);

impl EntityResolver for EntityNames {
    type Error = Infallible;

    fn capture(&mut self, doctype: BytesText) -> Result<(), Self::Error> {
        let doctype = String::from_utf8_lossy(&doctype);
        for name in declared_entities(&doctype) {
            self.0.insert(name.to_string(), name.to_string());
        }
        debug!(entities = self.0.len(), "captured DTD entities");
        Ok(())
    }

    fn resolve(&self, entity: &str) -> Option<&str> {
        self.0
            .get(entity)
            .map(String::as_str)
            .or_else(|| resolve_predefined_entity(entity))
    }
}

/// General entity names declared with `<!ENTITY name "...">`.
fn declared_entities(doctype: &str) -> impl Iterator<Item = &str> {
    doctype
        .split("<!ENTITY")
        .skip(1)
        .filter_map(|decl| decl.split_whitespace().next())
        .filter(|name| *name != "%")
}

#[derive(Deserialize)]
struct JmdictXml {
    #[serde(rename = "entry", default)]
    entries: Vec<EntryXml>,
}

#[derive(Deserialize)]
struct EntryXml {
    #[serde(rename = "k_ele", default)]
    kanji: Vec<KanjiXml>,
    #[serde(rename = "r_ele", default)]
    readings: Vec<ReadingXml>,
    #[serde(rename = "sense", default)]
    senses: Vec<SenseXml>,
}

#[derive(Deserialize)]
struct KanjiXml {
    keb: String,
}

#[derive(Deserialize)]
struct ReadingXml {
    reb: String,
}

#[derive(Deserialize)]
struct SenseXml {
    #[serde(default)]
    pos: Vec<String>,
    #[serde(default)]
    gloss: Vec<GlossXml>,
}

#[derive(Deserialize)]
struct GlossXml {
    #[serde(rename = "$text", default)]
    text: String,
}

impl From<EntryXml> for Entry {
    fn from(e: EntryXml) -> Self {
        Entry {
            kanji: e.kanji.into_iter().map(|k| k.keb).collect(),
            readings: e.readings.into_iter().map(|r| r.reb).collect(),
            senses: e
                .senses
                .into_iter()
                .map(|s| Sense {
                    pos: s.pos,
                    gloss: s.gloss.into_iter().map(|g| g.text).collect(),
                })
                .collect(),
        }
    }
}
