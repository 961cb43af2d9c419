use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{Rule, RuleError, RuleKey, RuleTable};
use crate::category::Category;
use crate::pos::PosClass;

/// Column order: class id, category id, negative, formal, ordinal, trim,
/// okurigana, kana euphonic override, kanji euphonic override.
const COLUMNS: [&str; 9] = [
    "pos", "conj", "neg", "fml", "onum", "stem", "okuri", "euphr", "euphk",
];

impl RuleTable {
    /// Build from tab-separated text.
    ///
    /// Blank lines and lines starting with `#` are skipped. The first
    /// remaining line must be the header naming the nine columns; every
    /// following line is one rule.
    /// Any malformed row aborts construction.
    pub fn from_tsv(text: &str) -> Result<Self, RuleError> {
        let mut rows = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'));

        let (header_line, header) = rows.next().ok_or(RuleError::Empty)?;
        let got = header.split('\t').count();
        if got != COLUMNS.len() {
            return Err(RuleError::ColumnCount {
                line: header_line,
                expected: COLUMNS.len(),
                got,
            });
        }
        if header.split('\t').map(str::trim).ne(COLUMNS) {
            return Err(RuleError::Header { line: header_line });
        }

        let mut table = RuleTable::default();
        for (line, row) in rows {
            let (key, rule) = parse_row(line, row)?;
            table.insert(line, key, rule)?;
        }
        if table.is_empty() {
            return Err(RuleError::Empty);
        }

        debug!(
            rules = table.len(),
            classes = table.classes().len(),
            "rule table loaded"
        );
        for key in table.legacy_shadowed() {
            debug!(%key, "formal rule without a plain counterpart");
        }
        Ok(table)
    }

    /// Load a table from a TSV file.
    ///
    /// Formal rules without a plain counterpart are reported at warn level.
    pub fn open(path: &Path) -> Result<Self, RuleError> {
        let text = fs::read_to_string(path)?;
        let table = Self::from_tsv(&text)?;
        for key in table.legacy_shadowed() {
            warn!(path = %path.display(), %key, "formal rule without a plain counterpart");
        }
        Ok(table)
    }

    /// Serialize to the same TSV format `from_tsv` reads, sorted by key.
    pub fn to_tsv(&self) -> String {
        let mut out = COLUMNS.join("\t");
        out.push('\n');
        for (key, rule) in self.iter() {
            let fields = [
                key.class.id().to_string(),
                key.category.id().to_string(),
                flag(key.negative).to_string(),
                flag(key.formal).to_string(),
                key.ordinal.to_string(),
                rule.trim.to_string(),
                rule.okurigana.clone(),
                rule.euphonic_kana.clone(),
                rule.euphonic_kanji.clone(),
            ];
            out.push_str(&fields.join("\t"));
            out.push('\n');
        }
        out
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "t"
    } else {
        "f"
    }
}

fn parse_row(line: usize, row: &str) -> Result<(RuleKey, Rule), RuleError> {
    let fields: Vec<&str> = row.split('\t').collect();
    if fields.len() != COLUMNS.len() {
        return Err(RuleError::ColumnCount {
            line,
            expected: COLUMNS.len(),
            got: fields.len(),
        });
    }

    let class_id: u16 = parse_int(line, "pos", fields[0])?;
    let class =
        PosClass::from_id(class_id).ok_or(RuleError::UnknownClass { line, id: class_id })?;
    let category_id: u8 = parse_int(line, "conj", fields[1])?;
    let category = Category::from_id(category_id).ok_or(RuleError::UnknownCategory {
        line,
        id: category_id,
    })?;

    let key = RuleKey {
        class,
        category,
        negative: parse_flag(line, "neg", fields[2])?,
        formal: parse_flag(line, "fml", fields[3])?,
        ordinal: parse_int(line, "onum", fields[4])?,
    };
    let rule = Rule {
        trim: parse_int(line, "stem", fields[5])?,
        okurigana: fields[6].to_string(),
        euphonic_kana: fields[7].to_string(),
        euphonic_kanji: fields[8].to_string(),
    };
    Ok((key, rule))
}

fn parse_int<T: std::str::FromStr>(line: usize, column: &str, value: &str) -> Result<T, RuleError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| RuleError::Parse {
        line,
        reason: format!("invalid {column} '{value}': {e}"),
    })
}

fn parse_flag(line: usize, column: &str, value: &str) -> Result<bool, RuleError> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("t") || v.eq_ignore_ascii_case("true") || v == "1" => {
            Ok(true)
        }
        v if v.eq_ignore_ascii_case("f") || v.eq_ignore_ascii_case("false") || v == "0" => {
            Ok(false)
        }
        _ => Err(RuleError::Parse {
            line,
            reason: format!("invalid {column} flag '{value}'"),
        }),
    }
}
