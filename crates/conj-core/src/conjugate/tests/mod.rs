mod paradigms;

use std::sync::OnceLock;

use crate::rules::RuleTable;

/// The embedded table, parsed once per test binary.
fn table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| RuleTable::embedded().unwrap())
}

/// Faces of a variant as a tuple, for compact assertions.
fn faces(v: &super::Variant) -> (Option<&str>, Option<&str>, Option<&str>, Option<&str>) {
    (
        v.plain.as_deref(),
        v.formal.as_deref(),
        v.plain_negative.as_deref(),
        v.formal_negative.as_deref(),
    )
}
