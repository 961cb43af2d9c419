use crate::rules::Rule;
use crate::unicode::is_hiragana;

/// Whether a headword's stem ends in kana or in kanji.
///
/// Decided by the character just before the final one: in 遊ぶ it is 遊
/// (logographic), in あそぶ it is そ (phonetic). The rule table carries a
/// separate euphonic override for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemKind {
    Phonetic,
    Logographic,
}

impl StemKind {
    /// `None` for words shorter than two characters.
    pub fn of(word: &[char]) -> Option<Self> {
        let c = *word.len().checked_sub(2).and_then(|i| word.get(i))?;
        Some(if is_hiragana(c) {
            StemKind::Phonetic
        } else {
            StemKind::Logographic
        })
    }
}

/// Apply one rule to a headword.
///
/// Returns `None` if the word is too short to have a stem kind.
pub fn construct(word: &[char], rule: &Rule) -> Option<String> {
    let kind = StemKind::of(word)?;
    let euphonic = rule.euphonic(kind);
    let keep = word.len().saturating_sub(rule.effective_trim(kind));

    let mut out = String::with_capacity(keep * 3 + euphonic.len() + rule.okurigana.len());
    out.extend(&word[..keep]);
    out.push_str(euphonic);
    out.push_str(&rule.okurigana);
    Some(out)
}
