//! Character-level Unicode classification for Japanese text.

/// Any code point of the Hiragana block (U+3040..U+309F), including あ and
/// the iteration marks.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Any code point of the Katakana block (U+30A0..U+30FF), including ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// True if every character of `s` is hiragana or katakana (including ー).
pub fn is_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c))
}
