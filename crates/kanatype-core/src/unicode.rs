//! Code-point conversion and character classification.

use unicode_width::UnicodeWidthStr;

/// Sentinel rendered when a code point cannot be produced (□, U+25A1).
///
/// Hex codes that fail to parse, and romaji tokens with no dictionary entry,
/// all fall back to this one value. Callers must go through
/// [`is_valid_symbol`] instead of comparing against the glyph.
pub const MISSING_GLYPH: char = '\u{25A1}';

/// Parse a hex code-point string ("3042" → あ).
/// Malformed or empty input yields [`MISSING_GLYPH`].
pub fn hex_to_char(hex: &str) -> char {
    u32::from_str_radix(hex.trim(), 16)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(MISSING_GLYPH)
}

/// Hex representation of a symbol's first code point ("あ" → "3042").
pub fn char_to_hex(symbol: &str) -> String {
    match symbol.chars().next() {
        Some(c) => format!("{:x}", c as u32),
        None => format!("{:x}", MISSING_GLYPH as u32),
    }
}

/// A symbol is valid when it is non-empty and free of the missing-glyph
/// sentinel. The matcher never counts a sentinel as a real resolution.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty() && !symbol.chars().any(|c| c == MISSING_GLYPH)
}

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Terminal display width of a rendered symbol (kana cells are 2 wide).
pub fn display_width(symbol: &str) -> usize {
    UnicodeWidthStr::width(symbol)
}
