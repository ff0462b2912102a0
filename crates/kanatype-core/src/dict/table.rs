//! Default hiragana tables, embedded at compile time.

pub const DEFAULT_ROMAJI_TOML: &str = include_str!("data/hiragana_romaji.toml");
pub const DEFAULT_SYMBOLS_TOML: &str = include_str!("data/hiragana_symbols.toml");
