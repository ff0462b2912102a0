//! Romaji↔kana dictionary built once from raw tables.
//!
//! Construction never fails: malformed code points degrade to the
//! missing-glyph sentinel and filters only shrink the table. The built
//! dictionary is immutable and meant to be shared via `Arc`; there is no
//! global cache, callers construct and pass it explicitly.

mod config;
mod filter;
mod table;

pub use config::{
    parse_romaji_table, parse_symbol_table, RawRomajiTable, RawSymbolTable, SpellingInfo,
    SymbolInfo, TableError,
};
pub use filter::TableFilter;
pub use table::{DEFAULT_ROMAJI_TOML, DEFAULT_SYMBOLS_TOML};

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::unicode::hex_to_char;

/// Script family tag selecting which grammar the transliterator applies.
/// Only hiragana carries the full rule set; other families resolve direct
/// dictionary matches only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Hiragana,
    Katakana,
}

#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub romaji: String,
    pub symbol: char,
    pub group: String,
    /// May take a preceding sokuon; the generator doubles these.
    pub combinable: bool,
}

pub struct KanaDictionary {
    family: Family,
    entries: Vec<DictionaryEntry>,
    by_romaji: HashMap<String, char>,
    spellings: HashMap<char, Vec<String>>,
    known: BTreeSet<String>,
    corpus: Vec<String>,
}

impl KanaDictionary {
    /// Build a hiragana dictionary from raw tables.
    pub fn build(
        romaji: &RawRomajiTable,
        symbols: &RawSymbolTable,
        filter: &TableFilter,
    ) -> Self {
        Self::build_for(Family::Hiragana, romaji, symbols, filter)
    }

    pub fn build_for(
        family: Family,
        romaji: &RawRomajiTable,
        symbols: &RawSymbolTable,
        filter: &TableFilter,
    ) -> Self {
        let mut entries = Vec::new();
        let mut by_romaji: HashMap<String, char> = HashMap::new();
        let mut spellings: HashMap<char, Vec<String>> = HashMap::new();
        let mut known: BTreeSet<String> = BTreeSet::new();

        for (hex, info) in &symbols.symbols {
            if !filter.admits_entry(&info.group, &info.inputs) {
                continue;
            }

            // Compound references (e.g. きゃ): the spellings are recognized
            // as known romaji, but the grammar rules regenerate the symbol
            // from its parts, so they never enter the code-point map.
            if !info.combination.is_empty() {
                for input in &info.inputs {
                    known.insert(input.clone());
                }
                continue;
            }

            let symbol = hex_to_char(hex);
            for input in &info.inputs {
                if let Some(meta) = romaji.get(input) {
                    if !meta.in_use() && !filter.whitelists_spelling(input) {
                        continue;
                    }
                }
                if by_romaji.contains_key(input) {
                    continue;
                }
                let combinable = match romaji.get(input) {
                    Some(meta) => meta.geminable,
                    None => input.len() > 1 && !input.starts_with('x'),
                };
                by_romaji.insert(input.clone(), symbol);
                spellings.entry(symbol).or_default().push(input.clone());
                entries.push(DictionaryEntry {
                    romaji: input.clone(),
                    symbol,
                    group: info.group.clone(),
                    combinable,
                });
            }
        }

        // Sampling corpus: every surviving romaji-table spelling once, plus
        // a first-consonant-doubled form for the geminable ones.
        let mut corpus = Vec::new();
        for (spelling, meta) in romaji.spellings() {
            if !filter.admits_spelling(spelling) {
                continue;
            }
            if !meta.in_use() && !filter.whitelists_spelling(spelling) {
                continue;
            }
            known.insert(spelling.to_string());
            corpus.push(spelling.to_string());
            if meta.geminable {
                if let Some(first) = spelling.chars().next() {
                    corpus.push(format!("{first}{spelling}"));
                }
            }
        }

        debug!(
            family = ?family,
            entries = entries.len(),
            corpus = corpus.len(),
            "built kana dictionary"
        );

        Self {
            family,
            entries,
            by_romaji,
            spellings,
            known,
            corpus,
        }
    }

    /// Build from the tables embedded in the crate.
    pub fn builtin_hiragana(filter: &TableFilter) -> Self {
        let romaji =
            parse_romaji_table(DEFAULT_ROMAJI_TOML).expect("embedded romaji table must be valid");
        let symbols =
            parse_symbol_table(DEFAULT_SYMBOLS_TOML).expect("embedded symbol table must be valid");
        Self::build(&romaji, &symbols, filter)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Exact romaji → code point.
    pub fn lookup(&self, romaji: &str) -> Option<char> {
        self.by_romaji.get(romaji).copied()
    }

    /// Canonical (first-listed) spelling for a code point.
    pub fn reverse_lookup(&self, symbol: char) -> Option<&str> {
        self.spellings
            .get(&symbol)
            .and_then(|s| s.first())
            .map(String::as_str)
    }

    /// All accepted spellings for a code point, canonical first.
    pub fn spellings(&self, symbol: char) -> &[String] {
        self.spellings.get(&symbol).map_or(&[], Vec::as_slice)
    }

    /// True for romaji-table spellings and symbol inputs alike.
    pub fn is_known_romaji(&self, romaji: &str) -> bool {
        self.known.contains(romaji) || self.by_romaji.contains_key(romaji)
    }

    /// The generator's sampling corpus, in deterministic table order.
    pub fn all_combinable_romaji(&self) -> &[String] {
        &self.corpus
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
