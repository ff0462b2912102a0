use std::collections::BTreeMap;

use serde::Deserialize;

/// Per-spelling metadata from the romaji table.
///
/// `geminable` marks spellings that may take a preceding sokuon (っ);
/// the usage flags mark spellings that are no longer written and are
/// dropped at build time unless a filter whitelists them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpellingInfo {
    #[serde(default)]
    pub geminable: bool,
    #[serde(default)]
    pub small: bool,
    #[serde(default)]
    pub unused: bool,
    #[serde(default)]
    pub extinct: bool,
    #[serde(default)]
    pub obsolete: bool,
}

impl SpellingInfo {
    pub fn in_use(&self) -> bool {
        !(self.unused || self.extinct || self.obsolete)
    }
}

/// Romaji table: accepted spellings grouped by phonetic set.
///
/// BTreeMap keys keep construction order deterministic, so two builds from
/// the same tables expose identical lookup results.
#[derive(Debug, Default, Deserialize)]
pub struct RawRomajiTable {
    #[serde(default)]
    pub gojuon: BTreeMap<String, SpellingInfo>,
    #[serde(default)]
    pub dakuten: BTreeMap<String, SpellingInfo>,
    #[serde(default)]
    pub handakuten: BTreeMap<String, SpellingInfo>,
    #[serde(default)]
    pub yoon: BTreeMap<String, SpellingInfo>,
    #[serde(default)]
    pub yoon_dakuten: BTreeMap<String, SpellingInfo>,
}

impl RawRomajiTable {
    pub fn groups(&self) -> [(&'static str, &BTreeMap<String, SpellingInfo>); 5] {
        [
            ("gojuon", &self.gojuon),
            ("dakuten", &self.dakuten),
            ("handakuten", &self.handakuten),
            ("yoon", &self.yoon),
            ("yoon_dakuten", &self.yoon_dakuten),
        ]
    }

    /// All spellings in group order, gojuon first.
    pub fn spellings(&self) -> impl Iterator<Item = (&str, &SpellingInfo)> {
        self.groups()
            .into_iter()
            .flat_map(|(_, set)| set.iter().map(|(s, info)| (s.as_str(), info)))
    }

    pub fn get(&self, spelling: &str) -> Option<&SpellingInfo> {
        self.groups()
            .into_iter()
            .find_map(|(_, set)| set.get(spelling))
    }

    pub fn is_empty(&self) -> bool {
        self.groups().into_iter().all(|(_, set)| set.is_empty())
    }
}

/// One symbol-table record: a code point with its accepted spellings.
///
/// `combination` carries the multi-code-point reference the source data
/// uses for compound kana (e.g. きゃ). Entries that are only a combination
/// contribute their inputs to the known-romaji set; the grammar rules
/// regenerate the compound from its parts.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub combination: Vec<String>,
}

/// Symbol table: hex code point string → record.
#[derive(Debug, Default, Deserialize)]
pub struct RawSymbolTable {
    #[serde(default)]
    pub symbols: BTreeMap<String, SymbolInfo>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("non-ASCII spelling: {0}")]
    NonAsciiSpelling(String),
    #[error("symbol table is empty")]
    EmptySymbols,
}

/// Parse the romaji table from TOML text.
pub fn parse_romaji_table(toml_str: &str) -> Result<RawRomajiTable, TableError> {
    let table: RawRomajiTable =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    for (spelling, _) in table.spellings() {
        if !spelling.is_ascii() {
            return Err(TableError::NonAsciiSpelling(spelling.to_string()));
        }
    }

    Ok(table)
}

/// Parse the symbol table from TOML text.
pub fn parse_symbol_table(toml_str: &str) -> Result<RawSymbolTable, TableError> {
    let table: RawSymbolTable =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if table.symbols.is_empty() {
        return Err(TableError::EmptySymbols);
    }

    for info in table.symbols.values() {
        for input in &info.inputs {
            if !input.is_ascii() {
                return Err(TableError::NonAsciiSpelling(input.clone()));
            }
        }
    }

    Ok(table)
}
