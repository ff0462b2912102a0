//! Syllable decomposition grammar.
//!
//! Each rule splits a pending romaji buffer into dictionary tokens. Rules
//! are tried against the full buffer, first match wins; a match whose
//! tokens are not all present in the dictionary abandons the attempt
//! entirely (a dictionary gap, not a grammar failure).

use crate::dict::{Family, KanaDictionary};
use crate::generator::KanaChar;
use crate::unicode::{is_vowel, MISSING_GLYPH};

const SMALL_FORM_MARKER: char = 'x';
const SOKUON_TOKEN: &str = "xtsu";
const NASAL_TOKEN: &str = "n";
const DIGRAPH_HEADS: [&str; 2] = ["sh", "ch"];
/// Vowels a small や/ゆ/よ can follow.
const YOON_VOWELS: [char; 3] = ['a', 'u', 'o'];

/// Doubled leading consonant: "kka" → ["xtsu", "ka"]. Lengths 3-4 only, so
/// "kk" stays pending and "kkkka" never matches. A doubled `n` yields the
/// moraic nasal instead of the sokuon marker ("nna" → ["n", "na"]), and a
/// leading small-form marker never geminates (っぁ is not あ).
pub fn split_sokuon(romaji: &str) -> Option<Vec<String>> {
    if !romaji.is_ascii() {
        return None;
    }
    let chars: Vec<char> = romaji.chars().collect();
    if chars.len() < 3 || chars.len() > 4 {
        return None;
    }
    if chars[0] == SMALL_FORM_MARKER || chars[0] != chars[1] {
        return None;
    }
    let marker = if chars[0] == 'n' { NASAL_TOKEN } else { SOKUON_TOKEN };
    Some(vec![marker.to_string(), romaji[1..].to_string()])
}

/// Palatalized syllable: "kya" → ["ki", "xya"], "sha" → ["shi", "xya"],
/// "ja" → ["ji", "xya"].
pub fn split_yoon(romaji: &str) -> Option<Vec<String>> {
    if !romaji.is_ascii() {
        return None;
    }
    let chars: Vec<char> = romaji.chars().collect();
    if chars.len() < 2 || chars.len() > 3 {
        return None;
    }
    let last = chars[chars.len() - 1];
    if !YOON_VOWELS.contains(&last) {
        return None;
    }

    if chars.len() == 3 {
        let head = &romaji[..2];
        if DIGRAPH_HEADS.contains(&head) {
            return Some(vec![format!("{head}i"), format!("xy{last}")]);
        }
    }
    if chars[0] == 'j' {
        return Some(vec!["ji".to_string(), format!("xy{last}")]);
    }
    if chars.len() == 3
        && chars[1] == 'y'
        && chars[0] != SMALL_FORM_MARKER
        && chars[0] != chars[1]
    {
        return Some(vec![format!("{}i", chars[0]), format!("xy{last}")]);
    }
    None
}

/// Doubled consonant followed by a palatalized syllable:
/// "kkya" → ["xtsu", "ki", "xya"], "nnya" → ["n", "ni", "xya"].
/// Recursive: the remainder must be a yōon and the first character plus the
/// yōon head must geminate.
pub fn split_sokuon_yoon(romaji: &str) -> Option<Vec<String>> {
    let mut chars = romaji.chars();
    let first = chars.next()?;
    let yoon = split_yoon(chars.as_str())?;
    let sokuon = split_sokuon(&format!("{first}{}", yoon[0]))?;
    Some(vec![sokuon[0].clone(), yoon[0].clone(), yoon[1].clone()])
}

/// Decompose a buffer into dictionary tokens, first matching rule wins.
/// Only hiragana carries the compound rules; other families accept direct
/// matches alone.
pub fn decompose(dict: &KanaDictionary, romaji: &str) -> Option<Vec<String>> {
    if romaji.is_empty() || !romaji.is_ascii() {
        return None;
    }
    let direct = || dict.is_known_romaji(romaji).then(|| vec![romaji.to_string()]);
    match dict.family() {
        Family::Hiragana => split_sokuon_yoon(romaji)
            .or_else(|| split_sokuon(romaji))
            .or_else(|| split_yoon(romaji))
            .or_else(direct),
        Family::Katakana => direct(),
    }
}

/// Full resolution: decompose, then look up every token. `None` when no
/// rule matches or any token is missing from the dictionary; the caller
/// keeps accumulating either way.
pub fn resolve(dict: &KanaDictionary, romaji: &str) -> Option<String> {
    let tokens = decompose(dict, romaji)?;
    tokens.iter().map(|t| dict.lookup(t)).collect()
}

/// Lenient resolution for the generator and the matcher: tokens without a
/// dictionary entry render as the missing glyph, and input no rule accepts
/// renders as the glyph alone. Never fails.
pub fn read_kana(dict: &KanaDictionary, romaji: &str) -> KanaChar {
    let kana = match decompose(dict, romaji) {
        Some(tokens) => tokens
            .iter()
            .map(|t| dict.lookup(t).unwrap_or(MISSING_GLYPH))
            .collect(),
        None => MISSING_GLYPH.to_string(),
    };
    KanaChar {
        kana,
        romaji: romaji.to_string(),
    }
}

/// A vowel or `y` can continue a provisional moraic nasal.
pub(crate) fn continues_nasal(ch: char) -> bool {
    is_vowel(ch) || ch == 'y'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::TableFilter;

    fn dict() -> KanaDictionary {
        KanaDictionary::builtin_hiragana(&TableFilter::default())
    }

    #[test]
    fn test_sokuon_bounds() {
        assert_eq!(split_sokuon("kka").unwrap(), ["xtsu", "ka"]);
        assert_eq!(split_sokuon("sshi").unwrap(), ["xtsu", "shi"]);
        assert!(split_sokuon("kk").is_none());
        assert!(split_sokuon("kkkka").is_none());
        assert!(split_sokuon("xka").is_none());
        assert!(split_sokuon("kta").is_none());
    }

    #[test]
    fn test_sokuon_nasal_marker() {
        assert_eq!(split_sokuon("nna").unwrap(), ["n", "na"]);
    }

    #[test]
    fn test_yoon() {
        assert_eq!(split_yoon("kya").unwrap(), ["ki", "xya"]);
        assert_eq!(split_yoon("sha").unwrap(), ["shi", "xya"]);
        assert_eq!(split_yoon("cho").unwrap(), ["chi", "xyo"]);
        assert_eq!(split_yoon("ja").unwrap(), ["ji", "xya"]);
        assert_eq!(split_yoon("ryu").unwrap(), ["ri", "xyu"]);
        // No yōon on i/e, small-form markers, or doubled letters.
        assert!(split_yoon("ki").is_none());
        assert!(split_yoon("she").is_none());
        assert!(split_yoon("xya").is_none());
        assert!(split_yoon("yya").is_none());
        assert!(split_yoon("ka").is_none());
    }

    #[test]
    fn test_sokuon_yoon() {
        assert_eq!(split_sokuon_yoon("kkya").unwrap(), ["xtsu", "ki", "xya"]);
        assert_eq!(split_sokuon_yoon("ssha").unwrap(), ["xtsu", "shi", "xya"]);
        assert_eq!(split_sokuon_yoon("jja").unwrap(), ["xtsu", "ji", "xya"]);
        assert_eq!(split_sokuon_yoon("nnya").unwrap(), ["n", "ni", "xya"]);
        assert!(split_sokuon_yoon("kya").is_none());
        assert!(split_sokuon_yoon("kkkya").is_none());
    }

    #[test]
    fn test_resolve_direct() {
        let d = dict();
        assert_eq!(resolve(&d, "a").as_deref(), Some("あ"));
        assert_eq!(resolve(&d, "ka").as_deref(), Some("か"));
        assert_eq!(resolve(&d, "n").as_deref(), Some("ん"));
        assert_eq!(resolve(&d, "si").as_deref(), Some("し"));
        assert_eq!(resolve(&d, "k"), None);
        assert_eq!(resolve(&d, ""), None);
    }

    #[test]
    fn test_resolve_compounds() {
        let d = dict();
        assert_eq!(resolve(&d, "kka").as_deref(), Some("っか"));
        assert_eq!(resolve(&d, "kya").as_deref(), Some("きゃ"));
        assert_eq!(resolve(&d, "sha").as_deref(), Some("しゃ"));
        assert_eq!(resolve(&d, "ja").as_deref(), Some("じゃ"));
        assert_eq!(resolve(&d, "tya").as_deref(), Some("ちゃ"));
        assert_eq!(resolve(&d, "kkya").as_deref(), Some("っきゃ"));
        assert_eq!(resolve(&d, "nna").as_deref(), Some("んな"));
        assert_eq!(resolve(&d, "nnya").as_deref(), Some("んにゃ"));
        assert_eq!(resolve(&d, "kkka"), None);
        assert_eq!(resolve(&d, "kkkka"), None);
    }

    #[test]
    fn test_resolve_gap_abandons_attempt() {
        // With the small letters filtered out, "kka" still matches the
        // gemination grammar but its っ token no longer resolves.
        let filter = TableFilter::new(vec!["-small".into()], vec![]);
        let d = KanaDictionary::builtin_hiragana(&filter);
        assert_eq!(resolve(&d, "kka"), None);
        assert_eq!(resolve(&d, "ka").as_deref(), Some("か"));
    }

    #[test]
    fn test_read_kana_fallback() {
        let d = dict();
        let ok = read_kana(&d, "kya");
        assert_eq!(ok.kana, "きゃ");
        assert_eq!(ok.romaji, "kya");

        let gap = read_kana(&d, "k");
        assert_eq!(gap.kana, MISSING_GLYPH.to_string());
        assert_eq!(gap.romaji, "k");
    }

    #[test]
    fn test_non_ascii_never_decomposes() {
        let d = dict();
        assert_eq!(resolve(&d, "かa"), None);
    }
}
