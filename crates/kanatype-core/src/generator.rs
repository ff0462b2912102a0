//! Random target-sequence generation.
//!
//! Samples uniformly from the dictionary's combinable corpus until the
//! requested rendered length (in code points) is met exactly.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::dict::KanaDictionary;
use crate::romaji::read_kana;
use crate::unicode::is_valid_symbol;

/// One target element: the rendered kana and the romaji that produces it.
/// Entries the dictionary cannot render keep the missing glyph in `kana`
/// and fall back to romaji for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaChar {
    pub kana: String,
    pub romaji: String,
}

impl KanaChar {
    /// Kana when fully rendered, else the romaji fallback.
    pub fn display(&self) -> &str {
        if is_valid_symbol(&self.kana) {
            &self.kana
        } else {
            &self.romaji
        }
    }

    /// Rendered length in code points.
    pub fn rendered_len(&self) -> usize {
        self.kana.chars().count()
    }
}

/// Render a target sequence for on-screen display.
pub fn target_text(target: &[KanaChar]) -> String {
    target.iter().map(KanaChar::display).collect()
}

/// Generate a target whose total rendered length equals `budget` exactly.
///
/// Entries too long for the remaining budget are rejection-sampled away;
/// the corpus keeps single-vowel entries, so the remainder always fills.
/// An unloaded dictionary yields an empty sequence, not an error.
pub fn generate_target(
    dict: &KanaDictionary,
    budget: usize,
    rng: &mut impl Rng,
) -> Vec<KanaChar> {
    if dict.is_empty() || dict.all_combinable_romaji().is_empty() {
        warn!("kana dictionary not loaded, generating empty target");
        return Vec::new();
    }

    let pool: Vec<KanaChar> = dict
        .all_combinable_romaji()
        .iter()
        .map(|romaji| read_kana(dict, romaji))
        .collect();
    let min_len = pool
        .iter()
        .map(KanaChar::rendered_len)
        .min()
        .expect("pool is non-empty");

    let mut target = Vec::new();
    let mut remaining = budget;
    while remaining > 0 {
        if min_len > remaining {
            warn!(remaining, "no corpus entry fits the remaining budget, target truncated");
            break;
        }
        let pick = pool.choose(rng).expect("pool is non-empty");
        if pick.rendered_len() > remaining {
            continue;
        }
        remaining -= pick.rendered_len();
        target.push(pick.clone());
    }
    target
}
