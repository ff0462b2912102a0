//! Stateful typing-practice session.
//!
//! A `TypingSession` owns one generated target sequence, a cursor into it,
//! and the accuracy counters, and classifies every keystroke against the
//! current target element. The caller delivers the full typed string on
//! each keystroke and clears its input box whenever the outcome advances
//! the cursor.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, debug_span};

use kanatype_core::dict::KanaDictionary;
use kanatype_core::generator::{generate_target, target_text, KanaChar};
use kanatype_core::romaji::read_kana;
use kanatype_core::unicode::is_valid_symbol;

/// Classification of one keystroke against the current target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The typed romaji produced the target kana; cursor advanced.
    Correct,
    /// Continuing to type can no longer produce the target; cursor advanced.
    Incorrect,
    /// Still in progress, keep typing.
    Pending,
}

pub struct TypingSession {
    dict: Arc<KanaDictionary>,
    target: Vec<KanaChar>,
    cursor: usize,
    pending: String,
    correct: u32,
    incorrect: u32,
    /// Whether `regenerate` also zeroes the accuracy counters. Counters are
    /// session-scoped by default; flipping this makes them sequence-scoped.
    reset_counters_on_regenerate: bool,
    rng: SmallRng,
}

impl TypingSession {
    /// New session with a freshly generated target of `budget` rendered
    /// code points.
    pub fn new(dict: Arc<KanaDictionary>, budget: usize) -> Self {
        Self::with_rng(dict, budget, SmallRng::from_entropy())
    }

    /// Deterministic variant for tests and replays.
    pub fn with_rng(dict: Arc<KanaDictionary>, budget: usize, mut rng: SmallRng) -> Self {
        let target = generate_target(&dict, budget, &mut rng);
        Self::from_parts(dict, target, rng)
    }

    /// Session over a caller-chosen drill list instead of a random target.
    pub fn with_target(dict: Arc<KanaDictionary>, target: Vec<KanaChar>) -> Self {
        Self::from_parts(dict, target, SmallRng::from_entropy())
    }

    fn from_parts(dict: Arc<KanaDictionary>, target: Vec<KanaChar>, rng: SmallRng) -> Self {
        Self {
            dict,
            target,
            cursor: 0,
            pending: String::new(),
            correct: 0,
            incorrect: 0,
            reset_counters_on_regenerate: false,
            rng,
        }
    }

    /// Classify the full typed string against the current target element.
    ///
    /// The string is re-resolved from scratch on every keystroke, so the
    /// caller only accumulates raw characters and clears them when the
    /// cursor advances.
    pub fn type_key(&mut self, typed: &str) -> Outcome {
        let _span = debug_span!("type_key", %typed).entered();

        let Some(expected) = self.target.get(self.cursor) else {
            return Outcome::Pending;
        };
        let typed = typed.to_lowercase();
        if typed.is_empty() {
            self.pending.clear();
            return Outcome::Pending;
        }

        let tentative = read_kana(&self.dict, &typed);
        let outcome = classify(&self.dict, &tentative, expected);
        debug!(?outcome, kana = %tentative.kana, "classified keystroke");

        match outcome {
            Outcome::Correct => {
                self.pending.clear();
                self.cursor += 1;
                self.correct += 1;
            }
            Outcome::Incorrect => {
                self.pending.clear();
                self.cursor += 1;
                self.incorrect += 1;
            }
            Outcome::Pending => {
                self.pending = typed;
            }
        }
        outcome
    }

    /// Replace the target: cursor and pending input reset, counters only
    /// when the reset policy says so.
    pub fn regenerate(&mut self, budget: usize) {
        self.target = generate_target(&self.dict, budget, &mut self.rng);
        self.cursor = 0;
        self.pending.clear();
        if self.reset_counters_on_regenerate {
            self.reset_counters();
        }
    }

    pub fn reset_counters(&mut self) {
        self.correct = 0;
        self.incorrect = 0;
    }

    pub fn set_reset_counters_on_regenerate(&mut self, enabled: bool) {
        self.reset_counters_on_regenerate = enabled;
    }

    pub fn target(&self) -> &[KanaChar] {
        &self.target
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    /// False until the dictionary produced a non-empty target.
    pub fn is_ready(&self) -> bool {
        !self.target.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.target.len()
    }

    /// The target as the user sees it: kana, or romaji where the glyph is
    /// missing.
    pub fn display_text(&self) -> String {
        target_text(&self.target)
    }
}

fn classify(dict: &KanaDictionary, tentative: &KanaChar, expected: &KanaChar) -> Outcome {
    let target_valid = is_valid_symbol(&expected.kana);

    if target_valid && is_valid_symbol(&tentative.kana) && tentative.kana == expected.kana {
        return Outcome::Correct;
    }
    // A target the dictionary could not render falls back to matching the
    // romaji itself, the same fallback the display uses.
    if !target_valid && tentative.romaji == expected.romaji {
        return Outcome::Correct;
    }

    if can_still_match(dict, &tentative.romaji, expected) {
        Outcome::Pending
    } else {
        Outcome::Incorrect
    }
}

/// Whether continuing to type can still produce the target: the typed text
/// must be a prefix of the target's romaji, or of any accepted spelling of
/// a single-code-point target symbol (so "t" stays pending against ち even
/// when the target was generated from "chi").
fn can_still_match(dict: &KanaDictionary, typed: &str, expected: &KanaChar) -> bool {
    if expected.romaji.starts_with(typed) {
        return true;
    }
    let mut symbols = expected.kana.chars();
    match (symbols.next(), symbols.next()) {
        (Some(symbol), None) => dict
            .spellings(symbol)
            .iter()
            .any(|spelling| spelling.starts_with(typed)),
        _ => false,
    }
}
