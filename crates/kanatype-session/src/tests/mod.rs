mod proptest_fsm;

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use kanatype_core::dict::{KanaDictionary, TableFilter};
use kanatype_core::generator::KanaChar;

use super::{Outcome, TypingSession};

pub(super) fn test_dict() -> Arc<KanaDictionary> {
    Arc::new(KanaDictionary::builtin_hiragana(&TableFilter::default()))
}

pub(super) fn seeded_session(budget: usize, seed: u64) -> TypingSession {
    TypingSession::with_rng(test_dict(), budget, SmallRng::seed_from_u64(seed))
}

pub(super) fn drill(pairs: &[(&str, &str)]) -> TypingSession {
    let target = pairs
        .iter()
        .map(|(kana, romaji)| KanaChar {
            kana: kana.to_string(),
            romaji: romaji.to_string(),
        })
        .collect();
    TypingSession::with_target(test_dict(), target)
}

/// Simulate one keystroke the way the UI delivers it: the pending input
/// plus the new character, as one string.
pub(super) fn press(session: &mut TypingSession, ch: char) -> Outcome {
    let mut typed = session.pending_input().to_string();
    typed.push(ch);
    session.type_key(&typed)
}

/// Type a whole romaji sequence character by character, returning the
/// outcome of the final keystroke.
pub(super) fn press_all(session: &mut TypingSession, text: &str) -> Outcome {
    let mut last = Outcome::Pending;
    for ch in text.chars() {
        last = press(session, ch);
    }
    last
}
