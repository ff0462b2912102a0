//! Property-based tests for the typing-session state machine.
//!
//! Random keystroke sequences must never break the structural invariants,
//! and typing every target's own romaji verbatim must score a perfect run.

use proptest::prelude::*;

use super::*;

#[derive(Debug, Clone)]
enum Action {
    Type(char),
    Regenerate(usize),
    ResetCounters,
}

fn arb_key() -> impl Strategy<Value = char> {
    // Vowels weighted up for realistic romaji.
    prop_oneof![
        3 => prop::sample::select(vec!['a', 'i', 'u', 'e', 'o']),
        1 => prop::sample::select(vec![
            'k', 's', 't', 'n', 'h', 'm', 'y', 'r', 'w',
            'g', 'z', 'd', 'b', 'p', 'c', 'f', 'j', 'x', 'q',
        ]),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        20 => arb_key().prop_map(Action::Type),
        1 => (1usize..12).prop_map(Action::Regenerate),
        1 => Just(Action::ResetCounters),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_under_random_input(
        seed in 0u64..1000,
        actions in prop::collection::vec(arb_action(), 1..60),
    ) {
        let mut session = seeded_session(10, seed);

        for action in actions {
            match action {
                Action::Type(ch) => {
                    let outcome = press(&mut session, ch);
                    match outcome {
                        Outcome::Pending => {}
                        Outcome::Correct | Outcome::Incorrect => {
                            prop_assert_eq!(session.pending_input(), "");
                        }
                    }
                }
                Action::Regenerate(budget) => {
                    session.regenerate(budget);
                    prop_assert_eq!(session.cursor(), 0);
                    prop_assert_eq!(session.pending_input(), "");
                }
                Action::ResetCounters => {
                    session.reset_counters();
                    prop_assert_eq!(session.correct_count(), 0);
                    prop_assert_eq!(session.incorrect_count(), 0);
                }
            }

            prop_assert!(session.cursor() <= session.target().len());
            // Pending input is never left behind a consumed target element.
            if session.is_finished() {
                prop_assert_eq!(session.pending_input(), "");
            }
        }
    }

    #[test]
    fn typing_each_target_verbatim_is_perfect(seed in 0u64..1000, budget in 1usize..16) {
        let mut session = seeded_session(budget, seed);
        let targets: Vec<String> =
            session.target().iter().map(|t| t.romaji.clone()).collect();

        for romaji in &targets {
            prop_assert_eq!(press_all(&mut session, romaji), Outcome::Correct);
        }

        prop_assert!(session.is_finished());
        prop_assert_eq!(session.correct_count() as usize, targets.len());
        prop_assert_eq!(session.incorrect_count(), 0);
    }

    #[test]
    fn counters_match_cursor_without_regeneration(
        seed in 0u64..1000,
        keys in prop::collection::vec(arb_key(), 1..40),
    ) {
        let mut session = seeded_session(8, seed);
        for ch in keys {
            press(&mut session, ch);
            let consumed = session.correct_count() + session.incorrect_count();
            prop_assert_eq!(consumed as usize, session.cursor());
        }
    }
}
