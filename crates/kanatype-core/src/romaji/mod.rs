//! Incremental romaji→kana transliteration.
//!
//! The grammar handles sokuon (っ), yōon (きゃ), their combination, and the
//! moraic nasal (ん). [`Syllable`] is the single-syllable state machine;
//! [`Composer`] owns the committed history and gives every append an exact
//! inverse for backspace.

mod composer;
mod rules;
mod syllable;

pub use composer::{ComposedChar, Composer};
pub use rules::{decompose, read_kana, resolve, split_sokuon, split_sokuon_yoon, split_yoon};
pub use syllable::Syllable;
