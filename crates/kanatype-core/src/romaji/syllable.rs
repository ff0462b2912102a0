use crate::dict::KanaDictionary;
use crate::unicode::display_width;

use super::rules::{continues_nasal, resolve};

/// One pending syllable: raw Latin input plus its resolution, if any.
///
/// States: empty → accumulating (input only) → resolved (output filled).
/// Every mutation re-validates the full buffer, so the resolution is always
/// a function of the current input alone, which is what makes removal an
/// exact inverse.
#[derive(Debug, Default, Clone)]
pub struct Syllable {
    input: String,
    output: String,
}

impl Syllable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a syllable from raw romaji (used when undo pops a committed
    /// token back into the buffer).
    pub fn from_romaji(romaji: &str, dict: &KanaDictionary) -> Self {
        let mut syllable = Self {
            input: romaji.to_string(),
            output: String::new(),
        };
        syllable.revalidate(dict);
        syllable
    }

    pub fn romaji(&self) -> &str {
        &self.input
    }

    pub fn kana(&self) -> &str {
        &self.output
    }

    /// The kana when resolved, else the raw romaji.
    pub fn value(&self) -> &str {
        if self.is_valid() {
            &self.output
        } else {
            &self.input
        }
    }

    pub fn width(&self) -> usize {
        display_width(self.value())
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.output.is_empty()
    }

    /// A lone `n` resolves to ん provisionally: a following vowel or `y`
    /// may still fold it into な/にゃ/….
    pub fn is_nasal(&self) -> bool {
        self.input == "n"
    }

    pub fn is_final(&self) -> bool {
        self.is_valid() && !self.is_nasal()
    }

    /// Append one character. Rejects (no-op, returns false) when the buffer
    /// already holds a final resolution, or a provisional nasal followed by
    /// a character that cannot continue it; the caller commits the buffer
    /// and retries on a fresh one.
    pub fn try_append(&mut self, ch: char, dict: &KanaDictionary) -> bool {
        if self.is_final() {
            return false;
        }
        if self.is_valid() && self.is_nasal() && !continues_nasal(ch) {
            return false;
        }
        self.input.push(ch);
        self.revalidate(dict);
        true
    }

    /// Drop the last raw character and re-validate. `None` when empty.
    pub fn pop(&mut self, dict: &KanaDictionary) -> Option<char> {
        let ch = self.input.pop()?;
        self.revalidate(dict);
        Some(ch)
    }

    pub(super) fn into_parts(self) -> (String, String) {
        (self.input, self.output)
    }

    fn revalidate(&mut self, dict: &KanaDictionary) {
        self.output = resolve(dict, &self.input).unwrap_or_default();
    }
}
