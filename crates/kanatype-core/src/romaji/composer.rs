use std::sync::Arc;

use crate::dict::KanaDictionary;
use crate::unicode::display_width;

use super::syllable::Syllable;

/// One committed syllable: resolved kana (possibly several code points),
/// the romaji that produced it, and its terminal display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedChar {
    pub kana: String,
    pub romaji: String,
    pub width: usize,
}

/// Multi-syllable composition buffer.
///
/// Commit is eager: the moment the pending syllable resolves to a final
/// kana it moves into the committed history and the buffer clears. The
/// provisional nasal is the one exception; it stays pending until a
/// non-continuing character arrives. `remove` undoes exactly one `append`.
pub struct Composer {
    dict: Arc<KanaDictionary>,
    committed: Vec<ComposedChar>,
    pending: Syllable,
}

impl Composer {
    pub fn new(dict: Arc<KanaDictionary>) -> Self {
        Self {
            dict,
            committed: Vec::new(),
            pending: Syllable::new(),
        }
    }

    pub fn append(&mut self, ch: char) {
        if !self.pending.try_append(ch, &self.dict) {
            self.commit_pending();
            self.pending.try_append(ch, &self.dict);
        }
        if self.pending.is_final() {
            self.commit_pending();
        }
    }

    /// Undo one raw character. Pops from the pending buffer when it holds
    /// anything; otherwise the newest committed token is reopened and the
    /// buffer becomes its source romaji minus the removed last character.
    pub fn remove(&mut self) -> Option<char> {
        if !self.pending.is_empty() {
            return self.pending.pop(&self.dict);
        }
        let token = self.committed.pop()?;
        let mut romaji = token.romaji;
        let last = romaji.pop();
        self.pending = Syllable::from_romaji(&romaji, &self.dict);
        last
    }

    pub fn committed(&self) -> &[ComposedChar] {
        &self.committed
    }

    pub fn pending(&self) -> &Syllable {
        &self.pending
    }

    /// Committed kana plus the pending syllable's display value.
    pub fn display(&self) -> String {
        let mut out: String = self.committed.iter().map(|c| c.kana.as_str()).collect();
        out.push_str(self.pending.value());
        out
    }

    /// Everything typed so far, in romaji.
    pub fn romaji(&self) -> String {
        let mut out: String = self.committed.iter().map(|c| c.romaji.as_str()).collect();
        out.push_str(self.pending.romaji());
        out
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.pending = Syllable::new();
    }

    fn commit_pending(&mut self) {
        debug_assert!(self.pending.is_valid(), "committing an unresolved syllable");
        let (romaji, kana) = std::mem::take(&mut self.pending).into_parts();
        self.committed.push(ComposedChar {
            width: display_width(&kana),
            kana,
            romaji,
        });
    }
}
