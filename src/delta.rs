use crate::codec::needs_paste;
use crate::engine::Engine;
use crate::modes::Mode;

/// Edit that turns the text before a key into the text after it.
///
/// Relays that cannot rewrite the host field directly replay this as
/// `delete_count` backspaces followed by `insert_text`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyDelta {
    /// Characters to erase behind the caret.
    pub delete_count: usize,
    pub insert_text: String,
    /// `insert_text` holds letters with stacked marks; paste rather than type it.
    pub use_paste: bool,
}

impl KeyDelta {
    pub fn between(before: &str, after: &str) -> Self {
        let common = before
            .chars()
            .zip(after.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let delete_count = before.chars().count() - common;
        let insert_text: String = after.chars().skip(common).collect();
        let use_paste = needs_paste(&insert_text);
        Self {
            delete_count,
            insert_text,
            use_paste,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.delete_count == 0 && self.insert_text.is_empty()
    }
}

impl Engine {
    /// Processes `key` and reports how the processed string changed.
    pub fn process_key_delta(&mut self, key: char, mode: Mode) -> KeyDelta {
        let before = self.processed_string();
        self.process_key(key, mode);
        KeyDelta::between(&before, &self.processed_string())
    }
}
