use crate::actions::{Action, telex_actions};
use crate::classify::{is_valid_syllable, is_word_break};
use crate::codec::clean;
use crate::config::EngineConfig;
use crate::modes::Mode;
use crate::syllable::{Modification, Syllable, Transformation, parse};
use crate::{modification, tone};

/// Telex engine for one editing context.
///
/// Holds the text already committed before the caret and the one syllable
/// still being composed. Feed it keys in typing order; call [`Engine::reset`]
/// whenever the caller's idea of "what precedes the caret" stops matching
/// what was fed.
#[derive(Debug, Clone)]
pub struct Engine {
    syllable: Syllable,
    committed: String,
    last_action: Option<Action>,
    pending_hold: bool,
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            syllable: Syllable::new(config.accent),
            committed: String::with_capacity(128),
            last_action: None,
            pending_hold: false,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Text finalized by word breaks so far.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn syllable(&self) -> &Syllable {
        &self.syllable
    }

    pub fn reset(&mut self) {
        tracing::debug!(msg = "engine_reset", committed_len = self.committed.len());
        self.committed.clear();
        self.syllable = Syllable::new(self.config.accent);
        self.last_action = None;
        self.pending_hold = false;
    }

    /// Committed text followed by the rendered syllable.
    pub fn processed_string(&self) -> String {
        let mut out = self.committed.clone();
        out.push_str(&self.syllable.render());
        out
    }

    /// Processes one key in the default mode and returns the processed string.
    pub fn feed(&mut self, key: char) -> String {
        self.process_key(key, Mode::empty());
        self.processed_string()
    }

    pub fn process_string(&mut self, text: &str, mode: Mode) {
        if mode.contains(Mode::FULL_TEXT) {
            self.reset();
        }
        for key in text.chars() {
            self.process_key(key, mode);
        }
    }

    pub fn process_key(&mut self, key: char, mode: Mode) {
        if key.is_whitespace() || is_word_break(key) {
            self.commit(key);
            return;
        }

        let key = if mode.contains(Mode::LOWER_CASE) { lower(key) } else { key };
        if mode.is_literal() {
            self.pending_hold = false;
            self.push(key);
            return;
        }

        let lower_key = lower(key);
        let raw = self.syllable.render();

        // 1. Double `w` on a bare `ươ`: hold the first, type the second literally
        if lower_key != 'w' {
            self.pending_hold = false;
        } else if !mode.contains(Mode::MARK_LESS) && is_bare_horned_uo(&self.syllable, &raw) {
            if !self.pending_hold {
                tracing::trace!(msg = "w_held", syllable = %raw);
                self.pending_hold = true;
                self.last_action = None;
                return;
            }
            self.pending_hold = false;
            self.syllable
                .modifications
                .retain(|&(_, m)| m != Modification::Horn);
            self.push(key);
            return;
        }

        // 2. First action that applies wins
        for &action in telex_actions(lower_key) {
            if !action.allowed_in(mode) {
                continue;
            }
            let outcome = self.apply_action(action, key);
            match outcome {
                Transformation::Ignored => continue,
                _ if action == Action::CancelHelper => {
                    self.last_action = Some(action);
                }
                Transformation::Removed if action != Action::ClearTone => {
                    self.last_action = None;
                    if self.config.echo_key_on_removal {
                        self.push(key);
                    }
                }
                _ => self.validate(action, &raw, key),
            }
            return;
        }

        // 3. Plain letter
        self.push(key);
    }

    fn apply_action(&mut self, action: Action, key: char) -> Transformation {
        let syllable = &mut self.syllable;
        match action {
            Action::Tone(t) => tone::set_tone(syllable, t),
            Action::ClearTone => tone::clear_tone(syllable),
            Action::Modify(kind) => modification::apply(syllable, kind),
            Action::ModifyFamily { family, kind } => {
                if syllable.vowel.to_lowercase().contains(family) {
                    modification::apply(syllable, kind)
                } else {
                    Transformation::Ignored
                }
            }
            Action::InsertHelper => self.insert_helper(key),
            Action::CancelHelper => {
                if self.last_action == Some(Action::InsertHelper) {
                    syllable.replace_last_char(key);
                    Transformation::Removed
                } else {
                    Transformation::Ignored
                }
            }
        }
    }

    fn insert_helper(&mut self, key: char) -> Transformation {
        let syllable = &mut self.syllable;
        if !syllable.vowel.is_empty() && !syllable.render().eq_ignore_ascii_case("gi") {
            return Transformation::Ignored;
        }
        if matches!(syllable.initial.to_lowercase().as_str(), "q" | "qu") {
            return Transformation::Ignored;
        }

        let helper = if key.is_uppercase() { 'U' } else { 'u' };
        syllable.push_char(helper);
        let last = syllable.len().saturating_sub(1);
        syllable.modifications.push((last, Modification::Horn));
        Transformation::Added
    }

    /// Keeps the action only if the result is still a Vietnamese syllable shape,
    /// otherwise falls back to typing the key after the previous text.
    fn validate(&mut self, action: Action, raw: &str, key: char) {
        let rendered = self.syllable.render();
        if is_valid_syllable(&rendered) {
            self.last_action = Some(action);
            return;
        }

        tracing::debug!(msg = "literal_fallback", ?action, rejected = %rendered, key = %key);
        let mut fallback = String::with_capacity(raw.len() + key.len_utf8());
        fallback.push_str(raw);
        fallback.push(key);
        self.syllable.set_text(&fallback);
        self.last_action = None;
    }

    fn push(&mut self, key: char) {
        self.syllable.push_char(key);
        self.last_action = None;
    }

    fn commit(&mut self, key: char) {
        let rendered = self.syllable.render();
        tracing::trace!(msg = "commit", syllable = %rendered, key = ?key);
        self.committed.push_str(&rendered);
        self.committed.push(key);
        self.syllable = Syllable::new(self.config.accent);
        self.last_action = None;
        self.pending_hold = false;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn lower(key: char) -> char {
    key.to_lowercase().next().unwrap_or(key)
}

/// `ươ` typed on its own, with the horn on both letters.
fn is_bare_horned_uo(syllable: &Syllable, raw: &str) -> bool {
    let parts = parse(raw);
    if !parts.initial.is_empty() || !parts.coda.is_empty() {
        return false;
    }
    if !clean(&parts.vowel).eq_ignore_ascii_case("uo") {
        return false;
    }
    let horned: Vec<usize> = syllable.positions_of(Modification::Horn).collect();
    horned.contains(&0) && horned.contains(&1)
}
