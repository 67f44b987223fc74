use serde::{Deserialize, Serialize};

use crate::classify::is_vowel;
use crate::codec::{self, strip_text_marks};
use crate::{modification, tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    None,
    Grave,
    Acute,
    Hook,
    Tilde,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modification {
    Breve,
    Circumflex,
    Horn,
    /// `d` → `đ`, a letter substitution rather than a mark.
    Dyet,
}

/// Which vowel of an ambiguous cluster hosts the tone mark (`hóa` vs `hoá`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentStyle {
    Legacy,
    #[default]
    Modern,
}

/// Outcome of a tone or modification toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    Added,
    Removed,
    Swapped,
    Ignored,
}

/// Three-way split of a raw syllable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parts {
    pub initial: String,
    pub vowel: String,
    pub coda: String,
}

/// Splits `raw` into initial consonant, vowel run and whatever follows.
///
/// `gi` and `qu` are onsets when a vowel follows them; a bare `gi` keeps the
/// `i` as its vowel (`gì`, `gin`).
pub fn parse(raw: &str) -> Parts {
    let chars: Vec<char> = raw.chars().collect();
    let lower_at = |i: usize| chars.get(i).map(|c| c.to_lowercase().next().unwrap_or(*c));
    let onset = (lower_at(0), lower_at(1));

    let mut start = 0usize;
    if onset == (Some('g'), Some('i')) && !chars.get(2).is_some_and(|c| is_vowel(*c)) {
        start = 1;
    } else if matches!(onset, (Some('g'), Some('i')) | (Some('q'), Some('u'))) {
        start = 2;
    } else {
        while start < chars.len() && !is_vowel(chars[start]) {
            start += 1;
        }
    }

    let mut end = start;
    while end < chars.len() && is_vowel(chars[end]) {
        end += 1;
    }

    Parts {
        initial: chars[..start].iter().collect(),
        vowel: chars[start..end].iter().collect(),
        coda: chars[end..].iter().collect(),
    }
}

/// The syllable under composition.
///
/// Initial and vowel are kept as bare Latin letters; shapes and tone live in
/// `modifications` and `tone` and are only materialized by [`Syllable::render`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Syllable {
    pub(crate) initial: String,
    pub(crate) vowel: String,
    pub(crate) coda: String,
    pub(crate) modifications: Vec<(usize, Modification)>,
    pub(crate) tone: Tone,
    accent: AccentStyle,
}

impl Syllable {
    pub fn new(accent: AccentStyle) -> Self {
        Self {
            accent,
            ..Self::default()
        }
    }

    /// Rebuilds a syllable from already accented text, reading marks back off the letters.
    pub fn from_text(raw: &str, accent: AccentStyle) -> Self {
        let mut syllable = Self::new(accent);
        syllable.set_text(raw);
        syllable
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn vowel(&self) -> &str {
        &self.vowel
    }

    pub fn coda(&self) -> &str {
        &self.coda
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn accent(&self) -> AccentStyle {
        self.accent
    }

    pub fn modifications(&self) -> &[(usize, Modification)] {
        &self.modifications
    }

    /// Letter count of the rendered syllable.
    pub fn len(&self) -> usize {
        self.initial.chars().count() + self.vowel.chars().count() + self.coda.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.vowel.is_empty() && self.coda.is_empty()
    }

    /// Absolute index of the first vowel letter.
    pub(crate) fn vowel_index(&self) -> usize {
        self.initial.chars().count()
    }

    pub(crate) fn has_modification(&self, kind: Modification) -> bool {
        self.modifications.iter().any(|&(_, m)| m == kind)
    }

    pub(crate) fn positions_of(&self, kind: Modification) -> impl Iterator<Item = usize> + '_ {
        self.modifications
            .iter()
            .filter(move |&&(_, m)| m == kind)
            .map(|&(pos, _)| pos)
    }

    pub fn render(&self) -> String {
        let mut chars: Vec<char> = self
            .initial
            .chars()
            .chain(self.vowel.chars())
            .chain(self.coda.chars())
            .collect();

        for &(pos, kind) in &self.modifications {
            if let Some(ch) = chars.get_mut(pos) {
                *ch = codec::add_modification(*ch, kind);
            }
        }

        if self.tone != Tone::None {
            let shaped: String = chars.iter().collect();
            if let Some(ch) = tone::placement(&shaped, self.accent).and_then(|i| chars.get_mut(i)) {
                *ch = codec::add_tone(*ch, self.tone);
            }
        }

        chars.into_iter().collect()
    }

    /// Replaces the whole state with `raw`, which may carry marks of its own.
    pub(crate) fn set_text(&mut self, raw: &str) {
        let parts = parse(raw);
        self.initial = strip_text_marks(&parts.initial);
        self.vowel = strip_text_marks(&parts.vowel);
        self.coda = parts.coda;
        self.modifications = raw
            .chars()
            .enumerate()
            .filter_map(|(i, ch)| codec::modification_of(ch).map(|m| (i, m)))
            .collect();
        self.tone = raw
            .chars()
            .map(codec::tone_of)
            .find(|t| *t != Tone::None)
            .unwrap_or(Tone::None);
    }

    /// Appends a literal letter, re-splitting the syllable and replaying its shapes.
    ///
    /// A precomposed key (`ệ`, `đ`) that lands in the initial or the vowel
    /// brings its shape and tone along; the coda is kept as typed.
    pub(crate) fn push_char(&mut self, ch: char) {
        let index = self.len();
        let mut raw = String::with_capacity(self.initial.len() + self.vowel.len() + self.coda.len() + 4);
        raw.push_str(&self.initial);
        raw.push_str(&self.vowel);
        raw.push_str(&self.coda);
        raw.push(ch);

        let parts = parse(&raw);
        self.initial = strip_text_marks(&parts.initial);
        self.vowel = strip_text_marks(&parts.vowel);
        self.coda = parts.coda;

        if index < self.vowel_index() + self.vowel.chars().count() {
            if let Some(kind) = codec::modification_of(ch) {
                self.modifications.push((index, kind));
            }
            let tone = codec::tone_of(ch);
            if tone != Tone::None {
                self.tone = tone;
            }
        }
        modification::recompute(self);
    }

    /// Swaps the last rendered letter for `ch` and re-reads the result.
    pub(crate) fn replace_last_char(&mut self, ch: char) {
        let mut raw = self.render();
        if raw.pop().is_none() {
            return;
        }
        raw.push(ch);
        self.set_text(&raw);
    }
}
