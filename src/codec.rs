//! Character-level diacritic codec.
//!
//! Tones and letter shapes are Unicode combining marks. Every function here
//! decomposes its input (NFD), edits the mark sequence and recomposes (NFC).
//! A result that does not collapse back into a single code point is
//! discarded and the input character is returned unchanged.

use std::iter;

use unicode_normalization::UnicodeNormalization;

use crate::classify::is_vowel;
use crate::syllable::{Modification, Tone};

const GRAVE: char = '\u{0300}';
const ACUTE: char = '\u{0301}';
const CIRCUMFLEX: char = '\u{0302}';
const TILDE: char = '\u{0303}';
const BREVE: char = '\u{0306}';
const HOOK: char = '\u{0309}';
const HORN: char = '\u{031B}';
const DOT: char = '\u{0323}';

impl Tone {
    /// Combining mark rendered for this tone, `None` for the level tone.
    pub const fn mark(self) -> Option<char> {
        match self {
            Tone::None => None,
            Tone::Grave => Some(GRAVE),
            Tone::Acute => Some(ACUTE),
            Tone::Hook => Some(HOOK),
            Tone::Tilde => Some(TILDE),
            Tone::Dot => Some(DOT),
        }
    }

    const fn from_mark(mark: char) -> Option<Tone> {
        match mark {
            GRAVE => Some(Tone::Grave),
            ACUTE => Some(Tone::Acute),
            HOOK => Some(Tone::Hook),
            TILDE => Some(Tone::Tilde),
            DOT => Some(Tone::Dot),
            _ => None,
        }
    }
}

impl Modification {
    /// Combining mark for the shape modifications; `Dyet` swaps the letter instead.
    pub const fn mark(self) -> Option<char> {
        match self {
            Modification::Breve => Some(BREVE),
            Modification::Circumflex => Some(CIRCUMFLEX),
            Modification::Horn => Some(HORN),
            Modification::Dyet => None,
        }
    }

    const fn from_mark(mark: char) -> Option<Modification> {
        match mark {
            BREVE => Some(Modification::Breve),
            CIRCUMFLEX => Some(Modification::Circumflex),
            HORN => Some(Modification::Horn),
            _ => None,
        }
    }
}

#[inline(always)]
fn is_tone_mark(c: char) -> bool {
    Tone::from_mark(c).is_some()
}

#[inline(always)]
fn is_shape_mark(c: char) -> bool {
    Modification::from_mark(c).is_some()
}

#[inline(always)]
fn decompose(ch: char) -> impl Iterator<Item = char> {
    iter::once(ch).nfd()
}

fn compose(decomposed: impl Iterator<Item = char>, fallback: char) -> char {
    let mut composed = decomposed.nfc();
    match (composed.next(), composed.next()) {
        (Some(c), None) => c,
        _ => fallback,
    }
}

/// Base Latin letter with case preserved: every combining mark is dropped and `đ` maps to `d`.
pub fn base_char(ch: char) -> char {
    match ch {
        'đ' => 'd',
        'Đ' => 'D',
        _ => decompose(ch)
            .find(|c| !('\u{0300}'..='\u{036F}').contains(c))
            .unwrap_or(ch),
    }
}

/// [`base_char`] over a whole string.
pub fn clean(text: &str) -> String {
    text.chars().map(base_char).collect()
}

pub fn tone_of(ch: char) -> Tone {
    decompose(ch).find_map(Tone::from_mark).unwrap_or(Tone::None)
}

pub fn modification_of(ch: char) -> Option<Modification> {
    match ch {
        'đ' | 'Đ' => Some(Modification::Dyet),
        _ => decompose(ch).find_map(Modification::from_mark),
    }
}

pub fn strip_tone(ch: char) -> char {
    compose(decompose(ch).filter(|c| !is_tone_mark(*c)), ch)
}

/// Drops tone and shape and turns `đ` back into `d`.
///
/// Unlike [`base_char`], marks Vietnamese does not use survive (`ï` stays `ï`).
pub fn strip_marks(ch: char) -> char {
    match ch {
        'đ' => 'd',
        'Đ' => 'D',
        _ => compose(
            decompose(ch).filter(|c| !is_tone_mark(*c) && !is_shape_mark(*c)),
            ch,
        ),
    }
}

/// [`strip_marks`] over a whole string.
pub fn strip_text_marks(text: &str) -> String {
    text.chars().map(strip_marks).collect()
}

/// Replaces the tone on a vowel. Consonants come back untouched.
pub fn add_tone(ch: char, tone: Tone) -> char {
    if !is_vowel(ch) {
        return ch;
    }
    let toneless = decompose(ch).filter(|c| !is_tone_mark(*c));
    compose(toneless.chain(tone.mark()), ch)
}

/// Replaces the shape of a letter, keeping whatever tone it already carries.
pub fn add_modification(ch: char, kind: Modification) -> char {
    match kind {
        Modification::Dyet => match ch {
            'd' => 'đ',
            'D' => 'Đ',
            _ => ch,
        },
        _ => {
            let tone = tone_of(ch);
            let bare = decompose(ch).filter(|c| !is_tone_mark(*c) && !is_shape_mark(*c));
            add_tone(compose(bare.chain(kind.mark()), ch), tone)
        }
    }
}

/// Sets the shape of a letter to exactly `kind`, or removes it for `None`; the tone survives.
pub fn set_modification(ch: char, kind: Option<Modification>) -> char {
    let tone = tone_of(ch);
    let base = strip_marks(ch);
    let shaped = match kind {
        Some(kind) => add_modification(base, kind),
        None => base,
    };
    add_tone(shaped, tone)
}

/// True if some letter carries both a tone and a shape mark (`ấ`, `ữ`, ...).
///
/// Hosts that replay text as synthesized keystrokes cannot always produce
/// these; relays paste them instead.
pub fn needs_paste(text: &str) -> bool {
    text.chars().any(|ch| {
        tone_of(ch) != Tone::None
            && matches!(
                modification_of(ch),
                Some(Modification::Breve | Modification::Circumflex | Modification::Horn)
            )
    })
}
