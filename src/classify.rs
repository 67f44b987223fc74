use crate::codec::{base_char, clean};
use crate::syllable::parse;

// Constants Bitmask
const IS_VOWEL: u8 = 1 << 0;
const IS_INITIAL: u8 = 1 << 1;
const IS_WORD_BREAK: u8 = 1 << 2;

/// Rendered syllables longer than this no longer accept tone or modification actions.
pub const MAX_SYLLABLE_LEN: usize = 7;

const CLASSIFY: [u8; 128] = {
    let mut t = [0u8; 128];

    let vowels = b"aeiouyAEIOUY";
    let mut i = 0;
    while i < vowels.len() {
        t[vowels[i] as usize] |= IS_VOWEL;
        i += 1;
    }

    // đ is the only non-ASCII single initial and is handled in `is_valid_initial`
    let initials = b"bcdghklmnpqrstvx";
    i = 0;
    while i < initials.len() {
        t[initials[i] as usize] |= IS_INITIAL;
        i += 1;
    }

    let breaks = b" !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~0123456789";
    i = 0;
    while i < breaks.len() {
        t[breaks[i] as usize] |= IS_WORD_BREAK;
        i += 1;
    }
    t
};

const DIGRAPH_INITIALS: [&str; 10] = ["ch", "gh", "gi", "kh", "ng", "nh", "ph", "qu", "th", "tr"];

const FINALS: [&str; 8] = ["c", "ch", "m", "n", "ng", "nh", "p", "t"];

pub const VALID_NUCLEI: [&str; 39] = [
    "a", "ai", "ao", "au", "ay", "e", "eo", "eu", "i", "ia", "ie", "ieu", "io", "iu", "o", "oa",
    "oai", "oao", "oay", "oe", "oeo", "oi", "oo", "u", "ua", "uay", "ue", "ui", "uo", "uoi", "uou",
    "uu", "uy", "uya", "uye", "uyu", "y", "ye", "yeu",
];

#[inline(always)]
fn class_of(ch: char) -> u8 {
    if ch.is_ascii() { CLASSIFY[ch as usize] } else { 0 }
}

/// True when the letter, stripped of case and every diacritic, is one of `a e i o u y`.
#[inline]
pub fn is_vowel(ch: char) -> bool {
    class_of(base_char(ch)) & IS_VOWEL != 0
}

/// Whitespace-free separators that finalize the syllable: ASCII punctuation and digits.
#[inline]
pub fn is_word_break(ch: char) -> bool {
    class_of(ch) & IS_WORD_BREAK != 0
}

pub fn is_valid_initial(initial: &str) -> bool {
    let lower = initial.to_lowercase();
    let mut chars = lower.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(c), None, _, _) => c == 'đ' || class_of(c) & IS_INITIAL != 0,
        (Some(_), Some(_), None, _) => DIGRAPH_INITIALS.contains(&lower.as_str()),
        (Some(_), Some(_), Some(_), None) => lower == "ngh",
        _ => false,
    }
}

pub fn is_valid_final(coda: &str) -> bool {
    FINALS.contains(&coda.to_lowercase().as_str())
}

/// Checks an accented or bare vowel run against the closed list of nuclei.
pub fn is_valid_nucleus(vowel: &str) -> bool {
    VALID_NUCLEI.contains(&clean(vowel).to_lowercase().as_str())
}

/// Orthographic shape check for a rendered syllable; accents are ignored.
pub fn is_valid_syllable(text: &str) -> bool {
    let parts = parse(text);
    if !parts.initial.is_empty() && !is_valid_initial(&parts.initial) {
        return false;
    }
    if parts.vowel.is_empty() {
        return true;
    }
    is_valid_nucleus(&parts.vowel) && (parts.coda.is_empty() || is_valid_final(&parts.coda))
}
