use crate::classify::MAX_SYLLABLE_LEN;
use crate::syllable::{AccentStyle, Syllable, Tone, Transformation, parse};

/// Clusters whose second vowel carries the tone in the modern convention.
const SPECIAL_PAIRS: [&str; 6] = ["oa", "oe", "oo", "ie", "uo", "uy"];

/// Toggles `tone` on the syllable: same tone twice clears it, another tone replaces it.
pub fn set_tone(syllable: &mut Syllable, tone: Tone) -> Transformation {
    if tone == Tone::None {
        return clear_tone(syllable);
    }
    if syllable.vowel.is_empty() || syllable.len() > MAX_SYLLABLE_LEN {
        return Transformation::Ignored;
    }

    let previous = syllable.tone;
    if previous == tone {
        syllable.tone = Tone::None;
        return Transformation::Removed;
    }
    syllable.tone = tone;
    if previous == Tone::None {
        Transformation::Added
    } else {
        Transformation::Swapped
    }
}

pub fn clear_tone(syllable: &mut Syllable) -> Transformation {
    if syllable.tone == Tone::None || syllable.len() > MAX_SYLLABLE_LEN {
        return Transformation::Ignored;
    }
    syllable.tone = Tone::None;
    Transformation::Removed
}

/// Index of the letter that hosts the tone in `rendered`, which already shows its shapes.
///
/// `None` when the text has no vowel.
pub fn placement(rendered: &str, accent: AccentStyle) -> Option<usize> {
    let parts = parse(rendered);
    let vowel = parts.vowel.to_lowercase();
    let vowel_len = vowel.chars().count();
    let vowel_index = parts.initial.chars().count();
    let has_final = !parts.coda.is_empty();

    if vowel_len == 0 {
        return None;
    }
    if vowel_len == 1 {
        return Some(vowel_index);
    }
    if let Some(i) = vowel.chars().position(|c| matches!(c, 'ơ' | 'ê' | 'â')) {
        return Some(vowel_index + i);
    }
    if parts.initial.is_empty() && !has_final && vowel == "uo" {
        return Some(vowel_index);
    }

    let second = match accent {
        AccentStyle::Legacy => vowel_len == 3 || (vowel_len == 2 && has_final),
        AccentStyle::Modern => {
            SPECIAL_PAIRS.iter().any(|pair| vowel.contains(pair)) || has_final || vowel_len != 2
        }
    };
    Some(if second { vowel_index + 1 } else { vowel_index })
}
