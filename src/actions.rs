use crate::modes::Mode;
use crate::syllable::{Modification, Tone};

/// What a Telex key may do to the syllable under composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Tone(Tone),
    Modify(Modification),
    /// Applies `kind` only when the nucleus already contains `family` (`aa` → `â`).
    ModifyFamily { family: char, kind: Modification },
    ClearTone,
    /// Inserts a horned `u` into an empty nucleus (`w` → `ư`).
    InsertHelper,
    /// Turns a just-inserted helper back into the typed key (`ww` → `w`).
    CancelHelper,
}

impl Action {
    /// Whether the per-call mode lets this action run at all.
    #[inline]
    pub fn allowed_in(self, mode: Mode) -> bool {
        match self {
            Action::Tone(_) | Action::ClearTone => !mode.contains(Mode::TONE_LESS),
            Action::Modify(_)
            | Action::ModifyFamily { .. }
            | Action::InsertHelper
            | Action::CancelHelper => !mode.contains(Mode::MARK_LESS),
        }
    }
}

const fn family(letter: char) -> Action {
    Action::ModifyFamily {
        family: letter,
        kind: Modification::Circumflex,
    }
}

const KEY_A: &[Action] = &[family('a')];
const KEY_E: &[Action] = &[family('e')];
const KEY_O: &[Action] = &[family('o')];
const KEY_D: &[Action] = &[Action::Modify(Modification::Dyet)];
const KEY_F: &[Action] = &[Action::Tone(Tone::Grave)];
const KEY_J: &[Action] = &[Action::Tone(Tone::Dot)];
const KEY_R: &[Action] = &[Action::Tone(Tone::Hook)];
const KEY_S: &[Action] = &[Action::Tone(Tone::Acute)];
const KEY_X: &[Action] = &[Action::Tone(Tone::Tilde)];
const KEY_Z: &[Action] = &[Action::ClearTone];
const KEY_W: &[Action] = &[
    Action::CancelHelper,
    Action::Modify(Modification::Horn),
    Action::Modify(Modification::Breve),
    Action::InsertHelper,
];

/// Telex key table, indexed by lowercase ASCII key. Actions run in order until one applies.
pub const TELEX_ACTIONS: [&[Action]; 128] = {
    let mut t: [&[Action]; 128] = [&[]; 128];
    t[b'a' as usize] = KEY_A;
    t[b'd' as usize] = KEY_D;
    t[b'e' as usize] = KEY_E;
    t[b'f' as usize] = KEY_F;
    t[b'j' as usize] = KEY_J;
    t[b'o' as usize] = KEY_O;
    t[b'r' as usize] = KEY_R;
    t[b's' as usize] = KEY_S;
    t[b'w' as usize] = KEY_W;
    t[b'x' as usize] = KEY_X;
    t[b'z' as usize] = KEY_Z;
    t
};

/// Actions bound to a lowercase key; empty for plain letters and anything non-ASCII.
#[inline(always)]
pub fn telex_actions(key: char) -> &'static [Action] {
    if key.is_ascii() {
        TELEX_ACTIONS[key as usize]
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_keys() {
        assert_eq!(telex_actions('s'), &[Action::Tone(Tone::Acute)]);
        assert_eq!(telex_actions('f'), &[Action::Tone(Tone::Grave)]);
        assert_eq!(telex_actions('r'), &[Action::Tone(Tone::Hook)]);
        assert_eq!(telex_actions('x'), &[Action::Tone(Tone::Tilde)]);
        assert_eq!(telex_actions('j'), &[Action::Tone(Tone::Dot)]);
        assert_eq!(telex_actions('z'), &[Action::ClearTone]);
    }

    #[test]
    fn w_tries_helper_then_shapes() {
        assert_eq!(
            telex_actions('w'),
            &[
                Action::CancelHelper,
                Action::Modify(Modification::Horn),
                Action::Modify(Modification::Breve),
                Action::InsertHelper,
            ]
        );
    }

    #[test]
    fn plain_keys_have_no_actions() {
        for key in "bcghiklmnpqtuvy1 đ".chars() {
            assert!(telex_actions(key).is_empty(), "{key:?}");
        }
        // the table is lowercase only
        assert!(telex_actions('S').is_empty());
    }

    #[test]
    fn mode_gates() {
        let tone = Action::Tone(Tone::Acute);
        let shape = Action::Modify(Modification::Horn);
        assert!(tone.allowed_in(Mode::empty()));
        assert!(!tone.allowed_in(Mode::TONE_LESS));
        assert!(shape.allowed_in(Mode::TONE_LESS));
        assert!(!shape.allowed_in(Mode::MARK_LESS));
        assert!(!Action::ClearTone.allowed_in(Mode::TONE_LESS | Mode::MARK_LESS));
    }
}
