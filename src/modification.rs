use crate::classify::MAX_SYLLABLE_LEN;
use crate::syllable::{Modification, Syllable, Transformation};

/// Toggles `kind` on the syllable.
///
/// Applying a kind that is already present removes it, except for the horn
/// on `uo`, which is laid down one letter at a time (`thuơ` → `thươ`).
/// Installing a shape over a different one swaps it; `đ` is independent of
/// the vowel shapes and always survives a swap.
pub fn apply(syllable: &mut Syllable, kind: Modification) -> Transformation {
    let len = syllable.len();
    if len == 0 || len > MAX_SYLLABLE_LEN {
        return Transformation::Ignored;
    }

    if syllable.has_modification(kind) {
        return toggle_off(syllable, kind);
    }

    if kind == Modification::Dyet {
        if syllable.initial.starts_with(['d', 'D']) {
            syllable.modifications.push((0, Modification::Dyet));
            return Transformation::Added;
        }
        return Transformation::Ignored;
    }

    let candidates = positions(syllable, kind);
    if candidates.is_empty() {
        return Transformation::Ignored;
    }

    let outcome = if syllable.modifications.iter().all(|&(_, m)| m == Modification::Dyet) {
        Transformation::Added
    } else {
        syllable.modifications.retain(|&(_, m)| m == Modification::Dyet);
        Transformation::Swapped
    };
    syllable
        .modifications
        .extend(candidates.into_iter().map(|pos| (pos, kind)));
    outcome
}

fn toggle_off(syllable: &mut Syllable, kind: Modification) -> Transformation {
    if kind == Modification::Horn {
        let vowel_index = syllable.vowel_index();
        let horned: Vec<usize> = syllable.positions_of(Modification::Horn).collect();

        if syllable.vowel.eq_ignore_ascii_case("uo")
            && !syllable.initial.is_empty()
            && syllable.coda.is_empty()
        {
            match (horned.contains(&vowel_index), horned.contains(&(vowel_index + 1))) {
                (false, true) => {
                    syllable.modifications.push((vowel_index, Modification::Horn));
                    return Transformation::Added;
                }
                (true, true) => {
                    syllable.modifications.retain(|&(_, m)| m != Modification::Horn);
                    return Transformation::Removed;
                }
                _ => {}
            }
        }

        if let Some(missing) = positions(syllable, kind)
            .into_iter()
            .find(|pos| !horned.contains(pos))
        {
            syllable.modifications.push((missing, Modification::Horn));
            return Transformation::Added;
        }
    }

    syllable.modifications.retain(|&(_, m)| m != kind);
    Transformation::Removed
}

/// Letter indices that receive `kind` for the syllable's current shape.
pub fn positions(syllable: &Syllable, kind: Modification) -> Vec<usize> {
    let vowel_index = syllable.vowel_index();
    let vowel = syllable.vowel.to_lowercase();
    let find = |letter: char| vowel.chars().position(|c| c == letter);

    match kind {
        Modification::Dyet => vec![0],
        Modification::Circumflex => {
            let found: Vec<usize> = ['a', 'o', 'e'].into_iter().filter_map(find).collect();
            match found.as_slice() {
                [i] => vec![vowel_index + i],
                _ => Vec::new(),
            }
        }
        Modification::Breve => find('a').map(|i| vec![vowel_index + i]).unwrap_or_default(),
        Modification::Horn => match vowel.as_str() {
            "oa" => Vec::new(),
            "uo" if !syllable.initial.is_empty() && syllable.coda.is_empty() => {
                vec![vowel_index + 1]
            }
            "uo" | "uoi" | "uou" => vec![vowel_index, vowel_index + 1],
            _ => find('u')
                .or_else(|| find('o'))
                .map(|i| vec![vowel_index + i])
                .unwrap_or_default(),
        },
    }
}

/// Replays the syllable's modification kinds after it grew by a literal letter.
///
/// Shapes whose placement cannot have moved keep their positions: a bare
/// vowel run, `uo` right after an initial, and a horned `uo` followed by a
/// stray tone key.
pub(crate) fn recompute(syllable: &mut Syllable) {
    let vowel = syllable.vowel.to_lowercase();
    let horned = syllable.has_modification(Modification::Horn);

    if syllable.initial.is_empty()
        && syllable.coda.is_empty()
        && vowel != "uoi"
        && !(horned && vowel == "uou")
    {
        return;
    }
    if vowel == "uo" && !syllable.initial.is_empty() && syllable.coda.is_empty() {
        return;
    }
    if vowel == "uo" && horned && is_tone_key(&syllable.coda) {
        return;
    }

    let mut kinds: Vec<Modification> = Vec::with_capacity(syllable.modifications.len());
    for &(_, kind) in &syllable.modifications {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    syllable.modifications.clear();
    for kind in kinds {
        apply(syllable, kind);
    }
}

fn is_tone_key(coda: &str) -> bool {
    let mut chars = coda.chars();
    matches!(
        (chars.next().map(|c| c.to_ascii_lowercase()), chars.next()),
        (Some('s' | 'f' | 'r' | 'x' | 'j'), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::AccentStyle;

    fn syllable(raw: &str) -> Syllable {
        Syllable::from_text(raw, AccentStyle::Modern)
    }

    #[test]
    fn circumflex_needs_exactly_one_family_letter() {
        assert_eq!(positions(&syllable("can"), Modification::Circumflex), vec![1]);
        assert_eq!(positions(&syllable("nghieng"), Modification::Circumflex), vec![4]);
        assert_eq!(positions(&syllable("xoong"), Modification::Circumflex), vec![1]);
        assert!(positions(&syllable("hoa"), Modification::Circumflex).is_empty());
        assert!(positions(&syllable("mi"), Modification::Circumflex).is_empty());
    }

    #[test]
    fn horn_positions() {
        assert!(positions(&syllable("hoa"), Modification::Horn).is_empty());
        assert_eq!(positions(&syllable("thuo"), Modification::Horn), vec![3]);
        assert_eq!(positions(&syllable("uo"), Modification::Horn), vec![0, 1]);
        assert_eq!(positions(&syllable("thuong"), Modification::Horn), vec![2, 3]);
        assert_eq!(positions(&syllable("muoi"), Modification::Horn), vec![1, 2]);
        assert_eq!(positions(&syllable("mua"), Modification::Horn), vec![1]);
        assert_eq!(positions(&syllable("to"), Modification::Horn), vec![1]);
        assert!(positions(&syllable("mi"), Modification::Horn).is_empty());
    }

    #[test]
    fn dyet_only_on_d_initial() {
        let mut s = syllable("da");
        assert_eq!(apply(&mut s, Modification::Dyet), Transformation::Added);
        assert_eq!(s.render(), "đa");
        assert_eq!(apply(&mut s, Modification::Dyet), Transformation::Removed);
        assert_eq!(s.render(), "da");

        let mut s = syllable("ba");
        assert_eq!(apply(&mut s, Modification::Dyet), Transformation::Ignored);
    }

    #[test]
    fn swap_keeps_dyet() {
        let mut s = syllable("đă");
        assert_eq!(apply(&mut s, Modification::Circumflex), Transformation::Swapped);
        assert_eq!(s.render(), "đâ");
        assert_eq!(apply(&mut s, Modification::Circumflex), Transformation::Removed);
        assert_eq!(s.render(), "đa");
    }

    #[test]
    fn horn_on_uo_after_initial_grows_one_letter_at_a_time() {
        let mut s = syllable("thuo");
        assert_eq!(apply(&mut s, Modification::Horn), Transformation::Added);
        assert_eq!(s.render(), "thuơ");
        assert_eq!(apply(&mut s, Modification::Horn), Transformation::Added);
        assert_eq!(s.render(), "thươ");
        assert_eq!(apply(&mut s, Modification::Horn), Transformation::Removed);
        assert_eq!(s.render(), "thuo");
    }

    #[test]
    fn horn_completes_bare_uo() {
        let mut s = syllable("ưo");
        assert_eq!(apply(&mut s, Modification::Horn), Transformation::Added);
        assert_eq!(s.render(), "ươ");
    }

    #[test]
    fn ignored_when_empty_or_too_long() {
        let mut s = Syllable::new(AccentStyle::Modern);
        assert_eq!(apply(&mut s, Modification::Horn), Transformation::Ignored);

        let mut s = syllable("nghuoang");
        assert_eq!(apply(&mut s, Modification::Breve), Transformation::Ignored);
    }

    #[test]
    fn growth_replays_shapes() {
        let mut s = syllable("thuơ");
        s.push_char('n');
        assert_eq!(s.render(), "thươn");

        let mut s = syllable("cô");
        s.push_char('n');
        assert_eq!(s.render(), "côn");
    }

    #[test]
    fn growth_keeps_stable_shapes() {
        let mut s = syllable("ư");
        s.push_char('a');
        assert_eq!(s.render(), "ưa");

        let mut s = syllable("thuơ");
        s.push_char('s');
        assert_eq!(s.modifications(), &[(3, Modification::Horn)]);
        assert_eq!(s.render(), "thuơs");
    }

    #[test]
    fn growth_past_limit_drops_shapes() {
        let mut s = syllable("nghiêng");
        s.push_char('g');
        assert_eq!(s.render(), "nghiengg");
    }

    #[test]
    fn tone_key_coda() {
        assert!(is_tone_key("s"));
        assert!(is_tone_key("J"));
        assert!(!is_tone_key("sf"));
        assert!(!is_tone_key(""));
        assert!(!is_tone_key("n"));
    }
}
