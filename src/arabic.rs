//! Arabic letter joining and presentation forms.
//!
//! Joining decides for every character which of its neighbours it connects
//! to. The result selects one of the contextual presentation forms from the
//! Arabic Presentation Forms-A and Forms-B blocks.

use crate::direction::{level_is_rtl, Level};
use crate::unicode::{BidiType, JoiningForm, JoiningProps};

/// Contextual forms of Arabic letters as `[isolated, final, initial, medial]`,
/// sorted by letter. Zero marks a form that does not exist.
#[rustfmt::skip]
const PRESENTATION_FORMS: &[(u16, [u16; 4])] = &[
(0x0621, [0xFE80, 0, 0, 0]),
    (0x0622, [0xFE81, 0xFE82, 0, 0]),
    (0x0623, [0xFE83, 0xFE84, 0, 0]),
    (0x0624, [0xFE85, 0xFE86, 0, 0]),
    (0x0625, [0xFE87, 0xFE88, 0, 0]),
    (0x0626, [0xFE89, 0xFE8A, 0xFE8B, 0xFE8C]),
    (0x0627, [0xFE8D, 0xFE8E, 0, 0]),
    (0x0628, [0xFE8F, 0xFE90, 0xFE91, 0xFE92]),
    (0x0629, [0xFE93, 0xFE94, 0, 0]),
    (0x062A, [0xFE95, 0xFE96, 0xFE97, 0xFE98]),
    (0x062B, [0xFE99, 0xFE9A, 0xFE9B, 0xFE9C]),
    (0x062C, [0xFE9D, 0xFE9E, 0xFE9F, 0xFEA0]),
    (0x062D, [0xFEA1, 0xFEA2, 0xFEA3, 0xFEA4]),
    (0x062E, [0xFEA5, 0xFEA6, 0xFEA7, 0xFEA8]),
    (0x062F, [0xFEA9, 0xFEAA, 0, 0]),
    (0x0630, [0xFEAB, 0xFEAC, 0, 0]),
    (0x0631, [0xFEAD, 0xFEAE, 0, 0]),
    (0x0632, [0xFEAF, 0xFEB0, 0, 0]),
    (0x0633, [0xFEB1, 0xFEB2, 0xFEB3, 0xFEB4]),
    (0x0634, [0xFEB5, 0xFEB6, 0xFEB7, 0xFEB8]),
    (0x0635, [0xFEB9, 0xFEBA, 0xFEBB, 0xFEBC]),
    (0x0636, [0xFEBD, 0xFEBE, 0xFEBF, 0xFEC0]),
    (0x0637, [0xFEC1, 0xFEC2, 0xFEC3, 0xFEC4]),
    (0x0638, [0xFEC5, 0xFEC6, 0xFEC7, 0xFEC8]),
    (0x0639, [0xFEC9, 0xFECA, 0xFECB, 0xFECC]),
    (0x063A, [0xFECD, 0xFECE, 0xFECF, 0xFED0]),
    (0x0641, [0xFED1, 0xFED2, 0xFED3, 0xFED4]),
    (0x0642, [0xFED5, 0xFED6, 0xFED7, 0xFED8]),
    (0x0643, [0xFED9, 0xFEDA, 0xFEDB, 0xFEDC]),
    (0x0644, [0xFEDD, 0xFEDE, 0xFEDF, 0xFEE0]),
    (0x0645, [0xFEE1, 0xFEE2, 0xFEE3, 0xFEE4]),
    (0x0646, [0xFEE5, 0xFEE6, 0xFEE7, 0xFEE8]),
    (0x0647, [0xFEE9, 0xFEEA, 0xFEEB, 0xFEEC]),
    (0x0648, [0xFEED, 0xFEEE, 0, 0]),
    (0x0649, [0xFEEF, 0xFEF0, 0xFBE8, 0xFBE9]),
    (0x064A, [0xFEF1, 0xFEF2, 0xFEF3, 0xFEF4]),
    (0x0671, [0xFB50, 0xFB51, 0, 0]),
    (0x0677, [0xFBDD, 0, 0, 0]),
    (0x0679, [0xFB66, 0xFB67, 0xFB68, 0xFB69]),
    (0x067A, [0xFB5E, 0xFB5F, 0xFB60, 0xFB61]),
    (0x067B, [0xFB52, 0xFB53, 0xFB54, 0xFB55]),
    (0x067E, [0xFB56, 0xFB57, 0xFB58, 0xFB59]),
    (0x067F, [0xFB62, 0xFB63, 0xFB64, 0xFB65]),
    (0x0680, [0xFB5A, 0xFB5B, 0xFB5C, 0xFB5D]),
    (0x0683, [0xFB76, 0xFB77, 0xFB78, 0xFB79]),
    (0x0684, [0xFB72, 0xFB73, 0xFB74, 0xFB75]),
    (0x0686, [0xFB7A, 0xFB7B, 0xFB7C, 0xFB7D]),
    (0x0687, [0xFB7E, 0xFB7F, 0xFB80, 0xFB81]),
    (0x0688, [0xFB88, 0xFB89, 0, 0]),
    (0x068C, [0xFB84, 0xFB85, 0, 0]),
    (0x068D, [0xFB82, 0xFB83, 0, 0]),
    (0x068E, [0xFB86, 0xFB87, 0, 0]),
    (0x0691, [0xFB8C, 0xFB8D, 0, 0]),
    (0x0698, [0xFB8A, 0xFB8B, 0, 0]),
    (0x06A4, [0xFB6A, 0xFB6B, 0xFB6C, 0xFB6D]),
    (0x06A6, [0xFB6E, 0xFB6F, 0xFB70, 0xFB71]),
    (0x06A9, [0xFB8E, 0xFB8F, 0xFB90, 0xFB91]),
    (0x06AD, [0xFBD3, 0xFBD4, 0xFBD5, 0xFBD6]),
    (0x06AF, [0xFB92, 0xFB93, 0xFB94, 0xFB95]),
    (0x06B1, [0xFB9A, 0xFB9B, 0xFB9C, 0xFB9D]),
    (0x06B3, [0xFB96, 0xFB97, 0xFB98, 0xFB99]),
    (0x06BA, [0xFB9E, 0xFB9F, 0, 0]),
    (0x06BB, [0xFBA0, 0xFBA1, 0xFBA2, 0xFBA3]),
    (0x06BE, [0xFBAA, 0xFBAB, 0xFBAC, 0xFBAD]),
    (0x06C0, [0xFBA4, 0xFBA5, 0, 0]),
    (0x06C1, [0xFBA6, 0xFBA7, 0xFBA8, 0xFBA9]),
    (0x06C5, [0xFBE0, 0xFBE1, 0, 0]),
    (0x06C6, [0xFBD9, 0xFBDA, 0, 0]),
    (0x06C7, [0xFBD7, 0xFBD8, 0, 0]),
    (0x06C8, [0xFBDB, 0xFBDC, 0, 0]),
    (0x06C9, [0xFBE2, 0xFBE3, 0, 0]),
    (0x06CB, [0xFBDE, 0xFBDF, 0, 0]),
    (0x06CC, [0xFBFC, 0xFBFD, 0xFBFE, 0xFBFF]),
    (0x06D0, [0xFBE4, 0xFBE5, 0xFBE6, 0xFBE7]),
    (0x06D2, [0xFBAE, 0xFBAF, 0, 0]),
    (0x06D3, [0xFBB0, 0xFBB1, 0, 0]),
];

/// Mandatory lam-alef ligatures: lam form, alef form, ligature.
const LAM_ALEF_LIGATURES: &[(char, char, char)] = &[
    // Lam in initial form gives the isolated ligature
    ('\u{FEDF}', '\u{FE82}', '\u{FEF5}'),
    ('\u{FEDF}', '\u{FE84}', '\u{FEF7}'),
    ('\u{FEDF}', '\u{FE88}', '\u{FEF9}'),
    ('\u{FEDF}', '\u{FE8E}', '\u{FEFB}'),
    // and in medial form the final one
    ('\u{FEE0}', '\u{FE82}', '\u{FEF6}'),
    ('\u{FEE0}', '\u{FE84}', '\u{FEF8}'),
    ('\u{FEE0}', '\u{FE88}', '\u{FEFA}'),
    ('\u{FEE0}', '\u{FE8E}', '\u{FEFC}'),
];

/// The presentation form of `ch` for `form`, if it has one.
pub fn presentation_form(ch: char, form: JoiningForm) -> Option<char> {
    let code = u16::try_from(u32::from(ch)).ok()?;
    let index = PRESENTATION_FORMS
        .binary_search_by_key(&code, |&(letter, _)| letter)
        .ok()?;
    let forms = PRESENTATION_FORMS[index].1;
    let shaped = match form {
        JoiningForm::Isolated => forms[0],
        JoiningForm::Final => forms[1],
        JoiningForm::Initial => forms[2],
        JoiningForm::Medial => forms[3],
    };
    match shaped {
        0 => None,
        shaped => char::from_u32(u32::from(shaped)),
    }
}

/// The ligature of a shaped lam followed by a shaped alef.
pub fn lam_alef_ligature(lam: char, alef: char) -> Option<char> {
    LAM_ALEF_LIGATURES
        .iter()
        .find(|&&(first, second, _)| first == lam && second == alef)
        .map(|&(_, _, ligature)| ligature)
}

/// The last non-transparent character seen while joining.
struct Joinable {
    index: usize,
    /// `None` for characters removed by X9, which match any level.
    level: Option<Level>,
    shapes: bool,
    following: JoiningProps,
}

fn levels_match(a: Option<Level>, b: Option<Level>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

fn is_rtl(level: Option<Level>) -> bool {
    level.map_or(true, level_is_rtl)
}

/// Compute the joining state of every character.
///
/// On entry `props` holds the sides each character is able to join on, as
/// returned by [joining_props](crate::unicode::joining_props). On return the
/// join bits of shaping characters say which sides actually join. Two
/// characters join when they are adjacent, ignoring transparent characters,
/// both offer the facing sides and their embedding levels match.
/// Transparent characters between two joined characters get both bits so
/// marks can be placed on the connection.
pub fn join_arabic(types: &[BidiType], levels: &[Level], props: &mut [JoiningProps]) {
    let mut saved = Joinable {
        index: 0,
        level: None,
        shapes: false,
        following: JoiningProps::empty(),
    };
    let mut joins = false;

    for i in 0..props.len() {
        let level = if types[i].is_removed_by_x9() {
            None
        } else {
            Some(levels[i])
        };
        let transparent = props[i].is_transparent();
        let mut disjoin = false;

        if joins && !levels_match(saved.level, level) {
            disjoin = true;
            joins = false;
        }

        if !transparent {
            let preceding = JoiningProps::joins_preceding(is_rtl(level));
            if !joins {
                if props[i].shapes() {
                    props[i].remove(preceding);
                }
            } else if !props[i].intersects(preceding) {
                disjoin = true;
            } else {
                for j in saved.index + 1..i {
                    props[j].insert(preceding | saved.following);
                }
            }
        }

        if disjoin && saved.shapes {
            props[saved.index].remove(saved.following);
        }

        if !transparent {
            let following = JoiningProps::joins_following(is_rtl(level));
            saved = Joinable {
                index: i,
                level,
                shapes: props[i].shapes(),
                following,
            };
            joins = props[i].intersects(following);
        }
    }

    if joins && saved.shapes {
        props[saved.index].remove(saved.following);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{bidi_type, joining_props};

    fn join(text: &str, level: Level) -> Vec<JoiningForm> {
        let types: Vec<BidiType> = text.chars().map(bidi_type).collect();
        let levels = vec![level; types.len()];
        let mut props: Vec<JoiningProps> = text.chars().map(joining_props).collect();
        join_arabic(&types, &levels, &mut props);
        props.iter().map(|props| props.form()).collect()
    }

    #[test]
    fn test_presentation_forms_sorted() {
        assert!(PRESENTATION_FORMS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_presentation_form() {
        assert_eq!(
            presentation_form('\u{0628}', JoiningForm::Isolated),
            Some('\u{FE8F}')
        );
        assert_eq!(
            presentation_form('\u{0628}', JoiningForm::Medial),
            Some('\u{FE92}')
        );
        assert_eq!(presentation_form('\u{0627}', JoiningForm::Final), Some('\u{FE8E}'));
        assert_eq!(presentation_form('\u{0627}', JoiningForm::Initial), None);
        assert_eq!(presentation_form('\u{06CC}', JoiningForm::Initial), Some('\u{FBFE}'));
        assert_eq!(presentation_form('a', JoiningForm::Isolated), None);
        assert_eq!(presentation_form('\u{1F600}', JoiningForm::Isolated), None);
    }

    #[test]
    fn test_lam_alef_ligature() {
        assert_eq!(lam_alef_ligature('\u{FEDF}', '\u{FE8E}'), Some('\u{FEFB}'));
        assert_eq!(lam_alef_ligature('\u{FEE0}', '\u{FE82}'), Some('\u{FEF6}'));
        assert_eq!(lam_alef_ligature('\u{0644}', '\u{0627}'), None);
    }

    #[test]
    fn test_three_dual_joining_letters() {
        assert_eq!(
            join("\u{0628}\u{0628}\u{0628}", 1),
            vec![JoiningForm::Initial, JoiningForm::Medial, JoiningForm::Final]
        );
    }

    #[test]
    fn test_right_joining_breaks_chain() {
        // beh alef beh: alef does not join to the left
        assert_eq!(
            join("\u{0628}\u{0627}\u{0628}", 1),
            vec![JoiningForm::Initial, JoiningForm::Final, JoiningForm::Isolated]
        );
    }

    #[test]
    fn test_space_breaks_join() {
        assert_eq!(
            join("\u{0628} \u{0628}", 1),
            vec![JoiningForm::Isolated, JoiningForm::Isolated, JoiningForm::Isolated]
        );
    }

    #[test]
    fn test_transparent_marks_are_skipped() {
        // beh fatha beh
        let forms = join("\u{0628}\u{064E}\u{0628}", 1);
        assert_eq!(forms[0], JoiningForm::Initial);
        assert_eq!(forms[2], JoiningForm::Final);
        // The mark sits on the connection
        assert_eq!(forms[1], JoiningForm::Medial);
    }

    #[test]
    fn test_level_change_breaks_join() {
        let text = "\u{0628}\u{0628}";
        let types: Vec<BidiType> = text.chars().map(bidi_type).collect();
        let mut props: Vec<JoiningProps> = text.chars().map(joining_props).collect();
        join_arabic(&types, &[1, 3], &mut props);
        assert_eq!(props[0].form(), JoiningForm::Isolated);
        assert_eq!(props[1].form(), JoiningForm::Isolated);
    }

    #[test]
    fn test_removed_characters_do_not_break_join() {
        // beh ZWNBSP beh
        let text = "\u{0628}\u{FEFF}\u{0628}";
        let types: Vec<BidiType> = text.chars().map(bidi_type).collect();
        let mut props: Vec<JoiningProps> = text.chars().map(joining_props).collect();
        join_arabic(&types, &[1, 0, 1], &mut props);
        assert_eq!(props[0].form(), JoiningForm::Initial);
        assert_eq!(props[2].form(), JoiningForm::Final);
    }

    #[test]
    fn test_tatweel_keeps_join_bits() {
        let forms = join("\u{0640}", 1);
        assert_eq!(forms, vec![JoiningForm::Medial]);
    }
}
