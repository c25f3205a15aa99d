//! Character level shaping: Arabic presentation forms, mandatory ligatures and
//! mirroring.

use bitflags::bitflags;

use crate::arabic::{lam_alef_ligature, presentation_form};
use crate::direction::{level_is_rtl, Level};
use crate::unicode::{mirrored, JoiningProps, ZWNBSP};

bitflags! {
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct ShapeFlags: u8 {
        /// Replace characters at odd levels by their mirror image.
        const MIRRORING           = 1 << 0;
        /// Substitute the contextual presentation form of Arabic letters.
        const ARABIC_PRESENTATION = 1 << 1;
        /// Form mandatory lam-alef ligatures.
        const ARABIC_LIGATURES    = 1 << 2;
    }
}

impl Default for ShapeFlags {
    fn default() -> Self {
        ShapeFlags::all()
    }
}

/// Shape `text` in place.
///
/// `props` must hold the joining state computed by
/// [join_arabic](crate::arabic::join_arabic). The text keeps its length: the
/// first half of a ligature is replaced by U+FEFF ZERO WIDTH NO-BREAK SPACE and
/// marked `LIGATURED`.
pub fn shape(flags: ShapeFlags, levels: &[Level], props: &mut [JoiningProps], text: &mut [char]) {
    if flags.contains(ShapeFlags::ARABIC_PRESENTATION) {
        for (ch, props) in text.iter_mut().zip(props.iter()) {
            if props.shapes() {
                if let Some(shaped) = presentation_form(*ch, props.form()) {
                    *ch = shaped;
                }
            }
        }

        // Ligatures are keyed on presentation forms
        if flags.contains(ShapeFlags::ARABIC_LIGATURES) {
            for i in 1..text.len() {
                if !level_is_rtl(levels[i - 1]) || levels[i - 1] != levels[i] {
                    continue;
                }
                if let Some(ligature) = lam_alef_ligature(text[i - 1], text[i]) {
                    text[i - 1] = ZWNBSP;
                    props[i - 1].insert(JoiningProps::LIGATURED);
                    text[i] = ligature;
                }
            }
        }
    }

    if flags.contains(ShapeFlags::MIRRORING) {
        for (ch, &level) in text.iter_mut().zip(levels) {
            if level_is_rtl(level) {
                if let Some(mirror) = mirrored(*ch) {
                    *ch = mirror;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arabic::join_arabic;
    use crate::unicode::{bidi_type, joining_props, BidiType};

    fn shaped(text: &str, level: Level, flags: ShapeFlags) -> (String, Vec<JoiningProps>) {
        let mut chars: Vec<char> = text.chars().collect();
        let types: Vec<BidiType> = chars.iter().map(|&ch| bidi_type(ch)).collect();
        let levels = vec![level; chars.len()];
        let mut props: Vec<JoiningProps> = chars.iter().map(|&ch| joining_props(ch)).collect();
        join_arabic(&types, &levels, &mut props);
        shape(flags, &levels, &mut props, &mut chars);
        (chars.into_iter().collect(), props)
    }

    #[test]
    fn test_presentation_forms() {
        let (text, _) = shaped("\u{0628}\u{0628}\u{0628}", 1, ShapeFlags::all());
        assert_eq!(text, "\u{FE91}\u{FE92}\u{FE90}");
    }

    #[test]
    fn test_no_presentation_without_flag() {
        let (text, _) = shaped("\u{0628}\u{0628}", 1, ShapeFlags::MIRRORING);
        assert_eq!(text, "\u{0628}\u{0628}");
    }

    #[test]
    fn test_lam_alef() {
        // lam alef on its own gives the isolated ligature
        let (text, props) = shaped("\u{0644}\u{0627}", 1, ShapeFlags::all());
        assert_eq!(text, "\u{FEFF}\u{FEFB}");
        assert!(props[0].contains(JoiningProps::LIGATURED));
        assert!(!props[1].contains(JoiningProps::LIGATURED));

        // after a joining letter the final one
        let (text, _) = shaped("\u{0628}\u{0644}\u{0627}", 1, ShapeFlags::all());
        assert_eq!(text, "\u{FE91}\u{FEFF}\u{FEFC}");
    }

    #[test]
    fn test_lam_alef_needs_ligature_flag() {
        let flags = ShapeFlags::ARABIC_PRESENTATION;
        let (text, _) = shaped("\u{0644}\u{0627}", 1, flags);
        assert_eq!(text, "\u{FEDF}\u{FE8E}");
    }

    #[test]
    fn test_mirroring() {
        let (text, _) = shaped("(a)", 1, ShapeFlags::MIRRORING);
        assert_eq!(text, ")a(");
        let (text, _) = shaped("(a)", 2, ShapeFlags::MIRRORING);
        assert_eq!(text, "(a)");
    }
}
