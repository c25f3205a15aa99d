//! Bidi_Paired_Bracket and Bidi_Paired_Bracket_Type.
//!
//! Paired brackets are exactly the opening and closing punctuation characters
//! that have a mirroring glyph, so they are derived from the general category
//! and the mirroring table rather than stored separately.

use unicode_general_category::{get_general_category, GeneralCategory};

use super::mirror::mirrored;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BracketKind {
    Open,
    Close,
}

/// A paired bracket.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Bracket {
    /// The opening bracket of the pair, identifying it.
    pub pair: char,
    pub kind: BracketKind,
}

impl Bracket {
    pub fn is_open(self) -> bool {
        self.kind == BracketKind::Open
    }
}

/// Angle brackets in Miscellaneous Technical are canonically equivalent to the
/// CJK ones and must pair with them.
fn canonical(ch: char) -> char {
    match ch {
        '\u{2329}' => '\u{3008}',
        '\u{232A}' => '\u{3009}',
        _ => ch,
    }
}

pub fn bracket(ch: char) -> Option<Bracket> {
    let kind = match get_general_category(ch) {
        GeneralCategory::OpenPunctuation => BracketKind::Open,
        GeneralCategory::ClosePunctuation => BracketKind::Close,
        _ => return None,
    };
    let mirror = mirrored(ch)?;
    let pair = match kind {
        BracketKind::Open => canonical(ch),
        BracketKind::Close => canonical(mirror),
    };
    Some(Bracket { pair, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(open: char, close: char) -> bool {
        match (bracket(open), bracket(close)) {
            (Some(open), Some(close)) => open.is_open() && !close.is_open() && open.pair == close.pair,
            _ => false,
        }
    }

    #[test]
    fn test_ascii_brackets() {
        let open = bracket('(').unwrap();
        let close = bracket(')').unwrap();
        assert!(open.is_open());
        assert!(!close.is_open());
        assert_eq!(close.pair, '(');
        assert!(pairs('(', ')'));
        assert!(!pairs(')', '('));
        assert!(!pairs('(', ']'));
    }

    #[test]
    fn test_not_brackets() {
        // Mirrored, but not punctuation
        assert_eq!(bracket('<'), None);
        assert_eq!(bracket('\u{00AB}'), None);
        assert_eq!(bracket('a'), None);
    }

    #[test]
    fn test_canonical_equivalents() {
        assert!(pairs('\u{2329}', '\u{3009}'));
        assert!(pairs('\u{3008}', '\u{232A}'));
        assert_eq!(bracket('\u{232A}').map(|close| close.pair), Some('\u{3008}'));
    }

    #[test]
    fn test_reversed_tick_brackets() {
        // U+298E is a closing bracket paired with U+298F
        assert!(pairs('\u{298F}', '\u{298E}'));
    }
}
