//! Character classification: bidi types, joining properties, brackets and mirrors.

use bitflags::bitflags;
use unicode_bidi::BidiClass;
use unicode_joining_type::{get_joining_type, JoiningType};

use crate::context::try_collect;
use crate::error::BidiError;

pub mod bracket;
pub mod mirror;

pub use bracket::{bracket, Bracket, BracketKind};
pub use mirror::mirrored;

pub const LRM: char = '\u{200E}';
pub const RLM: char = '\u{200F}';
pub const ALM: char = '\u{061C}';
/// Placeholder left behind when two characters are combined into a ligature.
pub const ZWNBSP: char = '\u{FEFF}';

/// The bidirectional character type of a character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BidiType {
    /// Left-to-right
    L,
    /// Right-to-left
    R,
    /// Arabic letter
    AL,
    /// European number
    EN,
    /// European separator
    ES,
    /// European terminator
    ET,
    /// Arabic number
    AN,
    /// Common separator
    CS,
    /// Non-spacing mark
    NSM,
    /// Boundary neutral
    BN,
    /// Paragraph separator
    B,
    /// Segment separator
    S,
    /// Whitespace
    WS,
    /// Other neutral
    ON,
    LRE,
    LRO,
    RLE,
    RLO,
    PDF,
    LRI,
    RLI,
    FSI,
    PDI,
}

impl BidiType {
    pub fn is_strong(self) -> bool {
        matches!(self, BidiType::L | BidiType::R | BidiType::AL)
    }

    /// R or AL.
    pub fn is_rtl(self) -> bool {
        matches!(self, BidiType::R | BidiType::AL)
    }

    pub fn is_number(self) -> bool {
        matches!(self, BidiType::EN | BidiType::AN)
    }

    /// Embedding and override controls, including PDF.
    pub fn is_explicit_embedding(self) -> bool {
        matches!(
            self,
            BidiType::LRE | BidiType::LRO | BidiType::RLE | BidiType::RLO | BidiType::PDF
        )
    }

    pub fn is_isolate_initiator(self) -> bool {
        matches!(self, BidiType::LRI | BidiType::RLI | BidiType::FSI)
    }

    pub fn is_isolate_control(self) -> bool {
        self.is_isolate_initiator() || self == BidiType::PDI
    }

    /// Characters that rule X9 takes out of implicit processing.
    pub fn is_removed_by_x9(self) -> bool {
        self.is_explicit_embedding() || self == BidiType::BN
    }

    /// Every directional formatting character plus BN.
    pub fn is_explicit_or_bn(self) -> bool {
        self.is_removed_by_x9() || self.is_isolate_control()
    }

    /// Neutrals and isolate formatting characters (NI in UAX #9).
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(
            self,
            BidiType::B | BidiType::S | BidiType::WS | BidiType::ON
        ) || self.is_isolate_control()
    }

    /// Characters whose level is reset to the paragraph level by rule L1 when
    /// they precede a separator or the end of the line.
    pub(crate) fn is_trailing_whitespace(self) -> bool {
        self == BidiType::WS || self.is_isolate_control() || self.is_removed_by_x9()
    }
}

impl From<BidiClass> for BidiType {
    fn from(class: BidiClass) -> Self {
        match class {
            BidiClass::AL => BidiType::AL,
            BidiClass::AN => BidiType::AN,
            BidiClass::B => BidiType::B,
            BidiClass::BN => BidiType::BN,
            BidiClass::CS => BidiType::CS,
            BidiClass::EN => BidiType::EN,
            BidiClass::ES => BidiType::ES,
            BidiClass::ET => BidiType::ET,
            BidiClass::FSI => BidiType::FSI,
            BidiClass::L => BidiType::L,
            BidiClass::LRE => BidiType::LRE,
            BidiClass::LRI => BidiType::LRI,
            BidiClass::LRO => BidiType::LRO,
            BidiClass::NSM => BidiType::NSM,
            BidiClass::ON => BidiType::ON,
            BidiClass::PDF => BidiType::PDF,
            BidiClass::PDI => BidiType::PDI,
            BidiClass::R => BidiType::R,
            BidiClass::RLE => BidiType::RLE,
            BidiClass::RLI => BidiType::RLI,
            BidiClass::RLO => BidiType::RLO,
            BidiClass::S => BidiType::S,
            BidiClass::WS => BidiType::WS,
        }
    }
}

/// Look up the bidi type of a character. Unassigned code points get the
/// default class the Unicode Character Database gives their block.
pub fn bidi_type(ch: char) -> BidiType {
    BidiType::from(unicode_bidi::bidi_class(ch))
}

/// Directional marks that carry no glyph of their own.
pub fn is_bidi_mark(ch: char) -> bool {
    matches!(ch, LRM | RLM | ALM) || bidi_type(ch).is_explicit_or_bn()
}

bitflags! {
    /// Arabic joining state of a character.
    ///
    /// `JOINS_RIGHT` and `JOINS_LEFT` start out as the sides a character is able
    /// to join on and are narrowed by joining to the sides it actually joins.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
    pub struct JoiningProps: u8 {
        const JOINS_RIGHT = 1 << 0;
        const JOINS_LEFT  = 1 << 1;
        /// Has contextual forms, so the join bits may be cleared.
        const SHAPES      = 1 << 2;
        const TRANSPARENT = 1 << 3;
        /// Replaced by a filler as the first half of a ligature.
        const LIGATURED   = 1 << 4;
    }
}

impl JoiningProps {
    /// The side facing the logically preceding character in a run of the given
    /// direction.
    pub(crate) fn joins_preceding(rtl: bool) -> JoiningProps {
        if rtl {
            JoiningProps::JOINS_RIGHT
        } else {
            JoiningProps::JOINS_LEFT
        }
    }

    /// The side facing the logically following character.
    pub(crate) fn joins_following(rtl: bool) -> JoiningProps {
        if rtl {
            JoiningProps::JOINS_LEFT
        } else {
            JoiningProps::JOINS_RIGHT
        }
    }

    pub fn is_transparent(self) -> bool {
        self.contains(JoiningProps::TRANSPARENT)
    }

    pub fn shapes(self) -> bool {
        self.contains(JoiningProps::SHAPES)
    }

    /// The contextual form selected by the join bits.
    pub fn form(self) -> JoiningForm {
        let right = self.contains(JoiningProps::JOINS_RIGHT);
        let left = self.contains(JoiningProps::JOINS_LEFT);
        match (right, left) {
            (false, false) => JoiningForm::Isolated,
            (true, false) => JoiningForm::Final,
            (false, true) => JoiningForm::Initial,
            (true, true) => JoiningForm::Medial,
        }
    }
}

impl From<JoiningType> for JoiningProps {
    fn from(joining_type: JoiningType) -> Self {
        match joining_type {
            JoiningType::NonJoining => JoiningProps::empty(),
            JoiningType::RightJoining => JoiningProps::JOINS_RIGHT | JoiningProps::SHAPES,
            JoiningType::LeftJoining => JoiningProps::JOINS_LEFT | JoiningProps::SHAPES,
            JoiningType::DualJoining => {
                JoiningProps::JOINS_RIGHT | JoiningProps::JOINS_LEFT | JoiningProps::SHAPES
            }
            // Joins on both sides but never changes shape itself, eg. tatweel and ZWJ
            JoiningType::JoinCausing => JoiningProps::JOINS_RIGHT | JoiningProps::JOINS_LEFT,
            JoiningType::Transparent => JoiningProps::TRANSPARENT | JoiningProps::SHAPES,
            _ => JoiningProps::empty(),
        }
    }
}

pub fn joining_props(ch: char) -> JoiningProps {
    JoiningProps::from(get_joining_type(ch))
}

/// Contextual form of a joining character.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum JoiningForm {
    Isolated,
    Final,
    Initial,
    Medial,
}

/// Per-character properties of a buffer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Classification {
    pub types: Vec<BidiType>,
    pub joining: Vec<JoiningProps>,
    pub brackets: Vec<Option<Bracket>>,
}

/// Classify every character of `text`.
pub fn classify(text: &[char]) -> Result<Classification, BidiError> {
    Ok(Classification {
        types: try_collect(text.len(), text.iter().map(|&ch| bidi_type(ch)))?,
        joining: try_collect(text.len(), text.iter().map(|&ch| joining_props(ch)))?,
        brackets: try_collect(text.len(), text.iter().map(|&ch| bracket(ch)))?,
    })
}
