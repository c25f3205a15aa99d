//! Paragraph directions and embedding levels.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;

/// An embedding level. Even levels are left-to-right, odd levels right-to-left.
pub type Level = u8;

/// Deepest level reachable through explicit embeddings, overrides and isolates.
pub const MAX_DEPTH: Level = 125;

/// Deepest level any character can end up at after implicit resolution.
pub const MAX_RESOLVED_LEVEL: Level = MAX_DEPTH + 1;

pub fn level_is_rtl(level: Level) -> bool {
    level & 1 == 1
}

/// The least odd level greater than `level`, if it is a valid explicit level.
pub(crate) fn next_rtl_level(level: Level) -> Option<Level> {
    let next = (level + 1) | 1;
    (next <= MAX_DEPTH).then_some(next)
}

/// The least even level greater than `level`, if it is a valid explicit level.
pub(crate) fn next_ltr_level(level: Level) -> Option<Level> {
    let next = (level + 2) & !1;
    (next <= MAX_DEPTH).then_some(next)
}

/// A resolved direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// The paragraph embedding level for this direction.
    pub fn level(self) -> Level {
        match self {
            TextDirection::LeftToRight => 0,
            TextDirection::RightToLeft => 1,
        }
    }
}

/// Requested base direction of a paragraph.
///
/// `Ltr` and `Rtl` force the paragraph direction. The remaining values detect
/// it from the first strong character and only differ in what happens when
/// there is none: `On` and `WeakLtr` fall back to left-to-right, `WeakRtl` to
/// right-to-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BaseDirection {
    Ltr,
    Rtl,
    On,
    WeakLtr,
    WeakRtl,
}

pub const LTR: BaseDirection = BaseDirection::Ltr;
pub const RTL: BaseDirection = BaseDirection::Rtl;
pub const ON: BaseDirection = BaseDirection::On;
pub const WLTR: BaseDirection = BaseDirection::WeakLtr;
pub const WRTL: BaseDirection = BaseDirection::WeakRtl;

impl BaseDirection {
    pub const ALL: [BaseDirection; 5] = [LTR, RTL, ON, WLTR, WRTL];

    /// Stable numeric code of this direction.
    pub const fn code(self) -> i32 {
        match self {
            BaseDirection::Ltr => 0,
            BaseDirection::Rtl => 1,
            BaseDirection::On => 2,
            BaseDirection::WeakLtr => 3,
            BaseDirection::WeakRtl => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BaseDirection::Ltr => "LTR",
            BaseDirection::Rtl => "RTL",
            BaseDirection::On => "ON",
            BaseDirection::WeakLtr => "WLTR",
            BaseDirection::WeakRtl => "WRTL",
        }
    }

    /// Direction used when nothing in the text decides otherwise.
    pub fn is_rtl_default(self) -> bool {
        matches!(self, BaseDirection::Rtl | BaseDirection::WeakRtl)
    }

    /// Whether the direction is taken from the text rather than forced.
    pub fn is_detected(self) -> bool {
        !matches!(self, BaseDirection::Ltr | BaseDirection::Rtl)
    }

    pub fn default_direction(self) -> TextDirection {
        if self.is_rtl_default() {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }
}

impl TryFrom<i32> for BaseDirection {
    type Error = UsageError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        BaseDirection::ALL
            .iter()
            .copied()
            .find(|dir| dir.code() == code)
            .ok_or(UsageError::InvalidDirectionCode(code))
    }
}

impl FromStr for BaseDirection {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseDirection::ALL
            .iter()
            .copied()
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UsageError::InvalidDirectionName(s.to_string()))
    }
}

impl fmt::Display for BaseDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
