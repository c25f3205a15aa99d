//! Error types

use std::fmt;

use crate::direction::Level;

/// Error returned from the bidi pipelines
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum BidiError {
    Usage(UsageError),
    Allocation(AllocError),
    Reorder(ReorderError),
}

impl From<UsageError> for BidiError {
    fn from(error: UsageError) -> Self {
        BidiError::Usage(error)
    }
}

impl From<AllocError> for BidiError {
    fn from(error: AllocError) -> Self {
        BidiError::Allocation(error)
    }
}

impl From<ReorderError> for BidiError {
    fn from(error: ReorderError) -> Self {
        BidiError::Reorder(error)
    }
}

impl fmt::Display for BidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidiError::Usage(err) => write!(f, "usage: {}", err),
            BidiError::Allocation(err) => write!(f, "allocation: {}", err),
            BidiError::Reorder(err) => write!(f, "reorder: {}", err),
        }
    }
}

impl std::error::Error for BidiError {}

/// Errors caused by invalid arguments, reported before any work is done
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum UsageError {
    InvalidDirectionCode(i32),
    InvalidDirectionName(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::InvalidDirectionCode(code) => {
                write!(f, "invalid base direction {}: use RTL, LTR, ON, WLTR or WRTL", code)
            }
            UsageError::InvalidDirectionName(name) => {
                write!(f, "invalid base direction '{}': use RTL, LTR, ON, WLTR or WRTL", name)
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// A working buffer could not be allocated
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AllocError {
    /// Number of elements that were requested
    pub requested: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to allocate buffer of {} elements", self.requested)
    }
}

impl std::error::Error for AllocError {}

/// Errors raised when the inputs to line reordering are inconsistent
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ReorderError {
    LengthMismatch {
        text: usize,
        types: usize,
        levels: usize,
    },
    LevelOutOfRange(Level),
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderError::LengthMismatch {
                text,
                types,
                levels,
            } => write!(
                f,
                "mismatched lengths: {} chars, {} types, {} levels",
                text, types, levels
            ),
            ReorderError::LevelOutOfRange(level) => {
                write!(f, "embedding level {} out of range", level)
            }
        }
    }
}

impl std::error::Error for ReorderError {}
