#![warn(rust_2018_idioms)]

//! # rlbidi
//!
//! The Unicode Bidirectional Algorithm (UAX #9) for one line of text, with
//! Arabic letter joining, presentation form substitution and mirroring.
//!
//! [log2vis] converts logical text into visual order and optionally returns
//! the index maps between the two orders and the embedding levels.
//! [reorder_map] returns only the visual to logical map of Arabic shaped text.

pub mod arabic;
pub mod context;
pub mod direction;
pub mod error;
/// Removal of bidi formatting characters after reordering.
pub mod marks;
pub mod pipeline;
pub mod reorder;
pub mod resolve;
pub mod shape;
/// Shared test code.
#[cfg(test)]
pub mod tests;
pub mod unicode;
pub mod words;

use lazy_static::lazy_static;

pub use crate::direction::{BaseDirection, Level, TextDirection, LTR, ON, RTL, WLTR, WRTL};
pub use crate::error::{AllocError, BidiError, ReorderError, UsageError};
pub use crate::pipeline::{log2vis, reorder_map, Log2VisOptions, Outputs, Visual};
pub use crate::shape::ShapeFlags;
pub use crate::words::{bidi_word_list, BidiWord};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The revision of UAX #9 whose rules are implemented, including isolates and
/// paired brackets.
pub const ALGORITHM_VERSION: &str = "UAX #9 revision 29 (Unicode 6.3.0 feature level)";

lazy_static! {
    static ref UNICODE_VERSION: String = {
        let (major, minor, micro) = unicode_bidi::UNICODE_VERSION;
        format!("{}.{}.{}", major, minor, micro)
    };
}

/// Version of the Unicode Character Database the bidi types come from.
pub fn unicode_version() -> &'static str {
    UNICODE_VERSION.as_str()
}
