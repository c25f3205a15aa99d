//! Reordering resolved levels into visual order (L1-L3).
//!
//! <https://www.unicode.org/reports/tr9/#Reordering_Resolved_Levels>

use itertools::{Itertools, MinMaxResult};
use log::debug;

use crate::context::{try_collect, try_copy};
use crate::direction::{level_is_rtl, Level, MAX_RESOLVED_LEVEL};
use crate::error::{BidiError, ReorderError};
use crate::unicode::BidiType;

/// A line in visual order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Line {
    pub visual: Vec<char>,
    /// Visual position of each logical character.
    pub l_to_v: Vec<usize>,
    /// Logical position of each visual character.
    pub v_to_l: Vec<usize>,
}

/// Reorder one line of text.
///
/// `types` are the original bidi types of `text` and `levels` the resolved
/// levels. On return `levels` holds the levels after rule L1, in logical
/// order. When `reorder_nsm` is set non-spacing marks in right-to-left runs
/// stay visually after their base character (L3).
pub fn reorder_line(
    text: &[char],
    types: &[BidiType],
    levels: &mut [Level],
    base_level: Level,
    reorder_nsm: bool,
) -> Result<Line, BidiError> {
    if text.len() != types.len() || text.len() != levels.len() {
        return Err(ReorderError::LengthMismatch {
            text: text.len(),
            types: types.len(),
            levels: levels.len(),
        }
        .into());
    }
    if let Some(&level) = levels
        .iter()
        .chain(Some(&base_level))
        .find(|&&level| level > MAX_RESOLVED_LEVEL)
    {
        return Err(ReorderError::LevelOutOfRange(level).into());
    }

    reset_trailing_levels(types, levels, base_level);

    let mut visual = try_copy(text)?;
    let mut v_to_l = try_collect(text.len(), 0..text.len())?;

    if reorder_nsm {
        reorder_marks(types, levels, &mut visual, &mut v_to_l);
    }
    reverse_runs(levels, &mut visual, &mut v_to_l);

    let mut l_to_v = try_collect(v_to_l.len(), std::iter::repeat(0))?;
    for (visual_index, &logical_index) in v_to_l.iter().enumerate() {
        l_to_v[logical_index] = visual_index;
    }

    Ok(Line {
        visual,
        l_to_v,
        v_to_l,
    })
}

/// L1: separators, and whitespace before them or at the end of the line, go
/// back to the paragraph level.
fn reset_trailing_levels(types: &[BidiType], levels: &mut [Level], base_level: Level) {
    let mut trailing = true;
    for (&bidi_type, level) in types.iter().zip(levels.iter_mut()).rev() {
        match bidi_type {
            BidiType::S | BidiType::B => {
                *level = base_level;
                trailing = true;
            }
            _ if bidi_type.is_trailing_whitespace() => {
                if trailing {
                    *level = base_level;
                }
            }
            _ => trailing = false,
        }
    }
}

/// L3: reverse each base character and the marks following it in
/// right-to-left runs, so the reversal by L2 puts them back in order.
fn reorder_marks(
    types: &[BidiType],
    levels: &[Level],
    visual: &mut [char],
    v_to_l: &mut [usize],
) {
    let mut end = types.len();
    while end > 0 {
        let last = end - 1;
        if types[last] != BidiType::NSM || !level_is_rtl(levels[last]) {
            end = last;
            continue;
        }

        let level = levels[last];
        let mut start = last;
        while start > 0
            && levels[start - 1] == level
            && (types[start - 1] == BidiType::NSM || types[start - 1].is_removed_by_x9())
        {
            start -= 1;
        }
        if start > 0 && levels[start - 1] == level {
            start -= 1;
        } else {
            debug!("non-spacing mark at start of level run at {}", start);
        }

        visual[start..end].reverse();
        v_to_l[start..end].reverse();
        end = start;
    }
}

/// L2: from the highest level down to the lowest odd level, reverse every
/// maximal run at or above that level.
fn reverse_runs(levels: &[Level], visual: &mut [char], v_to_l: &mut [usize]) {
    let (lowest, highest) = match levels.iter().copied().minmax() {
        MinMaxResult::NoElements => return,
        MinMaxResult::OneElement(level) => (level, level),
        MinMaxResult::MinMax(lowest, highest) => (lowest, highest),
    };
    let lowest_odd = lowest | 1;

    // Runs at or above a level are unions of runs above it, so their
    // boundaries are the same in logical and partially reversed order
    for level in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < levels.len() {
            if levels[i] < level {
                i += 1;
                continue;
            }
            let start = i;
            while i < levels.len() && levels[i] >= level {
                i += 1;
            }
            visual[start..i].reverse();
            v_to_l[start..i].reverse();
        }
    }
}
