//! Paragraph direction and embedding level resolution.
//!
//! <https://www.unicode.org/reports/tr9/#Resolving_Embedding_Levels>

mod explicit;
mod implicit;
mod sequence;

use log::debug;

use crate::context::{try_copy, try_vec};
use crate::direction::{BaseDirection, Level, TextDirection};
use crate::error::BidiError;
use crate::unicode::{BidiType, Bracket};

/// A paragraph with resolved embedding levels.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Paragraph {
    pub direction: TextDirection,
    pub base_level: Level,
    /// One level per character. Characters removed by rule X9 take the level of
    /// the character before them.
    pub levels: Vec<Level>,
    /// Bidi types after weak and neutral resolution. Characters removed by rule
    /// X9 keep their original type.
    pub types: Vec<BidiType>,
}

/// Find the direction of the first strong character (P2).
///
/// Characters between an isolate initiator and its matching PDI are skipped.
/// When `in_isolate` is set the scan stops at a PDI closing the isolate being
/// examined, which is how an FSI picks its direction.
pub fn first_strong(types: &[BidiType], in_isolate: bool) -> Option<TextDirection> {
    let mut depth = 0usize;
    for &bidi_type in types {
        match bidi_type {
            _ if depth == 0 && bidi_type.is_strong() => {
                return Some(if bidi_type.is_rtl() {
                    TextDirection::RightToLeft
                } else {
                    TextDirection::LeftToRight
                });
            }
            BidiType::LRI | BidiType::RLI | BidiType::FSI => depth += 1,
            BidiType::PDI if depth > 0 => depth -= 1,
            BidiType::PDI if in_isolate => return None,
            BidiType::B => return None,
            _ => {}
        }
    }
    None
}

/// Determine the paragraph direction for `types` (P2, P3).
pub fn paragraph_direction(types: &[BidiType], direction: BaseDirection) -> TextDirection {
    match direction {
        BaseDirection::Ltr => TextDirection::LeftToRight,
        BaseDirection::Rtl => TextDirection::RightToLeft,
        BaseDirection::On | BaseDirection::WeakLtr | BaseDirection::WeakRtl => {
            first_strong(types, false).unwrap_or_else(|| direction.default_direction())
        }
    }
}

/// Resolve the embedding level of every character in one paragraph.
///
/// `types` and `brackets` are the per-character classification of the text.
/// Malformed explicit formatting never fails; the only error is running out
/// of memory.
pub fn resolve_levels(
    types: &[BidiType],
    brackets: &[Option<Bracket>],
    direction: BaseDirection,
) -> Result<Paragraph, BidiError> {
    let paragraph_direction = paragraph_direction(types, direction);
    let base_level = paragraph_direction.level();
    debug!(
        "paragraph direction {:?} (requested {})",
        paragraph_direction, direction
    );

    let mut levels = try_vec(types.len(), base_level)?;
    let mut resolved = try_copy(types)?;
    explicit::resolve_explicit(types, base_level, &mut levels, &mut resolved);

    let runs = sequence::level_runs(types, &levels);
    let sequences = sequence::isolating_run_sequences(types, &levels, base_level, runs)?;
    let mut indices = try_vec(types.len(), 0usize)?;
    for sequence in &sequences {
        indices.clear();
        indices.extend(sequence.indices(types));
        implicit::resolve_weak(&indices, sequence, &mut resolved);
        implicit::resolve_brackets(&indices, sequence, types, brackets, &mut resolved);
        implicit::resolve_neutral(&indices, sequence, &mut resolved);
        implicit::resolve_implicit(&indices, &resolved, &mut levels);
    }

    // X9 removed characters sit at the level of whatever precedes them
    let mut previous = base_level;
    for (level, bidi_type) in levels.iter_mut().zip(types) {
        if bidi_type.is_removed_by_x9() {
            *level = previous;
        }
        previous = *level;
    }

    Ok(Paragraph {
        direction: paragraph_direction,
        base_level,
        levels,
        types: resolved,
    })
}
