//! Level runs and isolating run sequences (BD7, BD13, X9, X10).

use std::cmp::max;
use std::ops::Range;

use crate::context::try_vec;
use crate::direction::{level_is_rtl, Level};
use crate::error::AllocError;
use crate::unicode::BidiType;

/// A maximal range of characters at one level, ignoring characters removed by
/// X9. Always starts with a character that is not removed.
pub(super) type LevelRun = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct IsolatingRunSequence {
    pub runs: Vec<LevelRun>,
    pub level: Level,
    /// Start-of-sequence type, L or R.
    pub sos: BidiType,
    /// End-of-sequence type, L or R.
    pub eos: BidiType,
}

impl IsolatingRunSequence {
    /// Indices of the characters in the sequence that X9 has not removed.
    pub fn indices<'a>(&'a self, types: &'a [BidiType]) -> impl Iterator<Item = usize> + 'a {
        self.runs
            .iter()
            .flat_map(|run| run.clone())
            .filter(move |&i| !types[i].is_removed_by_x9())
    }

    /// The strong type matching the embedding direction of the sequence.
    pub fn embedding_type(&self) -> BidiType {
        type_for_level(self.level)
    }
}

fn type_for_level(level: Level) -> BidiType {
    if level_is_rtl(level) {
        BidiType::R
    } else {
        BidiType::L
    }
}

/// Split the paragraph into level runs (BD7).
pub(super) fn level_runs(types: &[BidiType], levels: &[Level]) -> Vec<LevelRun> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, Level)> = None;
    for (i, (&bidi_type, &level)) in types.iter().zip(levels).enumerate() {
        if bidi_type.is_removed_by_x9() {
            continue;
        }
        match current {
            Some((_, run_level)) if run_level == level => {}
            Some((start, _)) => {
                runs.push(start..i);
                current = Some((i, level));
            }
            None => current = Some((i, level)),
        }
    }
    if let Some((start, _)) = current {
        runs.push(start..types.len());
    }
    runs
}

/// For every isolate initiator, the position of its matching PDI (BD9).
fn matching_pdis(types: &[BidiType]) -> Result<Vec<Option<usize>>, AllocError> {
    let mut matches = try_vec(types.len(), None)?;
    let mut open = Vec::new();
    for (i, &bidi_type) in types.iter().enumerate() {
        match bidi_type {
            BidiType::LRI | BidiType::RLI | BidiType::FSI => open.push(i),
            BidiType::PDI => {
                if let Some(initiator) = open.pop() {
                    matches[initiator] = Some(i);
                }
            }
            BidiType::B => open.clear(),
            _ => {}
        }
    }
    Ok(matches)
}

/// Group level runs into isolating run sequences (X10).
///
/// A run ending in an isolate initiator continues with the run that starts
/// at the matching PDI.
pub(super) fn isolating_run_sequences(
    types: &[BidiType],
    levels: &[Level],
    base_level: Level,
    runs: Vec<LevelRun>,
) -> Result<Vec<IsolatingRunSequence>, AllocError> {
    let matches = matching_pdis(types)?;
    let last_kept = |run: &LevelRun| {
        run.clone()
            .rev()
            .find(|&i| !types[i].is_removed_by_x9())
            .unwrap_or(run.start)
    };

    let mut grouped: Vec<Vec<LevelRun>> = Vec::new();
    // (matching PDI, sequence waiting for it)
    let mut pending: Vec<(usize, usize)> = Vec::new();
    for run in runs {
        let end = last_kept(&run);
        let waiting = pending.iter().position(|&(pdi, _)| pdi == run.start);
        let seq = match waiting {
            Some(pos) => {
                let (_, seq) = pending.swap_remove(pos);
                grouped[seq].push(run);
                seq
            }
            None => {
                grouped.push(vec![run]);
                grouped.len() - 1
            }
        };
        if let Some(pdi) = matches[end] {
            pending.push((pdi, seq));
        }
    }

    let level_before = |index: usize| {
        types[..index]
            .iter()
            .rposition(|t| !t.is_removed_by_x9())
            .map_or(base_level, |i| levels[i])
    };
    let level_after = |index: usize| {
        types[index + 1..]
            .iter()
            .position(|t| !t.is_removed_by_x9())
            .map_or(base_level, |i| levels[index + 1 + i])
    };

    let sequences = grouped
        .into_iter()
        .filter_map(|runs| {
            let first = runs.first()?.start;
            let last = last_kept(runs.last()?);
            let level = levels[first];
            let next_level = if types[last].is_isolate_initiator() {
                base_level
            } else {
                level_after(last)
            };
            Some(IsolatingRunSequence {
                sos: type_for_level(max(level, level_before(first))),
                eos: type_for_level(max(level, next_level)),
                level,
                runs,
            })
        })
        .collect();
    Ok(sequences)
}
