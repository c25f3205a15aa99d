//! Weak types, paired brackets, neutral types and implicit levels.
//!
//! Every function here works on one isolating run sequence, given as the
//! logical indices of its characters with X9 removed characters left out.

use tinyvec::ArrayVec;

use super::sequence::IsolatingRunSequence;
use crate::direction::{level_is_rtl, Level};
use crate::unicode::{BidiType, Bracket};

use BidiType::*;

/// Depth of the bracket pairing stack (BD16).
const MAX_BRACKET_DEPTH: usize = 63;

/// Direction a resolved type counts as for N0-N2. Numbers count as R.
fn strong_direction(bidi_type: BidiType) -> Option<BidiType> {
    match bidi_type {
        L => Some(L),
        R | AL | EN | AN => Some(R),
        _ => None,
    }
}

/// W1-W7
pub(super) fn resolve_weak(
    indices: &[usize],
    sequence: &IsolatingRunSequence,
    types: &mut [BidiType],
) {
    let len = indices.len();

    // W1
    let mut prev = sequence.sos;
    for &i in indices {
        if types[i] == NSM {
            types[i] = if prev.is_isolate_control() { ON } else { prev };
        }
        prev = types[i];
    }

    // W2, W3
    let mut last_strong = sequence.sos;
    for &i in indices {
        match types[i] {
            L | R => last_strong = types[i],
            AL => {
                last_strong = AL;
                types[i] = R;
            }
            EN if last_strong == AL => types[i] = AN,
            _ => {}
        }
    }

    // W4
    for k in 1..len.saturating_sub(1) {
        let prev = types[indices[k - 1]];
        let next = types[indices[k + 1]];
        match types[indices[k]] {
            ES if prev == EN && next == EN => types[indices[k]] = EN,
            CS if prev == next && prev.is_number() => types[indices[k]] = prev,
            _ => {}
        }
    }

    // W5
    let mut k = 0;
    while k < len {
        if types[indices[k]] != ET {
            k += 1;
            continue;
        }
        let start = k;
        while k < len && types[indices[k]] == ET {
            k += 1;
        }
        let after_number = start > 0 && types[indices[start - 1]] == EN;
        let before_number = k < len && types[indices[k]] == EN;
        if after_number || before_number {
            for &i in &indices[start..k] {
                types[i] = EN;
            }
        }
    }

    // W6, W7
    let mut last_strong = sequence.sos;
    for &i in indices {
        match types[i] {
            ES | ET | CS => types[i] = ON,
            L | R => last_strong = types[i],
            EN if last_strong == L => types[i] = L,
            _ => {}
        }
    }
}

/// Locate bracket pairs (BD16), as positions into `indices` sorted by the
/// position of the opening bracket.
fn bracket_pairs(
    indices: &[usize],
    types: &[BidiType],
    brackets: &[Option<Bracket>],
) -> Vec<(usize, usize)> {
    let mut stack: ArrayVec<[(char, usize); MAX_BRACKET_DEPTH]> = ArrayVec::new();
    let mut pairs = Vec::new();

    for (pos, &i) in indices.iter().enumerate() {
        // Brackets only pair while they are still neutral
        if types[i] != ON {
            continue;
        }
        let bracket = match brackets[i] {
            Some(bracket) => bracket,
            None => continue,
        };
        if bracket.is_open() {
            if stack.len() == MAX_BRACKET_DEPTH {
                break;
            }
            stack.push((bracket.pair, pos));
        } else if let Some(depth) = stack.iter().rposition(|&(pair, _)| pair == bracket.pair) {
            pairs.push((stack[depth].1, pos));
            stack.truncate(depth);
        }
    }

    pairs.sort_unstable();
    pairs
}

/// N0
pub(super) fn resolve_brackets(
    indices: &[usize],
    sequence: &IsolatingRunSequence,
    original: &[BidiType],
    brackets: &[Option<Bracket>],
    types: &mut [BidiType],
) {
    let embedding = sequence.embedding_type();
    let opposite = if embedding == L { R } else { L };

    for (open, close) in bracket_pairs(indices, types, brackets) {
        let mut found_embedding = false;
        let mut found_opposite = false;
        for &i in &indices[open + 1..close] {
            match strong_direction(types[i]) {
                Some(direction) if direction == embedding => {
                    found_embedding = true;
                    break;
                }
                Some(_) => found_opposite = true,
                None => {}
            }
        }

        let direction = if found_embedding {
            embedding
        } else if found_opposite {
            let before = indices[..open]
                .iter()
                .rev()
                .find_map(|&i| strong_direction(types[i]))
                .unwrap_or(sequence.sos);
            if before == opposite {
                opposite
            } else {
                embedding
            }
        } else {
            continue;
        };

        for pos in [open, close] {
            types[indices[pos]] = direction;
            // Marks that followed the bracket before W1 follow it here too
            for &i in &indices[pos + 1..] {
                if original[i] != NSM {
                    break;
                }
                types[i] = direction;
            }
        }
    }
}

/// N1, N2
pub(super) fn resolve_neutral(
    indices: &[usize],
    sequence: &IsolatingRunSequence,
    types: &mut [BidiType],
) {
    let embedding = sequence.embedding_type();
    let len = indices.len();
    let mut k = 0;
    while k < len {
        if !types[indices[k]].is_neutral_or_isolate() {
            k += 1;
            continue;
        }
        let start = k;
        while k < len && types[indices[k]].is_neutral_or_isolate() {
            k += 1;
        }
        let before = match start {
            0 => sequence.sos,
            _ => strong_direction(types[indices[start - 1]]).unwrap_or(embedding),
        };
        let after = if k == len {
            sequence.eos
        } else {
            strong_direction(types[indices[k]]).unwrap_or(embedding)
        };
        let direction = if before == after { before } else { embedding };
        for &i in &indices[start..k] {
            types[i] = direction;
        }
    }
}

/// I1, I2
pub(super) fn resolve_implicit(indices: &[usize], types: &[BidiType], levels: &mut [Level]) {
    for &i in indices {
        let raise = match (level_is_rtl(levels[i]), types[i]) {
            (false, R) => 1,
            (false, AN) | (false, EN) => 2,
            (true, L) | (true, EN) | (true, AN) => 1,
            _ => 0,
        };
        levels[i] += raise;
    }
}
