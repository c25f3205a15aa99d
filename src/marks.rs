//! Removing bidi formatting characters from reordered text.

use crate::direction::Level;
use crate::unicode::is_bidi_mark;

/// Remove explicit formatting characters, boundary neutrals and the LRM, RLM
/// and ALM marks from `visual`.
///
/// `l_to_v` and `v_to_l` are renumbered so they remain inverse permutations
/// over the remaining characters, and `levels`, which is in logical order,
/// loses the entries of the removed characters. Returns the new length.
pub fn remove_marks(
    visual: &mut Vec<char>,
    l_to_v: &mut Vec<usize>,
    v_to_l: &mut Vec<usize>,
    levels: &mut Vec<Level>,
) -> usize {
    const REMOVED: usize = usize::MAX;

    // Turn `l_to_v` into the new logical index of every old one
    let mut kept = 0;
    for logical in 0..l_to_v.len() {
        if is_bidi_mark(visual[l_to_v[logical]]) {
            l_to_v[logical] = REMOVED;
        } else {
            l_to_v[logical] = kept;
            if let Some(level) = levels.get(logical).copied() {
                levels[kept] = level;
            }
            kept += 1;
        }
    }
    levels.truncate(kept);

    let mut len = 0;
    for index in 0..visual.len() {
        let logical = l_to_v[v_to_l[index]];
        if logical != REMOVED {
            visual[len] = visual[index];
            v_to_l[len] = logical;
            len += 1;
        }
    }
    visual.truncate(len);
    v_to_l.truncate(len);

    l_to_v.truncate(len);
    for (index, &logical) in v_to_l.iter().enumerate() {
        l_to_v[logical] = index;
    }
    len
}
