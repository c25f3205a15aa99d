//! Visual ordering of a list of words.

use std::ops::Range;

use itertools::Itertools;

use crate::context::try_vec;
use crate::direction::BaseDirection;
use crate::error::BidiError;
use crate::pipeline::{log2vis, Log2VisOptions, Outputs};
use crate::unicode::is_bidi_mark;

/// A word in its visual form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BidiWord {
    pub text: String,
    /// Position of the word in visual order.
    pub visual_index: usize,
}

/// Ranges of the maximal runs of non-whitespace characters.
fn word_spans(text: &[char]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, ch) in text.iter().enumerate() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(begin)) => {
                spans.push(begin..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push(begin..text.len());
    }
    spans
}

/// Reorder `words`, joined by single spaces, as one line and return the
/// visual form of each word in logical order.
///
/// Only `LTR` and `RTL` reorder. Any other direction returns the words as
/// given, each at its own position. A word whose characters are all removed
/// by `clean` is left out of the result.
pub fn bidi_word_list<S: AsRef<str>>(
    words: &[S],
    direction: BaseDirection,
    clean: bool,
) -> Result<Vec<BidiWord>, BidiError> {
    if direction.is_detected() {
        let words = words
            .iter()
            .enumerate()
            .map(|(visual_index, word)| BidiWord {
                text: AsRef::<str>::as_ref(word).to_string(),
                visual_index,
            })
            .collect();
        return Ok(words);
    }

    let raw: Vec<char> = words
        .iter()
        .map(|word| AsRef::<str>::as_ref(word))
        .join(" ")
        .chars()
        .collect();
    // Marks are stripped here rather than by `log2vis` so that the visual to
    // logical map keeps indexing `raw`
    let options = Log2VisOptions::new(direction).outputs(Outputs::V_TO_L);
    let visual = log2vis(&raw, &options)?;
    let v_to_l = visual.positions_v_to_l.unwrap_or_default();
    let (text, v_to_l): (Vec<char>, Vec<usize>) = visual
        .text
        .iter()
        .copied()
        .zip(v_to_l)
        .filter(|&(ch, _)| !(clean && is_bidi_mark(ch)))
        .unzip();

    // Visual word holding each logical character
    let visual_words = word_spans(&text);
    let mut owner = try_vec(raw.len(), None)?;
    for (index, span) in visual_words.iter().enumerate() {
        for &logical in &v_to_l[span.clone()] {
            owner[logical] = Some(index);
        }
    }

    let result = word_spans(&raw)
        .into_iter()
        .filter_map(|span| span.map(|logical| owner[logical]).find_map(|index| index))
        .map(|index| BidiWord {
            text: text[visual_words[index].clone()].iter().collect(),
            visual_index: index,
        })
        .collect();
    Ok(result)
}
