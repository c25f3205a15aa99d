//! Working state of one bidi call.
//!
//! Every per-character array a pipeline needs lives in a [BidiContext] owned by
//! that call and is dropped with it, whichever way the call returns. Buffers
//! are reserved up front with `try_reserve_exact` so running out of memory is
//! reported as an error rather than aborting.

use crate::arabic::join_arabic;
use crate::direction::{BaseDirection, Level};
use crate::error::{AllocError, BidiError};
use crate::reorder::{reorder_line, Line};
use crate::resolve::{resolve_levels, Paragraph};
use crate::shape::{shape, ShapeFlags};
use crate::unicode::{classify, BidiType, JoiningProps};

/// Collect `len` items from `iter` into a vector allocated without aborting.
pub(crate) fn try_collect<T>(
    len: usize,
    iter: impl IntoIterator<Item = T>,
) -> Result<Vec<T>, AllocError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|_| AllocError { requested: len })?;
    vec.extend(iter.into_iter().take(len));
    Ok(vec)
}

/// A vector of `len` copies of `value`.
pub(crate) fn try_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>, AllocError> {
    try_collect(len, std::iter::repeat(value))
}

pub(crate) fn try_copy<T: Clone>(items: &[T]) -> Result<Vec<T>, AllocError> {
    try_collect(items.len(), items.iter().cloned())
}

/// Parallel working arrays for one paragraph.
///
/// `text`, `types` and `joining` are indexed by logical position until
/// [BidiContext::reorder] consumes the context.
#[derive(Debug, Clone)]
pub struct BidiContext {
    /// Working copy of the input, modified in place by shaping.
    pub text: Vec<char>,
    /// Bidi types of the unshaped input.
    pub types: Vec<BidiType>,
    pub joining: Vec<JoiningProps>,
    pub paragraph: Paragraph,
}

impl BidiContext {
    /// Classify `text` and resolve its embedding levels.
    pub fn new(text: &[char], direction: BaseDirection) -> Result<Self, BidiError> {
        let classes = classify(text)?;
        let paragraph = resolve_levels(&classes.types, &classes.brackets, direction)?;
        Ok(BidiContext {
            text: try_copy(text)?,
            types: classes.types,
            joining: classes.joining,
            paragraph,
        })
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn base_level(&self) -> Level {
        self.paragraph.base_level
    }

    pub fn join(&mut self) {
        join_arabic(&self.types, &self.paragraph.levels, &mut self.joining);
    }

    pub fn shape(&mut self, flags: ShapeFlags) {
        shape(
            flags,
            &self.paragraph.levels,
            &mut self.joining,
            &mut self.text,
        );
    }

    /// Reorder the line into visual order.
    ///
    /// Returns the line along with the embedding levels after rule L1, still
    /// in logical order.
    pub fn reorder(self, reorder_nsm: bool) -> Result<(Line, Vec<Level>), BidiError> {
        let BidiContext {
            text,
            types,
            paragraph,
            ..
        } = self;
        let mut levels = paragraph.levels;
        let line = reorder_line(
            &text,
            &types,
            &mut levels,
            paragraph.base_level,
            reorder_nsm,
        )?;
        Ok((line, levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{TextDirection, LTR, RTL};

    #[test]
    fn test_try_collect_truncates() {
        assert_eq!(try_collect(2, 0..10).unwrap(), vec![0, 1]);
        assert_eq!(try_vec(3, 'a').unwrap(), vec!['a'; 3]);
    }

    #[test]
    fn test_try_vec_too_large() {
        assert_eq!(
            try_vec(usize::MAX, 0u64),
            Err(AllocError {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_context_new() {
        let text: Vec<char> = "ab \u{05D0}".chars().collect();
        let ctx = BidiContext::new(&text, LTR).unwrap();
        assert_eq!(ctx.len(), 4);
        assert_eq!(ctx.base_level(), 0);
        assert_eq!(ctx.paragraph.direction, TextDirection::LeftToRight);
        assert_eq!(ctx.paragraph.levels, vec![0, 0, 0, 1]);

        let ctx = BidiContext::new(&[], RTL).unwrap();
        assert!(ctx.is_empty());
        assert_eq!(ctx.base_level(), 1);
    }
}
