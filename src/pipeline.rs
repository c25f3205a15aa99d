//! Logical to visual conversion of a line of text.

use std::fmt;

use bitflags::bitflags;

use crate::context::BidiContext;
use crate::direction::{BaseDirection, Level, TextDirection};
use crate::error::BidiError;
use crate::marks::remove_marks;
use crate::shape::ShapeFlags;

bitflags! {
    /// Optional arrays returned by [log2vis].
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
    pub struct Outputs: u8 {
        const L_TO_V = 1 << 0;
        const V_TO_L = 1 << 1;
        const LEVELS = 1 << 2;
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Log2VisOptions {
    /// Defaults to right-to-left.
    pub base_direction: BaseDirection,
    /// Strip bidi formatting characters and marks from the result.
    pub clean: bool,
    /// Keep non-spacing marks after their base in right-to-left runs.
    pub reorder_nsm: bool,
    pub shaping: ShapeFlags,
    pub outputs: Outputs,
}

impl Default for Log2VisOptions {
    fn default() -> Self {
        Log2VisOptions {
            base_direction: BaseDirection::Rtl,
            clean: false,
            reorder_nsm: true,
            shaping: ShapeFlags::all(),
            outputs: Outputs::empty(),
        }
    }
}

impl Log2VisOptions {
    pub fn new(base_direction: BaseDirection) -> Self {
        Log2VisOptions {
            base_direction,
            ..Log2VisOptions::default()
        }
    }

    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn reorder_nsm(mut self, reorder_nsm: bool) -> Self {
        self.reorder_nsm = reorder_nsm;
        self
    }

    pub fn shaping(mut self, shaping: ShapeFlags) -> Self {
        self.shaping = shaping;
        self
    }

    pub fn outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }
}

/// Text in visual order. Each requested array has one entry per character of
/// `text`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Visual {
    pub text: Vec<char>,
    /// Resolved paragraph direction.
    pub direction: TextDirection,
    pub positions_l_to_v: Option<Vec<usize>>,
    pub positions_v_to_l: Option<Vec<usize>>,
    /// Embedding levels in logical order.
    pub embedding_levels: Option<Vec<Level>>,
}

impl fmt::Display for Visual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for &ch in &self.text {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

/// Convert one line of logical text to visual order.
pub fn log2vis(text: &[char], options: &Log2VisOptions) -> Result<Visual, BidiError> {
    let mut context = BidiContext::new(text, options.base_direction)?;
    if options
        .shaping
        .intersects(ShapeFlags::ARABIC_PRESENTATION | ShapeFlags::ARABIC_LIGATURES)
    {
        context.join();
    }
    context.shape(options.shaping);

    let direction = context.paragraph.direction;
    let (mut line, mut levels) = context.reorder(options.reorder_nsm)?;
    if options.clean {
        remove_marks(
            &mut line.visual,
            &mut line.l_to_v,
            &mut line.v_to_l,
            &mut levels,
        );
    }

    let outputs = options.outputs;
    Ok(Visual {
        text: line.visual,
        direction,
        positions_l_to_v: outputs.contains(Outputs::L_TO_V).then_some(line.l_to_v),
        positions_v_to_l: outputs.contains(Outputs::V_TO_L).then_some(line.v_to_l),
        embedding_levels: outputs.contains(Outputs::LEVELS).then_some(levels),
    })
}

/// The visual to logical map of `text` after Arabic shaping.
///
/// The direction is taken from the text, falling back to left-to-right.
/// Non-spacing marks are reversed along with their run.
pub fn reorder_map(text: &[char]) -> Result<Vec<usize>, BidiError> {
    let mut context = BidiContext::new(text, BaseDirection::On)?;
    context.join();
    context.shape(ShapeFlags::all());
    let (line, _) = context.reorder(false)?;
    Ok(line.v_to_l)
}
