//! Explicit levels and directions (X1-X8).
//!
//! <https://www.unicode.org/reports/tr9/#Explicit_Levels_and_Directions>

use log::debug;
use tinyvec::TinyVec;

use super::first_strong;
use crate::direction::{next_ltr_level, next_rtl_level, Level, TextDirection};
use crate::unicode::BidiType;

/// An entry of the directional status stack.
#[derive(Debug, Copy, Clone, Default)]
struct Status {
    level: Level,
    override_status: Option<TextDirection>,
    isolate: bool,
}

impl Status {
    fn override_type(self) -> Option<BidiType> {
        self.override_status.map(|direction| match direction {
            TextDirection::LeftToRight => BidiType::L,
            TextDirection::RightToLeft => BidiType::R,
        })
    }
}

/// The directional status stack together with its overflow counters.
struct StatusStack {
    root: Status,
    entries: TinyVec<[Status; 16]>,
    overflow_isolates: usize,
    overflow_embeddings: usize,
    valid_isolates: usize,
}

impl StatusStack {
    fn new(base_level: Level) -> Self {
        let root = Status {
            level: base_level,
            override_status: None,
            isolate: false,
        };
        StatusStack {
            root,
            entries: TinyVec::new(),
            overflow_isolates: 0,
            overflow_embeddings: 0,
            valid_isolates: 0,
        }
    }

    fn last(&self) -> Status {
        self.entries.last().copied().unwrap_or(self.root)
    }

    fn next_level(&self, rtl: bool) -> Option<Level> {
        let level = self.last().level;
        if rtl {
            next_rtl_level(level)
        } else {
            next_ltr_level(level)
        }
    }

    /// X2-X5: RLE, LRE, RLO and LRO.
    fn push_embedding(&mut self, rtl: bool, override_status: Option<TextDirection>) {
        match self.next_level(rtl) {
            Some(level) if self.overflow_isolates == 0 && self.overflow_embeddings == 0 => {
                self.entries.push(Status {
                    level,
                    override_status,
                    isolate: false,
                });
            }
            _ => {
                if self.overflow_isolates == 0 {
                    self.overflow_embeddings += 1;
                }
                debug!("embedding overflow at level {}", self.last().level);
            }
        }
    }

    /// X5a-X5c: RLI, LRI and FSI.
    fn push_isolate(&mut self, rtl: bool) {
        match self.next_level(rtl) {
            Some(level) if self.overflow_isolates == 0 && self.overflow_embeddings == 0 => {
                self.valid_isolates += 1;
                self.entries.push(Status {
                    level,
                    override_status: None,
                    isolate: true,
                });
            }
            _ => {
                self.overflow_isolates += 1;
                debug!("isolate overflow at level {}", self.last().level);
            }
        }
    }

    /// X6a: PDI.
    fn pop_isolate(&mut self) {
        if self.overflow_isolates > 0 {
            self.overflow_isolates -= 1;
        } else if self.valid_isolates > 0 {
            self.overflow_embeddings = 0;
            while let Some(status) = self.entries.pop() {
                if status.isolate {
                    break;
                }
            }
            self.valid_isolates -= 1;
        }
    }

    /// X7: PDF.
    fn pop_embedding(&mut self) {
        if self.overflow_isolates > 0 {
            return;
        }
        if self.overflow_embeddings > 0 {
            self.overflow_embeddings -= 1;
        } else if !self.last().isolate {
            // Never pops the root entry
            self.entries.pop();
        }
    }

    /// X8: a paragraph separator terminates everything.
    fn reset(&mut self) {
        self.entries.clear();
        self.overflow_isolates = 0;
        self.overflow_embeddings = 0;
        self.valid_isolates = 0;
    }
}

/// Assign explicit levels and apply directional overrides to `resolved`.
///
/// Levels of characters removed by X9 are left as they are.
pub(super) fn resolve_explicit(
    types: &[BidiType],
    base_level: Level,
    levels: &mut [Level],
    resolved: &mut [BidiType],
) {
    let mut stack = StatusStack::new(base_level);

    for (i, &bidi_type) in types.iter().enumerate() {
        match bidi_type {
            BidiType::RLE => stack.push_embedding(true, None),
            BidiType::LRE => stack.push_embedding(false, None),
            BidiType::RLO => stack.push_embedding(true, Some(TextDirection::RightToLeft)),
            BidiType::LRO => stack.push_embedding(false, Some(TextDirection::LeftToRight)),
            BidiType::PDF => stack.pop_embedding(),
            BidiType::RLI | BidiType::LRI | BidiType::FSI => {
                let last = stack.last();
                levels[i] = last.level;
                if let Some(override_type) = last.override_type() {
                    resolved[i] = override_type;
                }
                let rtl = match bidi_type {
                    BidiType::RLI => true,
                    BidiType::LRI => false,
                    _ => {
                        first_strong(&types[i + 1..], true) == Some(TextDirection::RightToLeft)
                    }
                };
                stack.push_isolate(rtl);
            }
            BidiType::PDI => {
                stack.pop_isolate();
                let last = stack.last();
                levels[i] = last.level;
                if let Some(override_type) = last.override_type() {
                    resolved[i] = override_type;
                }
            }
            BidiType::B => {
                stack.reset();
                levels[i] = base_level;
            }
            BidiType::BN => {}
            _ => {
                let last = stack.last();
                levels[i] = last.level;
                if let Some(override_type) = last.override_type() {
                    resolved[i] = override_type;
                }
            }
        }
    }
}
