use std::collections::HashMap;

use unicode_linebreak::{linebreaks, BreakOpportunity};

use crate::units::Pt;

/// How a break unit ends, and where the break came from.
///
/// `Synthetic` breaks are manufactured while cutting an over-wide token into
/// pieces; everything else is a UAX #14 break opportunity found in the
/// input. The packer treats both identically, it only ever asks whether the
/// break is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Break {
    /// A break opportunity found in the input text
    Natural { required: bool },
    /// A break manufactured by the overflow splitter
    Synthetic { required: bool },
}

impl Break {
    /// Whether the line must end at this break regardless of remaining space
    pub fn required(self) -> bool {
        match self {
            Break::Natural { required } | Break::Synthetic { required } => required,
        }
    }
}

/// A contiguous span of text between two line-break opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub brk: Break,
}

/// Lazily segments text into break units per the Unicode line-breaking
/// algorithm (UAX #14). Finite and non-restartable: each unit carries the
/// substring since the previous break opportunity, and the final unit always
/// ends in a mandatory break (LB3).
pub struct Words<'a> {
    text: &'a str,
    breaks: Box<dyn Iterator<Item = (usize, BreakOpportunity)> + 'a>,
    prev: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Words<'a> {
        Words {
            text,
            breaks: Box::new(linebreaks(text)),
            prev: 0,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        let (position, opportunity) = self.breaks.next()?;
        let text = &self.text[self.prev..position];
        self.prev = position;
        Some(Word {
            text,
            brk: Break::Natural {
                required: opportunity == BreakOpportunity::Mandatory,
            },
        })
    }
}

/// Memoizes unit widths within one traversal, keyed by the unit's text.
/// Running text repeats the same tokens constantly and the measurement
/// capability is the expensive part of the whole algorithm.
#[derive(Default)]
pub(crate) struct WidthCache {
    widths: HashMap<String, Pt>,
}

impl WidthCache {
    pub fn width_of(&mut self, text: &str, measure: impl FnOnce(&str) -> Pt) -> Pt {
        if let Some(width) = self.widths.get(text) {
            *width
        } else {
            let width = measure(text);
            self.widths.insert(text.to_string(), width);
            width
        }
    }
}
