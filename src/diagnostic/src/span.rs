//! Spans - selections in source code
//!
//! Each token takes up some space, it's not just a point like a [`Caret`], but
//! a selection with a beginning and end which might span across lines or even
//! be empty (the end of the input is an empty span).

use std::cmp::{max, min};
use std::fmt;

use crate::caret::Caret;

/// A contiguous span between two carets in a source document. The span of
/// "the" is between the `|`s in "|the|", i.e. it's between 0 and _3_, even
/// though `e` is character _2_.
#[derive(Clone, Debug, Default, Copy, Eq, Hash, PartialEq)]
pub struct Span {
    start: Caret,
    end: Caret,
}

impl Span {
    /// Return a new span over the two carets.
    ///
    /// The carets do not need to be sorted.
    pub fn new(l1: Caret, l2: Caret) -> Self {
        let start = min(l1, l2);
        let end = max(l1, l2);
        Self { start, end }
    }

    /// An empty span sitting at `caret`.
    pub fn point(caret: Caret) -> Self {
        Self::new(caret, caret)
    }

    /// Where the span starts.
    pub fn start(&self) -> Caret {
        self.start
    }

    /// Where the span ends.
    pub fn end(&self) -> Caret {
        self.end
    }

    /// Does the span cover no characters at all?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The intersection of two spans, if they overlap, and [`None`] if they do
    /// not.
    pub fn intersection(&self, other: Span) -> Option<Span> {
        let lower_end = min(self.end(), other.end());
        let higher_start = max(self.start(), other.start());

        if lower_end > higher_start {
            Some(Span::new(higher_start, lower_end))
        } else {
            None
        }
    }
}

impl ::std::ops::Add for Span {
    type Output = Self;

    /// Adding spans returns a new span which covers all of each of the spans
    /// given (and any characters in between.)
    fn add(self, other: Self) -> Self {
        Self::new(min(self.start, other.start), max(self.end, other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
