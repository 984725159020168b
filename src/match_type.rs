#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Span;

/// A match found while scanning a token buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match<L> {
    /// The label of the accepting state that was reached.
    label: L,
    /// The tokens covered by the match.
    span: Span,
}

impl<L> Match<L> {
    /// Create a new match.
    pub fn new(label: L, span: Span) -> Self {
        Self { label, span }
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the number of matched tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the label of the match.
    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Consume the match and return its label.
    #[inline]
    pub fn into_label(self) -> L {
        self.label
    }
}
