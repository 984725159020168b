use std::ops::RangeInclusive;

use crate::{Labels, Matcher, Outcome};

/// Matches one token within inclusive bounds.
///
/// If negated, every token outside the bounds is matched. An empty input never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeMatcher<T, L> {
    low: T,
    high: T,
    negate: bool,
    labels: Labels<L>,
}

impl<T, L> RangeMatcher<T, L> {
    /// Create a new matcher for the range `low..=high`.
    pub fn new(low: T, high: T, labels: Labels<L>) -> Self {
        Self {
            low,
            high,
            negate: false,
            labels,
        }
    }

    /// Create a new matcher for every token outside of `low..=high`.
    pub fn negated(low: T, high: T, labels: Labels<L>) -> Self {
        Self {
            low,
            high,
            negate: true,
            labels,
        }
    }

    /// Create a new matcher from an inclusive range.
    pub fn from_range(range: RangeInclusive<T>, labels: Labels<L>) -> Self {
        let (low, high) = range.into_inner();
        Self::new(low, high, labels)
    }

    /// Get the lower bound.
    #[inline]
    pub fn low(&self) -> &T {
        &self.low
    }

    /// Get the upper bound.
    #[inline]
    pub fn high(&self) -> &T {
        &self.high
    }

    /// Check if the matcher is negated.
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

impl<T, L> Matcher<T, L> for RangeMatcher<T, L>
where
    T: PartialOrd + std::fmt::Debug,
    L: Clone + std::fmt::Debug,
{
    fn attempt(&self, input: &[T]) -> Outcome<L> {
        let Some(token) = input.first() else {
            return self.labels.failed();
        };
        let outside = *token < self.low || *token > self.high;
        if outside ^ self.negate {
            self.labels.failed()
        } else {
            self.labels.single()
        }
    }

    fn describe(&self) -> String {
        let negation = if self.negate { "!" } else { "" };
        format!("{}[{:?}-{:?}]", negation, self.low, self.high)
    }
}
