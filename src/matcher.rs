//! The matcher capability shared by leaf matchers and state machines.
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a match attempt.
///
/// The number of consumed tokens is the only authoritative success signal. A value of zero means
/// the attempt failed, regardless of the label. The label reports which accepting path was taken
/// on success and carries the fail label otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome<L> {
    /// The label reported by the matcher.
    pub label: L,
    /// The number of tokens consumed from the start of the input.
    pub consumed: usize,
}

impl<L> Outcome<L> {
    /// Create a new outcome.
    #[inline]
    pub fn new(label: L, consumed: usize) -> Self {
        Self { label, consumed }
    }

    /// Create a failed outcome with the given fail label.
    #[inline]
    pub fn fail(label: L) -> Self {
        Self { label, consumed: 0 }
    }

    /// Returns true if at least one token was consumed.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.consumed > 0
    }
}

impl<L> From<(L, usize)> for Outcome<L> {
    fn from((label, consumed): (L, usize)) -> Self {
        Outcome::new(label, consumed)
    }
}

impl<L> From<Outcome<L>> for (L, usize) {
    fn from(outcome: Outcome<L>) -> Self {
        (outcome.label, outcome.consumed)
    }
}

/// The pair of labels a leaf matcher reports.
///
/// Two families of leaf matchers exist. One reports distinct labels on success and failure, the
/// other reports the same label in both cases and relies on the consumed count alone. Both are
/// expressed with this type, see [Labels::new] and [Labels::uniform].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Labels<L> {
    /// The label reported on success.
    pub accept: L,
    /// The label reported on failure.
    pub fail: L,
}

impl<L> Labels<L> {
    /// Create labels that distinguish success from failure.
    pub fn new(accept: L, fail: L) -> Self {
        Self { accept, fail }
    }
}

impl<L: Clone> Labels<L> {
    /// Create labels that report the same value on success and failure.
    pub fn uniform(label: L) -> Self {
        Self {
            accept: label.clone(),
            fail: label,
        }
    }

    /// The outcome of a successful single token match.
    #[inline]
    pub(crate) fn single(&self) -> Outcome<L> {
        Outcome::new(self.accept.clone(), 1)
    }

    /// The outcome of a failed match.
    #[inline]
    pub(crate) fn failed(&self) -> Outcome<L> {
        Outcome::fail(self.fail.clone())
    }
}

/// The capability to consume a prefix of a token buffer.
///
/// Implementations must be pure: the same input always yields the same outcome and no state is
/// mutated while matching. A successful outcome must not consume more tokens than the input
/// holds.
pub trait Matcher<T, L>: std::fmt::Debug {
    /// Attempt to consume a prefix of `input`.
    fn attempt(&self, input: &[T]) -> Outcome<L>;

    /// A short description used in trace output and in rendered graphs.
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

/// A matcher that can be shared by many transitions and across threads.
pub type SharedMatcher<T, L> = Arc<dyn Matcher<T, L> + Send + Sync>;

impl<T, L, M> Matcher<T, L> for Arc<M>
where
    M: Matcher<T, L> + ?Sized,
{
    #[inline]
    fn attempt(&self, input: &[T]) -> Outcome<L> {
        (**self).attempt(input)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, L, M> Matcher<T, L> for &M
where
    M: Matcher<T, L> + ?Sized,
{
    #[inline]
    fn attempt(&self, input: &[T]) -> Outcome<L> {
        (**self).attempt(input)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_match() {
        assert!(Outcome::new("A", 1).is_match());
        assert!(!Outcome::new("A", 0).is_match());
        assert!(!Outcome::fail("F").is_match());
    }

    #[test]
    fn test_outcome_tuple_conversion() {
        let outcome: Outcome<char> = ('x', 3).into();
        assert_eq!(outcome, Outcome::new('x', 3));
        let pair: (char, usize) = outcome.into();
        assert_eq!(pair, ('x', 3));
    }

    #[test]
    fn test_uniform_labels() {
        let labels = Labels::uniform(0u8);
        assert_eq!(labels.single(), Outcome::new(0, 1));
        assert_eq!(labels.failed(), Outcome::new(0, 0));
    }
}
