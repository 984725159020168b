use crate::{Labels, Matcher, Outcome};

/// Matches exactly one configured token.
///
/// If negated, any token except the configured one is matched. An empty input never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactTokenMatcher<T, L> {
    token: T,
    negate: bool,
    labels: Labels<L>,
}

impl<T, L> ExactTokenMatcher<T, L> {
    /// Create a new matcher for the given token.
    pub fn new(token: T, labels: Labels<L>) -> Self {
        Self {
            token,
            negate: false,
            labels,
        }
    }

    /// Create a new matcher that matches every token except the given one.
    pub fn negated(token: T, labels: Labels<L>) -> Self {
        Self {
            token,
            negate: true,
            labels,
        }
    }

    /// Get the configured token.
    #[inline]
    pub fn token(&self) -> &T {
        &self.token
    }

    /// Check if the matcher is negated.
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// Get the labels.
    #[inline]
    pub fn labels(&self) -> &Labels<L> {
        &self.labels
    }
}

impl<T, L> Matcher<T, L> for ExactTokenMatcher<T, L>
where
    T: PartialEq + std::fmt::Debug,
    L: Clone + std::fmt::Debug,
{
    fn attempt(&self, input: &[T]) -> Outcome<L> {
        match input.first() {
            Some(token) if (self.token != *token) ^ self.negate => self.labels.failed(),
            Some(_) => self.labels.single(),
            None => self.labels.failed(),
        }
    }

    fn describe(&self) -> String {
        if self.negate {
            format!("!{:?}", self.token)
        } else {
            format!("{:?}", self.token)
        }
    }
}
