use std::hash::Hash;

use log::trace;

use crate::{Match, Span, StateMachine};

/// An iterator over all non-overlapping matches of a state machine in a token buffer.
///
/// The iterator yields a [`Match`] value until no more matches could be found.
///
/// * `'h` represents the lifetime of the haystack being searched and of the machine.
///
/// This iterator can be created with the [`crate::StateMachine::find_iter`] method.
pub struct FindMatches<'h, T, S, L> {
    machine: &'h StateMachine<T, S, L>,
    input: &'h [T],
    // Index of the next token to match from
    position: usize,
    // Added to the spans of all reported matches
    offset: usize,
}

impl<'h, T, S, L> FindMatches<'h, T, S, L>
where
    S: Eq + Hash + std::fmt::Debug,
    L: Clone,
{
    /// Creates a new `FindMatches` iterator.
    pub(crate) fn new(machine: &'h StateMachine<T, S, L>, input: &'h [T]) -> Self {
        Self {
            machine,
            input,
            position: 0,
            offset: 0,
        }
    }

    /// Sets an offset that is added to the start and end of each match.
    /// If the haystack is a slice of a larger buffer, the offset can be set to the index of the
    /// slice in the buffer to get spans relative to the buffer.
    pub fn with_offset(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    /// Retrieve the index of the token the next search starts at, relative to the haystack.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Returns the next match in the haystack.
    ///
    /// If no match is found, `None` is returned.
    ///
    /// The machine is matched at the current position. If it consumes tokens, the match is
    /// returned and the position advances beyond it. Otherwise the position advances by one token
    /// and the machine is tried again until a match is found or the haystack is exhausted.
    /// Epsilon acceptance consumes nothing and is therefore never reported.
    pub fn next_match(&mut self) -> Option<Match<L>> {
        while self.position < self.input.len() {
            let outcome = self.machine.match_tokens(&self.input[self.position..]);
            if outcome.is_match() {
                let start = self.offset + self.position;
                self.position += outcome.consumed;
                let matched = Match::new(
                    outcome.label,
                    Span::new(start, self.offset + self.position),
                );
                trace!("Match found: {}", matched.span());
                return Some(matched);
            }
            self.position += 1;
        }
        None
    }
}

impl<T, S, L> Iterator for FindMatches<'_, T, S, L>
where
    S: Eq + Hash + std::fmt::Debug,
    L: Clone,
{
    type Item = Match<L>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}

impl<T, S, L> std::fmt::Debug for FindMatches<'_, T, S, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindMatches")
            .field("position", &self.position)
            .field("offset", &self.offset)
            .finish()
    }
}
