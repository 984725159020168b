use std::{hash::Hash, sync::Arc};

use log::debug;
use rustc_hash::FxHashMap;

use crate::{Matcher, SharedMatcher, State, StateMachine, Transition};

/// A builder for creating a state machine.
///
/// Transitions are tried in the order they are added to a state. The builder performs no
/// validation, targets may refer to states that are added later or never.
#[derive(Debug, Clone)]
pub struct StateMachineBuilder<T, S, L> {
    initial_state: S,
    fail_label: L,
    states: FxHashMap<S, State<T, S, L>>,
    accepting_states: FxHashMap<S, L>,
}

impl<T, S, L> StateMachineBuilder<T, S, L>
where
    S: Eq + Hash + Clone + std::fmt::Debug,
    L: Clone,
{
    /// Creates a new state machine builder.
    pub fn new(initial_state: S, fail_label: L) -> Self {
        Self {
            initial_state,
            fail_label,
            states: FxHashMap::default(),
            accepting_states: FxHashMap::default(),
        }
    }

    /// Declares a state. A declared state without transitions is terminal.
    pub fn add_state(mut self, id: S) -> Self {
        self.states.entry(id).or_default();
        self
    }

    /// Appends a transition to the given state and declares the state if necessary.
    pub fn add_transition(mut self, from: S, transition: Transition<T, S, L>) -> Self {
        self.states.entry(from).or_default().push(transition);
        self
    }

    /// Appends a transition with a shared matcher to the given state.
    pub fn add_shared<I>(self, from: S, matcher: SharedMatcher<T, L>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.add_transition(from, Transition::new(matcher, targets))
    }

    /// Appends a transition with the given matcher to the given state.
    pub fn add_matcher<M, I>(self, from: S, matcher: M, targets: I) -> Self
    where
        M: Matcher<T, L> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
    {
        self.add_shared(from, Arc::new(matcher), targets)
    }

    /// Adds an accepting state with its label. A second call for the same state replaces the
    /// label.
    pub fn add_accepting_state(mut self, id: S, label: L) -> Self {
        self.accepting_states.insert(id, label);
        self
    }

    /// Builds the state machine.
    pub fn build(self) -> StateMachine<T, S, L> {
        debug!(
            "Building state machine with {} declared and {} accepting states",
            self.states.len(),
            self.accepting_states.len()
        );
        StateMachine::new(
            self.initial_state,
            self.states,
            self.accepting_states,
            self.fail_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExactTokenMatcher, Labels, Outcome};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_state_machine_builder() {
        init();
        let machine = StateMachineBuilder::new("start", "fail")
            .add_matcher("start", ExactTokenMatcher::new(1u8, Labels::uniform("fail")), ["one"])
            .add_accepting_state("one", "ONE")
            .build();
        assert_eq!(*machine.initial_state(), "start");
        assert_eq!(machine.state(&"start").map(State::is_empty), Some(false));
        assert_eq!(machine.match_tokens(&[1, 2]), Outcome::new("ONE", 1));
        assert_eq!(machine.match_tokens(&[2, 1]), Outcome::new("fail", 0));
    }

    #[test]
    fn test_transitions_keep_insertion_order() {
        init();
        let builder = StateMachineBuilder::new(0, 'F')
            .add_matcher(0, ExactTokenMatcher::new('x', Labels::uniform('F')), [1])
            .add_matcher(0, ExactTokenMatcher::new('x', Labels::uniform('F')), [2])
            .add_accepting_state(1, 'A')
            .add_accepting_state(2, 'B');
        let machine = builder.clone().build();
        assert_eq!(machine.match_tokens(&['x']), Outcome::new('A', 1));

        // Replacing the label of the first target changes the result, the order stays the same.
        let machine = builder.add_accepting_state(1, 'C').build();
        assert_eq!(machine.match_tokens(&['x']), Outcome::new('C', 1));
    }

    #[test]
    fn test_shared_matcher() {
        init();
        let digit: SharedMatcher<char, u32> = Arc::new(crate::RangeMatcher::new(
            '0',
            '9',
            Labels::uniform(0u32),
        ));
        let machine = StateMachineBuilder::new('s', 0)
            .add_shared('s', digit.clone(), ['t'])
            .add_shared('t', digit, ['u'])
            .add_accepting_state('u', 42)
            .build();
        assert_eq!(machine.match_tokens(&['4', '2']), Outcome::new(42, 2));
        assert_eq!(machine.match_tokens(&['4', 'x']), Outcome::new(0, 0));
    }
}
