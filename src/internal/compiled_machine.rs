//! The compiled form of a state machine.
//!
//! All state identifiers that appear in the topology are interned into dense [StateID]s, so the
//! search works on vectors instead of hash maps. Identifiers that are referenced but never
//! declared get an entry without transitions and without accept label, i.e. a dead end.

use log::{debug, trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Outcome, SharedMatcher, State};

use super::{ids::StateIDBase, StateID};

/// A compiled state machine.
#[derive(Debug)]
pub(crate) struct CompiledMachine<T, S, L> {
    pub(crate) initial_state: StateID,
    pub(crate) states: Vec<CompiledState<T, L>>,
    // The caller supplied identifiers, indexed by state id
    pub(crate) names: Vec<S>,
}

/// The data of a compiled state.
#[derive(Debug)]
pub(crate) struct CompiledState<T, L> {
    // None if the identifier is not a key of the state table
    pub(crate) transitions: Option<Vec<CompiledTransition<T, L>>>,
    // Some if the identifier is a key of the acceptance table
    pub(crate) accept: Option<L>,
}

impl<T, L> CompiledState<T, L> {
    /// Returns true if the state is neither declared nor accepting.
    #[inline]
    pub(crate) fn is_unresolved(&self) -> bool {
        self.transitions.is_none() && self.accept.is_none()
    }
}

#[derive(Debug)]
pub(crate) struct CompiledTransition<T, L> {
    pub(crate) matcher: SharedMatcher<T, L>,
    pub(crate) targets: Vec<StateID>,
}

/// What happens when the search enters a state at a given position.
enum Entry<'m, T, L> {
    /// The state is terminal and accepting.
    Accept(&'m L),
    /// The state is a dead end.
    Reject,
    /// The state's transitions have to be explored.
    Expand(&'m [CompiledTransition<T, L>]),
}

/// A pending state on the search stack.
struct Frame<'m, T, L> {
    state: StateID,
    position: usize,
    // Transitions not yet attempted
    transitions: std::slice::Iter<'m, CompiledTransition<T, L>>,
    // Targets of the last successful transition not yet entered
    targets: std::slice::Iter<'m, StateID>,
    // The position after the last successful transition
    next_position: usize,
}

impl<'m, T, L> Frame<'m, T, L> {
    fn new(state: StateID, position: usize, transitions: &'m [CompiledTransition<T, L>]) -> Self {
        Self {
            state,
            position,
            transitions: transitions.iter(),
            targets: Default::default(),
            next_position: position,
        }
    }
}

impl<T, S, L> CompiledMachine<T, S, L>
where
    S: Eq + std::hash::Hash + Clone + std::fmt::Debug,
    L: Clone,
{
    /// Compile the given tables.
    pub(crate) fn new(
        initial_state: &S,
        states: &FxHashMap<S, State<T, S, L>>,
        accepting_states: &FxHashMap<S, L>,
    ) -> Self {
        let mut compiled = Self {
            initial_state: StateID::default(),
            states: Vec::new(),
            names: Vec::new(),
        };
        let mut ids = FxHashMap::<S, StateID>::default();
        compiled.initial_state = compiled.intern(&mut ids, initial_state);

        for (name, state) in states {
            let id = compiled.intern(&mut ids, name);
            let mut transitions = Vec::with_capacity(state.transitions().len());
            for transition in state.transitions() {
                let targets = transition
                    .targets()
                    .iter()
                    .map(|target| compiled.intern(&mut ids, target))
                    .collect();
                transitions.push(CompiledTransition {
                    matcher: transition.matcher().clone(),
                    targets,
                });
            }
            compiled.states[id.as_usize()].transitions = Some(transitions);
        }

        for (name, label) in accepting_states {
            let id = compiled.intern(&mut ids, name);
            compiled.states[id.as_usize()].accept = Some(label.clone());
        }

        debug!(
            "Compiled state machine with {} states, initial state {:?}",
            compiled.states.len(),
            initial_state
        );
        compiled
    }

    fn intern(&mut self, ids: &mut FxHashMap<S, StateID>, name: &S) -> StateID {
        if let Some(id) = ids.get(name) {
            return *id;
        }
        let id = StateID::new(self.states.len() as StateIDBase);
        self.states.push(CompiledState {
            transitions: None,
            accept: None,
        });
        self.names.push(name.clone());
        ids.insert(name.clone(), id);
        id
    }
}

impl<T, S, L> CompiledMachine<T, S, L>
where
    S: std::fmt::Debug,
    L: Clone,
{
    /// Determine how the search continues in `state` with `remaining` tokens left.
    fn enter(&self, state: StateID, remaining: usize) -> Entry<'_, T, L> {
        let data = &self.states[state];
        let terminal = remaining == 0
            || match &data.transitions {
                Some(transitions) => transitions.is_empty(),
                None => data.accept.is_some(),
            };
        if terminal {
            return match &data.accept {
                Some(label) => Entry::Accept(label),
                None => Entry::Reject,
            };
        }
        match &data.transitions {
            Some(transitions) => Entry::Expand(transitions),
            None => Entry::Reject,
        }
    }

    /// Depth first search for the first accepting path.
    ///
    /// Transitions are tried in declared order and, for each successful transition, its targets
    /// are tried in declared order. The first accepting state reached wins. The search uses an
    /// explicit stack, so the input length does not bound the call depth.
    ///
    /// Every state/position pair whose exploration failed is recorded. Because matchers are pure,
    /// entering such a pair again can only fail and is skipped.
    pub(crate) fn find(&self, input: &[T], fail_label: &L) -> Outcome<L> {
        trace!(
            "Matching {} tokens from state {:?}",
            input.len(),
            self.names[self.initial_state]
        );
        let mut stack = match self.enter(self.initial_state, input.len()) {
            Entry::Accept(label) => {
                trace!("Initial state accepts without consuming input");
                return Outcome::new(label.clone(), 0);
            }
            Entry::Reject => {
                trace!("Initial state is a dead end");
                return Outcome::fail(fail_label.clone());
            }
            Entry::Expand(transitions) => vec![Frame::new(self.initial_state, 0, transitions)],
        };
        let mut failed = FxHashSet::<(StateID, usize)>::default();

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };

            if let Some(&target) = frame.targets.next() {
                let position = frame.next_position;
                if failed.contains(&(target, position)) {
                    trace!(
                        "Skipping state {:?} at {}, known to fail",
                        self.names[target],
                        position
                    );
                    continue;
                }
                trace!("Enter state {:?} at {}", self.names[target], position);
                match self.enter(target, input.len() - position) {
                    Entry::Accept(label) => {
                        trace!(
                            "Accepting state {:?} reached after {} tokens",
                            self.names[target],
                            position
                        );
                        return Outcome::new(label.clone(), position);
                    }
                    Entry::Reject => {
                        trace!("~~~ Dead end at state {:?}", self.names[target]);
                        failed.insert((target, position));
                    }
                    Entry::Expand(transitions) => {
                        stack.push(Frame::new(target, position, transitions));
                    }
                }
                continue;
            }

            if let Some(transition) = frame.transitions.next() {
                let rest = &input[frame.position..];
                let consumed = transition.matcher.attempt(rest).consumed;
                if consumed > rest.len() {
                    warn!(
                        "Matcher {} reported {} consumed tokens but only {} are left",
                        transition.matcher.describe(),
                        consumed,
                        rest.len()
                    );
                } else if consumed > 0 {
                    trace!(
                        "Matched {} at {} in state {:?}, {} tokens",
                        transition.matcher.describe(),
                        frame.position,
                        self.names[frame.state],
                        consumed
                    );
                    frame.targets = transition.targets.iter();
                    frame.next_position = frame.position + consumed;
                }
                continue;
            }

            trace!(
                "All transitions of state {:?} at {} failed",
                self.names[frame.state],
                frame.position
            );
            let (state, position) = (frame.state, frame.position);
            stack.pop();
            failed.insert((state, position));
        }

        trace!("No accepting path found");
        Outcome::fail(fail_label.clone())
    }
}
