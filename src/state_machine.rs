use std::{hash::Hash, sync::Arc};

use rustc_hash::FxHashMap;

use crate::{
    internal::CompiledMachine, FindMatches, Matcher, Outcome, Result, SharedMatcher,
    StateMachineBuilder,
};

/// A transition is a matcher and the ordered list of states it leads to.
///
/// If the matcher succeeds, the targets are tried left to right.
#[derive(Debug, Clone)]
pub struct Transition<T, S, L> {
    matcher: SharedMatcher<T, L>,
    targets: Vec<S>,
}

impl<T, S, L> Transition<T, S, L> {
    /// Create a new transition with a shared matcher.
    pub fn new<I>(matcher: SharedMatcher<T, L>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            matcher,
            targets: targets.into_iter().collect(),
        }
    }

    /// Create a new transition that takes ownership of the matcher.
    pub fn with_matcher<M, I>(matcher: M, targets: I) -> Self
    where
        M: Matcher<T, L> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
    {
        Self::new(Arc::new(matcher), targets)
    }

    /// Get the matcher.
    #[inline]
    pub fn matcher(&self) -> &SharedMatcher<T, L> {
        &self.matcher
    }

    /// Get the targets in the order they are tried.
    #[inline]
    pub fn targets(&self) -> &[S] {
        &self.targets
    }
}

/// A state is the ordered list of its transitions.
#[derive(Debug, Clone)]
pub struct State<T, S, L> {
    transitions: Vec<Transition<T, S, L>>,
}

impl<T, S, L> State<T, S, L> {
    /// Create a new state from its transitions.
    pub fn new(transitions: Vec<Transition<T, S, L>>) -> Self {
        Self { transitions }
    }

    /// Append a transition. It is tried after all transitions added before.
    pub fn push(&mut self, transition: Transition<T, S, L>) {
        self.transitions.push(transition);
    }

    /// Get the transitions in the order they are tried.
    #[inline]
    pub fn transitions(&self) -> &[Transition<T, S, L>] {
        &self.transitions
    }

    /// Returns true if the state has no transitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<T, S, L> Default for State<T, S, L> {
    fn default() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }
}

impl<T, S, L> From<Vec<Transition<T, S, L>>> for State<T, S, L> {
    fn from(transitions: Vec<Transition<T, S, L>>) -> Self {
        Self::new(transitions)
    }
}

/// A nondeterministic finite state machine over tokens of type `T`.
///
/// Unlike a regular expression, a state machine can have several accepting states, each bound to
/// its own label. A successful match reports which of them was reached, so one machine can
/// recognize several alternatives and tell them apart.
///
/// The machine is immutable after construction. Matching never mutates it, so a machine can be
/// shared between threads and matched concurrently.
///
/// A state machine is itself a [Matcher] and can be used as the matcher of a transition in
/// another machine.
///
/// # Matching
/// The search is depth first. In each state, the transitions are tried in declared order and the
/// targets of a successful transition are tried in declared order, too. The first accepting state
/// reached ends the search. A state is terminal if the input is exhausted, if it is declared
/// without transitions, or if it only appears in the acceptance table. A terminal state succeeds
/// if it is accepting. A non-terminal accepting state whose transitions all fail does not
/// succeed.
///
/// Identifiers that are referenced but not declared are dead ends. The topology is not validated
/// on construction, see [StateMachine::check_topology] for an explicit check.
pub struct StateMachine<T, S, L> {
    initial_state: S,
    states: FxHashMap<S, State<T, S, L>>,
    accepting_states: FxHashMap<S, L>,
    fail_label: L,
    pub(crate) compiled: CompiledMachine<T, S, L>,
}

impl<T, S, L> StateMachine<T, S, L>
where
    S: Eq + Hash + Clone + std::fmt::Debug,
    L: Clone,
{
    /// Create a new state machine.
    ///
    /// * `initial_state` - The state the search starts in.
    /// * `states` - The state table. Accepting states need not be part of it.
    /// * `accepting_states` - The acceptance table, mapping states to the label reported when the
    ///   search ends in them.
    /// * `fail_label` - The label reported if no accepting state is reached.
    pub fn new<IS, IA>(initial_state: S, states: IS, accepting_states: IA, fail_label: L) -> Self
    where
        IS: IntoIterator<Item = (S, State<T, S, L>)>,
        IA: IntoIterator<Item = (S, L)>,
    {
        let states: FxHashMap<S, State<T, S, L>> = states.into_iter().collect();
        let accepting_states: FxHashMap<S, L> = accepting_states.into_iter().collect();
        let compiled = CompiledMachine::new(&initial_state, &states, &accepting_states);
        Self {
            initial_state,
            states,
            accepting_states,
            fail_label,
            compiled,
        }
    }

    /// Create a builder for a state machine.
    pub fn builder(initial_state: S, fail_label: L) -> StateMachineBuilder<T, S, L> {
        StateMachineBuilder::new(initial_state, fail_label)
    }
}

impl<T, S, L> StateMachine<T, S, L>
where
    S: Eq + Hash + std::fmt::Debug,
    L: Clone,
{
    /// Match the machine against the start of `input`.
    ///
    /// Returns the label of the accepting state reached and the number of tokens consumed, or the
    /// fail label and zero if no accepting state could be reached.
    ///
    /// An initial state that accepts and is terminal yields its label with zero consumed tokens,
    /// even for an empty input.
    #[inline]
    pub fn match_tokens(&self, input: &[T]) -> Outcome<L> {
        self.compiled.find(input, &self.fail_label)
    }

    /// Returns an iterator over all non-overlapping matches in `input`.
    pub fn find_iter<'h>(&'h self, input: &'h [T]) -> FindMatches<'h, T, S, L> {
        FindMatches::new(self, input)
    }

    /// Check the topology of the machine.
    ///
    /// Reports an initial state that is neither declared nor accepting, a transition target that
    /// is neither declared nor accepting, or an accepting state that can't be reached from the
    /// initial state. Reachability follows all transitions regardless of what their matchers
    /// accept.
    ///
    /// This check is never performed implicitly. A machine that fails it is still usable, the
    /// offending parts simply never lead to a match.
    pub fn check_topology(&self) -> Result<()> {
        self.compiled.check_topology()
    }

    /// Get the initial state.
    #[inline]
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    /// Get the label reported on failure.
    #[inline]
    pub fn fail_label(&self) -> &L {
        &self.fail_label
    }

    /// Get a state of the state table.
    #[inline]
    pub fn state(&self, id: &S) -> Option<&State<T, S, L>> {
        self.states.get(id)
    }

    /// Get the label of an accepting state.
    #[inline]
    pub fn accept_label(&self, id: &S) -> Option<&L> {
        self.accepting_states.get(id)
    }

    /// Returns true if the state is an accepting state.
    #[inline]
    pub fn is_accepting(&self, id: &S) -> bool {
        self.accepting_states.contains_key(id)
    }

    /// Get the state table.
    #[inline]
    pub fn states(&self) -> &FxHashMap<S, State<T, S, L>> {
        &self.states
    }

    /// Get the acceptance table.
    #[inline]
    pub fn accepting_states(&self) -> &FxHashMap<S, L> {
        &self.accepting_states
    }
}

#[cfg(feature = "dot_writer")]
impl<T, S, L> StateMachine<T, S, L>
where
    S: std::fmt::Debug,
    L: std::fmt::Debug,
{
    /// Render the machine in graphviz dot format.
    ///
    /// The initial state is drawn in blue, accepting states in red together with their label.
    /// Edges are labelled with the description of their matcher. If a transition has several
    /// targets, the edges carry the order in which the targets are tried.
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W) -> Result<()> {
        let mut buffer = Vec::new();
        crate::internal::dot::machine_render(&self.compiled, label, &mut buffer);
        output.write_all(&buffer)?;
        Ok(())
    }
}

impl<T, S, L> Matcher<T, L> for StateMachine<T, S, L>
where
    S: Eq + Hash + std::fmt::Debug,
    L: Clone + std::fmt::Debug,
{
    #[inline]
    fn attempt(&self, input: &[T]) -> Outcome<L> {
        self.match_tokens(input)
    }

    fn describe(&self) -> String {
        format!("machine@{:?}", self.initial_state)
    }
}

impl<T, S, L> std::fmt::Debug for StateMachine<T, S, L>
where
    S: std::fmt::Debug,
    L: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("initial_state", &self.initial_state)
            .field("states", &self.states.len())
            .field("accepting_states", &self.accepting_states.len())
            .field("fail_label", &self.fail_label)
            .finish()
    }
}
