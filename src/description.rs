//! Module with a serializable description of leaf-only state machines.
//!
//! A description lists the states with their transitions over exact token and range matchers,
//! the accepting states and the fail label. It is converted into a [StateMachine] with
//! [MachineDescription::build]. Leaf matchers created from a description report the fail label
//! for success and failure alike, the consumed count decides.
use std::hash::Hash;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    ExactTokenMatcher, Labels, RangeMatcher, Result, StateMachine, StateMachineBuilder,
    Transition,
};

/// A leaf matcher in a machine description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafMatcher<T> {
    /// Matches exactly the given token, or every other token if negated.
    Token {
        /// The token.
        token: T,
        /// If the match is negated.
        #[serde(default)]
        negate: bool,
    },
    /// Matches a token in the inclusive range, or outside of it if negated.
    Range {
        /// The lower bound.
        low: T,
        /// The upper bound.
        high: T,
        /// If the match is negated.
        #[serde(default)]
        negate: bool,
    },
}

/// A transition in a machine description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionDescription<T, S> {
    /// The matcher of the transition.
    pub matcher: LeafMatcher<T>,
    /// The targets in the order they are tried.
    pub targets: Vec<S>,
}

/// A state in a machine description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateDescription<T, S> {
    /// The state identifier.
    pub name: S,
    /// The transitions in the order they are tried.
    #[serde(default = "Vec::new")]
    pub transitions: Vec<TransitionDescription<T, S>>,
}

/// An accepting state in a machine description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AcceptingDescription<S, L> {
    /// The state identifier.
    pub state: S,
    /// The label reported when the search ends in this state.
    pub label: L,
}

/// The description of a state machine whose transitions use leaf matchers only.
///
/// # Example
/// ```rust
/// use tagged_fsm::{MachineDescription, Outcome};
///
/// let json = r#"{
///     "initial_state": "S0",
///     "fail_label": "FAIL",
///     "states": [
///         { "name": "S0", "transitions": [
///             { "matcher": { "Token": { "token": "x" } }, "targets": ["S1"] },
///             { "matcher": { "Token": { "token": "y" } }, "targets": ["S2"] }
///         ] }
///     ],
///     "accepting_states": [
///         { "state": "S1", "label": "L1" },
///         { "state": "S2", "label": "L2" }
///     ]
/// }"#;
/// let description: MachineDescription<char, String, String> =
///     MachineDescription::from_json(json).expect("invalid description");
/// let machine = description.build();
/// assert_eq!(machine.match_tokens(&['y']), Outcome::new("L2".to_string(), 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDescription<T, S, L> {
    /// The state the search starts in.
    pub initial_state: S,
    /// The label reported if no accepting state is reached.
    pub fail_label: L,
    /// The state table.
    #[serde(default = "Vec::new")]
    pub states: Vec<StateDescription<T, S>>,
    /// The acceptance table.
    #[serde(default = "Vec::new")]
    pub accepting_states: Vec<AcceptingDescription<S, L>>,
}

impl<T, S, L> MachineDescription<T, S, L>
where
    Self: DeserializeOwned,
{
    /// Read a description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a description from a JSON reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl<T, S, L> MachineDescription<T, S, L>
where
    T: PartialOrd + std::fmt::Debug + Send + Sync + 'static,
    S: Eq + Hash + Clone + std::fmt::Debug,
    L: Clone + std::fmt::Debug + Send + Sync + 'static,
{
    /// Build the described state machine.
    ///
    /// States listed more than once accumulate their transitions in the listed order.
    pub fn build(self) -> StateMachine<T, S, L> {
        let labels = Labels::uniform(self.fail_label.clone());
        let mut builder = StateMachineBuilder::new(self.initial_state, self.fail_label);
        for state in self.states {
            builder = builder.add_state(state.name.clone());
            for transition in state.transitions {
                let targets = transition.targets;
                let transition = match transition.matcher {
                    LeafMatcher::Token { token, negate } => {
                        let matcher = if negate {
                            ExactTokenMatcher::negated(token, labels.clone())
                        } else {
                            ExactTokenMatcher::new(token, labels.clone())
                        };
                        Transition::with_matcher(matcher, targets)
                    }
                    LeafMatcher::Range { low, high, negate } => {
                        let matcher = if negate {
                            RangeMatcher::negated(low, high, labels.clone())
                        } else {
                            RangeMatcher::new(low, high, labels.clone())
                        };
                        Transition::with_matcher(matcher, targets)
                    }
                };
                builder = builder.add_transition(state.name.clone(), transition);
            }
        }
        for accepting in self.accepting_states {
            builder = builder.add_accepting_state(accepting.state, accepting.label);
        }
        builder.build()
    }
}

impl<T, S, L> From<MachineDescription<T, S, L>> for StateMachine<T, S, L>
where
    T: PartialOrd + std::fmt::Debug + Send + Sync + 'static,
    S: Eq + Hash + Clone + std::fmt::Debug,
    L: Clone + std::fmt::Debug + Send + Sync + 'static,
{
    fn from(description: MachineDescription<T, S, L>) -> Self {
        description.build()
    }
}
