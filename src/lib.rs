#![forbid(missing_docs)]
//! # `tagged_fsm`
//! The `tagged_fsm` crate provides a composable nondeterministic finite state machine for
//! matching sequences of tokens. Tokens can be of any type, characters are just one option.
//!
//! Unlike a regular expression, a state machine can have several accepting states, each bound to
//! a label of your choice. A single machine can therefore recognize several alternatives and
//! report which of them it recognized, in one traversal.
//!
//! The building blocks are
//! - the [Matcher] trait: consume a prefix of a token buffer and report a label together with the
//!   number of consumed tokens. Zero consumed tokens always means failure.
//! - the leaf matchers [ExactTokenMatcher] and [RangeMatcher], both optionally negated.
//! - the [StateMachine], a graph of states whose transitions pair a matcher with an ordered list
//!   of target states. A state machine is a [Matcher] itself and can be embedded into another
//!   machine.
//!
//! Matching is a depth first search. Transitions and targets are tried in the order they are
//! declared and the first accepting state that is reached wins.
//!
//! # Example
//! ```rust
//! use tagged_fsm::{ExactTokenMatcher, Labels, Outcome, RangeMatcher, StateMachine};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Case {
//!     Lower,
//!     Upper,
//!     Fail,
//! }
//!
//! // Equivalent to the regex `a[a-zA-Z]`, but the result tells which case the second letter had.
//! let labels = Labels::uniform(Case::Fail);
//! let machine = StateMachine::builder("S0", Case::Fail)
//!     .add_matcher("S0", ExactTokenMatcher::new('a', labels), ["S1"])
//!     .add_matcher("S1", RangeMatcher::new('a', 'z', labels), ["S2"])
//!     .add_matcher("S1", RangeMatcher::new('A', 'Z', labels), ["S3"])
//!     .add_accepting_state("S2", Case::Lower)
//!     .add_accepting_state("S3", Case::Upper)
//!     .build();
//!
//! assert_eq!(machine.match_tokens(&['a', 'y']), Outcome::new(Case::Lower, 2));
//! assert_eq!(machine.match_tokens(&['a', 'Y']), Outcome::new(Case::Upper, 2));
//! assert_eq!(machine.match_tokens(&['a', '1']), Outcome::new(Case::Fail, 0));
//! ```
//!
//! # Crate features
//! - `dot_writer`: Enabled by default. Provides [StateMachine::render_dot] to render a machine in
//!   graphviz dot format.
//! - `serde`: Enabled by default. Provides serialization of outcomes and matches, and the
//!   [MachineDescription] type to load leaf-only machines from JSON.

/// Module that provides a machine description type
#[cfg(feature = "serde")]
mod description;
#[cfg(feature = "serde")]
pub use description::{
    AcceptingDescription, LeafMatcher, MachineDescription, StateDescription,
    TransitionDescription,
};

/// Module with error definitions
mod errors;
pub use errors::{FsmError, FsmErrorKind, Result};

/// Module that provides the exact token matcher
mod exact_token_matcher;
pub use exact_token_matcher::ExactTokenMatcher;

/// Module that provides a FindMatches type
mod find_matches;
pub use find_matches::FindMatches;

/// The module with internal implementation details.
mod internal;

/// Module that provides a Match type
mod match_type;
pub use match_type::Match;

/// Module with the matcher trait and its result type
mod matcher;
pub use matcher::{Labels, Matcher, Outcome, SharedMatcher};

/// Module that provides the range matcher
mod range_matcher;
pub use range_matcher::RangeMatcher;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// The module with the state machine.
mod state_machine;
pub use state_machine::{State, StateMachine, Transition};

/// The module with the state machine builder.
mod state_machine_builder;
pub use state_machine_builder::StateMachineBuilder;
