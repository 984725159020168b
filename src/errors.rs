use thiserror::Error;

/// The result type for the `tagged_fsm` crate.
pub type Result<T> = std::result::Result<T, FsmError>;

/// The error type for the `tagged_fsm` crate.
///
/// Matching never produces an error, a failed match is always reported as an [crate::Outcome]
/// carrying the fail label. Errors only arise from the opt-in diagnostics and the auxiliary
/// surfaces like deserialization and rendering.
#[derive(Error, Debug)]
pub struct FsmError {
    /// The source of the error.
    pub source: Box<FsmErrorKind>,
}

impl FsmError {
    /// Create a new `FsmError`.
    pub fn new(kind: FsmErrorKind) -> Self {
        FsmError {
            source: Box::new(kind),
        }
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &FsmErrorKind {
        &self.source
    }
}

impl std::fmt::Display for FsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
///
/// State identifiers are stored in their `Debug` rendering to keep the error type independent of
/// the generic parameters of the state machine.
#[derive(Error, Debug)]
pub enum FsmErrorKind {
    /// The initial state is neither in the state table nor in the acceptance table.
    #[error("Initial state {0} is neither a declared state nor an accepting state")]
    UnknownInitialState(String),

    /// A transition points to a state that is neither in the state table nor in the acceptance
    /// table.
    #[error("Transition from state {from} targets unknown state {target}")]
    DanglingTarget {
        /// The state the transition starts from.
        from: String,
        /// The unresolved target.
        target: String,
    },

    /// An accepting state can't be reached from the initial state.
    #[error("Accepting state {0} is unreachable from the initial state")]
    UnreachableAcceptingState(String),

    /// A machine description could not be read.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for FsmError {
    fn from(error: serde_json::Error) -> Self {
        FsmError::new(FsmErrorKind::JsonError(error))
    }
}

impl From<std::io::Error> for FsmError {
    fn from(error: std::io::Error) -> Self {
        FsmError::new(FsmErrorKind::IoError(error))
    }
}
