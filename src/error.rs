use thiserror::Error;

/// Errors reported while querying automata or converting an NFA into a DFA.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Conversion was requested before any start state was designated.
    #[error("NFA has no start state")]
    MissingStartState,

    /// A lookup named a state that is not part of the automaton.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// Subset construction discovered more meta-states than the configured
    /// limit allows.
    #[error("DFA state limit exceeded: {states} states (max: {max})")]
    StateLimitExceeded { states: usize, max: usize },
}

pub type AutomatonResult<T> = Result<T, AutomatonError>;
