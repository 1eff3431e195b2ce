use serde::{Deserialize, Serialize};

use crate::automaton::Letter;

/// A snapshot of a DFA's transition function, for callers that want to print
/// or serialize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable<L: Letter> {
    pub alphabet: Vec<L>,
    pub rows: Vec<TransitionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRow {
    pub state: String,
    pub start: bool,
    pub accepting: bool,
    /// Target state names, aligned with the table's alphabet. `None` marks a
    /// missing transition, which only hand built DFAs can have.
    pub targets: Vec<Option<String>>,
}

impl<L: Letter> TransitionTable<L> {
    pub fn row(&self, state: &str) -> Option<&TransitionRow> {
        self.rows.iter().find(|row| row.state == state)
    }

    /// The target of `state` on `letter`, if both exist and the transition is
    /// defined.
    pub fn target(&self, state: &str, letter: &L) -> Option<&str> {
        let column = self.alphabet.iter().position(|l| l == letter)?;
        self.row(state)?.targets.get(column)?.as_deref()
    }
}
