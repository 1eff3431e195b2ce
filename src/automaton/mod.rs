use std::{fmt::Debug, hash::Hash};

use petgraph::graph::NodeIndex;

use crate::{
    automaton::state::State,
    error::{AutomatonError, AutomatonResult},
};

pub mod determinize;
pub mod dfa;
pub mod meta_state;
pub mod nfa;
pub mod state;

/// This trait represents types that can be used as input symbols of an
/// automaton.
pub trait Letter: Debug + Clone + PartialEq + Eq + Hash + Ord {}
impl<T> Letter for T where T: Debug + Clone + PartialEq + Eq + Hash + Ord {}

pub trait Alphabet {
    type Letter: Letter;

    /// The input symbols in the order they were first declared. Never
    /// contains the epsilon marker.
    fn alphabet(&self) -> &[Self::Letter];
}

/// The base trait for the NFA and DFA graphs. States live in a compact arena
/// and are identified by [NodeIndex] handles from 0 to node_count() - 1.
pub trait Automaton: Alphabet {
    /// Returns the number of states in the automaton.
    fn node_count(&self) -> usize;

    /// Returns the state behind the given handle, or None if the handle is
    /// invalid.
    fn get_node(&self, index: NodeIndex) -> Option<&State>;

    /// Returns the state behind the given handle, panicking if the handle is
    /// invalid.
    fn get_node_unchecked(&self, index: NodeIndex) -> &State;

    /// Looks up the handle of the state with the given name.
    fn state_index(&self, name: &str) -> Option<NodeIndex>;

    /// Like [Automaton::state_index], but reports an unknown name as an error.
    fn require_state(&self, name: &str) -> AutomatonResult<NodeIndex> {
        self.state_index(name)
            .ok_or_else(|| AutomatonError::UnknownState(name.to_string()))
    }

    fn iter_node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_count()).map(NodeIndex::new)
    }

    /// Returns a combined iterator over all states, yielding (handle, state)
    /// pairs in insertion order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeIndex, &State)> {
        self.iter_node_indices()
            .map(move |index| (index, self.get_node_unchecked(index)))
    }

    fn states(&self) -> impl Iterator<Item = &State> {
        self.iter_nodes().map(|(_, state)| state)
    }

    fn final_states(&self) -> impl Iterator<Item = &State> {
        self.states().filter(|state| state.is_final())
    }
}

pub trait InitializedAutomaton: Automaton {
    /// Returns the start state handle, or None if no start state was set.
    fn get_initial(&self) -> Option<NodeIndex>;

    fn start_state(&self) -> Option<&State> {
        self.get_initial().map(|index| self.get_node_unchecked(index))
    }

    /// Returns true if the passed in state is accepting / a final state.
    fn is_accepting(&self, node: NodeIndex) -> bool {
        self.get_node_unchecked(node).is_final()
    }
}

/// The basic trait for anything that defines a language over a set alphabet.
pub trait Language: Alphabet {
    fn accepts<'a>(&self, input: impl IntoIterator<Item = &'a Self::Letter>) -> bool
    where
        Self::Letter: 'a;
}
