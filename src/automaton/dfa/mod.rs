use std::fmt::Debug;

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::{
    automaton::{Alphabet, Automaton, InitializedAutomaton, Language, Letter, state::State},
    error::AutomatonResult,
};

pub mod table;

pub use table::{TransitionRow, TransitionTable};

/// A deterministic finite automaton. Each (state, symbol) pair has at most
/// one target; automata produced by subset construction have exactly one.
#[derive(Clone)]
pub struct DFA<L: Letter = char> {
    start: Option<NodeIndex>,
    graph: DiGraph<State, L>,
    names: HashMap<String, NodeIndex>,
    alphabet: Vec<L>,
}

impl<L: Letter> Default for DFA<L> {
    fn default() -> Self {
        DFA::new()
    }
}

impl<L: Letter> DFA<L> {
    pub fn new() -> Self {
        DFA::with_alphabet(Vec::new())
    }

    /// Creates an empty DFA with a predeclared alphabet. Duplicate letters
    /// are dropped, the first occurrence wins.
    pub fn with_alphabet(alphabet: Vec<L>) -> Self {
        DFA {
            start: None,
            graph: DiGraph::new(),
            names: HashMap::new(),
            alphabet: alphabet.into_iter().unique().collect(),
        }
    }

    pub fn graph(&self) -> &DiGraph<State, L> {
        &self.graph
    }

    pub fn state_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds a state with the given name. Re-adding an existing name is a
    /// no-op returning the existing handle.
    pub fn add_state(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.names.get(name) {
            return index;
        }

        self.push_state(State::new(name))
    }

    /// Adds `state` as a new node. The caller guarantees its name is not
    /// taken yet.
    pub(crate) fn push_state(&mut self, state: State) -> NodeIndex {
        debug_assert!(
            !self.names.contains_key(state.name()),
            "State {} is already part of the DFA",
            state
        );

        let name = state.name().to_string();
        let index = self.graph.add_node(state);
        self.names.insert(name, index);
        index
    }

    /// Designates the named state as the start state, creating it if needed.
    pub fn add_start_state(&mut self, name: &str) -> NodeIndex {
        let index = self.add_state(name);
        self.set_start(index);
        index
    }

    /// Marks the named state as final, creating it if needed.
    pub fn add_final_state(&mut self, name: &str) -> NodeIndex {
        let index = self.add_state(name);
        self.set_final(index);
        index
    }

    pub fn set_start(&mut self, start: NodeIndex) {
        assert!(
            start.index() < self.graph.node_count(),
            "State {:?} is not part of the DFA",
            start
        );
        self.start = Some(start);
    }

    pub fn set_final(&mut self, state: NodeIndex) {
        self.graph[state].set_final();
    }

    /// Adds a transition between two named states, creating both if needed.
    /// A previously defined target for the same (state, symbol) pair is
    /// replaced.
    pub fn add_transition(&mut self, from: &str, letter: L, to: &str) -> EdgeIndex {
        let from = self.add_state(from);
        let to = self.add_state(to);
        self.add_edge(from, to, letter)
    }

    /// Handle based version of [DFA::add_transition].
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, letter: L) -> EdgeIndex {
        let existing = self
            .graph
            .edges_directed(from, Direction::Outgoing)
            .find(|edge| *edge.weight() == letter)
            .map(|edge| (edge.id(), edge.target()));

        match existing {
            Some((edge, target)) if target == to => return edge,
            Some((edge, _)) => {
                self.graph.remove_edge(edge);
            }
            None => {}
        }

        if !self.alphabet.contains(&letter) {
            self.alphabet.push(letter.clone());
        }

        self.graph.add_edge(from, to, letter)
    }

    /// The target of the transition from `state` on `letter`, if defined.
    pub fn transition(&self, state: NodeIndex, letter: &L) -> Option<NodeIndex> {
        self.graph
            .edges_directed(state, Direction::Outgoing)
            .find(|edge| edge.weight() == letter)
            .map(|edge| edge.target())
    }

    /// Name based version of [DFA::transition]. Fails if `from` does not name
    /// a state of this DFA.
    pub fn transition_by_name(
        &self,
        from: &str,
        letter: &L,
    ) -> AutomatonResult<Option<&State>> {
        let from = self.require_state(from)?;
        Ok(self
            .transition(from, letter)
            .map(|target| &self.graph[target]))
    }

    /// Checks that every state has a transition for every letter of the
    /// alphabet.
    pub fn is_complete(&self) -> bool {
        self.missing_transition().is_none()
    }

    /// Assert that the DFA is complete.
    ///
    /// If the DFA is not complete, this function will panic.
    pub fn assert_complete(&self) {
        if let Some((state, letter)) = self.missing_transition() {
            panic!(
                "DFA is not complete. State {} does not have a transition for letter {:?}",
                self.graph[state], letter
            );
        }
    }

    fn missing_transition(&self) -> Option<(NodeIndex, &L)> {
        for state in self.graph.node_indices() {
            for letter in self.alphabet.iter() {
                if self.transition(state, letter).is_none() {
                    return Some((state, letter));
                }
            }
        }

        None
    }

    /// Re-derives the full transition table, one row per state in insertion
    /// order and one column per letter in alphabet order.
    pub fn transition_table(&self) -> TransitionTable<L> {
        let rows = self
            .iter_nodes()
            .map(|(index, state)| TransitionRow {
                state: state.name().to_string(),
                start: self.start == Some(index),
                accepting: state.is_final(),
                targets: self
                    .alphabet
                    .iter()
                    .map(|letter| {
                        self.transition(index, letter)
                            .map(|target| self.graph[target].name().to_string())
                    })
                    .collect_vec(),
            })
            .collect_vec();

        TransitionTable {
            alphabet: self.alphabet.clone(),
            rows,
        }
    }
}

impl DFA<char> {
    pub fn accepts_str(&self, input: &str) -> bool {
        let word = input.chars().collect_vec();
        self.accepts(&word)
    }
}

impl<L: Letter> Alphabet for DFA<L> {
    type Letter = L;

    fn alphabet(&self) -> &[L] {
        self.alphabet.as_slice()
    }
}

impl<L: Letter> Automaton for DFA<L> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn get_node(&self, index: NodeIndex) -> Option<&State> {
        self.graph.node_weight(index)
    }

    fn get_node_unchecked(&self, index: NodeIndex) -> &State {
        &self.graph[index]
    }

    fn state_index(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(name).copied()
    }
}

impl<L: Letter> InitializedAutomaton for DFA<L> {
    fn get_initial(&self) -> Option<NodeIndex> {
        self.start
    }
}

impl<L: Letter> Language for DFA<L> {
    fn accepts<'a>(&self, input: impl IntoIterator<Item = &'a L>) -> bool
    where
        L: 'a,
    {
        let Some(mut current_state) = self.start else {
            return false;
        };

        for symbol in input {
            match self.transition(current_state, symbol) {
                Some(next_state) => current_state = next_state,
                None => return false,
            }
        }

        self.graph[current_state].is_final()
    }
}

impl<L: Letter> Debug for DFA<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DFA")
            .field("alphabet", &self.alphabet)
            .field("state_count", &self.graph.node_count())
            .field("states", &self.states().map(State::name).collect_vec())
            .field("initial_state", &self.start_state().map(State::name))
            .field(
                "final_states",
                &self.final_states().map(State::name).collect_vec(),
            )
            .field("edge_count", &self.graph.edge_count())
            .field(
                "edges",
                &self
                    .graph
                    .edge_references()
                    .map(|edge| {
                        format!(
                            "{} --- {:?} --> {}",
                            self.graph[edge.source()],
                            edge.weight(),
                            self.graph[edge.target()]
                        )
                    })
                    .collect_vec(),
            )
            .finish()
    }
}
