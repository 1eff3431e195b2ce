use hashbrown::HashMap;
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::{
    automaton::{
        Alphabet, Automaton, InitializedAutomaton, Language, Letter, dfa::DFA,
        determinize::SubsetConstruction, meta_state::MetaState, state::State,
    },
    config::DeterminizeConfig,
    error::AutomatonResult,
};

pub mod closure;

/// The label of an NFA transition: either an input symbol or the epsilon
/// marker, which consumes no input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NFAEdge<L: Letter> {
    Symbol(L),
    Epsilon,
}

impl<L: Letter> NFAEdge<L> {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, NFAEdge::Epsilon)
    }

    /// Checks whether this edge can be taken when reading `letter`.
    pub fn matches(&self, letter: &L) -> bool {
        match self {
            NFAEdge::Symbol(symbol) => symbol == letter,
            NFAEdge::Epsilon => false,
        }
    }
}

impl<L: Letter> From<L> for NFAEdge<L> {
    fn from(value: L) -> Self {
        NFAEdge::Symbol(value)
    }
}

/// A nondeterministic finite automaton with epsilon transitions.
///
/// States are stored in a petgraph arena and addressed by [NodeIndex]
/// handles; names are resolved through an index. Every builder auto-creates
/// the states it names, so declarations can come in any order.
#[derive(Debug, Clone)]
pub struct NFA<L: Letter = char> {
    start: Option<NodeIndex>,
    graph: DiGraph<State, NFAEdge<L>>,
    names: HashMap<String, NodeIndex>,
    alphabet: Vec<L>,
}

impl<L: Letter> Default for NFA<L> {
    fn default() -> Self {
        NFA::new()
    }
}

impl<L: Letter> NFA<L> {
    pub fn new() -> Self {
        NFA {
            start: None,
            graph: DiGraph::new(),
            names: HashMap::new(),
            alphabet: Vec::new(),
        }
    }

    pub fn graph(&self) -> &DiGraph<State, NFAEdge<L>> {
        &self.graph
    }

    /// Adds a state with the given name. Re-adding an existing name is a
    /// no-op returning the existing handle.
    pub fn add_state(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.names.get(name) {
            return index;
        }

        let index = self.graph.add_node(State::new(name));
        self.names.insert(name.to_string(), index);
        index
    }

    /// Designates the named state as the start state, creating it if needed.
    /// A previous start state stays in the graph.
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
            "State {:?} is not part of the NFA",
            start
        );
        self.start = Some(start);
    }

    pub fn set_final(&mut self, state: NodeIndex) {
        self.graph[state].set_final();
    }

    /// Adds a transition between two named states, creating both if needed.
    /// Transitions accumulate per (state, symbol) pair; declaring the same
    /// transition twice keeps a single edge.
    pub fn add_transition(
        &mut self,
        from: &str,
        edge: impl Into<NFAEdge<L>>,
        to: &str,
    ) -> EdgeIndex {
        let from = self.add_state(from);
        let to = self.add_state(to);
        self.add_edge(from, to, edge.into())
    }

    /// Handle based version of [NFA::add_transition].
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, label: NFAEdge<L>) -> EdgeIndex {
        if let Some(existing) = self
            .graph
            .edges_connecting(from, to)
            .find(|edge| *edge.weight() == label)
        {
            return existing.id();
        }

        if let NFAEdge::Symbol(letter) = &label
            && !self.alphabet.contains(letter)
        {
            self.alphabet.push(letter.clone());
        }

        self.graph.add_edge(from, to, label)
    }

    /// The states reachable from `state` over a single edge labeled `edge`,
    /// without taking epsilon closures.
    pub fn successors(&self, state: NodeIndex, edge: &NFAEdge<L>) -> MetaState {
        self.graph
            .edges_directed(state, Direction::Outgoing)
            .filter(|e| e.weight() == edge)
            .map(|e| e.target())
            .collect()
    }

    /// The union of the `letter` successors of every state in `states`,
    /// without taking epsilon closures.
    pub fn step(&self, states: &MetaState, letter: &L) -> MetaState {
        let mut targets = vec![];

        for state in states.iter() {
            for edge in self.graph.edges_directed(state, Direction::Outgoing) {
                if edge.weight().matches(letter) {
                    targets.push(edge.target());
                }
            }
        }

        MetaState::from_unsorted(targets)
    }

    /// Checks if a set of states contains an accepting state.
    pub fn is_accepting_set(&self, states: &MetaState) -> bool {
        states.is_final(self)
    }

    /// Converts this NFA into an equivalent DFA using subset construction
    /// with the default configuration.
    pub fn determinize(&self) -> AutomatonResult<DFA<L>> {
        self.determinize_with_config(&DeterminizeConfig::default())
    }

    pub fn determinize_with_config(
        &self,
        config: &DeterminizeConfig,
    ) -> AutomatonResult<DFA<L>> {
        SubsetConstruction::new(self, config).run()
    }
}

impl NFA<char> {
    pub fn accepts_str(&self, input: &str) -> bool {
        let word: Vec<char> = input.chars().collect();
        self.accepts(&word)
    }
}

impl<L: Letter> Alphabet for NFA<L> {
    type Letter = L;

    fn alphabet(&self) -> &[L] {
        self.alphabet.as_slice()
    }
}

impl<L: Letter> Automaton for NFA<L> {
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

impl<L: Letter> InitializedAutomaton for NFA<L> {
    fn get_initial(&self) -> Option<NodeIndex> {
        self.start
    }
}

impl<L: Letter> Language for NFA<L> {
    fn accepts<'a>(&self, input: impl IntoIterator<Item = &'a L>) -> bool
    where
        L: 'a,
    {
        let Some(start) = self.start else {
            return false;
        };
        let mut current_states = self.epsilon_closure(start);

        for symbol in input {
            let next_states =
                self.epsilon_closure_of_set(self.step(&current_states, symbol).iter());

            if next_states.is_empty() {
                return false;
            }

            current_states = next_states;
        }

        self.is_accepting_set(&current_states)
    }
}
