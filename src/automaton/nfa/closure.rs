//! Epsilon closures over an [NFA]. Nothing in here mutates the automaton.

use hashbrown::HashSet;
use petgraph::{Direction, graph::NodeIndex, visit::EdgeRef};

use crate::{
    automaton::{Automaton, Letter, meta_state::MetaState, nfa::NFA},
    error::AutomatonResult,
};

impl<L: Letter> NFA<L> {
    /// Calculates the epsilon closure of a state.
    /// Meaning the state itself and all states reachable from it using only
    /// epsilon transitions.
    pub fn epsilon_closure(&self, state: NodeIndex) -> MetaState {
        self.epsilon_closure_of_set([state])
    }

    /// Calculates the epsilon closure of a set of states, which is the union
    /// of the closures of its members.
    pub fn epsilon_closure_of_set(
        &self,
        states: impl IntoIterator<Item = NodeIndex>,
    ) -> MetaState {
        let mut closure = states.into_iter().collect::<Vec<_>>();
        self.extend_to_e_closure(&mut closure);
        MetaState::from_unsorted(closure)
    }

    /// Name based version of [NFA::epsilon_closure].
    pub fn epsilon_closure_by_name(&self, name: &str) -> AutomatonResult<MetaState> {
        let state = self.require_state(name)?;
        Ok(self.epsilon_closure(state))
    }

    /// Extends `states` in place to its epsilon closure. An explicit stack
    /// keeps deep epsilon chains off the call stack and the visited set stops
    /// epsilon cycles.
    pub fn extend_to_e_closure(&self, states: &mut Vec<NodeIndex>) {
        let mut visited = HashSet::with_capacity(states.len());
        states.retain(|state| visited.insert(*state));

        let mut stack = states.clone();

        while let Some(state) = stack.pop() {
            for edge in self.graph().edges_directed(state, Direction::Outgoing) {
                if !edge.weight().is_epsilon() {
                    continue;
                }

                let target = edge.target();
                if visited.insert(target) {
                    states.push(target);
                    stack.push(target);
                }
            }
        }
    }
}
