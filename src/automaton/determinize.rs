use std::collections::VecDeque;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use crate::{
    automaton::{
        Alphabet, Automaton, InitializedAutomaton, Letter, dfa::DFA, meta_state::MetaState,
        nfa::NFA, state::State,
    },
    config::DeterminizeConfig,
    error::{AutomatonError, AutomatonResult},
};

/// Converts an [NFA] into an equivalent [DFA].
///
/// Every DFA state stands for one set of NFA states (a [MetaState]) and is
/// named after its members, see [MetaState::canonical_name]. Meta-states are
/// explored breadth first and letters are taken in alphabet order, so the
/// same NFA always yields the same DFA, state order included.
///
/// The empty meta-state is an ordinary DFA state: when some transition has no
/// NFA successor it leads to a non-final dead state named `[]` that loops on
/// every letter. This keeps the resulting DFA complete.
pub struct SubsetConstruction<'a, L: Letter> {
    nfa: &'a NFA<L>,
    config: &'a DeterminizeConfig,
    dfa: DFA<L>,
    discovered: HashMap<MetaState, NodeIndex>,
    worklist: VecDeque<MetaState>,
}

impl<'a, L: Letter> SubsetConstruction<'a, L> {
    pub fn new(nfa: &'a NFA<L>, config: &'a DeterminizeConfig) -> Self {
        SubsetConstruction {
            nfa,
            config,
            dfa: DFA::with_alphabet(nfa.alphabet().to_vec()),
            discovered: HashMap::new(),
            worklist: VecDeque::new(),
        }
    }

    pub fn run(mut self) -> AutomatonResult<DFA<L>> {
        let nfa = self.nfa;
        let _span = tracing::debug_span!(
            "SubsetConstruction::run",
            nfa_states = nfa.node_count(),
            letters = nfa.alphabet().len()
        )
        .entered();

        let nfa_start = nfa
            .get_initial()
            .ok_or(AutomatonError::MissingStartState)?;

        let start_set = nfa.epsilon_closure(nfa_start);
        let dfa_start = self.discover(start_set)?;
        self.dfa.set_start(dfa_start);

        while let Some(current) = self.worklist.pop_front() {
            let source = self.discovered[&current];

            for letter in nfa.alphabet() {
                let target_set = nfa.epsilon_closure_of_set(nfa.step(&current, letter).iter());

                let target = match self.discovered.get(&target_set) {
                    Some(&target) => target,
                    None => self.discover(target_set)?,
                };

                tracing::trace!(
                    "{} --- {:?} --> {}",
                    self.dfa.get_node_unchecked(source),
                    letter,
                    self.dfa.get_node_unchecked(target)
                );

                self.dfa.add_edge(source, target, letter.clone());
            }
        }

        #[cfg(debug_assertions)]
        self.dfa.assert_complete();

        tracing::debug!(
            dfa_states = self.dfa.state_count(),
            dfa_edges = self.dfa.edge_count(),
            "Subset construction finished"
        );

        Ok(self.dfa)
    }

    /// Registers a meta-state that has not been seen before as a new DFA
    /// state and queues it for exploration.
    fn discover(&mut self, set: MetaState) -> AutomatonResult<NodeIndex> {
        if let Some(max) = self.config.get_max_states()
            && self.discovered.len() >= max
        {
            tracing::warn!(max, "DFA state limit exceeded, aborting subset construction");
            return Err(AutomatonError::StateLimitExceeded {
                states: self.discovered.len() + 1,
                max,
            });
        }

        let state = State::with_final(set.canonical_name(self.nfa), set.is_final(self.nfa));
        tracing::debug!(
            name = state.name(),
            accepting = state.is_final(),
            "Discovered meta-state"
        );

        let index = self.dfa.push_state(state);
        self.discovered.insert(set.clone(), index);
        self.worklist.push_back(set);

        let interval = self.config.get_progress_interval();
        if interval > 0 && self.discovered.len() % interval == 0 {
            tracing::info!(
                discovered = self.discovered.len(),
                pending = self.worklist.len(),
                "Subset construction progress"
            );
        }

        Ok(index)
    }
}
