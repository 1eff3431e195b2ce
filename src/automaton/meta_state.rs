use itertools::Itertools;
use petgraph::graph::NodeIndex;

use crate::automaton::Automaton;

/// A set of NFA states used as a single DFA state during subset construction.
///
/// Members are kept sorted and duplicate free, so two meta-states are equal
/// (and hash equally) iff they contain exactly the same states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetaState {
    members: Vec<NodeIndex>,
}

impl MetaState {
    pub fn empty() -> Self {
        MetaState::default()
    }

    pub fn from_unsorted(mut members: Vec<NodeIndex>) -> Self {
        members.sort();
        members.dedup();
        MetaState { members }
    }

    pub fn members(&self) -> &[NodeIndex] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, state: NodeIndex) -> bool {
        self.members.binary_search(&state).is_ok()
    }

    pub fn union(&self, other: &MetaState) -> MetaState {
        self.iter().chain(other.iter()).collect()
    }

    /// Checks if the set contains a final state of `automaton`.
    pub fn is_final(&self, automaton: &impl Automaton) -> bool {
        self.iter()
            .any(|state| automaton.get_node_unchecked(state).is_final())
    }

    /// The member names, sorted.
    pub fn member_names<'a>(&self, automaton: &'a impl Automaton) -> Vec<&'a str> {
        self.iter()
            .map(|state| automaton.get_node_unchecked(state).name())
            .sorted()
            .collect_vec()
    }

    /// The external name of the DFA state built from this set. It depends on
    /// the member names only, never on handles or discovery order.
    pub fn canonical_name(&self, automaton: &impl Automaton) -> String {
        canonical_name(self.member_names(automaton))
    }
}

impl FromIterator<NodeIndex> for MetaState {
    fn from_iter<T: IntoIterator<Item = NodeIndex>>(iter: T) -> Self {
        MetaState::from_unsorted(iter.into_iter().collect())
    }
}

/// Renders a set of state names as `[a, b, c]`, sorted lexicographically.
/// The empty set renders as `[]`.
///
/// Member names are escaped (see [escape_member]), so two different sets
/// never render to the same string.
pub fn canonical_name<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    format!(
        "[{}]",
        names.into_iter().sorted().map(escape_member).join(", ")
    )
}

/// Prefixes `\`, `,`, `[` and `]` with a backslash. The empty name becomes
/// `\0`, which no escaped non-empty name can produce.
fn escape_member(name: &str) -> String {
    if name.is_empty() {
        return "\\0".to_string();
    }

    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | ',' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
