use subset_construction::automaton::{
    Alphabet, Automaton, InitializedAutomaton, Language,
    meta_state::MetaState,
    nfa::{NFA, NFAEdge},
};

#[test]
fn test_add_state_is_idempotent() {
    let mut nfa = NFA::<char>::new();
    let a = nfa.add_state("a");
    let again = nfa.add_state("a");
    let b = nfa.add_state("b");

    assert_eq!(a, again);
    assert_ne!(a, b);
    assert_eq!(nfa.node_count(), 2);
    assert_eq!(nfa.state_index("a"), Some(a));
    assert_eq!(nfa.state_index("c"), None);
}

#[test]
fn test_final_state_auto_creates_and_is_monotonic() {
    let mut nfa = NFA::<char>::new();
    let f = nfa.add_final_state("f");
    nfa.add_state("f");
    nfa.add_final_state("f");

    assert_eq!(nfa.node_count(), 1);
    assert!(nfa.is_accepting(f));

    let finals = nfa.final_states().map(|s| s.name()).collect::<Vec<_>>();
    assert_eq!(finals, vec!["f"]);
}

#[test]
fn test_start_state_replacement_keeps_old_state() {
    let mut nfa = NFA::<char>::new();
    assert!(nfa.start_state().is_none());

    nfa.add_start_state("s0");
    let s1 = nfa.add_start_state("s1");

    assert_eq!(nfa.get_initial(), Some(s1));
    assert_eq!(nfa.start_state().unwrap().name(), "s1");
    assert!(nfa.state_index("s0").is_some());
    assert_eq!(nfa.node_count(), 2);
}

#[test]
fn test_alphabet_is_insertion_ordered_and_excludes_epsilon() {
    let mut nfa = NFA::<char>::new();
    nfa.add_transition("a", 'z', "b");
    nfa.add_transition("b", NFAEdge::Epsilon, "c");
    nfa.add_transition("c", 'a', "a");
    nfa.add_transition("a", 'z', "c");
    nfa.add_transition("c", 'm', "b");

    assert_eq!(nfa.alphabet(), &['z', 'a', 'm']);
}

#[test]
fn test_transitions_accumulate() {
    let mut nfa = NFA::<char>::new();
    let p = nfa.add_state("p");
    let q = nfa.add_state("q");

    nfa.add_transition("p", '0', "p");
    nfa.add_transition("p", '0', "q");
    let first = nfa.add_transition("p", '1', "q");
    let duplicate = nfa.add_transition("p", '1', "q");

    assert_eq!(first, duplicate);
    assert_eq!(nfa.graph().edge_count(), 3);
    assert_eq!(
        nfa.successors(p, &NFAEdge::Symbol('0')),
        MetaState::from_unsorted(vec![p, q])
    );
    assert_eq!(
        nfa.successors(p, &NFAEdge::Symbol('1')),
        MetaState::from_unsorted(vec![q])
    );
    assert!(nfa.successors(q, &NFAEdge::Symbol('0')).is_empty());
    assert!(nfa.successors(p, &NFAEdge::Epsilon).is_empty());
}

#[test]
fn test_transition_auto_creates_endpoints() {
    let mut nfa = NFA::<char>::new();
    nfa.add_transition("from", 'x', "to");

    assert!(nfa.state_index("from").is_some());
    assert!(nfa.state_index("to").is_some());
    assert_eq!(nfa.states().count(), 2);
}

#[test]
fn test_nfa_accepts() {
    // a (b | ε) a*
    let mut nfa = NFA::<char>::new();
    nfa.add_start_state("0");
    nfa.add_final_state("2");
    nfa.add_transition("0", 'a', "1");
    nfa.add_transition("1", 'b', "2");
    nfa.add_transition("1", NFAEdge::Epsilon, "2");
    nfa.add_transition("2", 'a', "2");

    assert!(nfa.accepts_str("a"));
    assert!(nfa.accepts_str("ab"));
    assert!(nfa.accepts_str("abaa"));
    assert!(nfa.accepts_str("aaa"));
    assert!(!nfa.accepts_str(""));
    assert!(!nfa.accepts_str("b"));
    assert!(!nfa.accepts_str("abb"));
    // letters outside of the alphabet are never accepted
    assert!(!nfa.accepts_str("ac"));
}

#[test]
fn test_nfa_without_start_accepts_nothing() {
    let mut nfa = NFA::<char>::new();
    nfa.add_final_state("f");

    assert!(!nfa.accepts_str(""));
}

#[test]
fn test_generic_letters() {
    let mut nfa = NFA::<u32>::new();
    nfa.add_start_state("s");
    nfa.add_final_state("t");
    nfa.add_transition("s", 7u32, "t");
    nfa.add_transition("s", NFAEdge::Epsilon, "s");

    assert_eq!(nfa.alphabet(), &[7]);
    assert!(nfa.accepts(&[7]));
    assert!(!nfa.accepts(&[7, 7]));
}
