use subset_construction::{
    automaton::{
        Automaton,
        meta_state::MetaState,
        nfa::{NFA, NFAEdge},
    },
    error::AutomatonError,
};

fn names(nfa: &NFA<char>, set: &MetaState) -> Vec<String> {
    set.member_names(nfa)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_closure_contains_state_itself() {
    let mut nfa = NFA::<char>::new();
    let a = nfa.add_state("a");
    nfa.add_transition("a", 'x', "b");

    assert_eq!(names(&nfa, &nfa.epsilon_closure(a)), vec!["a"]);
}

#[test]
fn test_closure_is_transitive() {
    let mut nfa = NFA::<char>::new();
    let a = nfa.add_state("a");
    nfa.add_transition("a", NFAEdge::Epsilon, "b");
    nfa.add_transition("b", NFAEdge::Epsilon, "c");
    nfa.add_transition("c", 'x', "d");
    nfa.add_transition("b", 'y', "e");

    assert_eq!(names(&nfa, &nfa.epsilon_closure(a)), vec!["a", "b", "c"]);
}

#[test]
fn test_closure_terminates_on_cycles() {
    let mut nfa = NFA::<char>::new();
    let a = nfa.add_state("a");
    nfa.add_transition("a", NFAEdge::Epsilon, "b");
    nfa.add_transition("b", NFAEdge::Epsilon, "a");
    nfa.add_transition("b", NFAEdge::Epsilon, "b");
    nfa.add_transition("b", NFAEdge::Epsilon, "c");

    let closure = nfa.epsilon_closure(a);
    assert_eq!(names(&nfa, &closure), vec!["a", "b", "c"]);

    let b = nfa.require_state("b").unwrap();
    assert_eq!(nfa.epsilon_closure(b), closure);
}

#[test]
fn test_closure_is_idempotent() {
    let mut nfa = NFA::<char>::new();
    nfa.add_transition("0", NFAEdge::Epsilon, "1");
    nfa.add_transition("1", NFAEdge::Epsilon, "2");
    nfa.add_transition("2", NFAEdge::Epsilon, "0");
    nfa.add_transition("3", NFAEdge::Epsilon, "4");
    nfa.add_transition("4", 'a', "5");
    nfa.add_transition("5", NFAEdge::Epsilon, "3");

    for seeds in [vec!["0"], vec!["3"], vec!["0", "5"], vec!["4", "5"], vec![]] {
        let seeds = seeds.into_iter().map(|name| nfa.require_state(name).unwrap());
        let once = nfa.epsilon_closure_of_set(seeds);
        let twice = nfa.epsilon_closure_of_set(once.iter());

        assert_eq!(once, twice);
    }
}

#[test]
fn test_set_closure_is_union_of_closures() {
    let mut nfa = NFA::<char>::new();
    nfa.add_transition("a", NFAEdge::Epsilon, "b");
    nfa.add_transition("c", NFAEdge::Epsilon, "d");
    nfa.add_transition("d", NFAEdge::Epsilon, "b");

    let a = nfa.require_state("a").unwrap();
    let c = nfa.require_state("c").unwrap();

    let union = nfa.epsilon_closure(a).union(&nfa.epsilon_closure(c));
    assert_eq!(nfa.epsilon_closure_of_set([a, c]), union);
    assert_eq!(names(&nfa, &union), vec!["a", "b", "c", "d"]);
    assert!(nfa.epsilon_closure_of_set(MetaState::empty().iter()).is_empty());
}

#[test]
fn test_closure_by_name() {
    let mut nfa = NFA::<char>::new();
    nfa.add_transition("a", NFAEdge::Epsilon, "b");

    let closure = nfa.epsilon_closure_by_name("a").unwrap();
    assert_eq!(names(&nfa, &closure), vec!["a", "b"]);

    assert_eq!(
        nfa.epsilon_closure_by_name("missing"),
        Err(AutomatonError::UnknownState("missing".to_string()))
    );
}
