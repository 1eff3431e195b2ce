use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

/// A state of an NFA or DFA.
///
/// Identity is the name alone: two states with the same name are equal no
/// matter their final flag. The final flag can only ever be switched on.
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    accepting: bool,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            accepting: false,
        }
    }

    pub fn accepting(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            accepting: true,
        }
    }

    pub fn with_final(name: impl Into<String>, accepting: bool) -> Self {
        State {
            name: name.into(),
            accepting,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_final(&self) -> bool {
        self.accepting
    }

    pub fn set_final(&mut self) {
        self.accepting = true;
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[test]
fn test_state_identity_is_name() {
    let mut a = State::new("q0");
    let b = State::accepting("q0");

    assert_eq!(a, b);
    assert!(!a.is_final());

    a.set_final();
    a.set_final();
    assert!(a.is_final());
    assert_ne!(a, State::new("q1"));
}
