//! Symbols of an automaton's alphabet.

use std::{fmt::Display, str::FromStr};

/// The token used for epsilon transitions in automaton descriptions.
pub const EPSILON_TOKEN: &str = "λ";

/// Alternative spelling of [EPSILON_TOKEN] that is accepted on input.
pub const EPSILON_ALIAS: &str = "ε";

/// A symbol labelling a transition.
/// The reserved [Symbol::Epsilon] denotes a spontaneous transition and is never part of a DFA's alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Epsilon,
    Letter(String),
}

impl Symbol {
    pub fn letter(s: impl Into<String>) -> Self {
        Symbol::Letter(s.into())
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EPSILON_TOKEN || s == EPSILON_ALIAS {
            Ok(Symbol::Epsilon)
        } else {
            Ok(Symbol::Letter(s.to_string()))
        }
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(sym) => sym,
            Err(never) => match never {},
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        let mut buf = [0; 4];
        Symbol::from(&*c.encode_utf8(&mut buf))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "{}", EPSILON_TOKEN),
            Symbol::Letter(l) => write!(f, "{}", l),
        }
    }
}

/// Splits an input string into symbols, one per character.
pub fn symbols_of_chars(input: &str) -> Vec<Symbol> {
    input.chars().map(Symbol::from).collect()
}

/// Splits an input string into symbols at whitespace.
pub fn symbols_of_tokens(input: &str) -> Vec<Symbol> {
    input.split_whitespace().map(Symbol::from).collect()
}
