//! Deterministic finite automata and their simulation.

use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use super::{AutomatonError, DfaState, Symbol};

/// A deterministic finite automaton.
/// DFAs produced by [subset_construction](super::subset_construction) have a total transition table.
/// DFAs loaded from a description may be partial; simulating them fails on a missing transition.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// The input symbols, never contains epsilon
    alphabet: IndexSet<Symbol>,
    states: IndexSet<DfaState>,
    initial_state: DfaState,
    final_states: IndexSet<DfaState>,
    /// (source, symbol) -> destination
    transitions: IndexMap<(DfaState, Symbol), DfaState>,
}

impl Dfa {
    /// Create a DFA with the given initial state and nothing else.
    pub fn new(initial_state: DfaState) -> Self {
        let mut states = IndexSet::new();
        states.insert(initial_state.clone());
        Self {
            alphabet: IndexSet::new(),
            states,
            initial_state,
            final_states: IndexSet::new(),
            transitions: IndexMap::new(),
        }
    }

    /// Add a symbol to the alphabet. Epsilon is rejected.
    pub fn add_symbol(&mut self, symbol: Symbol) -> Result<(), AutomatonError> {
        if symbol.is_epsilon() {
            return Err(AutomatonError::InvalidSymbol(symbol));
        }
        self.alphabet.insert(symbol);
        Ok(())
    }

    /// Add a state. Returns false if the state already existed.
    pub fn add_state(&mut self, state: DfaState) -> bool {
        self.states.insert(state)
    }

    fn require_state(&self, state: &DfaState) -> Result<(), AutomatonError> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(AutomatonError::UnknownNode(state.to_string()))
        }
    }

    /// Mark a state as final (accepting).
    pub fn add_final_state(&mut self, state: DfaState) -> Result<(), AutomatonError> {
        self.require_state(&state)?;
        self.final_states.insert(state);
        Ok(())
    }

    /// Set the transition from `source` on `symbol`, replacing any previous one.
    pub fn add_transition(
        &mut self,
        source: DfaState,
        symbol: Symbol,
        destination: DfaState,
    ) -> Result<(), AutomatonError> {
        self.require_state(&source)?;
        self.require_state(&destination)?;
        if !self.alphabet.contains(&symbol) {
            return Err(AutomatonError::InvalidSymbol(symbol));
        }
        self.transitions.insert((source, symbol), destination);
        Ok(())
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: &DfaState, symbol: &Symbol) -> Option<&DfaState> {
        self.transitions.get(&(source.clone(), symbol.clone()))
    }

    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    pub fn states(&self) -> &IndexSet<DfaState> {
        &self.states
    }

    pub fn initial_state(&self) -> &DfaState {
        &self.initial_state
    }

    pub fn final_states(&self) -> &IndexSet<DfaState> {
        &self.final_states
    }

    pub fn is_final(&self, state: &DfaState) -> bool {
        self.final_states.contains(state)
    }

    /// Get all transitions as an iterator, in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (&DfaState, &Symbol, &DfaState)> + '_ {
        self.transitions
            .iter()
            .map(|((src, sym), dst)| (src, sym, dst))
    }

    /// Pairs of state and symbol without a transition.
    pub fn missing_transitions(&self) -> impl Iterator<Item = (&DfaState, &Symbol)> + '_ {
        self.states
            .iter()
            .cartesian_product(self.alphabet.iter())
            .filter(move |(state, symbol)| self.transition(state, symbol).is_none())
    }

    /// Check that every state has a transition on every symbol.
    pub fn is_total(&self) -> bool {
        self.missing_transitions().next().is_none()
    }

    /// Check that every symbol of `input` is in the alphabet.
    pub fn validate_input(&self, input: &[Symbol]) -> Result<(), AutomatonError> {
        match input.iter().find(|s| !self.alphabet.contains(*s)) {
            Some(symbol) => Err(AutomatonError::InvalidSymbol(symbol.clone())),
            None => Ok(()),
        }
    }

    /// Run the automaton on `input` and report whether it ends in a final state.
    /// A missing transition is an error rather than a rejection.
    pub fn accepts(&self, input: &[Symbol]) -> Result<bool, AutomatonError> {
        let mut current = &self.initial_state;
        for symbol in input {
            if !self.alphabet.contains(symbol) {
                return Err(AutomatonError::InvalidSymbol(symbol.clone()));
            }
            current = self.transition(current, symbol).ok_or_else(|| {
                AutomatonError::UndefinedTransition {
                    state: current.to_string(),
                    symbol: symbol.clone(),
                }
            })?;
        }
        Ok(self.is_final(current))
    }
}

fn sorted_names<T: Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).sorted().join(" ")
}

/// Writes the textual description of the DFA.
/// All lists are sorted by name so the output does not depend on construction order.
impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", sorted_names(self.alphabet.iter()))?;
        writeln!(f, "{}", sorted_names(self.states.iter()))?;
        writeln!(f, "{}", self.initial_state)?;
        writeln!(f, "{}", sorted_names(self.final_states.iter()))?;
        let lines = self
            .transitions
            .iter()
            .map(|((src, sym), dst)| (src.to_string(), sym.to_string(), dst.to_string()))
            .sorted();
        for (src, sym, dst) in lines {
            writeln!(f, "{} {} {}", src, sym, dst)?;
        }
        Ok(())
    }
}
