//! Nondeterministic finite automata with epsilon transitions.

use indexmap::IndexSet;

use super::{
    state::validate_state_id, AutomatonError, LabeledGraph, StateId, StateSet, Symbol,
};

/// A nondeterministic finite automaton.
/// Transitions are stored in a [LabeledGraph] over the state names.
/// The alphabet always contains [Symbol::Epsilon].
#[derive(Debug, Clone)]
pub struct Nfa {
    alphabet: IndexSet<Symbol>,
    states: IndexSet<StateId>,
    initial_state: Option<StateId>,
    final_states: StateSet,
    graph: LabeledGraph<StateId, Symbol>,
}

impl Default for Nfa {
    fn default() -> Self {
        let mut alphabet = IndexSet::new();
        alphabet.insert(Symbol::Epsilon);
        Self {
            alphabet,
            states: IndexSet::new(),
            initial_state: None,
            final_states: StateSet::new(),
            graph: LabeledGraph::new(),
        }
    }
}

impl Nfa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_alphabet(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.alphabet.extend(symbols);
    }

    /// Declares states. Every state must be declared before it is used anywhere else.
    pub fn add_states<S: Into<StateId>>(
        &mut self,
        states: impl IntoIterator<Item = S>,
    ) -> Result<(), AutomatonError> {
        for state in states {
            let state = state.into();
            validate_state_id(&state)?;
            self.graph.add_node(state.clone());
            self.states.insert(state);
        }
        Ok(())
    }

    fn require_state(&self, state: &str) -> Result<(), AutomatonError> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(AutomatonError::UnknownNode(state.to_string()))
        }
    }

    pub fn set_initial_state(&mut self, state: impl Into<StateId>) -> Result<(), AutomatonError> {
        let state = state.into();
        self.require_state(&state)?;
        self.initial_state = Some(state);
        Ok(())
    }

    pub fn add_final_states<S: Into<StateId>>(
        &mut self,
        states: impl IntoIterator<Item = S>,
    ) -> Result<(), AutomatonError> {
        for state in states {
            let state = state.into();
            self.require_state(&state)?;
            self.final_states.insert(state);
        }
        Ok(())
    }

    /// Adds the transition `from --symbol--> to`.
    /// Both states must be declared and `symbol` must be epsilon or part of the alphabet.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: Symbol,
        to: &str,
    ) -> Result<(), AutomatonError> {
        if !self.alphabet.contains(&symbol) {
            return Err(AutomatonError::InvalidSymbol(symbol));
        }
        self.graph
            .add_edge(&from.to_string(), symbol, &to.to_string())
    }

    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    pub fn states(&self) -> &IndexSet<StateId> {
        &self.states
    }

    pub fn initial_state(&self) -> Option<&StateId> {
        self.initial_state.as_ref()
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Iterates over all transitions as `(from, symbol, to)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, &Symbol, &StateId)> + '_ {
        self.graph.edges()
    }

    /// Returns the given states together with all states reachable from them by epsilon transitions.
    pub fn epsilon_closure(&self, states: &StateSet) -> Result<StateSet, AutomatonError> {
        let mut closure = states.clone();
        for state in states {
            closure.extend(self.graph.closure(state, &Symbol::Epsilon)?);
        }
        Ok(closure)
    }

    /// Returns the states reachable from `states` by exactly one transition on `symbol`.
    /// Epsilon transitions are not followed.
    pub fn step(&self, states: &StateSet, symbol: &Symbol) -> Result<StateSet, AutomatonError> {
        let mut next = StateSet::new();
        for state in states {
            next.extend(self.graph.one_step(state, symbol)?);
        }
        Ok(next)
    }

    /// Moves on `symbol` and then follows any number of epsilon transitions.
    pub fn closed_step(
        &self,
        states: &StateSet,
        symbol: &Symbol,
    ) -> Result<StateSet, AutomatonError> {
        let moved = self.step(states, symbol)?;
        self.epsilon_closure(&moved)
    }

    /// The epsilon closure of the initial state, or the empty set if no initial state is set.
    pub fn initial_closure(&self) -> Result<StateSet, AutomatonError> {
        match &self.initial_state {
            Some(q0) => self.epsilon_closure(&StateSet::singleton(q0.clone())),
            None => Ok(StateSet::new()),
        }
    }

    /// Decides whether the automaton accepts `input` by tracking the set of reachable states.
    pub fn accepts(&self, input: &[Symbol]) -> Result<bool, AutomatonError> {
        if let Some(symbol) = input
            .iter()
            .find(|s| s.is_epsilon() || !self.alphabet.contains(*s))
        {
            return Err(AutomatonError::InvalidSymbol(symbol.clone()));
        }
        let mut current = self.initial_closure()?;
        for symbol in input {
            current = self.closed_step(&current, symbol)?;
            if current.is_empty() {
                break;
            }
        }
        Ok(current.intersects(&self.final_states))
    }
}

/// Builds an NFA from its components.
pub fn build_nfa<A, S, F, T>(
    alphabet: A,
    states: S,
    initial: &str,
    finals: F,
    transitions: T,
) -> Result<Nfa, AutomatonError>
where
    A: IntoIterator<Item = Symbol>,
    S: IntoIterator,
    S::Item: Into<StateId>,
    F: IntoIterator,
    F::Item: Into<StateId>,
    T: IntoIterator<Item = (StateId, Symbol, StateId)>,
{
    let mut nfa = Nfa::new();
    nfa.add_alphabet(alphabet);
    nfa.add_states(states)?;
    nfa.set_initial_state(initial)?;
    nfa.add_final_states(finals)?;
    for (from, symbol, to) in transitions {
        nfa.add_transition(&from, symbol, &to)?;
    }
    Ok(nfa)
}
