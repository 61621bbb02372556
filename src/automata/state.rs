//! State identifiers and the codec between sets of NFA states and DFA state names.

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use itertools::Itertools;

use super::{AutomatonError, CodecError};

/// Separates the members of a composite state name.
pub const STATE_DELIMITER: char = '.';

/// How the dead state is written in automaton descriptions.
pub const DEAD_TOKEN: &str = "∅";

/// An identifier of an NFA state.
pub type StateId = String;

/// Checks that `id` can be used as the name of an NFA state.
/// Names must be non-empty, free of whitespace and of the [STATE_DELIMITER], and must not be the [DEAD_TOKEN].
/// This keeps the encoding of state sets injective and the dead state distinct from every encoded set.
pub fn validate_state_id(id: &str) -> Result<(), AutomatonError> {
    if id.is_empty()
        || id == DEAD_TOKEN
        || id.contains(STATE_DELIMITER)
        || id.contains(char::is_whitespace)
    {
        Err(AutomatonError::InvalidStateName(id.to_string()))
    } else {
        Ok(())
    }
}

/// A set of NFA states.
/// Members are kept sorted, so equal sets always have the same encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet {
    states: BTreeSet<StateId>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(state: impl Into<StateId>) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    pub fn insert(&mut self, state: impl Into<StateId>) -> bool {
        self.states.insert(state.into())
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn union_with(&mut self, other: &StateSet) {
        self.states.extend(other.states.iter().cloned());
    }

    /// Returns true if the two sets share at least one state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.states.intersection(&other.states).next().is_some()
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.states.is_subset(&other.states)
    }

    /// Encodes the set as a single state name by joining the sorted members with [STATE_DELIMITER].
    /// A singleton set is encoded as its only member.
    pub fn encode(&self) -> String {
        self.states.iter().join(&STATE_DELIMITER.to_string())
    }

    /// Inverse of [StateSet::encode].
    pub fn decode(name: &str) -> Result<Self, CodecError> {
        let mut set = Self::new();
        for member in name.split(STATE_DELIMITER) {
            if member.is_empty() {
                return Err(CodecError::EmptyMember(name.to_string()));
            }
            set.insert(member);
        }
        Ok(set)
    }
}

impl Display for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl<S: Into<StateId>> FromIterator<S> for StateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<StateId>> Extend<S> for StateSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.states.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a StateId;
    type IntoIter = std::collections::btree_set::Iter<'a, StateId>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// A state of a DFA.
/// The subset construction only produces [DfaState::Set] and [DfaState::Dead].
/// States of a DFA loaded from a description keep their names verbatim as [DfaState::Named].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DfaState {
    /// A non-empty set of NFA states
    Set(StateSet),
    /// The synthetic state that absorbs all input
    Dead,
    /// An opaque state name
    Named(String),
}

impl DfaState {
    pub fn named(name: impl Into<String>) -> Self {
        DfaState::Named(name.into())
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, DfaState::Dead)
    }
}

impl From<StateSet> for DfaState {
    fn from(set: StateSet) -> Self {
        DfaState::Set(set)
    }
}

impl FromStr for DfaState {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == DEAD_TOKEN {
            Ok(DfaState::Dead)
        } else {
            StateSet::decode(s).map(DfaState::Set)
        }
    }
}

impl Display for DfaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DfaState::Set(set) => write!(f, "{}", set),
            DfaState::Dead => write!(f, "{}", DEAD_TOKEN),
            DfaState::Named(name) => write!(f, "{}", name),
        }
    }
}
