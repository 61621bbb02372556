//! Finite automata: ε-NFAs, DFAs, and the subset construction between them.
//!
//! - [LabeledGraph] stores the transitions of an NFA and computes closures over a label
//! - [StateSet] is the canonical (sorted) set of NFA states a DFA state stands for
//! - [subset_construction] converts an [Nfa] into an equivalent, total [Dfa]

mod dfa;
mod error;
mod graph;
mod nfa;
mod state;
mod subset;
mod symbol;

pub use dfa::Dfa;
pub use error::{AutomatonError, CodecError};
pub use graph::LabeledGraph;
pub use nfa::{build_nfa, Nfa};
pub use state::{validate_state_id, DfaState, StateId, StateSet, DEAD_TOKEN, STATE_DELIMITER};
pub use subset::subset_construction;
pub use symbol::{symbols_of_chars, symbols_of_tokens, Symbol, EPSILON_ALIAS, EPSILON_TOKEN};
