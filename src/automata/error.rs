use super::Symbol;

/// The error type that can occur when building or running automata
#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    #[error("Unknown state '{0}'")]
    UnknownNode(String),

    #[error("Symbol '{0}' is not in the alphabet")]
    InvalidSymbol(Symbol),

    #[error("No transition defined from state '{state}' on symbol '{symbol}'")]
    UndefinedTransition { state: String, symbol: Symbol },

    #[error("No initial state")]
    MissingInitialState,

    #[error("Invalid state name '{0}'")]
    InvalidStateName(String),
}

/// The error type for decoding composite state names
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Composite state name '{0}' has an empty member")]
    EmptyMember(String),
}
