use crate::automata::AutomatonError;

/// The error type for malformed automaton descriptions.
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Missing {0} line")]
    MissingLine(&'static str),

    #[error("Expected exactly one initial state on line {line}: '{content}'")]
    InvalidInitialState { line: usize, content: String },

    #[error("Invalid transition format on line {line}: '{content}'")]
    InvalidTransition { line: usize, content: String },

    #[error("Symbol '{symbol}' on line {line} is not in the alphabet")]
    SymbolNotInAlphabet { line: usize, symbol: String },

    #[error("Line {line}: {source}")]
    Structure {
        line: usize,
        #[source]
        source: AutomatonError,
    },
}

pub(super) trait AtLine<T> {
    fn at_line(self, line: usize) -> Result<T, FormatError>;
}

impl<T> AtLine<T> for Result<T, AutomatonError> {
    fn at_line(self, line: usize) -> Result<T, FormatError> {
        self.map_err(|source| FormatError::Structure { line, source })
    }
}
