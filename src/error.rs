use thiserror::Error;

use crate::{automata::AutomatonError, parse::FormatError};

#[derive(Error, Debug)]
#[error(transparent)]
pub struct PublicError(#[from] pub ErrorRepr);

#[derive(Debug, Error)]
pub enum ErrorRepr {
    /// The automaton description is malformed.
    #[error("invalid automaton description: {0}")]
    FormatError(FormatError),

    /// A structural error while building or running an automaton.
    #[error("{0}")]
    AutomatonError(AutomatonError),

    #[error("I/O error: {0}")]
    IoError(std::io::Error),
}

// Resolve transitive conversion

impl From<FormatError> for PublicError {
    fn from(err: FormatError) -> Self {
        PublicError(ErrorRepr::FormatError(err))
    }
}

impl From<AutomatonError> for PublicError {
    fn from(err: AutomatonError) -> Self {
        PublicError(ErrorRepr::AutomatonError(err))
    }
}

impl From<std::io::Error> for PublicError {
    fn from(err: std::io::Error) -> Self {
        PublicError(ErrorRepr::IoError(err))
    }
}
