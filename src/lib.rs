pub mod automata;
mod error;
mod options;
mod parse;

use std::{io::Write, path::Path};

pub use automata::{subset_construction, Dfa, Nfa};
pub use error::{ErrorRepr, PublicError};
pub use options::{InputSplit, Options, DEFAULT_OUTPUT};
pub use parse::{load_dfa, load_nfa, parse_dfa, parse_nfa, FormatError};

/// Loads the NFA described in `path` and converts it into a DFA.
pub fn convert_file(path: &Path) -> Result<Dfa, PublicError> {
    let nfa = load_nfa(path)?;
    Ok(subset_construction(&nfa)?)
}

/// Writes the description of `dfa` to the output configured in `options`.
pub fn write_dfa(dfa: &Dfa, options: &Options) -> Result<(), PublicError> {
    match &options.output {
        Some(path) => {
            std::fs::write(path, dfa.to_string())?;
            log::info!("Wrote DFA to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", dfa)?;
        }
    }
    Ok(())
}

/// Checks whether `dfa` accepts `input`.
/// The input is split into symbols according to `options` and validated against the alphabet before it is run.
pub fn check_input(dfa: &Dfa, input: &str, options: &Options) -> Result<bool, PublicError> {
    let symbols = options.split_input(input);
    dfa.validate_input(&symbols)?;
    Ok(dfa.accepts(&symbols)?)
}
