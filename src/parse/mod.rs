//! Loaders for the textual automaton description.
//!
//! The format is line based:
//!
//! ```text
//! <alphabet symbols, space separated>
//! <states, space separated>
//! <initial state>
//! <final states, space separated>
//! <from> <symbol> <to>
//! ...
//! ```
//!
//! The same format is used for NFAs and DFAs. In an NFA, epsilon transitions use the symbol `λ`.
//! A DFA is written back in this format by its `Display` implementation.

mod error;

use std::path::Path;

pub use error::FormatError;
use error::AtLine;

use crate::{
    automata::{AutomatonError, Dfa, DfaState, Nfa, Symbol},
    error::PublicError,
};

/// The first four lines of a description.
struct Header<'a> {
    alphabet: Vec<&'a str>,
    states: Vec<&'a str>,
    initial: &'a str,
    finals: Vec<&'a str>,
}

const ALPHABET_LINE: usize = 1;
const STATES_LINE: usize = 2;
const INITIAL_LINE: usize = 3;
const FINALS_LINE: usize = 4;

type Lines<'a> = std::iter::Enumerate<std::str::Lines<'a>>;

fn parse_header<'a>(lines: &mut Lines<'a>) -> Result<Header<'a>, FormatError> {
    let mut next_line = |name| {
        lines
            .next()
            .map(|(_, line)| line)
            .ok_or(FormatError::MissingLine(name))
    };
    let alphabet = next_line("alphabet")?.split_whitespace().collect();
    let states = next_line("states")?.split_whitespace().collect();
    let initial_line = next_line("initial state")?;
    let finals = next_line("final states")?.split_whitespace().collect();

    let initial = match initial_line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [initial] => *initial,
        _ => {
            return Err(FormatError::InvalidInitialState {
                line: INITIAL_LINE,
                content: initial_line.to_string(),
            })
        }
    };

    Ok(Header {
        alphabet,
        states,
        initial,
        finals,
    })
}

/// Iterates over the transition lines as `(line number, [from, symbol, to])`.
/// Blank lines are skipped.
fn transitions<'a>(
    lines: Lines<'a>,
) -> impl Iterator<Item = Result<(usize, [&'a str; 3]), FormatError>> + 'a {
    lines
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(
            |(line_no, line)| match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [from, symbol, to] => Ok((line_no, [*from, *symbol, *to])),
                _ => Err(FormatError::InvalidTransition {
                    line: line_no,
                    content: line.to_string(),
                }),
            },
        )
}

/// Parses the description of an NFA.
pub fn parse_nfa(input: &str) -> Result<Nfa, FormatError> {
    let mut lines = input.lines().enumerate();
    let header = parse_header(&mut lines)?;

    let mut nfa = Nfa::new();
    nfa.add_alphabet(header.alphabet.iter().map(|s| Symbol::from(*s)));
    nfa.add_states(header.states.iter().copied())
        .at_line(STATES_LINE)?;
    nfa.set_initial_state(header.initial)
        .at_line(INITIAL_LINE)?;
    nfa.add_final_states(header.finals.iter().copied())
        .at_line(FINALS_LINE)?;

    for transition in transitions(lines) {
        let (line, [from, symbol, to]) = transition?;
        nfa.add_transition(from, Symbol::from(symbol), to)
            .at_line(line)?;
    }
    log::debug!(
        "Parsed NFA with {} states and {} transitions",
        nfa.states().len(),
        nfa.transitions().count()
    );
    Ok(nfa)
}

/// Parses the description of a DFA.
/// State names are kept verbatim and the transition table may be partial.
pub fn parse_dfa(input: &str) -> Result<Dfa, FormatError> {
    let mut lines = input.lines().enumerate();
    let header = parse_header(&mut lines)?;

    let initial = DfaState::named(header.initial);
    let mut dfa = Dfa::new(initial.clone());
    for symbol in &header.alphabet {
        dfa.add_symbol(Symbol::from(*symbol))
            .at_line(ALPHABET_LINE)?;
    }
    for name in &header.states {
        dfa.add_state(DfaState::named(*name));
    }
    if !header.states.contains(&header.initial) {
        return Err(FormatError::Structure {
            line: INITIAL_LINE,
            source: AutomatonError::UnknownNode(header.initial.to_string()),
        });
    }
    for name in &header.finals {
        dfa.add_final_state(DfaState::named(*name))
            .at_line(FINALS_LINE)?;
    }

    for transition in transitions(lines) {
        let (line, [from, symbol, to]) = transition?;
        let symbol = Symbol::from(symbol);
        if !dfa.alphabet().contains(&symbol) {
            return Err(FormatError::SymbolNotInAlphabet {
                line,
                symbol: symbol.to_string(),
            });
        }
        dfa.add_transition(DfaState::named(from), symbol, DfaState::named(to))
            .at_line(line)?;
    }
    if !dfa.is_total() {
        log::warn!(
            "DFA is partial: {} transitions are undefined",
            dfa.missing_transitions().count()
        );
    }
    Ok(dfa)
}

/// Reads and parses an NFA description from a file.
pub fn load_nfa(path: &Path) -> Result<Nfa, PublicError> {
    let input = std::fs::read_to_string(path)?;
    Ok(parse_nfa(&input)?)
}

/// Reads and parses a DFA description from a file.
pub fn load_dfa(path: &Path) -> Result<Dfa, PublicError> {
    let input = std::fs::read_to_string(path)?;
    Ok(parse_dfa(&input)?)
}
