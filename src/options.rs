use std::path::PathBuf;

use crate::automata::{symbols_of_chars, symbols_of_tokens, Symbol};

/// The file the converted DFA is written to if no other output is given.
pub const DEFAULT_OUTPUT: &str = "DFA_Output.txt";
const DEFAULT_INPUT_SPLIT: InputSplit = InputSplit::Chars;

/// How an input string is split into symbols before it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSplit {
    /// Every character is one symbol.
    Chars,
    /// Symbols are separated by whitespace, which allows symbols longer than one character.
    Whitespace,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Where the converted DFA is written.
    /// If `None`, the DFA is printed to stdout.
    pub output: Option<PathBuf>,
    /// How input strings are split into symbols.
    pub input_split: InputSplit,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            input_split: DEFAULT_INPUT_SPLIT,
        }
    }
}

impl Options {
    pub fn split_input(&self, input: &str) -> Vec<Symbol> {
        match self.input_split {
            InputSplit::Chars => symbols_of_chars(input),
            InputSplit::Whitespace => symbols_of_tokens(input),
        }
    }
}
