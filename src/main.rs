use std::{io::BufRead, path::PathBuf, process::exit, time::Instant};

use clap::{Parser as ClapParser, Subcommand};
use itertools::Itertools;

use nfa2dfa::{check_input, convert_file, load_dfa, write_dfa, Dfa, InputSplit, Options};

/// Converts NFAs to DFAs and checks strings against DFAs
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the NFA described in a file into an equivalent DFA
    Convert {
        /// The file describing the NFA
        file: PathBuf,

        /// The file to write the DFA to
        #[arg(short, long, default_value = nfa2dfa::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Print the DFA instead of writing it to a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Check whether the DFA described in a file accepts a string
    Check {
        /// The file describing the DFA
        file: PathBuf,

        /// The input string. If omitted, one line is read from stdin
        input: Option<String>,

        /// Split the input into symbols at whitespace instead of at every character
        #[arg(long)]
        tokens: bool,
    },
}

fn main() {
    env_logger::init();
    let ts = Instant::now();
    let cli = Args::parse();
    let opts = convert_options(&cli);

    let res = match &cli.command {
        Command::Convert { file, .. } => convert_file(file).and_then(|dfa| {
            write_dfa(&dfa, &opts)?;
            if let Some(path) = &opts.output {
                println!("DFA has been successfully written to {}", path.display());
            }
            Ok(())
        }),
        Command::Check { file, input, .. } => load_dfa(file).and_then(|dfa| {
            print_dfa(&dfa);
            let input = match input {
                Some(input) => input.clone(),
                None => read_input()?,
            };
            if check_input(&dfa, &input, &opts)? {
                println!("The string \"{}\" is accepted by the DFA.", input);
            } else {
                println!("The string \"{}\" is rejected by the DFA.", input);
            }
            Ok(())
        }),
    };

    if let Err(err) = res {
        log::error!("Error: {}", err);
        exit(1);
    }

    log::info!("Done ({}ms).", ts.elapsed().as_millis());
}

fn read_input() -> Result<String, std::io::Error> {
    eprint!("Enter input string: ");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_dfa(dfa: &Dfa) {
    println!("DFA loaded successfully.");
    println!("Alphabet: {}", dfa.alphabet().iter().sorted().join(" "));
    println!("States: {}", dfa.states().iter().sorted().join(" "));
    println!("Initial State: {}", dfa.initial_state());
    println!(
        "Final States: {}",
        dfa.final_states().iter().sorted().join(" ")
    );
    println!("Transition Function:");
    for (state, symbol, next) in dfa.transitions().sorted() {
        println!("  δ({}, {}) -> {}", state, symbol, next);
    }
}

fn convert_options(args: &Args) -> Options {
    let mut opts = Options::default();
    match &args.command {
        Command::Convert { output, stdout, .. } => {
            opts.output = if *stdout { None } else { Some(output.clone()) };
        }
        Command::Check { tokens, .. } => {
            if *tokens {
                opts.input_split = InputSplit::Whitespace;
            }
        }
    }
    opts
}
