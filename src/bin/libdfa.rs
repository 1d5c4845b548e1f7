//! libdfa - DFA loading and word classification
//!
//! Provides CLI utilities and an interactive REPL for classifying words
//! against deterministic finite automata.

use clap::Parser;
use colored::Colorize;
use std::process;

use libdfa::cli::{commands, Cli, Commands};
use libdfa::repl;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { automaton } => repl::run_repl(automaton),
        command => commands::execute(command),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
