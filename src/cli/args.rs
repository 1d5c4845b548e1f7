//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "libdfa")]
#[command(about = "Load deterministic finite automata and classify words")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify words against an automaton
    Run {
        /// Automaton description file
        automaton: PathBuf,

        /// Words to classify (reads stdin when empty and no --words-file)
        words: Vec<String>,

        /// Read words from a file, one per line
        #[arg(short, long)]
        words_file: Option<PathBuf>,

        /// Print bare verdict tokens, one per line, without color
        #[arg(short, long)]
        porcelain: bool,
    },

    /// Validate an automaton description without classifying anything
    Check {
        /// Automaton description file
        automaton: PathBuf,
    },

    /// Display information about an automaton
    Info {
        /// Automaton description file
        automaton: PathBuf,
    },

    /// Launch interactive REPL
    Repl {
        /// Automaton to load at startup
        automaton: Option<PathBuf>,
    },
}
