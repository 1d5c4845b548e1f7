//! CLI interface for libdfa
//!
//! Provides command-line utilities for validating automata and classifying
//! words against them.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{load_automaton_file, read_word_list};
