//! # libdfa
//!
//! Loading and simulation of deterministic finite automata (DFAs).
//!
//! This library parses a line-oriented textual description of a DFA into a
//! validated, immutable [`automaton::Automaton`] and classifies input words
//! against it, reporting each word as accepted, rejected, or invalid.
//!
//! ## Example
//!
//! ```rust,ignore
//! use libdfa::prelude::*;
//!
//! let text = "\
//! a b
//! q0 q1
//! q1
//! q0
//! q0 a q1
//! q1 b q0";
//!
//! let automaton = load_automaton(text.lines())?;
//! let simulator = Simulator::new(automaton);
//!
//! assert_eq!(simulator.classify("a"), Verdict::Accepted);
//! assert_eq!(simulator.classify("ab"), Verdict::Rejected);
//! assert_eq!(simulator.classify("x"), Verdict::Invalid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod simulation;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive REPL for classifying words against automata
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{load_automaton, Automaton, LoadError};
    pub use crate::simulation::{Simulator, Verdict};
}
