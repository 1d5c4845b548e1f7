//! Textual automaton loading and validation.
//!
//! The loader consumes a sequence of already-read lines; where they came
//! from (file, network, in-memory buffer) is the caller's concern. The
//! format has five sections:
//!
//! ```text
//! a b              alphabet symbols
//! q0 q1 q2 q3      state names
//! q0 q3            final states (may be an empty line)
//! q0               initial state
//! q0 a q1          transition rules, one per line: source symbol destination
//! q0 b q2
//! ...
//! ```
//!
//! Validation fails fast: the first inconsistency aborts loading and no
//! partial automaton is ever returned.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::Automaton;

/// Errors that can occur while loading an automaton description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// Input is structurally insufficient (missing header lines, empty
    /// alphabet, or empty state set).
    #[error("malformed automaton input: {0}")]
    MalformedInput(String),
    /// The declared initial state is not a member of the state set.
    #[error("invalid initial state: {0}")]
    InvalidInitialState(String),
    /// A declared final state is not a member of the state set.
    #[error("invalid final state: {0}")]
    InvalidFinalState(String),
    /// A transition rule is malformed or references an undeclared state
    /// or symbol.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),
}

/// Parse and validate an automaton from a sequence of lines.
///
/// Lines are whitespace-trimmed and whitespace-token-split. Whitespace-only
/// lines in the transition section are skipped. Duplicate `(state, symbol)`
/// rules keep the first listed destination.
///
/// # Errors
///
/// Returns a [`LoadError`] describing the first failing structural check;
/// see the variants for the taxonomy.
pub fn load_automaton<I, S>(lines: I) -> Result<Automaton, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .collect();

    if lines.len() < 4 {
        return Err(LoadError::MalformedInput(format!(
            "expected at least 4 header lines, got {}",
            lines.len()
        )));
    }

    let alphabet: FxHashSet<String> = tokens(&lines[0]);
    if alphabet.is_empty() {
        return Err(LoadError::MalformedInput("empty alphabet".into()));
    }

    let states: FxHashSet<String> = tokens(&lines[1]);
    if states.is_empty() {
        return Err(LoadError::MalformedInput("empty state set".into()));
    }

    let final_states: Vec<&str> = lines[2].split_whitespace().collect();
    let initial_state = lines[3].clone();

    if !states.contains(&initial_state) {
        return Err(LoadError::InvalidInitialState(initial_state));
    }

    for name in &final_states {
        if !states.contains(*name) {
            return Err(LoadError::InvalidFinalState((*name).to_string()));
        }
    }

    let rule_lines = lines[4..].iter().filter(|line| !line.is_empty());

    for rule in rule_lines.clone() {
        let fields: Vec<&str> = rule.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(LoadError::InvalidTransition(rule.clone()));
        }
        let (source, symbol, destination) = (fields[0], fields[1], fields[2]);
        if !states.contains(source) || !states.contains(destination) || !alphabet.contains(symbol)
        {
            return Err(LoadError::InvalidTransition(rule.clone()));
        }
    }

    // All rules validated; build the lookup map. Inserting via entry() keeps
    // the first listed destination for a duplicate (state, symbol) key.
    let mut transitions: FxHashMap<String, FxHashMap<String, String>> = FxHashMap::default();
    for rule in rule_lines {
        let fields: Vec<&str> = rule.split_whitespace().collect();
        transitions
            .entry(fields[0].to_string())
            .or_default()
            .entry(fields[1].to_string())
            .or_insert_with(|| fields[2].to_string());
    }

    Ok(Automaton {
        states,
        alphabet,
        initial_state,
        final_states: final_states.iter().map(|s| s.to_string()).collect(),
        transitions,
    })
}

fn tokens(line: &str) -> FxHashSet<String> {
    line.split_whitespace().map(str::to_string).collect()
}
