//! Deterministic finite automaton model.
//!
//! An [`Automaton`] is a validated, immutable value: it can only be built by
//! [`load_automaton`], which enforces the structural invariants (known initial
//! state, final states drawn from the state set, transitions over declared
//! states and symbols). Once constructed it is read-only, so it can be
//! shared freely across simulation runs.

use rustc_hash::{FxHashMap, FxHashSet};

mod loader;

pub use loader::{load_automaton, LoadError};

/// A validated deterministic finite automaton.
///
/// The transition relation is a partial function: a `(state, symbol)` pair
/// maps to at most one destination state, and pairs with no entry are legal
/// (they mean "no move", which the simulator reports as an invalid word).
///
/// Construct one with [`load_automaton`]; there is no way to build an
/// `Automaton` that violates its invariants.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) states: FxHashSet<String>,
    pub(crate) alphabet: FxHashSet<String>,
    pub(crate) initial_state: String,
    pub(crate) final_states: FxHashSet<String>,
    // state -> symbol -> destination
    pub(crate) transitions: FxHashMap<String, FxHashMap<String, String>>,
}

impl Automaton {
    /// The declared initial state.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// Check whether `name` is a declared state.
    pub fn is_state(&self, name: &str) -> bool {
        self.states.contains(name)
    }

    /// Check whether `symbol` is in the declared alphabet.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Check whether `name` is an accepting state.
    pub fn is_final(&self, name: &str) -> bool {
        self.final_states.contains(name)
    }

    /// Look up the single transition for `(state, symbol)`, if any.
    pub fn step(&self, state: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(symbol))
            .map(String::as_str)
    }

    /// Number of declared states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of alphabet symbols.
    pub fn alphabet_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of transition rules (after duplicate keys collapse).
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(FxHashMap::len).sum()
    }

    /// Iterate over the declared states (arbitrary order).
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    /// Iterate over the alphabet symbols (arbitrary order).
    pub fn alphabet(&self) -> impl Iterator<Item = &str> {
        self.alphabet.iter().map(String::as_str)
    }

    /// Iterate over the accepting states (arbitrary order).
    pub fn final_states(&self) -> impl Iterator<Item = &str> {
        self.final_states.iter().map(String::as_str)
    }
}
