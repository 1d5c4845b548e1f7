//! Word classification against a loaded automaton.
//!
//! The engine replays one word at a time from the automaton's initial
//! state. Classification is total: unknown symbols and missing transitions
//! are ordinary [`Verdict::Invalid`] outcomes, never errors.

use std::fmt;

use crate::automaton::Automaton;

/// Three-way classification result for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The word was consumed fully and ended in an accepting state.
    Accepted,
    /// The word was consumed fully but ended in a non-accepting state.
    Rejected,
    /// The word used a symbol outside the alphabet, or reached a
    /// `(state, symbol)` pair with no transition.
    Invalid,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::Invalid => write!(f, "INVALID"),
        }
    }
}

/// Simulation engine for one validated automaton.
///
/// The simulator owns the automaton and never mutates it, so a single
/// instance can classify any number of words; each run starts fresh from
/// the initial state.
#[derive(Debug, Clone)]
pub struct Simulator {
    automaton: Automaton,
}

impl Simulator {
    /// Create a simulator for `automaton`.
    pub fn new(automaton: Automaton) -> Self {
        Self { automaton }
    }

    /// Access the underlying automaton.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Classify a single word.
    ///
    /// Words are consumed per character. A character outside the alphabet,
    /// or a `(state, symbol)` pair with no transition, short-circuits to
    /// [`Verdict::Invalid`] without examining the rest of the word.
    pub fn classify(&self, word: &str) -> Verdict {
        let mut current = self.automaton.initial_state();
        let mut buf = [0u8; 4];

        for ch in word.chars() {
            let symbol: &str = ch.encode_utf8(&mut buf);
            if !self.automaton.is_symbol(symbol) {
                return Verdict::Invalid;
            }
            match self.automaton.step(current, symbol) {
                Some(next) => current = next,
                None => return Verdict::Invalid,
            }
        }

        if self.automaton.is_final(current) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    /// Classify a batch of words, preserving input order.
    pub fn classify_all<I, S>(&self, words: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.classify(word.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::load_automaton;

    fn even_ones() -> Simulator {
        // Accepts binary words with an even number of 1s.
        let automaton = load_automaton([
            "0 1", "e o", "e", "e", "e 0 e", "e 1 o", "o 0 o", "o 1 e",
        ])
        .unwrap();
        Simulator::new(automaton)
    }

    #[test]
    fn test_accept_and_reject() {
        let sim = even_ones();
        assert_eq!(sim.classify("11"), Verdict::Accepted);
        // "101" has two 1s: e -> o -> o -> e, and e is accepting.
        assert_eq!(sim.classify("101"), Verdict::Accepted);
        assert_eq!(sim.classify("10"), Verdict::Rejected);
        assert_eq!(sim.classify("1"), Verdict::Rejected);
        assert_eq!(sim.classify("0000"), Verdict::Accepted);
    }

    #[test]
    fn test_empty_word_uses_initial_state() {
        let sim = even_ones();
        assert_eq!(sim.classify(""), Verdict::Accepted);

        let automaton =
            load_automaton(["0 1", "e o", "o", "e", "e 1 o", "o 1 e"]).unwrap();
        assert_eq!(Simulator::new(automaton).classify(""), Verdict::Rejected);
    }

    #[test]
    fn test_unknown_symbol_is_invalid() {
        let sim = even_ones();
        assert_eq!(sim.classify("102"), Verdict::Invalid);
        assert_eq!(sim.classify("x"), Verdict::Invalid);
    }

    #[test]
    fn test_missing_transition_is_invalid() {
        // Partial automaton: no rule for (q1, a).
        let automaton =
            load_automaton(["a", "q0 q1", "q1", "q0", "q0 a q1"]).unwrap();
        let sim = Simulator::new(automaton);
        assert_eq!(sim.classify("a"), Verdict::Accepted);
        assert_eq!(sim.classify("aa"), Verdict::Invalid);
    }

    #[test]
    fn test_multichar_alphabet_token_is_unreachable() {
        // "ab" is a declared symbol, but words are consumed per character,
        // so neither 'a' nor 'b' ever matches it.
        let automaton =
            load_automaton(["ab", "q0 q1", "q1", "q0", "q0 ab q1"]).unwrap();
        let sim = Simulator::new(automaton);
        assert_eq!(sim.classify("ab"), Verdict::Invalid);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let sim = even_ones();
        let verdicts = sim.classify_all(["11", "1", "2", ""]);
        assert_eq!(
            verdicts,
            vec![
                Verdict::Accepted,
                Verdict::Rejected,
                Verdict::Invalid,
                Verdict::Accepted,
            ]
        );
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Accepted.to_string(), "ACCEPTED");
        assert_eq!(Verdict::Rejected.to_string(), "REJECTED");
        assert_eq!(Verdict::Invalid.to_string(), "INVALID");
    }
}
