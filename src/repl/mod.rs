//! Interactive REPL for classifying words against automata.
//!
//! A small line-oriented session: load an automaton description, then
//! classify words against it without restarting the process.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::{Path, PathBuf};

use crate::cli::commands::{colored_verdict, load_automaton_file};
use crate::simulation::Simulator;

/// Result of evaluating one REPL line.
#[derive(Debug)]
pub struct Outcome {
    /// Output message to display
    pub output: String,
    /// Whether to exit the session
    pub should_exit: bool,
}

impl Outcome {
    fn output(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            should_exit: false,
        }
    }

    fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            should_exit: true,
        }
    }
}

/// Mutable session state: the currently loaded automaton, if any.
#[derive(Debug, Default)]
pub struct ReplState {
    simulator: Option<Simulator>,
    source: Option<PathBuf>,
}

impl ReplState {
    /// Create an empty session with no automaton loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (or replace) the session automaton from `path`.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let automaton = load_automaton_file(path)?;
        self.simulator = Some(Simulator::new(automaton));
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    /// Evaluate one input line.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::output(""));
        }
        // Split the command word off once; the rest of the line is the
        // argument text, so load paths may contain spaces.
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => Ok(Outcome::output(HELP)),
            "exit" | "quit" => Ok(Outcome::exit("bye")),
            "load" => {
                if rest.is_empty() {
                    return Ok(Outcome::output("usage: load <path>"));
                }
                let automaton = load_automaton_file(Path::new(rest))?;
                let output = format!(
                    "loaded {} ({} state(s), {} transition(s))",
                    rest.cyan(),
                    automaton.state_count(),
                    automaton.transition_count()
                );
                self.simulator = Some(Simulator::new(automaton));
                self.source = Some(PathBuf::from(rest));
                Ok(Outcome::output(output))
            }
            "info" => match (&self.simulator, &self.source) {
                (Some(sim), Some(source)) => Ok(Outcome::output(format!(
                    "{}: {} state(s), {} symbol(s), {} transition(s), initial {}",
                    source.display(),
                    sim.automaton().state_count(),
                    sim.automaton().alphabet_count(),
                    sim.automaton().transition_count(),
                    sim.automaton().initial_state()
                ))),
                _ => Ok(Outcome::output("no automaton loaded (use 'load <path>')")),
            },
            "word" => match &self.simulator {
                Some(sim) => {
                    let lines: Vec<String> = rest
                        .split_whitespace()
                        .map(|word| format!("{}: {}", word, colored_verdict(sim.classify(word))))
                        .collect();
                    if lines.is_empty() {
                        Ok(Outcome::output("usage: word <word>..."))
                    } else {
                        Ok(Outcome::output(lines.join("\n")))
                    }
                }
                None => Ok(Outcome::output("no automaton loaded (use 'load <path>')")),
            },
            other => Ok(Outcome::output(format!(
                "unknown command '{other}' (type 'help')"
            ))),
        }
    }
}

const HELP: &str = "\
Commands:
  load <path>      load an automaton description file
  word <word>...   classify words against the loaded automaton
  info             show the loaded automaton
  help             show this help
  exit             leave the REPL";

/// Run the interactive REPL loop until exit or EOF.
pub fn run_repl(automaton: Option<PathBuf>) -> Result<()> {
    print_banner();

    let mut state = ReplState::new();
    if let Some(path) = automaton {
        match state.load(&path) {
            Ok(()) => println!("  Loaded automaton from {}", path.display().to_string().cyan()),
            Err(e) => eprintln!("  {}: {:#}", "Warning".yellow(), e),
        }
    }

    let config = Config::builder().auto_add_history(true).build();
    let mut editor = DefaultEditor::with_config(config)?;
    let prompt = format!("{}> ", "libdfa".bright_cyan().bold());

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match state.eval(line) {
                    Ok(outcome) => {
                        if !outcome.output.is_empty() {
                            println!("{}", outcome.output);
                        }
                        if outcome.should_exit {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{}: {:#}", "Error".red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupted, type 'exit' to leave)");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!("  {}", "libdfa - DFA word classification".bright_cyan().bold());
    println!();
    println!("  Type {} for available commands", "'help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_without_automaton() {
        let mut state = ReplState::new();
        let outcome = state.eval("word abba").unwrap();
        assert!(outcome.output.contains("no automaton loaded"));
        assert!(!outcome.should_exit);
    }

    #[test]
    fn test_eval_exit() {
        let mut state = ReplState::new();
        assert!(state.eval("exit").unwrap().should_exit);
        assert!(state.eval("quit").unwrap().should_exit);
    }

    #[test]
    fn test_eval_unknown_command() {
        let mut state = ReplState::new();
        let outcome = state.eval("frobnicate").unwrap();
        assert!(outcome.output.contains("unknown command"));
    }

    #[test]
    fn test_eval_load_without_path() {
        let mut state = ReplState::new();
        let outcome = state.eval("load").unwrap();
        assert!(outcome.output.contains("usage: load"));
    }

    #[test]
    fn test_eval_load_path_with_spaces() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("my automata").join("even ones.dfa");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "0 1\ne o\ne\ne\ne 1 o\no 1 e\n").unwrap();

        let mut state = ReplState::new();
        let outcome = state.eval(&format!("load {}", path.display())).unwrap();
        assert!(outcome.output.contains("loaded"));

        let outcome = state.eval("word 11").unwrap();
        assert!(outcome.output.contains("11"));
    }
}
