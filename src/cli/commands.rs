//! CLI command implementations

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::automaton::{load_automaton, Automaton};
use crate::simulation::{Simulator, Verdict};

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            automaton,
            words,
            words_file,
            porcelain,
        } => cmd_run(&automaton, words, words_file, porcelain),
        Commands::Check { automaton } => cmd_check(&automaton),
        Commands::Info { automaton } => cmd_info(&automaton),
        Commands::Repl { .. } => {
            // Handled in main.rs
            unreachable!("REPL command should be handled in main");
        }
    }
}

/// Read and validate an automaton description file.
pub fn load_automaton_file(path: &Path) -> Result<Automaton> {
    let file = File::open(path)
        .with_context(|| format!("cannot open automaton file {}", path.display()))?;
    let lines: Vec<String> = BufReader::new(file)
        .lines()
        .collect::<io::Result<_>>()
        .with_context(|| format!("cannot read automaton file {}", path.display()))?;
    load_automaton(lines).with_context(|| format!("invalid automaton in {}", path.display()))
}

/// Read a word list file: one word per line, blank lines skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("cannot open word file {}", path.display()))?;
    collect_words(BufReader::new(file))
        .with_context(|| format!("cannot read word file {}", path.display()))
}

fn collect_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn gather_words(words: Vec<String>, words_file: Option<PathBuf>) -> Result<Vec<String>> {
    if let Some(path) = words_file {
        let mut all = read_word_list(&path)?;
        all.extend(words);
        return Ok(all);
    }
    if words.is_empty() {
        // No words anywhere on the command line: read them from stdin.
        return collect_words(io::stdin().lock()).context("cannot read words from stdin");
    }
    Ok(words)
}

fn cmd_run(
    automaton_path: &Path,
    words: Vec<String>,
    words_file: Option<PathBuf>,
    porcelain: bool,
) -> Result<()> {
    let simulator = Simulator::new(load_automaton_file(automaton_path)?);
    let words = gather_words(words, words_file)?;

    for word in &words {
        let verdict = simulator.classify(word);
        if porcelain {
            println!("{verdict}");
        } else {
            println!("{}: {}", word, colored_verdict(verdict));
        }
    }
    Ok(())
}

fn cmd_check(automaton_path: &Path) -> Result<()> {
    let automaton = load_automaton_file(automaton_path)?;
    println!(
        "{} {} ({} state(s), {} symbol(s), {} transition(s))",
        "OK".green().bold(),
        automaton_path.display(),
        automaton.state_count(),
        automaton.alphabet_count(),
        automaton.transition_count()
    );
    Ok(())
}

fn cmd_info(automaton_path: &Path) -> Result<()> {
    let automaton = load_automaton_file(automaton_path)?;

    let mut alphabet: Vec<&str> = automaton.alphabet().collect();
    alphabet.sort_unstable();
    let mut states: Vec<&str> = automaton.states().collect();
    states.sort_unstable();
    let mut finals: Vec<&str> = automaton.final_states().collect();
    finals.sort_unstable();

    println!("Automaton: {}", automaton_path.display().to_string().cyan());
    println!("  Alphabet:     {}", alphabet.join(" "));
    println!("  States:       {}", states.join(" "));
    println!("  Initial:      {}", automaton.initial_state().green());
    println!("  Final:        {}", finals.join(" "));
    println!("  Transitions:  {}", automaton.transition_count());
    Ok(())
}

/// Render a verdict in the CLI's color scheme.
pub fn colored_verdict(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Accepted => "ACCEPTED".green().bold(),
        Verdict::Rejected => "REJECTED".yellow().bold(),
        Verdict::Invalid => "INVALID".red().bold(),
    }
}
