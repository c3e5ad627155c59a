//! Interactive calculator REPL
//!
//! Each input line is a whitespace-separated list of key tokens fed to the
//! engine in order; the display is printed after the line. A line made of a
//! single shell command (`help`, `keys`, `state`, `quit`) is not sent to the
//! engine.

use anyhow::{Context, Result};
use colored::*;
use rpn_calc::{parse_keys, ButtonId, CalcEngine};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::path::Path;
use tracing::warn;

use crate::render;

const SHELL_COMMANDS: [&str; 5] = ["help", "keys", "state", "quit", "exit"];

// ============================================================================
// Tab Completion Helper
// ============================================================================

/// REPL helper completing key tokens and shell commands
struct KeyHelper;

impl Helper for KeyHelper {}

impl Hinter for KeyHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for KeyHelper {}

impl Validator for KeyHelper {}

impl Completer for KeyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let start = line.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        Ok((start, complete_token(&line[start..], start == 0)))
    }
}

/// Button ids (and shell commands at the start of a line) matching a prefix
fn complete_token(prefix: &str, line_start: bool) -> Vec<Pair> {
    let prefix = prefix.to_ascii_lowercase();
    let commands = SHELL_COMMANDS.iter().filter(|_| line_start).copied();

    ButtonId::ALL
        .iter()
        .map(|button| button.id())
        .chain(commands)
        .filter(|token| token.starts_with(&prefix))
        .map(|token| Pair {
            display: token.to_string(),
            replacement: token.to_string(),
        })
        .collect()
}

// ============================================================================
// REPL loop
// ============================================================================

/// What the loop does after a line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the interactive loop until `quit` or Ctrl+D
pub fn run(engine: &mut CalcEngine, history_file: Option<&Path>) -> Result<()> {
    let config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut rl: Editor<KeyHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).context("Failed to initialize readline")?;
    rl.set_helper(Some(KeyHelper));

    if let Some(path) = history_file {
        // A missing history file on first run is expected
        let _ = rl.load_history(path);
    }

    println!("{}", "RPN 15 calculator".bright_cyan().bold());
    println!(
        "Type key tokens separated by spaces (e.g. {}), '{}' for commands, {} for completion\n",
        "2 enter 3 +".bright_yellow(),
        "help".bright_yellow(),
        "Tab".bright_cyan()
    );
    println!("{}", render::display(&engine.current_display()));

    loop {
        match rl.readline("rpn15> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history (ignore errors)
                let _ = rl.add_history_entry(line);

                match execute_line(engine, line) {
                    Ok(Flow::Continue) => {},
                    Ok(Flow::Quit) => break,
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            },
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    if let Some(path) = history_file {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    println!("Bye!");
    Ok(())
}

/// Execute one input line
fn execute_line(engine: &mut CalcEngine, line: &str) -> Result<Flow> {
    match line.to_ascii_lowercase().as_str() {
        "help" | "?" => print_help(),
        "keys" => print!("{}", render::key_table()),
        "state" => println!("{}", render::registers(engine)),
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        _ => {
            // Parse the whole line first so a typo feeds nothing
            let buttons = parse_keys(line)?;
            engine.handle_buttons(buttons);
            println!("{}", render::display(&engine.current_display()));
        },
    }
    Ok(Flow::Continue)
}

/// Print help message
fn print_help() {
    println!("{}", "=== Shell Commands ===".bright_cyan());
    println!();
    println!("  {}   List every key token with its f/g functions", "keys".bright_yellow());
    println!("  {}  Show the X/Y/Z/T registers and the pending entry", "state".bright_yellow());
    println!("  {}   Show this help message", "help".bright_yellow());
    println!("  {}   Exit", "quit".bright_yellow());
    println!();
    println!("{}", "=== Keys ===".bright_cyan());
    println!();
    println!("  Anything else is a list of key tokens pressed in order.");
    println!("  Tokens are key ids (digit-7, sqrt-x, shift-f, ...) or aliases:");
    println!("    0-9 .  + - * /  f g  enter  chs  swap  pow  sqrt  reset");
    println!();
    println!("{}", "=== Examples ===".bright_cyan());
    println!();
    println!("  2 enter 3 +           5");
    println!("  1 0 enter 4 /         2.5");
    println!("  2 f 7                 FIX 2");
    println!("  g 8 g eex sin         sin(π) in radians");
}
