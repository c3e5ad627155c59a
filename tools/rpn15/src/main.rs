//! rpn15 - keyboard shell for the RPN calculator engine
//!
//! Drives `rpn-calc` from the terminal: an interactive REPL, one-shot
//! evaluation of a key sequence, and a key reference table.

mod config;
mod render;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rpn_calc::{parse_keys, CalcEngine};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "rpn15")]
#[command(about = "RPN four-register calculator")]
#[command(long_about = "RPN four-register calculator

Commands:
  repl        Interactive calculator (default)
  eval        Press a key sequence and print the final display
  keys        List every key token with its f/g functions

Examples:
  rpn15                                 # Start the REPL
  rpn15 eval 1 0 enter 4 -              # 6.0000
  rpn15 eval --json 2 f 7 1 enter 3 /   # Display snapshot as JSON
  rpn15 -c rpn15.toml repl              # Use a config file

Environment variables prefixed with RPN15_ override the config file,
e.g. RPN15_ENGINE__UNARY_POLICY=drain.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short, long, global = true, env = "RPN15_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive calculator
    Repl,

    /// Press a key sequence on a fresh calculator and print the display
    Eval {
        /// Key tokens, e.g. `2 enter 3 +`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,

        /// Print the display snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every key token with its f/g functions
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut engine = CalcEngine::new(config.engine.clone());
    engine.reset();
    debug!(config = ?engine.config(), "engine ready");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(&mut engine, config.history_file.as_deref())?,
        Commands::Eval { keys, json } => {
            let buttons = parse_keys(&keys.join(" "))?;
            engine.handle_buttons(buttons);

            let display = engine.current_display();
            if json {
                let text = serde_json::to_string_pretty(&display)
                    .context("Failed to serialize display")?;
                println!("{}", text);
            } else {
                println!("{}", render::display(&display));
            }
        },
        Commands::Keys => print!("{}", render::key_table()),
    }

    Ok(())
}
