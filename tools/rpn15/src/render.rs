//! Terminal rendering of the calculator face

use colored::*;
use rpn_calc::{ButtonId, CalcEngine, DisplayState};

/// One-line LCD: the cells framed, followed by the annunciator row
pub fn display(state: &DisplayState) -> String {
    let digits = state.text();
    let digits = if state.indicators.error {
        digits.red().bold()
    } else {
        digits.bright_green().bold()
    };

    format!("[ {} ]  {}", digits, annunciators(state))
}

fn annunciators(state: &DisplayState) -> String {
    let ind = &state.indicators;
    let mut parts: Vec<String> = Vec::new();

    if ind.f {
        parts.push("f".bright_yellow().bold().to_string());
    }
    if ind.g {
        parts.push("g".bright_blue().bold().to_string());
    }
    if !ind.angle_label.is_empty() {
        parts.push(ind.angle_label.cyan().to_string());
    }
    parts.push(format!("FIX {}", ind.fix_digits).dimmed().to_string());
    if ind.error {
        parts.push("ERROR".red().bold().to_string());
    }

    parts.join(" ")
}

/// Registers and entry, for the REPL `state` command
pub fn registers(engine: &CalcEngine) -> String {
    let names = ["X", "Y", "Z", "T"];
    let mut out = String::new();

    for (name, value) in names.iter().zip(engine.registers()) {
        let value = if value.is_nan() {
            "undefined".dimmed().to_string()
        } else {
            value.to_string()
        };
        out.push_str(&format!("  {}: {}\n", name.bright_cyan(), value));
    }

    let entry = if engine.entry().is_empty() {
        "(none)".dimmed().to_string()
    } else {
        engine.entry().to_string()
    };
    out.push_str(&format!("  {}: {}", "entry".bright_cyan(), entry));
    out
}

/// Button table for the `keys` command
pub fn key_table() -> String {
    let mut out = format!(
        "{:<16} {:<8} {:<8} {:<8}\n",
        "TOKEN".bold(),
        "KEY".bold(),
        "f".bold(),
        "g".bold()
    );
    for button in ButtonId::ALL {
        let labels = button.labels();
        out.push_str(&format!(
            "{:<16} {:<8} {:<8} {:<8}\n",
            button.id().bright_yellow(),
            labels.plain,
            labels.f,
            labels.g
        ));
    }
    out
}
