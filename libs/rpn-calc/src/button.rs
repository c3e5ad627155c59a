//! Button identities
//!
//! One variant per physical key of the keyboard, reserved keys included. The
//! stable string id of each key (`digit-7`, `sqrt-x`, ...) is what shells use
//! to name buttons; a handful of short aliases (`7`, `+`, `f`) are accepted too.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ButtonId {
    // Row 1
    SqrtX,
    ExpX,
    TenX,
    WyeX,
    InverseX,
    Chs,
    Digit7,
    Digit8,
    Digit9,
    Division,
    // Row 2
    Sst,
    Gto,
    Sin,
    Cos,
    Tan,
    Eex,
    Digit4,
    Digit5,
    Digit6,
    Multiplication,
    // Row 3
    RunStop,
    Gsb,
    RollDown,
    XSwapY,
    Backspace,
    Enter,
    Digit1,
    Digit2,
    Digit3,
    Subtraction,
    // Row 4
    On,
    ShiftF,
    ShiftG,
    Sto,
    Rcl,
    Digit0,
    Decimal,
    Sum,
    Addition,
}

/// Key face labels: plain, f (above the key) and g (below the key)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLabels {
    pub plain: &'static str,
    pub f: &'static str,
    pub g: &'static str,
}

impl ButtonId {
    /// Every key in keyboard order (row-major)
    pub const ALL: [ButtonId; 39] = [
        ButtonId::SqrtX,
        ButtonId::ExpX,
        ButtonId::TenX,
        ButtonId::WyeX,
        ButtonId::InverseX,
        ButtonId::Chs,
        ButtonId::Digit7,
        ButtonId::Digit8,
        ButtonId::Digit9,
        ButtonId::Division,
        ButtonId::Sst,
        ButtonId::Gto,
        ButtonId::Sin,
        ButtonId::Cos,
        ButtonId::Tan,
        ButtonId::Eex,
        ButtonId::Digit4,
        ButtonId::Digit5,
        ButtonId::Digit6,
        ButtonId::Multiplication,
        ButtonId::RunStop,
        ButtonId::Gsb,
        ButtonId::RollDown,
        ButtonId::XSwapY,
        ButtonId::Backspace,
        ButtonId::Enter,
        ButtonId::Digit1,
        ButtonId::Digit2,
        ButtonId::Digit3,
        ButtonId::Subtraction,
        ButtonId::On,
        ButtonId::ShiftF,
        ButtonId::ShiftG,
        ButtonId::Sto,
        ButtonId::Rcl,
        ButtonId::Digit0,
        ButtonId::Decimal,
        ButtonId::Sum,
        ButtonId::Addition,
    ];

    /// Stable string id
    pub fn id(self) -> &'static str {
        match self {
            ButtonId::SqrtX => "sqrt-x",
            ButtonId::ExpX => "exp-x",
            ButtonId::TenX => "ten-x",
            ButtonId::WyeX => "wye-x",
            ButtonId::InverseX => "inverse-x",
            ButtonId::Chs => "chs",
            ButtonId::Digit7 => "digit-7",
            ButtonId::Digit8 => "digit-8",
            ButtonId::Digit9 => "digit-9",
            ButtonId::Division => "division",
            ButtonId::Sst => "sst",
            ButtonId::Gto => "gto",
            ButtonId::Sin => "sin",
            ButtonId::Cos => "cos",
            ButtonId::Tan => "tan",
            ButtonId::Eex => "eex",
            ButtonId::Digit4 => "digit-4",
            ButtonId::Digit5 => "digit-5",
            ButtonId::Digit6 => "digit-6",
            ButtonId::Multiplication => "multiplication",
            ButtonId::RunStop => "rtos",
            ButtonId::Gsb => "gsb",
            ButtonId::RollDown => "r-down",
            ButtonId::XSwapY => "x-swap-y",
            ButtonId::Backspace => "backspace",
            ButtonId::Enter => "enter",
            ButtonId::Digit1 => "digit-1",
            ButtonId::Digit2 => "digit-2",
            ButtonId::Digit3 => "digit-3",
            ButtonId::Subtraction => "subtraction",
            ButtonId::On => "on",
            ButtonId::ShiftF => "shift-f",
            ButtonId::ShiftG => "shift-g",
            ButtonId::Sto => "sto",
            ButtonId::Rcl => "rcl",
            ButtonId::Digit0 => "digit-0",
            ButtonId::Decimal => "decimal",
            ButtonId::Sum => "sum",
            ButtonId::Addition => "addition",
        }
    }

    /// Key face labels
    pub fn labels(self) -> KeyLabels {
        let (plain, f, g) = match self {
            ButtonId::SqrtX => ("√x", "A", "x²"),
            ButtonId::ExpX => ("eˣ", "B", "LN"),
            ButtonId::TenX => ("10ˣ", "C", "LOG"),
            ButtonId::WyeX => ("yˣ", "D", "%"),
            ButtonId::InverseX => ("1/x", "E", "Δ%"),
            ButtonId::Chs => ("CHS", "MATRIX", "ABS"),
            ButtonId::Digit7 => ("7", "FIX", "DEG"),
            ButtonId::Digit8 => ("8", "SCI", "RAD"),
            ButtonId::Digit9 => ("9", "ENG", "GRD"),
            ButtonId::Division => ("÷", "SOLVE", "x≤y"),
            ButtonId::Sst => ("SST", "LBL", "BST"),
            ButtonId::Gto => ("GTO", "HYP", "HYP⁻¹"),
            ButtonId::Sin => ("SIN", "DIM", "SIN⁻¹"),
            ButtonId::Cos => ("COS", "(i)", "COS⁻¹"),
            ButtonId::Tan => ("TAN", "I", "TAN⁻¹"),
            ButtonId::Eex => ("EEX", "RESULT", "π"),
            ButtonId::Digit4 => ("4", "x≷", "SF"),
            ButtonId::Digit5 => ("5", "DSE", "CF"),
            ButtonId::Digit6 => ("6", "ISG", "F?"),
            ButtonId::Multiplication => ("×", "∫ᵧˣ", "x=0"),
            ButtonId::RunStop => ("R/S", "PSE", "P/R"),
            ButtonId::Gsb => ("GSB", "Σ", "RTN"),
            ButtonId::RollDown => ("R↓", "PRGM", "R↑"),
            ButtonId::XSwapY => ("x≷y", "REG", "RND"),
            ButtonId::Backspace => ("←", "PREFIX", "CLx"),
            ButtonId::Enter => ("ENTER", "RAN#", "LSTx"),
            ButtonId::Digit1 => ("1", "→R", "→P"),
            ButtonId::Digit2 => ("2", "→H.MS", "→H"),
            ButtonId::Digit3 => ("3", "→RAD", "→DEG"),
            ButtonId::Subtraction => ("−", "Re≷Im", "TEST"),
            ButtonId::On => ("ON", "", ""),
            ButtonId::ShiftF => ("f", "", ""),
            ButtonId::ShiftG => ("g", "", ""),
            ButtonId::Sto => ("STO", "FRAC", "INT"),
            ButtonId::Rcl => ("RCL", "USER", "MEM"),
            ButtonId::Digit0 => ("0", "x!", "x̄"),
            ButtonId::Decimal => ("•", "s", "ŷ,r"),
            ButtonId::Sum => ("Σ+", "L.R.", "Σ-"),
            ButtonId::Addition => ("+", "Py,x", "Cy,x"),
        };
        KeyLabels { plain, f, g }
    }

    /// The character a digit key types, if this is a digit key
    pub fn digit(self) -> Option<char> {
        match self {
            ButtonId::Digit0 => Some('0'),
            ButtonId::Digit1 => Some('1'),
            ButtonId::Digit2 => Some('2'),
            ButtonId::Digit3 => Some('3'),
            ButtonId::Digit4 => Some('4'),
            ButtonId::Digit5 => Some('5'),
            ButtonId::Digit6 => Some('6'),
            ButtonId::Digit7 => Some('7'),
            ButtonId::Digit8 => Some('8'),
            ButtonId::Digit9 => Some('9'),
            _ => None,
        }
    }

    /// Digit keys and the decimal point feed the entry buffer when unshifted
    pub fn is_entry_key(self) -> bool {
        self.digit().is_some() || self == ButtonId::Decimal
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<ButtonId> for String {
    fn from(button: ButtonId) -> Self {
        button.id().to_string()
    }
}

impl TryFrom<String> for ButtonId {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for ButtonId {
    type Err = CalcError;

    /// Parse a stable id or one of the short aliases (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();

        if let Some(button) = ButtonId::ALL.iter().find(|b| b.id() == token) {
            return Ok(*button);
        }

        let button = match token.as_str() {
            "0" => ButtonId::Digit0,
            "1" => ButtonId::Digit1,
            "2" => ButtonId::Digit2,
            "3" => ButtonId::Digit3,
            "4" => ButtonId::Digit4,
            "5" => ButtonId::Digit5,
            "6" => ButtonId::Digit6,
            "7" => ButtonId::Digit7,
            "8" => ButtonId::Digit8,
            "9" => ButtonId::Digit9,
            "." | "dot" => ButtonId::Decimal,
            "+" | "add" => ButtonId::Addition,
            "-" | "sub" => ButtonId::Subtraction,
            "*" | "x" | "mul" => ButtonId::Multiplication,
            "/" | "div" => ButtonId::Division,
            "f" => ButtonId::ShiftF,
            "g" => ButtonId::ShiftG,
            "sqrt" => ButtonId::SqrtX,
            "exp" => ButtonId::ExpX,
            "10x" => ButtonId::TenX,
            "^" | "pow" | "yx" => ButtonId::WyeX,
            "1/x" | "inv" => ButtonId::InverseX,
            "swap" | "x<>y" => ButtonId::XSwapY,
            "rdn" | "rolldown" => ButtonId::RollDown,
            "bsp" | "<-" => ButtonId::Backspace,
            "ent" => ButtonId::Enter,
            "r/s" => ButtonId::RunStop,
            "reset" | "clear" => ButtonId::On,
            _ => return Err(CalcError::unknown_button(s)),
        };
        Ok(button)
    }
}

/// Parse a whitespace-separated key sequence such as `"2 enter 3 +"`
pub fn parse_keys(input: &str) -> Result<Vec<ButtonId>> {
    input.split_whitespace().map(str::parse).collect()
}
