//! Display formatter
//!
//! Projects engine state onto a fixed row of segmented cells plus the
//! annunciator flags. The projection is derived after every event and is never
//! read back by the engine.
//!
//! Layout rules:
//! - a pending entry is shown verbatim, one cell per character
//! - X is shown with exactly fix-digits decimals and thousands separators; an
//!   undefined X shows as zero
//! - a value too wide for the cells first loses decimals, then switches to a
//!   mantissa with a right-aligned exponent
//! - the error sentinel spells `Error`

use crate::mode::AngleUnit;
use serde::Serialize;

/// One display position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Blank,
    Sign,
    Point,
    Separator,
    Digit(u8),
    Letter(char),
}

impl Cell {
    pub fn as_char(self) -> char {
        match self {
            Cell::Blank => ' ',
            Cell::Sign => '-',
            Cell::Point => '.',
            Cell::Separator => ',',
            Cell::Digit(d) => char::from(b'0' + d),
            Cell::Letter(c) => c,
        }
    }

    fn from_char(c: char) -> Self {
        match c {
            '-' => Cell::Sign,
            '.' => Cell::Point,
            ',' => Cell::Separator,
            ' ' => Cell::Blank,
            _ => match c.to_digit(10) {
                Some(d) => Cell::Digit(d as u8),
                None => Cell::Letter(c),
            },
        }
    }
}

/// Annunciators shown under the digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicators {
    pub f: bool,
    pub g: bool,
    pub angle_unit: AngleUnit,
    /// `""`, `RAD` or `GRAD`
    pub angle_label: &'static str,
    pub fix_digits: u8,
    pub error: bool,
    // Reserved annunciators, never lit
    pub user: bool,
    pub begin: bool,
    pub dmy: bool,
    pub complex: bool,
    pub prgm: bool,
}

impl Indicators {
    pub fn new(f: bool, g: bool, angle_unit: AngleUnit, fix_digits: u8, error: bool) -> Self {
        Self {
            f,
            g,
            angle_unit,
            angle_label: angle_unit.label(),
            fix_digits,
            error,
            user: false,
            begin: false,
            dmy: false,
            complex: false,
            prgm: false,
        }
    }
}

/// Everything a shell needs to draw the calculator face
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub cells: Vec<Cell>,
    pub indicators: Indicators,
}

impl DisplayState {
    /// Cells as plain text, one character per cell
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.as_char()).collect()
    }
}

/// Renders values and entries into a fixed number of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormatter {
    width: usize,
    thousands_separators: bool,
}

impl DisplayFormatter {
    pub fn new(width: usize, thousands_separators: bool) -> Self {
        Self {
            width,
            thousands_separators,
        }
    }

    /// Raw pending entry
    pub fn entry_cells(&self, entry: &str) -> Vec<Cell> {
        self.fit(entry)
    }

    pub fn error_cells(&self) -> Vec<Cell> {
        self.fit("Error")
    }

    /// Committed value with `fix_digits` decimals
    pub fn value_cells(&self, value: f64, fix_digits: u8) -> Vec<Cell> {
        let value = if value.is_nan() { 0.0 } else { value };

        for decimals in (0..=usize::from(fix_digits)).rev() {
            let text = self.fixed_text(value, decimals);
            if text.len() <= self.width {
                return self.fit(&text);
            }
        }
        self.fit(&self.scientific_text(value))
    }

    fn fixed_text(&self, value: f64, decimals: usize) -> String {
        let digits = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits.as_str(), None),
        };

        let mut text = String::with_capacity(digits.len() + 4);
        let shows_nonzero = digits.chars().any(|c| matches!(c, '1'..='9'));
        if value < 0.0 && shows_nonzero {
            text.push('-');
        }
        if self.thousands_separators {
            text.push_str(&group_thousands(int_part));
        } else {
            text.push_str(int_part);
        }
        if let Some(frac_part) = frac_part {
            text.push('.');
            text.push_str(frac_part);
        }
        text
    }

    /// Mantissa on the left, signed exponent flush right
    fn scientific_text(&self, value: f64) -> String {
        let sign_len = usize::from(value < 0.0);
        let exponent_len = if value.abs() >= 1e100 || value.abs() < 1e-99 {
            3
        } else {
            2
        };
        // sign, leading digit, point, gap, exponent sign, exponent digits
        let fixed_len = sign_len + 1 + 1 + 1 + 1 + exponent_len;
        let decimals = self.width.saturating_sub(fixed_len);

        let formatted = format!("{:.*e}", decimals, value);
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let exponent_text = format!(
            "{}{:0width$}",
            if exponent < 0 { '-' } else { ' ' },
            exponent.unsigned_abs(),
            width = exponent_len
        );
        let gap = self
            .width
            .saturating_sub(mantissa.len() + exponent_text.len());
        format!("{}{}{}", mantissa, " ".repeat(gap), exponent_text)
    }

    /// Map characters onto exactly `width` cells, blank-padded on the right
    fn fit(&self, text: &str) -> Vec<Cell> {
        let mut cells: Vec<Cell> = text.chars().take(self.width).map(Cell::from_char).collect();
        cells.resize(self.width, Cell::Blank);
        cells
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
