//! Entry buffer
//!
//! Holds the digits of a number being typed. An empty buffer means no entry is
//! pending. The content is always a prefix of a valid decimal literal: an
//! optional leading `-`, digits, and at most one `.`.

use crate::error::{CalcError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
    max_len: usize,
    /// The `0` before the point was added by a leading `.`, not typed
    implicit_zero: bool,
}

impl EntryBuffer {
    /// `max_len` counts every character, sign and decimal point included
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
            implicit_zero: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.implicit_zero = false;
    }

    fn room(&self) -> usize {
        self.max_len.saturating_sub(self.text.len())
    }

    /// Append a digit or the decimal point
    ///
    /// Returns `false` when the character was rejected: a second decimal point,
    /// a character beyond the display capacity, or anything that is not a digit.
    pub fn append(&mut self, c: char) -> bool {
        match c {
            '.' => {
                let needs_zero = self.text.is_empty() || self.text == "-";
                let needed = if needs_zero { 2 } else { 1 };
                if self.text.contains('.') || self.room() < needed {
                    return false;
                }
                if needs_zero {
                    self.text.push('0');
                    self.implicit_zero = true;
                }
                self.text.push('.');
                true
            },
            '0'..='9' => {
                if self.room() == 0 {
                    return false;
                }
                self.text.push(c);
                true
            },
            _ => false,
        }
    }

    /// Toggle the leading sign of a pending entry
    ///
    /// Returns `false` when a full buffer has no room for the sign.
    pub fn toggle_sign(&mut self) -> bool {
        if let Some(rest) = self.text.strip_prefix('-') {
            self.text = rest.to_string();
            true
        } else if self.room() > 0 {
            self.text.insert(0, '-');
            true
        } else {
            false
        }
    }

    /// Delete the last character
    ///
    /// A bare sign left behind empties the buffer, as does a `0.` whose zero
    /// came from a leading point. A typed `0.` stays.
    pub fn backspace(&mut self) {
        self.text.pop();
        let residue = match self.text.as_str() {
            "-" => true,
            "0." | "-0." => self.implicit_zero,
            _ => false,
        };
        if residue {
            self.clear();
        }
    }

    /// Take the pending entry as a number, leaving the buffer empty
    ///
    /// `Ok(None)` when nothing was pending.
    pub fn take(&mut self) -> Result<Option<f64>> {
        if self.text.is_empty() {
            return Ok(None);
        }
        self.implicit_zero = false;
        let text = std::mem::take(&mut self.text);
        text.parse::<f64>()
            .map(Some)
            .map_err(|e| CalcError::parse(format!("'{}': {}", text, e)))
    }

    #[cfg(test)]
    pub(crate) fn set_raw(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
