//! Engine configuration

use crate::mode::{AngleUnit, DEFAULT_FIX_DIGITS, MAX_FIX_DIGITS};
use serde::{Deserialize, Serialize};

/// What a one-operand function does to the registers below X
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryPolicy {
    /// Pop X and push the result back: Y, Z and T are unchanged
    #[default]
    Preserve,
    /// Pop X and overwrite the new X with the result: the old Y is lost
    Drain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of display cells, also the entry digit limit
    pub display_width: usize,
    /// Fix-digits restored by reset
    pub default_fix_digits: u8,
    /// Angle unit restored by reset
    pub default_angle_unit: AngleUnit,
    pub unary_policy: UnaryPolicy,
    /// Drop one extra register after SIN/COS/TAN
    pub trig_extra_drain: bool,
    pub thousands_separators: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            display_width: 10,
            default_fix_digits: DEFAULT_FIX_DIGITS,
            default_angle_unit: AngleUnit::Degrees,
            unary_policy: UnaryPolicy::Preserve,
            trig_extra_drain: false,
            thousands_separators: true,
        }
    }
}

impl EngineConfig {
    /// Smallest display that can still show a signed mantissa and exponent
    pub const MIN_DISPLAY_WIDTH: usize = 8;

    /// Clamp out-of-range values into what the engine supports
    pub fn normalized(mut self) -> Self {
        self.display_width = self.display_width.max(Self::MIN_DISPLAY_WIDTH);
        self.default_fix_digits = self.default_fix_digits.min(MAX_FIX_DIGITS);
        self
    }
}
