//! Mode state: display precision and angle unit

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Largest fix-digits setting the display supports
pub const MAX_FIX_DIGITS: u8 = 9;

/// Fix-digits after a reset
pub const DEFAULT_FIX_DIGITS: u8 = 4;

/// Trigonometric angle unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
    Gradians,
}

impl AngleUnit {
    /// Convert an angle in this unit to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle * PI / 180.0,
            AngleUnit::Radians => angle,
            AngleUnit::Gradians => angle * PI / 200.0,
        }
    }

    /// Convert an angle in radians to this unit
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians * 180.0 / PI,
            AngleUnit::Radians => radians,
            AngleUnit::Gradians => radians * 200.0 / PI,
        }
    }

    /// Annunciator text; degrees is the unlabelled default
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "",
            AngleUnit::Radians => "RAD",
            AngleUnit::Gradians => "GRAD",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AngleUnit::Degrees => "DEG",
            AngleUnit::Radians => "RAD",
            AngleUnit::Gradians => "GRAD",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    fix_digits: u8,
    angle_unit: AngleUnit,
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(DEFAULT_FIX_DIGITS, AngleUnit::Degrees)
    }
}

impl ModeState {
    pub fn new(fix_digits: u8, angle_unit: AngleUnit) -> Self {
        Self {
            fix_digits: fix_digits.min(MAX_FIX_DIGITS),
            angle_unit,
        }
    }

    pub fn fix_digits(&self) -> u8 {
        self.fix_digits
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        self.angle_unit = unit;
    }

    /// Set fix-digits from a register value
    ///
    /// The value is truncated and clamped to `0..=MAX_FIX_DIGITS`. An undefined
    /// value leaves the setting unchanged.
    pub fn set_fix_from(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.fix_digits = value.trunc().clamp(0.0, f64::from(MAX_FIX_DIGITS)) as u8;
    }
}
