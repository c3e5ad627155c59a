//! CalcEngine - the calculator state machine
//!
//! One engine value owns the register stack, entry buffer, shift keys and
//! modes. Shells feed it key presses through [`CalcEngine::handle_button`] and
//! read back [`CalcEngine::current_display`]; nothing else mutates the state.
//!
//! Each press is processed to completion:
//! 1. a lit error indicator is cleared
//! 2. f/g toggle their flag and stop there
//! 3. any other key resolves its variant (consuming a shift) and looks up its
//!    operation in the dispatch table
//! 4. the operation commits a pending entry if it needs to, then runs
//! 5. the display is recomputed

use crate::button::ButtonId;
use crate::config::{EngineConfig, UnaryPolicy};
use crate::dispatch::{self, Operation, UnaryOp};
use crate::display::{DisplayFormatter, DisplayState, Indicators};
use crate::entry::EntryBuffer;
use crate::error::{CalcError, Result};
use crate::mode::ModeState;
use crate::modifier::ModifierState;
use crate::ops;
use crate::stack::{RegisterStack, UNDEFINED};
use std::f64::consts::PI;
use tracing::{debug, info, warn};

/// Calculator engine
///
/// # Example
/// ```
/// use rpn_calc::{ButtonId, CalcEngine};
///
/// let mut engine = CalcEngine::default();
/// for button in [ButtonId::Digit2, ButtonId::Enter, ButtonId::Digit3, ButtonId::Addition] {
///     engine.handle_button(button);
/// }
/// assert_eq!(engine.x(), 5.0);
/// assert_eq!(engine.current_display().text(), "5.0000    ");
/// ```
#[derive(Debug, Clone)]
pub struct CalcEngine {
    config: EngineConfig,
    stack: RegisterStack,
    entry: EntryBuffer,
    modifiers: ModifierState,
    mode: ModeState,
    formatter: DisplayFormatter,
    error: bool,
    display: DisplayState,
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalcEngine {
    pub fn new(config: EngineConfig) -> Self {
        let config = config.normalized();
        let mode = ModeState::new(config.default_fix_digits, config.default_angle_unit);
        let formatter = DisplayFormatter::new(config.display_width, config.thousands_separators);

        let mut engine = Self {
            entry: EntryBuffer::new(config.display_width),
            stack: RegisterStack::new(),
            modifiers: ModifierState::new(),
            mode,
            formatter,
            error: false,
            display: DisplayState {
                cells: Vec::new(),
                indicators: Indicators::new(false, false, mode.angle_unit(), mode.fix_digits(), false),
            },
            config,
        };
        engine.refresh_display();
        engine
    }

    // === Entry points ===

    /// Process one key press
    pub fn handle_button(&mut self, button: ButtonId) {
        self.error = false;

        match button {
            ButtonId::ShiftF => self.modifiers.toggle_f(),
            ButtonId::ShiftG => self.modifiers.toggle_g(),
            _ => {
                let variant = self.modifiers.resolve();
                let op = dispatch::operation(button, variant);
                debug!(button = %button, ?variant, ?op, "key");
                self.execute(op);
            },
        }

        self.refresh_display();
    }

    /// Process a sequence of key presses in order
    pub fn handle_buttons(&mut self, buttons: impl IntoIterator<Item = ButtonId>) {
        for button in buttons {
            self.handle_button(button);
        }
    }

    /// Snapshot of the display after the last event
    pub fn current_display(&self) -> DisplayState {
        self.display.clone()
    }

    /// Full reset: registers undefined, entry and shifts cleared, modes restored
    pub fn reset(&mut self) {
        self.stack = RegisterStack::new();
        self.entry.clear();
        self.modifiers.clear();
        self.mode = ModeState::new(
            self.config.default_fix_digits,
            self.config.default_angle_unit,
        );
        self.error = false;
        info!(
            fix_digits = self.mode.fix_digits(),
            angle = %self.mode.angle_unit(),
            "calculator reset"
        );
        self.refresh_display();
    }

    // === Read-only views ===

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stack(&self) -> &RegisterStack {
        &self.stack
    }

    /// Registers as `[X, Y, Z, T]`
    pub fn registers(&self) -> [f64; 4] {
        self.stack.values()
    }

    pub fn x(&self) -> f64 {
        self.stack.x()
    }

    pub fn entry(&self) -> &str {
        self.entry.as_str()
    }

    pub fn mode(&self) -> ModeState {
        self.mode
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    // === Execution ===

    fn execute(&mut self, op: Operation) {
        if op.commits_entry() {
            self.commit();
        }

        let before = self.stack;
        if let Err(e) = self.apply(op) {
            // Y/Z/T keep their values from before the operation
            self.stack = before;
            self.recover(e);
        }
    }

    /// Push a pending entry onto the stack
    fn commit(&mut self) {
        match self.entry.take() {
            Ok(Some(value)) => self.stack.push_top(value),
            Ok(None) => {},
            Err(e) => {
                self.stack.push_top(UNDEFINED);
                self.recover(e);
            },
        }
    }

    fn recover(&mut self, error: CalcError) {
        warn!(error = %error, "calculation error, X set to undefined");
        self.stack.set_top(UNDEFINED);
        self.error = true;
    }

    fn apply(&mut self, op: Operation) -> Result<()> {
        match op {
            Operation::Digit(c) => {
                if !self.entry.append(c) {
                    debug!(digit = %c, entry = self.entry.as_str(), "entry full or invalid, ignored");
                }
            },
            Operation::Enter | Operation::Noop => {},
            Operation::Reset => self.reset(),
            Operation::ChangeSign => {
                if self.entry.is_empty() {
                    self.unary(UnaryOp::Negate)?;
                } else {
                    self.entry.toggle_sign();
                }
            },
            Operation::Backspace => {
                if self.entry.is_empty() {
                    self.stack.set_top(0.0);
                } else {
                    self.entry.backspace();
                }
            },
            Operation::ClearX => self.stack.set_top(0.0),
            Operation::Binary(binary) => {
                let a = self.stack.drop();
                let result = binary.apply(a, self.stack.x())?;
                self.stack.set_top(result);
            },
            Operation::Power => {
                let a = self.stack.drop();
                let b = self.stack.pop_top();
                self.stack.set_top(ops::power(a, b)?);
            },
            Operation::Percent(percent) => {
                let x = self.stack.pop_top();
                let result = percent.apply(self.stack.x(), x)?;
                self.stack.push_top(result);
            },
            Operation::Unary(unary) => self.unary(unary)?,
            Operation::SetFix => {
                let digits = self.stack.pop_top();
                self.mode.set_fix_from(digits);
            },
            Operation::SetAngle(unit) => self.mode.set_angle_unit(unit),
            Operation::SwapXY => self.stack.swap_xy(),
            Operation::RollDown => self.stack.roll_down(),
            Operation::RollUp => self.stack.roll_up(),
            Operation::Pi => self.stack.push_top(PI),
        }
        Ok(())
    }

    fn unary(&mut self, op: UnaryOp) -> Result<()> {
        let x = self.stack.pop_top();
        let result = op.apply(x, self.mode.angle_unit(), self.mode.fix_digits())?;

        match self.config.unary_policy {
            UnaryPolicy::Preserve => self.stack.push_top(result),
            UnaryPolicy::Drain => self.stack.set_top(result),
        }

        if op.is_forward_trig() && self.config.trig_extra_drain {
            self.stack.drop();
        }
        Ok(())
    }

    fn refresh_display(&mut self) {
        let cells = if self.error {
            self.formatter.error_cells()
        } else if !self.entry.is_empty() {
            self.formatter.entry_cells(self.entry.as_str())
        } else {
            self.formatter.value_cells(self.stack.x(), self.mode.fix_digits())
        };

        self.display = DisplayState {
            cells,
            indicators: Indicators::new(
                self.modifiers.f_active(),
                self.modifiers.g_active(),
                self.mode.angle_unit(),
                self.mode.fix_digits(),
                self.error,
            ),
        };
    }
}
