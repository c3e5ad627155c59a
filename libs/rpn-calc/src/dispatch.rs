//! Operation dispatch table
//!
//! A total mapping from (button, resolved variant) to the operation the engine
//! performs. Pairs the calculator reserves for memory, programming, statistics
//! and conversions map to [`Operation::Noop`]: the press still consumes the
//! shift key but changes nothing else.

use crate::button::ButtonId;
use crate::error::Result;
use crate::mode::AngleUnit;
use crate::modifier::Variant;
use crate::ops;

/// Two-operand arithmetic: `a` is the value `drop()` returned (old Y)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Result for X given `a` (old Y) and the current X
    pub fn apply(self, a: f64, x: f64) -> Result<f64> {
        match self {
            BinaryOp::Add => ops::add(x, a),
            BinaryOp::Subtract => ops::subtract(a, x),
            BinaryOp::Multiply => ops::multiply(x, a),
            BinaryOp::Divide => ops::divide(a, x),
        }
    }
}

/// Percentages keep Y and replace X
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentOp {
    Percent,
    DeltaPercent,
}

impl PercentOp {
    pub fn apply(self, y: f64, x: f64) -> Result<f64> {
        match self {
            PercentOp::Percent => ops::percent(y, x),
            PercentOp::DeltaPercent => ops::delta_percent(y, x),
        }
    }
}

/// One-operand functions of X
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Sqrt,
    Square,
    Exp,
    Ln,
    TenPow,
    Log10,
    Reciprocal,
    Negate,
    Abs,
    Factorial,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Int,
    Frac,
    Round,
}

impl UnaryOp {
    /// SIN, COS and TAN (not their inverses)
    pub fn is_forward_trig(self) -> bool {
        matches!(self, UnaryOp::Sin | UnaryOp::Cos | UnaryOp::Tan)
    }

    pub fn apply(self, x: f64, unit: AngleUnit, fix_digits: u8) -> Result<f64> {
        match self {
            UnaryOp::Sqrt => ops::sqrt(x),
            UnaryOp::Square => ops::square(x),
            UnaryOp::Exp => ops::exp(x),
            UnaryOp::Ln => ops::ln(x),
            UnaryOp::TenPow => ops::ten_pow(x),
            UnaryOp::Log10 => ops::log10(x),
            UnaryOp::Reciprocal => ops::reciprocal(x),
            UnaryOp::Negate => ops::negate(x),
            UnaryOp::Abs => ops::abs(x),
            UnaryOp::Factorial => ops::factorial(x),
            UnaryOp::Sin => ops::sin(x, unit),
            UnaryOp::Cos => ops::cos(x, unit),
            UnaryOp::Tan => ops::tan(x, unit),
            UnaryOp::Asin => ops::asin(x, unit),
            UnaryOp::Acos => ops::acos(x, unit),
            UnaryOp::Atan => ops::atan(x, unit),
            UnaryOp::Int => ops::int_part(x),
            UnaryOp::Frac => ops::frac_part(x),
            UnaryOp::Round => ops::round_fix(x, fix_digits),
        }
    }
}

/// What a resolved key press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Digit or decimal point into the entry buffer
    Digit(char),
    Enter,
    Reset,
    /// CHS: sign of the entry while typing, otherwise negate X
    ChangeSign,
    /// ←: edit the entry while typing, otherwise clear X
    Backspace,
    ClearX,
    Binary(BinaryOp),
    Power,
    Percent(PercentOp),
    Unary(UnaryOp),
    SetFix,
    SetAngle(AngleUnit),
    SwapXY,
    RollDown,
    RollUp,
    Pi,
    Noop,
}

impl Operation {
    /// Whether a pending entry is committed before the operation runs
    pub fn commits_entry(self) -> bool {
        !matches!(
            self,
            Operation::Digit(_)
                | Operation::Reset
                | Operation::ChangeSign
                | Operation::Backspace
                | Operation::Noop
        )
    }
}

/// Look up the operation for a key press
///
/// Shift keys never reach the table; the engine toggles them before resolving.
pub fn operation(button: ButtonId, variant: Variant) -> Operation {
    use ButtonId as B;
    use Operation as Op;
    use Variant::{Plain, F, G};

    match (button, variant) {
        (B::SqrtX, Plain) => Op::Unary(UnaryOp::Sqrt),
        (B::SqrtX, G) => Op::Unary(UnaryOp::Square),
        (B::ExpX, Plain) => Op::Unary(UnaryOp::Exp),
        (B::ExpX, G) => Op::Unary(UnaryOp::Ln),
        (B::TenX, Plain) => Op::Unary(UnaryOp::TenPow),
        (B::TenX, G) => Op::Unary(UnaryOp::Log10),
        (B::WyeX, Plain) => Op::Power,
        (B::WyeX, G) => Op::Percent(PercentOp::Percent),
        (B::InverseX, Plain) => Op::Unary(UnaryOp::Reciprocal),
        (B::InverseX, G) => Op::Percent(PercentOp::DeltaPercent),
        (B::Chs, Plain) => Op::ChangeSign,
        (B::Chs, G) => Op::Unary(UnaryOp::Abs),

        (B::Digit7, F) => Op::SetFix,
        (B::Digit7, G) => Op::SetAngle(AngleUnit::Degrees),
        (B::Digit8, G) => Op::SetAngle(AngleUnit::Radians),
        (B::Digit9, G) => Op::SetAngle(AngleUnit::Gradians),
        (B::Digit0, F) => Op::Unary(UnaryOp::Factorial),
        (B::Decimal, Plain) => Op::Digit('.'),

        (B::Sin, Plain) => Op::Unary(UnaryOp::Sin),
        (B::Sin, G) => Op::Unary(UnaryOp::Asin),
        (B::Cos, Plain) => Op::Unary(UnaryOp::Cos),
        (B::Cos, G) => Op::Unary(UnaryOp::Acos),
        (B::Tan, Plain) => Op::Unary(UnaryOp::Tan),
        (B::Tan, G) => Op::Unary(UnaryOp::Atan),
        (B::Eex, G) => Op::Pi,

        (B::Addition, Plain) => Op::Binary(BinaryOp::Add),
        (B::Subtraction, Plain) => Op::Binary(BinaryOp::Subtract),
        (B::Multiplication, Plain) => Op::Binary(BinaryOp::Multiply),
        (B::Division, Plain) => Op::Binary(BinaryOp::Divide),

        (B::RollDown, Plain) => Op::RollDown,
        (B::RollDown, G) => Op::RollUp,
        (B::XSwapY, Plain) => Op::SwapXY,
        (B::XSwapY, G) => Op::Unary(UnaryOp::Round),
        (B::Backspace, Plain) => Op::Backspace,
        (B::Backspace, G) => Op::ClearX,
        (B::Enter, Plain) => Op::Enter,
        (B::Sto, F) => Op::Unary(UnaryOp::Frac),
        (B::Sto, G) => Op::Unary(UnaryOp::Int),

        (B::On, _) => Op::Reset,
        (other, Plain) => other.digit().map_or(Op::Noop, Op::Digit),

        // Programming, memory, statistics, conversions, SCI/ENG, matrix and
        // solver keys have no engine behavior.
        _ => Op::Noop,
    }
}
