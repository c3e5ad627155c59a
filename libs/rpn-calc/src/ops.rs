//! Numeric kernels behind the function keys
//!
//! Every kernel takes register values and returns the value destined for X.
//! An undefined (NaN) operand yields an undefined result without error; a
//! mathematically undefined operation or an overflow on finite operands is a
//! [`CalcError::Domain`].

use crate::error::{CalcError, Result};
use crate::mode::AngleUnit;

/// Largest argument whose factorial is finite in f64
const MAX_FACTORIAL: f64 = 170.0;

fn any_undefined(operands: &[f64]) -> bool {
    operands.iter().any(|v| v.is_nan())
}

/// Reject non-finite results produced from finite operands
fn finite(name: &str, result: f64) -> Result<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::domain(format!("{}: result out of range", name)))
    }
}

/// Run a one-operand kernel with the shared undefined/overflow rules
fn unary(name: &str, x: f64, f: impl FnOnce(f64) -> Result<f64>) -> Result<f64> {
    if any_undefined(&[x]) {
        return Ok(f64::NAN);
    }
    finite(name, f(x)?)
}

/// Run a two-operand kernel with the shared undefined/overflow rules
fn binary(name: &str, y: f64, x: f64, f: impl FnOnce(f64, f64) -> Result<f64>) -> Result<f64> {
    if any_undefined(&[y, x]) {
        return Ok(f64::NAN);
    }
    finite(name, f(y, x)?)
}

// === Arithmetic ===

pub fn add(y: f64, x: f64) -> Result<f64> {
    binary("add", y, x, |y, x| Ok(y + x))
}

/// y − x
pub fn subtract(y: f64, x: f64) -> Result<f64> {
    binary("subtract", y, x, |y, x| Ok(y - x))
}

pub fn multiply(y: f64, x: f64) -> Result<f64> {
    binary("multiply", y, x, |y, x| Ok(y * x))
}

/// y ÷ x
pub fn divide(y: f64, x: f64) -> Result<f64> {
    binary("divide", y, x, |y, x| {
        if x == 0.0 {
            return Err(CalcError::domain("divide by zero"));
        }
        Ok(y / x)
    })
}

/// yˣ
pub fn power(y: f64, x: f64) -> Result<f64> {
    binary("power", y, x, |y, x| {
        let result = y.powf(x);
        if result.is_nan() {
            return Err(CalcError::domain(format!("{}^{} is not real", y, x)));
        }
        Ok(result)
    })
}

/// x% of y
pub fn percent(y: f64, x: f64) -> Result<f64> {
    binary("percent", y, x, |y, x| Ok(y * x / 100.0))
}

/// Percent change from y to x
pub fn delta_percent(y: f64, x: f64) -> Result<f64> {
    binary("delta_percent", y, x, |y, x| {
        if y == 0.0 {
            return Err(CalcError::domain("percent change from zero"));
        }
        Ok(100.0 * (x - y) / y)
    })
}

// === Powers and logarithms ===

pub fn sqrt(x: f64) -> Result<f64> {
    unary("sqrt", x, |x| {
        if x < 0.0 {
            return Err(CalcError::domain("square root of a negative number"));
        }
        Ok(x.sqrt())
    })
}

pub fn square(x: f64) -> Result<f64> {
    unary("square", x, |x| Ok(x * x))
}

pub fn exp(x: f64) -> Result<f64> {
    unary("exp", x, |x| Ok(x.exp()))
}

pub fn ln(x: f64) -> Result<f64> {
    unary("ln", x, |x| {
        if x <= 0.0 {
            return Err(CalcError::domain("logarithm of a non-positive number"));
        }
        Ok(x.ln())
    })
}

pub fn ten_pow(x: f64) -> Result<f64> {
    unary("ten_pow", x, |x| Ok(10f64.powf(x)))
}

pub fn log10(x: f64) -> Result<f64> {
    unary("log10", x, |x| {
        if x <= 0.0 {
            return Err(CalcError::domain("logarithm of a non-positive number"));
        }
        Ok(x.log10())
    })
}

pub fn reciprocal(x: f64) -> Result<f64> {
    unary("reciprocal", x, |x| {
        if x == 0.0 {
            return Err(CalcError::domain("reciprocal of zero"));
        }
        Ok(1.0 / x)
    })
}

/// x! for non-negative integers up to 170
pub fn factorial(x: f64) -> Result<f64> {
    unary("factorial", x, |x| {
        if x < 0.0 || x.fract() != 0.0 {
            return Err(CalcError::domain(format!(
                "factorial needs a non-negative integer, got {}",
                x
            )));
        }
        if x > MAX_FACTORIAL {
            return Err(CalcError::domain("factorial: result out of range"));
        }
        Ok((2..=x as u32).fold(1.0, |acc, n| acc * f64::from(n)))
    })
}

// === Sign and parts ===

pub fn negate(x: f64) -> Result<f64> {
    unary("negate", x, |x| Ok(-x))
}

pub fn abs(x: f64) -> Result<f64> {
    unary("abs", x, |x| Ok(x.abs()))
}

pub fn int_part(x: f64) -> Result<f64> {
    unary("int", x, |x| Ok(x.trunc()))
}

pub fn frac_part(x: f64) -> Result<f64> {
    unary("frac", x, |x| Ok(x.fract()))
}

/// Round to the number of decimals shown on the display
pub fn round_fix(x: f64, decimals: u8) -> Result<f64> {
    unary("round", x, |x| {
        let factor = 10f64.powi(i32::from(decimals));
        let scaled = x * factor;
        if !scaled.is_finite() {
            return Ok(x);
        }
        Ok(scaled.round() / factor)
    })
}

// === Trigonometry ===

pub fn sin(x: f64, unit: AngleUnit) -> Result<f64> {
    unary("sin", x, |x| Ok(unit.to_radians(x).sin()))
}

pub fn cos(x: f64, unit: AngleUnit) -> Result<f64> {
    unary("cos", x, |x| Ok(unit.to_radians(x).cos()))
}

pub fn tan(x: f64, unit: AngleUnit) -> Result<f64> {
    unary("tan", x, |x| Ok(unit.to_radians(x).tan()))
}

pub fn asin(x: f64, unit: AngleUnit) -> Result<f64> {
    unary("asin", x, |x| {
        if x.abs() > 1.0 {
            return Err(CalcError::domain("arcsine argument outside [-1, 1]"));
        }
        Ok(unit.from_radians(x.asin()))
    })
}

pub fn acos(x: f64, unit: AngleUnit) -> Result<f64> {
    unary("acos", x, |x| {
        if x.abs() > 1.0 {
            return Err(CalcError::domain("arccosine argument outside [-1, 1]"));
        }
        Ok(unit.from_radians(x.acos()))
    })
}

pub fn atan(x: f64, unit: AngleUnit) -> Result<f64> {
    unary("atan", x, |x| Ok(unit.from_radians(x.atan())))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn is_domain(result: Result<f64>) -> bool {
        matches!(result, Err(CalcError::Domain(_)))
    }

    #[test]
    fn test_arithmetic_operand_order() {
        assert_eq!(add(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(subtract(10.0, 4.0).unwrap(), 6.0);
        assert_eq!(multiply(6.0, 7.0).unwrap(), 42.0);
        assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(is_domain(divide(5.0, 0.0)));
        assert!(is_domain(reciprocal(0.0)));
    }

    #[test]
    fn test_undefined_operands_propagate_silently() {
        assert!(add(f64::NAN, 1.0).unwrap().is_nan());
        assert!(divide(f64::NAN, 0.0).unwrap().is_nan());
        assert!(sqrt(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_logs_and_roots() {
        assert_eq!(sqrt(16.0).unwrap(), 4.0);
        assert_eq!(sqrt(0.0).unwrap(), 0.0);
        assert!(is_domain(sqrt(-1.0)));
        assert!(is_domain(ln(0.0)));
        assert!(is_domain(log10(-10.0)));
        assert!((log10(1000.0).unwrap() - 3.0).abs() < EPS);
        assert!((ln(exp(2.5).unwrap()).unwrap() - 2.5).abs() < EPS);
        assert!((ten_pow(2.0).unwrap() - 100.0).abs() < EPS);
        assert_eq!(square(-3.0).unwrap(), 9.0);
    }

    #[test]
    fn test_power_domain() {
        assert!(is_domain(power(-8.0, 1.0 / 3.0)));
        assert!(is_domain(power(0.0, -1.0)));
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
    }

    #[test]
    fn test_overflow_is_domain_error() {
        assert!(is_domain(ten_pow(400.0)));
        assert!(is_domain(multiply(1e300, 1e300)));
        assert!(is_domain(exp(1000.0)));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0).unwrap(), 1.0);
        assert_eq!(factorial(5.0).unwrap(), 120.0);
        assert!(factorial(170.0).unwrap().is_finite());
        assert!(is_domain(factorial(171.0)));
        assert!(is_domain(factorial(-1.0)));
        assert!(is_domain(factorial(2.5)));
    }

    #[test]
    fn test_parts_and_rounding() {
        assert_eq!(int_part(-3.75).unwrap(), -3.0);
        assert_eq!(frac_part(-3.75).unwrap(), -0.75);
        assert_eq!(round_fix(3.14159, 2).unwrap(), 3.14);
        assert_eq!(round_fix(2.5, 0).unwrap(), 3.0);
        assert_eq!(negate(4.0).unwrap(), -4.0);
        assert_eq!(abs(-4.0).unwrap(), 4.0);
    }

    #[test]
    fn test_percentages() {
        assert_eq!(percent(200.0, 15.0).unwrap(), 30.0);
        assert_eq!(delta_percent(50.0, 75.0).unwrap(), 50.0);
        assert!(is_domain(delta_percent(0.0, 5.0)));
    }

    #[test]
    fn test_trig_units() {
        let by_degrees = sin(180.0, AngleUnit::Degrees).unwrap();
        let by_gradians = sin(200.0, AngleUnit::Gradians).unwrap();
        let by_radians = sin(PI, AngleUnit::Radians).unwrap();
        assert!((by_degrees - by_radians).abs() < EPS);
        assert!((by_gradians - by_radians).abs() < EPS);
        assert!((cos(60.0, AngleUnit::Degrees).unwrap() - 0.5).abs() < EPS);
        assert!((tan(50.0, AngleUnit::Gradians).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_inverse_trig_units() {
        assert!((asin(1.0, AngleUnit::Degrees).unwrap() - 90.0).abs() < EPS);
        assert!((acos(0.0, AngleUnit::Gradians).unwrap() - 100.0).abs() < EPS);
        assert!((atan(1.0, AngleUnit::Radians).unwrap() - PI / 4.0).abs() < EPS);
        assert!(is_domain(asin(1.5, AngleUnit::Degrees)));
    }
}
