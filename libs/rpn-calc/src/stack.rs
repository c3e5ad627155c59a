//! Register stack
//!
//! Four slots, X (displayed) through T (oldest). A slot is either a number or
//! the undefined sentinel (NaN); slots are never absent.
//!
//! The only mutation paths are [`RegisterStack::drop`], [`RegisterStack::pop_top`],
//! [`RegisterStack::push_top`] and writing an operation result into X. Every
//! rearrangement (x≷y, R↓, R↑) is composed from pops and pushes.

/// Undefined register sentinel
pub const UNDEFINED: f64 = f64::NAN;

/// Four-level register file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisterStack {
    x: f64,
    y: f64,
    z: f64,
    t: f64,
}

impl Default for RegisterStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterStack {
    /// All four registers undefined
    pub fn new() -> Self {
        Self {
            x: UNDEFINED,
            y: UNDEFINED,
            z: UNDEFINED,
            t: UNDEFINED,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    /// Registers as `[X, Y, Z, T]`
    pub fn values(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.t]
    }

    /// Return Y; then Y←Z, Z←T, T←undefined. X is untouched.
    pub fn drop(&mut self) -> f64 {
        let value = self.y;
        self.y = self.z;
        self.z = self.t;
        self.t = UNDEFINED;
        value
    }

    /// Return X; then X takes the value `drop()` returns
    pub fn pop_top(&mut self) -> f64 {
        let value = self.x;
        self.x = self.drop();
        value
    }

    /// T←Z, Z←Y, Y←X, X←v. The old T is lost.
    pub fn push_top(&mut self, value: f64) {
        self.t = self.z;
        self.z = self.y;
        self.y = self.x;
        self.x = value;
    }

    /// Write an operation result into X
    pub fn set_top(&mut self, value: f64) {
        self.x = value;
    }

    /// Exchange X and Y
    pub fn swap_xy(&mut self) {
        let x = self.pop_top();
        let y = self.pop_top();
        self.push_top(x);
        self.push_top(y);
    }

    /// R↓: X←Y, Y←Z, Z←T, T←X
    pub fn roll_down(&mut self) {
        let [x, y, z, t] = self.pop_all();
        self.push_top(x);
        self.push_top(t);
        self.push_top(z);
        self.push_top(y);
    }

    /// R↑: X←T, Y←X, Z←Y, T←Z
    pub fn roll_up(&mut self) {
        let [x, y, z, t] = self.pop_all();
        self.push_top(z);
        self.push_top(y);
        self.push_top(x);
        self.push_top(t);
    }

    fn pop_all(&mut self) -> [f64; 4] {
        [self.pop_top(), self.pop_top(), self.pop_top(), self.pop_top()]
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn sample() -> RegisterStack {
        RegisterStack::from_values(1.0, 2.0, 3.0, 4.0)
    }

    #[test]
    fn test_new_is_undefined() {
        let stack = RegisterStack::new();
        assert!(stack.values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_drop_leaves_x() {
        let mut stack = sample();
        assert_eq!(stack.drop(), 2.0);
        let [x, y, z, t] = stack.values();
        assert_eq!((x, y, z), (1.0, 3.0, 4.0));
        assert!(t.is_nan());
    }

    #[test]
    fn test_push_then_pop() {
        let mut stack = sample();
        stack.push_top(3.0);
        assert_eq!(stack.values(), [3.0, 1.0, 2.0, 3.0]);

        assert_eq!(stack.pop_top(), 3.0);
        let [x, y, z, t] = stack.values();
        assert_eq!((x, y, z), (1.0, 2.0, 3.0));
        assert!(t.is_nan());
    }

    #[test]
    fn test_drop_and_pop_do_not_commute() {
        let mut a = sample();
        let first = a.drop();
        let second = a.pop_top();
        assert_eq!((first, second), (2.0, 1.0));
        assert_eq!(a.x(), 3.0);

        let mut b = sample();
        let first = b.pop_top();
        let second = b.drop();
        assert_eq!((first, second), (1.0, 3.0));
        assert_eq!(b.x(), 2.0);
    }

    #[test]
    fn test_swap_xy() {
        let mut stack = sample();
        stack.swap_xy();
        assert_eq!(stack.values(), [2.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rolls() {
        let mut stack = sample();
        stack.roll_down();
        assert_eq!(stack.values(), [2.0, 3.0, 4.0, 1.0]);
        stack.roll_up();
        assert_eq!(stack.values(), [1.0, 2.0, 3.0, 4.0]);
        stack.roll_up();
        assert_eq!(stack.values(), [4.0, 1.0, 2.0, 3.0]);
    }
}
