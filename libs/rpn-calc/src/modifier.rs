//! Shift keys
//!
//! f and g are independent one-shot flags. Pressing a shift key toggles its
//! own flag only. The next functional key consumes g if it is armed,
//! otherwise f; the other flag stays armed.

/// Which behavior of a key a press invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Plain,
    F,
    G,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    f_active: bool,
    g_active: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn f_active(&self) -> bool {
        self.f_active
    }

    pub fn g_active(&self) -> bool {
        self.g_active
    }

    pub fn toggle_f(&mut self) {
        self.f_active = !self.f_active;
    }

    pub fn toggle_g(&mut self) {
        self.g_active = !self.g_active;
    }

    /// True when the next key press will run an alternate behavior
    pub fn is_armed(&self) -> bool {
        self.f_active || self.g_active
    }

    /// Resolve and consume the modifier for a functional key press
    pub fn resolve(&mut self) -> Variant {
        if self.g_active {
            self.g_active = false;
            Variant::G
        } else if self.f_active {
            self.f_active = false;
            Variant::F
        } else {
            Variant::Plain
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
