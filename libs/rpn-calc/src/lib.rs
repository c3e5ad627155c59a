//! rpn-calc - Four-register RPN calculator engine
//!
//! The arithmetic and state core of a classic shifted-key scientific
//! calculator. A shell sends discrete key presses and draws the display
//! snapshot the engine publishes after each one.
//!
//! # Features
//!
//! - **Register stack**: X, Y, Z, T with the `drop` / `pop_top` / `push_top` primitives
//! - **Entry buffer**: digits typed before they are committed to X
//! - **Shift keys**: one-shot f and g selecting a key's alternate functions
//! - **Modes**: fix-digits display precision and DEG/RAD/GRAD angle units
//! - **Display**: fixed-width segmented cells plus annunciators
//!
//! # Example
//!
//! ```rust
//! use rpn_calc::{parse_keys, CalcEngine};
//!
//! let mut engine = CalcEngine::default();
//! engine.handle_buttons(parse_keys("1 0 enter 4 -").unwrap());
//! assert_eq!(engine.x(), 6.0);
//!
//! // f FIX with 2 in X shows two decimals from now on
//! engine.handle_buttons(parse_keys("2 f 7").unwrap());
//! assert_eq!(engine.current_display().text(), "6.00      ");
//!
//! // Division by zero lights the error indicator instead of failing
//! engine.handle_buttons(parse_keys("5 enter 0 /").unwrap());
//! assert!(engine.current_display().indicators.error);
//! ```
//!
//! # Key functions
//!
//! | Key | Plain | f | g |
//! |-----|-------|---|---|
//! | `√x` | square root | | x² |
//! | `eˣ` | eˣ | | LN |
//! | `10ˣ` | 10ˣ | | LOG |
//! | `yˣ` | yˣ | | % |
//! | `1/x` | reciprocal | | Δ% |
//! | `CHS` | change sign | | ABS |
//! | `7` `8` `9` | digits | FIX (7) | DEG / RAD / GRD |
//! | `0` | digit | x! | |
//! | `SIN` `COS` `TAN` | trig | | inverse trig |
//! | `EEX` | | | π |
//! | `R↓` | roll down | | roll up |
//! | `x≷y` | swap | | RND |
//! | `←` | backspace | | CLx |
//! | `STO` | | FRAC | INT |
//! | `ON` | reset | reset | reset |
//!
//! Every other key/shift pair is reserved and does nothing beyond consuming
//! the shift.

pub mod button;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod engine;
pub mod entry;
pub mod error;
pub mod mode;
pub mod modifier;
pub mod ops;
pub mod stack;

// Re-exports for convenience
pub use button::{parse_keys, ButtonId, KeyLabels};
pub use config::{EngineConfig, UnaryPolicy};
pub use display::{Cell, DisplayState, Indicators};
pub use engine::CalcEngine;
pub use error::{CalcError, Result};
pub use mode::AngleUnit;
pub use modifier::Variant;
pub use stack::RegisterStack;
