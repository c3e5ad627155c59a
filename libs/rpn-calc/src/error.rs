//! Error types for rpn-calc

use thiserror::Error;

/// Calculation errors
///
/// `Domain` and `Parse` never escape [`CalcEngine::handle_button`](crate::CalcEngine::handle_button):
/// the engine turns them into the NaN sentinel in X and lights the error indicator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown button: {0}")]
    UnknownButton(String),
}

impl CalcError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unknown_button(token: impl Into<String>) -> Self {
        Self::UnknownButton(token.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
