//! Error types for the emission engine

use crate::validation::RuleViolation;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EconomicsError>;

/// Failures while turning raw text into a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Text does not have the expected numeric shape
    #[error("Invalid number format: {0:?}")]
    InvalidNumberFormat(String),

    /// Scaled value does not fit the supported integer width
    #[error("Arithmetic overflow: {0:?} exceeds the supported integer width")]
    ArithmeticOverflow(String),
}

impl NormalizeError {
    /// Incomplete input is treated as a zero field rather than an error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidNumberFormat(_))
    }
}

/// Errors that can cross the engine boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomicsError {
    /// A form field could not be normalized
    #[error("Field `{field}` could not be normalized: {source}")]
    Normalize {
        field: &'static str,
        #[source]
        source: NormalizeError,
    },

    /// Launch parameters failed validation
    #[error("Launch parameters rejected: {0}")]
    InvalidLaunch(RuleViolation),

    /// A validated value does not fit the instruction argument width
    #[error("Field `{field}` does not fit the launch instruction width")]
    InstructionOverflow { field: &'static str },
}

impl EconomicsError {
    /// Stable error code for host applications
    pub fn code(&self) -> u32 {
        match self {
            Self::Normalize { source: NormalizeError::InvalidNumberFormat(_), .. } => 2001,
            Self::Normalize { source: NormalizeError::ArithmeticOverflow(_), .. } => 2002,
            Self::InvalidLaunch(rule) => rule.code(),
            Self::InstructionOverflow { .. } => 2003,
        }
    }

    /// Check if the user can fix the error by editing the form
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Normalize { source, .. } => source.is_recoverable(),
            Self::InvalidLaunch(_) => true,
            Self::InstructionOverflow { .. } => false,
        }
    }
}
