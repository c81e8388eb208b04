//! Error conditions reported by the arithmetic layers.

use thiserror::Error;

/// Every failure an arithmetic operation can report.
///
/// All of these are returned to the caller; nothing is clamped or truncated
/// silently. [`Error::InvariantViolation`] is the exception in spirit: it marks
/// an internal inconsistency and is never expected during normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Dividing a `BigInt` or `BigDecimal` by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A character (or an empty / sign-only digit string) is not valid for
    /// the requested base.
    #[error("invalid digit string {string:?} for base {base}")]
    InvalidDigit { string: String, base: u32 },

    /// A value cannot be represented in the requested native type, or the
    /// requested conversion is not recognized at all.
    #[error("unsupported conversion: {0}")]
    UnsupportedConversion(String),

    /// A decimal exponent exceeds what a native-width position index can
    /// address, so the expanded representation cannot be produced.
    #[error("decimal exponent out of representable range")]
    ExponentOutOfRange,

    /// Internal inconsistency. Indicates a defect in this crate, not in the
    /// caller's input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
