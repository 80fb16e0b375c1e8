//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Only the parsing surfaces produce these. Conversion, raises, and
/// relationship assignment never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid money: {0}")]
    InvalidMoney(String),

    #[error("Invalid compensation: {0}")]
    InvalidCompensation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_currency_display() {
        let error = DomainError::UnknownCurrency("XYZ".to_string());
        assert_eq!(error.to_string(), "Unknown currency: XYZ");
    }

    #[test]
    fn test_invalid_compensation_display() {
        let error = DomainError::InvalidCompensation("tips:5".to_string());
        assert_eq!(error.to_string(), "Invalid compensation: tips:5");
    }
}
