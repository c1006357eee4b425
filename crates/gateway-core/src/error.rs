//! # Payment Error Types
//!
//! Typed error handling for the circuit-gateway.
//! All gateway operations return `Result<T, PaymentError>`.
//!
//! A declined payment is NOT an error: the gateway reports it as an absent
//! payment id. Errors cover invalid input, wiring problems, and failures
//! inside a circuit implementation.

use crate::circuit::CircuitKind;
use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Amount value was zero or negative
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// Currency absent or not the accepted settlement currency
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Order absent or without line items
    #[error("order must contain items")]
    EmptyOrder,

    /// No circuit bound to the requested selector
    #[error("no circuit registered for {0}")]
    CircuitNotRegistered(CircuitKind),

    /// Configuration errors (missing env vars, invalid values)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A circuit implementation failed before reaching an accept/decline
    /// outcome. The gateway propagates this unmodified.
    #[error("circuit error [{circuit}]: {message}")]
    CircuitFailure { circuit: String, message: String },
}

impl PaymentError {
    /// Returns true for errors the caller can fix by changing the request
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PaymentError::NonPositiveAmount
                | PaymentError::UnsupportedCurrency(_)
                | PaymentError::EmptyOrder
                | PaymentError::CircuitNotRegistered(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::NonPositiveAmount => 400,
            PaymentError::UnsupportedCurrency(_) => 400,
            PaymentError::EmptyOrder => 400,
            PaymentError::CircuitNotRegistered(_) => 400,
            PaymentError::Configuration(_) => 500,
            PaymentError::CircuitFailure { .. } => 502,
        }
    }
}

/// Result type alias for gateway operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        assert!(PaymentError::NonPositiveAmount.is_invalid_argument());
        assert!(PaymentError::UnsupportedCurrency("usd".into()).is_invalid_argument());
        assert!(PaymentError::EmptyOrder.is_invalid_argument());
        assert!(
            PaymentError::CircuitNotRegistered(CircuitKind::Paypal).is_invalid_argument()
        );
        assert!(!PaymentError::Configuration("missing key".into()).is_invalid_argument());
        assert!(!PaymentError::CircuitFailure {
            circuit: "paypal".into(),
            message: "timeout".into()
        }
        .is_invalid_argument());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PaymentError::NonPositiveAmount.status_code(), 400);
        assert_eq!(PaymentError::EmptyOrder.status_code(), 400);
        assert_eq!(PaymentError::Configuration("x".into()).status_code(), 500);
        assert_eq!(
            PaymentError::CircuitFailure {
                circuit: "credit_card".into(),
                message: "processor down".into()
            }
            .status_code(),
            502
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PaymentError::NonPositiveAmount.to_string(),
            "amount must be positive"
        );
        assert_eq!(
            PaymentError::UnsupportedCurrency("usd".into()).to_string(),
            "unsupported currency: usd"
        );
        assert_eq!(
            PaymentError::EmptyOrder.to_string(),
            "order must contain items"
        );
    }
}
