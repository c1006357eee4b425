//! # Circuit Configuration
//!
//! Configuration for the reference circuits.
//! Merchant credentials and limits are loaded from environment variables,
//! one prefix per circuit (`CREDIT_CARD_*`, `PAYPAL_*`).

use gateway_core::PaymentError;
use rust_decimal::Decimal;
use std::env;

/// Per-circuit merchant configuration
#[derive(Debug, Clone)]
pub struct CircuitConfig {
    /// Merchant account identifier at the processor
    pub merchant_id: String,

    /// Largest amount this circuit will approve
    pub approval_limit: Decimal,
}

impl CircuitConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars for prefix `CREDIT_CARD`:
    /// - `CREDIT_CARD_MERCHANT_ID`
    /// - `CREDIT_CARD_APPROVAL_LIMIT`
    pub fn from_env(prefix: &str) -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let merchant_var = format!("{prefix}_MERCHANT_ID");
        let limit_var = format!("{prefix}_APPROVAL_LIMIT");

        let merchant_id = env::var(&merchant_var)
            .map_err(|_| PaymentError::Configuration(format!("{merchant_var} not set")))?;

        if merchant_id.trim().is_empty() {
            return Err(PaymentError::Configuration(format!(
                "{merchant_var} must not be empty"
            )));
        }

        let raw_limit = env::var(&limit_var)
            .map_err(|_| PaymentError::Configuration(format!("{limit_var} not set")))?;

        let approval_limit: Decimal = raw_limit.parse().map_err(|_| {
            PaymentError::Configuration(format!("{limit_var} is not a decimal: {raw_limit}"))
        })?;

        if approval_limit <= Decimal::ZERO {
            return Err(PaymentError::Configuration(format!(
                "{limit_var} must be positive"
            )));
        }

        Ok(Self {
            merchant_id,
            approval_limit,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(merchant_id: impl Into<String>, approval_limit: Decimal) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            approval_limit,
        }
    }
}
