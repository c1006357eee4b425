//! # Amount Types
//!
//! Monetary value types for the circuit-gateway.
//! An [`Amount`] pairs a decimal value with an optional ISO 4217 currency;
//! validation happens at the gateway, not at construction, so callers can
//! build whatever the request carried and let the gateway reject it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    EUR,
    USD,
    GBP,
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::EUR => "eur",
            Currency::USD => "usd",
            Currency::GBP => "gbp",
            Currency::CHF => "chf",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// The single currency the gateway settles in.
pub const ACCEPTED_CURRENCY: Currency = Currency::EUR;

/// A monetary amount as submitted by the caller.
///
/// The currency is optional because a request may omit it; the gateway
/// rejects absent or non-EUR currencies before dispatching to a circuit.
/// Compares by (value, currency) only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal value (exact, not floating point)
    pub value: Decimal,

    /// Currency, if the caller supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Amount {
    /// Create an amount with an explicit currency
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self {
            value,
            currency: Some(currency),
        }
    }

    /// Create an amount in the accepted settlement currency
    pub fn eur(value: Decimal) -> Self {
        Self::new(value, ACCEPTED_CURRENCY)
    }

    /// Create an amount with no currency attached
    pub fn currencyless(value: Decimal) -> Self {
        Self {
            value,
            currency: None,
        }
    }

    /// Check the strictly-positive invariant
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Check the settlement-currency invariant
    pub fn is_accepted_currency(&self) -> bool {
        self.currency == Some(ACCEPTED_CURRENCY)
    }

    /// Format for display (e.g., "€10.50", "10.50" when currencyless)
    pub fn display(&self) -> String {
        match self.currency {
            Some(Currency::EUR) => format!("€{}", self.value),
            Some(Currency::USD) => format!("${}", self.value),
            Some(Currency::GBP) => format!("£{}", self.value),
            Some(Currency::CHF) => format!("CHF {}", self.value),
            None => self.value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_invariant() {
        assert!(Amount::eur(dec!(0.01)).is_positive());
        assert!(!Amount::eur(dec!(0)).is_positive());
        assert!(!Amount::eur(dec!(-1)).is_positive());
    }

    #[test]
    fn test_currency_invariant() {
        assert!(Amount::eur(dec!(1)).is_accepted_currency());
        assert!(!Amount::new(dec!(1), Currency::USD).is_accepted_currency());
        assert!(!Amount::currencyless(dec!(1)).is_accepted_currency());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Amount::eur(dec!(10.50)), Amount::eur(dec!(10.50)));
        assert_ne!(Amount::eur(dec!(1)), Amount::new(dec!(1), Currency::USD));
        assert_ne!(Amount::eur(dec!(1)), Amount::currencyless(dec!(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::eur(dec!(10.50)).display(), "€10.50");
        assert_eq!(Amount::new(dec!(5), Currency::USD).display(), "$5");
        assert_eq!(Amount::currencyless(dec!(3)).display(), "3");
        assert_eq!(Currency::EUR.to_string(), "EUR");
    }
}
