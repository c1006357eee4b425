//! # Credit Card Circuit
//!
//! Reference card-network circuit. Approves any amount up to the configured
//! approval limit and declines above it. Deterministic and in-process; a
//! production deployment swaps this for a processor-backed implementation of
//! the same trait.

use crate::config::CircuitConfig;
use async_trait::async_trait;
use gateway_core::{Amount, Circuit, PaymentResult};
use tracing::info;

/// Card-network payment circuit
pub struct CreditCardCircuit {
    config: CircuitConfig,
}

impl CreditCardCircuit {
    /// Env var prefix for this circuit's configuration
    pub const ENV_PREFIX: &'static str = "CREDIT_CARD";

    /// Create a circuit with explicit configuration
    pub fn new(config: CircuitConfig) -> Self {
        Self { config }
    }

    /// Create a circuit configured from `CREDIT_CARD_*` env vars
    pub fn from_env() -> PaymentResult<Self> {
        Ok(Self::new(CircuitConfig::from_env(Self::ENV_PREFIX)?))
    }
}

#[async_trait]
impl Circuit for CreditCardCircuit {
    async fn pay(&self, amount: &Amount) -> PaymentResult<bool> {
        let accepted = amount.value <= self.config.approval_limit;

        info!(
            circuit = self.name(),
            merchant = %self.config.merchant_id,
            amount = %amount.display(),
            accepted,
            "card authorization attempt"
        );

        Ok(accepted)
    }

    fn name(&self) -> &'static str {
        "credit_card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn circuit(limit: rust_decimal::Decimal) -> CreditCardCircuit {
        CreditCardCircuit::new(CircuitConfig::new("acct_card", limit))
    }

    #[tokio::test]
    async fn test_accepts_within_limit() {
        let circuit = circuit(dec!(100));

        assert!(circuit.pay(&Amount::eur(dec!(100))).await.unwrap());
        assert!(circuit.pay(&Amount::eur(dec!(0.01))).await.unwrap());
    }

    #[tokio::test]
    async fn test_declines_above_limit() {
        let circuit = circuit(dec!(100));

        assert!(!circuit.pay(&Amount::eur(dec!(100.01))).await.unwrap());
    }
}
