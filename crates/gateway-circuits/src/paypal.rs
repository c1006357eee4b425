//! # PayPal Circuit
//!
//! Reference wallet circuit with the same approval-limit policy as the card
//! circuit. Kept as a separate type so the two can diverge once real
//! processor integrations land.

use crate::config::CircuitConfig;
use async_trait::async_trait;
use gateway_core::{Amount, Circuit, PaymentResult};
use tracing::info;

/// PayPal wallet payment circuit
pub struct PaypalCircuit {
    config: CircuitConfig,
}

impl PaypalCircuit {
    /// Env var prefix for this circuit's configuration
    pub const ENV_PREFIX: &'static str = "PAYPAL";

    /// Create a circuit with explicit configuration
    pub fn new(config: CircuitConfig) -> Self {
        Self { config }
    }

    /// Create a circuit configured from `PAYPAL_*` env vars
    pub fn from_env() -> PaymentResult<Self> {
        Ok(Self::new(CircuitConfig::from_env(Self::ENV_PREFIX)?))
    }
}

#[async_trait]
impl Circuit for PaypalCircuit {
    async fn pay(&self, amount: &Amount) -> PaymentResult<bool> {
        let accepted = amount.value <= self.config.approval_limit;

        info!(
            circuit = self.name(),
            merchant = %self.config.merchant_id,
            amount = %amount.display(),
            accepted,
            "wallet charge attempt"
        );

        Ok(accepted)
    }

    fn name(&self) -> &'static str {
        "paypal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_limit_policy() {
        let circuit = PaypalCircuit::new(CircuitConfig::new("merchant@shop.example", dec!(50)));

        assert!(circuit.pay(&Amount::eur(dec!(50))).await.unwrap());
        assert!(!circuit.pay(&Amount::eur(dec!(50.01))).await.unwrap());
    }
}
