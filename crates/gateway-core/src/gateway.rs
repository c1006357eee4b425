//! # Payment Gateway
//!
//! The orchestration facade: validates a payment request, resolves the
//! requested circuit, dispatches exactly once, and maps the circuit's
//! accept/decline outcome to a payment id or absence.
//!
//! Per-call flow is linear:
//!
//! ```text
//! Start → Validating → Rejected(invalid argument)
//!                    → Dispatching → Accepted(payment id)
//!                                  → Declined(absent)
//! ```

use crate::amount::{Amount, ACCEPTED_CURRENCY};
use crate::circuit::{BoxedCircuit, CircuitKind, CircuitRegistry};
use crate::error::{PaymentError, PaymentResult};
use crate::order::Order;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Token returned for every accepted payment.
///
/// Placeholder until a processor-issued transaction reference is wired in;
/// the contract only requires a non-empty id on success.
pub const ACCEPTED_PAYMENT_ID: &str = "123456";

/// Identifier of an accepted payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentId(String);

impl PaymentId {
    fn accepted() -> Self {
        Self(ACCEPTED_PAYMENT_ID.to_string())
    }

    /// Get the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Facade in front of the payment circuits.
///
/// Constructed once with its circuit collaborators and stateless across
/// calls: the registry is never mutated after construction, so concurrent
/// `pay` calls are safe as long as each circuit tolerates concurrent use.
#[derive(Clone)]
pub struct PaymentGateway {
    circuits: CircuitRegistry,
}

impl PaymentGateway {
    /// Create a gateway over an already-populated registry
    pub fn new(circuits: CircuitRegistry) -> Self {
        Self { circuits }
    }

    /// Create a gateway with one circuit per known selector
    pub fn with_circuits(credit_card: BoxedCircuit, paypal: BoxedCircuit) -> Self {
        Self::new(
            CircuitRegistry::new()
                .with_circuit(CircuitKind::CreditCard, credit_card)
                .with_circuit(CircuitKind::Paypal, paypal),
        )
    }

    /// The registered circuits
    pub fn circuits(&self) -> &CircuitRegistry {
        &self.circuits
    }

    /// Validate a request and dispatch it to the selected circuit.
    ///
    /// # Returns
    /// * `Ok(Some(id))` — the circuit accepted the payment
    /// * `Ok(None)` — the circuit declined; a normal outcome, not an error
    /// * `Err(_)` — invalid input, unknown selector, or a circuit failure
    ///   (the latter propagates unmodified)
    pub async fn pay(
        &self,
        amount: &Amount,
        order: &Order,
        kind: CircuitKind,
    ) -> PaymentResult<Option<PaymentId>> {
        self.validate(amount, order)?;

        let circuit = self
            .circuits
            .get(kind)
            .ok_or(PaymentError::CircuitNotRegistered(kind))?;

        debug!(
            circuit = %kind,
            order_id = %order.id,
            amount = %amount.display(),
            "dispatching payment"
        );

        let accepted = circuit.pay(amount).await?;

        if accepted {
            let id = PaymentId::accepted();
            info!(circuit = %kind, order_id = %order.id, payment_id = %id, "payment accepted");
            Ok(Some(id))
        } else {
            info!(circuit = %kind, order_id = %order.id, "payment declined");
            Ok(None)
        }
    }

    /// Run the input checks, in contract order, independent of the selector
    fn validate(&self, amount: &Amount, order: &Order) -> PaymentResult<()> {
        if !amount.is_positive() {
            return Err(PaymentError::NonPositiveAmount);
        }

        if amount.currency != Some(ACCEPTED_CURRENCY) {
            let currency = amount
                .currency
                .map(|c| c.as_str().to_string())
                .unwrap_or_else(|| "absent".to_string());
            return Err(PaymentError::UnsupportedCurrency(currency));
        }

        if order.is_empty() {
            return Err(PaymentError::EmptyOrder);
        }

        Ok(())
    }
}
