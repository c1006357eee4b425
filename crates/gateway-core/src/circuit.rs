//! # Payment Circuit Trait
//!
//! Capability abstraction over payment backends.
//! Implementations: credit card network, PayPal, etc.
//!
//! Each circuit exposes a single `pay` operation taking a validated amount
//! and reporting accept/decline. The gateway treats the call as a black box:
//! no retries, no caching, no reinterpretation of the outcome. Circuits are
//! registered per [`CircuitKind`] in a [`CircuitRegistry`] at gateway
//! construction time.

use crate::amount::Amount;
use crate::error::PaymentResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Caller-facing selector for which circuit handles a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitKind {
    /// Card network circuit
    CreditCard,
    /// PayPal wallet circuit
    Paypal,
}

impl CircuitKind {
    /// Stable name used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CircuitKind::CreditCard => "credit_card",
            CircuitKind::Paypal => "paypal",
        }
    }
}

impl std::fmt::Display for CircuitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Core trait for payment circuit implementations.
///
/// `pay` charges the given amount against the external processor. This is
/// the sole side-effecting step in a payment flow and is potentially slow,
/// hence async. Implementations must be safe for concurrent calls.
#[async_trait]
pub trait Circuit: Send + Sync {
    /// Attempt to charge the amount.
    ///
    /// # Returns
    /// `Ok(true)` if the processor accepted the payment, `Ok(false)` if it
    /// declined. An `Err` means the circuit itself failed (processor
    /// unreachable, malformed response, ...) and propagates to the caller
    /// unmodified.
    async fn pay(&self, amount: &Amount) -> PaymentResult<bool>;

    /// Get the circuit name (for logging)
    fn name(&self) -> &'static str;
}

/// Type alias for a shared circuit (dynamic dispatch)
pub type BoxedCircuit = Arc<dyn Circuit>;

/// Registry mapping selectors to circuit instances.
///
/// Populated once at gateway construction and never mutated afterwards, so
/// lookups need no locking.
#[derive(Clone, Default)]
pub struct CircuitRegistry {
    circuits: HashMap<CircuitKind, BoxedCircuit>,
}

impl CircuitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            circuits: HashMap::new(),
        }
    }

    /// Register a circuit for a selector, replacing any previous binding
    pub fn register(&mut self, kind: CircuitKind, circuit: BoxedCircuit) {
        self.circuits.insert(kind, circuit);
    }

    /// Register with builder pattern
    pub fn with_circuit(mut self, kind: CircuitKind, circuit: BoxedCircuit) -> Self {
        self.register(kind, circuit);
        self
    }

    /// Get the circuit bound to a selector
    pub fn get(&self, kind: CircuitKind) -> Option<&BoxedCircuit> {
        self.circuits.get(&kind)
    }

    /// Check if a selector has a bound circuit
    pub fn has_circuit(&self, kind: CircuitKind) -> bool {
        self.circuits.contains_key(&kind)
    }

    /// List all registered selectors
    pub fn kinds(&self) -> Vec<CircuitKind> {
        self.circuits.keys().copied().collect()
    }

    /// Get number of registered circuits
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysAccept;

    #[async_trait]
    impl Circuit for AlwaysAccept {
        async fn pay(&self, _amount: &Amount) -> PaymentResult<bool> {
            Ok(true)
        }

        fn name(&self) -> &'static str {
            "always_accept"
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = CircuitRegistry::new();

        assert!(registry.is_empty());
        assert!(!registry.has_circuit(CircuitKind::Paypal));
        assert!(registry.get(CircuitKind::CreditCard).is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = CircuitRegistry::new()
            .with_circuit(CircuitKind::Paypal, Arc::new(AlwaysAccept));

        assert_eq!(registry.len(), 1);
        assert!(registry.has_circuit(CircuitKind::Paypal));
        assert!(!registry.has_circuit(CircuitKind::CreditCard));
        assert_eq!(registry.kinds(), vec![CircuitKind::Paypal]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CircuitKind::CreditCard.to_string(), "credit_card");
        assert_eq!(CircuitKind::Paypal.to_string(), "paypal");
    }
}
