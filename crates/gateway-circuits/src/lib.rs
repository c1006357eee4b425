//! # gateway-circuits
//!
//! Reference circuit implementations for circuit-gateway-rs.
//!
//! Two circuits ship with the workspace:
//!
//! 1. **CreditCardCircuit** — card-network circuit
//! 2. **PaypalCircuit** — wallet circuit
//!
//! Both are deterministic, in-process collaborators: each approves amounts
//! up to its configured limit and declines above it. They exist to wire a
//! working gateway without a payment processor; real integrations implement
//! the same `gateway_core::Circuit` trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gateway_circuits::{CreditCardCircuit, PaypalCircuit};
//! use gateway_core::PaymentGateway;
//! use std::sync::Arc;
//!
//! // Circuits configured from CREDIT_CARD_* / PAYPAL_* env vars
//! let gateway = PaymentGateway::with_circuits(
//!     Arc::new(CreditCardCircuit::from_env()?),
//!     Arc::new(PaypalCircuit::from_env()?),
//! );
//! ```

pub mod config;
pub mod credit_card;
pub mod paypal;

// Re-exports
pub use config::CircuitConfig;
pub use credit_card::CreditCardCircuit;
pub use paypal::PaypalCircuit;
