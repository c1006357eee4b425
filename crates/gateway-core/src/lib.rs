//! # gateway-core
//!
//! Core types and traits for the circuit-gateway payment facade.
//!
//! This crate provides:
//! - `PaymentGateway` for validating and dispatching payment requests
//! - `Circuit` trait for implementing payment backends
//! - `Amount` and `Currency` monetary value types
//! - `Order` and `OrderItem` for the purchasable order
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use gateway_core::{Amount, CircuitKind, Order, OrderItem, PaymentGateway};
//! use rust_decimal_macros::dec;
//!
//! // Wire one circuit per selector
//! let gateway = PaymentGateway::with_circuits(credit_card, paypal);
//!
//! // Build the request
//! let amount = Amount::eur(dec!(19.99));
//! let order = Order::new().with_item(OrderItem::new("Rang Play RS", 1));
//!
//! // Dispatch: Some(id) on accept, None on decline
//! match gateway.pay(&amount, &order, CircuitKind::Paypal).await? {
//!     Some(id) => println!("paid: {id}"),
//!     None => println!("declined"),
//! }
//! ```

pub mod amount;
pub mod circuit;
pub mod error;
pub mod gateway;
pub mod order;

// Re-exports for convenience
pub use amount::{Amount, Currency, ACCEPTED_CURRENCY};
pub use circuit::{BoxedCircuit, Circuit, CircuitKind, CircuitRegistry};
pub use error::{PaymentError, PaymentResult};
pub use gateway::{PaymentGateway, PaymentId, ACCEPTED_PAYMENT_ID};
pub use order::{Order, OrderItem};
