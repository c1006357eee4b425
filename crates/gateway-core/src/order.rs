//! # Order Types
//!
//! Order and line-item types for the circuit-gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Display name of the purchased item
    pub name: String,

    /// Quantity
    pub quantity: u32,
}

impl OrderItem {
    /// Create a new order item
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// An order submitted for payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Line items
    pub items: Vec<OrderItem>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new empty order with generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an order from existing items
    pub fn from_items(items: Vec<OrderItem>) -> Self {
        Self {
            items,
            ..Self::new()
        }
    }

    /// Add a line item
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Builder: add a line item
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.add_item(item);
        self
    }

    /// Check if order is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check the payment invariant: at least one line item
    pub fn has_items(&self) -> bool {
        !self.is_empty()
    }

    /// Get total item count across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order() {
        let order = Order::new();

        assert!(order.is_empty());
        assert!(!order.has_items());
        assert_eq!(order.item_count(), 0);
    }

    #[test]
    fn test_order_with_items() {
        let order = Order::new()
            .with_item(OrderItem::new("Widget", 2))
            .with_item(OrderItem::new("Gadget", 1));

        assert!(order.has_items());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_from_items() {
        let order = Order::from_items(vec![OrderItem::new("Widget", 1)]);

        assert!(order.has_items());
        assert!(!order.id.is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(Order::new().id, Order::new().id);
    }
}
