//! A customer order.
//!
//! The [`ActorEntity`](resource_actor::ActorEntity) implementation lives in
//! [`crate::order_actor::entity`]. Line items are separate
//! [`OrderDetail`](super::OrderDetail) records pointing back at the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Orders.
    OrderId
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub description: String,
    /// Stamped by the server when the order is placed.
    pub order_date: DateTime<Utc>,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub description: String,
}

/// Payload for changing an order. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub customer_name: Option<String>,
    pub description: Option<String>,
}
