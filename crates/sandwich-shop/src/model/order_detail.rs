use crate::model::{OrderId, SandwichId};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for OrderDetails.
    OrderDetailId
}

/// A line item of an order: `amount` sandwiches of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderDetail {
    pub id: OrderDetailId,
    pub order_id: OrderId,
    pub sandwich_id: SandwichId,
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetailCreate {
    pub order_id: OrderId,
    pub sandwich_id: SandwichId,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDetailUpdate {
    pub order_id: Option<OrderId>,
    pub sandwich_id: Option<SandwichId>,
    pub amount: Option<i64>,
}
