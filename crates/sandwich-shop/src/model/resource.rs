use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Resources.
    ResourceId
}

/// A stocked ingredient ("Bread", "Ham", ...) and how much of it is on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Resource {
    pub id: ResourceId,
    pub item: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceCreate {
    pub item: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceUpdate {
    pub item: Option<String>,
    pub amount: Option<i64>,
}
