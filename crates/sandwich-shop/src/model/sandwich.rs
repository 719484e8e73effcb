use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Sandwiches.
    SandwichId
}

/// A sandwich on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sandwich {
    pub id: SandwichId,
    pub sandwich_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SandwichCreate {
    pub sandwich_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SandwichUpdate {
    pub sandwich_name: Option<String>,
    pub price: Option<f64>,
}
