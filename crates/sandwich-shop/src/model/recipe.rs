use crate::model::{ResourceId, SandwichId};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Recipes.
    RecipeId
}

/// One ingredient line of a sandwich: `amount` units of a resource go into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    pub id: RecipeId,
    pub sandwich_id: SandwichId,
    pub resource_id: ResourceId,
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeCreate {
    pub sandwich_id: SandwichId,
    pub resource_id: ResourceId,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeUpdate {
    pub sandwich_id: Option<SandwichId>,
    pub resource_id: Option<ResourceId>,
    pub amount: Option<i64>,
}
