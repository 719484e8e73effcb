//! # Recipe Actor
//!
//! Manages the ingredient lines that tie a [`Sandwich`](crate::model::Sandwich) to the
//! [`Resource`](crate::model::Resource)s it consumes.

pub mod entity;

use crate::model::Recipe;
use resource_actor::{ResourceActor, ResourceClient};

/// Client for interacting with the Recipe actor.
pub type RecipeClient = ResourceClient<Recipe>;

/// Creates a new Recipe actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Recipe>, RecipeClient) {
    ResourceActor::new(buffer_size)
}
