//! # Sandwich Actor
//!
//! Manages the menu: sandwich names and prices.
//!
//! The simplest resource in the shop. Recipes and order details reference
//! sandwiches by [`SandwichId`](crate::model::SandwichId).

pub mod entity;

use crate::model::Sandwich;
use resource_actor::{ResourceActor, ResourceClient};

/// Client for interacting with the Sandwich actor.
pub type SandwichClient = ResourceClient<Sandwich>;

/// Creates a new Sandwich actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Sandwich>, SandwichClient) {
    ResourceActor::new(buffer_size)
}
