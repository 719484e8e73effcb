//! # OrderDetail Actor
//!
//! Manages order line items. Each [`OrderDetail`] references one order and one sandwich.

pub mod entity;

use crate::model::OrderDetail;
use resource_actor::{ResourceActor, ResourceClient};

/// Client for interacting with the OrderDetail actor.
pub type OrderDetailClient = ResourceClient<OrderDetail>;

/// Creates a new OrderDetail actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderDetail>, OrderDetailClient) {
    ResourceActor::new(buffer_size)
}
