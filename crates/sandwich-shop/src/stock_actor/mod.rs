//! # Stock Actor
//!
//! Manages [`Resource`] records: the ingredients the shop keeps in stock.
//! Named after what it tracks so it does not shadow the `resource_actor` crate.

pub mod entity;

use crate::model::Resource;
use resource_actor::{ResourceActor, ResourceClient};

/// Client for interacting with the Resource actor.
pub type StockClient = ResourceClient<Resource>;

/// Creates a new Resource actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Resource>, StockClient) {
    ResourceActor::new(buffer_size)
}
