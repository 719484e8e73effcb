//! # Order Actor
//!
//! This module implements the Order resource actor, the data access layer for customer orders.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sandwich_shop::order_actor;
//! use sandwich_shop::model::OrderCreate;
//!
//! let (actor, client) = order_actor::new(32);
//! tokio::spawn(actor.run(pool.clone()));
//!
//! let order = client
//!     .create(OrderCreate {
//!         customer_name: "Ada".to_string(),
//!         description: "2 x BLT".to_string(),
//!     })
//!     .await?;
//! ```
//!
//! ## Key Features
//!
//! - **Server-side timestamp**: `order_date` is set when the order is created
//! - **Sequential ID generation**: continues after the highest stored order id

pub mod entity;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Client for interacting with the Order actor.
pub type OrderClient = ResourceClient<Order>;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    ResourceActor::new(buffer_size)
}
