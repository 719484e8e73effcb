//! # Sandwich Shop
//!
//! A CRUD REST API over five resources: orders, sandwiches, resources (stocked
//! ingredients), recipes and order details.
//!
//! - **[model]**: Records and their create/update payloads
//! - **`*_actor`**: [`ActorEntity`](resource_actor::ActorEntity) implementations and actor factories
//! - **[lifecycle]**: [`ShopSystem`](lifecycle::ShopSystem), which starts and stops the actors
//! - **[api]**: The axum router and generic CRUD handlers
//!
//! The library is split from the binary so the router can be driven in-process by tests.

pub mod api;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_detail_actor;
pub mod recipe_actor;
pub mod sandwich_actor;
pub mod stock_actor;
pub mod storage;
