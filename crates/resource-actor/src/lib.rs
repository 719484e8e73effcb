//! # Resource Actor
//!
//! This crate provides the building blocks for exposing relational tables as type-safe,
//! uniform CRUD resources. It implements a **Resource-Oriented Architecture (ROA)** pattern
//! on top of the **Actor Model**: every entity type gets one actor that owns its data access,
//! and callers talk to it through a cheap, cloneable client.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model: table, columns, create/update payloads
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and SQL against a `SqlitePool`
//! 3. **Interface Layer** ([`ResourceClient`]) - Type-safe communication
//!
//! You describe an entity **once** in the trait, and the framework derives every statement
//! (`INSERT`, `SELECT`, `UPDATE`, `DELETE`) and handles the async message passing.
//!
//! ```rust,ignore
//! #[derive(Clone, Debug, sqlx::FromRow)]
//! struct Sandwich { id: i64, sandwich_name: String, price: f64 }
//!
//! impl ActorEntity for Sandwich {
//!     type Id = i64;
//!     type Create = SandwichCreate;
//!     type Update = SandwichUpdate;
//!     const NAME: &'static str = "Sandwich";
//!     const TABLE: &'static str = "sandwiches";
//!     const COLUMNS: &'static [&'static str] = &["sandwich_name", "price"];
//!     const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS sandwiches (...)";
//!     // from_create_params, id, bind_columns, on_update ...
//! }
//!
//! let (actor, client) = ResourceActor::<Sandwich>::new(32);
//! tokio::spawn(actor.run(pool.clone()));
//! let blt = client.create(SandwichCreate { sandwich_name: "BLT".into(), price: 6.5 }).await?;
//! assert_eq!(client.get(blt.id).await?.unwrap().sandwich_name, "BLT");
//! ```
//!
//! ## Context Injection Pattern
//!
//! The storage pool is injected at **runtime** via `run(pool)`, not at construction time.
//! Actors and clients can therefore be created and wired into routers before the database
//! is attached, and nothing reads a process-wide global.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Actors for different entity types run in **parallel**
//! - Every message uses one pooled connection, released when the message is answered
//! - Ids are assigned by SQLite (`INSERT ... RETURNING`), never by the actor
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which implements the same `ResourceClient<T>`
//! API as the real client but answers from queued expectations.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::{ActorEntity, SqliteQuery};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use crate::tracing::setup_tracing;
