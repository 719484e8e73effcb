//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the five resource actors.
//!
//! ## Startup
//!
//! 1. **Storage**: open the pool and create missing tables ([`crate::storage`])
//! 2. **Actor Creation**: one `ResourceActor` per entity, each with its client
//! 3. **Readiness**: each actor checks its table before it is spawned, so a broken
//!    database fails [`ShopSystem::start`] instead of producing a half-working server
//! 4. **Context Injection**: every actor is started with `run(pool.clone())`
//!
//! The actors do not depend on each other. Referential integrity between orders,
//! order details, sandwiches, recipes and resources is left to SQLite's foreign keys.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of each channel
//! 2. **Actors detect closure**: `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion**: every actor task is joined; an actor that ended with an
//!    error or panicked is reported as a [`LifecycleError`]
//!
//! The binary stops the HTTP server first, so the router's client clones are gone
//! by the time [`ShopSystem::shutdown`] runs.

pub mod error;
pub mod shop_system;

pub use error::LifecycleError;
pub use shop_system::ShopSystem;
