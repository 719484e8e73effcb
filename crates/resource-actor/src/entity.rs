//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Order, Sandwich, Recipe, …)
//! must implement to be managed by the generic `ResourceActor`. It names the table the resource
//! lives in, the columns it owns, how to build it from a create payload and how to apply an
//! update payload. Implementing this trait enables the framework to offer a uniform CRUD API
//! backed by SQLite for any domain model.
//!
//! # Architecture Note
//! By defining a contract that all our resource types must satisfy, we can write the
//! `ResourceActor` logic *once* and reuse it everywhere. The SQL the actor runs
//! (`INSERT`, `SELECT`, `UPDATE`, `DELETE`) is derived from [`ActorEntity::TABLE`] and
//! [`ActorEntity::COLUMNS`], so a new resource never writes its own data-access code.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! An `Order` entity requires an `OrderCreate` payload, and you can't accidentally send it
//! a `SandwichCreate` payload.

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};
use std::fmt::{Debug, Display};

/// A SQLite query with positional arguments, as produced by [`sqlx::query`].
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// The record itself must be decodable from a row (`sqlx::FromRow`) with an `id`
/// column followed by the columns listed in [`ActorEntity::COLUMNS`].
pub trait ActorEntity:
    Clone + Send + Sync + Unpin + Debug + for<'r> FromRow<'r, SqliteRow> + 'static
{
    /// The unique identifier for this entity.
    /// Stored as an `INTEGER PRIMARY KEY`, so it must round-trip through `i64`.
    type Id: Copy + Eq + Send + Sync + Display + Debug + From<i64> + Into<i64>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    /// Fields left out of the payload keep their stored value.
    type Update: Send + Sync + Debug;

    /// Display name used in logs and client-facing messages, e.g. `"OrderDetail"`.
    const NAME: &'static str;

    /// Table holding the records.
    const TABLE: &'static str;

    /// Non-id columns, in the order [`ActorEntity::bind_columns`] binds them.
    const COLUMNS: &'static [&'static str];

    /// `CREATE TABLE IF NOT EXISTS` statement for [`ActorEntity::TABLE`].
    ///
    /// The id column should be `INTEGER PRIMARY KEY AUTOINCREMENT`: SQLite assigns ids,
    /// and `AUTOINCREMENT` keeps it from handing out the id of a deleted newest row again.
    const SCHEMA: &'static str;

    /// Construct the full entity from the payload.
    ///
    /// `id` is provisional: the store assigns the real one on insert, and the
    /// actor returns the record as read back from the table.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    fn id(&self) -> Self::Id;

    /// Bind every column of [`ActorEntity::COLUMNS`] onto `query`, in order.
    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// Apply an update payload to the in-memory record before it is written back.
    fn on_update(&mut self, update: Self::Update);
}
