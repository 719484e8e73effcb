//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the data access layer for one entity type.
//! It implements the "Server" side of the Actor Model: it owns the receiving end of the
//! request channel, processes messages sequentially and translates each one into SQL
//! against the pool it was started with.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use sqlx::{FromRow, SqlitePool};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// SQL text for one entity type, derived once from `TABLE` and `COLUMNS`.
#[derive(Debug)]
struct Statements {
    select_one: String,
    select_all: String,
    insert: String,
    update: String,
    delete: String,
    check: String,
}

impl Statements {
    fn for_entity<T: ActorEntity>() -> Self {
        let table = T::TABLE;
        let columns = T::COLUMNS;
        let projection = std::iter::once("id")
            .chain(columns.iter().copied())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; columns.len()].join(", ");
        let assignments = columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            select_one: format!("SELECT {projection} FROM {table} WHERE id = ?"),
            select_all: format!("SELECT {projection} FROM {table} ORDER BY id"),
            insert: format!(
                "INSERT INTO {table} ({}) VALUES ({placeholders}) RETURNING {projection}",
                columns.join(", ")
            ),
            update: format!("UPDATE {table} SET {assignments} WHERE id = ?"),
            delete: format!("DELETE FROM {table} WHERE id = ?"),
            check: format!("SELECT id FROM {table} LIMIT 0"),
        }
    }
}

/// The generic actor that manages the records of one entity type.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the receiver end of the
/// channel; the records themselves live in SQLite.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop. Different
/// entity types run in different tasks and proceed in parallel; isolation between them,
/// and against any other writer of the same database, is left to SQLite.
///
/// **Sessions**:
/// Every message checks out one pooled connection, uses it for the whole operation and
/// returns it to the pool when the handler returns, on success and on error alike.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the pool into `actor.run(pool)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Order>::new(32);
/// tokio::spawn(actor.run(pool.clone()));
/// let order = client.create(params).await?;
/// ```
///
/// # ID Assignment
///
/// Ids come from SQLite. The insert omits the id column and reads the stored row back
/// with `RETURNING`, so other connections writing to the same table cannot collide
/// with the actor.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    sql: Statements,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sql: Statements::for_entity::<T>(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Checks that the entity's table can be queried.
    ///
    /// `run` does this itself; call it before spawning to fail fast at startup.
    pub async fn check_storage(&self, pool: &SqlitePool) -> Result<(), FrameworkError> {
        let mut conn = pool.acquire().await?;
        sqlx::query(&self.sql.check).execute(&mut *conn).await?;
        Ok(())
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The pool is handed over here rather than in `new()`, so actors can be created
    /// (and their clients wired into routers) before storage is attached.
    ///
    /// # Errors
    /// Returns an error, without serving any request, if the table cannot be queried.
    /// Failures of individual requests are answered to their caller and do not stop
    /// the loop.
    pub async fn run(mut self, pool: SqlitePool) -> Result<(), FrameworkError> {
        let entity_type = T::NAME;

        if let Err(e) = self.check_storage(&pool).await {
            error!(entity_type, error = %e, "Actor failed to start");
            return Err(e);
        }
        info!(entity_type, table = T::TABLE, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(&pool, params).await;
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.get(&pool, id).await;
                    match &result {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let result = self.list(&pool).await;
                    match &result {
                        Ok(items) => debug!(entity_type, size = items.len(), "List"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&pool, id, update).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&pool, id).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Deleted"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
        Ok(())
    }

    async fn create(&self, pool: &SqlitePool, params: T::Create) -> Result<T, FrameworkError> {
        let mut conn = pool.acquire().await?;
        let draft = T::from_create_params(T::Id::from(0), params);
        let row = draft
            .bind_columns(sqlx::query(&self.sql.insert))
            .fetch_one(&mut *conn)
            .await?;
        Ok(T::from_row(&row)?)
    }

    async fn get(&self, pool: &SqlitePool, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let mut conn = pool.acquire().await?;
        let raw: i64 = id.into();
        let item = sqlx::query_as::<_, T>(&self.sql.select_one)
            .bind(raw)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(item)
    }

    async fn list(&self, pool: &SqlitePool) -> Result<Vec<T>, FrameworkError> {
        let mut conn = pool.acquire().await?;
        let items = sqlx::query_as::<_, T>(&self.sql.select_all)
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }

    async fn update(
        &self,
        pool: &SqlitePool,
        id: T::Id,
        update: T::Update,
    ) -> Result<T, FrameworkError> {
        let mut conn = pool.acquire().await?;
        let raw: i64 = id.into();
        let mut item = sqlx::query_as::<_, T>(&self.sql.select_one)
            .bind(raw)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_update(update);
        item.bind_columns(sqlx::query(&self.sql.update))
            .bind(raw)
            .execute(&mut *conn)
            .await?;
        Ok(item)
    }

    async fn delete(&self, pool: &SqlitePool, id: T::Id) -> Result<T, FrameworkError> {
        let mut conn = pool.acquire().await?;
        let raw: i64 = id.into();
        let item = sqlx::query_as::<_, T>(&self.sql.select_one)
            .bind(raw)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        sqlx::query(&self.sql.delete)
            .bind(raw)
            .execute(&mut *conn)
            .await?;
        Ok(item)
    }
}
