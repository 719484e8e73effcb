//! # Storage Bootstrap
//!
//! Opens the SQLite pool shared by every actor and creates the tables they manage.

use crate::model::{Order, OrderDetail, Recipe, Resource, Sandwich};
use resource_actor::ActorEntity;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Opens a connection pool for `database_url`.
///
/// File databases are created if missing. Foreign keys are enforced on every
/// connection, which is the only referential integrity the shop has.
///
/// An in-memory database lives only as long as its connection, so for
/// `sqlite::memory:` the pool is pinned to one connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = is_in_memory(database_url);
    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };

    info!(database_url, in_memory, "Connected to database");
    Ok(pool)
}

/// Whether `database_url` names an in-memory database rather than a file.
///
/// Recognizes `sqlite::memory:`, `sqlite://:memory:` and the URI form with a
/// `mode=memory` query parameter. A file whose path merely contains `:memory:`
/// is a file.
fn is_in_memory(database_url: &str) -> bool {
    let rest = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    path == ":memory:" || query.split('&').any(|param| param == "mode=memory")
}

/// Creates every table that does not exist yet.
///
/// Parents come before the tables whose foreign keys point at them.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let schemas = [
        (Order::TABLE, Order::SCHEMA),
        (Sandwich::TABLE, Sandwich::SCHEMA),
        (Resource::TABLE, Resource::SCHEMA),
        (Recipe::TABLE, Recipe::SCHEMA),
        (OrderDetail::TABLE, OrderDetail::SCHEMA),
    ];

    for (table, ddl) in schemas {
        sqlx::query(ddl).execute(pool).await?;
        debug!(table, "Table ready");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_urls_are_recognized_exactly() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("sqlite:file:shop?mode=memory&cache=shared"));

        assert!(!is_in_memory("sqlite://sandwich_shop.db"));
        assert!(!is_in_memory("sqlite://backups/:memory:.db"));
        assert!(!is_in_memory("sqlite://data/shop.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(
            tables,
            ["order_details", "orders", "recipes", "resources", "sandwiches"]
        );
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let orphan = sqlx::query(
            "INSERT INTO order_details (id, order_id, sandwich_id, amount) VALUES (1, 99, 99, 1)",
        )
        .execute(&pool)
        .await;
        assert!(orphan.is_err());
    }
}
