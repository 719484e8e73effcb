//! ActorEntity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables
//! [`Order`] to be managed by the generic [`resource_actor::ResourceActor`].

use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use chrono::Utc;
use resource_actor::{ActorEntity, SqliteQuery};

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;

    const NAME: &'static str = "Order";
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &["customer_name", "description", "order_date"];
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_name TEXT NOT NULL,
        description TEXT NOT NULL,
        order_date TEXT NOT NULL
    )";

    /// Creates a new Order, stamping the current time as its order date.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            customer_name: params.customer_name,
            description: params.description,
            order_date: Utc::now(),
        }
    }

    fn id(&self) -> OrderId {
        self.id
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.customer_name.clone())
            .bind(self.description.clone())
            .bind(self.order_date)
    }

    /// Handles updates to the Order entity.
    ///
    /// # Fields Updated
    /// - `customer_name`
    /// - `description`
    ///
    /// The order date is never changed after creation.
    fn on_update(&mut self, update: OrderUpdate) {
        if let Some(customer_name) = update.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}
