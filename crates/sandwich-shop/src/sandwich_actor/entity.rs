//! ActorEntity trait implementation for the Sandwich domain type.

use crate::model::{Sandwich, SandwichCreate, SandwichId, SandwichUpdate};
use resource_actor::{ActorEntity, SqliteQuery};

impl ActorEntity for Sandwich {
    type Id = SandwichId;
    type Create = SandwichCreate;
    type Update = SandwichUpdate;

    const NAME: &'static str = "Sandwich";
    const TABLE: &'static str = "sandwiches";
    const COLUMNS: &'static [&'static str] = &["sandwich_name", "price"];
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS sandwiches (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sandwich_name TEXT NOT NULL,
        price REAL NOT NULL
    )";

    fn from_create_params(id: SandwichId, params: SandwichCreate) -> Self {
        Self {
            id,
            sandwich_name: params.sandwich_name,
            price: params.price,
        }
    }

    fn id(&self) -> SandwichId {
        self.id
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.sandwich_name.clone()).bind(self.price)
    }

    fn on_update(&mut self, update: SandwichUpdate) {
        if let Some(sandwich_name) = update.sandwich_name {
            self.sandwich_name = sandwich_name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}
