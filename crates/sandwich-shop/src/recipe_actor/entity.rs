//! ActorEntity trait implementation for the Recipe domain type.
//!
//! Both references are declared as foreign keys; SQLite enforces them because the
//! pool is opened with `foreign_keys` switched on (see [`crate::storage`]).

use crate::model::{Recipe, RecipeCreate, RecipeId, RecipeUpdate};
use resource_actor::{ActorEntity, SqliteQuery};

impl ActorEntity for Recipe {
    type Id = RecipeId;
    type Create = RecipeCreate;
    type Update = RecipeUpdate;

    const NAME: &'static str = "Recipe";
    const TABLE: &'static str = "recipes";
    const COLUMNS: &'static [&'static str] = &["sandwich_id", "resource_id", "amount"];
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sandwich_id INTEGER NOT NULL REFERENCES sandwiches(id),
        resource_id INTEGER NOT NULL REFERENCES resources(id),
        amount INTEGER NOT NULL
    )";

    fn from_create_params(id: RecipeId, params: RecipeCreate) -> Self {
        Self {
            id,
            sandwich_id: params.sandwich_id,
            resource_id: params.resource_id,
            amount: params.amount,
        }
    }

    fn id(&self) -> RecipeId {
        self.id
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.sandwich_id)
            .bind(self.resource_id)
            .bind(self.amount)
    }

    fn on_update(&mut self, update: RecipeUpdate) {
        if let Some(sandwich_id) = update.sandwich_id {
            self.sandwich_id = sandwich_id;
        }
        if let Some(resource_id) = update.resource_id {
            self.resource_id = resource_id;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
    }
}
