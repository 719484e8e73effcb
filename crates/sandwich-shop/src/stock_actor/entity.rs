use crate::model::{Resource, ResourceCreate, ResourceId, ResourceUpdate};
use resource_actor::{ActorEntity, SqliteQuery};

impl ActorEntity for Resource {
    type Id = ResourceId;
    type Create = ResourceCreate;
    type Update = ResourceUpdate;

    const NAME: &'static str = "Resource";
    const TABLE: &'static str = "resources";
    const COLUMNS: &'static [&'static str] = &["item", "amount"];
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS resources (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item TEXT NOT NULL,
        amount INTEGER NOT NULL
    )";

    fn from_create_params(id: ResourceId, params: ResourceCreate) -> Self {
        Self {
            id,
            item: params.item,
            amount: params.amount,
        }
    }

    fn id(&self) -> ResourceId {
        self.id
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.item.clone()).bind(self.amount)
    }

    fn on_update(&mut self, update: ResourceUpdate) {
        if let Some(item) = update.item {
            self.item = item;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
    }
}
