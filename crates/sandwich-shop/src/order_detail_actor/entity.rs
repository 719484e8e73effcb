use crate::model::{OrderDetail, OrderDetailCreate, OrderDetailId, OrderDetailUpdate};
use resource_actor::{ActorEntity, SqliteQuery};

impl ActorEntity for OrderDetail {
    type Id = OrderDetailId;
    type Create = OrderDetailCreate;
    type Update = OrderDetailUpdate;

    const NAME: &'static str = "OrderDetail";
    const TABLE: &'static str = "order_details";
    const COLUMNS: &'static [&'static str] = &["order_id", "sandwich_id", "amount"];
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS order_details (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL REFERENCES orders(id),
        sandwich_id INTEGER NOT NULL REFERENCES sandwiches(id),
        amount INTEGER NOT NULL
    )";

    fn from_create_params(id: OrderDetailId, params: OrderDetailCreate) -> Self {
        Self {
            id,
            order_id: params.order_id,
            sandwich_id: params.sandwich_id,
            amount: params.amount,
        }
    }

    fn id(&self) -> OrderDetailId {
        self.id
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.order_id)
            .bind(self.sandwich_id)
            .bind(self.amount)
    }

    /// Handles updates to the OrderDetail entity.
    ///
    /// Moving a line item to another order is allowed; the foreign key decides
    /// whether the target order exists.
    fn on_update(&mut self, update: OrderDetailUpdate) {
        if let Some(order_id) = update.order_id {
            self.order_id = order_id;
        }
        if let Some(sandwich_id) = update.sandwich_id {
            self.sandwich_id = sandwich_id;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
    }
}
