use crate::config::Config;
use crate::lifecycle::LifecycleError;
use crate::order_actor::OrderClient;
use crate::order_detail_actor::OrderDetailClient;
use crate::recipe_actor::RecipeClient;
use crate::sandwich_actor::SandwichClient;
use crate::stock_actor::StockClient;
use crate::{order_actor, order_detail_actor, recipe_actor, sandwich_actor, stock_actor, storage};
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;
use tracing::{error, info};

type ActorHandle = JoinHandle<Result<(), FrameworkError>>;

/// The runtime orchestrator for the sandwich shop.
///
/// `ShopSystem` owns one actor per resource (orders, sandwiches, resources, recipes,
/// order details), all sharing a single connection pool, and hands out their clients.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::from_config(&config).await?;
/// let app = api::create_app(&system);
/// // ... serve ...
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub order_client: OrderClient,
    pub sandwich_client: SandwichClient,
    pub stock_client: StockClient,
    pub recipe_client: RecipeClient,
    pub order_detail_client: OrderDetailClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<ActorHandle>,
}

/// Spawns `actor` once its table has answered a query.
async fn launch<T: ActorEntity>(
    actor: ResourceActor<T>,
    pool: &SqlitePool,
) -> Result<ActorHandle, FrameworkError> {
    actor.check_storage(pool).await?;
    Ok(tokio::spawn(actor.run(pool.clone())))
}

impl ShopSystem {
    /// Connects to the configured database, creates missing tables and starts the actors.
    pub async fn from_config(config: &Config) -> Result<Self, LifecycleError> {
        let pool = storage::connect(&config.database_url, config.max_connections).await?;
        storage::ensure_schema(&pool).await?;
        Self::start(pool, config.channel_buffer).await
    }

    /// Starts every actor against `pool`. The schema must already exist.
    ///
    /// Fails with [`LifecycleError::Actor`] if any table cannot be queried. Actors
    /// launched before the failure stop on their own, since their clients are dropped.
    pub async fn start(pool: SqlitePool, buffer_size: usize) -> Result<Self, LifecycleError> {
        // 1. Create actors and their clients
        let (order_actor, order_client) = order_actor::new(buffer_size);
        let (sandwich_actor, sandwich_client) = sandwich_actor::new(buffer_size);
        let (stock_actor, stock_client) = stock_actor::new(buffer_size);
        let (recipe_actor, recipe_client) = recipe_actor::new(buffer_size);
        let (order_detail_actor, order_detail_client) = order_detail_actor::new(buffer_size);

        // 2. Check and start them with the shared pool injected
        let handles = vec![
            launch(order_actor, &pool).await?,
            launch(sandwich_actor, &pool).await?,
            launch(stock_actor, &pool).await?,
            launch(recipe_actor, &pool).await?,
            launch(order_detail_actor, &pool).await?,
        ];

        info!(actors = handles.len(), "Shop system started");

        Ok(Self {
            order_client,
            sandwich_client,
            stock_client,
            recipe_client,
            order_detail_client,
            handles,
        })
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients closes the channels; each actor drains what is queued
    /// and exits its loop. Clones still held elsewhere (e.g. by a router that is
    /// still serving) keep their actor alive, so drop those first.
    ///
    /// Awaits all actors, then returns the first one that ended with an error or panicked.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down shop system...");

        drop(self.order_client);
        drop(self.sandwich_client);
        drop(self.stock_client);
        drop(self.recipe_client);
        drop(self.order_detail_client);

        let mut first_failure: Option<LifecycleError> = None;
        for handle in self.handles {
            let failure = match handle.await {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => LifecycleError::from(e),
                Err(e) => LifecycleError::from(e),
            };
            error!(error = %failure, "Actor task failed");
            first_failure.get_or_insert(failure);
        }

        match first_failure {
            Some(e) => Err(e),
            None => {
                info!("Shop system shutdown complete.");
                Ok(())
            }
        }
    }
}
