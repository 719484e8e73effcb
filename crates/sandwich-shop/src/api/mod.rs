//! # HTTP Surface
//!
//! Every resource is exposed through the same five routes:
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | `POST` | `/{resource}/` | created record |
//! | `GET` | `/{resource}/` | all records, by ascending id |
//! | `GET` | `/{resource}/{id}` | one record, or 404 |
//! | `PUT` | `/{resource}/{id}` | updated record, or 404 |
//! | `DELETE` | `/{resource}/{id}` | deleted record, or 404 |
//!
//! The collection routes answer with and without the trailing slash.

pub mod handlers;

use crate::lifecycle::ShopSystem;
use axum::routing::{get, post};
use axum::Router;
use resource_actor::{ActorEntity, ResourceClient};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Routes for one resource, served under `/{name}`.
pub fn resource_routes<T>(name: &str, client: ResourceClient<T>) -> Router
where
    T: ActorEntity + Serialize,
    T::Create: DeserializeOwned,
    T::Update: DeserializeOwned,
{
    let collection = format!("/{name}");
    let item = format!("/{name}/{{id}}");

    Router::new()
        .route(
            &collection,
            post(handlers::create::<T>).get(handlers::read_all::<T>),
        )
        .route(
            &format!("{collection}/"),
            post(handlers::create::<T>).get(handlers::read_all::<T>),
        )
        .route(
            &item,
            get(handlers::read_one::<T>)
                .put(handlers::update::<T>)
                .delete(handlers::delete::<T>),
        )
        .with_state(client)
}

/// The full application: all five resources, request tracing, and CORS.
///
/// CORS accepts any origin, method and header with credentials. The request's
/// `Origin` is mirrored back, since a literal `*` is not allowed with credentials.
pub fn create_app(system: &ShopSystem) -> Router {
    Router::new()
        .merge(resource_routes("orders", system.order_client.clone()))
        .merge(resource_routes("sandwiches", system.sandwich_client.clone()))
        .merge(resource_routes("resources", system.stock_client.clone()))
        .merge(resource_routes("recipes", system.recipe_client.clone()))
        .merge(resource_routes("order_details", system.order_detail_client.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
