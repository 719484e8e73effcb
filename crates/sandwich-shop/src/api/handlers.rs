//! Generic CRUD handlers, instantiated once per entity type.
//!
//! Every handler takes the entity's [`ResourceClient`] as axum state. Extraction
//! failures are taken as `Result`s so they can be reported as [`ApiError::Validation`]
//! instead of axum's default plain-text rejections.

use crate::error::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use resource_actor::{ActorEntity, ResourceClient};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

type ApiResult<V> = Result<Json<V>, ApiError>;

fn id_from<T: ActorEntity>(path: Result<Path<i64>, PathRejection>) -> Result<T::Id, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(T::Id::from(id))
}

fn storage_error<T: ActorEntity>(err: resource_actor::FrameworkError) -> ApiError {
    ApiError::from_framework(T::NAME, err)
}

/// Lookup guard: the record, or `"<Entity> not found"`.
async fn find<T: ActorEntity>(client: &ResourceClient<T>, id: T::Id) -> Result<T, ApiError> {
    client
        .get(id)
        .await
        .map_err(storage_error::<T>)?
        .ok_or_else(|| {
            debug!(entity_type = T::NAME, %id, "Lookup missed");
            ApiError::NotFound(T::NAME)
        })
}

pub async fn create<T>(
    State(client): State<ResourceClient<T>>,
    payload: Result<Json<T::Create>, JsonRejection>,
) -> ApiResult<T>
where
    T: ActorEntity + Serialize,
    T::Create: DeserializeOwned,
{
    let Json(params) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let item = client.create(params).await.map_err(storage_error::<T>)?;
    Ok(Json(item))
}

pub async fn read_all<T>(State(client): State<ResourceClient<T>>) -> ApiResult<Vec<T>>
where
    T: ActorEntity + Serialize,
{
    let items = client.list().await.map_err(storage_error::<T>)?;
    Ok(Json(items))
}

pub async fn read_one<T>(
    State(client): State<ResourceClient<T>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<T>
where
    T: ActorEntity + Serialize,
{
    let id = id_from::<T>(path)?;
    Ok(Json(find(&client, id).await?))
}

pub async fn update<T>(
    State(client): State<ResourceClient<T>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<T::Update>, JsonRejection>,
) -> ApiResult<T>
where
    T: ActorEntity + Serialize,
    T::Update: DeserializeOwned,
{
    let id = id_from::<T>(path)?;
    let Json(update) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    find(&client, id).await?;
    let item = client.update(id, update).await.map_err(storage_error::<T>)?;
    Ok(Json(item))
}

pub async fn delete<T>(
    State(client): State<ResourceClient<T>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<T>
where
    T: ActorEntity + Serialize,
{
    let id = id_from::<T>(path)?;
    find(&client, id).await?;
    let item = client.delete(id).await.map_err(storage_error::<T>)?;
    Ok(Json(item))
}
