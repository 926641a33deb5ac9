//! CRUD, search and summary endpoints, written once for every record kind.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use models::CatalogRecord;
use serde::Deserialize;
use service::admin::catalog_store::CatalogStore;
use service::catalog::Summary;
use tracing::info;

use crate::errors::JsonApiError;

pub type Store<R> = Arc<dyn CatalogStore<R>>;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Mount the catalog endpoints for `R` under `base`.
pub fn routes<R: CatalogRecord>(base: &str, store: Store<R>) -> Router {
    Router::new()
        .route(base, get(list::<R>).post(create::<R>))
        .route(&format!("{base}/stats"), get(stats::<R>))
        .route(
            &format!("{base}/:id"),
            get(get_one::<R>).put(update::<R>).delete(delete_one::<R>),
        )
        .with_state(store)
}

pub async fn list<R: CatalogRecord>(
    State(store): State<Store<R>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<R>> {
    Json(store.list(&query.q).await)
}

pub async fn stats<R: CatalogRecord>(State(store): State<Store<R>>) -> Json<Summary> {
    Json(store.summary().await)
}

pub async fn get_one<R: CatalogRecord>(
    State(store): State<Store<R>>,
    Path(id): Path<u64>,
) -> Result<Json<R>, JsonApiError> {
    Ok(Json(store.get(id).await?))
}

pub async fn create<R: CatalogRecord>(
    State(store): State<Store<R>>,
    Json(input): Json<R::Input>,
) -> Result<(StatusCode, Json<R>), JsonApiError> {
    let record = store.create(input).await?;
    info!(kind = R::KIND, id = record.id(), "created via api");
    Ok((StatusCode::CREATED, Json(record)))
}

/// 200 with the stored record, or 204 when no record has `id`.
pub async fn update<R: CatalogRecord>(
    State(store): State<Store<R>>,
    Path(id): Path<u64>,
    Json(input): Json<R::Input>,
) -> Result<Response, JsonApiError> {
    match store.update(id, input).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Always 204; deleting a missing record is not an error.
pub async fn delete_one<R: CatalogRecord>(
    State(store): State<Store<R>>,
    Path(id): Path<u64>,
) -> StatusCode {
    store.delete(id).await;
    StatusCode::NO_CONTENT
}
