use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_store::aggregate::{Store, StoreDto};

use crate::domain::a001_store;
use crate::shared::error::ServiceError;
use crate::shared::state::AppState;

/// GET /api/store
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Store>>, ServiceError> {
    let items = a001_store::service::list_all(&*state.datastore).await?;
    Ok(Json(items))
}

/// GET /api/store/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Store>, ServiceError> {
    let item = a001_store::service::get_by_id(&*state.datastore, &id).await?;
    Ok(Json(item))
}

/// POST /api/store
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<StoreDto>,
) -> Result<(StatusCode, Json<Store>), ServiceError> {
    let store = a001_store::service::create(&*state.datastore, dto).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// DELETE /api/store/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    a001_store::service::delete(&*state.datastore, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/store/testdata
pub async fn insert_test_data(State(state): State<AppState>) -> Result<StatusCode, ServiceError> {
    a001_store::service::insert_test_data(&*state.datastore).await?;
    Ok(StatusCode::OK)
}
