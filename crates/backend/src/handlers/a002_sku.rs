use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_sku::aggregate::{Sku, SkuDto};

use crate::domain::a002_sku;
use crate::shared::error::ServiceError;
use crate::shared::state::AppState;

/// GET /api/sku
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Sku>>, ServiceError> {
    let items = a002_sku::service::list_all(&*state.datastore).await?;
    Ok(Json(items))
}

/// GET /api/sku/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Sku>, ServiceError> {
    let item = a002_sku::service::get_by_id(&*state.datastore, &id).await?;
    Ok(Json(item))
}

/// POST /api/sku
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<SkuDto>,
) -> Result<(StatusCode, Json<Sku>), ServiceError> {
    let sku = a002_sku::service::create(&*state.datastore, dto).await?;
    Ok((StatusCode::CREATED, Json(sku)))
}

/// DELETE /api/sku/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    a002_sku::service::delete(&*state.datastore, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sku/testdata
pub async fn insert_test_data(State(state): State<AppState>) -> Result<StatusCode, ServiceError> {
    a002_sku::service::insert_test_data(&*state.datastore).await?;
    Ok(StatusCode::OK)
}
