use axum::extract::{Path, State};
use axum::Json;
use contracts::projections::p001_planning::dto::{
    PlanningAggregateMap, PlanningFact, PlanningFactDto, PlanningImportResult,
};

use crate::projections::p001_planning;
use crate::shared::error::ServiceError;
use crate::shared::state::AppState;

/// GET /api/planning/:store_id
pub async fn list_facts(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<Vec<PlanningFact>>, ServiceError> {
    let facts = p001_planning::service::list_facts(&*state.datastore, &store_id).await?;
    Ok(Json(facts))
}

/// GET /api/planning/:store_id/aggregate
pub async fn get_aggregate(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<PlanningAggregateMap>, ServiceError> {
    let aggregate =
        p001_planning::service::get_planning_aggregate(&*state.datastore, &store_id).await?;
    Ok(Json(aggregate))
}

/// POST /api/planning
pub async fn record_fact(
    State(state): State<AppState>,
    Json(dto): Json<PlanningFactDto>,
) -> Result<Json<PlanningFact>, ServiceError> {
    let fact = p001_planning::service::record_fact(&*state.datastore, dto).await?;
    Ok(Json(fact))
}

/// POST /api/planning/import-csv
///
/// Тело запроса: CSV-текст с заголовком `store_id,sku_id,week,sales_units`
pub async fn import_csv(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<PlanningImportResult>, ServiceError> {
    let result = p001_planning::csv_import::import_csv(&*state.datastore, &body).await?;
    Ok(Json(result))
}
