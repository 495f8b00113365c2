use axum::extract::{Path, State};
use axum::Json;
use contracts::dashboards::d001_weekly_metrics::dto::{MonthlyMetricsResponse, WeeklyMetricsResponse};

use crate::dashboards::d001_weekly_metrics;
use crate::shared::error::ServiceError;
use crate::shared::state::AppState;

/// GET /api/d001/weekly-metrics/:store_id
pub async fn get_weekly_metrics(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<WeeklyMetricsResponse>, ServiceError> {
    let metrics =
        d001_weekly_metrics::service::get_weekly_metrics(&*state.datastore, &store_id).await?;
    Ok(Json(metrics))
}

/// GET /api/d001/monthly-metrics/:store_id
pub async fn get_monthly_metrics(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<MonthlyMetricsResponse>, ServiceError> {
    let metrics =
        d001_weekly_metrics::service::get_monthly_metrics(&*state.datastore, &store_id).await?;
    Ok(Json(metrics))
}
