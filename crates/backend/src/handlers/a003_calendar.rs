use axum::extract::State;
use axum::Json;
use contracts::domain::a003_calendar::aggregate::CalendarWeek;

use crate::domain::a003_calendar;
use crate::shared::error::ServiceError;
use crate::shared::state::AppState;

/// GET /api/calendar
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<CalendarWeek>>, ServiceError> {
    Ok(Json(a003_calendar::service::list_all(&*state.datastore).await?))
}
