use super::repository::CalendarRepository;
use contracts::domain::a003_calendar::aggregate::CalendarWeek;

use crate::shared::error::ServiceError;

/// Справочник календаря (52 недели)
pub async fn list_all<R: CalendarRepository + ?Sized>(
    repo: &R,
) -> Result<Vec<CalendarWeek>, ServiceError> {
    Ok(repo.list_weeks().await?)
}
