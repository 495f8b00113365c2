use contracts::dashboards::d001_weekly_metrics::dto::{MonthlyMetricsResponse, WeeklyMetricsResponse};

use super::rollup;
use crate::domain::a003_calendar::repository::CalendarRepository;
use crate::projections::p001_planning::{repository::PlanningRepository, service as planning};
use crate::shared::error::ServiceError;

/// Недельные показатели магазина: 52 недели, выручка, себестоимость, GM и GM%
pub async fn get_weekly_metrics<R: PlanningRepository + ?Sized>(
    repo: &R,
    store_id: &str,
) -> Result<WeeklyMetricsResponse, ServiceError> {
    let aggregate = planning::get_planning_aggregate(repo, store_id).await?;
    let weeks = rollup::roll_up_weekly(&aggregate);
    Ok(rollup::into_weekly_response(store_id, weeks))
}

/// Те же показатели, свернутые по месяцам календаря
pub async fn get_monthly_metrics<R>(
    repo: &R,
    store_id: &str,
) -> Result<MonthlyMetricsResponse, ServiceError>
where
    R: PlanningRepository + CalendarRepository + ?Sized,
{
    let aggregate = planning::get_planning_aggregate(repo, store_id).await?;
    let calendar = repo.list_weeks().await?;
    let months = rollup::roll_up_monthly(&rollup::roll_up_weekly(&aggregate), &calendar);
    Ok(rollup::into_monthly_response(store_id, months))
}
