use super::{aggregator, repository::PlanningRepository};
use contracts::domain::a003_calendar::aggregate::is_canonical_week;
use contracts::projections::p001_planning::dto::{PlanningAggregateMap, PlanningFact, PlanningFactDto};
use contracts::shared::error::ValidationError;
use contracts::shared::validation::require_text;

use crate::domain::a001_store::repository::StoreRepository;
use crate::domain::a002_sku::repository::SkuRepository;
use crate::shared::error::ServiceError;

/// Плановые продажи магазина по товарам и неделям.
///
/// Неизвестный магазин дает пустой результат, а не ошибку.
pub async fn get_planning_aggregate<R: PlanningRepository + ?Sized>(
    repo: &R,
    store_id: &str,
) -> Result<PlanningAggregateMap, ServiceError> {
    let rows = repo.planning_rows(store_id).await?;
    tracing::debug!("Loaded {} planning rows for store {}", rows.len(), store_id);
    Ok(aggregator::group_planning_rows(rows))
}

/// Сырые факты магазина
pub async fn list_facts<R: PlanningRepository + ?Sized>(
    repo: &R,
    store_id: &str,
) -> Result<Vec<PlanningFact>, ServiceError> {
    Ok(repo.list_facts(store_id).await?)
}

/// Запись (или замена) планового факта
pub async fn record_fact<R>(repo: &R, dto: PlanningFactDto) -> Result<PlanningFact, ServiceError>
where
    R: StoreRepository + SkuRepository + PlanningRepository + ?Sized,
{
    let fact = validate_fact(repo, dto).await?;
    repo.upsert_fact(&fact).await?;
    tracing::info!(
        "Planning fact {}/{}/{} = {}",
        fact.store_id,
        fact.sku_id,
        fact.week,
        fact.sales_units
    );
    Ok(fact)
}

async fn validate_fact<R>(repo: &R, dto: PlanningFactDto) -> Result<PlanningFact, ServiceError>
where
    R: StoreRepository + SkuRepository + ?Sized,
{
    let store_id = dto.store_id.unwrap_or_default().trim().to_string();
    let sku_id = dto.sku_id.unwrap_or_default().trim().to_string();
    let week = dto.week.unwrap_or_default().trim().to_string();

    require_text("storeId", &store_id)?;
    require_text("skuId", &sku_id)?;
    require_text("week", &week)?;
    let sales_units = dto
        .sales_units
        .ok_or(ValidationError::MissingField { field: "salesUnits" })?;

    if !is_canonical_week(&week) {
        return Err(ValidationError::InvalidValue {
            field: "week",
            reason: format!("'{}' is not a week of the calendar (W01..W52)", week),
        }
        .into());
    }
    if sales_units < 0 {
        return Err(ValidationError::InvalidValue {
            field: "salesUnits",
            reason: "must not be negative".into(),
        }
        .into());
    }
    if repo.get_store(&store_id).await?.is_none() {
        return Err(ValidationError::InvalidValue {
            field: "storeId",
            reason: format!("store '{}' does not exist", store_id),
        }
        .into());
    }
    if repo.get_sku(&sku_id).await?.is_none() {
        return Err(ValidationError::InvalidValue {
            field: "skuId",
            reason: format!("SKU '{}' does not exist", sku_id),
        }
        .into());
    }

    Ok(PlanningFact {
        store_id,
        sku_id,
        week,
        sales_units,
    })
}
