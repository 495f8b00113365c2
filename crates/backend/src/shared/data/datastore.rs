use crate::domain::a001_store::repository::StoreRepository;
use crate::domain::a002_sku::repository::SkuRepository;
use crate::domain::a003_calendar::repository::CalendarRepository;
use crate::projections::p001_planning::repository::PlanningRepository;

/// Полный набор репозиториев, который получает приложение
///
/// Сервисы принимают только нужные им трейты; `dyn Datastore` реализует их все.
pub trait Datastore: StoreRepository + SkuRepository + CalendarRepository + PlanningRepository {}

impl<T> Datastore for T where
    T: StoreRepository + SkuRepository + CalendarRepository + PlanningRepository
{
}
