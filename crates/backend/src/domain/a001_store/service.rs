use super::repository::StoreRepository;
use contracts::domain::a001_store::aggregate::{Store, StoreDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::error::ValidationError;

use crate::shared::error::ServiceError;

/// Создание нового магазина
///
/// Порядок проверок: обязательные поля, префикс id, уникальность id.
/// Запись выполняется только после всех проверок.
pub async fn create<R: StoreRepository + ?Sized>(
    repo: &R,
    dto: StoreDto,
) -> Result<Store, ServiceError> {
    let store = Store::from_dto(&dto);

    if let Err(e) = store.validate() {
        tracing::warn!("Store rejected: {}", e);
        return Err(e.into());
    }

    let id = store.base.id.as_str();
    if repo.get_store(id).await?.is_some() {
        tracing::warn!("Store rejected: duplicate id {}", id);
        return Err(ValidationError::DuplicateId {
            field: "id",
            id: id.to_string(),
        }
        .into());
    }

    repo.insert_store(&store).await?;
    tracing::info!("Store {} created", id);
    Ok(store)
}

/// Удаление магазина (вместе с его плановыми данными)
pub async fn delete<R: StoreRepository + ?Sized>(repo: &R, id: &str) -> Result<(), ServiceError> {
    if !repo.delete_store(id).await? {
        return Err(ServiceError::not_found(Store::element_name(), id));
    }
    tracing::info!("Store {} deleted", id);
    Ok(())
}

/// Получение магазина по ID
pub async fn get_by_id<R: StoreRepository + ?Sized>(repo: &R, id: &str) -> Result<Store, ServiceError> {
    repo.get_store(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Store::element_name(), id))
}

/// Получение списка всех магазинов
pub async fn list_all<R: StoreRepository + ?Sized>(repo: &R) -> Result<Vec<Store>, ServiceError> {
    Ok(repo.list_stores().await?)
}

/// Вставка тестовых данных; уже существующие магазины пропускаются
pub async fn insert_test_data<R: StoreRepository + ?Sized>(repo: &R) -> Result<(), ServiceError> {
    let data = vec![
        StoreDto::new("ST001", "Downtown Flagship", "Austin", "TX"),
        StoreDto::new("ST002", "Riverside Mall", "Sacramento", "CA"),
        StoreDto::new("ST003", "Harbor Point", "Baltimore", "MD"),
    ];

    for dto in data {
        match create(repo, dto).await {
            Ok(_) | Err(ServiceError::Validation(ValidationError::DuplicateId { .. })) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
