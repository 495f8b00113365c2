use super::repository::SkuRepository;
use contracts::domain::a002_sku::aggregate::{Sku, SkuDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::error::ValidationError;

use crate::shared::error::ServiceError;

/// Создание нового товара
pub async fn create<R: SkuRepository + ?Sized>(repo: &R, dto: SkuDto) -> Result<Sku, ServiceError> {
    let sku = match Sku::try_from(&dto).and_then(|sku| sku.validate().map(|_| sku)) {
        Ok(sku) => sku,
        Err(e) => {
            tracing::warn!("SKU rejected: {}", e);
            return Err(e.into());
        }
    };

    let id = sku.base.id.as_str();
    if repo.get_sku(id).await?.is_some() {
        tracing::warn!("SKU rejected: duplicate id {}", id);
        return Err(ValidationError::DuplicateId {
            field: "id",
            id: id.to_string(),
        }
        .into());
    }

    repo.insert_sku(&sku).await?;
    tracing::info!("SKU {} created", id);
    Ok(sku)
}

/// Удаление товара
pub async fn delete<R: SkuRepository + ?Sized>(repo: &R, id: &str) -> Result<(), ServiceError> {
    if !repo.delete_sku(id).await? {
        return Err(ServiceError::not_found(Sku::element_name(), id));
    }
    tracing::info!("SKU {} deleted", id);
    Ok(())
}

/// Получение товара по ID
pub async fn get_by_id<R: SkuRepository + ?Sized>(repo: &R, id: &str) -> Result<Sku, ServiceError> {
    repo.get_sku(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Sku::element_name(), id))
}

/// Получение списка всех товаров
pub async fn list_all<R: SkuRepository + ?Sized>(repo: &R) -> Result<Vec<Sku>, ServiceError> {
    Ok(repo.list_skus().await?)
}

/// Вставка тестовых данных; уже существующие товары пропускаются
pub async fn insert_test_data<R: SkuRepository + ?Sized>(repo: &R) -> Result<(), ServiceError> {
    let data = vec![
        SkuDto::new("SK1001", "Ceramic Mug", "Drinkware", "Kitchen", 12.0, 4.5),
        SkuDto::new("SK1002", "Chef Knife", "Cutlery", "Kitchen", 45.0, 19.0),
        SkuDto::new("SK2001", "Cotton Towel", "Bath Linen", "Home", 9.5, 3.25),
        SkuDto::new("SK2002", "Desk Lamp", "Lighting", "Home", 29.99, 14.0),
    ];

    for dto in data {
        match create(repo, dto).await {
            Ok(_) | Err(ServiceError::Validation(ValidationError::DuplicateId { .. })) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
