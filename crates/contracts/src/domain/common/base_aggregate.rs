use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи (с префиксом)
    pub id: Id,
    /// Отображаемое название
    pub label: String,
    /// Метаданные жизненного цикла
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id, label: String) -> Self {
        Self {
            id,
            label,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать агрегат с существующими метаданными (для загрузки из БД)
    pub fn with_metadata(id: Id, label: String, metadata: EntityMetadata) -> Self {
        Self {
            id,
            label,
            metadata,
        }
    }
}
