use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use crate::shared::error::ValidationError;
use crate::shared::validation::{require_prefix, require_text};
use serde::{Deserialize, Serialize};

/// Префикс идентификатора магазина
pub const STORE_ID_PREFIX: &str = "ST";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор магазина (например, "ST001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub String);

impl AggregateId for StoreId {
    const PREFIX: &'static str = STORE_ID_PREFIX;

    fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Магазин
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(flatten)]
    pub base: BaseAggregate<StoreId>,

    pub city: String,
    pub state: String,
}

impl Store {
    /// Создать новый магазин для вставки в БД
    pub fn new_for_insert(id: String, label: String, city: String, state: String) -> Self {
        Self {
            base: BaseAggregate::new(StoreId(id), label),
            city,
            state,
        }
    }

    /// Создать магазин из DTO; отсутствующие поля становятся пустыми строками
    /// и отклоняются в `validate()`
    pub fn from_dto(dto: &StoreDto) -> Self {
        let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();
        Self::new_for_insert(text(&dto.id), text(&dto.label), text(&dto.city), text(&dto.state))
    }

    /// Валидация данных: сначала обязательные поля, затем префикс
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", self.base.id.as_str())?;
        require_text("label", &self.base.label)?;
        require_text("city", &self.city)?;
        require_text("state", &self.state)?;
        require_prefix::<StoreId>("id", self.base.id.as_str())?;
        Ok(())
    }
}

impl AggregateRoot for Store {
    fn label(&self) -> &str {
        &self.base.label
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "store"
    }

    fn element_name() -> &'static str {
        "Store"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания магазина
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl StoreDto {
    pub fn new(id: &str, label: &str, city: &str, state: &str) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            city: Some(city.into()),
            state: Some(state.into()),
        }
    }
}
