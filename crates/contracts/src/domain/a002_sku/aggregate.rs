use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use crate::shared::error::ValidationError;
use crate::shared::validation::{require_amount, require_prefix, require_text};
use serde::{Deserialize, Serialize};

/// Префикс идентификатора товара
pub const SKU_ID_PREFIX: &str = "SK";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара (например, "SK1001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkuId(pub String);

impl AggregateId for SkuId {
    const PREFIX: &'static str = SKU_ID_PREFIX;

    fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товарная позиция (SKU) с ценой и себестоимостью
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    #[serde(flatten)]
    pub base: BaseAggregate<SkuId>,

    pub class: String,
    pub department: String,
    pub price: f64,
    pub cost: f64,
}

impl Sku {
    /// Создать новый товар для вставки в БД
    pub fn new_for_insert(
        id: String,
        label: String,
        class: String,
        department: String,
        price: f64,
        cost: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(SkuId(id), label),
            class,
            department,
            price,
            cost,
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", self.base.id.as_str())?;
        require_text("label", &self.base.label)?;
        require_text("class", &self.class)?;
        require_text("department", &self.department)?;
        require_prefix::<SkuId>("id", self.base.id.as_str())?;
        require_amount("price", self.price)?;
        require_amount("cost", self.cost)?;
        Ok(())
    }
}

impl TryFrom<&SkuDto> for Sku {
    type Error = ValidationError;

    /// Числовые поля нельзя заменить пустым значением, поэтому их
    /// отсутствие отклоняется здесь; остальное проверяет `validate()`
    fn try_from(dto: &SkuDto) -> Result<Self, Self::Error> {
        let price = dto.price.ok_or(ValidationError::MissingField { field: "price" })?;
        let cost = dto.cost.ok_or(ValidationError::MissingField { field: "cost" })?;
        let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();
        Ok(Self::new_for_insert(
            text(&dto.id),
            text(&dto.label),
            text(&dto.class),
            text(&dto.department),
            price,
            cost,
        ))
    }
}

impl AggregateRoot for Sku {
    fn label(&self) -> &str {
        &self.base.label
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "sku"
    }

    fn element_name() -> &'static str {
        "SKU"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkuDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl SkuDto {
    pub fn new(id: &str, label: &str, class: &str, department: &str, price: f64, cost: f64) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            class: Some(class.into()),
            department: Some(department.into()),
            price: Some(price),
            cost: Some(cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(dto: &SkuDto) -> Result<Sku, ValidationError> {
        let sku = Sku::try_from(dto)?;
        sku.validate()?;
        Ok(sku)
    }

    #[test]
    fn test_valid_sku() {
        let sku = build(&SkuDto::new("SK1", "Mug", "Kitchen", "Home", 5.0, 3.0)).unwrap();
        assert_eq!(sku.price, 5.0);
        assert_eq!(Sku::full_name(), "a002_sku");
    }

    #[test]
    fn test_missing_price() {
        let mut dto = SkuDto::new("SK1", "Mug", "Kitchen", "Home", 5.0, 3.0);
        dto.price = None;
        assert_eq!(build(&dto).unwrap_err(), ValidationError::MissingField { field: "price" });
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = build(&SkuDto::new("SK1", "Mug", "Kitchen", "Home", 5.0, -1.0)).unwrap_err();
        assert_eq!(err.kind(), "invalid_value");
        assert_eq!(err.field(), "cost");
    }

    #[test]
    fn test_bad_prefix() {
        let err = build(&SkuDto::new("ST1", "Mug", "Kitchen", "Home", 5.0, 3.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BadPrefix {
                field: "id",
                prefix: SKU_ID_PREFIX,
                value: "ST1".into()
            }
        );
    }

    #[test]
    fn test_dto_accepts_partial_json() {
        let dto: SkuDto =
            serde_json::from_str(r#"{"id":"SK9","label":"Pan","price":20.0,"cost":8.0}"#).unwrap();
        assert_eq!(build(&dto).unwrap_err(), ValidationError::MissingField { field: "class" });

        let dto: SkuDto = serde_json::from_str(r#"{"id":"SK9","label":"Pan","price":20.0}"#).unwrap();
        assert_eq!(build(&dto).unwrap_err(), ValidationError::MissingField { field: "cost" });
    }

    #[test]
    fn test_oversized_price_rejected() {
        let err = build(&SkuDto::new("SK1", "Mug", "Kitchen", "Home", 1e308, 1e308)).unwrap_err();
        assert_eq!(err.kind(), "invalid_value");
        assert_eq!(err.field(), "price");
    }
}
