use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Плановый факт: продажи товара в магазине за неделю (P001)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningFact {
    pub store_id: String,
    pub sku_id: String,
    pub week: String,
    pub sales_units: i64,
}

/// Запрос на запись планового факта
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningFactDto {
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub sku_id: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub sales_units: Option<i64>,
}

impl PlanningFactDto {
    pub fn new(store_id: &str, sku_id: &str, week: &str, sales_units: i64) -> Self {
        Self {
            store_id: Some(store_id.into()),
            sku_id: Some(sku_id.into()),
            week: Some(week.into()),
            sales_units: Some(sales_units),
        }
    }
}

/// Продажи за одну неделю
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySales {
    pub week: String,
    pub sales_units: i64,
}

/// Плановые продажи одного товара в магазине, по неделям
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningAggregate {
    pub id: String,
    pub label: String,
    pub price: f64,
    pub cost: f64,
    /// Упорядочено по неделе
    pub sales_data: Vec<WeeklySales>,
}

/// Ответ агрегатора: SKU id -> данные товара
pub type PlanningAggregateMap = BTreeMap<String, PlanningAggregate>;

/// Ошибка в строке CSV при импорте
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningImportError {
    pub line: u64,
    pub message: String,
}

/// Результат импорта CSV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningImportResult {
    pub imported: usize,
    pub errors: Vec<PlanningImportError>,
}
