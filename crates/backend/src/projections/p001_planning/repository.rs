use async_trait::async_trait;
use contracts::projections::p001_planning::dto::PlanningFact;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, FromQueryResult, QueryFilter, QueryOrder, Set, Statement};

use crate::shared::data::db::SqliteDatastore;

/// Плоская строка соединения planning x sku x calendar
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct PlanningRow {
    pub sku_id: String,
    pub label: String,
    pub price: f64,
    pub cost: f64,
    pub week: String,
    /// None, если недели нет в справочнике календаря
    pub month: Option<String>,
    pub sales_units: i64,
}

/// Доступ к плановым фактам (P001)
#[async_trait]
pub trait PlanningRepository: Send + Sync {
    /// Все факты магазина, соединенные с товаром и календарем, по возрастанию недели.
    /// Факты без товара в справочнике не возвращаются.
    async fn planning_rows(&self, store_id: &str) -> anyhow::Result<Vec<PlanningRow>>;

    /// Сырые факты магазина, по товару и неделе
    async fn list_facts(&self, store_id: &str) -> anyhow::Result<Vec<PlanningFact>>;

    /// Одна запись на (store, sku, week): повторная запись заменяет количество
    async fn upsert_fact(&self, fact: &PlanningFact) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "p001_planning")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub week: String,
    pub sales_units: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PlanningFact {
    fn from(m: Model) -> Self {
        PlanningFact {
            store_id: m.store_id,
            sku_id: m.sku_id,
            week: m.week,
            sales_units: m.sales_units,
        }
    }
}

#[async_trait]
impl PlanningRepository for SqliteDatastore {
    async fn planning_rows(&self, store_id: &str) -> anyhow::Result<Vec<PlanningRow>> {
        let sql = r#"
            SELECT
                p.sku_id      AS sku_id,
                s.label       AS label,
                s.price       AS price,
                s.cost        AS cost,
                p.week        AS week,
                c.month       AS month,
                p.sales_units AS sales_units
            FROM p001_planning p
            JOIN a002_sku s ON p.sku_id = s.id
            LEFT JOIN a003_calendar c ON p.week = c.week
            WHERE p.store_id = ?
            ORDER BY p.week, p.sku_id
        "#;

        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Sqlite,
            sql,
            [store_id.into()],
        );
        let rows = PlanningRow::find_by_statement(stmt)
            .all(self.connection())
            .await?;
        Ok(rows)
    }

    async fn list_facts(&self, store_id: &str) -> anyhow::Result<Vec<PlanningFact>> {
        let items = Entity::find()
            .filter(Column::StoreId.eq(store_id))
            .order_by_asc(Column::SkuId)
            .order_by_asc(Column::Week)
            .all(self.connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(items)
    }

    async fn upsert_fact(&self, fact: &PlanningFact) -> anyhow::Result<()> {
        let active = ActiveModel {
            store_id: Set(fact.store_id.clone()),
            sku_id: Set(fact.sku_id.clone()),
            week: Set(fact.week.clone()),
            sales_units: Set(fact.sales_units),
        };
        Entity::insert(active)
            .on_conflict(
                OnConflict::columns([Column::StoreId, Column::SkuId, Column::Week])
                    .update_column(Column::SalesUnits)
                    .to_owned(),
            )
            .exec_without_returning(self.connection())
            .await?;
        Ok(())
    }
}
