use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::a002_sku::aggregate::{Sku, SkuId};
use contracts::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};

use crate::projections::p001_planning::repository as planning;
use crate::shared::data::db::SqliteDatastore;

/// Доступ к товарам
#[async_trait]
pub trait SkuRepository: Send + Sync {
    /// Все товары, по возрастанию id
    async fn list_skus(&self) -> anyhow::Result<Vec<Sku>>;

    async fn get_sku(&self, id: &str) -> anyhow::Result<Option<Sku>>;

    async fn insert_sku(&self, sku: &Sku) -> anyhow::Result<()>;

    /// Удаляет товар вместе с его плановыми фактами во всех магазинах
    async fn delete_sku(&self, id: &str) -> anyhow::Result<bool>;
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_sku")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub label: String,
    pub class: String,
    pub department: String,
    pub price: f64,
    pub cost: f64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sku {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
        };
        Sku {
            base: BaseAggregate::with_metadata(SkuId(m.id), m.label, metadata),
            class: m.class,
            department: m.department,
            price: m.price,
            cost: m.cost,
        }
    }
}

#[async_trait]
impl SkuRepository for SqliteDatastore {
    async fn list_skus(&self) -> anyhow::Result<Vec<Sku>> {
        let items = Entity::find()
            .order_by_asc(Column::Id)
            .all(self.connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(items)
    }

    async fn get_sku(&self, id: &str) -> anyhow::Result<Option<Sku>> {
        let result = Entity::find_by_id(id.to_string())
            .one(self.connection())
            .await?;
        Ok(result.map(Into::into))
    }

    async fn insert_sku(&self, sku: &Sku) -> anyhow::Result<()> {
        let active = ActiveModel {
            id: Set(sku.base.id.as_str().to_string()),
            label: Set(sku.base.label.clone()),
            class: Set(sku.class.clone()),
            department: Set(sku.department.clone()),
            price: Set(sku.price),
            cost: Set(sku.cost),
            created_at: Set(Some(sku.base.metadata.created_at)),
        };
        active.insert(self.connection()).await?;
        Ok(())
    }

    async fn delete_sku(&self, id: &str) -> anyhow::Result<bool> {
        let txn = self.connection().begin().await?;
        planning::Entity::delete_many()
            .filter(planning::Column::SkuId.eq(id))
            .exec(&txn)
            .await?;
        let result = Entity::delete_by_id(id.to_string()).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
