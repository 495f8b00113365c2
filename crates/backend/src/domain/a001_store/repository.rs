use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::a001_store::aggregate::{Store, StoreId};
use contracts::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};

use crate::projections::p001_planning::repository as planning;
use crate::shared::data::db::SqliteDatastore;

/// Доступ к магазинам
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Все магазины, по возрастанию id
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>>;

    async fn get_store(&self, id: &str) -> anyhow::Result<Option<Store>>;

    async fn insert_store(&self, store: &Store) -> anyhow::Result<()>;

    /// Удаляет магазин вместе с его плановыми фактами.
    /// Возвращает false, если магазина не было.
    async fn delete_store(&self, id: &str) -> anyhow::Result<bool>;
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub label: String,
    pub city: String,
    pub state: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
        };
        Store {
            base: BaseAggregate::with_metadata(StoreId(m.id), m.label, metadata),
            city: m.city,
            state: m.state,
        }
    }
}

#[async_trait]
impl StoreRepository for SqliteDatastore {
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>> {
        let items = Entity::find()
            .order_by_asc(Column::Id)
            .all(self.connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(items)
    }

    async fn get_store(&self, id: &str) -> anyhow::Result<Option<Store>> {
        let result = Entity::find_by_id(id.to_string())
            .one(self.connection())
            .await?;
        Ok(result.map(Into::into))
    }

    async fn insert_store(&self, store: &Store) -> anyhow::Result<()> {
        let active = ActiveModel {
            id: Set(store.base.id.as_str().to_string()),
            label: Set(store.base.label.clone()),
            city: Set(store.city.clone()),
            state: Set(store.state.clone()),
            created_at: Set(Some(store.base.metadata.created_at)),
        };
        active.insert(self.connection()).await?;
        Ok(())
    }

    async fn delete_store(&self, id: &str) -> anyhow::Result<bool> {
        let txn = self.connection().begin().await?;
        planning::Entity::delete_many()
            .filter(planning::Column::StoreId.eq(id))
            .exec(&txn)
            .await?;
        let result = Entity::delete_by_id(id.to_string()).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
