use async_trait::async_trait;
use contracts::domain::a003_calendar::aggregate::CalendarWeek;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

use crate::shared::data::db::SqliteDatastore;

/// Справочник календаря, только чтение
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Все недели по возрастанию
    async fn list_weeks(&self) -> anyhow::Result<Vec<CalendarWeek>>;
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_calendar")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub week: String,
    pub month: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CalendarWeek {
    fn from(m: Model) -> Self {
        CalendarWeek {
            week: m.week,
            month: m.month,
        }
    }
}

#[async_trait]
impl CalendarRepository for SqliteDatastore {
    async fn list_weeks(&self) -> anyhow::Result<Vec<CalendarWeek>> {
        let weeks = Entity::find()
            .order_by_asc(Column::Week)
            .all(self.connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(weeks)
    }
}
