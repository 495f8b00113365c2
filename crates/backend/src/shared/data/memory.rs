//! In-memory datastore for service tests

use async_trait::async_trait;
use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::a002_sku::aggregate::Sku;
use contracts::domain::a003_calendar::aggregate::CalendarWeek;
use contracts::domain::common::AggregateId;
use contracts::projections::p001_planning::dto::PlanningFact;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::domain::a001_store::repository::StoreRepository;
use crate::domain::a002_sku::repository::SkuRepository;
use crate::domain::a003_calendar::repository::CalendarRepository;
use crate::projections::p001_planning::repository::{PlanningRepository, PlanningRow};

type FactKey = (String, String, String);

#[derive(Default)]
pub struct InMemoryDatastore {
    stores: Mutex<BTreeMap<String, Store>>,
    skus: Mutex<BTreeMap<String, Sku>>,
    facts: Mutex<BTreeMap<FactKey, i64>>,
    fail: bool,
}

impl InMemoryDatastore {
    /// Every call returns an error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("datastore unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl StoreRepository for InMemoryDatastore {
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>> {
        self.check()?;
        Ok(self.stores.lock().unwrap().values().cloned().collect())
    }

    async fn get_store(&self, id: &str) -> anyhow::Result<Option<Store>> {
        self.check()?;
        Ok(self.stores.lock().unwrap().get(id).cloned())
    }

    async fn insert_store(&self, store: &Store) -> anyhow::Result<()> {
        self.check()?;
        let mut stores = self.stores.lock().unwrap();
        let id = store.base.id.as_str().to_string();
        if stores.contains_key(&id) {
            anyhow::bail!("UNIQUE constraint failed: a001_store.id");
        }
        stores.insert(id, store.clone());
        Ok(())
    }

    async fn delete_store(&self, id: &str) -> anyhow::Result<bool> {
        self.check()?;
        self.facts.lock().unwrap().retain(|(store, _, _), _| store != id);
        Ok(self.stores.lock().unwrap().remove(id).is_some())
    }
}

#[async_trait]
impl SkuRepository for InMemoryDatastore {
    async fn list_skus(&self) -> anyhow::Result<Vec<Sku>> {
        self.check()?;
        Ok(self.skus.lock().unwrap().values().cloned().collect())
    }

    async fn get_sku(&self, id: &str) -> anyhow::Result<Option<Sku>> {
        self.check()?;
        Ok(self.skus.lock().unwrap().get(id).cloned())
    }

    async fn insert_sku(&self, sku: &Sku) -> anyhow::Result<()> {
        self.check()?;
        let mut skus = self.skus.lock().unwrap();
        let id = sku.base.id.as_str().to_string();
        if skus.contains_key(&id) {
            anyhow::bail!("UNIQUE constraint failed: a002_sku.id");
        }
        skus.insert(id, sku.clone());
        Ok(())
    }

    async fn delete_sku(&self, id: &str) -> anyhow::Result<bool> {
        self.check()?;
        self.facts.lock().unwrap().retain(|(_, sku, _), _| sku != id);
        Ok(self.skus.lock().unwrap().remove(id).is_some())
    }
}

#[async_trait]
impl CalendarRepository for InMemoryDatastore {
    async fn list_weeks(&self) -> anyhow::Result<Vec<CalendarWeek>> {
        self.check()?;
        Ok(CalendarWeek::canonical())
    }
}

#[async_trait]
impl PlanningRepository for InMemoryDatastore {
    async fn planning_rows(&self, store_id: &str) -> anyhow::Result<Vec<PlanningRow>> {
        self.check()?;
        let months: HashMap<String, String> = CalendarWeek::canonical()
            .into_iter()
            .map(|c| (c.week, c.month))
            .collect();
        let skus = self.skus.lock().unwrap();
        let facts = self.facts.lock().unwrap();

        let mut rows: Vec<PlanningRow> = facts
            .iter()
            .filter(|((store, _, _), _)| store == store_id)
            .filter_map(|((_, sku_id, week), units)| {
                let sku = skus.get(sku_id)?;
                Some(PlanningRow {
                    sku_id: sku_id.clone(),
                    label: sku.base.label.clone(),
                    price: sku.price,
                    cost: sku.cost,
                    week: week.clone(),
                    month: months.get(week).cloned(),
                    sales_units: *units,
                })
            })
            .collect();
        rows.sort_by(|a, b| (&a.week, &a.sku_id).cmp(&(&b.week, &b.sku_id)));
        Ok(rows)
    }

    async fn list_facts(&self, store_id: &str) -> anyhow::Result<Vec<PlanningFact>> {
        self.check()?;
        Ok(self
            .facts
            .lock()
            .unwrap()
            .iter()
            .filter(|((store, _, _), _)| store == store_id)
            .map(|((store, sku, week), units)| PlanningFact {
                store_id: store.clone(),
                sku_id: sku.clone(),
                week: week.clone(),
                sales_units: *units,
            })
            .collect())
    }

    async fn upsert_fact(&self, fact: &PlanningFact) -> anyhow::Result<()> {
        self.check()?;
        self.facts.lock().unwrap().insert(
            (fact.store_id.clone(), fact.sku_id.clone(), fact.week.clone()),
            fact.sales_units,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(store: &str, sku: &str, week: &str, units: i64) -> PlanningFact {
        PlanningFact {
            store_id: store.into(),
            sku_id: sku.into(),
            week: week.into(),
            sales_units: units,
        }
    }

    #[tokio::test]
    async fn test_delete_sku_removes_its_facts() {
        let repo = InMemoryDatastore::default();
        for id in ["SK1", "SK2"] {
            let sku = Sku::new_for_insert(
                id.into(),
                "Mug".into(),
                "Kitchen".into(),
                "Home".into(),
                5.0,
                3.0,
            );
            repo.insert_sku(&sku).await.unwrap();
        }
        repo.upsert_fact(&fact("ST1", "SK1", "W01", 10)).await.unwrap();
        repo.upsert_fact(&fact("ST2", "SK1", "W03", 2)).await.unwrap();
        repo.upsert_fact(&fact("ST1", "SK2", "W01", 1)).await.unwrap();

        assert!(repo.delete_sku("SK1").await.unwrap());

        assert_eq!(repo.list_facts("ST1").await.unwrap(), vec![fact("ST1", "SK2", "W01", 1)]);
        assert!(repo.list_facts("ST2").await.unwrap().is_empty());
        assert!(!repo.delete_sku("SK1").await.unwrap());
    }
}
