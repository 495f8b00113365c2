use contracts::projections::p001_planning::dto::{PlanningAggregate, PlanningAggregateMap, WeeklySales};

use super::repository::PlanningRow;

/// Group flat join rows into one record per SKU.
///
/// Keyed by SKU id: two SKUs sharing a label stay separate. Price, cost and
/// label come from the first row of each SKU (they are SKU columns, so all
/// rows of one SKU agree). Sales are sorted by week token; SKUs without rows
/// do not appear.
pub fn group_planning_rows(rows: Vec<PlanningRow>) -> PlanningAggregateMap {
    let mut grouped = PlanningAggregateMap::new();

    for row in rows {
        let entry = grouped
            .entry(row.sku_id.clone())
            .or_insert_with(|| PlanningAggregate {
                id: row.sku_id.clone(),
                label: row.label.clone(),
                price: row.price,
                cost: row.cost,
                sales_data: Vec::new(),
            });
        entry.sales_data.push(WeeklySales {
            week: row.week,
            sales_units: row.sales_units,
        });
    }

    for aggregate in grouped.values_mut() {
        aggregate.sales_data.sort_by(|a, b| a.week.cmp(&b.week));
    }

    grouped
}
