use contracts::dashboards::d001_weekly_metrics::dto::{MonthlyMetricsResponse, WeeklyMetricsResponse};
use contracts::domain::a003_calendar::aggregate::{canonical_weeks, CalendarWeek};
use contracts::projections::p001_planning::dto::PlanningAggregateMap;
use std::collections::HashMap;

/// Totals for one period (a week or a month)
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodMetrics {
    pub period: String,
    pub revenue: f64,
    pub cost: f64,
    pub gm_dollars: f64,
    pub gm_percent: f64,
}

impl PeriodMetrics {
    fn empty(period: String) -> Self {
        Self {
            period,
            revenue: 0.0,
            cost: 0.0,
            gm_dollars: 0.0,
            gm_percent: 0.0,
        }
    }

    /// Must run after all contributions are accumulated
    fn finish(&mut self) {
        self.gm_percent = gm_percent(self.gm_dollars, self.revenue);
    }
}

/// GM% = GM / revenue * 100; 0 when there is no revenue or the inputs are not finite
pub fn gm_percent(gm_dollars: f64, revenue: f64) -> f64 {
    if revenue <= 0.0 || !revenue.is_finite() || !gm_dollars.is_finite() {
        return 0.0;
    }
    let percent = gm_dollars * 100.0 / revenue;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

/// Roll per-SKU weekly sales up into the 52 canonical week buckets.
///
/// Buckets are matched by week token only; tokens outside the canonical set
/// are dropped. Weeks without sales stay at zero.
pub fn roll_up_weekly(aggregate: &PlanningAggregateMap) -> Vec<PeriodMetrics> {
    let mut buckets: Vec<PeriodMetrics> = canonical_weeks()
        .into_iter()
        .map(PeriodMetrics::empty)
        .collect();
    let index: HashMap<String, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (b.period.clone(), i))
        .collect();

    for sku in aggregate.values() {
        for sale in &sku.sales_data {
            let Some(&i) = index.get(&sale.week) else {
                tracing::debug!("Dropping sales of {} for unknown week {}", sku.id, sale.week);
                continue;
            };
            let units = sale.sales_units as f64;
            let revenue = units * sku.price;
            let cost = units * sku.cost;

            let bucket = &mut buckets[i];
            bucket.revenue += revenue;
            bucket.cost += cost;
            bucket.gm_dollars += revenue - cost;
        }
    }

    for bucket in &mut buckets {
        bucket.finish();
    }
    buckets
}

/// Fold weekly buckets into months following the calendar order.
/// Weeks the calendar does not map are skipped.
pub fn roll_up_monthly(weeks: &[PeriodMetrics], calendar: &[CalendarWeek]) -> Vec<PeriodMetrics> {
    let mut months: Vec<PeriodMetrics> = Vec::new();
    let mut month_index: HashMap<&str, usize> = HashMap::new();
    let mut week_to_month: HashMap<&str, usize> = HashMap::new();

    for entry in calendar {
        let i = *month_index.entry(entry.month.as_str()).or_insert_with(|| {
            months.push(PeriodMetrics::empty(entry.month.clone()));
            months.len() - 1
        });
        week_to_month.insert(entry.week.as_str(), i);
    }

    for week in weeks {
        let Some(&i) = week_to_month.get(week.period.as_str()) else {
            continue;
        };
        let month = &mut months[i];
        month.revenue += week.revenue;
        month.cost += week.cost;
        month.gm_dollars += week.gm_dollars;
    }

    for month in &mut months {
        month.finish();
    }
    months
}

pub fn into_weekly_response(store_id: &str, buckets: Vec<PeriodMetrics>) -> WeeklyMetricsResponse {
    let mut response = WeeklyMetricsResponse {
        store_id: store_id.to_string(),
        weeks: Vec::with_capacity(buckets.len()),
        revenue: Vec::with_capacity(buckets.len()),
        cost: Vec::with_capacity(buckets.len()),
        gm_dollars: Vec::with_capacity(buckets.len()),
        gm_percent: Vec::with_capacity(buckets.len()),
    };
    for b in buckets {
        response.weeks.push(b.period);
        response.revenue.push(b.revenue);
        response.cost.push(b.cost);
        response.gm_dollars.push(b.gm_dollars);
        response.gm_percent.push(b.gm_percent);
    }
    response
}

pub fn into_monthly_response(store_id: &str, buckets: Vec<PeriodMetrics>) -> MonthlyMetricsResponse {
    let weekly = into_weekly_response(store_id, buckets);
    MonthlyMetricsResponse {
        store_id: weekly.store_id,
        months: weekly.weeks,
        revenue: weekly.revenue,
        cost: weekly.cost,
        gm_dollars: weekly.gm_dollars,
        gm_percent: weekly.gm_percent,
    }
}
