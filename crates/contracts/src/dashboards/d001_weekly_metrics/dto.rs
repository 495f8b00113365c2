use serde::{Deserialize, Serialize};

/// Weekly gross-margin metrics for a store over the canonical 52-week timeline.
///
/// All vectors are parallel and have one entry per week. Values are raw
/// doubles; rounding is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMetricsResponse {
    pub store_id: String,
    /// "W01".."W52"
    pub weeks: Vec<String>,
    pub revenue: Vec<f64>,
    pub cost: Vec<f64>,
    pub gm_dollars: Vec<f64>,
    /// 0 when the week has no revenue
    pub gm_percent: Vec<f64>,
}

/// Monthly fold of the weekly metrics, months in calendar order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetricsResponse {
    pub store_id: String,
    /// "M01".."M12"
    pub months: Vec<String>,
    pub revenue: Vec<f64>,
    pub cost: Vec<f64>,
    pub gm_dollars: Vec<f64>,
    pub gm_percent: Vec<f64>,
}
