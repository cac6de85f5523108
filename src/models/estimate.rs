use serde::{Deserialize, Serialize};

/// Input for the cost-estimation endpoint. Transient, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationParams {
    pub instance_count: u32,
    pub hours_per_day: u32,
    pub days_per_month: u32,
    pub cost_per_hour: f64,
}

impl EstimationParams {
    /// Projected monthly spend for a fleet of identical instances.
    pub fn monthly_cost(&self) -> f64 {
        f64::from(self.instance_count)
            * f64::from(self.hours_per_day)
            * f64::from(self.days_per_month)
            * self.cost_per_hour
    }
}

/// Response body for the cost-estimation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub estimated_monthly_cost: f64,
}
