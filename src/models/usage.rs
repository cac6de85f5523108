use serde::{Deserialize, Serialize};

/// A labelled numeric series, used for both service usage and daily costs.
///
/// `labels` and `data` are expected to be the same length but the API does
/// not enforce it; a mismatched payload is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl UsageSeries {
    pub fn new(labels: Vec<&str>, data: Vec<f64>) -> Self {
        Self {
            labels: labels.into_iter().map(String::from).collect(),
            data,
        }
    }
}

/// Per-service usage series every fresh process starts with.
pub fn sample_service_usage() -> UsageSeries {
    UsageSeries::new(
        vec!["Compute", "Storage", "Networking", "Database", "Analytics"],
        vec![100.0, 150.0, 100.0, 200.0, 250.0],
    )
}

/// Day-of-week cost series every fresh process starts with.
pub fn sample_daily_costs() -> UsageSeries {
    UsageSeries::new(
        vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        vec![120.0, 190.0, 30.0, 50.0, 20.0, 30.0, 150.0],
    )
}
