use serde::{Deserialize, Serialize};

/// One month of cloud spend.
///
/// The month is a display label ("January", "February", ...). Order in the
/// containing `Vec` is display order; nothing enforces uniqueness of labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub month: String,
    pub cost: f64,
}

impl CostPoint {
    pub fn new(month: impl Into<String>, cost: f64) -> Self {
        Self {
            month: month.into(),
            cost,
        }
    }
}

/// The fixed monthly series every fresh process starts with.
pub fn sample_cloud_costs() -> Vec<CostPoint> {
    vec![
        CostPoint::new("January", 65.0),
        CostPoint::new("February", 59.0),
        CostPoint::new("March", 80.0),
        CostPoint::new("April", 81.0),
        CostPoint::new("May", 56.0),
        CostPoint::new("June", 55.0),
        CostPoint::new("July", 40.0),
    ]
}
