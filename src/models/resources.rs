use serde::{Deserialize, Serialize};

/// A billed cloud resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: f64,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            cost,
        }
    }
}

/// The fixed resource list every fresh process starts with.
pub fn sample_resources() -> Vec<ResourceEntry> {
    vec![
        ResourceEntry::new("Web Server", "EC2", 100.0),
        ResourceEntry::new("Database", "RDS", 200.0),
        ResourceEntry::new("Storage", "S3", 50.0),
    ]
}
