//! In-memory store for the four shared datasets.
//!
//! Values live only for the lifetime of the process. A single coarse lock
//! guards all four datasets; every operation is a short copy-in or copy-out,
//! so the lock is never held across an await point.

use std::sync::{Arc, Mutex};

use crate::models::{
    sample_cloud_costs, sample_daily_costs, sample_resources, sample_service_usage, CostPoint,
    ResourceEntry, UsageSeries,
};

struct Datasets {
    cloud_costs: Vec<CostPoint>,
    service_usage: UsageSeries,
    daily_costs: UsageSeries,
    resources: Vec<ResourceEntry>,
}

/// Cloneable handle to the process-wide dataset state.
///
/// Reads return a snapshot; writes replace the whole collection, never a
/// partial patch. The fixed set of datasets exists from startup, so no
/// operation here can fail.
#[derive(Clone)]
pub struct DatasetStore {
    inner: Arc<Mutex<Datasets>>,
}

impl DatasetStore {
    /// Create a store seeded with the fixed sample data.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Datasets {
                cloud_costs: sample_cloud_costs(),
                service_usage: sample_service_usage(),
                daily_costs: sample_daily_costs(),
                resources: sample_resources(),
            })),
        }
    }

    pub fn cloud_costs(&self) -> Vec<CostPoint> {
        self.inner.lock().expect("store lock poisoned").cloud_costs.clone()
    }

    pub fn service_usage(&self) -> UsageSeries {
        self.inner
            .lock()
            .expect("store lock poisoned")
            .service_usage
            .clone()
    }

    pub fn daily_costs(&self) -> UsageSeries {
        self.inner.lock().expect("store lock poisoned").daily_costs.clone()
    }

    pub fn resources(&self) -> Vec<ResourceEntry> {
        self.inner.lock().expect("store lock poisoned").resources.clone()
    }

    /// Replace the monthly cost series, discarding the prior value.
    pub fn replace_cloud_costs(&self, costs: Vec<CostPoint>) {
        self.inner.lock().expect("store lock poisoned").cloud_costs = costs;
    }

    /// Replace the service-usage series, discarding the prior value.
    pub fn replace_service_usage(&self, usage: UsageSeries) {
        self.inner.lock().expect("store lock poisoned").service_usage = usage;
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_sample_data() {
        let store = DatasetStore::new();

        let costs = store.cloud_costs();
        assert_eq!(costs.len(), 7);
        assert_eq!(costs[0], CostPoint::new("January", 65.0));
        assert_eq!(costs[6], CostPoint::new("July", 40.0));

        let usage = store.service_usage();
        assert_eq!(usage.labels.len(), usage.data.len());

        assert_eq!(store.resources().len(), 3);
        assert_eq!(store.daily_costs().labels[0], "Mon");
    }

    #[test]
    fn replace_cloud_costs_round_trips() {
        let store = DatasetStore::new();
        let updated = vec![CostPoint::new("August", 12.5)];

        store.replace_cloud_costs(updated.clone());

        assert_eq!(store.cloud_costs(), updated);
    }

    #[test]
    fn replace_service_usage_discards_prior_value() {
        let store = DatasetStore::new();
        let updated = UsageSeries::new(vec!["Compute"], vec![1.0]);

        store.replace_service_usage(updated.clone());

        assert_eq!(store.service_usage(), updated);
        // Other datasets are untouched.
        assert_eq!(store.cloud_costs().len(), 7);
    }
}
