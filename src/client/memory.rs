//! In-memory fetcher
//!
//! Serves canned listings and records. Every `get_resource` call is logged
//! so callers can check which objects were fetched and in what order.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::ResourceFetcher;
use crate::error::{BackupError, BackupResult};
use crate::models::{ResourceId, ResourceRecord, ResourceSummary, ResourceType};

#[derive(Debug, Default)]
pub struct MemoryFetcher {
    listings: HashMap<ResourceType, Vec<ResourceSummary>>,
    records: HashMap<(ResourceType, ResourceId), ResourceRecord>,
    failing: HashSet<(ResourceType, ResourceId)>,
    fetched: RefCell<Vec<(ResourceType, ResourceId)>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing entry for `resource_type`
    pub fn with_summary(mut self, resource_type: ResourceType, summary: ResourceSummary) -> Self {
        self.listings.entry(resource_type).or_default().push(summary);
        self
    }

    /// Add an object: listed under its `id` and fetchable by it
    ///
    /// # Panics
    ///
    /// Panics if `record` is not a JSON object with a usable `id`.
    pub fn with_record(mut self, resource_type: ResourceType, record: Value) -> Self {
        let record = ResourceRecord::from_value(record).expect("record must be a JSON object");
        let id = record
            .get("id")
            .and_then(ResourceId::from_value)
            .expect("record must carry an id");

        self.listings
            .entry(resource_type)
            .or_default()
            .push(ResourceSummary::with_id(id.clone()));
        self.records.insert((resource_type, id), record);
        self
    }

    /// Make fetching `id` fail with a transport error
    pub fn failing_on(mut self, resource_type: ResourceType, id: impl Into<ResourceId>) -> Self {
        self.failing.insert((resource_type, id.into()));
        self
    }

    /// Every `get_resource` call so far, in call order
    pub fn fetched(&self) -> Vec<(ResourceType, ResourceId)> {
        self.fetched.borrow().clone()
    }
}

impl ResourceFetcher for MemoryFetcher {
    fn list_resources(&self, resource_type: ResourceType) -> BackupResult<Vec<ResourceSummary>> {
        Ok(self
            .listings
            .get(&resource_type)
            .cloned()
            .unwrap_or_default())
    }

    fn get_resource(
        &self,
        resource_type: ResourceType,
        id: &ResourceId,
    ) -> BackupResult<Option<ResourceRecord>> {
        let key = (resource_type, id.clone());
        self.fetched.borrow_mut().push(key.clone());

        if self.failing.contains(&key) {
            return Err(BackupError::Http(format!(
                "connection reset while fetching {}/{}",
                resource_type, id
            )));
        }

        Ok(self.records.get(&key).cloned())
    }
}
