//! Remote access to Foreman objects
//!
//! The backup only needs two calls from a server: list the objects of a
//! resource type, and fetch one object in full. [`ResourceFetcher`] captures
//! exactly that, with an HTTP implementation for real servers and an
//! in-memory one for tests.

pub mod foreman;
pub mod memory;

pub use foreman::ForemanClient;
pub use memory::MemoryFetcher;

use crate::error::BackupResult;
use crate::models::{ResourceId, ResourceRecord, ResourceSummary, ResourceType};

/// Source of resource listings and full records
pub trait ResourceFetcher {
    /// List every object of a resource type
    fn list_resources(&self, resource_type: ResourceType) -> BackupResult<Vec<ResourceSummary>>;

    /// Fetch one object in full
    ///
    /// `Ok(None)` means the object does not exist (any more).
    fn get_resource(
        &self,
        resource_type: ResourceType,
        id: &ResourceId,
    ) -> BackupResult<Option<ResourceRecord>>;
}

impl<F: ResourceFetcher + ?Sized> ResourceFetcher for &F {
    fn list_resources(&self, resource_type: ResourceType) -> BackupResult<Vec<ResourceSummary>> {
        (**self).list_resources(resource_type)
    }

    fn get_resource(
        &self,
        resource_type: ResourceType,
        id: &ResourceId,
    ) -> BackupResult<Option<ResourceRecord>> {
        (**self).get_resource(resource_type, id)
    }
}
