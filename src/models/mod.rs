//! Core data models for foreman-backup
//!
//! This module contains the data structures that describe what is exported:
//! resource types, object identifiers, listing entries and full records.

pub mod ids;
pub mod record;
pub mod resource_type;

pub use ids::ResourceId;
pub use record::{ResourceRecord, ResourceSummary};
pub use resource_type::ResourceType;
