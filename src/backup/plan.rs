//! The backup plan
//!
//! A fixed, ordered table of the resource types a full backup exports.
//! Adding a type to the backup means adding a row here.

use crate::models::ResourceType;

/// One row of the backup plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub resource_type: ResourceType,
    /// Disabled rows stay in the table but are not exported
    pub enabled: bool,
}

impl PlanEntry {
    const fn enabled(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            enabled: true,
        }
    }

    const fn disabled(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            enabled: false,
        }
    }
}

/// Resource types exported by a full backup, in export order
pub const BACKUP_PLAN: &[PlanEntry] = &[
    PlanEntry::enabled(ResourceType::Architectures),
    PlanEntry::enabled(ResourceType::CommonParameters),
    PlanEntry::enabled(ResourceType::ComputeResources),
    PlanEntry::enabled(ResourceType::ComputeProfiles),
    PlanEntry::enabled(ResourceType::ConfigTemplates),
    PlanEntry::enabled(ResourceType::Domains),
    PlanEntry::enabled(ResourceType::Environments),
    PlanEntry::enabled(ResourceType::Hosts),
    PlanEntry::enabled(ResourceType::Hostgroups),
    PlanEntry::enabled(ResourceType::Locations),
    PlanEntry::enabled(ResourceType::Media),
    PlanEntry::enabled(ResourceType::Operatingsystems),
    // Intentionally skipped
    PlanEntry::disabled(ResourceType::Organizations),
    PlanEntry::enabled(ResourceType::SmartProxies),
    PlanEntry::enabled(ResourceType::Subnets),
];

/// The resource types a full backup actually exports
pub fn enabled_resource_types() -> impl Iterator<Item = ResourceType> {
    BACKUP_PLAN
        .iter()
        .filter(|entry| entry.enabled)
        .map(|entry| entry.resource_type)
}
