//! Resource type model
//!
//! The closed set of Foreman object categories the exporter knows about.
//! Each tag doubles as the API collection path and the backup subdirectory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of configuration object on the Foreman server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Architectures,
    CommonParameters,
    ComputeResources,
    ComputeProfiles,
    ConfigTemplates,
    Domains,
    Environments,
    Hosts,
    Hostgroups,
    Locations,
    Media,
    Operatingsystems,
    Organizations,
    SmartProxies,
    Subnets,
}

impl ResourceType {
    /// Every known resource type, in backup order
    pub const ALL: [ResourceType; 15] = [
        Self::Architectures,
        Self::CommonParameters,
        Self::ComputeResources,
        Self::ComputeProfiles,
        Self::ConfigTemplates,
        Self::Domains,
        Self::Environments,
        Self::Hosts,
        Self::Hostgroups,
        Self::Locations,
        Self::Media,
        Self::Operatingsystems,
        Self::Organizations,
        Self::SmartProxies,
        Self::Subnets,
    ];

    /// The API collection tag (`/api/v2/<tag>`), also used as directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Architectures => "architectures",
            Self::CommonParameters => "common_parameters",
            Self::ComputeResources => "compute_resources",
            Self::ComputeProfiles => "compute_profiles",
            Self::ConfigTemplates => "config_templates",
            Self::Domains => "domains",
            Self::Environments => "environments",
            Self::Hosts => "hosts",
            Self::Hostgroups => "hostgroups",
            Self::Locations => "locations",
            Self::Media => "media",
            Self::Operatingsystems => "operatingsystems",
            Self::Organizations => "organizations",
            Self::SmartProxies => "smart_proxies",
            Self::Subnets => "subnets",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                format!(
                    "unknown resource type '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                )
            })
    }
}
