//! Configuration module for foreman-backup
//!
//! This module provides:
//! - Foreman connection settings
//! - Backup tree path resolution

pub mod paths;
pub mod settings;

pub use paths::BackupPaths;
pub use settings::ForemanSettings;
