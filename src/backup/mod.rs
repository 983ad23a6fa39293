//! Backup of a Foreman server's configuration
//!
//! Writes one YAML file per object, grouped by resource type:
//!
//! ```text
//! <root>/
//!   architectures/x86_64.yaml
//!   domains/example.com.yaml
//!   ...
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use foreman_backup::backup::BackupExporter;
//! use foreman_backup::client::ForemanClient;
//! use foreman_backup::config::{BackupPaths, ForemanSettings};
//!
//! let client = ForemanClient::new(&ForemanSettings::default())?;
//! let exporter = BackupExporter::new(client, BackupPaths::new("backup"));
//! exporter.run_full_backup()?;
//! ```

mod exporter;
mod plan;

pub use exporter::{export_resource_type, run_full_backup, BackupExporter};
pub use plan::{enabled_resource_types, PlanEntry, BACKUP_PLAN};
