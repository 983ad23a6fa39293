//! Backup CLI command
//!
//! Runs a full backup of the configured server into the output root.

use tracing::debug;

use crate::backup::BackupExporter;
use crate::client::ForemanClient;
use crate::config::{BackupPaths, ForemanSettings};
use crate::error::BackupResult;

/// Handle the backup command
pub fn handle_backup_command(settings: &ForemanSettings, paths: &BackupPaths) -> BackupResult<()> {
    let client = ForemanClient::new(settings)?;
    let exporter = BackupExporter::new(client, paths.clone());
    debug!(
        server = %exporter.fetcher().base_url(),
        root = %exporter.paths().root().display(),
        "Starting backup"
    );

    exporter.run_full_backup()
}
