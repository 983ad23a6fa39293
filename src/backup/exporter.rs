//! Backup orchestration
//!
//! Exports resource types one at a time, one object at a time: list,
//! fetch each object in full, write it to `<root>/<type>/<name>.yaml`.
//! The first error aborts the run; files written before it stay on disk.

use tracing::{debug, info, warn};

use super::plan::enabled_resource_types;
use crate::client::ResourceFetcher;
use crate::config::paths::BackupPaths;
use crate::error::BackupResult;
use crate::models::{ResourceSummary, ResourceType};
use crate::storage::file_io::write_yaml_atomic;

/// Drives a backup against one fetcher into one backup root
pub struct BackupExporter<F> {
    fetcher: F,
    paths: BackupPaths,
}

impl<F: ResourceFetcher> BackupExporter<F> {
    /// Create an exporter writing below `paths`
    pub fn new(fetcher: F, paths: BackupPaths) -> Self {
        Self { fetcher, paths }
    }

    pub fn paths(&self) -> &BackupPaths {
        &self.paths
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Export every object of one resource type
    ///
    /// `summaries` is consumed lazily, in order. Objects that cannot be
    /// fetched, or have no string `name`, are skipped. Existing files are
    /// replaced; files of objects no longer on the server are left alone.
    pub fn export_resource_type<I>(
        &self,
        resource_type: ResourceType,
        summaries: I,
    ) -> BackupResult<()>
    where
        I: IntoIterator<Item = ResourceSummary>,
    {
        let dir = self.paths.ensure_resource_dir(resource_type.as_str())?;

        for summary in summaries {
            let Some(id) = summary.id() else {
                warn!(resource_type = %resource_type, "Skipping listing entry without id");
                continue;
            };

            let Some(record) = self.fetcher.get_resource(resource_type, &id)? else {
                warn!(resource_type = %resource_type, id = %id, "Skipping object: nothing fetched");
                continue;
            };

            let Some(name) = record.name() else {
                warn!(resource_type = %resource_type, id = %id, "Skipping object without name");
                continue;
            };

            let path = self.paths.record_file(resource_type.as_str(), name);
            write_yaml_atomic(&path, &record)?;
            debug!(resource_type = %resource_type, id = %id, path = %path.display(), "Wrote object");
        }

        debug!(resource_type = %resource_type, dir = %dir.display(), "Finished resource type");
        Ok(())
    }

    /// List one resource type through the fetcher and export it
    pub fn backup_resource_type(&self, resource_type: ResourceType) -> BackupResult<()> {
        info!(resource_type = %resource_type, "Backing up {}", resource_type);
        let summaries = self.fetcher.list_resources(resource_type)?;
        self.export_resource_type(resource_type, summaries)
    }

    /// Export every enabled resource type of the backup plan, in order
    pub fn run_full_backup(&self) -> BackupResult<()> {
        for resource_type in enabled_resource_types() {
            self.backup_resource_type(resource_type)?;
        }
        Ok(())
    }
}

/// Export one resource type below `root`
pub fn export_resource_type<F, I>(
    fetcher: &F,
    paths: &BackupPaths,
    resource_type: ResourceType,
    summaries: I,
) -> BackupResult<()>
where
    F: ResourceFetcher,
    I: IntoIterator<Item = ResourceSummary>,
{
    BackupExporter::new(fetcher, paths.clone()).export_resource_type(resource_type, summaries)
}

/// Run a full backup below `root`
pub fn run_full_backup<F: ResourceFetcher>(fetcher: &F, paths: &BackupPaths) -> BackupResult<()> {
    BackupExporter::new(fetcher, paths.clone()).run_full_backup()
}
