//! Types CLI command
//!
//! Prints the backup plan: which resource types a backup exports and
//! where their files go.

use crate::backup::BACKUP_PLAN;
use crate::config::BackupPaths;

/// Format the backup plan as a table
pub fn format_backup_plan(paths: &BackupPaths) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<20} {:<9} {}\n", "RESOURCE TYPE", "STATUS", "DIRECTORY"));
    for entry in BACKUP_PLAN {
        let tag = entry.resource_type.as_str();
        let status = if entry.enabled { "enabled" } else { "disabled" };
        output.push_str(&format!(
            "{:<20} {:<9} {}\n",
            tag,
            status,
            paths.resource_dir(tag).display()
        ));
    }

    output
}

/// Handle the types command
pub fn handle_types_command(paths: &BackupPaths) {
    print!("{}", format_backup_plan(paths));
}
