//! Show CLI command
//!
//! Looks a single object up by name and prints its full record as YAML,
//! the same document a backup would write for it.

use clap::Args;

use crate::client::ForemanClient;
use crate::config::ForemanSettings;
use crate::error::{BackupError, BackupResult};
use crate::models::ResourceType;
use crate::storage::to_yaml_string;

/// Arguments of the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Resource type (e.g. domains, hosts, smart_proxies)
    pub resource_type: ResourceType,

    /// Object name
    pub name: String,
}

/// Handle the show command
pub fn handle_show_command(settings: &ForemanSettings, args: &ShowArgs) -> BackupResult<()> {
    let client = ForemanClient::new(settings)?;

    let record = client
        .find_by_name(args.resource_type, &args.name)?
        .ok_or_else(|| BackupError::not_found(args.resource_type.as_str(), &args.name))?;

    print!("{}", to_yaml_string(&record)?);
    Ok(())
}
