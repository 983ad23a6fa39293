//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the backup library.

pub mod backup;
pub mod show;
pub mod types;

pub use backup::handle_backup_command;
pub use show::{handle_show_command, ShowArgs};
pub use types::{format_backup_plan, handle_types_command};
