//! foreman-backup - export a Foreman server's configuration as YAML
//!
//! This library snapshots the configuration objects of a Foreman server
//! (architectures, domains, hosts, subnets, ...) into a directory tree with
//! one human-readable YAML file per object, suitable for versioning and
//! disaster recovery.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Connection settings and backup tree paths
//! - `error`: Custom error types
//! - `models`: Resource types, identifiers, listing entries and records
//! - `client`: The fetcher abstraction and the Foreman API client
//! - `storage`: YAML file writing
//! - `backup`: The backup plan and orchestration
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use foreman_backup::backup::run_full_backup;
//! use foreman_backup::client::ForemanClient;
//! use foreman_backup::config::{BackupPaths, ForemanSettings};
//!
//! let settings = ForemanSettings::new("foreman.example.com", 443, "admin", "secret");
//! let client = ForemanClient::new(&settings)?;
//! run_full_backup(&client, &BackupPaths::new("backup"))?;
//! ```

pub mod backup;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{BackupError, BackupResult};
