//! Storage layer for foreman-backup
//!
//! YAML serialization and whole-file replacement of exported records.

pub mod file_io;

pub use file_io::{read_yaml, to_yaml_string, write_yaml_atomic};
