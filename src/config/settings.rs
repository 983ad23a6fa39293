//! Connection settings for foreman-backup
//!
//! Everything needed to reach and authenticate against one Foreman server.
//! Values arrive from command-line flags, which fall back to `FOREMAN_*`
//! environment variables.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::BackupError;

/// Foreman API version the client speaks
pub const FOREMAN_API_VERSION: &str = "v2";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_USERNAME: &str = "foreman";
pub const DEFAULT_PASSWORD: &str = "changeme";

/// Connection settings for one Foreman server
#[derive(Clone)]
pub struct ForemanSettings {
    /// Hostname or address of the server
    pub host: String,

    /// HTTPS port
    pub port: u16,

    /// API user
    pub username: String,

    /// API password, wiped from memory on drop
    pub password: Zeroizing<String>,

    /// Whether to verify the server's TLS certificate
    pub verify_tls: bool,
}

impl Default for ForemanSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.to_string(),
            password: Zeroizing::new(DEFAULT_PASSWORD.to_string()),
            verify_tls: false,
        }
    }
}

impl fmt::Debug for ForemanSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForemanSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

impl ForemanSettings {
    /// Create settings for a host with the given credentials
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: Zeroizing::new(password.into()),
            verify_tls: false,
        }
    }

    /// Enable or disable certificate verification
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Base URL of the REST API, e.g. `https://foreman:443/api/v2`
    pub fn api_url(&self) -> String {
        format!(
            "https://{}:{}/api/{}",
            self.host, self.port, FOREMAN_API_VERSION
        )
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), BackupError> {
        if self.host.trim().is_empty() {
            return Err(BackupError::Config("Foreman host cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(BackupError::Config("Foreman port cannot be 0".into()));
        }

        if self.username.is_empty() {
            return Err(BackupError::Config("Foreman username cannot be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ForemanSettings::default();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 443);
        assert_eq!(settings.username, "foreman");
        assert_eq!(settings.password.as_str(), "changeme");
        assert!(!settings.verify_tls);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_api_url() {
        let settings = ForemanSettings::new("foreman.example.com", 8443, "admin", "secret");
        assert_eq!(settings.api_url(), "https://foreman.example.com:8443/api/v2");
    }

    #[test]
    fn test_validation() {
        let mut settings = ForemanSettings::default();
        settings.host = "  ".into();
        assert!(settings.validate().is_err());

        let mut settings = ForemanSettings::default();
        settings.port = 0;
        assert!(settings.validate().is_err());

        let mut settings = ForemanSettings::default();
        settings.username.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let settings = ForemanSettings::new("h", 443, "u", "hunter2");
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_with_verify_tls() {
        let settings = ForemanSettings::default().with_verify_tls(true);
        assert!(settings.verify_tls);
    }
}
