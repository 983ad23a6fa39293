//! Foreman API v2 client
//!
//! A blocking HTTP client with basic authentication. Listing calls walk
//! every page of the collection; single-object calls map 404 to "absent".

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::ResourceFetcher;
use crate::config::settings::ForemanSettings;
use crate::error::{BackupError, BackupResult};
use crate::models::{ResourceId, ResourceRecord, ResourceSummary, ResourceType};

/// Objects requested per listing page
pub const PAGE_SIZE: usize = 100;

/// Value of one search criterion
#[derive(Debug, Clone, PartialEq)]
pub enum SearchValue {
    Number(i64),
    Text(String),
}

impl From<&str> for SearchValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for SearchValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Build a Foreman search expression: `key == "text" AND key == 3`
pub fn search_query(criteria: &[(&str, SearchValue)]) -> String {
    criteria
        .iter()
        .map(|(key, value)| match value {
            SearchValue::Number(n) => format!("{} == {}", key, n),
            SearchValue::Text(s) => format!("{} == \"{}\"", key, s),
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Client for one Foreman server
pub struct ForemanClient {
    http: Client,
    base_url: String,
    username: String,
    password: Zeroizing<String>,
    page_size: usize,
}

impl ForemanClient {
    /// Create a client for the server described by `settings`
    pub fn new(settings: &ForemanSettings) -> BackupResult<Self> {
        Self::with_base_url(settings.api_url(), settings)
    }

    /// Create a client against an explicit API base URL
    ///
    /// Host and port in `settings` are ignored; credentials and TLS
    /// verification still apply.
    pub fn with_base_url(
        base_url: impl Into<String>,
        settings: &ForemanSettings,
    ) -> BackupResult<Self> {
        settings.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if !settings.verify_tls {
            warn!("TLS certificate verification disabled");
        }

        let http = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!settings.verify_tls)
            .user_agent(concat!("foreman-backup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackupError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            page_size: PAGE_SIZE,
        })
    }

    /// Change the listing page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a collection, or of one object in it when `id` is given
    pub fn resource_url(&self, resource_type: &str, id: Option<&ResourceId>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, resource_type, id),
            None => format!("{}/{}", self.base_url, resource_type),
        }
    }

    /// Run a GET request and decode the JSON body
    ///
    /// Returns `Ok(None)` for 404 when `allow_missing` is set.
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        allow_missing: bool,
    ) -> BackupResult<Option<Value>> {
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(url)
            .query(query)
            .basic_auth(&self.username, Some(self.password.as_str()))
            .send()
            .map_err(|e| BackupError::Http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND && allow_missing {
            debug!(url = %url, "Object not found");
            return Ok(None);
        }

        if !status.is_success() {
            return Err(api_error(url, response));
        }

        let body = response
            .text()
            .map_err(|e| BackupError::Http(format!("Failed to read response from {}: {}", url, e)))?;

        let value = serde_json::from_str(&body)
            .map_err(|e| BackupError::Json(format!("Invalid JSON from {}: {}", url, e)))?;

        Ok(Some(value))
    }

    /// GET a collection page
    ///
    /// Returns the page's `results` and the number of objects the whole
    /// collection holds (`subtotal`, else `total`), when reported.
    fn get_page(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> BackupResult<(Vec<Value>, Option<usize>)> {
        let mut body = self.get_json(url, query, false)?.unwrap_or(Value::Null);

        let expected = body
            .get("subtotal")
            .and_then(Value::as_u64)
            .or_else(|| body.get("total").and_then(Value::as_u64))
            .map(|n| n as usize);

        match body.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => Ok((results, expected)),
            _ => Err(BackupError::Json(format!(
                "Response from {} has no results array",
                url
            ))),
        }
    }

    /// Search a collection
    ///
    /// Criteria are combined with `AND`; text values are quoted.
    pub fn search(
        &self,
        resource_type: ResourceType,
        criteria: &[(&str, SearchValue)],
    ) -> BackupResult<Vec<ResourceSummary>> {
        let url = self.resource_url(resource_type.as_str(), None);
        let query = [
            ("search", search_query(criteria)),
            ("per_page", self.page_size.to_string()),
        ];

        let (results, _) = self.get_page(&url, &query)?;
        Ok(results
            .into_iter()
            .filter_map(ResourceSummary::from_value)
            .collect())
    }

    /// Look up one object by its name and fetch it in full
    pub fn find_by_name(
        &self,
        resource_type: ResourceType,
        name: &str,
    ) -> BackupResult<Option<ResourceRecord>> {
        let matches = self.search(resource_type, &[("name", SearchValue::from(name))])?;

        match matches.as_slice() {
            [] => Ok(None),
            [only] => match only.id() {
                Some(id) => self.get_resource(resource_type, &id),
                None => Ok(None),
            },
            many => Err(BackupError::Ambiguous {
                resource_type: resource_type.to_string(),
                name: name.to_string(),
                matches: many.len(),
            }),
        }
    }
}

impl ResourceFetcher for ForemanClient {
    fn list_resources(&self, resource_type: ResourceType) -> BackupResult<Vec<ResourceSummary>> {
        let url = self.resource_url(resource_type.as_str(), None);
        let mut summaries = Vec::new();
        let mut collected = 0usize;
        let mut page = 1usize;

        loop {
            let query = [
                ("page", page.to_string()),
                ("per_page", self.page_size.to_string()),
            ];
            let (results, expected) = self.get_page(&url, &query)?;
            let received = results.len();
            collected += received;

            summaries.extend(results.into_iter().filter_map(ResourceSummary::from_value));

            // The server may cap per_page below what was asked for, so only
            // trust a short page when no total is reported.
            let done = match expected {
                Some(expected) => received == 0 || collected >= expected,
                None => received < self.page_size,
            };
            if done {
                break;
            }
            page += 1;
        }

        debug!(
            resource_type = %resource_type,
            count = summaries.len(),
            pages = page,
            "Listed resources"
        );
        Ok(summaries)
    }

    fn get_resource(
        &self,
        resource_type: ResourceType,
        id: &ResourceId,
    ) -> BackupResult<Option<ResourceRecord>> {
        let url = self.resource_url(resource_type.as_str(), Some(id));
        Ok(self
            .get_json(&url, &[], true)?
            .and_then(ResourceRecord::from_value))
    }
}

/// Turn a non-success response into an API error
///
/// Foreman reports `{"error": {"message": ...}}` or, for validation
/// failures, `{"error": {"full_messages": [...]}}`.
fn api_error(url: &str, response: Response) -> BackupError {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| error_message(&v))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    BackupError::Api {
        url: url.to_string(),
        status: status.as_u16(),
        message,
    }
}

/// Extract the human-readable message from a Foreman error body
pub fn error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;

    if let Some(message) = error.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    if let Some(messages) = error.get("full_messages").and_then(Value::as_array) {
        let joined: Vec<&str> = messages.iter().filter_map(Value::as_str).collect();
        return Some(joined.join(", "));
    }

    match error {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
