// src/infrastructure/dummyjson.rs
use crate::application::employee_source::{EmployeeSource, RawUser, UsersPage};
use crate::domain::DomainError;
use crate::infrastructure::config::ApiConfig;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Users endpoint of the dummyjson demo API.
#[derive(Debug)]
pub struct DummyJsonSource {
    client: Client,
    url: String,
}

impl DummyJsonSource {
    pub fn new(config: &ApiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::FetchFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: users_url(&config.base_url, config.limit),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// `{base}/users?limit={limit}`, tolerating a trailing slash on `base`.
pub fn users_url(base_url: &str, limit: u32) -> String {
    format!("{}/users?limit={}", base_url.trim_end_matches('/'), limit)
}

impl EmployeeSource for DummyJsonSource {
    #[instrument(level = "debug", skip(self), fields(url = %self.url))]
    fn fetch_users(&mut self) -> Result<Vec<RawUser>, DomainError> {
        debug!("Requesting users");
        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| DomainError::FetchFailed(e.to_string()))?;

        let page: UsersPage = response
            .json()
            .map_err(|e| DomainError::FetchFailed(format!("Invalid users payload: {}", e)))?;

        info!(count = page.users.len(), "Fetched users");
        Ok(page.users)
    }
}
