use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ProviderError,
    protocol::{EmployeeRecord, PersonsResponse},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_PERSONS_API_URL: &str = "https://fakerapi.it/api/v1/persons";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the initial person batch. Read-only from the store's view.
#[async_trait]
pub trait PersonsProvider: Send + Sync {
    async fn fetch_persons(&self, quantity: usize) -> Result<Vec<EmployeeRecord>, ProviderError>;
}

/// Provider used when no endpoint could be configured; every fetch fails.
pub struct MissingPersonsProvider {
    reason: String,
}

impl MissingPersonsProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PersonsProvider for MissingPersonsProvider {
    async fn fetch_persons(&self, _quantity: usize) -> Result<Vec<EmployeeRecord>, ProviderError> {
        Err(ProviderError::Transport(format!(
            "persons provider is unavailable: {}",
            self.reason
        )))
    }
}

/// HTTP client for the FakerAPI `persons` endpoint.
pub struct FakerApiProvider {
    http: Client,
    endpoint: Url,
}

impl FakerApiProvider {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        Self::with_client(http, endpoint)
    }

    pub fn with_client(http: Client, endpoint: &str) -> Result<Self, ProviderError> {
        let endpoint = Url::parse(endpoint.trim())
            .map_err(|err| ProviderError::InvalidUrl(format!("{endpoint}: {err}")))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn batch_url(&self, quantity: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("_quantity", &quantity.to_string());
        url
    }
}

#[async_trait]
impl PersonsProvider for FakerApiProvider {
    async fn fetch_persons(&self, quantity: usize) -> Result<Vec<EmployeeRecord>, ProviderError> {
        let url = self.batch_url(quantity);
        debug!(%url, quantity, "requesting persons batch");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = res
            .bytes()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        let envelope: PersonsResponse = serde_json::from_slice(&body)
            .map_err(|err| ProviderError::Decode(err.to_string()))?;

        debug!(
            received = envelope.data.len(),
            total = envelope.total,
            "persons batch decoded"
        );
        Ok(envelope.data)
    }
}

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod tests;
