use crate::config::UpstreamConfig;
use crate::domain::model::FileListing;
use crate::domain::ports::FileSource;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::parse_base_url;
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use url::Url;

/// HTTP client for the remote file service.
///
/// Sends the configured API key verbatim in the `Authorization` header of
/// every request. No retries, transport default timeouts.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let base_url = parse_base_url("upstream.base_url", &config.base_url)?;

        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            client: Client::new(),
        })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::ConfigError {
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        tracing::debug!("Making upstream request to: {}", url);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await?;

        tracing::debug!("Upstream response status: {}", response.status());
        Ok(response)
    }
}

#[async_trait]
impl FileSource for UpstreamClient {
    async fn list_files(&self) -> Result<Vec<String>> {
        let response = self.get(self.endpoint(&["files"])?).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::upstream(format!(
                "listing returned status {}",
                status
            )));
        }

        let listing: FileListing = response.json().await?;
        Ok(listing.files)
    }

    async fn fetch_file(&self, name: &str) -> Result<String> {
        let response = self.get(self.endpoint(&["file", name])?).await?;

        match response.status() {
            status if status.is_success() => Ok(response.text().await?),
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound {
                name: name.to_string(),
            }),
            status => Err(GatewayError::upstream(format!(
                "download of {} returned status {}",
                name, status
            ))),
        }
    }
}
