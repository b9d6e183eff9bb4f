use crate::utils::error::Result;
use async_trait::async_trait;

/// A remote store of delimited text files.
///
/// `fetch_file` must report an unknown name as `GatewayError::NotFound`; every
/// other failure is `GatewayError::UpstreamUnavailable`.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn list_files(&self) -> Result<Vec<String>>;
    async fn fetch_file(&self, name: &str) -> Result<String>;
}
