use crate::domain::ports::FileSource;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;

pub const FIXTURE_FILES: [&str; 3] = ["file1.csv", "file2.csv", "file3.csv"];

const FIXTURE_HEADER: &str = "file,text,number,hex";

/// Offline stand-in for the remote file service. Serves the same three files
/// as the `/mocked` routes, each with a single row.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }

    pub fn file_names(&self) -> Vec<String> {
        FIXTURE_FILES.iter().map(|name| name.to_string()).collect()
    }

    pub fn body_for(&self, name: &str) -> Option<String> {
        FIXTURE_FILES.contains(&name).then(|| {
            format!(
                "{}\n{},RgTya,64075909,70ad29aacf0b690b0467fe2b2767f765",
                FIXTURE_HEADER, name
            )
        })
    }
}

#[async_trait]
impl FileSource for FixtureSource {
    async fn list_files(&self) -> Result<Vec<String>> {
        Ok(self.file_names())
    }

    async fn fetch_file(&self, name: &str) -> Result<String> {
        self.body_for(name).ok_or_else(|| GatewayError::NotFound {
            name: name.to_string(),
        })
    }
}
