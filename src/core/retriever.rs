use crate::core::parser;
use crate::domain::model::{FileResult, Record};
use crate::domain::ports::FileSource;
use crate::utils::error::Result;

/// Downloads one file and parses it.
///
/// Fails with `NotFound` or `UpstreamUnavailable` exactly as the source
/// reported; a body with no valid rows is a success with no records.
pub async fn fetch_records(source: &dyn FileSource, name: &str) -> Result<Vec<Record>> {
    let body = source.fetch_file(name).await?;
    let records = parser::parse(&body);

    tracing::debug!(file = name, records = records.len(), "parsed file body");
    Ok(records)
}

/// Same as [`fetch_records`] but folds the failure into the result.
pub async fn retrieve(source: &dyn FileSource, name: &str) -> FileResult {
    match fetch_records(source, name).await {
        Ok(lines) => FileResult::success(name, lines),
        Err(e) => {
            if e.is_not_found() {
                tracing::debug!(file = name, "file not found upstream");
            } else {
                tracing::error!(file = name, error = %e, "failed to download file");
            }
            FileResult::failure(name, e.download_message())
        }
    }
}
