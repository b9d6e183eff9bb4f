use crate::core::retriever;
use crate::domain::model::FileResult;
use crate::domain::ports::FileSource;
use crate::utils::error::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

pub const DEFAULT_CONCURRENT_REQUESTS: usize = 5;

/// Downloads and parses every listed file, keeping only files that produced
/// at least one record.
pub struct FileAggregator {
    source: Arc<dyn FileSource>,
    concurrent_requests: usize,
}

impl FileAggregator {
    pub fn new(source: Arc<dyn FileSource>, concurrent_requests: usize) -> Self {
        Self {
            source,
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    /// Only a failed listing is an error. Per-file failures and files without
    /// valid rows are dropped; output follows listing order.
    pub async fn aggregate_all(&self) -> Result<Vec<FileResult>> {
        let names = self.source.list_files().await?;
        let total = names.len();
        tracing::info!(
            files = total,
            concurrency = self.concurrent_requests,
            "aggregating files"
        );

        let mut stamped: Vec<(usize, FileResult)> = stream::iter(names.into_iter().enumerate())
            .map(|(index, name)| {
                let source = Arc::clone(&self.source);
                async move {
                    let result = retriever::retrieve(source.as_ref(), &name).await;
                    (index, result)
                }
            })
            .buffer_unordered(self.concurrent_requests)
            .collect()
            .await;

        // completion order is arbitrary; restore the listing order
        stamped.sort_unstable_by_key(|(index, _)| *index);

        let results: Vec<FileResult> = stamped
            .into_iter()
            .map(|(_, result)| result)
            .filter(|result| {
                if !result.has_records() {
                    tracing::debug!(
                        file = %result.file,
                        reason = result.error.as_deref().unwrap_or("no valid lines"),
                        "skipping file"
                    );
                }
                result.has_records()
            })
            .collect();

        tracing::info!(
            included = results.len(),
            skipped = total - results.len(),
            "aggregation finished"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::StubSource;
    use crate::domain::model::Record;
    use crate::utils::error::GatewayError;

    const HEADER: &str = "file,text,number,hex";

    fn single_row(file: &str, text: &str, number: i64) -> String {
        format!("{}\n{},{},{},{:032x}", HEADER, file, text, number, number)
    }

    #[tokio::test]
    async fn test_skips_missing_file() {
        let source = StubSource::new()
            .with_file(
                "a.csv",
                "file,text,number,hex\na.csv,hello,42,1234567890abcdef1234567890abcdef",
            )
            .with_missing("b.csv");
        let aggregator = FileAggregator::new(Arc::new(source), DEFAULT_CONCURRENT_REQUESTS);

        let results = aggregator.aggregate_all().await.unwrap();

        assert_eq!(
            results,
            vec![FileResult::success(
                "a.csv",
                vec![Record {
                    text: "hello".to_string(),
                    number: 42,
                    hex: "1234567890abcdef1234567890abcdef".to_string(),
                }]
            )]
        );
    }

    #[tokio::test]
    async fn test_skips_failed_and_empty_files_alike() {
        let source = StubSource::new()
            .with_failure("down.csv")
            .with_file("good.csv", &single_row("good.csv", "ok", 1))
            .with_file("header-only.csv", HEADER)
            .with_file("all-bad.csv", &format!("{}\nall-bad.csv,,x,zz", HEADER));
        let aggregator = FileAggregator::new(Arc::new(source), 2);

        let results = aggregator.aggregate_all().await.unwrap();

        let files: Vec<&str> = results.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["good.csv"]);
        assert!(results.iter().all(|r| r.error.is_none()));
    }

    #[tokio::test]
    async fn test_preserves_listing_order_under_concurrency() {
        // earlier files finish last
        let source = StubSource::new()
            .with_delayed_file("one.csv", &single_row("one.csv", "one", 1), 60)
            .with_delayed_file("two.csv", &single_row("two.csv", "two", 2), 30)
            .with_delayed_file("three.csv", &single_row("three.csv", "three", 3), 0);
        let aggregator = FileAggregator::new(Arc::new(source), 3);

        let results = aggregator.aggregate_all().await.unwrap();

        let files: Vec<&str> = results.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["one.csv", "two.csv", "three.csv"]);
    }

    #[tokio::test]
    async fn test_respects_concurrency_cap() {
        let mut source = StubSource::new();
        for i in 0..8 {
            let name = format!("f{}.csv", i);
            source = source.with_delayed_file(&name, &single_row(&name, "row", i), 20);
        }
        let source = Arc::new(source);
        let aggregator = FileAggregator::new(source.clone(), 3);

        let results = aggregator.aggregate_all().await.unwrap();

        assert_eq!(results.len(), 8);
        let peak = source.peak_in_flight();
        assert!(peak <= 3, "peak in flight {}", peak);
        // each fetch sleeps 20 ms, so serial execution would leave the peak at 1
        assert!(peak > 1, "peak in flight {}", peak);
    }

    #[tokio::test]
    async fn test_listing_failure_is_fatal() {
        let source = StubSource::new()
            .with_file("a.csv", &single_row("a.csv", "ok", 1))
            .with_failing_listing();
        let aggregator = FileAggregator::new(Arc::new(source), DEFAULT_CONCURRENT_REQUESTS);

        let err = aggregator.aggregate_all().await.unwrap_err();

        assert!(matches!(err, GatewayError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_empty_outcomes_are_not_errors() {
        let empty = FileAggregator::new(Arc::new(StubSource::new()), 1);
        assert!(empty.aggregate_all().await.unwrap().is_empty());

        let all_failing = FileAggregator::new(
            Arc::new(StubSource::new().with_failure("x.csv").with_missing("y.csv")),
            1,
        );
        assert!(all_failing.aggregate_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let aggregator = FileAggregator::new(Arc::new(StubSource::new()), 0);
        assert_eq!(aggregator.concurrent_requests, 1);
    }
}
