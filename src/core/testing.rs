use crate::domain::ports::FileSource;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Entry {
    Body { body: String, delay: Duration },
    Unavailable,
}

/// In-memory `FileSource` with scripted outcomes. Every file added through a
/// builder method is also appended to the listing, in call order.
pub(crate) struct StubSource {
    listing: Vec<String>,
    entries: HashMap<String, Entry>,
    listing_fails: bool,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StubSource {
    pub(crate) fn new() -> Self {
        Self {
            listing: Vec::new(),
            entries: HashMap::new(),
            listing_fails: false,
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_file(self, name: &str, body: &str) -> Self {
        self.with_delayed_file(name, body, 0)
    }

    pub(crate) fn with_delayed_file(mut self, name: &str, body: &str, delay_ms: u64) -> Self {
        self.listing.push(name.to_string());
        self.entries.insert(
            name.to_string(),
            Entry::Body {
                body: body.to_string(),
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub(crate) fn with_failure(mut self, name: &str) -> Self {
        self.listing.push(name.to_string());
        self.entries.insert(name.to_string(), Entry::Unavailable);
        self
    }

    /// Listed but unknown to `fetch_file`.
    pub(crate) fn with_missing(mut self, name: &str) -> Self {
        self.listing.push(name.to_string());
        self
    }

    pub(crate) fn with_failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileSource for StubSource {
    async fn list_files(&self) -> Result<Vec<String>> {
        if self.listing_fails {
            return Err(GatewayError::upstream("listing unavailable"));
        }
        Ok(self.listing.clone())
    }

    async fn fetch_file(&self, name: &str) -> Result<String> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        let outcome = match self.entries.get(name) {
            Some(Entry::Body { body, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                Ok(body.clone())
            }
            Some(Entry::Unavailable) => Err(GatewayError::upstream("status 503")),
            None => Err(GatewayError::NotFound {
                name: name.to_string(),
            }),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
