//! Where snapshots come from.

use crate::{core::store::Snapshot, errors::Result};
use std::{future::Future, time::Duration};
use tracing::debug;

/// Anything that can produce a complete [`Snapshot`].
pub trait DatasetSource: Send + Sync {
    /// Downloads and parses one full dataset.
    ///
    /// # Errors
    /// `Error::Fetch` for transport failures and non-success statuses,
    /// `Error::Parse` for a malformed document.
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send;
}

/// The remote JSON feed, fetched with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
}

impl HttpFeed {
    /// Feed at `url`; `timeout` of `None` waits for the server indefinitely.
    #[must_use]
    pub fn new(client: reqwest::Client, url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    /// Feed URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DatasetSource for HttpFeed {
    async fn fetch(&self) -> Result<Snapshot> {
        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let body = request.send().await?.error_for_status()?.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Snapshot::from_json(&body)
    }
}
