//! Multi-image preloading.
//!
//! Fans out one fetch per URL and joins on all of them. A failed fetch still
//! counts toward `loaded_count`, so progress always reaches 1.0 once every
//! image has reported back.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use thiserror::Error;

/// Errors from fetching a single image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreloadError {
    /// Request failed before a response arrived
    #[error("request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),
}

/// Something that can download an image.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<(), PreloadError>>;
}

/// Fetches images over HTTP and discards the bytes.
#[derive(Clone, Default)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<(), PreloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PreloadError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PreloadError::Status(response.status().as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|e| PreloadError::Http(e.to_string()))?;
        Ok(())
    }
}

/// Snapshot reported after each completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadProgress {
    pub loaded_count: usize,
    pub total_count: usize,
    pub loading: bool,
}

impl PreloadProgress {
    pub fn progress(&self) -> f32 {
        fraction(self.loaded_count, self.total_count)
    }
}

/// Final outcome of a preload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreloadReport {
    pub loaded_count: usize,
    pub total_count: usize,
    /// URLs whose fetch failed
    pub failed: Vec<String>,
}

impl PreloadReport {
    /// Always false; a report only exists once every image has settled.
    pub fn loading(&self) -> bool {
        false
    }

    pub fn progress(&self) -> f32 {
        fraction(self.loaded_count, self.total_count)
    }
}

fn fraction(loaded: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        loaded as f32 / total as f32
    }
}

/// Preloads a batch of images through an [`ImageFetcher`].
pub struct ImagePreloader<F: ImageFetcher> {
    fetcher: F,
}

impl<F: ImageFetcher> ImagePreloader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch every URL concurrently. `on_progress` runs once up front and
    /// again after each completion, in completion order.
    pub async fn preload(
        &self,
        urls: &[String],
        mut on_progress: impl FnMut(PreloadProgress),
    ) -> PreloadReport {
        let total_count = urls.len();
        let mut report = PreloadReport {
            total_count,
            ..PreloadReport::default()
        };

        on_progress(PreloadProgress {
            loaded_count: 0,
            total_count,
            loading: total_count > 0,
        });

        let mut pending: FuturesUnordered<_> = urls
            .iter()
            .map(|url| async move { (url, self.fetcher.fetch(url).await) })
            .collect();

        while let Some((url, result)) = pending.next().await {
            if let Err(e) = result {
                tracing::debug!(url = %url, error = %e, "Image preload failed");
                report.failed.push(url.clone());
            }
            report.loaded_count += 1;
            on_progress(PreloadProgress {
                loaded_count: report.loaded_count,
                total_count,
                loading: report.loaded_count < total_count,
            });
        }

        tracing::debug!(
            total = total_count,
            failed = report.failed.len(),
            "Image preload finished"
        );
        report
    }
}
