//! The download action

use std::sync::Arc;

use mediasnap_dom::MediaSource;

use crate::{DownloadError, DownloadRequest, Fetcher, ObjectStore, Result, SaveSink};

/// Receipt for one completed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub url: String,
    pub file_name: String,
    pub byte_len: usize,
}

/// Executes one fetch-and-save per invocation.
///
/// Invocations are independent: concurrent clicks each get their own
/// handle and a timestamp-differentiated filename, so nothing is
/// coordinated or deduplicated across them.
pub struct Downloader {
    fetcher: Arc<dyn Fetcher>,
    objects: Arc<dyn ObjectStore>,
    sink: Arc<dyn SaveSink>,
}

impl Downloader {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        objects: Arc<dyn ObjectStore>,
        sink: Arc<dyn SaveSink>,
    ) -> Self {
        Self {
            fetcher,
            objects,
            sink,
        }
    }

    /// Fetch the source's bytes and hand them to the save trigger.
    ///
    /// The temporary handle is revoked before the save result is
    /// propagated; it must not outlive the action even when the trigger
    /// fails.
    pub async fn perform(&self, source: &MediaSource) -> Result<SavedFile> {
        let url = source.resolve_url().ok_or(DownloadError::NoSource)?;
        let request = DownloadRequest::new(url);

        tracing::debug!(url = %request.url, "fetching media bytes");
        let bytes = self.fetcher.fetch(&request.url).await?;
        let byte_len = bytes.len();

        let handle = self.objects.create(bytes);
        let saved = self.sink.save(&handle, &request.file_name);
        self.objects.revoke(&handle);
        saved?;

        tracing::info!(file = %request.file_name, bytes = byte_len, "media saved");

        Ok(SavedFile {
            url: request.url,
            file_name: request.file_name,
            byte_len,
        })
    }
}
