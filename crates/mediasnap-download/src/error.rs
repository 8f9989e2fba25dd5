//! Download error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    /// The media element had no usable source URL.
    #[error("no resolvable media source")]
    NoSource,

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("save failed: {0}")]
    Save(String),
}
