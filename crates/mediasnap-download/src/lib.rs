//! Mediasnap Download Action
//!
//! Turns a resolved media source into a local file save: fetch the
//! bytes, wrap them in a temporary revocable handle, trigger the save,
//! revoke the handle. One shot per click, no retries, no shared state
//! between invocations.

mod action;
mod error;
mod fetch;
mod object;
mod request;

pub use action::{Downloader, SavedFile};
pub use error::DownloadError;
pub use fetch::{Fetcher, HttpFetcher};
pub use object::{MemoryObjectStore, ObjectHandle, ObjectStore, SaveSink};
pub use request::{file_extension, DownloadRequest, DEFAULT_EXTENSION};

pub type Result<T> = std::result::Result<T, DownloadError>;
