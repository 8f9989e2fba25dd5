//! Mediasnap
//!
//! Hover-to-save media overlay engine: detect content media under the
//! pointer, arm a transient download control on its container, and
//! fetch-to-save when the control is clicked. The host document, the
//! network transport, and the plugin loader all stay behind ports, so
//! the engine runs the same against a real renderer or [`MemoryDom`].

mod config;
mod plugin;

pub use config::Config;
pub use plugin::{ClickOutcome, Plugin};

// Re-export engine components
pub use mediasnap_detect::{Candidate, MediaClassifier, Verdict};
pub use mediasnap_dom::{HostDom, MediaKind, MediaSource, MemoryDom, NodeId};
pub use mediasnap_download::{
    DownloadError, DownloadRequest, Downloader, Fetcher, HttpFetcher, MemoryObjectStore,
    ObjectHandle, ObjectStore, SaveSink, SavedFile,
};
pub use mediasnap_overlay::{HoverOutcome, OverlayController, OverlayState};

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
