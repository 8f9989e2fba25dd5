//! Download request synthesis

use chrono::Utc;

/// Extension used when the URL path yields none.
pub const DEFAULT_EXTENSION: &str = "png";

/// One in-flight save: the resolved URL and the filename handed to the
/// save trigger. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub file_name: String,
}

impl DownloadRequest {
    /// Build a request for `url`, stamping the filename with the current
    /// epoch milliseconds so rapid repeat clicks never collide.
    pub fn new(url: &str) -> Self {
        Self::with_timestamp(url, Utc::now().timestamp_millis())
    }

    pub fn with_timestamp(url: &str, epoch_millis: i64) -> Self {
        let ext = file_extension(url).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Self {
            url: url.to_string(),
            file_name: format!("media_{epoch_millis}.{ext}"),
        }
    }
}

/// Extension of the final segment of `url`'s path, with query and
/// fragment stripped. `None` when the segment has no dot or the suffix
/// is empty. Case is preserved.
pub fn file_extension(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // Relative URLs still carry a usable path; trim query and
        // fragment by hand.
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].to_string()
        }
    };

    let segment = path.rsplit('/').next().unwrap_or(path.as_str());
    let (_, ext) = segment.rsplit_once('.')?;

    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}
