//! Media element variants

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// The tag names that count as media when walking up from an event
    /// target.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "img" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(format!("Unknown media kind: {}", s)),
        }
    }
}

/// The resolvable sources of a media element.
///
/// Videos may carry their URL on a nested source-describing child rather
/// than on the element itself; images always carry it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    Image {
        src: Option<String>,
    },
    Video {
        src: Option<String>,
        nested_src: Option<String>,
    },
}

impl MediaSource {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaSource::Image { .. } => MediaKind::Image,
            MediaSource::Video { .. } => MediaKind::Video,
        }
    }

    /// The URL a download should target, if any.
    ///
    /// Videos prefer their direct source and fall back to the nested one.
    /// Empty strings count as absent.
    pub fn resolve_url(&self) -> Option<&str> {
        match self {
            MediaSource::Image { src } => non_empty(src),
            MediaSource::Video { src, nested_src } => {
                non_empty(src).or_else(|| non_empty(nested_src))
            }
        }
    }
}

fn non_empty(src: &Option<String>) -> Option<&str> {
    src.as_deref().filter(|s| !s.is_empty())
}
