//! Mediasnap Media Detection
//!
//! Decides whether a hovered element is content media worth decorating
//! with a download control, or decorative chrome (avatars, emoji, icons)
//! to leave alone. Classification is a pure predicate: class-token
//! exclusion first, minimum rendered size second.

mod classifier;

pub use classifier::{
    Candidate, MediaClassifier, Verdict, ANCESTOR_SCAN_DEPTH, EXCLUDED_CLASS_TOKENS,
    MIN_MEDIA_SIZE,
};
