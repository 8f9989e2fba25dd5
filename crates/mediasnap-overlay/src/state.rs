//! Per-container overlay state
//!
//! ```text
//! Idle
//!   ↓ accepted hover
//! Armed
//!   ↓ pointer-leave / teardown sweep
//! Idle
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayState {
    /// No control attached to the container.
    Idle,
    /// A control is attached and clickable.
    Armed,
}

impl OverlayState {
    pub fn is_armed(&self) -> bool {
        matches!(self, OverlayState::Armed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayState::Idle => "idle",
            OverlayState::Armed => "armed",
        }
    }
}

impl std::fmt::Display for OverlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
