//! Mediasnap Overlay Lifecycle
//!
//! Arms a transient download control over qualifying media on hover and
//! tears it down on pointer-leave, without ever disrupting the host
//! document when nodes vanish underneath it.

mod controller;
mod state;
mod style;

pub use controller::{HoverOutcome, OverlayController};
pub use state::OverlayState;
pub use style::{CONTAINER_CLASS, OVERLAY_CLASS, OVERLAY_CSS, OVERLAY_LABEL, STYLE_RESOURCE_ID};
