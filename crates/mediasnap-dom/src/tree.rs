//! Host document port

use crate::{MediaSource, NodeId};

/// The surface the host document exposes to the engine.
///
/// The host can mutate its tree between any two calls, so every query is
/// fallible in the "node may be gone" sense: a `None`, `false`, or empty
/// answer means "not there anymore", never an error. Mutations report
/// whether they took effect.
pub trait HostDom {
    /// True while `node` is attached to the tree.
    fn contains(&self, node: NodeId) -> bool;

    /// Immediate parent, when the node exists and has one.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Class tokens on the node; empty when the node is gone.
    fn classes(&self, node: NodeId) -> Vec<String>;

    /// Rendered size in pixels; `(0, 0)` when the node is gone or has no
    /// layout.
    fn rendered_size(&self, node: NodeId) -> (u32, u32);

    /// Nearest ancestor-or-self that is an image or video element.
    fn closest_media(&self, node: NodeId) -> Option<NodeId>;

    /// The sources of an image/video node.
    fn media_source(&self, node: NodeId) -> Option<MediaSource>;

    /// Add a class token to a node. Returns false when the node is gone.
    fn add_class(&mut self, node: NodeId, class: &str) -> bool;

    /// True when `container` currently has a child carrying `class`.
    fn has_child_with_class(&self, container: NodeId, class: &str) -> bool;

    /// Append a labeled control node to `container`. Returns the new
    /// node, or `None` when the container is gone.
    fn append_control(&mut self, container: NodeId, class: &str, label: &str) -> Option<NodeId>;

    /// Remove a node and its subtree. Returns false when already gone.
    fn remove_node(&mut self, node: NodeId) -> bool;

    /// Install a stylesheet under `id`, replacing any previous content.
    fn inject_stylesheet(&mut self, id: &str, css: &str);

    /// True when a stylesheet is installed under `id`.
    fn has_stylesheet(&self, id: &str) -> bool;

    /// Drop the stylesheet installed under `id`. Returns false when no
    /// such sheet exists.
    fn remove_stylesheet(&mut self, id: &str) -> bool;
}
