//! Overlay attach/detach coordination

use std::collections::HashMap;

use parking_lot::RwLock;

use mediasnap_detect::{Candidate, MediaClassifier, Verdict};
use mediasnap_dom::{HostDom, NodeId};

use crate::state::OverlayState;
use crate::style::{CONTAINER_CLASS, OVERLAY_CLASS, OVERLAY_CSS, OVERLAY_LABEL, STYLE_RESOURCE_ID};

/// What a pointer-over event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOutcome {
    /// No media under the pointer, a vanished node, or the controller is
    /// stopped.
    Ignored,
    /// The container already carries a control.
    AlreadyArmed,
    /// The classifier turned the media down.
    Rejected,
    /// A control was attached; the id is the new overlay node.
    Armed(NodeId),
}

#[derive(Debug, Clone, Copy)]
struct ArmedOverlay {
    overlay: NodeId,
    media: NodeId,
}

/// Per-container overlay state machine.
///
/// Containers move Idle → Armed on an accepted hover and back on
/// pointer-leave or teardown. The armed map is the only state the
/// controller keeps; dropping an entry is the implicit unregistration of
/// that control's click and leave handling.
pub struct OverlayController {
    classifier: MediaClassifier,
    label: String,
    armed: RwLock<HashMap<NodeId, ArmedOverlay>>,
    started: RwLock<bool>,
}

impl OverlayController {
    pub fn new(classifier: MediaClassifier) -> Self {
        Self::with_label(classifier, OVERLAY_LABEL)
    }

    pub fn with_label(classifier: MediaClassifier, label: impl Into<String>) -> Self {
        Self {
            classifier,
            label: label.into(),
            armed: RwLock::new(HashMap::new()),
            started: RwLock::new(false),
        }
    }

    pub fn is_started(&self) -> bool {
        *self.started.read()
    }

    /// Install the presentation resource and begin reacting to hover
    /// events. Safe to call repeatedly.
    pub fn start<D: HostDom>(&self, dom: &mut D) {
        if !dom.has_stylesheet(STYLE_RESOURCE_ID) {
            dom.inject_stylesheet(STYLE_RESOURCE_ID, OVERLAY_CSS);
        }
        *self.started.write() = true;
        tracing::debug!("overlay controller started");
    }

    /// Reverse every observable effect of [`OverlayController::start`]:
    /// stop reacting to hover events, drop the stylesheet, and sweep any
    /// still-armed controls.
    pub fn stop<D: HostDom>(&self, dom: &mut D) {
        *self.started.write() = false;
        dom.remove_stylesheet(STYLE_RESOURCE_ID);

        let swept: Vec<ArmedOverlay> = self.armed.write().drain().map(|(_, entry)| entry).collect();
        for entry in &swept {
            dom.remove_node(entry.overlay);
        }
        if !swept.is_empty() {
            tracing::debug!(count = swept.len(), "swept armed overlays at stop");
        }
        tracing::debug!("overlay controller stopped");
    }

    pub fn state_of(&self, container: NodeId) -> OverlayState {
        if self.armed.read().contains_key(&container) {
            OverlayState::Armed
        } else {
            OverlayState::Idle
        }
    }

    /// React to a pointer entering `target`'s subtree.
    ///
    /// Resolves the nearest media ancestor-or-self, consults the
    /// classifier, and attaches one control to the media's container.
    /// Re-fired hovers on an already-decorated subtree are no-ops.
    pub fn on_pointer_over<D: HostDom>(&self, dom: &mut D, target: NodeId) -> HoverOutcome {
        if !self.is_started() {
            return HoverOutcome::Ignored;
        }

        let Some(media) = dom.closest_media(target) else {
            return HoverOutcome::Ignored;
        };
        let Some(container) = dom.parent(media) else {
            return HoverOutcome::Ignored;
        };

        // Presence in the tree beats the armed map: the check must hold
        // even when the host re-fired hover for a subtree we decorated.
        if dom.has_child_with_class(container, OVERLAY_CLASS) {
            return HoverOutcome::AlreadyArmed;
        }

        let candidate = self.candidate_for(dom, media, container);
        if self.classifier.classify(&candidate) == Verdict::Reject {
            tracing::trace!(media = %media, "hover target rejected");
            return HoverOutcome::Rejected;
        }

        dom.add_class(container, CONTAINER_CLASS);
        let Some(overlay) = dom.append_control(container, OVERLAY_CLASS, &self.label) else {
            // Container vanished between resolve and attach.
            return HoverOutcome::Ignored;
        };

        self.armed
            .write()
            .insert(container, ArmedOverlay { overlay, media });
        tracing::debug!(container = %container, overlay = %overlay, "armed overlay");

        HoverOutcome::Armed(overlay)
    }

    /// React to the pointer leaving an armed container: remove the
    /// control and return the container to Idle. Unknown containers and
    /// already-removed controls are no-ops.
    pub fn on_pointer_leave<D: HostDom>(&self, dom: &mut D, container: NodeId) {
        let Some(entry) = self.armed.write().remove(&container) else {
            return;
        };

        dom.remove_node(entry.overlay);
        tracing::debug!(container = %container, "disarmed overlay");
    }

    /// The media node behind an armed overlay control, for click
    /// dispatch. `None` means the node is not one of ours and the host
    /// should let the click propagate.
    pub fn claim_click(&self, overlay: NodeId) -> Option<NodeId> {
        self.armed
            .read()
            .values()
            .find(|entry| entry.overlay == overlay)
            .map(|entry| entry.media)
    }

    fn candidate_for<D: HostDom>(&self, dom: &D, media: NodeId, container: NodeId) -> Candidate {
        let (width, height) = dom.rendered_size(media);

        let mut ancestor_classes = Vec::new();
        let mut cursor = Some(container);
        for _ in 0..self.classifier.ancestor_depth() {
            let Some(node) = cursor else {
                break;
            };
            ancestor_classes.push(dom.classes(node));
            cursor = dom.parent(node);
        }

        Candidate {
            classes: dom.classes(media),
            width,
            height,
            ancestor_classes,
        }
    }
}
