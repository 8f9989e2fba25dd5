//! Host-facing plugin surface

use std::sync::Arc;

use mediasnap_dom::{HostDom, NodeId};
use mediasnap_download::{DownloadError, Downloader, Fetcher, ObjectStore, SaveSink, SavedFile};
use mediasnap_overlay::{HoverOutcome, OverlayController, OverlayState};

use crate::config::Config;

/// What a click on the document did, from the host's point of view.
///
/// Anything but `Unclaimed` means the click landed on one of our overlay
/// controls and must not propagate to the media underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not an overlay control; the host handles the click as usual.
    Unclaimed,
    /// Fetched and handed to the save trigger.
    Completed(SavedFile),
    /// No resolvable source or vanished media; nothing was fetched.
    Skipped,
    /// Fetch or save failed; logged, nothing surfaced.
    Failed,
}

/// The engine as the host loader sees it.
///
/// The host calls [`Plugin::start`] once after load, forwards
/// pointer-over, pointer-leave, and click notifications while running,
/// and calls [`Plugin::stop`] once before unload. Leave notifications
/// are expected per armed container; clicks are offered for any node and
/// claimed only when they land on an overlay control.
pub struct Plugin {
    controller: OverlayController,
    downloader: Downloader,
}

impl Plugin {
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn Fetcher>,
        objects: Arc<dyn ObjectStore>,
        sink: Arc<dyn SaveSink>,
    ) -> Self {
        Self {
            controller: OverlayController::with_label(
                config.classifier(),
                config.overlay_label.clone(),
            ),
            downloader: Downloader::new(fetcher, objects, sink),
        }
    }

    /// Idempotent initialization: inject the presentation resource and
    /// begin reacting to hover events.
    pub fn start<D: HostDom>(&self, dom: &mut D) {
        self.controller.start(dom);
    }

    /// Inverse of [`Plugin::start`]; also sweeps any armed overlays.
    pub fn stop<D: HostDom>(&self, dom: &mut D) {
        self.controller.stop(dom);
    }

    pub fn is_started(&self) -> bool {
        self.controller.is_started()
    }

    pub fn pointer_over<D: HostDom>(&self, dom: &mut D, target: NodeId) -> HoverOutcome {
        self.controller.on_pointer_over(dom, target)
    }

    pub fn pointer_leave<D: HostDom>(&self, dom: &mut D, container: NodeId) {
        self.controller.on_pointer_leave(dom, container);
    }

    pub fn overlay_state(&self, container: NodeId) -> OverlayState {
        self.controller.state_of(container)
    }

    /// Dispatch a click. Consumes the event for armed overlay controls;
    /// every failure mode degrades to a silent no-op.
    pub async fn overlay_click<D: HostDom>(&self, dom: &D, target: NodeId) -> ClickOutcome {
        let Some(media) = self.controller.claim_click(target) else {
            return ClickOutcome::Unclaimed;
        };

        // Resolve at click time: the element may have changed or vanished
        // since the overlay was armed.
        let Some(source) = dom.media_source(media) else {
            tracing::debug!(media = %media, "overlay click on vanished media");
            return ClickOutcome::Skipped;
        };

        match self.downloader.perform(&source).await {
            Ok(saved) => ClickOutcome::Completed(saved),
            Err(DownloadError::NoSource) => {
                tracing::debug!(media = %media, "media has no resolvable source");
                ClickOutcome::Skipped
            }
            Err(e) => {
                tracing::warn!(error = %e, "download failed");
                ClickOutcome::Failed
            }
        }
    }
}
