//! Overlay presentation resources

/// Id the injected stylesheet is keyed under, so teardown can find it.
pub const STYLE_RESOURCE_ID: &str = "mediasnap-style";

/// Class marking a container as the overlay's positioning context.
pub const CONTAINER_CLASS: &str = "mediasnap-container";

/// Class carried by the overlay control node itself.
pub const OVERLAY_CLASS: &str = "mediasnap-download-button";

/// Default label on the overlay control.
pub const OVERLAY_LABEL: &str = "Download";

/// Gives the control its fixed top-right inset and keeps it layered
/// above the media it covers.
pub const OVERLAY_CSS: &str = r#"
.mediasnap-container {
    position: relative;
}
.mediasnap-download-button {
    position: absolute;
    top: 8px;
    right: 8px;
    background-color: #2f6fed;
    color: white;
    padding: 5px 10px;
    border-radius: 4px;
    cursor: pointer;
    z-index: 999;
}
.mediasnap-download-button:hover {
    background-color: #2458c7;
}
.mediasnap-container:hover .mediasnap-download-button {
    opacity: 1;
}
"#;
