//! Engine configuration

use serde::{Deserialize, Serialize};

use mediasnap_detect::{
    MediaClassifier, ANCESTOR_SCAN_DEPTH, EXCLUDED_CLASS_TOKENS, MIN_MEDIA_SIZE,
};
use mediasnap_overlay::OVERLAY_LABEL;

/// Detection and presentation tunables.
///
/// The size threshold and ancestor bound are heuristics, not laws; they
/// are data here so embedders can tune them per host document instead of
/// patching the engine. Defaults match the stock exclusion rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum rendered width and height, in pixels, for media to qualify.
    pub min_media_size: u32,
    /// How many ancestor containers the class-exclusion scan walks.
    pub ancestor_scan_depth: usize,
    /// Case-insensitive substrings marking decorative elements.
    pub excluded_class_tokens: Vec<String>,
    /// Label rendered on the overlay control.
    pub overlay_label: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            min_media_size: MIN_MEDIA_SIZE,
            ancestor_scan_depth: ANCESTOR_SCAN_DEPTH,
            excluded_class_tokens: EXCLUDED_CLASS_TOKENS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            overlay_label: OVERLAY_LABEL.to_string(),
        }
    }

    /// Build the classifier this configuration describes.
    pub fn classifier(&self) -> MediaClassifier {
        let mut classifier = MediaClassifier::new();
        classifier.set_min_size(self.min_media_size);
        classifier.set_ancestor_depth(self.ancestor_scan_depth);
        classifier.set_excluded_tokens(self.excluded_class_tokens.iter().cloned());
        classifier
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediasnap_detect::{Candidate, Verdict};

    #[test]
    fn test_defaults_match_stock_constants() {
        let config = Config::new();

        assert_eq!(config.min_media_size, 50);
        assert_eq!(config.ancestor_scan_depth, 3);
        assert!(config
            .excluded_class_tokens
            .iter()
            .any(|t| t == "thumbnail"));
        assert_eq!(config.overlay_label, "Download");
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config::new();

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(back.min_media_size, config.min_media_size);
        assert_eq!(back.excluded_class_tokens, config.excluded_class_tokens);
    }

    #[test]
    fn test_classifier_honors_overrides() {
        let mut config = Config::new();
        config.min_media_size = 10;

        let classifier = config.classifier();
        let candidate = Candidate {
            classes: vec!["tiny".to_string()],
            width: 12,
            height: 12,
            ancestor_classes: Vec::new(),
        };
        assert_eq!(classifier.classify(&candidate), Verdict::Accept);
    }
}
