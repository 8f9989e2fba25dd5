//! Content-vs-chrome classification

use serde::{Deserialize, Serialize};

/// Class-name substrings that mark an element as decorative rather than
/// downloadable content. Matched case-insensitively so `user-avatar-LG`
/// and `Avatar` are caught too.
pub const EXCLUDED_CLASS_TOKENS: &[&str] = &[
    "avatar",
    "user-avatar",
    "emoji",
    "icon",
    "profile-pic",
    "banner",
    "thumbnail",
];

/// Minimum rendered width and height, in pixels, for media to qualify.
pub const MIN_MEDIA_SIZE: u32 = 50;

/// How many ancestor containers the exclusion scan walks.
pub const ANCESTOR_SCAN_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Accept => "accept",
            Verdict::Reject => "reject",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the classifier reads about a hovered element.
///
/// `ancestor_classes` is ordered nearest-first (index 0 = immediate
/// parent) and may be shorter than the scan depth, or empty for an
/// element sitting directly under the document root.
#[derive(Debug, Clone, Default)]
pub struct Candidate {
    pub classes: Vec<String>,
    pub width: u32,
    pub height: u32,
    pub ancestor_classes: Vec<Vec<String>>,
}

/// Accept/reject heuristic for hovered media.
///
/// Class exclusion runs before the size check: an intentionally small
/// avatar is excluded by name even when its rendered box would pass, and
/// a match on the element itself short-circuits the ancestor walk.
pub struct MediaClassifier {
    excluded_tokens: Vec<String>,
    min_size: u32,
    ancestor_depth: usize,
}

impl MediaClassifier {
    pub fn new() -> Self {
        Self {
            excluded_tokens: EXCLUDED_CLASS_TOKENS.iter().map(|t| t.to_string()).collect(),
            min_size: MIN_MEDIA_SIZE,
            ancestor_depth: ANCESTOR_SCAN_DEPTH,
        }
    }

    pub fn set_min_size(&mut self, min_size: u32) {
        self.min_size = min_size;
    }

    pub fn set_ancestor_depth(&mut self, depth: usize) {
        self.ancestor_depth = depth;
    }

    pub fn set_excluded_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.excluded_tokens = tokens.into_iter().map(|t| t.to_lowercase()).collect();
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn ancestor_depth(&self) -> usize {
        self.ancestor_depth
    }

    /// Classify a candidate element.
    ///
    /// Order matters: the element's own classes, then ancestors
    /// nearest-first up to the scan depth, then the size floor. The first
    /// exclusion hit rejects without looking further.
    pub fn classify(&self, candidate: &Candidate) -> Verdict {
        if self.has_excluded_class(&candidate.classes) {
            return Verdict::Reject;
        }

        for ancestor in candidate.ancestor_classes.iter().take(self.ancestor_depth) {
            if self.has_excluded_class(ancestor) {
                return Verdict::Reject;
            }
        }

        if candidate.width < self.min_size || candidate.height < self.min_size {
            return Verdict::Reject;
        }

        Verdict::Accept
    }

    fn has_excluded_class(&self, classes: &[String]) -> bool {
        classes.iter().any(|class| {
            let class = class.to_lowercase();
            self.excluded_tokens
                .iter()
                .any(|token| class.contains(token.as_str()))
        })
    }
}

impl Default for MediaClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_accepts_large_clean_media() {
        let classifier = MediaClassifier::new();
        let candidate = Candidate {
            classes: strings(&["card-art"]),
            width: 200,
            height: 200,
            ancestor_classes: vec![strings(&["post-body"]), strings(&["post"])],
        };

        assert_eq!(classifier.classify(&candidate), Verdict::Accept);
    }

    #[test]
    fn test_excluded_class_beats_size() {
        let classifier = MediaClassifier::new();
        let candidate = Candidate {
            classes: strings(&["user-avatar-sm"]),
            width: 80,
            height: 80,
            ancestor_classes: Vec::new(),
        };

        // Substring match on the element itself, size never considered.
        assert_eq!(classifier.classify(&candidate), Verdict::Reject);

        let huge = Candidate {
            classes: strings(&["Avatar"]),
            width: 1000,
            height: 1000,
            ancestor_classes: Vec::new(),
        };
        assert_eq!(classifier.classify(&huge), Verdict::Reject);
    }

    #[test]
    fn test_excluded_ancestor_rejects() {
        let classifier = MediaClassifier::new();
        let candidate = Candidate {
            classes: strings(&["attachment"]),
            width: 300,
            height: 300,
            ancestor_classes: vec![
                strings(&["message"]),
                strings(&["profile-picture-wrapper"]),
            ],
        };

        assert_eq!(classifier.classify(&candidate), Verdict::Reject);
    }

    #[test]
    fn test_ancestor_beyond_scan_depth_is_ignored() {
        let classifier = MediaClassifier::new();
        let candidate = Candidate {
            classes: strings(&["attachment"]),
            width: 300,
            height: 300,
            ancestor_classes: vec![
                strings(&["a"]),
                strings(&["b"]),
                strings(&["c"]),
                strings(&["banner-wrap"]),
            ],
        };

        assert_eq!(classifier.classify(&candidate), Verdict::Accept);
    }

    #[test]
    fn test_small_media_rejects() {
        let classifier = MediaClassifier::new();

        let narrow = Candidate {
            classes: strings(&["inline-img"]),
            width: 49,
            height: 200,
            ancestor_classes: Vec::new(),
        };
        assert_eq!(classifier.classify(&narrow), Verdict::Reject);

        let short = Candidate {
            classes: strings(&["inline-img"]),
            width: 200,
            height: 49,
            ancestor_classes: Vec::new(),
        };
        assert_eq!(classifier.classify(&short), Verdict::Reject);

        let exact = Candidate {
            classes: strings(&["inline-img"]),
            width: 50,
            height: 50,
            ancestor_classes: Vec::new(),
        };
        assert_eq!(classifier.classify(&exact), Verdict::Accept);
    }

    #[test]
    fn test_no_ancestors_is_fine() {
        let classifier = MediaClassifier::new();
        let candidate = Candidate {
            classes: strings(&["hero"]),
            width: 800,
            height: 600,
            ancestor_classes: Vec::new(),
        };

        assert_eq!(classifier.classify(&candidate), Verdict::Accept);
    }

    #[test]
    fn test_classless_candidate_judged_on_size_alone() {
        let classifier = MediaClassifier::new();
        let candidate = Candidate {
            width: 100,
            height: 100,
            ..Default::default()
        };

        let verdict = classifier.classify(&candidate);
        assert!(verdict.is_accept());
        assert_eq!(verdict.to_string(), "accept");
        assert_eq!(Verdict::Reject.as_str(), "reject");
    }

    #[test]
    fn test_configurable_constants() {
        let mut classifier = MediaClassifier::new();
        classifier.set_min_size(10);
        classifier.set_ancestor_depth(1);
        classifier.set_excluded_tokens(vec!["sprite".to_string()]);

        let candidate = Candidate {
            classes: strings(&["avatar"]),
            width: 20,
            height: 20,
            // Excluded under the defaults, out of reach at depth 1.
            ancestor_classes: vec![strings(&["clean"]), strings(&["Sprite-sheet"])],
        };
        assert_eq!(classifier.classify(&candidate), Verdict::Accept);

        let sprite = Candidate {
            classes: strings(&["sprite-tile"]),
            width: 20,
            height: 20,
            ancestor_classes: Vec::new(),
        };
        assert_eq!(classifier.classify(&sprite), Verdict::Reject);
    }
}
