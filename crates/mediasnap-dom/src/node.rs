//! Node identity

use serde::{Deserialize, Serialize};

/// Opaque identifier for a node in the host tree.
///
/// Ids are host-assigned and can stop resolving at any time; engine code
/// treats a stale id as a no-op, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
