//! Whole-layout snapshots.
//!
//! The layout persists as one JSON document: every panel descriptor in
//! z order plus a literal version string. There are no deltas and no real
//! migration; an older version tag is accepted as-is and restamped on the
//! next save.

use serde::{Deserialize, Serialize};

use super::{Panel, PanelRegistry};

pub const LAYOUT_VERSION: &str = "3";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub version: String,
    pub panels: Vec<Panel>,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self {
            version: LAYOUT_VERSION.to_string(),
            panels: Vec::new(),
        }
    }
}

impl LayoutSnapshot {
    /// Capture the registry, bottom to top.
    pub fn capture(registry: &PanelRegistry) -> Self {
        let panels = registry
            .z_order()
            .into_iter()
            .filter_map(|id| registry.get(id).cloned())
            .collect();
        Self {
            version: LAYOUT_VERSION.to_string(),
            panels,
        }
    }

    /// Reconstruct a registry from the snapshot. Duplicate ids (possible only
    /// in a hand-edited document) collapse last-wins; id and z counters
    /// resume past the snapshot maxima so later creations keep both
    /// invariants.
    pub fn replay(self) -> PanelRegistry {
        if self.version != LAYOUT_VERSION {
            tracing::warn!(
                found = %self.version,
                expected = LAYOUT_VERSION,
                "layout version mismatch; restamping on next save"
            );
        }
        PanelRegistry::from_panels(self.panels)
    }
}
