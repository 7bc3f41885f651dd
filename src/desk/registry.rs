use std::collections::BTreeMap;

use ratatui::prelude::Rect;

use super::{FALLBACK_PANEL_HEIGHT, FALLBACK_PANEL_WIDTH, Panel, PanelId, PanelKind, PanelRect};
use crate::content::PanelContent;
use crate::error::{Error, Result};

/// Placement hint for a freshly created panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Cascade from a running counter so consecutive panels never stack
    /// exactly on top of each other.
    Auto,
    At(u16, u16),
}

/// Owner of every panel on the desk.
///
/// Ids and z-indices come from monotonically increasing counters and are
/// never reused, so stacking order is a total order over creations and
/// raises.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: BTreeMap<PanelId, Panel>,
    next_id: u64,
    next_z: u32,
    cascade: u16,
}

const CASCADE_ORIGIN: (u16, u16) = (2, 1);
const CASCADE_STEP: (u16, u16) = (3, 2);
const CASCADE_WRAP: u16 = 8;

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        kind: PanelKind,
        title: Option<String>,
        placement: Placement,
    ) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        let (x, y) = match placement {
            Placement::At(x, y) => (x, y),
            Placement::Auto => {
                let step = self.cascade % CASCADE_WRAP;
                self.cascade = self.cascade.wrapping_add(1);
                (
                    CASCADE_ORIGIN.0 + step * CASCADE_STEP.0,
                    CASCADE_ORIGIN.1 + step * CASCADE_STEP.1,
                )
            }
        };
        let panel = Panel {
            id,
            kind,
            title: title.unwrap_or_else(|| kind.default_title().to_string()),
            rect: PanelRect::new(x, y, FALLBACK_PANEL_WIDTH, FALLBACK_PANEL_HEIGHT),
            z: self.bump_z(),
            minimized: false,
            prev_rect: None,
            content: PanelContent::default_for(kind),
        };
        tracing::debug!(panel = %id, kind = ?kind, x, y, "created panel");
        self.panels.insert(id, panel);
        id
    }

    fn bump_z(&mut self) -> u32 {
        self.next_z += 1;
        self.next_z
    }

    pub fn remove(&mut self, id: PanelId) -> Result<Panel> {
        let panel = self.panels.remove(&id).ok_or(Error::UnknownPanel(id))?;
        tracing::debug!(panel = %id, "removed panel");
        Ok(panel)
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    pub fn max_z(&self) -> u32 {
        self.panels.values().map(|panel| panel.z).max().unwrap_or(0)
    }

    /// Panel ids ordered bottom to top.
    pub fn z_order(&self) -> Vec<PanelId> {
        let mut ids: Vec<(u32, PanelId)> = self
            .panels
            .values()
            .map(|panel| (panel.z, panel.id))
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Ids in creation order, used for stable status-bar listings.
    pub fn creation_order(&self) -> Vec<PanelId> {
        self.panels.keys().copied().collect()
    }

    /// Topmost non-minimized panel, if any. This is the focused panel.
    pub fn focused(&self) -> Option<PanelId> {
        self.panels
            .values()
            .filter(|panel| !panel.minimized)
            .max_by_key(|panel| panel.z)
            .map(|panel| panel.id)
    }

    /// Topmost non-minimized panel under the pointer.
    pub fn topmost_at(&self, column: u16, row: u16) -> Option<PanelId> {
        self.panels
            .values()
            .filter(|panel| !panel.minimized && panel.rect.contains(column, row))
            .max_by_key(|panel| panel.z)
            .map(|panel| panel.id)
    }

    pub fn bring_to_front(&mut self, id: PanelId) -> Result<()> {
        let z = self.bump_z();
        let panel = self.panels.get_mut(&id).ok_or(Error::UnknownPanel(id))?;
        panel.z = z;
        Ok(())
    }

    pub fn set_rect(&mut self, id: PanelId, rect: PanelRect) -> Result<()> {
        let panel = self.panels.get_mut(&id).ok_or(Error::UnknownPanel(id))?;
        panel.rect = rect;
        Ok(())
    }

    pub fn minimize(&mut self, id: PanelId) -> Result<()> {
        let panel = self.panels.get_mut(&id).ok_or(Error::UnknownPanel(id))?;
        if panel.minimized {
            return Ok(());
        }
        panel.prev_rect = Some(panel.rect);
        panel.minimized = true;
        tracing::debug!(panel = %id, "minimized panel");
        Ok(())
    }

    /// Un-minimize, restoring the cached rectangle. A minimized panel with no
    /// cached rectangle (a hand-edited snapshot) gets the fallback size at
    /// its recorded origin.
    pub fn restore(&mut self, id: PanelId) -> Result<()> {
        let minimized = self
            .panels
            .get(&id)
            .ok_or(Error::UnknownPanel(id))?
            .minimized;
        if !minimized {
            return Ok(());
        }
        let z = self.bump_z();
        let panel = self.panels.get_mut(&id).ok_or(Error::UnknownPanel(id))?;
        panel.rect = panel
            .prev_rect
            .take()
            .unwrap_or_else(|| PanelRect::fallback_at(panel.rect.x, panel.rect.y));
        panel.minimized = false;
        panel.z = z;
        tracing::debug!(panel = %id, "restored panel");
        Ok(())
    }

    /// Re-clamp every panel after the desk changed size.
    pub fn clamp_all(&mut self, bounds: Rect) {
        for panel in self.panels.values_mut() {
            panel.rect = panel.rect.clamped_within(bounds);
            if let Some(prev) = panel.prev_rect {
                panel.prev_rect = Some(prev.clamped_within(bounds));
            }
        }
    }

    /// Rebuild the registry from deserialized panels; counters resume past
    /// the maxima found in the snapshot.
    pub(super) fn from_panels(panels: Vec<Panel>) -> Self {
        let next_id = panels.iter().map(|p| p.id.0 + 1).max().unwrap_or(0);
        let next_z = panels.iter().map(|p| p.z).max().unwrap_or(0);
        let cascade = panels.len() as u16;
        Self {
            panels: panels.into_iter().map(|p| (p.id, p)).collect(),
            next_id,
            next_z,
            cascade,
        }
    }
}
