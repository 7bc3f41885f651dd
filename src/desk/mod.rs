pub mod interact;
pub mod registry;
pub mod snapshot;

use std::fmt;

use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

use crate::content::PanelContent;

pub use interact::{HeaderAction, Interactions, PointerOutcome, ResizeEdge};
pub use registry::{PanelRegistry, Placement};
pub use snapshot::LayoutSnapshot;

/// Smallest rectangle a panel may be resized down to. Keeps the chrome
/// (border, header row, buttons) grabbable.
pub const MIN_PANEL_WIDTH: u16 = 14;
pub const MIN_PANEL_HEIGHT: u16 = 5;

/// Substituted when a panel must be restored but no explicit rectangle was
/// ever recorded (e.g. a snapshot written by hand).
pub const FALLBACK_PANEL_WIDTH: u16 = 42;
pub const FALLBACK_PANEL_HEIGHT: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// The closed set of panel kinds. Unknown kinds are unrepresentable, and
/// every renderer and key handler matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Notes,
    Dice,
    Rules,
    Character,
    Npc,
}

impl PanelKind {
    pub const ALL: [PanelKind; 5] = [
        PanelKind::Notes,
        PanelKind::Dice,
        PanelKind::Rules,
        PanelKind::Character,
        PanelKind::Npc,
    ];

    pub fn default_title(self) -> &'static str {
        match self {
            PanelKind::Notes => "Notes",
            PanelKind::Dice => "Dice Roller",
            PanelKind::Rules => "Rules Reference",
            PanelKind::Character => "Characters",
            PanelKind::Npc => "NPC Generator",
        }
    }
}

/// Panel rectangle in terminal cells. Origins are unsigned because drag and
/// resize always clamp panels fully inside the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl PanelRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn fallback_at(x: u16, y: u16) -> Self {
        Self::new(x, y, FALLBACK_PANEL_WIDTH, FALLBACK_PANEL_HEIGHT)
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width.saturating_sub(1))
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height.saturating_sub(1))
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x && column <= self.right() && row >= self.y && row <= self.bottom()
    }

    pub fn to_rect(self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Clamp the rectangle so it lies fully within `bounds`. Size is reduced
    /// first if the desk itself is smaller than the panel, then the origin is
    /// clamped to `[bounds.x, bounds.right - width]` (and the vertical
    /// equivalent).
    pub fn clamped_within(mut self, bounds: Rect) -> Self {
        self.width = self.width.min(bounds.width).max(1);
        self.height = self.height.min(bounds.height).max(1);
        let max_x = bounds
            .x
            .saturating_add(bounds.width.saturating_sub(self.width));
        let max_y = bounds
            .y
            .saturating_add(bounds.height.saturating_sub(self.height));
        self.x = self.x.clamp(bounds.x, max_x);
        self.y = self.y.clamp(bounds.y, max_y);
        self
    }
}

/// One floating panel: identity, placement, stacking, and content state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub kind: PanelKind,
    pub title: String,
    pub rect: PanelRect,
    pub z: u32,
    #[serde(default)]
    pub minimized: bool,
    /// Rectangle cached by minimize so restore is exact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_rect: Option<PanelRect>,
    pub content: PanelContent,
}

impl Panel {
    /// Inner drawable area: inside the border, below the header row.
    pub fn content_area(&self) -> Rect {
        let rect = self.rect;
        if rect.width < 3 || rect.height < 4 {
            return Rect::default();
        }
        Rect {
            x: rect.x + 1,
            y: rect.y + 2,
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(3),
        }
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_panel_inside_bounds() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = PanelRect::new(70, 20, 30, 10).clamped_within(bounds);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 50);
        assert_eq!(rect.y, 14);
    }

    #[test]
    fn clamp_shrinks_when_desk_is_smaller() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 8,
        };
        let rect = PanelRect::new(0, 0, 42, 14).clamped_within(bounds);
        assert_eq!((rect.width, rect.height), (20, 8));
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn content_area_accounts_for_chrome() {
        let panel = Panel {
            id: PanelId(1),
            kind: PanelKind::Notes,
            title: "Notes".into(),
            rect: PanelRect::new(2, 1, 20, 10),
            z: 1,
            minimized: false,
            prev_rect: None,
            content: PanelContent::default_for(PanelKind::Notes),
        };
        let area = panel.content_area();
        assert_eq!((area.x, area.y), (3, 3));
        assert_eq!((area.width, area.height), (18, 7));
    }
}
