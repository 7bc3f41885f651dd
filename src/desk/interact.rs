//! Pointer state machine for the desk.
//!
//! The desk has a single interaction slot: `Idle -> Dragging -> Idle` and
//! `Idle -> Resizing -> Idle`, mutually exclusive because both are armed
//! from distinct pointer-down hits. Minimized is an orthogonal flag on
//! the panels themselves. A fresh pointer-down always resets a stale
//! interaction first, so a lost pointer-up cannot wedge the machine.
//!
//! The machine consumes mouse coordinates plus the desk bounds and mutates
//! registry state only; no terminal handle is involved, which keeps drag,
//! resize, and persistence logic testable headlessly.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;

use super::{MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH, PanelId, PanelRect, PanelRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// What a pointer-down on the header row means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Drag,
    Minimize,
    Close,
    None,
}

#[derive(Debug, Clone, Copy)]
struct HeaderDrag {
    id: PanelId,
    start_col: u16,
    start_row: u16,
    initial_x: u16,
    initial_y: u16,
}

#[derive(Debug, Clone, Copy)]
struct ResizeDrag {
    id: PanelId,
    edge: ResizeEdge,
    start_col: u16,
    start_row: u16,
    start: PanelRect,
}

/// Outcome of feeding one mouse event through the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Event did not concern the desk.
    Ignored,
    /// Consumed, but nothing worth persisting changed.
    Handled,
    /// Consumed and the layout mutated; the caller should persist.
    LayoutChanged,
}

#[derive(Debug, Default)]
pub struct Interactions {
    drag: Option<HeaderDrag>,
    resize: Option<ResizeDrag>,
}

impl Interactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.drag.is_none() && self.resize.is_none()
    }

    /// True while a resize is in flight; the renderer shows the outline.
    pub fn resizing(&self) -> Option<PanelId> {
        self.resize.as_ref().map(|drag| drag.id)
    }

    pub fn dragging(&self) -> Option<PanelId> {
        self.drag.as_ref().map(|drag| drag.id)
    }

    pub fn on_mouse(
        &mut self,
        registry: &mut PanelRegistry,
        mouse: &MouseEvent,
        bounds: Rect,
    ) -> PointerOutcome {
        match mouse.kind {
            MouseEventKind::Down(_) => self.on_down(registry, mouse.column, mouse.row),
            MouseEventKind::Drag(_) => self.on_move(registry, mouse.column, mouse.row, bounds),
            MouseEventKind::Up(_) => self.on_up(),
            _ => PointerOutcome::Ignored,
        }
    }

    fn on_down(
        &mut self,
        registry: &mut PanelRegistry,
        column: u16,
        row: u16,
    ) -> PointerOutcome {
        // A pointer-up may have been lost (focus left the terminal); a fresh
        // press always restarts from idle.
        if !self.is_idle() {
            tracing::debug!("resetting stale pointer interaction");
            self.drag = None;
            self.resize = None;
        }
        let Some(id) = registry.topmost_at(column, row) else {
            return PointerOutcome::Ignored;
        };
        let Some(panel) = registry.get(id) else {
            return PointerOutcome::Ignored;
        };
        let rect = panel.rect;

        if let Some(edge) = resize_edge_at(rect, column, row) {
            let _ = registry.bring_to_front(id);
            self.resize = Some(ResizeDrag {
                id,
                edge,
                start_col: column,
                start_row: row,
                start: rect,
            });
            return PointerOutcome::LayoutChanged;
        }

        if row == header_row(rect) {
            match header_action_at(rect, column, row) {
                HeaderAction::Minimize => {
                    let _ = registry.minimize(id);
                    return PointerOutcome::LayoutChanged;
                }
                HeaderAction::Close => {
                    let _ = registry.remove(id);
                    return PointerOutcome::LayoutChanged;
                }
                HeaderAction::Drag => {
                    let _ = registry.bring_to_front(id);
                    self.drag = Some(HeaderDrag {
                        id,
                        start_col: column,
                        start_row: row,
                        initial_x: rect.x,
                        initial_y: rect.y,
                    });
                    return PointerOutcome::LayoutChanged;
                }
                HeaderAction::None => {}
            }
        }

        // Plain body click: raise and focus.
        let _ = registry.bring_to_front(id);
        PointerOutcome::LayoutChanged
    }

    fn on_move(
        &mut self,
        registry: &mut PanelRegistry,
        column: u16,
        row: u16,
        bounds: Rect,
    ) -> PointerOutcome {
        if let Some(drag) = self.resize {
            if registry.get(drag.id).is_none() {
                self.resize = None;
                return PointerOutcome::Ignored;
            }
            let resized = apply_resize(
                drag.start,
                drag.edge,
                column,
                row,
                drag.start_col,
                drag.start_row,
                bounds,
            );
            let _ = registry.set_rect(drag.id, resized);
            return PointerOutcome::Handled;
        }
        if let Some(drag) = self.drag {
            let Some(panel) = registry.get(drag.id) else {
                self.drag = None;
                return PointerOutcome::Ignored;
            };
            let moved = apply_drag(
                panel.rect,
                drag.initial_x,
                drag.initial_y,
                column,
                row,
                drag.start_col,
                drag.start_row,
                bounds,
            );
            let _ = registry.set_rect(drag.id, moved);
            return PointerOutcome::Handled;
        }
        PointerOutcome::Ignored
    }

    fn on_up(&mut self) -> PointerOutcome {
        if self.drag.take().is_some() || self.resize.take().is_some() {
            // The in-flight moves were already applied; the release is the
            // moment the final rectangle gets persisted.
            PointerOutcome::LayoutChanged
        } else {
            PointerOutcome::Ignored
        }
    }
}

/// The draggable header is the inner row just below the top border.
pub fn header_row(rect: PanelRect) -> u16 {
    rect.y.saturating_add(1)
}

/// Column of the minimize button within the header row.
pub fn minimize_button_col(rect: PanelRect) -> u16 {
    rect.right().saturating_sub(3)
}

/// Column of the close button within the header row.
pub fn close_button_col(rect: PanelRect) -> u16 {
    rect.right().saturating_sub(1)
}

pub fn header_action_at(rect: PanelRect, column: u16, row: u16) -> HeaderAction {
    if row != header_row(rect) || rect.width < 3 {
        return HeaderAction::None;
    }
    let left = rect.x.saturating_add(1);
    let right_inner = rect.right().saturating_sub(1);
    if column < left || column > right_inner {
        return HeaderAction::None;
    }
    if column == close_button_col(rect) {
        HeaderAction::Close
    } else if column == minimize_button_col(rect) {
        HeaderAction::Minimize
    } else {
        HeaderAction::Drag
    }
}

/// Which resize handle, if any, sits at the given border cell. Corners win
/// over edges so a 1x1 grab at a corner resizes in both axes.
pub fn resize_edge_at(rect: PanelRect, column: u16, row: u16) -> Option<ResizeEdge> {
    if !rect.contains(column, row) || rect.width < 2 || rect.height < 2 {
        return None;
    }
    let right = rect.right();
    let bottom = rect.bottom();
    let on_left = column == rect.x;
    let on_right = column == right;
    let on_top = row == rect.y;
    let on_bottom = row == bottom;
    match (on_left, on_right, on_top, on_bottom) {
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (_, true, true, _) => Some(ResizeEdge::TopRight),
        (true, _, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, _) => Some(ResizeEdge::Left),
        (_, true, _, _) => Some(ResizeEdge::Right),
        (_, _, true, _) => Some(ResizeEdge::Top),
        (_, _, _, true) => Some(ResizeEdge::Bottom),
        _ => None,
    }
}

/// Drag math: `position = pointer - (pointer_start - original_position)`,
/// clamped so the panel stays fully inside the desk.
#[allow(clippy::too_many_arguments)]
pub fn apply_drag(
    rect: PanelRect,
    initial_x: u16,
    initial_y: u16,
    column: u16,
    row: u16,
    start_col: u16,
    start_row: u16,
    bounds: Rect,
) -> PanelRect {
    let dx = column as i32 - start_col as i32;
    let dy = row as i32 - start_row as i32;
    let max_x = bounds.x as i32 + bounds.width as i32 - rect.width as i32;
    let max_y = bounds.y as i32 + bounds.height as i32 - rect.height as i32;
    let x = (initial_x as i32 + dx).clamp(bounds.x as i32, max_x.max(bounds.x as i32));
    let y = (initial_y as i32 + dy).clamp(bounds.y as i32, max_y.max(bounds.y as i32));
    PanelRect {
        x: x as u16,
        y: y as u16,
        ..rect
    }
}

/// Resize math: grow or shrink from the grabbed edge with a minimum size
/// clamp (the origin compensates when a left/top edge hits the minimum) and
/// viewport clamping on every side.
#[allow(clippy::too_many_arguments)]
pub fn apply_resize(
    start: PanelRect,
    edge: ResizeEdge,
    column: u16,
    row: u16,
    start_col: u16,
    start_row: u16,
    bounds: Rect,
) -> PanelRect {
    let dx = column as i32 - start_col as i32;
    let dy = row as i32 - start_row as i32;
    let mut x = start.x as i32;
    let mut y = start.y as i32;
    let mut width = start.width as i32;
    let mut height = start.height as i32;

    match edge {
        ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft => {
            x += dx;
            width -= dx;
        }
        ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight => {
            width += dx;
        }
        _ => {}
    }
    match edge {
        ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight => {
            y += dy;
            height -= dy;
        }
        ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight => {
            height += dy;
        }
        _ => {}
    }

    let min_w = MIN_PANEL_WIDTH as i32;
    let min_h = MIN_PANEL_HEIGHT as i32;
    if width < min_w {
        if matches!(
            edge,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        ) {
            x -= min_w - width;
        }
        width = min_w;
    }
    if height < min_h {
        if matches!(
            edge,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        ) {
            y -= min_h - height;
        }
        height = min_h;
    }

    // Clamp to the desk. Moving edges first clamp the origin (shrinking the
    // panel), then trailing edges clamp the size.
    let bounds_left = bounds.x as i32;
    let bounds_top = bounds.y as i32;
    let max_x = bounds.x as i32 + bounds.width as i32 - 1;
    let max_y = bounds.y as i32 + bounds.height as i32 - 1;

    if x < bounds_left {
        width -= bounds_left - x;
        x = bounds_left;
    }
    if y < bounds_top {
        height -= bounds_top - y;
        y = bounds_top;
    }
    if x + width - 1 > max_x {
        width = max_x - x + 1;
    }
    if y + height - 1 > max_y {
        height = max_y - y + 1;
    }

    PanelRect {
        x: x.max(0) as u16,
        y: y.max(0) as u16,
        width: width.max(1) as u16,
        height: height.max(1) as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        }
    }

    #[test]
    fn drag_follows_pointer_delta() {
        let rect = PanelRect::new(10, 5, 20, 8);
        let moved = apply_drag(rect, 10, 5, 35, 12, 15, 7, bounds());
        assert_eq!((moved.x, moved.y), (30, 10));
        assert_eq!((moved.width, moved.height), (20, 8));
    }

    #[test]
    fn drag_clamps_to_desk_bounds() {
        let rect = PanelRect::new(10, 5, 20, 8);
        // Fling far past the bottom-right corner.
        let moved = apply_drag(rect, 10, 5, 200, 90, 15, 7, bounds());
        assert_eq!(moved.x, 100 - 20);
        assert_eq!(moved.y, 40 - 8);
        // And past the top-left.
        let moved = apply_drag(rect, 10, 5, 0, 0, 90, 39, bounds());
        assert_eq!((moved.x, moved.y), (0, 0));
    }

    #[test]
    fn resize_top_edge_moves_origin() {
        let start = PanelRect::new(0, 20, 20, 15);
        let resized = apply_resize(start, ResizeEdge::Top, 10, 25, 10, 20, bounds());
        assert_eq!(resized, PanelRect::new(0, 25, 20, 10));
        let resized = apply_resize(start, ResizeEdge::Top, 10, 15, 10, 20, bounds());
        assert_eq!(resized, PanelRect::new(0, 15, 20, 20));
    }

    #[test]
    fn resize_respects_minimum_size() {
        let start = PanelRect::new(10, 10, 20, 10);
        // Drag the right edge far to the left.
        let resized = apply_resize(start, ResizeEdge::Right, 0, 15, 29, 15, bounds());
        assert_eq!(resized.width, MIN_PANEL_WIDTH);
        // Drag the left edge far right: width pins at minimum and the origin
        // compensates so the right edge stays put.
        let resized = apply_resize(start, ResizeEdge::Left, 90, 15, 10, 15, bounds());
        assert_eq!(resized.width, MIN_PANEL_WIDTH);
        assert_eq!(resized.right(), start.right());
    }

    #[test]
    fn corner_hit_wins_over_edges() {
        let rect = PanelRect::new(5, 5, 10, 6);
        assert_eq!(resize_edge_at(rect, 5, 5), Some(ResizeEdge::TopLeft));
        assert_eq!(resize_edge_at(rect, 14, 10), Some(ResizeEdge::BottomRight));
        assert_eq!(resize_edge_at(rect, 5, 7), Some(ResizeEdge::Left));
        assert_eq!(resize_edge_at(rect, 9, 5), Some(ResizeEdge::Top));
        assert_eq!(resize_edge_at(rect, 9, 7), None);
    }

    #[test]
    fn header_buttons_hit_test() {
        let rect = PanelRect::new(0, 0, 20, 8);
        let row = header_row(rect);
        assert_eq!(header_action_at(rect, 5, row), HeaderAction::Drag);
        assert_eq!(
            header_action_at(rect, minimize_button_col(rect), row),
            HeaderAction::Minimize
        );
        assert_eq!(
            header_action_at(rect, close_button_col(rect), row),
            HeaderAction::Close
        );
        // Border corners are not header territory.
        assert_eq!(header_action_at(rect, 0, row), HeaderAction::None);
        assert_eq!(header_action_at(rect, 5, 0), HeaderAction::None);
    }
}
