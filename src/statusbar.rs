//! Bottom status bar: profile label on the left, one entry per panel.
//!
//! Hit rectangles are rebuilt every frame before rendering and consumed by
//! mouse dispatch, so geometry and hit-testing can never drift apart.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::desk::{PanelId, PanelRegistry, rect_contains};
use crate::settings::Settings;
use crate::theme;
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy)]
struct BarHit {
    id: PanelId,
    rect: Rect,
}

#[derive(Debug, Default)]
pub struct StatusBar {
    hits: Vec<BarHit>,
    area: Rect,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.hits.clear();
        self.area = Rect::default();
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Panel entry under the pointer, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<PanelId> {
        self.hits
            .iter()
            .find(|hit| rect_contains(hit.rect, column, row))
            .map(|hit| hit.id)
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        registry: &PanelRegistry,
        focused: Option<PanelId>,
        settings: &Settings,
    ) {
        self.area = area;
        if area.height == 0 {
            return;
        }
        let bg = Style::default()
            .bg(theme::bar_bg(settings.theme))
            .fg(theme::bar_fg(settings.theme));
        let buffer = frame.buffer_mut();
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.set_symbol(" ");
                cell.set_style(bg);
            }
        }

        let label = if settings.user_profile.is_empty() {
            " GM Desk ".to_string()
        } else {
            format!(" GM Desk · {} ", settings.user_profile)
        };
        frame.set_string(area, area.x, area.y, &label, bg.add_modifier(Modifier::BOLD));
        let mut x = area.x.saturating_add(label.chars().count() as u16);

        for id in registry.creation_order() {
            let Some(panel) = registry.get(id) else {
                continue;
            };
            let entry = if panel.minimized {
                format!(" [{}] ", panel.title)
            } else {
                format!(" {} ", panel.title)
            };
            let width = entry.chars().count() as u16;
            if x.saturating_add(width) > area.x.saturating_add(area.width) {
                break;
            }
            let style = if Some(id) == focused {
                Style::default()
                    .bg(theme::bar_active_bg(settings.theme))
                    .fg(theme::bar_active_fg(settings.theme))
            } else {
                bg
            };
            frame.set_string(area, x, area.y, &entry, style);
            self.hits.push(BarHit {
                id,
                rect: Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                },
            });
            x = x.saturating_add(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::{PanelKind, Placement};
    use ratatui::buffer::Buffer;

    #[test]
    fn entries_are_hit_testable_after_render() {
        let mut registry = PanelRegistry::new();
        let a = registry.create(PanelKind::Dice, None, Placement::Auto);
        let b = registry.create(PanelKind::Notes, None, Placement::Auto);
        registry.minimize(b).unwrap();

        let area = Rect {
            x: 0,
            y: 20,
            width: 80,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let mut bar = StatusBar::new();
        bar.begin_frame();
        bar.render(&mut frame, area, &registry, Some(a), &Settings::default());

        assert_eq!(bar.hits.len(), 2);
        let first = bar.hits[0];
        assert_eq!(first.id, a);
        assert_eq!(bar.hit_test(first.rect.x, first.rect.y), Some(a));
        assert_eq!(bar.hit_test(first.rect.x, 0), None);
        let second = bar.hits[1];
        assert_eq!(bar.hit_test(second.rect.x, second.rect.y), Some(b));
    }
}
