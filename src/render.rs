//! Desk compositor.
//!
//! Panels draw bottom to top in z order (painter's algorithm), so occlusion
//! needs no per-cell bookkeeping: whatever is on top simply draws last. The
//! status bar claims the bottom row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear};

use crate::app::App;
use crate::content::{self, ContentCtx, density_for};
use crate::desk::interact::{close_button_col, header_row, minimize_button_col};
use crate::desk::Panel;
use crate::settings::Settings;
use crate::theme;
use crate::ui::UiFrame;

/// Split the terminal into desk and status bar.
pub fn desk_and_bar(area: Rect) -> (Rect, Rect) {
    if area.height < 2 {
        return (area, Rect::default());
    }
    let desk = Rect {
        height: area.height - 1,
        ..area
    };
    let bar = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    (desk, bar)
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let mut ui = UiFrame::new(frame);
    let area = ui.area();
    let (desk, bar) = desk_and_bar(area);

    let backdrop =
        Block::default().style(Style::default().bg(theme::desk_bg(app.settings.theme)));
    ui.render_widget(backdrop, desk);

    let focused = app.registry.focused();
    let resizing = app.interact.resizing();
    for id in app.registry.z_order() {
        let Some(panel) = app.registry.get(id) else {
            continue;
        };
        if panel.minimized {
            continue;
        }
        draw_panel(
            &mut ui,
            panel,
            Some(id) == focused,
            Some(id) == resizing,
            &app.settings,
            &app.characters,
        );
    }

    app.statusbar.begin_frame();
    app.statusbar
        .render(&mut ui, bar, &app.registry, focused, &app.settings);
}

fn draw_panel(
    ui: &mut UiFrame<'_>,
    panel: &Panel,
    focused: bool,
    resizing: bool,
    settings: &Settings,
    characters: &crate::character::CharacterStore,
) {
    let rect = panel.rect.to_rect();
    if rect.width < 3 || rect.height < 3 {
        return;
    }
    let theme_kind = settings.theme;
    ui.render_widget(Clear, rect);

    let border_fg = if resizing || focused {
        theme::accent(theme_kind)
    } else {
        theme::border(theme_kind)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_fg))
        .style(Style::default().bg(theme::panel_bg(theme_kind)));
    ui.render_widget(block, rect);

    draw_header(ui, panel, focused, settings);

    let ctx = ContentCtx {
        theme: theme_kind,
        density: density_for(&settings.density, panel.rect.width),
        focused,
        characters,
    };
    content::render(ui, panel.content_area(), &panel.content, &ctx);
}

fn draw_header(ui: &mut UiFrame<'_>, panel: &Panel, focused: bool, settings: &Settings) {
    let rect = panel.rect;
    let row = header_row(rect);
    let theme_kind = settings.theme;
    let mut style = Style::default()
        .bg(theme::header_bg(theme_kind, focused))
        .fg(theme::header_fg(theme_kind, focused));
    if focused && settings.animations {
        style = style.add_modifier(Modifier::BOLD);
    }
    let bounds = rect.to_rect();

    let left = rect.x.saturating_add(1);
    let inner_width = rect.width.saturating_sub(2);
    let fill = " ".repeat(inner_width as usize);
    ui.set_string(bounds, left, row, &fill, style);

    let title_max = inner_width.saturating_sub(6) as usize;
    let title: String = panel.title.chars().take(title_max).collect();
    ui.set_string(bounds, left.saturating_add(1), row, &title, style);

    ui.set_string(bounds, minimize_button_col(rect), row, "_", style);
    ui.set_string(bounds, close_button_col(rect), row, "x", style);
}
