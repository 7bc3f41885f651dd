use ratatui::style::Color;

use crate::settings::Theme;

// Centralized palette helpers keyed by the persisted theme so panels and
// chrome never hardcode colors.

pub fn desk_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Black,
        Theme::Light => Color::Gray,
    }
}

pub fn panel_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(18, 18, 24),
        Theme::Light => Color::White,
    }
}

pub fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(200, 100, 0),
        Theme::Light => Color::Rgb(160, 60, 0),
    }
}

pub fn border(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Black,
    }
}

pub fn header_bg(theme: Theme, focused: bool) -> Color {
    match (theme, focused) {
        (Theme::Dark, true) => Color::Blue,
        (Theme::Dark, false) => Color::DarkGray,
        (Theme::Light, true) => Color::Blue,
        (Theme::Light, false) => Color::Gray,
    }
}

pub fn header_fg(theme: Theme, focused: bool) -> Color {
    match (theme, focused) {
        (_, true) => Color::White,
        (Theme::Dark, false) => Color::White,
        (Theme::Light, false) => Color::Black,
    }
}

pub fn content_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

pub fn content_dim(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::DarkGray,
    }
}

pub fn bar_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}

pub fn bar_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

pub fn bar_active_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Gray,
        Theme::Light => Color::White,
    }
}

pub fn bar_active_fg(_theme: Theme) -> Color {
    Color::Black
}
