use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::ContentCtx;
use crate::settings::Density;
use crate::theme;
use crate::ui::UiFrame;

/// Difficulty Value reference: the target number a skill check must beat.
const DV_TABLE: &[(&str, &str)] = &[
    ("9", "Simple - everyday tasks under no pressure"),
    ("13", "Everyday - routine professional work"),
    ("15", "Difficult - trained specialists hesitate"),
    ("17", "Professional - experts under pressure"),
    ("21", "Heroic - stories get told about this"),
    ("24", "Incredible - once-in-a-career attempts"),
    ("29", "Legendary - borderline impossible"),
];

const CHECK_NOTES: &[&str] = &[
    "Check: STAT + skill + 1d10 vs DV.",
    "Beat the DV to succeed; ties fail.",
    "Rolling a 10 explodes: roll again and add.",
    "Rolling a 1 fumbles: roll again and subtract.",
];

pub fn render(frame: &mut UiFrame<'_>, area: Rect, scroll: u16, ctx: &ContentCtx<'_>) {
    let fg = Style::default().fg(theme::content_fg(ctx.theme));
    let dim = Style::default().fg(theme::content_dim(ctx.theme));
    let accent = Style::default()
        .fg(theme::accent(ctx.theme))
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled("DV   Difficulty", accent))];
    for &(dv, label) in DV_TABLE {
        let label = if ctx.density == Density::Compact {
            label.split(" - ").next().unwrap_or(label)
        } else {
            label
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{dv:<4} "), accent),
            Span::styled(label.to_string(), fg),
        ]));
    }
    lines.push(Line::default());
    for note in CHECK_NOTES {
        lines.push(Line::from(Span::styled(*note, fg)));
    }
    if ctx.density == Density::Spacious {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("j/k scroll", dim)));
    }

    let max_scroll = (lines.len() as u16).saturating_sub(area.height);
    let paragraph = Paragraph::new(lines).scroll((scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}
