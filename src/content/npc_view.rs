use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::ContentCtx;
use crate::npc::Npc;
use crate::settings::Density;
use crate::theme;
use crate::ui::UiFrame;

pub fn render(frame: &mut UiFrame<'_>, area: Rect, current: Option<&Npc>, ctx: &ContentCtx<'_>) {
    let fg = Style::default().fg(theme::content_fg(ctx.theme));
    let dim = Style::default().fg(theme::content_dim(ctx.theme));
    let accent = Style::default()
        .fg(theme::accent(ctx.theme))
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    match current {
        Some(npc) => {
            lines.push(Line::from(vec![
                Span::styled(npc.name.clone(), accent),
                Span::styled(format!("  ({})", npc.role), fg),
            ]));
            lines.push(Line::from(Span::styled(
                format!("Quirk: {}", npc.quirk),
                fg,
            )));
            lines.push(Line::default());
            // stat line folds to two rows when the panel is narrow
            let entries = npc.stats.entries();
            let per_row = if ctx.density == Density::Compact { 5 } else { 10 };
            for chunk in entries.chunks(per_row) {
                let row = chunk
                    .iter()
                    .map(|(label, value)| format!("{label} {value}"))
                    .collect::<Vec<_>>()
                    .join("  ");
                lines.push(Line::from(Span::styled(row, fg)));
            }
        }
        None => lines.push(Line::from(Span::styled("No NPC yet", dim))),
    }
    if ctx.density > Density::Compact {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("g generate", dim)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
