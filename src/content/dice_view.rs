use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::ContentCtx;
use crate::dice::Roll;
use crate::settings::Density;
use crate::theme;
use crate::ui::UiFrame;

pub fn render(
    frame: &mut UiFrame<'_>,
    area: Rect,
    count: u8,
    sides: u16,
    last: Option<&Roll>,
    ctx: &ContentCtx<'_>,
) {
    let fg = Style::default().fg(theme::content_fg(ctx.theme));
    let dim = Style::default().fg(theme::content_dim(ctx.theme));
    let accent = Style::default()
        .fg(theme::accent(ctx.theme))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(vec![
        Span::styled("Pool: ", fg),
        Span::styled(format!("{count}d{sides}"), accent),
    ])];
    match last {
        Some(roll) => {
            let rolled = roll
                .values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(vec![
                Span::styled("Rolled: ", fg),
                Span::styled(rolled, fg),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Total: ", fg),
                Span::styled(roll.total.to_string(), accent),
            ]));
        }
        None => lines.push(Line::from(Span::styled("No roll yet", dim))),
    }
    if ctx.density > Density::Compact {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("+/- dice  [/] sides  r roll", dim)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
