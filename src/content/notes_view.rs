use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::ContentCtx;
use crate::theme;
use crate::ui::UiFrame;

pub fn render(frame: &mut UiFrame<'_>, area: Rect, text: &str, ctx: &ContentCtx<'_>) {
    let fg = theme::content_fg(ctx.theme);
    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(fg))))
        .collect();
    if ctx.focused {
        // block cursor on the line being edited
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(
                "█",
                Style::default().fg(theme::accent(ctx.theme)),
            ));
        }
    }
    // keep the cursor line visible once the text outgrows the panel
    let scroll = (lines.len() as u16).saturating_sub(area.height);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
