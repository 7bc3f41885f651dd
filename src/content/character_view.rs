use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::ContentCtx;
use crate::character::{Character, CharacterId};
use crate::settings::Density;
use crate::theme;
use crate::ui::UiFrame;

pub fn render(
    frame: &mut UiFrame<'_>,
    area: Rect,
    selected: Option<CharacterId>,
    ctx: &ContentCtx<'_>,
) {
    let fg = Style::default().fg(theme::content_fg(ctx.theme));
    let dim = Style::default().fg(theme::content_dim(ctx.theme));
    let accent = Style::default()
        .fg(theme::accent(ctx.theme))
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    if ctx.characters.is_empty() {
        lines.push(Line::from(Span::styled("No characters - press a to add", dim)));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    for character in ctx.characters.iter() {
        let marker = if Some(character.id) == selected {
            "» "
        } else {
            "  "
        };
        let style = if Some(character.id) == selected {
            accent
        } else {
            fg
        };
        let entry = match ctx.density {
            Density::Compact => format!("{marker}{}", character.name),
            _ => format!(
                "{marker}{} ({})  HP {}/{}",
                character.name,
                character.role,
                character.combat.hp.current,
                character.combat.hp.max
            ),
        };
        lines.push(Line::from(Span::styled(entry, style)));
    }

    if let Some(character) = selected.and_then(|id| ctx.characters.get(id)) {
        lines.push(Line::default());
        lines.extend(sheet_lines(character, ctx, fg, dim));
    }
    if ctx.density == Density::Spacious {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "n next  a add  d delete  b/B body",
            dim,
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn sheet_lines<'a>(
    character: &Character,
    ctx: &ContentCtx<'_>,
    fg: Style,
    dim: Style,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    // stat grid width follows the density heuristic
    let per_row = match ctx.density {
        Density::Compact => 2,
        Density::Normal => 5,
        Density::Spacious => 10,
    };
    for chunk in character.stats.entries().chunks(per_row) {
        let row = chunk
            .iter()
            .map(|(label, value)| format!("{label} {value}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(row, fg)));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Armor head {} / body {}",
            character.combat.armor.head, character.combat.armor.body
        ),
        fg,
    )));
    if ctx.density > Density::Compact {
        let skills = character
            .skills
            .entries()
            .iter()
            .map(|(label, value)| format!("{label} {value}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(skills, fg)));
        if !character.notes.is_empty() {
            lines.push(Line::from(Span::styled(character.notes.clone(), dim)));
        }
    }
    lines
}
