//! Per-kind panel content: state, key handling, and rendering.
//!
//! Content is a tagged union matched exhaustively everywhere, so adding a
//! panel kind is a compile error until every renderer and key handler knows
//! about it.

pub mod character_view;
pub mod dice_view;
pub mod notes_view;
pub mod npc_view;
pub mod rules_view;

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

use crate::character::{CharacterId, CharacterStore};
use crate::desk::PanelKind;
use crate::dice::{MAX_DICE, Roll, STANDARD_SIDES};
use crate::npc::Npc;
use crate::settings::{Density, DensitySettings, Theme};
use crate::ui::UiFrame;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PanelContent {
    Notes {
        #[serde(default)]
        text: String,
    },
    Dice {
        count: u8,
        sides: u16,
        #[serde(default)]
        last: Option<Roll>,
    },
    Rules {
        #[serde(default)]
        scroll: u16,
    },
    Character {
        #[serde(default)]
        selected: Option<CharacterId>,
    },
    Npc {
        #[serde(default)]
        current: Option<Npc>,
    },
}

impl PanelContent {
    pub fn default_for(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Notes => PanelContent::Notes {
                text: String::new(),
            },
            PanelKind::Dice => PanelContent::Dice {
                count: 2,
                sides: 6,
                last: None,
            },
            PanelKind::Rules => PanelContent::Rules { scroll: 0 },
            PanelKind::Character => PanelContent::Character { selected: None },
            PanelKind::Npc => PanelContent::Npc { current: None },
        }
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            PanelContent::Notes { .. } => PanelKind::Notes,
            PanelContent::Dice { .. } => PanelKind::Dice,
            PanelContent::Rules { .. } => PanelKind::Rules,
            PanelContent::Character { .. } => PanelKind::Character,
            PanelContent::Npc { .. } => PanelKind::Npc,
        }
    }
}

/// Width-driven density heuristic: purely presentational re-formatting,
/// recomputed on every draw so a resize reflows content immediately.
pub fn density_for(settings: &DensitySettings, width: u16) -> Density {
    if !settings.auto_adjust {
        return settings.content_density;
    }
    if width < 30 {
        Density::Compact
    } else if width < 56 {
        Density::Normal
    } else {
        Density::Spacious
    }
}

/// Everything a renderer may read.
pub struct ContentCtx<'a> {
    pub theme: Theme,
    pub density: Density,
    pub focused: bool,
    pub characters: &'a CharacterStore,
}

/// Everything a key handler may mutate.
pub struct ContentDeps<'a> {
    pub characters: &'a mut CharacterStore,
    pub rng: &'a mut StdRng,
}

pub fn render(frame: &mut UiFrame<'_>, area: Rect, content: &PanelContent, ctx: &ContentCtx<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    match content {
        PanelContent::Notes { text } => notes_view::render(frame, area, text, ctx),
        PanelContent::Dice { count, sides, last } => {
            dice_view::render(frame, area, *count, *sides, last.as_ref(), ctx)
        }
        PanelContent::Rules { scroll } => rules_view::render(frame, area, *scroll, ctx),
        PanelContent::Character { selected } => {
            character_view::render(frame, area, *selected, ctx)
        }
        PanelContent::Npc { current } => npc_view::render(frame, area, current.as_ref(), ctx),
    }
}

/// Route a key press to the focused panel's content. Returns true when the
/// content state changed (and thus wants persisting).
pub fn handle_key(content: &mut PanelContent, key: &KeyEvent, deps: &mut ContentDeps<'_>) -> bool {
    match content {
        PanelContent::Notes { text } => match key.code {
            KeyCode::Char(c) => {
                text.push(c);
                true
            }
            KeyCode::Enter => {
                text.push('\n');
                true
            }
            KeyCode::Backspace => text.pop().is_some(),
            _ => false,
        },
        PanelContent::Dice { count, sides, last } => match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                // count can arrive out of band from an edited document
                *count = count.saturating_add(1).min(MAX_DICE);
                true
            }
            KeyCode::Char('-') => {
                *count = count.saturating_sub(1).max(1);
                true
            }
            KeyCode::Char('[') => {
                *sides = cycle_sides(*sides, false);
                true
            }
            KeyCode::Char(']') => {
                *sides = cycle_sides(*sides, true);
                true
            }
            KeyCode::Char('r') | KeyCode::Enter => {
                match crate::dice::roll(*count, *sides, deps.rng) {
                    Ok(roll) => {
                        *last = Some(roll);
                        true
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "dice roll rejected");
                        false
                    }
                }
            }
            _ => false,
        },
        PanelContent::Rules { scroll } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let moved = *scroll > 0;
                *scroll = scroll.saturating_sub(1);
                moved
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *scroll = scroll.saturating_add(1);
                true
            }
            KeyCode::Home => {
                let moved = *scroll > 0;
                *scroll = 0;
                moved
            }
            _ => false,
        },
        PanelContent::Character { selected } => match key.code {
            KeyCode::Char('n') | KeyCode::Tab => {
                let next = deps.characters.next_after(*selected);
                let changed = next != *selected;
                *selected = next;
                changed
            }
            KeyCode::Char('a') => {
                let id = deps.characters.add("New Contact", "NPC");
                *selected = Some(id);
                true
            }
            KeyCode::Char('d') => {
                if let Some(id) = *selected {
                    let _ = deps.characters.remove(id);
                    *selected = deps.characters.next_after(None);
                    true
                } else {
                    false
                }
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let Some(character) = selected.and_then(|id| deps.characters.get_mut(id)) else {
                    return false;
                };
                let body = if key.code == KeyCode::Char('B') {
                    character.stats.body.saturating_add(1).min(10)
                } else {
                    character.stats.body.saturating_sub(1).max(1)
                };
                character.set_body(body);
                true
            }
            _ => false,
        },
        PanelContent::Npc { current } => match key.code {
            KeyCode::Char('g') | KeyCode::Enter => {
                *current = Some(crate::npc::generate(deps.rng));
                true
            }
            _ => false,
        },
    }
}

fn cycle_sides(sides: u16, forward: bool) -> u16 {
    let idx = STANDARD_SIDES
        .iter()
        .position(|&s| s == sides)
        .unwrap_or(1);
    let len = STANDARD_SIDES.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    STANDARD_SIDES[next]
}
