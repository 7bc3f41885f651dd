//! Application state and event dispatch.
//!
//! `App` owns the registry, the pointer state machine, and every persisted
//! document. Event handling mutates state only; drawing happens elsewhere,
//! so the whole shell can be driven in tests without a terminal.

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;

use crate::character::CharacterStore;
use crate::content::{self, ContentDeps};
use crate::desk::{
    Interactions, LayoutSnapshot, PanelKind, PanelRegistry, Placement, PointerOutcome,
};
use crate::error::Result;
use crate::render;
use crate::settings::Settings;
use crate::statusbar::StatusBar;
use crate::storage::{CHARACTERS_KEY, ExportBundle, LAYOUT_KEY, SETTINGS_KEY, Storage};

/// Terminal resize events arrive in bursts while the user drags the corner;
/// panels are re-clamped only after the size has been stable this long.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

pub struct App {
    pub registry: PanelRegistry,
    pub interact: Interactions,
    pub settings: Settings,
    pub characters: CharacterStore,
    pub statusbar: StatusBar,
    storage: Storage,
    rng: StdRng,
    desk_area: Rect,
    pending_reclamp: Option<Instant>,
    should_quit: bool,
}

impl App {
    pub fn new(storage: Storage) -> Self {
        let mut settings: Settings = storage.load_or_default(SETTINGS_KEY);
        settings.restamp();
        let characters: CharacterStore = storage.load_or_default(CHARACTERS_KEY);
        let snapshot: LayoutSnapshot = storage.load_or_default(LAYOUT_KEY);
        let mut registry = snapshot.replay();
        if registry.is_empty() {
            // First run (or a wiped layout): open a starter desk.
            for kind in [PanelKind::Dice, PanelKind::Notes, PanelKind::Rules] {
                registry.create(kind, None, Placement::Auto);
            }
        }
        Self {
            registry,
            interact: Interactions::new(),
            settings,
            characters,
            statusbar: StatusBar::new(),
            storage,
            rng: StdRng::from_entropy(),
            desk_area: Rect::default(),
            pending_reclamp: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn desk_area(&self) -> Rect {
        self.desk_area
    }

    /// Record the terminal size. Panels are not touched here; the clamp runs
    /// from `on_tick` once the size stops changing.
    pub fn set_viewport(&mut self, area: Rect) {
        let (desk, _) = render::desk_and_bar(area);
        self.desk_area = desk;
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize(width, height) => {
                self.set_viewport(Rect {
                    x: 0,
                    y: 0,
                    width: *width,
                    height: *height,
                });
                self.pending_reclamp = Some(Instant::now());
            }
            _ => {}
        }
    }

    /// Run debounced work. Called once per poll interval.
    pub fn on_tick(&mut self) {
        if let Some(since) = self.pending_reclamp {
            if since.elapsed() >= RESIZE_DEBOUNCE {
                self.pending_reclamp = None;
                self.registry.clamp_all(self.desk_area);
                self.persist_layout();
            }
        }
    }

    fn on_key(&mut self, key: &KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char(c @ '1'..='5') => {
                    let idx = c as usize - '1' as usize;
                    self.add_panel(PanelKind::ALL[idx]);
                    return;
                }
                KeyCode::Char('t') => {
                    self.settings.theme = self.settings.theme.toggled();
                    self.persist_settings();
                    return;
                }
                KeyCode::Char('m') => {
                    if let Some(id) = self.registry.focused() {
                        let _ = self.registry.minimize(id);
                        self.persist_layout();
                    }
                    return;
                }
                KeyCode::Char('x') => {
                    if let Some(id) = self.registry.focused() {
                        let _ = self.registry.remove(id);
                        self.persist_layout();
                    }
                    return;
                }
                KeyCode::Char('n') => {
                    self.cycle_focus();
                    return;
                }
                _ => {}
            }
        }

        // Anything else belongs to the focused panel's content.
        let Some(id) = self.registry.focused() else {
            return;
        };
        let changed = {
            let mut deps = ContentDeps {
                characters: &mut self.characters,
                rng: &mut self.rng,
            };
            match self.registry.get_mut(id) {
                Some(panel) => content::handle_key(&mut panel.content, key, &mut deps),
                None => false,
            }
        };
        if changed {
            self.persist_layout();
            self.persist_characters();
        }
    }

    fn on_mouse(&mut self, mouse: &MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            if let Some(id) = self.statusbar.hit_test(mouse.column, mouse.row) {
                let minimized = self
                    .registry
                    .get(id)
                    .map(|panel| panel.minimized)
                    .unwrap_or(false);
                let _ = if minimized {
                    self.registry.restore(id)
                } else {
                    self.registry.bring_to_front(id)
                };
                self.persist_layout();
                return;
            }
        }
        match self.interact.on_mouse(&mut self.registry, mouse, self.desk_area) {
            PointerOutcome::LayoutChanged => self.persist_layout(),
            PointerOutcome::Handled | PointerOutcome::Ignored => {}
        }
    }

    /// Raise the bottom-most visible panel, walking the stack round robin.
    fn cycle_focus(&mut self) {
        let bottom = self
            .registry
            .z_order()
            .into_iter()
            .find(|&id| self.registry.get(id).is_some_and(|panel| !panel.minimized));
        if let Some(id) = bottom {
            let _ = self.registry.bring_to_front(id);
            self.persist_layout();
        }
    }

    pub fn add_panel(&mut self, kind: PanelKind) {
        let id = self.registry.create(kind, None, Placement::Auto);
        if self.desk_area.width > 0 {
            if let Some(panel) = self.registry.get(id) {
                let clamped = panel.rect.clamped_within(self.desk_area);
                let _ = self.registry.set_rect(id, clamped);
            }
        }
        self.persist_layout();
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        let bundle = ExportBundle {
            settings: self.settings.clone(),
            layout: LayoutSnapshot::capture(&self.registry),
        };
        bundle.write_to(path)?;
        tracing::info!(path = %path.display(), "exported settings and layout");
        Ok(())
    }

    pub fn import(&mut self, path: &Path) -> Result<()> {
        let bundle = ExportBundle::read_from(path)?;
        self.settings = bundle.settings;
        self.settings.restamp();
        self.registry = bundle.layout.replay();
        if self.desk_area.width > 0 {
            self.registry.clamp_all(self.desk_area);
        }
        self.persist_settings();
        self.persist_layout();
        tracing::info!(path = %path.display(), "imported settings and layout");
        Ok(())
    }

    pub fn persist_layout(&self) {
        let snapshot = LayoutSnapshot::capture(&self.registry);
        if let Err(err) = self.storage.save(LAYOUT_KEY, &snapshot) {
            tracing::error!(error = %err, "failed to save layout");
        }
    }

    pub fn persist_settings(&self) {
        if let Err(err) = self.storage.save(SETTINGS_KEY, &self.settings) {
            tracing::error!(error = %err, "failed to save settings");
        }
    }

    pub fn persist_characters(&self) {
        if let Err(err) = self.storage.save(CHARACTERS_KEY, &self.characters) {
            tracing::error!(error = %err, "failed to save characters");
        }
    }
}
