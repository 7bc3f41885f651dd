use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use gm_desk::app::App;
use gm_desk::character::CharacterStore;
use gm_desk::desk::{LayoutSnapshot, PanelKind, PanelRect};
use gm_desk::settings::{SETTINGS_VERSION, Settings, Theme};
use gm_desk::storage::{CHARACTERS_KEY, ExportBundle, LAYOUT_KEY, SETTINGS_KEY, Storage};
use ratatui::layout::Rect;

fn viewport() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    }
}

fn open_app(dir: &std::path::Path) -> App {
    let mut app = App::new(Storage::open(dir).unwrap());
    app.set_viewport(viewport());
    app
}

#[test]
fn layout_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let rect = PanelRect::new(17, 6, 33, 12);
    let (id, count) = {
        let mut app = open_app(dir.path());
        app.add_panel(PanelKind::Character);
        let id = app.registry.focused().unwrap();
        app.registry.set_rect(id, rect).unwrap();
        app.registry.minimize(id).unwrap();
        app.persist_layout();
        (id, app.registry.len())
    };

    let app = open_app(dir.path());
    assert_eq!(app.registry.len(), count);
    let panel = app.registry.get(id).unwrap();
    assert_eq!(panel.kind, PanelKind::Character);
    assert!(panel.minimized);
    assert_eq!(panel.prev_rect, Some(rect));
}

#[test]
fn malformed_documents_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("layout.json"), "{\"version\": 3,").unwrap();
    std::fs::write(dir.path().join("settings.json"), "not json at all").unwrap();

    // Startup must not fail; it behaves like a first run.
    let app = open_app(dir.path());
    assert_eq!(app.settings, Settings::default());
    assert_eq!(app.registry.len(), 3);
}

#[test]
fn stale_settings_version_is_restamped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"theme":"light","version":"1"}"#,
    )
    .unwrap();

    let app = open_app(dir.path());
    assert_eq!(app.settings.theme, Theme::Light);
    assert_eq!(app.settings.version, SETTINGS_VERSION);
}

#[test]
fn export_then_import_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let bundle_path = dir.path().join("bundle.json");

    let mut app = open_app(dir.path());
    app.settings.theme = Theme::Light;
    app.settings.user_profile = "table one".into();
    app.add_panel(PanelKind::Npc);
    let id = app.registry.focused().unwrap();
    app.registry
        .set_rect(id, PanelRect::new(3, 2, 40, 13))
        .unwrap();
    app.export(&bundle_path).unwrap();

    // Import into a fresh data directory.
    let other = tempfile::tempdir().unwrap();
    let mut imported = open_app(other.path());
    imported.import(&bundle_path).unwrap();
    assert_eq!(imported.settings.theme, Theme::Light);
    assert_eq!(imported.settings.user_profile, "table one");
    let panel = imported.registry.get(id).unwrap();
    assert_eq!(panel.kind, PanelKind::Npc);
    assert_eq!(panel.rect, PanelRect::new(3, 2, 40, 13));

    // The bundle itself is plain JSON readable on its own.
    let raw = ExportBundle::read_from(&bundle_path).unwrap();
    assert_eq!(raw.layout.panels.len(), app.registry.len());
}

#[test]
fn character_edits_persist_through_the_key_path() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = open_app(dir.path());
        app.add_panel(PanelKind::Character);
        // 'a' adds a character to the focused character panel.
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        )));
        assert_eq!(app.characters.len(), 1);
    }

    let storage = Storage::open(dir.path()).unwrap();
    let store: CharacterStore = storage.load_or_default(CHARACTERS_KEY);
    assert_eq!(store.len(), 1);
}

#[test]
fn snapshot_document_uses_stable_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path()).unwrap();
    let app = open_app(dir.path());
    app.persist_layout();
    app.persist_settings();
    app.persist_characters();

    let layout: Option<LayoutSnapshot> = storage.load(LAYOUT_KEY).unwrap();
    assert!(layout.is_some());
    let settings: Option<Settings> = storage.load(SETTINGS_KEY).unwrap();
    assert!(settings.is_some());
    assert!(dir.path().join("layout.json").exists());
    assert!(dir.path().join("settings.json").exists());
    assert!(dir.path().join("characters.json").exists());
}
