use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gm_desk::desk::{
    Interactions, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH, PanelKind, PanelRect, PanelRegistry,
    Placement, PointerOutcome,
};
use ratatui::layout::Rect;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

fn desk() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    }
}

#[test]
fn header_drag_moves_panel_and_clamps_to_desk() {
    let mut registry = PanelRegistry::new();
    let id = registry.create(PanelKind::Notes, None, Placement::At(10, 5));
    registry.set_rect(id, PanelRect::new(10, 5, 30, 10)).unwrap();
    let mut interact = Interactions::new();

    // Grab the header row, one cell in from the border.
    assert_eq!(
        interact.on_mouse(&mut registry, &down(15, 6), desk()),
        PointerOutcome::LayoutChanged
    );
    assert_eq!(interact.dragging(), Some(id));

    interact.on_mouse(&mut registry, &drag(45, 20), desk());
    let rect = registry.get(id).unwrap().rect;
    assert_eq!((rect.x, rect.y), (40, 19));

    // Fling past the corner: position pins at the desk edge.
    interact.on_mouse(&mut registry, &drag(500, 500), desk());
    let rect = registry.get(id).unwrap().rect;
    assert_eq!(rect.x, 100 - 30);
    assert_eq!(rect.y, 40 - 10);

    assert_eq!(
        interact.on_mouse(&mut registry, &up(500, 500), desk()),
        PointerOutcome::LayoutChanged
    );
    assert!(interact.is_idle());
}

#[test]
fn corner_resize_grows_and_respects_minimum() {
    let mut registry = PanelRegistry::new();
    let id = registry.create(PanelKind::Dice, None, Placement::At(10, 5));
    registry.set_rect(id, PanelRect::new(10, 5, 30, 10)).unwrap();
    let mut interact = Interactions::new();

    // Bottom-right corner cell of a 30x10 panel at (10, 5).
    interact.on_mouse(&mut registry, &down(39, 14), desk());
    assert_eq!(interact.resizing(), Some(id));

    interact.on_mouse(&mut registry, &drag(49, 19), desk());
    let rect = registry.get(id).unwrap().rect;
    assert_eq!((rect.width, rect.height), (40, 15));

    // Collapse far past the opposite corner: both axes pin at the minimum.
    interact.on_mouse(&mut registry, &drag(0, 0), desk());
    let rect = registry.get(id).unwrap().rect;
    assert_eq!(rect.width, MIN_PANEL_WIDTH);
    assert_eq!(rect.height, MIN_PANEL_HEIGHT);

    interact.on_mouse(&mut registry, &up(0, 0), desk());
    assert!(interact.is_idle());
}

#[test]
fn fresh_press_resets_a_stale_drag() {
    let mut registry = PanelRegistry::new();
    let a = registry.create(PanelKind::Notes, None, Placement::At(0, 0));
    registry.set_rect(a, PanelRect::new(0, 0, 20, 8)).unwrap();
    let b = registry.create(PanelKind::Rules, None, Placement::At(50, 20));
    registry.set_rect(b, PanelRect::new(50, 20, 20, 8)).unwrap();
    let mut interact = Interactions::new();

    // Start dragging panel a and never release (pointer-up lost).
    interact.on_mouse(&mut registry, &down(5, 1), desk());
    assert_eq!(interact.dragging(), Some(a));

    // The next press lands on panel b and must not continue the old drag.
    interact.on_mouse(&mut registry, &down(55, 21), desk());
    assert_eq!(interact.dragging(), Some(b));
    interact.on_mouse(&mut registry, &drag(60, 25), desk());
    assert_eq!(registry.get(a).unwrap().rect.x, 0);
    assert_eq!(registry.get(b).unwrap().rect.x, 55);
}

#[test]
fn press_hits_the_topmost_panel_and_raises_it() {
    let mut registry = PanelRegistry::new();
    let below = registry.create(PanelKind::Notes, None, Placement::At(10, 5));
    registry
        .set_rect(below, PanelRect::new(10, 5, 30, 10))
        .unwrap();
    let above = registry.create(PanelKind::Dice, None, Placement::At(20, 8));
    registry
        .set_rect(above, PanelRect::new(20, 8, 30, 10))
        .unwrap();
    let mut interact = Interactions::new();

    // The overlap region belongs to the upper panel.
    interact.on_mouse(&mut registry, &down(25, 10), desk());
    interact.on_mouse(&mut registry, &up(25, 10), desk());
    assert_eq!(registry.focused(), Some(above));

    // Clicking exposed area of the lower panel raises it past the other.
    interact.on_mouse(&mut registry, &down(12, 6), desk());
    interact.on_mouse(&mut registry, &drag(12, 6), desk());
    interact.on_mouse(&mut registry, &up(12, 6), desk());
    assert_eq!(registry.focused(), Some(below));
    assert_eq!(registry.z_order().last(), Some(&below));
}

#[test]
fn header_buttons_minimize_and_close() {
    let mut registry = PanelRegistry::new();
    let id = registry.create(PanelKind::Npc, None, Placement::At(10, 5));
    let rect = PanelRect::new(10, 5, 30, 10);
    registry.set_rect(id, rect).unwrap();
    let mut interact = Interactions::new();

    // Minimize button: third cell from the right edge, header row.
    interact.on_mouse(&mut registry, &down(rect.right() - 3, 6), desk());
    assert!(registry.get(id).unwrap().minimized);
    assert!(interact.is_idle());
    interact.on_mouse(&mut registry, &up(rect.right() - 3, 6), desk());

    registry.restore(id).unwrap();

    // Close button: last inner cell of the header row.
    interact.on_mouse(&mut registry, &down(rect.right() - 1, 6), desk());
    assert!(registry.get(id).is_none());
}

#[test]
fn events_outside_every_panel_are_ignored() {
    let mut registry = PanelRegistry::new();
    let id = registry.create(PanelKind::Rules, None, Placement::At(10, 5));
    registry.set_rect(id, PanelRect::new(10, 5, 20, 8)).unwrap();
    let mut interact = Interactions::new();

    assert_eq!(
        interact.on_mouse(&mut registry, &down(80, 30), desk()),
        PointerOutcome::Ignored
    );
    assert!(interact.is_idle());
    assert_eq!(
        interact.on_mouse(&mut registry, &drag(81, 31), desk()),
        PointerOutcome::Ignored
    );
}
