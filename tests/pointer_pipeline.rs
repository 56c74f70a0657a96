use foundry_engine::camera::OrthoCamera;
use foundry_engine::config::GroundConfig;
use foundry_engine::controller::{FrameContext, PointerWorldController};
use foundry_engine::events::{EventBus, GameEvent};
use foundry_engine::grid::{GridCell, GridRect};
use foundry_engine::input::{Input, InputEvent};
use foundry_engine::preview::TileCursor;
use foundry_engine::tiles::{Factory, TileType};
use foundry_engine::ui::{NoUi, UiHitTest, UiOverlay};
use glam::{Vec2, Vec3};
use winit::dpi::PhysicalSize;
use winit::event::MouseButton;

const VIEWPORT: PhysicalSize<u32> = PhysicalSize::new(800, 600);
const CENTER: (f32, f32) = (400.0, 300.0);

struct Rig {
    camera: OrthoCamera,
    input: Input,
    factory: Factory,
    cursor: TileCursor,
    events: EventBus,
    controller: PointerWorldController,
}

impl Rig {
    /// Straight-down camera so screen offsets map to world offsets exactly:
    /// half height 6 at 800x600 spans 16x12 world units.
    fn top_down(position: Vec3) -> Self {
        Self {
            camera: OrthoCamera::new(position, 6.0, std::f32::consts::FRAC_PI_2),
            input: Input::new(),
            factory: Factory::new(),
            cursor: TileCursor::new(),
            events: EventBus::default(),
            controller: PointerWorldController::new(&GroundConfig::default()),
        }
    }

    fn frame_with_ui(&mut self, ui: &dyn UiHitTest) {
        self.controller.update(FrameContext {
            camera: &mut self.camera,
            input: &mut self.input,
            ui,
            tiles: &mut self.factory,
            preview: &mut self.cursor,
            events: &mut self.events,
            viewport: VIEWPORT,
        });
        self.input.clear_frame();
    }

    fn frame(&mut self) {
        self.frame_with_ui(&NoUi);
    }

    fn move_cursor(&mut self, x: f32, y: f32) {
        self.input.push(InputEvent::CursorPos { x, y });
    }

    fn button(&mut self, button: MouseButton, pressed: bool) {
        self.input.push(InputEvent::PointerButton { button, pressed });
    }
}

fn assert_close(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-2,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn release_edge_places_one_wall_at_floored_cell() {
    let mut rig = Rig::top_down(Vec3::new(2.7, 12.0, 5.1));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();

    rig.button(MouseButton::Left, true);
    rig.frame();
    assert_eq!(rig.factory.tile_count(), 0, "press alone must not place");

    rig.button(MouseButton::Left, false);
    rig.frame();

    assert_eq!(rig.factory.tile_count(), 1);
    let tile = rig.factory.tile_at(GridCell::new(2, 5)).expect("wall at floored cell");
    assert_eq!(tile.tile_type, TileType::Wall);
    let events = rig.events.drain();
    assert!(
        matches!(events.as_slice(), [GameEvent::TilePlaced { cell, replaced: None }] if *cell == GridCell::new(2, 5))
    );
}

#[test]
fn release_over_ui_places_nothing() {
    let mut overlay = UiOverlay::new();
    overlay.add_panel(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0));

    let mut rig = Rig::top_down(Vec3::new(2.7, 12.0, 5.1));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame_with_ui(&overlay);

    rig.button(MouseButton::Left, true);
    rig.frame_with_ui(&overlay);
    rig.button(MouseButton::Left, false);
    rig.frame_with_ui(&overlay);

    assert_eq!(rig.factory.tile_count(), 0);
    assert!(rig.events.drain().is_empty());
    assert!(!rig.cursor.visible, "preview hides while the pointer is over UI");
}

#[test]
fn negative_coordinates_floor_toward_negative_infinity() {
    let mut rig = Rig::top_down(Vec3::new(-0.3, 12.0, -1.9));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();
    rig.button(MouseButton::Left, true);
    rig.frame();
    rig.button(MouseButton::Left, false);
    rig.frame();

    assert!(rig.factory.tile_at(GridCell::new(-1, -2)).is_some());
}

#[test]
fn drag_pans_against_the_anchor_captured_while_idle() {
    let mut rig = Rig::top_down(Vec3::new(0.0, 12.0, 0.0));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();
    assert_close(rig.controller.drag_anchor(), Vec3::new(0.0, 0.1, 0.0));

    // 100 px right = 2 world units at this zoom.
    rig.button(MouseButton::Right, true);
    rig.move_cursor(500.0, 300.0);
    rig.frame();
    assert_close(rig.camera.position, Vec3::new(-2.0, 12.0, 0.0));

    // Same pixel next frame: the world point under the cursor now matches
    // the anchor, so the additive update settles.
    rig.frame();
    assert_close(rig.camera.position, Vec3::new(-2.0, 12.0, 0.0));

    rig.button(MouseButton::Right, false);
    rig.frame();
    assert_close(rig.controller.drag_anchor(), Vec3::new(0.0, 0.1, 0.0));
}

#[test]
fn first_held_frame_pans_by_zero() {
    let mut rig = Rig::top_down(Vec3::new(0.0, 12.0, 0.0));
    rig.move_cursor(500.0, 300.0);
    rig.frame();

    // The anchor was captured from this same frame's resolution, so the
    // press frame computes a zero delta.
    rig.button(MouseButton::Right, true);
    rig.frame();
    assert_close(rig.camera.position, Vec3::new(0.0, 12.0, 0.0));
}

#[test]
fn zoom_applies_even_when_the_ray_misses_the_plane() {
    let mut rig = Rig::top_down(Vec3::new(0.0, 12.0, 0.0));
    rig.camera.pitch_radians = 0.0;
    rig.move_cursor(CENTER.0, CENTER.1);

    rig.input.push(InputEvent::Wheel { delta: 2.0 });
    rig.frame();
    assert_eq!(rig.camera.half_height, 8.0);

    rig.input.push(InputEvent::Wheel { delta: 100.0 });
    rig.frame();
    assert_eq!(rig.camera.half_height, 10.0, "zoom clamps at the upper limit");
}

#[test]
fn ray_miss_leaves_anchor_and_preview_untouched() {
    let mut rig = Rig::top_down(Vec3::new(2.7, 12.0, 5.1));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();
    let anchor = rig.controller.drag_anchor();
    let preview = rig.cursor;
    assert!(preview.visible);

    rig.camera.pitch_radians = 0.0;
    rig.button(MouseButton::Left, true);
    rig.frame();
    rig.button(MouseButton::Left, false);
    rig.frame();

    assert_eq!(rig.controller.drag_anchor(), anchor);
    assert_eq!(rig.cursor, preview);
    assert_eq!(rig.factory.tile_count(), 0, "no placement on a miss frame");
    assert!(!rig.controller.frame_state().over_world);
}

#[test]
fn out_of_bounds_release_surfaces_a_rejection_event() {
    let mut rig = Rig::top_down(Vec3::new(5.5, 12.0, 5.5));
    rig.factory = Factory::with_bounds(GridRect::new(GridCell::new(0, 0), GridCell::new(1, 1)));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();

    rig.button(MouseButton::Left, true);
    rig.frame();
    rig.button(MouseButton::Left, false);
    rig.frame();

    assert_eq!(rig.factory.tile_count(), 0);
    let events = rig.events.drain();
    assert!(
        matches!(events.as_slice(), [GameEvent::PlacementRejected { cell, .. }] if *cell == GridCell::new(5, 5))
    );
}

#[test]
fn preview_snaps_to_cell_corner_on_the_ground() {
    let mut rig = Rig::top_down(Vec3::new(3.9, 12.0, -2.2));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();

    assert!(rig.cursor.visible);
    assert_close(rig.cursor.position, Vec3::new(3.0, 0.0, -3.0));
}

#[test]
fn camera_height_is_invariant_across_mixed_gestures() {
    let mut rig = Rig::top_down(Vec3::new(0.0, 12.0, 0.0));
    rig.move_cursor(CENTER.0, CENTER.1);
    rig.frame();

    rig.button(MouseButton::Right, true);
    rig.move_cursor(640.0, 120.0);
    rig.input.push(InputEvent::Wheel { delta: -1.5 });
    rig.frame();
    rig.move_cursor(200.0, 480.0);
    rig.frame();
    rig.button(MouseButton::Right, false);
    rig.button(MouseButton::Left, true);
    rig.frame();
    rig.button(MouseButton::Left, false);
    rig.input.push(InputEvent::Wheel { delta: 3.0 });
    rig.frame();

    assert_eq!(rig.camera.position.y, 12.0);
}
