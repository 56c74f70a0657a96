use crate::camera::OrthoCamera;
use crate::config::GroundConfig;
use crate::events::{EventBus, GameEvent};
use crate::grid::GridCell;
use crate::input::Input;
use crate::picking::ray_ground_point;
use crate::preview::PreviewMarker;
use crate::tiles::{Tile, TileSink};
use crate::ui::UiHitTest;
use glam::{Vec2, Vec3};
use winit::dpi::PhysicalSize;

/// Pointer state recomputed every frame. When ray resolution fails the
/// resolved position keeps its previous value and `over_world` goes false.
#[derive(Debug, Clone, Copy)]
pub struct PointerFrameState {
    pub resolved_world: Vec3,
    pub over_world: bool,
}

/// Collaborators borrowed for one frame of pointer processing. Everything
/// the controller touches arrives here explicitly; nothing is resolved by
/// global lookup.
pub struct FrameContext<'a> {
    pub camera: &'a mut OrthoCamera,
    pub input: &'a mut Input,
    pub ui: &'a dyn UiHitTest,
    pub tiles: &'a mut dyn TileSink,
    pub preview: &'a mut dyn PreviewMarker,
    pub events: &'a mut EventBus,
    pub viewport: PhysicalSize<u32>,
}

/// Per-frame translation of pointer input into camera panning, zoom, and
/// tile placement with a live preview.
///
/// Sub-behaviors run in fixed order on a single resolved pointer sample:
/// ray resolution, drag pan, zoom, place and preview. A failed resolution
/// skips every pointer-dependent step for the frame; zoom does not depend
/// on the pointer and still applies.
pub struct PointerWorldController {
    ground_height: f32,
    frame: PointerFrameState,
    drag_anchor: Vec3,
}

impl PointerWorldController {
    pub fn new(ground: &GroundConfig) -> Self {
        Self {
            ground_height: ground.plane_height,
            frame: PointerFrameState { resolved_world: Vec3::ZERO, over_world: false },
            drag_anchor: Vec3::ZERO,
        }
    }

    pub fn frame_state(&self) -> PointerFrameState {
        self.frame
    }

    pub fn drag_anchor(&self) -> Vec3 {
        self.drag_anchor
    }

    pub fn update(&mut self, mut ctx: FrameContext<'_>) {
        match self.resolve_pointer(&ctx) {
            Some((cursor, point)) => {
                self.frame.resolved_world = point;
                self.frame.over_world = !ctx.ui.pointer_over_ui(cursor);
                self.update_drag(&mut ctx);
                self.update_zoom(&mut ctx);
                self.update_place(&mut ctx);
                self.update_preview(&mut ctx);
            }
            None => {
                // Drag anchor and preview carry forward untouched.
                self.frame.over_world = false;
                self.update_zoom(&mut ctx);
            }
        }
    }

    fn resolve_pointer(&self, ctx: &FrameContext<'_>) -> Option<(Vec2, Vec3)> {
        let (x, y) = ctx.input.cursor_position()?;
        let cursor = Vec2::new(x, y);
        let (origin, dir) = ctx.camera.screen_ray(cursor, ctx.viewport)?;
        let point = ray_ground_point(origin, dir, self.ground_height)?;
        Some((cursor, point))
    }

    /// Two-state drag: idle frames re-capture the anchor from the current
    /// resolution, held frames pan by `anchor - resolved`. The anchor is
    /// captured the same frame the button goes down, so the first held
    /// frame pans by zero and motion starts one frame after the press.
    fn update_drag(&mut self, ctx: &mut FrameContext<'_>) {
        if ctx.input.drag_held() {
            let delta = self.drag_anchor - self.frame.resolved_world;
            ctx.camera.pan(delta);
        } else {
            self.drag_anchor = self.frame.resolved_world;
        }
    }

    fn update_zoom(&mut self, ctx: &mut FrameContext<'_>) {
        if let Some(delta) = ctx.input.consume_wheel_delta() {
            ctx.camera.apply_zoom_delta(delta);
        }
    }

    fn update_place(&mut self, ctx: &mut FrameContext<'_>) {
        if !ctx.input.take_place_released() {
            return;
        }
        if !self.frame.over_world {
            return;
        }
        let cell = GridCell::floor_from(self.frame.resolved_world);
        match ctx.tiles.set_tile_at(cell, Tile::wall()) {
            Ok(replaced) => {
                ctx.events.push(GameEvent::TilePlaced { cell, replaced: replaced.map(|t| t.tile_type) });
            }
            Err(reason) => {
                ctx.events.push(GameEvent::PlacementRejected { cell, reason });
            }
        }
    }

    fn update_preview(&mut self, ctx: &mut FrameContext<'_>) {
        if self.frame.over_world {
            ctx.preview.set_position(GridCell::snap(self.frame.resolved_world));
            ctx.preview.set_visible(true);
        } else {
            ctx.preview.set_visible(false);
        }
    }
}
