use glam::Vec3;

/// Placement preview collaborator. Visibility is decoupled from position:
/// hiding the marker never relocates it, so the last snapped cell survives
/// frames where the pointer leaves the world.
pub trait PreviewMarker {
    fn set_position(&mut self, position: Vec3);
    fn set_visible(&mut self, visible: bool);
}

/// Cursor transform rendered by the view layer; the pointer controller
/// overwrites it once per resolved frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCursor {
    pub position: Vec3,
    pub visible: bool,
}

impl TileCursor {
    pub fn new() -> Self {
        Self { position: Vec3::ZERO, visible: false }
    }
}

impl Default for TileCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewMarker for TileCursor {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
