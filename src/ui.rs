use glam::Vec2;

/// Query polled once per frame to decide whether the pointer is captured
/// by an interactive UI element instead of the world.
pub trait UiHitTest {
    fn pointer_over_ui(&self, screen: Vec2) -> bool;
}

/// No interactive UI; every pointer sample lands in the world.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUi;

impl UiHitTest for NoUi {
    fn pointer_over_ui(&self, _screen: Vec2) -> bool {
        false
    }
}

/// Screen-space panel rectangle, device pixels, min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiPanel {
    pub min: Vec2,
    pub max: Vec2,
}

impl UiPanel {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Hit-testable set of UI panel rectangles.
#[derive(Debug, Clone, Default)]
pub struct UiOverlay {
    panels: Vec<UiPanel>,
}

impl UiOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_panel(&mut self, min: Vec2, max: Vec2) {
        self.panels.push(UiPanel::new(min, max));
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }
}

impl UiHitTest for UiOverlay {
    fn pointer_over_ui(&self, screen: Vec2) -> bool {
        self.panels.iter().any(|panel| panel.contains(screen))
    }
}
