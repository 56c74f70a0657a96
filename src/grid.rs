use glam::Vec3;
use std::fmt;

/// Integer coordinate of one cell on the ground plane.
///
/// Cells are derived from world positions by flooring the horizontal
/// components independently, so negative coordinates round toward negative
/// infinity (world x = -0.3 lands in cell x = -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell under a world-space position: floor of x and z.
    pub fn floor_from(world: Vec3) -> Self {
        Self { x: world.x.floor() as i32, y: world.z.floor() as i32 }
    }

    /// Ground-plane corner of the cell under `world`, the anchor point
    /// shared by tile placement and the preview cursor.
    pub fn snap(world: Vec3) -> Vec3 {
        Vec3::new(world.x.floor(), 0.0, world.z.floor())
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive rectangular region of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRect {
    pub min: GridCell,
    pub max: GridCell,
}

impl GridRect {
    pub const fn new(min: GridCell, max: GridCell) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }
}
