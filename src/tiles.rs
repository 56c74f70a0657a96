use crate::grid::{GridCell, GridRect};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    #[default]
    Floor,
    Wall,
    Machine,
}

impl TileType {
    pub fn label(self) -> &'static str {
        match self {
            TileType::Floor => "Floor",
            TileType::Wall => "Wall",
            TileType::Machine => "Machine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub tile_type: TileType,
}

impl Tile {
    pub const fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }

    pub const fn wall() -> Self {
        Self { tile_type: TileType::Wall }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { cell: GridCell },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { cell } => {
                write!(f, "cell {cell} lies outside the factory floor")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Mutation seam the pointer controller places tiles through.
///
/// Overwrite semantics: a successful call returns the tile that previously
/// occupied the cell, if any. Callers get no deduplication; repeated
/// placements at the same cell are all applied.
pub trait TileSink {
    fn set_tile_at(&mut self, cell: GridCell, tile: Tile) -> Result<Option<Tile>, PlacementError>;
}

/// Tile storage for the factory floor, keyed by grid cell.
#[derive(Debug, Default)]
pub struct Factory {
    tiles: HashMap<GridCell, Tile>,
    bounds: Option<GridRect>,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory restricted to a rectangular floor; placements outside it
    /// are rejected.
    pub fn with_bounds(bounds: GridRect) -> Self {
        Self { tiles: HashMap::new(), bounds: Some(bounds) }
    }

    pub fn tile_at(&self, cell: GridCell) -> Option<&Tile> {
        self.tiles.get(&cell)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn bounds(&self) -> Option<GridRect> {
        self.bounds
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

impl TileSink for Factory {
    fn set_tile_at(&mut self, cell: GridCell, tile: Tile) -> Result<Option<Tile>, PlacementError> {
        if let Some(bounds) = self.bounds {
            if !bounds.contains(cell) {
                return Err(PlacementError::OutOfBounds { cell });
            }
        }
        Ok(self.tiles.insert(cell, tile))
    }
}
