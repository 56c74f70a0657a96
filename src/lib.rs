pub mod camera;
pub mod config;
pub mod controller;
pub mod events;
pub mod grid;
pub mod input;
pub mod picking;
pub mod preview;
pub mod tiles;
pub mod ui;

pub use camera::OrthoCamera;
pub use config::AppConfig;
pub use controller::{FrameContext, PointerWorldController};
pub use events::{EventBus, GameEvent};
pub use grid::{GridCell, GridRect};
pub use input::{Input, InputEvent};
pub use preview::{PreviewMarker, TileCursor};
pub use tiles::{Factory, PlacementError, Tile, TileSink, TileType};
pub use ui::{NoUi, UiHitTest, UiOverlay};
