use crate::grid::GridCell;
use crate::tiles::{PlacementError, TileType};
use std::fmt;

#[derive(Debug, Clone)]
pub enum GameEvent {
    TilePlaced { cell: GridCell, replaced: Option<TileType> },
    PlacementRejected { cell: GridCell, reason: PlacementError },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TilePlaced { cell, replaced } => match replaced {
                Some(prev) => write!(f, "TilePlaced cell={} replaced={}", cell, prev.label()),
                None => write!(f, "TilePlaced cell={cell}"),
            },
            GameEvent::PlacementRejected { cell, reason } => {
                write!(f, "PlacementRejected cell={cell} reason={reason}")
            }
        }
    }
}

#[derive(Default)]
pub struct EventBus {
    events: Vec<GameEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}
