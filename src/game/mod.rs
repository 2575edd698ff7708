pub mod board;
pub mod direction;
pub mod event;
pub mod position;
pub mod tile;

pub use board::{Board, ValueMatrix, FOUR_PROBABILITY, GRID_SIZE};
pub use direction::Direction;
pub use event::{EventKind, GameEvent, Listener, Notifier};
pub use position::Position;
pub use tile::{tile_value_equals, Tile, TileId};
