//! Dungeon model
//!
//! Grid cells, the rooms occupying them, and the doors between them.

mod cell;
mod door;
mod grid;
mod map;
mod room;

pub use cell::{CellPos, HalfPos};
pub use door::{DoorKey, DoorRegistry, DoorType};
pub use grid::Grid;
pub use map::DungeonMap;
pub use room::{Room, RoomId, Rotation, UNKNOWN_ROOM_NAME};
