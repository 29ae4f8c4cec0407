//! dmap-core: Room and door discovery for grid-based voxel dungeons
//!
//! A dungeon is a 6×6 grid of fixed-size cells. Each cell is identified by
//! hashing one vertical column of blocks at its center and looking the hash
//! up in a [`catalog::RoomCatalog`]. Cells of the same room are grouped,
//! rooms are oriented from a roof marker, and the gaps between cells are
//! classified as doors.
//!
//! The crate does no I/O of its own; the world is read through
//! [`world::WorldSource`].

pub mod block;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod dungeon;
pub mod errors;
pub mod fingerprint;
pub mod scan;
pub mod world;

pub use catalog::{CatalogEntry, RoomCatalog, RoomKind, RoomShape, StaticCatalog};
pub use config::ScanConfig;
pub use dungeon::{CellPos, DoorType, DungeonMap, Room, RoomId, Rotation};
pub use errors::{CatalogError, ConfigError};
pub use fingerprint::Fingerprint;
pub use scan::DungeonScan;
pub use world::{BlockPos, MemoryWorld, WorldSource};
