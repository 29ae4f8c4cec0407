//! Discovery passes over a live world
//!
//! [`builder`] places rooms cell by cell and merges split rooms, [`rotation`]
//! resolves orientation, [`doors`] classifies passages, and [`session`] runs
//! them together on the host's lifecycle hooks.

pub mod builder;
pub mod doors;
pub mod rotation;
pub mod session;

pub use builder::{CellOutcome, Deferral, merge_disconnected_rooms, orient_room, scan_cell};
pub use doors::{MarkerCounts, classify_passage, scan_all_doors};
pub use rotation::detect_rotation;
pub use session::{CellState, DungeonScan, ScanProgress, SweepReport};
