//! World sample source
//!
//! The scanner never owns the world. It asks a [`WorldSource`] two questions:
//! which block sits at a coordinate, and whether the region holding a column
//! is loaded yet.

mod memory;

pub use memory::MemoryWorld;

use serde::{Deserialize, Serialize};

use crate::consts::REGION_SIZE;

/// Identifier returned for empty space
pub const AIR: &str = "minecraft:air";

/// Integer block coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinates of the region (chunk) containing this position
    pub const fn region(&self) -> (i32, i32) {
        region_of(self.x, self.z)
    }
}

/// Region (chunk) coordinates containing world column (x, z)
pub const fn region_of(x: i32, z: i32) -> (i32, i32) {
    (x.div_euclid(REGION_SIZE), z.div_euclid(REGION_SIZE))
}

/// Read access to the live world
pub trait WorldSource {
    /// Namespaced identifier of the block at `pos`; [`AIR`] when empty
    fn block_id(&self, pos: BlockPos) -> &str;

    /// Whether the region containing column (x, z) is loaded
    fn is_region_loaded(&self, x: i32, z: i32) -> bool;

    fn is_air(&self, pos: BlockPos) -> bool {
        self.block_id(pos) == AIR
    }
}

impl<W: WorldSource + ?Sized> WorldSource for &W {
    fn block_id(&self, pos: BlockPos) -> &str {
        (**self).block_id(pos)
    }

    fn is_region_loaded(&self, x: i32, z: i32) -> bool {
        (**self).is_region_loaded(x, z)
    }
}
