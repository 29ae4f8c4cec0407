//! JSON world snapshots
//!
//! A snapshot lists single blocks and filled boxes; anything unlisted is air.
//! Regions are unloaded unless `all_loaded` is set or they appear in
//! `loaded_regions` (region coordinates, not block coordinates).

use anyhow::{Context, Result};
use dmap_core::{BlockPos, MemoryWorld};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorldSnapshot {
    pub all_loaded: bool,
    pub loaded_regions: Vec<(i32, i32)>,
    pub blocks: Vec<BlockEntry>,
    pub fills: Vec<FillEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BlockEntry {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct FillEntry {
    pub from: BlockPos,
    pub to: BlockPos,
    pub id: String,
}

impl WorldSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid world snapshot")
    }

    /// Fills are applied before single blocks
    pub fn into_world(self) -> MemoryWorld {
        let mut world = MemoryWorld::new();
        world.set_all_loaded(self.all_loaded);
        for (rx, rz) in self.loaded_regions {
            world.load_region(rx, rz);
        }
        for fill in &self.fills {
            world.fill(fill.from, fill.to, &fill.id);
        }
        for block in self.blocks {
            world.set_block(BlockPos::new(block.x, block.y, block.z), block.id);
        }
        world
    }
}
