//! In-memory world used by tests and the command-line harness

use hashbrown::{HashMap, HashSet};

use super::{AIR, BlockPos, WorldSource, region_of};

/// Sparse block storage with chunk-granular loadedness
///
/// Unset positions read as air. Regions are unloaded until marked otherwise,
/// unless the world was created with [`MemoryWorld::fully_loaded`].
#[derive(Debug, Clone, Default)]
pub struct MemoryWorld {
    blocks: HashMap<BlockPos, String>,
    loaded: HashSet<(i32, i32)>,
    all_loaded: bool,
}

impl MemoryWorld {
    /// Create an empty world with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world where every region reports as loaded
    pub fn fully_loaded() -> Self {
        Self {
            all_loaded: true,
            ..Self::default()
        }
    }

    /// Place a block; setting air removes the entry
    pub fn set_block(&mut self, pos: BlockPos, id: impl Into<String>) {
        let id = id.into();
        if id == AIR {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, id);
        }
    }

    /// Fill the inclusive box between `from` and `to`
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, id: &str) {
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                for z in from.z.min(to.z)..=from.z.max(to.z) {
                    self.set_block(BlockPos::new(x, y, z), id);
                }
            }
        }
    }

    /// Mark the region containing column (x, z) as loaded
    pub fn load_region_at(&mut self, x: i32, z: i32) {
        self.loaded.insert(region_of(x, z));
    }

    /// Mark a region by its region coordinates
    pub fn load_region(&mut self, rx: i32, rz: i32) {
        self.loaded.insert((rx, rz));
    }

    pub fn set_all_loaded(&mut self, all_loaded: bool) {
        self.all_loaded = all_loaded;
    }

    /// Number of non-air blocks stored
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl WorldSource for MemoryWorld {
    fn block_id(&self, pos: BlockPos) -> &str {
        self.blocks.get(&pos).map(String::as_str).unwrap_or(AIR)
    }

    fn is_region_loaded(&self, x: i32, z: i32) -> bool {
        self.all_loaded || self.loaded.contains(&region_of(x, z))
    }
}
