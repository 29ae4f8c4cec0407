//! Passage classification
//!
//! Doors sit on the 1-block gap between two cells. Each boundary midpoint of
//! the half-resolution grid is sampled once both neighbouring cells hold
//! different rooms: a 3×3 patch at door height is counted for the special
//! door materials, and anything else with a low roof and open walking space is
//! a plain doorway.

use crate::block;
use crate::consts::{
    BLOOD_MARKER_THRESHOLD, DOOR_SAMPLE_Y, ENTRANCE_MARKER_THRESHOLD, PASSAGE_MAX_HEIGHT,
    PASSAGE_MIN_HEIGHT, WALKING_HEIGHT_OFFSET, WITHER_MARKER_THRESHOLD,
};
use crate::dungeon::{DoorKey, DoorRegistry, DoorType, DungeonMap, HalfPos};
use crate::fingerprint::roof_height;
use crate::world::{BlockPos, WorldSource};

/// Marker hits in the 3×3 sample around a boundary midpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerCounts {
    pub entrance: usize,
    pub wither: usize,
    pub blood: usize,
}

impl MarkerCounts {
    /// Count markers at door height around (x, z)
    pub fn sample<W: WorldSource + ?Sized>(world: &W, x: i32, z: i32) -> Self {
        let mut counts = Self::default();
        for dx in -1..=1 {
            for dz in -1..=1 {
                let id = world.block_id(BlockPos::new(x + dx, DOOR_SAMPLE_Y, z + dz));
                if block::is_entrance_marker(id) {
                    counts.entrance += 1;
                } else if block::is_wither_marker(id) {
                    counts.wither += 1;
                } else if block::is_blood_marker(id) {
                    counts.blood += 1;
                }
            }
        }
        counts
    }

    /// Door type implied by the counts alone, if any
    pub fn classify(&self) -> Option<DoorType> {
        if self.entrance >= ENTRANCE_MARKER_THRESHOLD {
            Some(DoorType::Entrance)
        } else if self.wither >= WITHER_MARKER_THRESHOLD {
            Some(DoorType::Wither)
        } else if self.blood >= BLOOD_MARKER_THRESHOLD {
            Some(DoorType::Blood)
        } else {
            None
        }
    }
}

/// Classify the passage through world column (x, z)
///
/// Returns `DoorType::None` when nothing passable is there.
pub fn classify_passage<W: WorldSource + ?Sized>(world: &W, x: i32, z: i32) -> DoorType {
    if let Some(door) = MarkerCounts::sample(world, x, z).classify() {
        return door;
    }

    let walking = BlockPos::new(x, DOOR_SAMPLE_Y + WALKING_HEIGHT_OFFSET, z);
    let open = block::is_empty(world.block_id(walking));
    let low_roof = roof_height(world, x, z)
        .is_some_and(|height| (PASSAGE_MIN_HEIGHT..PASSAGE_MAX_HEIGHT).contains(&height));

    if open && low_roof {
        DoorType::Normal
    } else {
        DoorType::None
    }
}

/// Whether every column the 3×3 sample touches is loaded
fn sample_loaded<W: WorldSource + ?Sized>(world: &W, x: i32, z: i32) -> bool {
    [(-1, -1), (1, -1), (-1, 1), (1, 1)]
        .into_iter()
        .all(|(dx, dz)| world.is_region_loaded(x + dx, z + dz))
}

/// Classify every resolvable boundary not yet in `doors`
///
/// Boundaries are skipped while either side is empty, when both sides are
/// the same room, or while the sample area is unloaded. Existing entries are
/// never touched. Returns how many doors were added.
pub fn scan_all_doors<W: WorldSource + ?Sized>(
    world: &W,
    map: &DungeonMap,
    doors: &mut DoorRegistry,
) -> usize {
    let mut added = 0;

    for boundary in HalfPos::boundaries() {
        let Some((a, b)) = boundary.separated_cells() else {
            continue;
        };
        let (Some(room_a), Some(room_b)) = (map.room_id_at(a), map.room_id_at(b)) else {
            continue;
        };
        if room_a == room_b {
            continue;
        }
        let Some(key) = DoorKey::new(a, b) else {
            continue;
        };
        if doors.contains(key) {
            continue;
        }

        let (x, z) = boundary.world();
        if !sample_loaded(world, x, z) {
            continue;
        }

        let door = classify_passage(world, x, z);
        if doors.record(key, door) {
            log::debug!("{door} door between {a} and {b}");
            added += 1;
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryWorld;

    const X: i32 = -105;
    const Z: i32 = -121;

    fn place_markers(world: &mut MemoryWorld, id: &str, n: usize) {
        let spots = (-1..=1).flat_map(|dx| (-1..=1).map(move |dz| (dx, dz)));
        for (dx, dz) in spots.take(n) {
            world.set_block(BlockPos::new(X + dx, DOOR_SAMPLE_Y, Z + dz), id);
        }
    }

    #[test]
    fn test_wither_threshold() {
        let mut world = MemoryWorld::fully_loaded();
        place_markers(&mut world, "minecraft:coal_block", 1);
        assert_eq!(classify_passage(&world, X, Z), DoorType::None);
        place_markers(&mut world, "minecraft:coal_block", 2);
        assert_eq!(classify_passage(&world, X, Z), DoorType::Wither);
    }

    #[test]
    fn test_blood_needs_four() {
        let mut world = MemoryWorld::fully_loaded();
        place_markers(&mut world, block::BLOOD_MARKER, 3);
        assert_eq!(classify_passage(&world, X, Z), DoorType::None);
        place_markers(&mut world, block::BLOOD_MARKER, 4);
        assert_eq!(classify_passage(&world, X, Z), DoorType::Blood);
    }

    #[test]
    fn test_entrance_wins_over_wither() {
        let mut world = MemoryWorld::fully_loaded();
        place_markers(&mut world, "minecraft:coal_block", 9);
        world.set_block(BlockPos::new(X, DOOR_SAMPLE_Y, Z), "minecraft:infested_stone_bricks");
        world.set_block(BlockPos::new(X + 1, DOOR_SAMPLE_Y, Z), "minecraft:infested_cobblestone");
        assert_eq!(classify_passage(&world, X, Z), DoorType::Entrance);
    }

    #[test]
    fn test_plain_doorway() {
        let mut world = MemoryWorld::fully_loaded();
        world.set_block(BlockPos::new(X, 68, Z), "minecraft:stone_bricks");
        world.set_block(BlockPos::new(X, 73, Z), "minecraft:stone_bricks");
        assert_eq!(classify_passage(&world, X, Z), DoorType::Normal);
    }

    #[test]
    fn test_tall_wall_is_not_a_door() {
        let mut world = MemoryWorld::fully_loaded();
        world.set_block(BlockPos::new(X, 68, Z), "minecraft:stone_bricks");
        world.set_block(BlockPos::new(X, 100, Z), "minecraft:stone_bricks");
        assert_eq!(classify_passage(&world, X, Z), DoorType::None);
    }

    #[test]
    fn test_blocked_walking_space_is_not_a_door() {
        let mut world = MemoryWorld::fully_loaded();
        world.fill(BlockPos::new(X, 68, Z), BlockPos::new(X, 73, Z), "minecraft:stone_bricks");
        assert_eq!(classify_passage(&world, X, Z), DoorType::None);
    }

    #[test]
    fn test_empty_gap_is_not_a_door() {
        let world = MemoryWorld::fully_loaded();
        assert_eq!(classify_passage(&world, X, Z), DoorType::None);
    }

    #[test]
    fn test_counts() {
        let mut world = MemoryWorld::fully_loaded();
        place_markers(&mut world, block::BLOOD_MARKER, 5);
        let counts = MarkerCounts::sample(&world, X, Z);
        assert_eq!(
            counts,
            MarkerCounts {
                entrance: 0,
                wither: 0,
                blood: 5
            }
        );
    }
}
