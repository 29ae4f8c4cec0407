//! Room orientation
//!
//! Every room carries one marker block on its roof at the corner that is the
//! catalog's origin. Which of the four corners holds it gives the rotation;
//! the marker's column becomes the room's origin corner.

use crate::block::ROTATION_MARKER;
use crate::consts::{HALF_ROOM_SIZE, ROTATION_COMMON_LEVELS, ROTATION_PROBE_OFFSETS};
use crate::dungeon::{Room, Rotation};
use crate::fingerprint::roof_height;
use crate::world::{BlockPos, WorldSource};

/// Corner offsets from a cell center, in rotation order: NW, NE, SE, SW
pub const CORNER_OFFSETS: [(i32, i32); 4] = [
    (-HALF_ROOM_SIZE, -HALF_ROOM_SIZE),
    (HALF_ROOM_SIZE, -HALF_ROOM_SIZE),
    (HALF_ROOM_SIZE, HALF_ROOM_SIZE),
    (-HALF_ROOM_SIZE, HALF_ROOM_SIZE),
];

/// Y levels probed for the marker, roof-relative first
fn probe_levels(roof: i32) -> impl Iterator<Item = i32> {
    ROTATION_PROBE_OFFSETS
        .into_iter()
        .map(move |offset| roof + offset)
        .chain(ROTATION_COMMON_LEVELS)
}

/// Resolve `room`'s rotation and origin corner
///
/// A room that is already oriented is returned as is without touching the
/// world. When no component shows a marker the room falls back to 0° with
/// its origin at the bounding box's north-west corner, but only when
/// `settled` says no further component can appear and every probed region
/// is loaded. Until then the rotation stays unset so a later tick can retry.
pub fn detect_rotation<W: WorldSource + ?Sized>(
    world: &W,
    room: &mut Room,
    settled: bool,
) -> Option<Rotation> {
    if let Some(rotation) = room.rotation() {
        return Some(rotation);
    }

    let cells = room.components().to_vec();
    let mut fully_probed = true;

    for cell in cells {
        let (cx, cz) = cell.world_center();
        if !world.is_region_loaded(cx, cz) {
            fully_probed = false;
            continue;
        }
        let Some(roof) = roof_height(world, cx, cz) else {
            continue;
        };

        for (index, &(dx, dz)) in CORNER_OFFSETS.iter().enumerate() {
            let (x, z) = (cx + dx, cz + dz);
            if !world.is_region_loaded(x, z) {
                fully_probed = false;
                continue;
            }
            let found = probe_levels(roof)
                .any(|y| world.block_id(BlockPos::new(x, y, z)) == ROTATION_MARKER);
            if found {
                let rotation = Rotation::from_index(index)?;
                room.set_orientation(rotation, (x, z));
                log::debug!("{} at {cell} faces {rotation} (marker at {x}, {z})", room.name);
                return Some(rotation);
            }
        }
    }

    if !fully_probed || !settled {
        log::trace!("{}: rotation marker not found yet", room.name);
        return None;
    }

    let origin = room.bounding_min().world_corner();
    room.set_orientation(Rotation::Deg0, origin);
    log::debug!("{}: no rotation marker, defaulting to 0°", room.name);
    Some(Rotation::Deg0)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::catalog::{CatalogEntry, RoomKind};
    use crate::dungeon::CellPos;
    use crate::fingerprint::Fingerprint;
    use crate::world::MemoryWorld;

    struct CountingWorld {
        inner: MemoryWorld,
        samples: Cell<usize>,
    }

    impl WorldSource for CountingWorld {
        fn block_id(&self, pos: BlockPos) -> &str {
            self.samples.set(self.samples.get() + 1);
            self.inner.block_id(pos)
        }

        fn is_region_loaded(&self, x: i32, z: i32) -> bool {
            self.inner.is_region_loaded(x, z)
        }
    }

    fn cell(x: u8, z: u8) -> CellPos {
        CellPos::new(x, z).unwrap()
    }

    fn room_at(cell: CellPos) -> Room {
        Room::from_entry(&CatalogEntry::new("Room", RoomKind::Normal), Fingerprint(1), cell)
    }

    /// Solid roof at y=100 over the cell center
    fn world_with_roof(c: CellPos) -> MemoryWorld {
        let mut world = MemoryWorld::fully_loaded();
        let (x, z) = c.world_center();
        world.set_block(BlockPos::new(x, 100, z), "minecraft:stone");
        world
    }

    #[test]
    fn test_marker_corner_sets_rotation_and_origin() {
        let c = cell(2, 2);
        let (x, z) = c.world_center();
        for (index, &(dx, dz)) in CORNER_OFFSETS.iter().enumerate() {
            let mut world = world_with_roof(c);
            world.set_block(BlockPos::new(x + dx, 100, z + dz), ROTATION_MARKER);
            let mut room = room_at(c);
            let expected = Rotation::from_index(index);
            assert_eq!(detect_rotation(&world, &mut room, true), expected);
            assert_eq!(room.origin_corner(), Some((x + dx, z + dz)));
        }
    }

    #[test]
    fn test_marker_below_roof_found() {
        let c = cell(0, 3);
        let (x, z) = c.world_center();
        let mut world = world_with_roof(c);
        world.set_block(BlockPos::new(x + 15, 99, z + 15), ROTATION_MARKER);
        let mut room = room_at(c);
        assert_eq!(detect_rotation(&world, &mut room, true), Some(Rotation::Deg180));
    }

    #[test]
    fn test_marker_at_common_level_found() {
        let c = cell(1, 1);
        let (x, z) = c.world_center();
        let mut world = world_with_roof(c);
        world.set_block(BlockPos::new(x - 15, 69, z + 15), ROTATION_MARKER);
        let mut room = room_at(c);
        assert_eq!(detect_rotation(&world, &mut room, true), Some(Rotation::Deg270));
    }

    #[test]
    fn test_fallback_uses_bounding_min_corner() {
        let world = world_with_roof(cell(3, 1));
        let mut room = room_at(cell(3, 1));
        room.add_component(cell(3, 2));
        assert_eq!(detect_rotation(&world, &mut room, true), Some(Rotation::Deg0));
        assert_eq!(room.origin_corner(), Some(cell(3, 1).world_corner()));
    }

    #[test]
    fn test_unloaded_component_defers() {
        let world = MemoryWorld::new();
        let mut room = room_at(cell(0, 0));
        assert_eq!(detect_rotation(&world, &mut room, true), None);
        assert!(!room.is_oriented());
    }

    #[test]
    fn test_unsettled_room_defers_fallback() {
        let world = world_with_roof(cell(0, 0));
        let mut room = room_at(cell(0, 0));
        assert_eq!(detect_rotation(&world, &mut room, false), None);
        assert!(!room.is_oriented());
        assert_eq!(detect_rotation(&world, &mut room, true), Some(Rotation::Deg0));
    }

    #[test]
    fn test_marker_wins_while_unsettled() {
        let c = cell(5, 0);
        let (x, z) = c.world_center();
        let mut world = world_with_roof(c);
        world.set_block(BlockPos::new(x - 15, 100, z + 15), ROTATION_MARKER);
        let mut room = room_at(c);
        assert_eq!(detect_rotation(&world, &mut room, false), Some(Rotation::Deg270));
    }

    #[test]
    fn test_second_call_does_not_sample() {
        let c = cell(4, 4);
        let (x, z) = c.world_center();
        let mut inner = world_with_roof(c);
        inner.set_block(BlockPos::new(x + 15, 100, z - 15), ROTATION_MARKER);
        let world = CountingWorld {
            inner,
            samples: Cell::new(0),
        };

        let mut room = room_at(c);
        let first = detect_rotation(&world, &mut room, false);
        assert!(world.samples.get() > 0);

        world.samples.set(0);
        let second = detect_rotation(&world, &mut room, false);
        assert_eq!(first, second);
        assert_eq!(first, Some(Rotation::Deg90));
        assert_eq!(world.samples.get(), 0);
    }
}
