//! Room graph construction
//!
//! Cells are identified one at a time as their chunks load. A cell whose
//! catalog room matches an orthogonal neighbour's joins that room; otherwise
//! it starts a new one. Because cells of one room can be discovered out of
//! order, a separate pass later merges same-named rooms that turn out to
//! touch.

use hashbrown::HashMap;

use crate::catalog::RoomCatalog;
use crate::dungeon::{CellPos, DungeonMap, Room, RoomId};
use crate::fingerprint::{column_fingerprint, roof_height};
use crate::world::WorldSource;

use super::rotation::detect_rotation;

/// Why a cell could not be resolved on this attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferral {
    /// The chunk under the cell center is not loaded
    Unloaded,
    /// Loaded, but there is nothing in the column
    Empty,
    /// The column produced no usable fingerprint
    NoFingerprint,
}

/// Result of scanning one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// The cell already held a room; nothing was sampled beyond loadedness
    Existing(RoomId),
    /// A new catalog room was created at the cell
    Placed(RoomId),
    /// The cell joined a same-named neighbouring room
    Joined(RoomId),
    /// The fingerprint is not in the catalog; a placeholder was created
    Unknown(RoomId),
    /// Nothing changed; try again later
    Deferred(Deferral),
}

impl CellOutcome {
    /// Whether the cell now holds a room
    pub fn is_resolved(&self) -> bool {
        !matches!(self, CellOutcome::Deferred(_))
    }

    pub fn room(&self) -> Option<RoomId> {
        match *self {
            CellOutcome::Existing(id)
            | CellOutcome::Placed(id)
            | CellOutcome::Joined(id)
            | CellOutcome::Unknown(id) => Some(id),
            CellOutcome::Deferred(_) => None,
        }
    }
}

/// Identify the room at `cell` and place it in `map`
///
/// When `orient` is set, the resulting room's rotation is resolved unless it
/// already is.
pub fn scan_cell<W, C>(
    map: &mut DungeonMap,
    world: &W,
    catalog: &C,
    cell: CellPos,
    orient: bool,
) -> CellOutcome
where
    W: WorldSource + ?Sized,
    C: RoomCatalog + ?Sized,
{
    let (x, z) = cell.world_center();
    if !world.is_region_loaded(x, z) {
        return CellOutcome::Deferred(Deferral::Unloaded);
    }
    if let Some(id) = map.room_id_at(cell) {
        return CellOutcome::Existing(id);
    }
    if roof_height(world, x, z).is_none() {
        log::trace!("cell {cell} is empty so far");
        return CellOutcome::Deferred(Deferral::Empty);
    }
    let core = column_fingerprint(world, x, z);
    if !core.is_available() {
        return CellOutcome::Deferred(Deferral::NoFingerprint);
    }

    let outcome = match catalog.lookup(core) {
        Some(entry) => {
            let neighbour = cell
                .neighbors()
                .filter_map(|n| map.room_id_at(n))
                .find(|&id| map.room(id).is_some_and(|room| room.name == entry.name));
            match neighbour {
                Some(id) => {
                    map.attach(id, cell);
                    log::debug!("cell {cell} joins {} {id}", entry.name);
                    CellOutcome::Joined(id)
                }
                None => {
                    let id = map.insert_room(Room::from_entry(entry, core, cell));
                    log::debug!("cell {cell} is {} {id} (core {core})", entry.name);
                    CellOutcome::Placed(id)
                }
            }
        }
        None => {
            let id = map.insert_room(Room::unknown(cell, Some(core)));
            log::debug!("cell {cell} has uncatalogued core {core}");
            CellOutcome::Unknown(id)
        }
    };

    if orient && let Some(id) = outcome.room() {
        orient_room(map, world, id);
    }
    outcome
}

/// Resolve one room's rotation if it is still unset
///
/// The 0° fallback is only allowed once the room cannot grow any more: its
/// expected shape is filled, or every orthogonal neighbour is settled.
pub fn orient_room<W: WorldSource + ?Sized>(map: &mut DungeonMap, world: &W, id: RoomId) -> bool {
    let settled = match map.room(id) {
        Some(room) if !room.is_oriented() => {
            room.is_complete() || neighbourhood_settled(map, world, room)
        }
        _ => return false,
    };
    map.room_mut(id)
        .is_some_and(|room| detect_rotation(world, room, settled).is_some())
}

/// Whether every cell next to `room` already holds a room or can never
/// become one in the current world (loaded and empty, or no fingerprint)
fn neighbourhood_settled<W: WorldSource + ?Sized>(
    map: &DungeonMap,
    world: &W,
    room: &Room,
) -> bool {
    room.components()
        .iter()
        .flat_map(|cell| cell.neighbors())
        .all(|cell| {
            if map.has_room(cell) {
                return true;
            }
            let (x, z) = cell.world_center();
            world.is_region_loaded(x, z)
                && (roof_height(world, x, z).is_none()
                    || !column_fingerprint(world, x, z).is_available())
        })
}

/// Merge same-named rooms whose components share an edge
///
/// Unknown placeholders are never merged. Within each name group pairs are
/// merged into the lower id until no touching pair remains, so a chain
/// discovered as three separate pieces collapses in one call. Rooms that only
/// touch diagonally stay separate. Returns the number of merges.
pub fn merge_disconnected_rooms(map: &mut DungeonMap) -> usize {
    let mut groups: HashMap<String, Vec<RoomId>> = HashMap::new();
    for (id, room) in map.rooms() {
        if !room.is_unknown() {
            groups.entry(room.name.clone()).or_default().push(id);
        }
    }

    let mut merges = 0;
    for (name, mut ids) in groups {
        ids.sort_unstable();
        while let Some((keep, absorbed)) = touching_pair(map, &ids) {
            if !map.merge(ids[keep], ids[absorbed]) {
                break;
            }
            log::debug!("merged {name} {} into {}", ids[absorbed], ids[keep]);
            ids.remove(absorbed);
            merges += 1;
        }
    }
    merges
}

/// First pair (i < j) of rooms in `ids` that touch
fn touching_pair(map: &DungeonMap, ids: &[RoomId]) -> Option<(usize, usize)> {
    for (i, &a) in ids.iter().enumerate() {
        let room_a = map.room(a)?;
        for (j, &b) in ids.iter().enumerate().skip(i + 1) {
            if map.room(b).is_some_and(|room_b| room_a.touches(room_b)) {
                return Some((i, j));
            }
        }
    }
    None
}
