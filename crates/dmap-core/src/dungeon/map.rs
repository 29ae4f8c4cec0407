//! Room arena plus grid occupancy
//!
//! Rooms live in an arena and the grid stores arena ids, so merging two rooms
//! is a matter of repointing ids. Every mutation that gives a room a new cell
//! also writes that cell in the grid, which keeps "each grid cell points at a
//! room listing it as a component" true by construction.

use super::cell::CellPos;
use super::grid::Grid;
use super::room::{Room, RoomId};

#[derive(Debug, Clone, Default)]
pub struct DungeonMap {
    grid: Grid,
    rooms: Vec<Option<Room>>,
}

impl DungeonMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn room_id_at(&self, cell: CellPos) -> Option<RoomId> {
        self.grid.get_room(cell)
    }

    pub fn room_at(&self, cell: CellPos) -> Option<&Room> {
        self.room_id_at(cell).and_then(|id| self.room(id))
    }

    pub fn has_room(&self, cell: CellPos) -> bool {
        self.grid.has_room(cell)
    }

    /// Room whose cell contains world column (x, z)
    pub fn room_at_world(&self, x: i32, z: i32) -> Option<&Room> {
        CellPos::from_world(x, z).and_then(|cell| self.room_at(cell))
    }

    /// Every distinct room on the grid, in cell order
    pub fn all_rooms(&self) -> Vec<(RoomId, &Room)> {
        self.grid
            .room_ids()
            .into_iter()
            .filter_map(|id| self.room(id).map(|room| (id, room)))
            .collect()
    }

    /// Live rooms in arena order
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|room| (RoomId(index), room)))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.iter().flatten().count()
    }

    /// Whether both cells are held by the same room
    pub fn same_room(&self, a: CellPos, b: CellPos) -> bool {
        matches!((self.room_id_at(a), self.room_id_at(b)), (Some(x), Some(y)) if x == y)
    }

    /// Add a room and claim all of its cells
    pub(crate) fn insert_room(&mut self, room: Room) -> RoomId {
        let id = RoomId(self.rooms.len());
        for &cell in room.components() {
            self.grid.set_room(cell, id);
        }
        self.rooms.push(Some(room));
        id
    }

    /// Give `cell` to an existing room
    pub(crate) fn attach(&mut self, id: RoomId, cell: CellPos) -> bool {
        let Some(room) = self.room_mut(id) else {
            return false;
        };
        room.add_component(cell);
        self.grid.set_room(cell, id);
        true
    }

    /// Fold `absorbed` into `keep`; `absorbed` stops existing
    pub(crate) fn merge(&mut self, keep: RoomId, absorbed: RoomId) -> bool {
        if keep == absorbed || self.room(keep).is_none() {
            return false;
        }
        let Some(other) = self.rooms.get_mut(absorbed.0).and_then(Option::take) else {
            return false;
        };
        if let Some(room) = self.room_mut(keep) {
            room.absorb(other);
        }
        self.grid.repoint(absorbed, keep);
        true
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.rooms.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, z: u8) -> CellPos {
        CellPos::new(x, z).unwrap()
    }

    #[test]
    fn test_insert_claims_cells() {
        let mut map = DungeonMap::new();
        let id = map.insert_room(Room::unknown(cell(1, 1), None));
        assert_eq!(map.room_id_at(cell(1, 1)), Some(id));
        assert_eq!(map.room_count(), 1);
    }

    #[test]
    fn test_attach_updates_room_and_grid() {
        let mut map = DungeonMap::new();
        let id = map.insert_room(Room::unknown(cell(1, 1), None));
        assert!(map.attach(id, cell(1, 2)));
        assert!(map.same_room(cell(1, 1), cell(1, 2)));
        assert_eq!(map.room(id).unwrap().components().len(), 2);
    }

    #[test]
    fn test_merge_repoints_and_removes() {
        let mut map = DungeonMap::new();
        let a = map.insert_room(Room::unknown(cell(0, 0), None));
        let b = map.insert_room(Room::unknown(cell(0, 1), None));
        map.attach(b, cell(0, 2));
        assert!(map.merge(a, b));
        assert!(map.room(b).is_none());
        assert_eq!(map.room_count(), 1);
        assert_eq!(map.room_id_at(cell(0, 2)), Some(a));
        assert_eq!(map.room(a).unwrap().components().len(), 3);
        assert!(!map.merge(a, b));
        assert!(!map.merge(a, a));
    }

    #[test]
    fn test_all_rooms_deduplicates() {
        let mut map = DungeonMap::new();
        let a = map.insert_room(Room::unknown(cell(0, 0), None));
        map.attach(a, cell(1, 0));
        map.insert_room(Room::unknown(cell(4, 4), None));
        assert_eq!(map.all_rooms().len(), 2);
    }

    #[test]
    fn test_room_at_world() {
        let mut map = DungeonMap::new();
        map.insert_room(Room::unknown(cell(2, 3), None));
        let (x, z) = cell(2, 3).world_center();
        assert!(map.room_at_world(x + 10, z - 10).is_some());
        assert!(map.room_at_world(0, 0).is_none());
    }
}
