//! 6×6 cell occupancy

use crate::consts::GRID_SIZE;

use super::cell::CellPos;
use super::room::RoomId;

/// Which room, if any, occupies each cell
///
/// Multi-cell rooms appear at several cells with the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<RoomId>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_room(&mut self, cell: CellPos, room: RoomId) {
        self.cells[cell.x as usize][cell.z as usize] = Some(room);
    }

    pub fn get_room(&self, cell: CellPos) -> Option<RoomId> {
        self.cells[cell.x as usize][cell.z as usize]
    }

    pub fn has_room(&self, cell: CellPos) -> bool {
        self.get_room(cell).is_some()
    }

    /// Point every cell holding `from` at `to`; returns how many moved
    pub fn repoint(&mut self, from: RoomId, to: RoomId) -> usize {
        let mut moved = 0;
        for slot in self.cells.iter_mut().flatten() {
            if *slot == Some(from) {
                *slot = Some(to);
                moved += 1;
            }
        }
        moved
    }

    /// Distinct room ids in cell order
    pub fn room_ids(&self) -> Vec<RoomId> {
        let mut ids = Vec::new();
        for id in self.cells.iter().flatten().flatten() {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, z: u8) -> CellPos {
        CellPos::new(x, z).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        assert!(!grid.has_room(cell(1, 4)));
        grid.set_room(cell(1, 4), RoomId(3));
        assert_eq!(grid.get_room(cell(1, 4)), Some(RoomId(3)));
        assert_eq!(grid.get_room(cell(4, 1)), None);
        assert_eq!(grid.room_ids(), vec![RoomId(3)]);
    }

    #[test]
    fn test_room_ids_are_deduplicated() {
        let mut grid = Grid::new();
        grid.set_room(cell(0, 0), RoomId(0));
        grid.set_room(cell(0, 1), RoomId(0));
        grid.set_room(cell(5, 5), RoomId(1));
        assert_eq!(grid.room_ids(), vec![RoomId(0), RoomId(1)]);
    }

    #[test]
    fn test_repoint() {
        let mut grid = Grid::new();
        grid.set_room(cell(0, 0), RoomId(0));
        grid.set_room(cell(1, 0), RoomId(1));
        grid.set_room(cell(2, 0), RoomId(1));
        assert_eq!(grid.repoint(RoomId(1), RoomId(0)), 2);
        assert_eq!(grid.room_ids(), vec![RoomId(0)]);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new();
        grid.set_room(cell(3, 3), RoomId(9));
        grid.clear();
        assert!(!grid.has_room(cell(3, 3)));
        assert!(grid.room_ids().is_empty());
    }
}
