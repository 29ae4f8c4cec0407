//! Grid coordinates and their world-space conversions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CELL_SPAN, DUNGEON_CENTER_ORIGIN, DUNGEON_END, DUNGEON_ORIGIN, GRID_SIZE, HALF_GRID_SIZE,
};

/// One of the 36 room positions
///
/// Ordering is by `x` then `z`, which makes it usable as the "smaller
/// coordinate first" rule when canonicalising door pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: u8,
    pub z: u8,
}

impl CellPos {
    /// Create a cell position; `None` outside the grid
    pub fn new(x: u8, z: u8) -> Option<Self> {
        let size = GRID_SIZE as u8;
        (x < size && z < size).then_some(Self { x, z })
    }

    /// All 36 cells, x-major
    pub fn all() -> impl Iterator<Item = CellPos> {
        (0..GRID_SIZE as u8).flat_map(|x| (0..GRID_SIZE as u8).map(move |z| CellPos { x, z }))
    }

    /// World (x, z) of the cell's center column
    pub const fn world_center(self) -> (i32, i32) {
        (
            DUNGEON_CENTER_ORIGIN + self.x as i32 * CELL_SPAN,
            DUNGEON_CENTER_ORIGIN + self.z as i32 * CELL_SPAN,
        )
    }

    /// World (x, z) of the cell's north-west corner
    pub const fn world_corner(self) -> (i32, i32) {
        (
            DUNGEON_ORIGIN + self.x as i32 * CELL_SPAN,
            DUNGEON_ORIGIN + self.z as i32 * CELL_SPAN,
        )
    }

    /// Cell containing world column (x, z); `None` outside the dungeon
    ///
    /// The 1-block gap east/south of a room belongs to that room's cell.
    pub fn from_world(x: i32, z: i32) -> Option<Self> {
        let inside = |v: i32| (DUNGEON_ORIGIN..DUNGEON_END).contains(&v);
        if !inside(x) || !inside(z) {
            return None;
        }
        let max = GRID_SIZE as i32 - 1;
        let to_cell = |v: i32| ((v - DUNGEON_ORIGIN) / CELL_SPAN).clamp(0, max) as u8;
        Some(Self {
            x: to_cell(x),
            z: to_cell(z),
        })
    }

    /// The up-to-four orthogonal neighbours; diagonals are never adjacent
    pub fn neighbors(self) -> impl Iterator<Item = CellPos> {
        const STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        STEPS.into_iter().filter_map(move |(dx, dz)| {
            let x = self.x.checked_add_signed(dx)?;
            let z = self.z.checked_add_signed(dz)?;
            CellPos::new(x, z)
        })
    }

    /// Whether two cells share an edge
    pub fn is_adjacent(self, other: CellPos) -> bool {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z) == 1
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Position in the 11×11 half-resolution grid
///
/// Even/even positions are cells, positions with exactly one odd coordinate
/// are the boundaries between two orthogonally adjacent cells, odd/odd
/// positions are the corners where four cells meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HalfPos {
    pub x: u8,
    pub z: u8,
}

impl HalfPos {
    pub fn new(x: u8, z: u8) -> Option<Self> {
        let size = HALF_GRID_SIZE as u8;
        (x < size && z < size).then_some(Self { x, z })
    }

    /// Every boundary midpoint between two cells (60 of them)
    pub fn boundaries() -> impl Iterator<Item = HalfPos> {
        let size = HALF_GRID_SIZE as u8;
        (0..size)
            .flat_map(move |x| (0..size).map(move |z| HalfPos { x, z }))
            .filter(|p| p.is_boundary())
    }

    pub const fn is_cell(self) -> bool {
        self.x % 2 == 0 && self.z % 2 == 0
    }

    pub const fn is_boundary(self) -> bool {
        (self.x % 2 == 1) != (self.z % 2 == 1)
    }

    /// The two cells a boundary separates, smaller first
    pub fn separated_cells(self) -> Option<(CellPos, CellPos)> {
        if !self.is_boundary() {
            return None;
        }
        let a = CellPos::new(self.x / 2, self.z / 2)?;
        let b = if self.x % 2 == 1 {
            CellPos::new(self.x / 2 + 1, self.z / 2)?
        } else {
            CellPos::new(self.x / 2, self.z / 2 + 1)?
        };
        Some((a, b))
    }

    /// World (x, z) this position samples; boundaries land on the gap column
    pub const fn world(self) -> (i32, i32) {
        let step = CELL_SPAN / 2;
        (
            DUNGEON_CENTER_ORIGIN + self.x as i32 * step,
            DUNGEON_CENTER_ORIGIN + self.z as i32 * step,
        )
    }
}
