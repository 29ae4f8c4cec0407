//! Identified rooms
//!
//! A room occupies one or more grid cells ("components"). Its rotation and
//! origin corner describe how the catalog's room-relative coordinates map onto
//! the world, which is what puzzle solvers need to locate fixtures.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::catalog::{CatalogEntry, RoomKind, RoomShape};
use crate::fingerprint::Fingerprint;

use super::cell::CellPos;

/// Name given to rooms whose fingerprint is not in the catalog
pub const UNKNOWN_ROOM_NAME: &str = "Unknown";

/// Stable arena index of a room within one scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Clockwise rotation of a room relative to its catalog orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Rotation {
    #[strum(serialize = "0°")]
    Deg0,
    #[strum(serialize = "90°")]
    Deg90,
    #[strum(serialize = "180°")]
    Deg180,
    #[strum(serialize = "270°")]
    Deg270,
}

impl Rotation {
    /// Rotation for the n-th marker corner (NW, NE, SE, SW)
    pub const fn from_index(index: usize) -> Option<Rotation> {
        match index {
            0 => Some(Rotation::Deg0),
            1 => Some(Rotation::Deg90),
            2 => Some(Rotation::Deg180),
            3 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub const fn inverse(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }

    /// Rotate an (x, z) offset clockwise as seen from above
    pub const fn apply(self, x: i32, z: i32) -> (i32, i32) {
        match self {
            Rotation::Deg0 => (x, z),
            Rotation::Deg90 => (-z, x),
            Rotation::Deg180 => (-x, -z),
            Rotation::Deg270 => (z, -x),
        }
    }
}

/// A room placed in the dungeon grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub kind: RoomKind,
    pub secrets: u32,
    pub shape: Option<RoomShape>,
    /// Fingerprint that identified the room
    pub core: Option<Fingerprint>,
    components: Vec<CellPos>,
    rotation: Option<Rotation>,
    origin: Option<(i32, i32)>,
}

impl Room {
    /// Room identified from a catalog entry
    pub fn from_entry(entry: &CatalogEntry, core: Fingerprint, cell: CellPos) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.kind,
            secrets: entry.secrets,
            shape: entry.shape,
            core: Some(core),
            components: vec![cell],
            rotation: None,
            origin: None,
        }
    }

    /// Placeholder for occupied space the catalog does not know
    pub fn unknown(cell: CellPos, core: Option<Fingerprint>) -> Self {
        Self {
            name: UNKNOWN_ROOM_NAME.to_string(),
            kind: RoomKind::Unknown,
            secrets: 0,
            shape: None,
            core,
            components: vec![cell],
            rotation: None,
            origin: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == RoomKind::Unknown
    }

    /// Occupied cells; never empty
    pub fn components(&self) -> &[CellPos] {
        &self.components
    }

    /// Add a cell; the caller repoints the grid in the same step
    pub(crate) fn add_component(&mut self, cell: CellPos) {
        if !self.components.contains(&cell) {
            self.components.push(cell);
            self.components.sort_unstable();
        }
    }

    /// Whether any component shares an edge with any of `other`'s
    pub fn touches(&self, other: &Room) -> bool {
        self.components
            .iter()
            .any(|&a| other.components.iter().any(|&b| a.is_adjacent(b)))
    }

    /// All components of the expected shape have been discovered
    ///
    /// A room without a known shape is never complete; its extent can only
    /// be judged from the cells around it.
    pub fn is_complete(&self) -> bool {
        self.shape
            .is_some_and(|shape| self.components.len() >= shape.cell_count())
    }

    /// Cell at the minimum corner of the components' bounding box
    pub fn bounding_min(&self) -> CellPos {
        let x = self.components.iter().map(|c| c.x).min().unwrap_or(0);
        let z = self.components.iter().map(|c| c.z).min().unwrap_or(0);
        CellPos { x, z }
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    /// World (x, z) that room-relative coordinates are measured from
    pub fn origin_corner(&self) -> Option<(i32, i32)> {
        self.origin
    }

    pub fn is_oriented(&self) -> bool {
        self.rotation.is_some()
    }

    /// Record the orientation; the first one recorded wins
    pub(crate) fn set_orientation(&mut self, rotation: Rotation, origin: (i32, i32)) -> bool {
        if self.rotation.is_some() {
            return false;
        }
        self.rotation = Some(rotation);
        self.origin = Some(origin);
        true
    }

    /// Take `other`'s cells, and its orientation if this room has none
    pub(crate) fn absorb(&mut self, other: Room) {
        for cell in other.components {
            self.add_component(cell);
        }
        if let (Some(rotation), Some(origin)) = (other.rotation, other.origin) {
            self.set_orientation(rotation, origin);
        }
    }

    /// World (x, z) to room-relative coordinates
    pub fn to_relative(&self, x: i32, z: i32) -> Option<(i32, i32)> {
        let rotation = self.rotation?;
        let (ox, oz) = self.origin?;
        Some(rotation.inverse().apply(x - ox, z - oz))
    }

    /// Room-relative coordinates to world (x, z)
    pub fn to_world(&self, rx: i32, rz: i32) -> Option<(i32, i32)> {
        let rotation = self.rotation?;
        let (ox, oz) = self.origin?;
        let (dx, dz) = rotation.apply(rx, rz);
        Some((ox + dx, oz + dz))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, z: u8) -> CellPos {
        CellPos::new(x, z).unwrap()
    }

    fn library(cell: CellPos) -> Room {
        let entry = CatalogEntry::new("Library", RoomKind::Normal)
            .with_secrets(3)
            .with_shape(RoomShape::OneByTwo);
        Room::from_entry(&entry, Fingerprint(7), cell)
    }

    #[test]
    fn test_from_entry_copies_metadata() {
        let room = library(cell(2, 2));
        assert_eq!(room.name, "Library");
        assert_eq!(room.secrets, 3);
        assert_eq!(room.components(), &[cell(2, 2)]);
        assert!(!room.is_oriented());
        assert!(!room.is_complete());
    }

    #[test]
    fn test_unknown_placeholder() {
        let room = Room::unknown(cell(0, 0), None);
        assert!(room.is_unknown());
        assert_eq!(room.name, UNKNOWN_ROOM_NAME);
        assert_eq!(room.secrets, 0);
        assert!(!room.is_complete());
    }

    #[test]
    fn test_add_component_dedups() {
        let mut room = library(cell(3, 2));
        room.add_component(cell(2, 2));
        room.add_component(cell(2, 2));
        assert_eq!(room.components(), &[cell(2, 2), cell(3, 2)]);
        assert!(room.is_complete());
    }

    #[test]
    fn test_touches_ignores_diagonals() {
        let a = library(cell(1, 1));
        let b = library(cell(2, 2));
        let c = library(cell(1, 2));
        assert!(!a.touches(&b));
        assert!(a.touches(&c));
        assert!(b.touches(&c));
    }

    #[test]
    fn test_first_orientation_wins() {
        let mut room = library(cell(0, 0));
        assert!(room.set_orientation(Rotation::Deg90, (1, 2)));
        assert!(!room.set_orientation(Rotation::Deg180, (3, 4)));
        assert_eq!(room.rotation(), Some(Rotation::Deg90));
        assert_eq!(room.origin_corner(), Some((1, 2)));
    }

    #[test]
    fn test_absorb_keeps_existing_orientation() {
        let mut a = library(cell(0, 0));
        let mut b = library(cell(1, 0));
        b.set_orientation(Rotation::Deg270, (5, 5));
        a.absorb(b.clone());
        assert_eq!(a.rotation(), Some(Rotation::Deg270));
        assert_eq!(a.components().len(), 2);

        let mut c = library(cell(2, 0));
        c.set_orientation(Rotation::Deg0, (0, 0));
        c.absorb(a);
        assert_eq!(c.rotation(), Some(Rotation::Deg0));
    }

    #[test]
    fn test_relative_coordinates() {
        let mut room = library(cell(0, 0));
        assert_eq!(room.to_world(1, 0), None);

        // North-east corner marker: room extends west (-x) and south (+z)
        room.set_orientation(Rotation::Deg90, (-170, -200));
        assert_eq!(room.to_world(0, 0), Some((-170, -200)));
        assert_eq!(room.to_world(3, 0), Some((-170, -197)));
        assert_eq!(room.to_world(0, 3), Some((-173, -200)));
        assert_eq!(room.to_relative(-173, -197), Some((3, 3)));
    }

    #[test]
    fn test_rotation_inverse() {
        use strum::IntoEnumIterator;
        for rotation in Rotation::iter() {
            let (x, z) = rotation.apply(4, -7);
            assert_eq!(rotation.inverse().apply(x, z), (4, -7));
        }
        assert_eq!(Rotation::from_index(2).map(Rotation::degrees), Some(180));
        assert_eq!(Rotation::from_index(4), None);
    }

    #[test]
    fn test_bounding_min_of_l_shape() {
        let mut room = library(cell(1, 0));
        room.add_component(cell(0, 1));
        room.add_component(cell(1, 1));
        assert_eq!(room.bounding_min(), cell(0, 0));
    }
}
