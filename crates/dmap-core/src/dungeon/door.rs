//! Door registry
//!
//! Doors are keyed by the unordered pair of cells they connect. Entries are
//! write-once: a later scan can add a missing door but never changes one.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::cell::CellPos;

/// Passage classification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum DoorType {
    /// No passage recorded
    #[default]
    None,
    Normal,
    Entrance,
    /// Locked door opened with a wither key
    Wither,
    /// Locked door into the blood room
    Blood,
}

impl DoorType {
    pub const fn is_locked(self) -> bool {
        matches!(self, DoorType::Wither | DoorType::Blood)
    }

    pub const fn symbol(self) -> char {
        match self {
            DoorType::None => ' ',
            DoorType::Normal => '+',
            DoorType::Entrance => 'e',
            DoorType::Wither => 'w',
            DoorType::Blood => 'b',
        }
    }
}

/// Order-independent pair of adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoorKey {
    a: CellPos,
    b: CellPos,
}

impl DoorKey {
    /// Canonical key, smaller cell first; `None` unless the cells share an edge
    pub fn new(a: CellPos, b: CellPos) -> Option<Self> {
        if !a.is_adjacent(b) {
            return None;
        }
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Some(Self { a, b })
    }

    pub fn cells(&self) -> (CellPos, CellPos) {
        (self.a, self.b)
    }
}

/// Recorded doors for one session
#[derive(Debug, Clone, Default)]
pub struct DoorRegistry {
    doors: HashMap<DoorKey, DoorType>,
}

impl DoorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a door unless one already exists; `DoorType::None` is never stored
    ///
    /// Returns whether the entry was added.
    pub fn record(&mut self, key: DoorKey, door: DoorType) -> bool {
        if door == DoorType::None || self.doors.contains_key(&key) {
            return false;
        }
        self.doors.insert(key, door);
        true
    }

    pub fn contains(&self, key: DoorKey) -> bool {
        self.doors.contains_key(&key)
    }

    /// Door between two cells in either order
    pub fn door_type(&self, a: CellPos, b: CellPos) -> DoorType {
        DoorKey::new(a, b)
            .and_then(|key| self.doors.get(&key).copied())
            .unwrap_or_default()
    }

    /// All doors, sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (DoorKey, DoorType)> {
        let mut doors: Vec<_> = self.doors.iter().map(|(&k, &t)| (k, t)).collect();
        doors.sort_unstable_by_key(|&(key, _)| key);
        doors.into_iter()
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn clear(&mut self) {
        self.doors.clear();
    }
}
