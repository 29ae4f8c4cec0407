//! Room catalog
//!
//! The catalog is a fixed table of every room the dungeon can place, keyed by
//! the fingerprints ("cores") of its cell columns. The scanner only reads it.
//!
//! On-disk shape:
//!
//! ```json
//! [{ "name": "Library", "type": "NORMAL", "secrets": 3, "shape": "1x2", "cores": [123, 456] }]
//! ```

use std::io::Read;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::errors::CatalogError;
use crate::fingerprint::Fingerprint;

/// Room category as listed in the catalog
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomKind {
    Entrance,
    #[default]
    Normal,
    Puzzle,
    Trap,
    #[serde(alias = "YELLOW")]
    Miniboss,
    Fairy,
    Blood,
    Rare,
    Champion,
    /// Occupied space whose fingerprint is not in the catalog
    Unknown,
}

impl RoomKind {
    /// Single character used by map dumps
    pub const fn symbol(self) -> char {
        match self {
            RoomKind::Entrance => 'E',
            RoomKind::Normal => '#',
            RoomKind::Puzzle => 'P',
            RoomKind::Trap => 'T',
            RoomKind::Miniboss => 'M',
            RoomKind::Fairy => 'F',
            RoomKind::Blood => 'B',
            RoomKind::Rare => 'R',
            RoomKind::Champion => 'C',
            RoomKind::Unknown => '?',
        }
    }
}

/// Footprint of a room in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RoomShape {
    #[serde(rename = "1x1")]
    #[strum(serialize = "1x1")]
    OneByOne,
    #[serde(rename = "1x2")]
    #[strum(serialize = "1x2")]
    OneByTwo,
    #[serde(rename = "1x3")]
    #[strum(serialize = "1x3")]
    OneByThree,
    #[serde(rename = "1x4")]
    #[strum(serialize = "1x4")]
    OneByFour,
    #[serde(rename = "2x2")]
    #[strum(serialize = "2x2")]
    TwoByTwo,
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    L,
}

impl RoomShape {
    /// Number of grid cells the shape occupies
    pub const fn cell_count(self) -> usize {
        match self {
            RoomShape::OneByOne => 1,
            RoomShape::OneByTwo => 2,
            RoomShape::OneByThree => 3,
            RoomShape::OneByFour | RoomShape::TwoByTwo => 4,
            RoomShape::L => 3,
        }
    }
}

/// Metadata for one catalog room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    #[serde(default)]
    pub secrets: u32,
    #[serde(default)]
    pub shape: Option<RoomShape>,
    #[serde(default)]
    pub cores: Vec<Fingerprint>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            name: name.into(),
            kind,
            secrets: 0,
            shape: None,
            cores: Vec::new(),
        }
    }

    pub fn with_secrets(mut self, secrets: u32) -> Self {
        self.secrets = secrets;
        self
    }

    pub fn with_shape(mut self, shape: RoomShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_core(mut self, core: Fingerprint) -> Self {
        self.cores.push(core);
        self
    }
}

/// Read-only fingerprint lookup
pub trait RoomCatalog {
    fn lookup(&self, core: Fingerprint) -> Option<&CatalogEntry>;
}

impl<C: RoomCatalog + ?Sized> RoomCatalog for &C {
    fn lookup(&self, core: Fingerprint) -> Option<&CatalogEntry> {
        (**self).lookup(core)
    }
}

/// Catalog held in memory, indexed by every core of every entry
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
    by_core: HashMap<Fingerprint, usize>,
}

impl StaticCatalog {
    /// Build the index
    ///
    /// A core listed twice under the same room name is tolerated; a core
    /// claimed by two differently named rooms is an error.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut by_core: HashMap<Fingerprint, usize> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            for &core in &entry.cores {
                match by_core.get(&core) {
                    Some(&existing) if entries[existing].name == entry.name => {
                        log::warn!("catalog lists core {core} twice for '{}'", entry.name);
                    }
                    Some(&existing) => {
                        return Err(CatalogError::DuplicateCore {
                            core: core.value(),
                            first: entries[existing].name.clone(),
                            second: entry.name.clone(),
                        });
                    }
                    None => {
                        by_core.insert(core, index);
                    }
                }
            }
        }
        Ok(Self { entries, by_core })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_entries(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_entries(serde_json::from_reader(reader)?)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry_named(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct cores indexed
    pub fn core_count(&self) -> usize {
        self.by_core.len()
    }
}

impl RoomCatalog for StaticCatalog {
    fn lookup(&self, core: Fingerprint) -> Option<&CatalogEntry> {
        self.by_core.get(&core).map(|&index| &self.entries[index])
    }
}
