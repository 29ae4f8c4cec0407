//! Block classification
//!
//! Everything the scanner knows about individual block identifiers: which ones
//! hash as empty, and which ones mark doors or a room's rotation.

pub mod legacy;

pub use legacy::{COLORS, legacy_id};

use crate::world::AIR;

/// Blocks that hash as `0`; they change at runtime (opened chests, lowered
/// bars)
pub const IGNORED: [&str; 2] = ["minecraft:iron_bars", "minecraft:chest"];

/// Marker placed on a room's roof at its rotation corner
pub const ROTATION_MARKER: &str = "minecraft:blue_terracotta";

/// Legacy id of the blocks framing the entrance door (infested blocks)
pub const ENTRANCE_MARKER_ID: u16 = 97;

/// Legacy id of the block filling a wither door
pub const WITHER_MARKER_ID: u16 = 173;

/// Block filling the blood door
pub const BLOOD_MARKER: &str = "minecraft:red_terracotta";

/// Whether the identifier hashes as empty space
pub fn is_ignored(id: &str) -> bool {
    IGNORED.contains(&id)
}

/// Air or an ignored decoration
pub fn is_empty(id: &str) -> bool {
    id == AIR
        || matches!(legacy::strip_namespace(id), "air" | "cave_air" | "void_air")
        || is_ignored(id)
}

/// Digit contributed to a fingerprint column
pub fn fingerprint_digit(id: &str) -> u16 {
    if is_ignored(id) { 0 } else { legacy_id(id) }
}

pub fn is_entrance_marker(id: &str) -> bool {
    legacy_id(id) == ENTRANCE_MARKER_ID
}

pub fn is_wither_marker(id: &str) -> bool {
    legacy_id(id) == WITHER_MARKER_ID
}

pub fn is_blood_marker(id: &str) -> bool {
    id == BLOOD_MARKER
}
