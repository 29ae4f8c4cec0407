//! Column fingerprints
//!
//! A room is recognised by the vertical column of blocks at the center of one
//! of its cells. Each block from `COLUMN_TOP` down to `COLUMN_BOTTOM` becomes
//! its legacy id in decimal, the digits are concatenated, and the resulting
//! text is hashed with the 31-multiplier string hash the catalog was built
//! with. The value has no meaning beyond being a catalog key, so it has to
//! match that hash bit for bit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block;
use crate::consts::{COLUMN_BOTTOM, COLUMN_LEN, COLUMN_TOP};
use crate::world::{BlockPos, WorldSource};

/// Catalog lookup key derived from one block column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub i32);

impl Fingerprint {
    /// Reserved value meaning "no fingerprint available"
    pub const UNAVAILABLE: Fingerprint = Fingerprint(0);

    pub const fn value(self) -> i32 {
        self.0
    }

    pub const fn is_available(self) -> bool {
        self.0 != Self::UNAVAILABLE.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Polynomial string hash: `h = 31 * h + unit` over UTF-16 code units with
/// 32-bit wraparound
pub fn hash_digits(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Concatenated legacy-id digits of the column at (x, z), top to bottom
pub fn column_digits<W: WorldSource + ?Sized>(world: &W, x: i32, z: i32) -> String {
    use fmt::Write;

    // Most samples are single digits; three is the worst case
    let mut digits = String::with_capacity(COLUMN_LEN * 2);
    for y in (COLUMN_BOTTOM..=COLUMN_TOP).rev() {
        let id = world.block_id(BlockPos::new(x, y, z));
        // Writing into a String cannot fail
        let _ = write!(digits, "{}", block::fingerprint_digit(id));
    }
    digits
}

/// Fingerprint of the column at (x, z)
///
/// Returns `Fingerprint::UNAVAILABLE` when the region is not loaded. A column
/// whose hash happens to be 0 is indistinguishable from that and is treated
/// the same way by callers.
pub fn column_fingerprint<W: WorldSource + ?Sized>(world: &W, x: i32, z: i32) -> Fingerprint {
    if !world.is_region_loaded(x, z) {
        return Fingerprint::UNAVAILABLE;
    }
    Fingerprint(hash_digits(&column_digits(world, x, z)))
}

/// Highest non-empty block in the column at (x, z), if any
///
/// Air and the ignored decorations do not count. Unloaded regions have no
/// roof.
pub fn roof_height<W: WorldSource + ?Sized>(world: &W, x: i32, z: i32) -> Option<i32> {
    if !world.is_region_loaded(x, z) {
        return None;
    }
    (COLUMN_BOTTOM..=COLUMN_TOP)
        .rev()
        .find(|&y| !block::is_empty(world.block_id(BlockPos::new(x, y, z))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryWorld;

    #[test]
    fn test_hash_matches_reference_values() {
        assert_eq!(hash_digits(""), 0);
        assert_eq!(hash_digits("1"), 49);
        assert_eq!(hash_digits("10"), 49 * 31 + 48);
    }

    #[test]
    fn test_all_air_column_golden_value() {
        let world = MemoryWorld::fully_loaded();
        let digits = column_digits(&world, 0, 0);
        assert_eq!(digits, "0".repeat(COLUMN_LEN));
        assert_eq!(COLUMN_LEN, 129);
        assert_eq!(column_fingerprint(&world, 0, 0), Fingerprint(-318_865_360));
    }

    #[test]
    fn test_unloaded_column_is_unavailable() {
        let world = MemoryWorld::new();
        assert_eq!(column_fingerprint(&world, 0, 0), Fingerprint::UNAVAILABLE);
        assert_eq!(roof_height(&world, 0, 0), None);
    }

    #[test]
    fn test_multi_digit_ids_concatenate() {
        let mut world = MemoryWorld::fully_loaded();
        world.set_block(BlockPos::new(0, COLUMN_TOP, 0), "minecraft:stone_bricks");
        world.set_block(BlockPos::new(0, COLUMN_TOP - 1, 0), "minecraft:stone");
        let digits = column_digits(&world, 0, 0);
        assert!(digits.starts_with("9810"));
        assert_eq!(digits.len(), COLUMN_LEN + 1);
    }

    #[test]
    fn test_ignored_blocks_do_not_change_fingerprint() {
        let mut world = MemoryWorld::fully_loaded();
        world.set_block(BlockPos::new(5, 70, 5), "minecraft:stone");
        let before = column_fingerprint(&world, 5, 5);
        world.set_block(BlockPos::new(5, 90, 5), "minecraft:chest");
        world.set_block(BlockPos::new(5, 91, 5), "minecraft:iron_bars");
        assert_eq!(column_fingerprint(&world, 5, 5), before);
    }

    #[test]
    fn test_roof_height_skips_ignored() {
        let mut world = MemoryWorld::fully_loaded();
        assert_eq!(roof_height(&world, 0, 0), None);
        world.set_block(BlockPos::new(0, 99, 0), "minecraft:stone");
        world.set_block(BlockPos::new(0, 101, 0), "minecraft:chest");
        assert_eq!(roof_height(&world, 0, 0), Some(99));
    }
}
