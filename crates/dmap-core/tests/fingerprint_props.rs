//! Property tests for column fingerprints

use dmap_core::block::COLORS;
use dmap_core::fingerprint::column_fingerprint;
use dmap_core::{BlockPos, MemoryWorld};
use proptest::prelude::*;

const X: i32 = -121;
const Z: i32 = -89;

const PALETTE: [&str; 6] = [
    "minecraft:stone",
    "minecraft:stone_bricks",
    "minecraft:bookshelf",
    "minecraft:chest",
    "minecraft:iron_bars",
    "minecraft:oak_planks",
];

fn build(blocks: &[(i32, usize)]) -> MemoryWorld {
    let mut world = MemoryWorld::fully_loaded();
    for &(y, i) in blocks {
        world.set_block(BlockPos::new(X, y, Z), PALETTE[i]);
    }
    world
}

proptest! {
    #[test]
    fn fingerprint_is_deterministic(blocks in prop::collection::vec((12..=140i32, 0..PALETTE.len()), 0..40)) {
        let a = build(&blocks);
        let b = build(&blocks);
        prop_assert_eq!(column_fingerprint(&a, X, Z), column_fingerprint(&b, X, Z));
        prop_assert_eq!(column_fingerprint(&a, X, Z), column_fingerprint(&a, X, Z));
    }

    #[test]
    fn wool_color_does_not_change_fingerprint(
        ys in prop::collection::btree_set(12..=140i32, 1..20),
        from in 0..COLORS.len(),
        to in 0..COLORS.len(),
    ) {
        let mut a = MemoryWorld::fully_loaded();
        let mut b = MemoryWorld::fully_loaded();
        for &y in &ys {
            a.set_block(BlockPos::new(X, y, Z), format!("minecraft:{}_wool", COLORS[from]));
            b.set_block(BlockPos::new(X, y, Z), format!("minecraft:{}_wool", COLORS[to]));
        }
        prop_assert_eq!(column_fingerprint(&a, X, Z), column_fingerprint(&b, X, Z));
    }

    #[test]
    fn ignored_blocks_hash_as_air(ys in prop::collection::btree_set(12..=140i32, 1..20)) {
        let mut world = MemoryWorld::fully_loaded();
        for &y in &ys {
            world.set_block(BlockPos::new(X, y, Z), "minecraft:chest");
        }
        let empty = MemoryWorld::fully_loaded();
        prop_assert_eq!(column_fingerprint(&world, X, Z), column_fingerprint(&empty, X, Z));
    }

    #[test]
    fn blocks_outside_column_are_not_sampled(y in 141..300i32, below in -64..12i32) {
        let mut world = MemoryWorld::fully_loaded();
        world.set_block(BlockPos::new(X, y, Z), "minecraft:stone");
        world.set_block(BlockPos::new(X, below, Z), "minecraft:stone");
        let empty = MemoryWorld::fully_loaded();
        prop_assert_eq!(column_fingerprint(&world, X, Z), column_fingerprint(&empty, X, Z));
    }
}
