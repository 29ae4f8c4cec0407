//! Legacy numeric block ids
//!
//! The room catalog was fingerprinted against the old numeric block ids.
//! Modern worlds name blocks instead, and many names collapse onto a single
//! old id (every wool color is 35, every log of the first four woods is 17).
//! Names missing from the table map to 0, the same digit air produces.

use std::sync::OnceLock;

use hashbrown::HashMap;

/// The sixteen dye colors, in legacy metadata order
pub const COLORS: [&str; 16] = [
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "light_gray",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

/// Blocks that exist once per dye color: `<color>_<suffix>` maps to the id
const COLORED_FAMILIES: &[(&str, u16)] = &[
    ("bed", 26),
    ("wool", 35),
    ("stained_glass", 95),
    ("terracotta", 159),
    ("stained_glass_pane", 160),
    ("carpet", 171),
    ("banner", 176),
    ("wall_banner", 177),
];

/// Individually named blocks, without the `minecraft:` namespace
const NAMED: &[(&str, u16)] = &[
    ("air", 0),
    ("cave_air", 0),
    ("void_air", 0),
    ("stone", 1),
    ("granite", 1),
    ("polished_granite", 1),
    ("diorite", 1),
    ("polished_diorite", 1),
    ("andesite", 1),
    ("polished_andesite", 1),
    ("grass_block", 2),
    ("dirt", 3),
    ("coarse_dirt", 3),
    ("podzol", 3),
    ("cobblestone", 4),
    ("oak_planks", 5),
    ("spruce_planks", 5),
    ("birch_planks", 5),
    ("jungle_planks", 5),
    ("acacia_planks", 5),
    ("dark_oak_planks", 5),
    ("oak_sapling", 6),
    ("spruce_sapling", 6),
    ("birch_sapling", 6),
    ("jungle_sapling", 6),
    ("acacia_sapling", 6),
    ("dark_oak_sapling", 6),
    ("bedrock", 7),
    ("water", 9),
    ("lava", 11),
    ("sand", 12),
    ("red_sand", 12),
    ("gravel", 13),
    ("gold_ore", 14),
    ("iron_ore", 15),
    ("coal_ore", 16),
    ("oak_log", 17),
    ("spruce_log", 17),
    ("birch_log", 17),
    ("jungle_log", 17),
    ("oak_wood", 17),
    ("spruce_wood", 17),
    ("birch_wood", 17),
    ("jungle_wood", 17),
    ("oak_leaves", 18),
    ("spruce_leaves", 18),
    ("birch_leaves", 18),
    ("jungle_leaves", 18),
    ("sponge", 19),
    ("wet_sponge", 19),
    ("glass", 20),
    ("lapis_ore", 21),
    ("lapis_block", 22),
    ("dispenser", 23),
    ("sandstone", 24),
    ("chiseled_sandstone", 24),
    ("cut_sandstone", 24),
    ("note_block", 25),
    ("powered_rail", 27),
    ("detector_rail", 28),
    ("sticky_piston", 29),
    ("cobweb", 30),
    ("grass", 31),
    ("short_grass", 31),
    ("fern", 31),
    ("dead_bush", 32),
    ("piston", 33),
    ("piston_head", 34),
    ("moving_piston", 36),
    ("dandelion", 37),
    ("poppy", 38),
    ("blue_orchid", 38),
    ("allium", 38),
    ("azure_bluet", 38),
    ("red_tulip", 38),
    ("orange_tulip", 38),
    ("white_tulip", 38),
    ("pink_tulip", 38),
    ("oxeye_daisy", 38),
    ("brown_mushroom", 39),
    ("red_mushroom", 40),
    ("gold_block", 41),
    ("iron_block", 42),
    ("smooth_stone", 43),
    ("smooth_sandstone", 43),
    ("smooth_quartz", 43),
    ("stone_slab", 44),
    ("smooth_stone_slab", 44),
    ("sandstone_slab", 44),
    ("cobblestone_slab", 44),
    ("brick_slab", 44),
    ("stone_brick_slab", 44),
    ("nether_brick_slab", 44),
    ("quartz_slab", 44),
    ("petrified_oak_slab", 44),
    ("bricks", 45),
    ("tnt", 46),
    ("bookshelf", 47),
    ("mossy_cobblestone", 48),
    ("obsidian", 49),
    ("torch", 50),
    ("wall_torch", 50),
    ("fire", 51),
    ("spawner", 52),
    ("oak_stairs", 53),
    ("chest", 54),
    ("redstone_wire", 55),
    ("diamond_ore", 56),
    ("diamond_block", 57),
    ("crafting_table", 58),
    ("wheat", 59),
    ("farmland", 60),
    ("furnace", 61),
    ("oak_sign", 63),
    ("spruce_sign", 63),
    ("birch_sign", 63),
    ("jungle_sign", 63),
    ("acacia_sign", 63),
    ("dark_oak_sign", 63),
    ("oak_door", 64),
    ("ladder", 65),
    ("rail", 66),
    ("cobblestone_stairs", 67),
    ("oak_wall_sign", 68),
    ("spruce_wall_sign", 68),
    ("birch_wall_sign", 68),
    ("jungle_wall_sign", 68),
    ("acacia_wall_sign", 68),
    ("dark_oak_wall_sign", 68),
    ("lever", 69),
    ("stone_pressure_plate", 70),
    ("iron_door", 71),
    ("oak_pressure_plate", 72),
    ("spruce_pressure_plate", 72),
    ("birch_pressure_plate", 72),
    ("jungle_pressure_plate", 72),
    ("acacia_pressure_plate", 72),
    ("dark_oak_pressure_plate", 72),
    ("redstone_ore", 73),
    ("redstone_torch", 76),
    ("redstone_wall_torch", 76),
    ("stone_button", 77),
    ("snow", 78),
    ("ice", 79),
    ("snow_block", 80),
    ("cactus", 81),
    ("clay", 82),
    ("sugar_cane", 83),
    ("jukebox", 84),
    ("oak_fence", 85),
    ("pumpkin", 86),
    ("carved_pumpkin", 86),
    ("netherrack", 87),
    ("soul_sand", 88),
    ("glowstone", 89),
    ("nether_portal", 90),
    ("jack_o_lantern", 91),
    ("cake", 92),
    ("repeater", 93),
    ("oak_trapdoor", 96),
    ("spruce_trapdoor", 96),
    ("birch_trapdoor", 96),
    ("jungle_trapdoor", 96),
    ("acacia_trapdoor", 96),
    ("dark_oak_trapdoor", 96),
    ("infested_stone", 97),
    ("infested_cobblestone", 97),
    ("infested_stone_bricks", 97),
    ("infested_mossy_stone_bricks", 97),
    ("infested_cracked_stone_bricks", 97),
    ("infested_chiseled_stone_bricks", 97),
    ("stone_bricks", 98),
    ("mossy_stone_bricks", 98),
    ("cracked_stone_bricks", 98),
    ("chiseled_stone_bricks", 98),
    ("brown_mushroom_block", 99),
    ("red_mushroom_block", 100),
    ("mushroom_stem", 100),
    ("iron_bars", 101),
    ("glass_pane", 102),
    ("melon", 103),
    ("pumpkin_stem", 104),
    ("attached_pumpkin_stem", 104),
    ("melon_stem", 105),
    ("attached_melon_stem", 105),
    ("vine", 106),
    ("oak_fence_gate", 107),
    ("brick_stairs", 108),
    ("stone_brick_stairs", 109),
    ("mycelium", 110),
    ("lily_pad", 111),
    ("nether_bricks", 112),
    ("nether_brick_fence", 113),
    ("nether_brick_stairs", 114),
    ("nether_wart", 115),
    ("enchanting_table", 116),
    ("brewing_stand", 117),
    ("cauldron", 118),
    ("water_cauldron", 118),
    ("lava_cauldron", 118),
    ("end_portal", 119),
    ("end_portal_frame", 120),
    ("end_stone", 121),
    ("dragon_egg", 122),
    ("redstone_lamp", 123),
    ("oak_slab", 126),
    ("spruce_slab", 126),
    ("birch_slab", 126),
    ("jungle_slab", 126),
    ("acacia_slab", 126),
    ("dark_oak_slab", 126),
    ("cocoa", 127),
    ("sandstone_stairs", 128),
    ("emerald_ore", 129),
    ("ender_chest", 130),
    ("tripwire_hook", 131),
    ("tripwire", 132),
    ("emerald_block", 133),
    ("spruce_stairs", 134),
    ("birch_stairs", 135),
    ("jungle_stairs", 136),
    ("command_block", 137),
    ("beacon", 138),
    ("cobblestone_wall", 139),
    ("mossy_cobblestone_wall", 139),
    ("flower_pot", 140),
    ("carrots", 141),
    ("potatoes", 142),
    ("oak_button", 143),
    ("spruce_button", 143),
    ("birch_button", 143),
    ("jungle_button", 143),
    ("acacia_button", 143),
    ("dark_oak_button", 143),
    ("skeleton_skull", 144),
    ("skeleton_wall_skull", 144),
    ("wither_skeleton_skull", 144),
    ("wither_skeleton_wall_skull", 144),
    ("zombie_head", 144),
    ("zombie_wall_head", 144),
    ("player_head", 144),
    ("player_wall_head", 144),
    ("creeper_head", 144),
    ("creeper_wall_head", 144),
    ("dragon_head", 144),
    ("dragon_wall_head", 144),
    ("anvil", 145),
    ("chipped_anvil", 145),
    ("damaged_anvil", 145),
    ("trapped_chest", 146),
    ("light_weighted_pressure_plate", 147),
    ("heavy_weighted_pressure_plate", 148),
    ("comparator", 149),
    ("daylight_detector", 151),
    ("redstone_block", 152),
    ("nether_quartz_ore", 153),
    ("hopper", 154),
    ("quartz_block", 155),
    ("chiseled_quartz_block", 155),
    ("quartz_pillar", 155),
    ("quartz_stairs", 156),
    ("activator_rail", 157),
    ("dropper", 158),
    ("acacia_leaves", 161),
    ("dark_oak_leaves", 161),
    ("acacia_log", 162),
    ("dark_oak_log", 162),
    ("acacia_wood", 162),
    ("dark_oak_wood", 162),
    ("acacia_stairs", 163),
    ("dark_oak_stairs", 164),
    ("slime_block", 165),
    ("barrier", 166),
    ("iron_trapdoor", 167),
    ("prismarine", 168),
    ("prismarine_bricks", 168),
    ("dark_prismarine", 168),
    ("sea_lantern", 169),
    ("hay_block", 170),
    ("terracotta", 172),
    ("coal_block", 173),
    ("packed_ice", 174),
    ("sunflower", 175),
    ("lilac", 175),
    ("tall_grass", 175),
    ("large_fern", 175),
    ("rose_bush", 175),
    ("peony", 175),
    ("red_sandstone", 179),
    ("chiseled_red_sandstone", 179),
    ("cut_red_sandstone", 179),
    ("red_sandstone_stairs", 180),
    ("smooth_red_sandstone", 181),
    ("red_sandstone_slab", 182),
    ("spruce_fence_gate", 183),
    ("birch_fence_gate", 184),
    ("jungle_fence_gate", 185),
    ("dark_oak_fence_gate", 186),
    ("acacia_fence_gate", 187),
    ("spruce_fence", 188),
    ("birch_fence", 189),
    ("jungle_fence", 190),
    ("dark_oak_fence", 191),
    ("acacia_fence", 192),
    ("spruce_door", 193),
    ("birch_door", 194),
    ("jungle_door", 195),
    ("acacia_door", 196),
    ("dark_oak_door", 197),
];

const NAMESPACE: &str = "minecraft:";

static TABLE: OnceLock<HashMap<String, u16>> = OnceLock::new();

fn table() -> &'static HashMap<String, u16> {
    TABLE.get_or_init(|| {
        let mut map = HashMap::with_capacity(NAMED.len() + COLORS.len() * COLORED_FAMILIES.len());
        for &(name, id) in NAMED {
            map.insert(name.to_string(), id);
        }
        for &(suffix, id) in COLORED_FAMILIES {
            for color in COLORS {
                map.insert(format!("{color}_{suffix}"), id);
            }
        }
        map
    })
}

/// Strip the default namespace, leaving other namespaces intact
pub fn strip_namespace(id: &str) -> &str {
    id.strip_prefix(NAMESPACE).unwrap_or(id)
}

/// Legacy numeric id for a block identifier; 0 when unmapped
pub fn legacy_id(id: &str) -> u16 {
    table().get(strip_namespace(id)).copied().unwrap_or(0)
}

/// Number of identifiers the table knows
pub fn table_len() -> usize {
    table().len()
}
