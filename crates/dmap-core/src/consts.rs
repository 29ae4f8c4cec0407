//! Dungeon geometry and scan tuning constants
//!
//! Geometry matches the fixed layout every dungeon instance is assembled on:
//! a 6×6 grid of 31×31 rooms separated by 1-block gaps.

/// Grid dimensions (cells per axis)
pub const GRID_SIZE: usize = 6;

/// Half-resolution grid dimensions (cells plus boundary midpoints)
pub const HALF_GRID_SIZE: usize = GRID_SIZE * 2 - 1;

/// Room footprint edge length in blocks
pub const ROOM_SIZE: i32 = 31;

/// Distance from one cell to the next (room plus gap)
pub const CELL_SPAN: i32 = ROOM_SIZE + 1;

/// Distance from a cell center to its edge
pub const HALF_ROOM_SIZE: i32 = ROOM_SIZE / 2;

/// World X/Z of the north-west corner of cell (0, 0)
pub const DUNGEON_ORIGIN: i32 = -200;

/// World X/Z of the center of cell (0, 0)
pub const DUNGEON_CENTER_ORIGIN: i32 = DUNGEON_ORIGIN + HALF_ROOM_SIZE;

/// One past the last world X/Z covered by the grid
pub const DUNGEON_END: i32 = DUNGEON_ORIGIN + CELL_SPAN * GRID_SIZE as i32;

/// Top of the sampled column (inclusive)
pub const COLUMN_TOP: i32 = 140;

/// Bottom of the sampled column (inclusive)
pub const COLUMN_BOTTOM: i32 = 12;

/// Number of samples in a fingerprint column
pub const COLUMN_LEN: usize = (COLUMN_TOP - COLUMN_BOTTOM + 1) as usize;

/// Edge length of a loadable world region (chunk)
pub const REGION_SIZE: i32 = 16;

/// Y level sampled around a boundary midpoint for door markers
pub const DOOR_SAMPLE_Y: i32 = 69;

/// Offset above `DOOR_SAMPLE_Y` that must be open for a walkable passage
pub const WALKING_HEIGHT_OFFSET: i32 = 1;

/// Lowest roof height over a boundary midpoint that still counts as a doorway
pub const PASSAGE_MIN_HEIGHT: i32 = 70;

/// One past the highest roof height that counts as a doorway; anything taller
/// is the full-height wall of a room
pub const PASSAGE_MAX_HEIGHT: i32 = 85;

/// Minimum entrance-marker hits in the 3×3 door sample
pub const ENTRANCE_MARKER_THRESHOLD: usize = 2;

/// Minimum wither-marker hits in the 3×3 door sample
pub const WITHER_MARKER_THRESHOLD: usize = 2;

/// Minimum blood-marker hits in the 3×3 door sample; the marker block also
/// appears as decoration
pub const BLOOD_MARKER_THRESHOLD: usize = 4;

/// Offsets from roof height probed for the rotation marker
pub const ROTATION_PROBE_OFFSETS: [i32; 4] = [0, -1, 1, 2];

/// Absolute levels probed for the rotation marker after the roof offsets
pub const ROTATION_COMMON_LEVELS: [i32; 3] = [68, 69, 70];
