//! Dungeon constants organized by category.
//!
//! Centralizing magic numbers keeps the model and the file format in agreement.

// =============================================================================
// GRID
// =============================================================================

/// Dungeon width in cells
pub const DUNGEON_X: usize = 80;
/// Dungeon height in cells
pub const DUNGEON_Y: usize = 21;
/// Total number of cells in the grid
pub const DUNGEON_CELLS: usize = DUNGEON_X * DUNGEON_Y;

/// Cursor position used when no player start is set
pub const DEFAULT_CURSOR: (u8, u8) = (40, 10);

// =============================================================================
// ROOMS
// =============================================================================

/// Minimum room width
pub const MIN_ROOM_XSIZE: u8 = 3;
/// Minimum room height
pub const MIN_ROOM_YSIZE: u8 = 2;
/// Number of non-room cells required between two rooms
pub const ROOM_PADDING: usize = 1;

// =============================================================================
// HARDNESS
// =============================================================================

/// Hardness of carved floor
pub const HARDNESS_CARVED: u8 = 0;
/// Hardness of the immutable border
pub const HARDNESS_IMMUTABLE: u8 = 255;
/// Softest breakable wall
pub const HARDNESS_WALL_MIN: u8 = 1;
/// Hardest breakable wall
pub const HARDNESS_WALL_MAX: u8 = 254;

// =============================================================================
// FILE FORMAT
// =============================================================================

/// Format tag at offset 0
pub const FILE_MAGIC: &[u8; 12] = b"DUNGEON-EDIT";
/// The only file version this build reads or writes
pub const FILE_VERSION: u32 = 0;
/// Bytes before the hardness grid: magic, version, size, player x, player y
pub const HEADER_LEN: usize = 12 + 4 + 4 + 1 + 1;
/// Bytes per serialized room
pub const ROOM_RECORD_LEN: usize = 4;
/// Size of a file holding zero rooms
pub const BASE_FILE_LEN: usize = HEADER_LEN + DUNGEON_CELLS;

/// Save file used when the caller gives no path
pub const DEFAULT_SAVE_FILE: &str = "dungeon.rlg";
