//! Binary save format.
//!
//! All integers are big-endian.
//!
//! | Offset        | Size         | Field                               |
//! |---------------|--------------|-------------------------------------|
//! | 0             | 12           | magic                               |
//! | 12            | 4            | version                             |
//! | 16            | 4            | total file size                     |
//! | 20            | 1            | player x                            |
//! | 21            | 1            | player y                            |
//! | 22            | 80 * 21      | hardness, row-major                 |
//! | 22 + 80 * 21  | 4 per room   | x, y, width, height                 |
//!
//! Terrain tags are not stored; they are derived from hardness and rooms.

use crate::constants::*;
use crate::dungeon::Dungeon;
use crate::error::{Error, Result};
use crate::grid::TerrainGrid;
use crate::room::Room;

/// Exact number of bytes [`encode`] produces for `num_rooms` rooms
pub fn encoded_len(num_rooms: usize) -> usize {
    BASE_FILE_LEN + ROOM_RECORD_LEN * num_rooms
}

pub fn encode(dungeon: &Dungeon) -> Vec<u8> {
    puffin::profile_function!();

    let total = encoded_len(dungeon.room_count());
    let mut out = Vec::with_capacity(total);

    out.extend_from_slice(FILE_MAGIC);
    out.extend_from_slice(&FILE_VERSION.to_be_bytes());
    // Room count is bounded by the grid area, so this always fits
    out.extend_from_slice(&(total as u32).to_be_bytes());

    let (px, py) = dungeon.player_start().unwrap_or((0, 0));
    out.push(px);
    out.push(py);

    out.extend_from_slice(dungeon.grid().hardness_map());

    for (_, room) in dungeon.rooms() {
        out.extend_from_slice(&room.to_record());
    }

    debug_assert_eq!(out.len(), total);
    out
}

/// Parse and validate a save file.
///
/// Nothing is built until the whole input has been checked, so an error
/// never leaves a partial model behind.
pub fn decode(bytes: &[u8]) -> Result<Dungeon> {
    puffin::profile_function!();

    let mut reader = Reader::new(bytes);

    let magic = reader.take(FILE_MAGIC.len()).ok_or(Error::BadMagic)?;
    if magic != FILE_MAGIC {
        return Err(Error::BadMagic);
    }

    let version = reader.read_u32()?;
    if version != FILE_VERSION {
        return Err(Error::VersionMismatch { found: version });
    }

    let declared = reader.read_u32()?;
    if declared as usize != bytes.len() {
        return Err(Error::SizeMismatch {
            declared,
            actual: bytes.len(),
        });
    }

    let px = reader.read_u8()?;
    let py = reader.read_u8()?;
    let player_start = if px != 0 && py != 0 {
        if TerrainGrid::is_border(px as usize, py as usize) || !TerrainGrid::in_bounds(px as usize, py as usize) {
            return Err(Error::InvalidPlayer { x: px, y: py });
        }
        Some((px, py))
    } else {
        None
    };

    let hardness = reader.read_exact(DUNGEON_CELLS)?;
    for (idx, &h) in hardness.iter().enumerate() {
        let (x, y) = (idx % DUNGEON_X, idx / DUNGEON_X);
        if TerrainGrid::is_border(x, y) && h != HARDNESS_IMMUTABLE {
            return Err(Error::CorruptBorder { x, y });
        }
    }

    let remaining = reader.remaining();
    if remaining.len() % ROOM_RECORD_LEN != 0 {
        return Err(Error::TruncatedRooms {
            trailing: remaining.len() % ROOM_RECORD_LEN,
        });
    }

    let mut rooms = Vec::with_capacity(remaining.len() / ROOM_RECORD_LEN);
    for (index, chunk) in remaining.chunks_exact(ROOM_RECORD_LEN).enumerate() {
        let room = Room::from_record([chunk[0], chunk[1], chunk[2], chunk[3]]);
        room.check_bounds()
            .map_err(|reason| Error::InvalidRoom { index, reason })?;
        if rooms.iter().any(|earlier| room.padded_overlaps(earlier)) {
            return Err(Error::InvalidRoom {
                index,
                reason: "overlaps another room",
            });
        }
        rooms.push(room);
    }

    Ok(Dungeon::from_parts(
        TerrainGrid::from_hardness(hardness.to_vec()),
        rooms,
        player_start,
    ))
}

/// Forward-only cursor over the input
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    fn read_exact(&mut self, len: usize) -> Result<&'a [u8]> {
        let needed = self.pos + len;
        self.take(len).ok_or(Error::Truncated {
            needed,
            actual: self.bytes.len(),
        })
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_exact(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_exact(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}
