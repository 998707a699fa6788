//! The dungeon model.
//!
//! Owns the terrain grid, the room list, the player start and the editing
//! cursor. Every mutation keeps terrain tags and hardness in agreement and
//! leaves the border untouched; a refused mutation changes nothing.

use crate::constants::*;
use crate::error::{Error, Rejection, Result};
use crate::grid::{random_wall_hardness, TerrainGrid};
use crate::room::{Room, RoomId};
use crate::terrain::Terrain;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Whether carving a corridor may overwrite room floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarvePolicy {
    /// Carve any interior cell; keeping rooms intact is the caller's job
    #[default]
    Permissive,
    /// Refuse to carve cells that belong to a room
    PreserveRooms,
}

/// Serializable overview of a dungeon
#[derive(Debug, Clone, Serialize)]
pub struct DungeonSummary {
    pub width: usize,
    pub height: usize,
    pub player_start: Option<(u8, u8)>,
    pub rooms: Vec<RoomEntry>,
    pub room_cells: usize,
    pub hall_cells: usize,
    pub wall_cells: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomEntry {
    pub id: RoomId,
    #[serde(flatten)]
    pub room: Room,
}

#[derive(Debug, Clone)]
pub struct Dungeon {
    grid: TerrainGrid,
    /// Live rooms in creation order
    rooms: Vec<(RoomId, Room)>,
    next_room_id: u32,
    player_start: Option<(u8, u8)>,
    cursor: (u8, u8),
}

impl Dungeon {
    /// Create an empty dungeon: immutable border, random interior walls, no rooms.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            grid: TerrainGrid::new(rng),
            rooms: Vec::new(),
            next_room_id: 0,
            player_start: None,
            cursor: DEFAULT_CURSOR,
        }
    }

    /// Discard all edits and start over from an empty dungeon
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Self::new(rng);
    }

    /// Assemble a model from already-validated parts. Room cells are stamped
    /// over whatever the grid holds.
    pub(crate) fn from_parts(grid: TerrainGrid, rooms: Vec<Room>, player_start: Option<(u8, u8)>) -> Self {
        let mut dungeon = Self {
            grid,
            rooms: Vec::with_capacity(rooms.len()),
            next_room_id: 0,
            player_start,
            cursor: player_start.unwrap_or(DEFAULT_CURSOR),
        };
        for room in rooms {
            dungeon.commit_room(room);
        }
        dungeon
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn terrain(&self, x: usize, y: usize) -> Result<Terrain> {
        self.grid.terrain(x, y).ok_or(Error::OutOfBounds { x, y })
    }

    pub fn hardness(&self, x: usize, y: usize) -> Result<u8> {
        self.grid.hardness(x, y).ok_or(Error::OutOfBounds { x, y })
    }

    pub fn player_start(&self) -> Option<(u8, u8)> {
        self.player_start
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms.iter().map(|(id, room)| (*id, room))
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|(rid, _)| *rid == id).map(|(_, room)| room)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// First room whose (edge-inclusive) bounds contain the point
    pub fn room_at(&self, x: usize, y: usize) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|(_, room)| room.contains(x, y))
            .map(|(id, _)| *id)
    }

    pub fn summary(&self) -> DungeonSummary {
        let mut summary = DungeonSummary {
            width: DUNGEON_X,
            height: DUNGEON_Y,
            player_start: self.player_start,
            rooms: self.rooms().map(|(id, room)| RoomEntry { id, room: *room }).collect(),
            room_cells: 0,
            hall_cells: 0,
            wall_cells: 0,
        };
        for (_, _, terrain, _) in self.grid.iter() {
            match terrain {
                Terrain::FloorRoom => summary.room_cells += 1,
                Terrain::FloorHall | Terrain::Floor => summary.hall_cells += 1,
                Terrain::Wall => summary.wall_cells += 1,
                _ => {}
            }
        }
        summary
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: usize, y: usize) -> Result<()> {
        check_in_bounds(x, y)?;
        self.cursor = (x as u8, y as u8);
        Ok(())
    }

    /// Step the cursor by a delta. Refuses to leave the playable interior.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        let (Some(x), Some(y)) = (i32::from(self.cursor.0).checked_add(dx), i32::from(self.cursor.1).checked_add(dy)) else {
            return false;
        };
        if x <= 0 || y <= 0 || x >= DUNGEON_X as i32 - 1 || y >= DUNGEON_Y as i32 - 1 {
            return false;
        }
        self.cursor = (x as u8, y as u8);
        true
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Carve a hall cell. Does not check room membership.
    pub fn carve_corridor(&mut self, x: usize, y: usize) -> Result<()> {
        self.carve_corridor_with(x, y, CarvePolicy::Permissive)
    }

    pub fn carve_corridor_with(&mut self, x: usize, y: usize, policy: CarvePolicy) -> Result<()> {
        check_mutable(x, y)?;
        if policy == CarvePolicy::PreserveRooms && self.is_room_cell(x, y) {
            return Err(Rejection::RoomCell.into());
        }
        self.grid.set(x, y, Terrain::FloorHall, HARDNESS_CARVED);
        debug!(x, y, ?policy, "carved corridor");
        Ok(())
    }

    /// Turn a non-room cell back into wall with fresh hardness
    pub fn restore_wall(&mut self, x: usize, y: usize, rng: &mut impl Rng) -> Result<()> {
        check_mutable(x, y)?;
        if self.is_room_cell(x, y) {
            return Err(Rejection::RoomCell.into());
        }
        let hardness = random_wall_hardness(rng);
        self.grid.set(x, y, Terrain::Wall, hardness);
        if self.player_start == Some((x as u8, y as u8)) {
            self.player_start = None;
        }
        debug!(x, y, hardness, "restored wall");
        Ok(())
    }

    /// Whether a room of this size fits at (x, y) without touching another room
    pub fn can_place_room(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        match to_room(x, y, width, height) {
            Some(room) => room.check_bounds().is_ok() && self.is_clear(&room),
            None => false,
        }
    }

    pub fn place_room(&mut self, x: usize, y: usize, width: usize, height: usize) -> Result<RoomId> {
        check_in_bounds(x, y)?;
        let room = to_room(x, y, width, height).ok_or(Rejection::RoomBounds)?;
        room.check_bounds().map_err(|_| Rejection::RoomBounds)?;
        if !self.is_clear(&room) {
            return Err(Rejection::Overlap.into());
        }
        let id = self.commit_room(room);
        debug!(%id, x, y, width, height, "placed room");
        Ok(id)
    }

    /// Remove a room and wall its floor back in
    pub fn remove_room(&mut self, id: RoomId, rng: &mut impl Rng) -> Result<Room> {
        let pos = self
            .rooms
            .iter()
            .position(|(rid, _)| *rid == id)
            .ok_or(Error::NotFound(id))?;
        let (_, room) = self.rooms.remove(pos);
        for (x, y) in room.cells() {
            self.grid.set(x, y, Terrain::Wall, random_wall_hardness(rng));
        }
        if let Some((px, py)) = self.player_start {
            if room.interior_contains(px as usize, py as usize) {
                self.player_start = None;
            }
        }
        debug!(%id, "removed room");
        Ok(room)
    }

    pub fn set_player_start(&mut self, x: usize, y: usize) -> Result<()> {
        let terrain = self.terrain(x, y)?;
        if !terrain.is_walkable() {
            return Err(Rejection::NotWalkable.into());
        }
        self.player_start = Some((x as u8, y as u8));
        debug!(x, y, "set player start");
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn is_room_cell(&self, x: usize, y: usize) -> bool {
        self.grid.terrain(x, y) == Some(Terrain::FloorRoom)
            || self.rooms.iter().any(|(_, room)| room.interior_contains(x, y))
    }

    /// No room floor in the rectangle or its padding ring
    fn is_clear(&self, room: &Room) -> bool {
        if self.rooms.iter().any(|(_, other)| room.padded_overlaps(other)) {
            return false;
        }
        let x0 = (room.x as usize).saturating_sub(ROOM_PADDING);
        let y0 = (room.y as usize).saturating_sub(ROOM_PADDING);
        let x1 = (room.x as usize + room.width as usize + ROOM_PADDING).min(DUNGEON_X);
        let y1 = (room.y as usize + room.height as usize + ROOM_PADDING).min(DUNGEON_Y);
        (y0..y1).all(|y| (x0..x1).all(|x| self.grid.terrain(x, y) != Some(Terrain::FloorRoom)))
    }

    fn commit_room(&mut self, room: Room) -> RoomId {
        let id = RoomId(self.next_room_id);
        self.next_room_id += 1;
        for (x, y) in room.cells() {
            self.grid.set(x, y, Terrain::FloorRoom, HARDNESS_CARVED);
        }
        self.rooms.push((id, room));
        id
    }
}

fn check_in_bounds(x: usize, y: usize) -> Result<()> {
    if TerrainGrid::in_bounds(x, y) {
        Ok(())
    } else {
        Err(Error::OutOfBounds { x, y })
    }
}

fn check_mutable(x: usize, y: usize) -> Result<()> {
    check_in_bounds(x, y)?;
    if TerrainGrid::is_border(x, y) {
        return Err(Rejection::ImmutableBorder.into());
    }
    Ok(())
}

fn to_room(x: usize, y: usize, width: usize, height: usize) -> Option<Room> {
    Some(Room::new(
        u8::try_from(x).ok()?,
        u8::try_from(y).ok()?,
        u8::try_from(width).ok()?,
        u8::try_from(height).ok()?,
    ))
}
