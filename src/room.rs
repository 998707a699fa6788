use crate::constants::*;
use serde::Serialize;
use std::fmt;

/// Stable handle to a room inside a [`Dungeon`](crate::dungeon::Dungeon).
///
/// Handles are never reused within one model, so removing a room does not
/// invalidate the handles of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangular room: top-left corner plus size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

impl Room {
    pub fn new(x: u8, y: u8, width: u8, height: u8) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is on the room or on its far edge.
    ///
    /// The far edge is inclusive, so the column just right of the room and the
    /// row just below it also match. Use [`Room::interior_contains`] for the
    /// exact floor area.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.x as usize, self.y as usize);
        rx <= x && x <= rx + self.width as usize && ry <= y && y <= ry + self.height as usize
    }

    /// Check if a point is one of the room's floor cells
    pub fn interior_contains(&self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.x as usize, self.y as usize);
        x >= rx && x < rx + self.width as usize && y >= ry && y < ry + self.height as usize
    }

    /// Iterate over every floor cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x0, y0) = (self.x as usize, self.y as usize);
        let (x1, y1) = (x0 + self.width as usize, y0 + self.height as usize);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }

    /// Whether the two rooms touch or overlap once `self` is grown by the padding ring
    pub fn padded_overlaps(&self, other: &Room) -> bool {
        let left = (self.x as usize).saturating_sub(ROOM_PADDING);
        let top = (self.y as usize).saturating_sub(ROOM_PADDING);
        let right = self.x as usize + self.width as usize + ROOM_PADDING;
        let bottom = self.y as usize + self.height as usize + ROOM_PADDING;

        let other_right = other.x as usize + other.width as usize;
        let other_bottom = other.y as usize + other.height as usize;

        (other.x as usize) < right && left < other_right && (other.y as usize) < bottom && top < other_bottom
    }

    /// Check size and position against the playable interior.
    ///
    /// Returns a short description of the first violated rule.
    pub fn check_bounds(&self) -> Result<(), &'static str> {
        if self.width < MIN_ROOM_XSIZE {
            return Err("width below minimum");
        }
        if self.height < MIN_ROOM_YSIZE {
            return Err("height below minimum");
        }
        if self.x < 1 || self.y < 1 {
            return Err("origin on the border");
        }
        if self.x as usize + self.width as usize > DUNGEON_X - 1 {
            return Err("extends past the right border");
        }
        if self.y as usize + self.height as usize > DUNGEON_Y - 1 {
            return Err("extends past the bottom border");
        }
        Ok(())
    }

    /// Pack into the on-disk record: x, y, width, height
    pub fn to_record(&self) -> [u8; ROOM_RECORD_LEN] {
        [self.x, self.y, self.width, self.height]
    }

    pub fn from_record(record: [u8; ROOM_RECORD_LEN]) -> Self {
        let [x, y, width, height] = record;
        Self { x, y, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_of_far_edge() {
        let room = Room::new(10, 5, 3, 2);
        assert!(room.contains(10, 5));
        assert!(room.contains(12, 6));
        // One past the interior still matches
        assert!(room.contains(13, 7));
        assert!(!room.contains(14, 5));
        assert!(!room.contains(9, 5));
        assert!(!room.contains(10, 8));
    }

    #[test]
    fn test_interior_contains_is_exclusive() {
        let room = Room::new(10, 5, 3, 2);
        assert!(room.interior_contains(12, 6));
        assert!(!room.interior_contains(13, 6));
        assert!(!room.interior_contains(12, 7));
    }

    #[test]
    fn test_cells_cover_interior() {
        let room = Room::new(10, 5, 3, 2);
        let cells: Vec<_> = room.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells.first(), Some(&(10, 5)));
        assert_eq!(cells.last(), Some(&(12, 6)));
        assert!(cells.iter().all(|&(x, y)| room.interior_contains(x, y)));
    }

    #[test]
    fn test_padded_overlap() {
        let room = Room::new(10, 5, 3, 2);
        // Adjacent column: touches, so rejected
        assert!(room.padded_overlaps(&Room::new(13, 5, 3, 2)));
        // One cell gap
        assert!(!room.padded_overlaps(&Room::new(14, 5, 3, 2)));
        // Diagonal neighbour touching the corner
        assert!(room.padded_overlaps(&Room::new(13, 7, 3, 2)));
        assert!(!room.padded_overlaps(&Room::new(10, 8, 3, 2)));
        assert!(room.padded_overlaps(&room));
    }

    #[test]
    fn test_check_bounds() {
        assert!(Room::new(1, 1, 3, 2).check_bounds().is_ok());
        assert!(Room::new(76, 18, 3, 2).check_bounds().is_ok());
        assert!(Room::new(77, 18, 3, 2).check_bounds().is_err());
        assert!(Room::new(76, 19, 3, 2).check_bounds().is_err());
        assert!(Room::new(0, 5, 3, 2).check_bounds().is_err());
        assert!(Room::new(5, 5, 2, 2).check_bounds().is_err());
        assert!(Room::new(5, 5, 3, 1).check_bounds().is_err());
        assert!(Room::new(5, 5, 200, 2).check_bounds().is_err());
    }

    #[test]
    fn test_record_layout() {
        let room = Room::new(10, 5, 3, 2);
        assert_eq!(room.to_record(), [10u8, 5, 3, 2]);
        assert_eq!(Room::from_record([10, 5, 3, 2]), room);
    }
}
