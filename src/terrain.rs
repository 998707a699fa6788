use crate::constants::*;
use serde::Serialize;

/// The category of a single dungeon cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Debug,
    Unknown,
    /// Breakable wall, hardness in [1, 254]
    #[default]
    Wall,
    /// Outer border, hardness 255
    WallImmutable,
    Floor,
    FloorRoom,
    FloorHall,
    Stairs,
    StairsUp,
    StairsDown,
}

impl Terrain {
    /// Derive the tag a cell gets from its hardness alone.
    ///
    /// Carved cells come back as hall floor; room membership is applied afterwards.
    pub fn from_hardness(hardness: u8) -> Self {
        match hardness {
            HARDNESS_CARVED => Terrain::FloorHall,
            HARDNESS_IMMUTABLE => Terrain::WallImmutable,
            _ => Terrain::Wall,
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            Terrain::Floor
                | Terrain::FloorRoom
                | Terrain::FloorHall
                | Terrain::Stairs
                | Terrain::StairsUp
                | Terrain::StairsDown
        )
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Terrain::Wall | Terrain::WallImmutable)
    }

    /// Whether a cell with this tag and the given hardness is consistent
    pub fn agrees_with(&self, hardness: u8) -> bool {
        match hardness {
            HARDNESS_CARVED => self.is_walkable(),
            HARDNESS_IMMUTABLE => *self == Terrain::WallImmutable,
            _ => *self == Terrain::Wall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hardness() {
        assert_eq!(Terrain::from_hardness(0), Terrain::FloorHall);
        assert_eq!(Terrain::from_hardness(255), Terrain::WallImmutable);
        assert_eq!(Terrain::from_hardness(1), Terrain::Wall);
        assert_eq!(Terrain::from_hardness(254), Terrain::Wall);
    }

    #[test]
    fn test_walls_are_not_walkable() {
        assert!(!Terrain::Wall.is_walkable());
        assert!(!Terrain::WallImmutable.is_walkable());
        assert!(!Terrain::Debug.is_walkable());
        assert!(!Terrain::Unknown.is_walkable());
        assert!(Terrain::FloorRoom.is_walkable());
        assert!(Terrain::StairsDown.is_walkable());
    }

    #[test]
    fn test_agreement() {
        assert!(Terrain::FloorRoom.agrees_with(0));
        assert!(!Terrain::Wall.agrees_with(0));
        assert!(Terrain::WallImmutable.agrees_with(255));
        assert!(!Terrain::Wall.agrees_with(255));
        assert!(Terrain::Wall.agrees_with(17));
        assert!(!Terrain::FloorHall.agrees_with(17));
    }
}
