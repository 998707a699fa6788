use crate::constants::*;
use crate::terrain::Terrain;
use rand::Rng;

/// Fixed-size terrain and hardness maps, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    terrain: Vec<Terrain>,
    hardness: Vec<u8>,
}

impl TerrainGrid {
    /// Immutable border around breakable walls of random hardness
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut terrain = vec![Terrain::Wall; DUNGEON_CELLS];
        let mut hardness = vec![0; DUNGEON_CELLS];

        for y in 0..DUNGEON_Y {
            for x in 0..DUNGEON_X {
                let idx = Self::index(x, y);
                if Self::is_border(x, y) {
                    terrain[idx] = Terrain::WallImmutable;
                    hardness[idx] = HARDNESS_IMMUTABLE;
                } else {
                    hardness[idx] = random_wall_hardness(rng);
                }
            }
        }

        Self { terrain, hardness }
    }

    /// Rebuild a grid from raw hardness, deriving each tag from its byte.
    ///
    /// `hardness` must hold exactly [`DUNGEON_CELLS`] bytes.
    pub(crate) fn from_hardness(hardness: Vec<u8>) -> Self {
        debug_assert_eq!(hardness.len(), DUNGEON_CELLS);
        let terrain = hardness.iter().map(|&h| Terrain::from_hardness(h)).collect();
        Self { terrain, hardness }
    }

    pub fn is_border(x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == DUNGEON_X - 1 || y == DUNGEON_Y - 1
    }

    pub fn in_bounds(x: usize, y: usize) -> bool {
        x < DUNGEON_X && y < DUNGEON_Y
    }

    fn index(x: usize, y: usize) -> usize {
        y * DUNGEON_X + x
    }

    pub fn terrain(&self, x: usize, y: usize) -> Option<Terrain> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.terrain[Self::index(x, y)])
    }

    pub fn hardness(&self, x: usize, y: usize) -> Option<u8> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.hardness[Self::index(x, y)])
    }

    /// The whole hardness map, row-major
    pub fn hardness_map(&self) -> &[u8] {
        &self.hardness
    }

    /// Write a cell. Callers guarantee `(x, y)` is in bounds and not on the border.
    pub(crate) fn set(&mut self, x: usize, y: usize, terrain: Terrain, hardness: u8) {
        debug_assert!(Self::in_bounds(x, y) && !Self::is_border(x, y));
        let idx = Self::index(x, y);
        self.terrain[idx] = terrain;
        self.hardness[idx] = hardness;
    }

    /// Iterate over every cell as `(x, y, terrain, hardness)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Terrain, u8)> + '_ {
        self.terrain
            .iter()
            .zip(self.hardness.iter())
            .enumerate()
            .map(|(idx, (&t, &h))| (idx % DUNGEON_X, idx / DUNGEON_X, t, h))
    }
}

/// Hardness for a freshly restored wall, uniform in [1, 254]
pub fn random_wall_hardness(rng: &mut impl Rng) -> u8 {
    rng.gen_range(HARDNESS_WALL_MIN..=HARDNESS_WALL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_border_is_immutable() {
        let grid = TerrainGrid::new(&mut StdRng::seed_from_u64(7));
        for (x, y, terrain, hardness) in grid.iter() {
            if TerrainGrid::is_border(x, y) {
                assert_eq!(terrain, Terrain::WallImmutable);
                assert_eq!(hardness, 255);
            }
        }
    }

    #[test]
    fn test_interior_walls_have_breakable_hardness() {
        let grid = TerrainGrid::new(&mut StdRng::seed_from_u64(7));
        for (x, y, terrain, hardness) in grid.iter() {
            if !TerrainGrid::is_border(x, y) {
                assert_eq!(terrain, Terrain::Wall);
                assert!((1..=254).contains(&hardness));
            }
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = TerrainGrid::new(&mut StdRng::seed_from_u64(42));
        let b = TerrainGrid::new(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let grid = TerrainGrid::new(&mut StdRng::seed_from_u64(1));
        assert!(grid.terrain(80, 0).is_none());
        assert!(grid.hardness(0, 21).is_none());
        assert_eq!(grid.terrain(79, 20), Some(Terrain::WallImmutable));
    }

    #[test]
    fn test_from_hardness_derives_tags() {
        let mut hardness = vec![100; DUNGEON_CELLS];
        hardness[0] = 255;
        hardness[DUNGEON_X + 1] = 0;
        let grid = TerrainGrid::from_hardness(hardness);
        assert_eq!(grid.terrain(0, 0), Some(Terrain::WallImmutable));
        assert_eq!(grid.terrain(1, 1), Some(Terrain::FloorHall));
        assert_eq!(grid.terrain(2, 1), Some(Terrain::Wall));
    }
}
