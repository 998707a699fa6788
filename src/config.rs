use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::persist;

/// Session settings: where the dungeon lives and how walls are randomized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    /// Fixed seed for reproducible hardness; entropy when absent
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(path: Option<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            path: path.unwrap_or_else(persist::default_path),
            seed,
        }
    }

    /// The generator threaded through every hardness roll of this session
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
