//! Grid dungeon model with a validated binary save format.
//!
//! An 80x21 grid of terrain and hardness with an immutable border, manually
//! placed rooms and corridors, and a player start. Random hardness comes from
//! a caller-supplied generator so sessions and tests stay reproducible.

pub mod codec;
pub mod config;
pub mod constants;
pub mod dungeon;
pub mod error;
pub mod grid;
pub mod persist;
pub mod room;
pub mod terrain;

pub use config::Config;
pub use dungeon::{CarvePolicy, Dungeon, DungeonSummary};
pub use error::{Error, Rejection, Result};
pub use room::{Room, RoomId};
pub use terrain::Terrain;
