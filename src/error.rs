use std::path::PathBuf;

use thiserror::Error;

use crate::room::RoomId;

/// Unified result type for the dungeon crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a mutation was refused. The model is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("room would overlap or touch an existing room")]
    Overlap,
    #[error("room size or position is outside the playable interior")]
    RoomBounds,
    #[error("cell belongs to a room")]
    RoomCell,
    #[error("cell is part of the immutable border")]
    ImmutableBorder,
    #[error("cell is not walkable")]
    NotWalkable,
}

/// Errors surfaced by the dungeon model, codec and persistence layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file does not start with the dungeon format tag")]
    BadMagic,
    #[error("unsupported file version {found}")]
    VersionMismatch { found: u32 },
    #[error("declared size {declared} does not match actual size {actual}")]
    SizeMismatch { declared: u32, actual: usize },
    #[error("input too short: need {needed} bytes, have {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("room section has {trailing} trailing bytes")]
    TruncatedRooms { trailing: usize },
    #[error("room {index} is invalid: {reason}")]
    InvalidRoom { index: usize, reason: &'static str },
    #[error("player start ({x}, {y}) is outside the playable interior")]
    InvalidPlayer { x: u8, y: u8 },
    #[error("border cell ({x}, {y}) is not immutable")]
    CorruptBorder { x: usize, y: usize },
    #[error("coordinate ({x}, {y}) is outside the dungeon")]
    OutOfBounds { x: usize, y: usize },
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
    #[error("room {0} not found")]
    NotFound(RoomId),
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
