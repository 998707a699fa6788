//! Blocking save/load around the codec.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::codec;
use crate::constants::DEFAULT_SAVE_FILE;
use crate::dungeon::Dungeon;
use crate::error::{Error, Result};

/// Save file in the current working directory
pub fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_FILE)
}

/// Sibling file the encoded bytes are staged in before replacing `path`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Encode the whole dungeon, stage it next to `path`, then rename over it.
///
/// A failed save leaves any existing file at `path` untouched.
pub fn save(dungeon: &Dungeon, path: &Path) -> Result<()> {
    let bytes = codec::encode(dungeon);
    let temp = temp_path(path);

    let staged = File::create(&temp).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = staged {
        let _ = fs::remove_file(&temp);
        return Err(Error::io(&temp, e));
    }
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(Error::io(path, e));
    }

    info!(path = %path.display(), bytes = bytes.len(), rooms = dungeon.room_count(), "saved dungeon");
    Ok(())
}

pub fn load(path: &Path) -> Result<Dungeon> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    match codec::decode(&bytes) {
        Ok(dungeon) => {
            info!(path = %path.display(), bytes = bytes.len(), rooms = dungeon.room_count(), "loaded dungeon");
            Ok(dungeon)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "rejected dungeon file");
            Err(err)
        }
    }
}
