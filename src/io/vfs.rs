//! VFS file format I/O.
//!
//! VFS is the native JSON format for room heat-loss models: the room scalars
//! plus the six walls with their persisted `Area`/`UValue`/`Q`. Loading
//! trusts the persisted derived values as-is; re-derivation after load is an
//! explicit recompute on the returned room.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{HeatLossResult, SerializationError};
use crate::model::Room;

/// File extension of persisted room models.
pub const VFS_EXTENSION: &str = "vfs";

/// Reads a room model from a `.vfs` (JSON) file.
///
/// The extension is checked (ASCII case-insensitively) before any I/O. A
/// missing or unreadable file is an I/O error; unparsable content, a wall
/// count other than six, or a wall list that does not carry indices 0-5 in
/// order is a serialization error. The room is fully constructed before
/// being returned, so a failed load leaves any previously loaded model in
/// the caller's hands untouched.
///
/// # Example
/// ```no_run
/// use heatloss::io::read_vfs;
/// use std::path::Path;
///
/// let room = read_vfs(Path::new("model.vfs")).unwrap();
/// println!("heat loss: {} W", room.heat_loss());
/// ```
pub fn read_vfs(path: &Path) -> HeatLossResult<Room> {
    check_vfs_extension(path)?;
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let room: Room = serde_json::from_reader(reader).map_err(SerializationError::Json)?;
    check_wall_roles(&room)?;

    debug!(path = %path.display(), "room model loaded");
    Ok(room)
}

/// Writes a room model to a `.vfs` (JSON) file and returns the path actually
/// written; the `.vfs` extension is appended when the given path lacks it.
///
/// The write is atomic: the JSON goes to a temporary file in the destination
/// directory which is then renamed over the target, so a failure never
/// leaves a truncated model behind.
///
/// # Example
/// ```no_run
/// use heatloss::io::write_vfs;
/// use heatloss::Room;
/// use std::path::Path;
///
/// let room = Room::new(3.0, 4.0, 5.0).unwrap();
/// let written = write_vfs(Path::new("model"), &room).unwrap();
/// assert_eq!(written, Path::new("model.vfs"));
/// ```
pub fn write_vfs(path: &Path, room: &Room) -> HeatLossResult<PathBuf> {
    let path = ensure_vfs_extension(path);
    let json = to_vfs_string(room)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.persist(&path).map_err(|e| e.error)?;

    debug!(path = %path.display(), "room model saved");
    Ok(path)
}

/// Serializes a room model to a VFS JSON string.
///
/// Useful for in-memory round trips and tests.
pub fn to_vfs_string(room: &Room) -> HeatLossResult<String> {
    Ok(serde_json::to_string_pretty(room).map_err(SerializationError::Json)?)
}

/// Deserializes a room model from a VFS JSON string.
pub fn from_vfs_string(json: &str) -> HeatLossResult<Room> {
    let room: Room = serde_json::from_str(json).map_err(SerializationError::Json)?;
    check_wall_roles(&room)?;
    Ok(room)
}

fn check_vfs_extension(path: &Path) -> Result<(), SerializationError> {
    let matches = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(VFS_EXTENSION));
    if matches {
        Ok(())
    } else {
        Err(SerializationError::NotAVfsFile {
            path: path.to_path_buf(),
        })
    }
}

fn ensure_vfs_extension(path: &Path) -> PathBuf {
    if check_vfs_extension(path).is_ok() {
        return path.to_path_buf();
    }
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".");
    os.push(VFS_EXTENSION);
    PathBuf::from(os)
}

/// Position `i` in the persisted wall list must carry orientation index `i`;
/// everything else in the file is trusted as-is.
fn check_wall_roles(room: &Room) -> Result<(), SerializationError> {
    for (position, wall) in room.walls().iter().enumerate() {
        if wall.index() != position {
            return Err(SerializationError::WallIndexMismatch {
                position,
                index: wall.index(),
            });
        }
    }
    Ok(())
}
