// SPDX-License-Identifier: MPL-2.0
//! Windows `.ico` container encoding, writing and inspection.
//!
//! Frames are encoded in memory first and then moved into place through a
//! temporary file in the destination directory, so a failed run never leaves
//! a truncated container or clobbers a previous one.

use crate::config::{DEFAULT_ICON_MODE, MAX_ICON_DIMENSION};
use crate::error::{Error, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image_rs::RgbaImage;
use std::fmt;
use std::fs::{self, File, Permissions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Pixel dimensions declared by one container entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    #[must_use]
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Encodes `frames` into an in-memory `.ico` container.
///
/// The frame with the longest edge becomes the first directory entry; the
/// others follow in their original order. Frames over [`MAX_ICON_DIMENSION`]
/// on either side are rejected because the directory cannot describe them.
///
/// # Errors
///
/// Returns [`Error::Write`] if there are no frames, a frame is too large, or
/// the codec fails to encode an entry.
pub fn encode_icon(frames: &[RgbaImage]) -> Result<Vec<u8>> {
    let primary = frames
        .iter()
        .enumerate()
        .max_by_key(|(_, frame)| frame.width().max(frame.height()))
        .map(|(index, _)| index)
        .ok_or_else(|| Error::Write("no frames to encode".to_string()))?;

    let ordered = std::iter::once(&frames[primary]).chain(
        frames
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != primary)
            .map(|(_, frame)| frame),
    );

    let mut dir = IconDir::new(ResourceType::Icon);
    for frame in ordered {
        let (width, height) = frame.dimensions();
        if width > MAX_ICON_DIMENSION || height > MAX_ICON_DIMENSION {
            return Err(Error::Write(format!(
                "{width}x{height} frame exceeds the {MAX_ICON_DIMENSION}px icon limit"
            )));
        }
        let image = IconImage::from_rgba_data(width, height, frame.as_raw().clone());
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| Error::Write(format!("failed to encode {width}x{height} frame: {e}")))?;
        debug!(width, height, bytes = entry.data().len(), "encoded icon entry");
        dir.add_entry(entry);
    }

    let mut bytes = Vec::new();
    dir.write(&mut bytes)
        .map_err(|e| Error::Write(format!("failed to serialize icon directory: {e}")))?;
    Ok(bytes)
}

/// Writes an encoded container to `path`, replacing any existing file.
///
/// The bytes land in a temporary file next to `path` and are renamed over it,
/// so on failure the destination is left exactly as it was. The new file
/// takes the permissions of the file it replaces, or [`DEFAULT_ICON_MODE`]
/// on Unix when there was none.
///
/// # Errors
///
/// Returns [`Error::Write`] if the parent directory is missing or not
/// writable, or if the rename fails.
pub fn write_icon(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = parent_dir(path);
    let mut staged = NamedTempFile::new_in(&dir).map_err(|e| Error::write_at(path, e))?;
    staged
        .write_all(bytes)
        .and_then(|()| staged.flush())
        .map_err(|e| Error::write_at(path, e))?;
    if let Some(permissions) = target_permissions(path) {
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::write_at(path, e))?;
    }
    staged
        .persist(path)
        .map_err(|e| Error::write_at(path, e.error))?;
    debug!(path = %path.display(), bytes = bytes.len(), "icon written");
    Ok(())
}

/// Re-opens a container and returns the entry sizes it declares, ascending.
///
/// A 256-pixel entry, stored as `0` in the directory byte, is reported as 256.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be opened or is not an icon
/// container.
pub fn read_icon_sizes(path: &Path) -> Result<Vec<IconSize>> {
    let file = File::open(path).map_err(|e| Error::decode_at(path, e))?;
    let dir = IconDir::read(BufReader::new(file)).map_err(|e| Error::decode_at(path, e))?;
    Ok(sizes_of(&dir))
}

fn sizes_of(dir: &IconDir) -> Vec<IconSize> {
    let mut sizes: Vec<IconSize> = dir
        .entries()
        .iter()
        .map(|entry| IconSize {
            width: entry.width(),
            height: entry.height(),
        })
        .collect();
    sizes.sort();
    sizes
}

/// Permissions for a file about to replace `path`. Temp files are created
/// owner-only, so they must not leak into the generated artifact.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(DEFAULT_ICON_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
