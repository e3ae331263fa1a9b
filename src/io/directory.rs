use crate::entry::PickerEntry;
use crate::error::PickerError;
use crate::state::PickerMode;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the immediate children of `path`: directories first, then files
/// (files only in file-pick mode), each partition sorted ascending
/// case-insensitively by name. Recomputed fresh on every call; nothing is
/// cached.
pub fn read_directory(
    path: &Path,
    mode: PickerMode,
    show_hidden: bool,
) -> Result<Vec<PickerEntry>, PickerError> {
    let read_dir = fs::read_dir(path).map_err(|source| PickerError::UnreadableDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !show_hidden {
            if let Some(name) = path.file_name() {
                if name.to_string_lossy().starts_with('.') {
                    continue;
                }
            }
        }
        if let Some(entry) = PickerEntry::from_path(path) {
            if entry.is_dir() {
                dirs.push(entry);
            } else if mode == PickerMode::FilePick {
                files.push(entry);
            }
        }
    }

    dirs.sort_by(by_name);
    files.sort_by(by_name);
    dirs.extend(files);
    Ok(dirs)
}

/// Ascending case-insensitive name order, shared by every listing.
pub(crate) fn by_name(a: &PickerEntry, b: &PickerEntry) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

/// Creates `name` under `parent`. Blank names are rejected before any
/// filesystem call is made.
pub fn create_directory(parent: &Path, name: &str) -> Result<PathBuf, PickerError> {
    if name.trim().is_empty() {
        return Err(PickerError::BlankFolderName);
    }

    let new_dir = parent.join(name);
    fs::create_dir(&new_dir).map_err(|source| PickerError::FolderCreateFailed {
        path: new_dir.clone(),
        source,
    })?;
    Ok(new_dir)
}
