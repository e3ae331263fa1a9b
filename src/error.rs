use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error kinds surfaced by the picker.
///
/// None of these end a session; each is terminal to the current operation
/// only. An unreadable directory becomes an empty listing plus an
/// advisory, the other two are inline validation errors in the new-folder
/// dialog.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("cannot read {}: {source}", path.display())]
    UnreadableDirectory { path: PathBuf, source: io::Error },

    #[error("folder name must not be blank")]
    BlankFolderName,

    #[error("cannot create {}: {source}", path.display())]
    FolderCreateFailed { path: PathBuf, source: io::Error },
}
