use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// A single row in the picker listing.
///
/// `Up` and `Storage` are synthetic rows injected by the picker; `File`
/// mirrors a real child of the current directory.
#[derive(Clone, Debug, PartialEq)]
pub enum PickerEntry {
    /// "Go up one level". Always the first row while below the root list.
    Up,
    /// A storage root shown on the top-level list.
    Storage {
        name: String,
        path: PathBuf,
        is_removable: bool,
    },
    /// A regular file or directory.
    File {
        name: String,
        path: PathBuf,
        is_dir: bool,
        size: u64,
        modified: Option<SystemTime>,
    },
}

impl PickerEntry {
    /// Builds a `File` row from a path, reading its metadata. Returns
    /// `None` for paths without a final component.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();

        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata.as_ref().and_then(|m| m.modified().ok());

        Some(Self::File {
            name,
            path,
            is_dir,
            size,
            modified,
        })
    }

    /// Row name. The up marker reports ".."; the dialog substitutes the
    /// host-facing label when rendering.
    pub fn name(&self) -> &str {
        match self {
            Self::Up => "..",
            Self::Storage { name, .. } => name,
            Self::File { name, .. } => name,
        }
    }

    /// Up and storage rows are directories unconditionally.
    pub fn is_dir(&self) -> bool {
        match self {
            Self::Up | Self::Storage { .. } => true,
            Self::File { is_dir, .. } => *is_dir,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Up => "⬆",
            Self::Storage { .. } => "💾",
            Self::File { is_dir: true, .. } => "📁",
            Self::File { .. } => "📄",
        }
    }
}
