/// What the host asked the picker to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    /// Show folders only. The confirm control picks the current folder;
    /// use this when saving something somewhere.
    FolderPick,
    /// Show folders and files. Activating a file picks it; use this when
    /// loading something.
    FilePick,
}
