//! Headless navigation controller behind the dialog.
//!
//! Everything click-driven lives here: the visited-directory stack, the
//! current ordered listing, the advisory notice and the terminal
//! outcomes. [`crate::dialog`] is a thin egui frontend over this type, so
//! the whole state machine is testable without a UI and other frontends
//! can be bolted on.

use crate::config::PickerConfig;
use crate::entry::PickerEntry;
use crate::error::PickerError;
use crate::io;
use crate::state::{NavigationState, PickerMode};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Terminal result of a picker session. Produced at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// A file was activated in file-pick mode.
    FileSelected(PathBuf),
    /// The current folder was confirmed in folder-pick mode.
    FolderConfirmed(PathBuf),
}

impl PickerOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::FileSelected(path) | Self::FolderConfirmed(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Self::FileSelected(path) | Self::FolderConfirmed(path) => path,
        }
    }
}

/// The picker state machine.
///
/// Starts on the storage-root list; `activate` walks down and up,
/// `confirm` finishes a folder-pick session, `create_folder` adds a
/// directory to the live listing. Once a terminal outcome has been
/// returned the picker is finished and ignores further input.
pub struct Picker {
    mode: PickerMode,
    config: PickerConfig,
    nav: NavigationState,
    /// Top-level storage roots, shown whenever the stack is empty.
    roots: Vec<PickerEntry>,
    /// The currently displayed listing, in final display order.
    entries: Vec<PickerEntry>,
    /// Advisory line under the listing; cleared on the next transition.
    notice: Option<String>,
    finished: bool,
}

impl Picker {
    pub fn new(mode: PickerMode, config: PickerConfig) -> Self {
        let roots = io::storage_roots(&config.labels);
        debug!("picker init: {mode:?}, {} storage roots", roots.len());
        Self {
            mode,
            config,
            nav: NavigationState::new(),
            entries: roots.clone(),
            roots,
            notice: None,
            finished: false,
        }
    }

    /// Replaces the enumerated storage roots. Hosts with their own notion
    /// of browsable roots inject them here before showing the dialog.
    pub fn with_roots(mut self, roots: Vec<PickerEntry>) -> Self {
        if self.nav.at_root() {
            self.entries = roots.clone();
        }
        self.roots = roots;
        self
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn current_path(&self) -> &Path {
        self.nav.current_path()
    }

    pub fn at_root(&self) -> bool {
        self.nav.at_root()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Subtitle for the dialog: the current path, or the storage label
    /// while the root list is up.
    pub fn subtitle(&self) -> String {
        if self.nav.at_root() {
            self.config.labels.roots_title.clone()
        } else {
            self.nav.current_path().display().to_string()
        }
    }

    /// The folder-confirm control applies in folder-pick mode once at
    /// least one descent has happened.
    pub fn can_confirm(&self) -> bool {
        !self.finished && self.mode == PickerMode::FolderPick && !self.nav.at_root()
    }

    /// New folders can be created anywhere below the root list.
    pub fn can_create_folder(&self) -> bool {
        !self.finished && !self.nav.at_root()
    }

    /// Click-driven transition for the entry at `index`.
    ///
    /// `Some` is a terminal outcome and ends the session; `None` means
    /// the picker re-listed and stays open.
    pub fn activate(&mut self, index: usize) -> Option<PickerOutcome> {
        if self.finished {
            return None;
        }
        let entry = self.entries.get(index)?.clone();
        self.notice = None;

        match entry {
            PickerEntry::Up => {
                self.nav.ascend();
                info!("up, now in {}", self.subtitle());
                if self.nav.at_root() {
                    self.entries = self.roots.clone();
                } else {
                    self.relist();
                }
                None
            }
            PickerEntry::File { ref name, is_dir: false, .. } => {
                let picked = self.nav.current_path().join(name);
                info!("picked file {}", picked.display());
                self.finished = true;
                Some(PickerOutcome::FileSelected(picked))
            }
            // First descent from the root list lands on the root's own
            // path instead of appending its display name.
            PickerEntry::Storage { ref path, .. } if self.nav.at_root() => {
                self.nav.descend(path.clone());
                info!("down, now in {}", self.subtitle());
                self.relist();
                None
            }
            entry => {
                let next = self.nav.current_path().join(entry.name());
                self.nav.descend(next);
                info!("down, now in {}", self.subtitle());
                self.relist();
                None
            }
        }
    }

    /// Folder-pick confirmation of the current directory.
    pub fn confirm(&mut self) -> Option<PickerOutcome> {
        if !self.can_confirm() {
            return None;
        }
        let picked = self.nav.current_path().to_path_buf();
        info!("picked folder {}", picked.display());
        self.finished = true;
        Some(PickerOutcome::FolderConfirmed(picked))
    }

    /// Creates `name` under the current directory and splices the new row
    /// into the live listing at its sorted position among the directory
    /// partition. The listing is not re-read.
    pub fn create_folder(&mut self, name: &str) -> Result<(), PickerError> {
        debug_assert!(self.can_create_folder());
        let created = io::create_directory(self.nav.current_path(), name)?;
        info!("created folder {}", created.display());

        let row = PickerEntry::File {
            name: name.to_string(),
            path: created,
            is_dir: true,
            size: 0,
            modified: None,
        };
        let lower = name.to_lowercase();
        let insert_at = self
            .entries
            .iter()
            .enumerate()
            .skip(1) // the up marker stays first
            .find(|(_, e)| !e.is_dir() || e.name().to_lowercase() > lower)
            .map(|(i, _)| i)
            .unwrap_or(self.entries.len());
        self.entries.insert(insert_at, row);
        Ok(())
    }

    /// Relists the current directory with the up marker prepended. An
    /// unreadable directory degrades to an empty listing plus an advisory.
    fn relist(&mut self) {
        let path = self.nav.current_path().to_path_buf();
        let children = match io::read_directory(&path, self.mode, self.config.show_hidden) {
            Ok(children) => children,
            Err(err) => {
                warn!("{err}");
                self.notice = Some(self.config.labels.unreadable_directory.clone());
                Vec::new()
            }
        };
        if children.is_empty() && self.notice.is_none() {
            self.notice = Some(self.config.labels.no_entries.clone());
        }
        self.entries = std::iter::once(PickerEntry::Up).chain(children).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn storage(name: &str, path: &Path) -> PickerEntry {
        PickerEntry::Storage {
            name: name.to_string(),
            path: path.to_path_buf(),
            is_removable: name.contains("External"),
        }
    }

    /// Internal root with a small tree, plus an empty external root.
    fn fixture() -> (TempDir, TempDir) {
        let internal = tempfile::tempdir().unwrap();
        fs::create_dir(internal.path().join("Music")).unwrap();
        fs::create_dir(internal.path().join("docs")).unwrap();
        fs::write(internal.path().join("readme.txt"), b"").unwrap();
        let external = tempfile::tempdir().unwrap();
        (internal, external)
    }

    fn picker(mode: PickerMode, internal: &TempDir, external: &TempDir) -> Picker {
        Picker::new(mode, PickerConfig::default()).with_roots(vec![
            storage("External", external.path()),
            storage("Internal", internal.path()),
        ])
    }

    fn names(picker: &Picker) -> Vec<&str> {
        picker.entries().iter().map(|e| e.name()).collect()
    }

    #[test]
    fn starts_on_the_root_list() {
        let (internal, external) = fixture();
        let p = picker(PickerMode::FilePick, &internal, &external);
        assert!(p.at_root());
        assert_eq!(names(&p), ["External", "Internal"]);
        assert!(!p.can_confirm());
        assert!(!p.can_create_folder());
    }

    #[test]
    fn descend_into_storage_uses_its_path() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FilePick, &internal, &external);

        assert_eq!(p.activate(1), None);
        assert!(!p.at_root());
        assert_eq!(p.current_path(), internal.path());
        assert_eq!(names(&p), ["..", "docs", "Music", "readme.txt"]);
    }

    #[test]
    fn up_from_first_level_restores_the_root_list() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FilePick, &internal, &external);

        p.activate(1);
        assert_eq!(p.activate(0), None); // the up marker
        assert!(p.at_root());
        assert_eq!(names(&p), ["External", "Internal"]);
    }

    #[test]
    fn descend_appends_names_below_the_first_level() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FolderPick, &internal, &external);

        p.activate(1);
        assert_eq!(names(&p), ["..", "docs", "Music"]);
        p.activate(2); // Music
        assert_eq!(p.current_path(), internal.path().join("Music"));

        p.activate(0);
        assert_eq!(p.current_path(), internal.path());
    }

    #[test]
    fn file_activation_is_terminal_in_file_pick_mode() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FilePick, &internal, &external);

        p.activate(1);
        let outcome = p.activate(3).expect("readme.txt should finish the session");
        assert_eq!(
            outcome,
            PickerOutcome::FileSelected(internal.path().join("readme.txt"))
        );
        assert!(p.is_finished());
        assert_eq!(p.activate(1), None);
        assert_eq!(p.confirm(), None);
    }

    #[test]
    fn folder_pick_never_lists_files() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FolderPick, &internal, &external);
        p.activate(1);
        assert!(p.entries().iter().all(|e| e.is_dir()));
    }

    #[test]
    fn confirm_picks_the_current_folder_at_any_depth() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FolderPick, &internal, &external);

        assert_eq!(p.confirm(), None); // disabled on the root list

        p.activate(1);
        p.activate(2); // Music
        assert!(p.can_confirm());
        let outcome = p.confirm().unwrap();
        assert_eq!(
            outcome,
            PickerOutcome::FolderConfirmed(internal.path().join("Music"))
        );
        assert!(p.is_finished());
        assert_eq!(p.confirm(), None);
    }

    #[test]
    fn empty_directory_raises_the_advisory_notice() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FilePick, &internal, &external);

        assert_eq!(p.activate(0), None); // External, empty
        assert_eq!(p.notice(), Some("No entries"));
        assert_eq!(names(&p), [".."]);

        // non-fatal: navigation continues and the notice clears
        p.activate(0);
        assert!(p.notice().is_none());
        assert!(p.at_root());
    }

    #[test]
    fn unreadable_directory_degrades_to_an_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        let mut p = Picker::new(PickerMode::FilePick, PickerConfig::default())
            .with_roots(vec![storage("Internal", &gone)]);

        assert_eq!(p.activate(0), None);
        assert_eq!(p.notice(), Some("Directory cannot be read"));
        assert_eq!(names(&p), [".."]);
        assert!(!p.is_finished());
    }

    #[test]
    fn create_folder_splices_into_sorted_position() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FilePick, &internal, &external);
        p.activate(1);

        p.create_folder("gamma").unwrap();
        assert_eq!(names(&p), ["..", "docs", "gamma", "Music", "readme.txt"]);
        assert!(internal.path().join("gamma").is_dir());

        // sorts after every directory but before the files
        p.create_folder("zzz").unwrap();
        assert_eq!(
            names(&p),
            ["..", "docs", "gamma", "Music", "zzz", "readme.txt"]
        );
    }

    #[test]
    fn create_folder_blank_name_changes_nothing() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FolderPick, &internal, &external);
        p.activate(1);
        let before = names(&p)
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let err = p.create_folder("   ").unwrap_err();
        assert!(matches!(err, PickerError::BlankFolderName));
        assert_eq!(names(&p), before);
        assert_eq!(p.current_path(), internal.path());
    }

    #[test]
    fn create_folder_failure_is_surfaced_not_swallowed() {
        let (internal, external) = fixture();
        let mut p = picker(PickerMode::FolderPick, &internal, &external);
        p.activate(1);

        let err = p.create_folder("docs").unwrap_err();
        assert!(matches!(err, PickerError::FolderCreateFailed { .. }));
        assert_eq!(names(&p), ["..", "docs", "Music"]);
    }
}
