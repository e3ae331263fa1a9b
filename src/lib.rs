//! # egui-file-picker
//!
//! A modal file and folder picker dialog for egui applications.
//!
//! The picker opens on a list of storage roots (mounted disks plus the
//! home directory), lets the user walk down through directories, and
//! hands the host a path exactly once: the activated file in file-pick
//! mode, or the confirmed current folder in folder-pick mode. Listings
//! are always directories first, then files, each group sorted
//! case-insensitively by name.
//!
//! The navigation state machine is headless ([`Picker`]) and the dialog
//! ([`FilePickerDialog`]) is a thin egui frontend over it, so the widget
//! logic is fully testable without a UI.
//!
//! ## Example
//!
//! ```no_run
//! use egui_file_picker::{FilePickerDialog, PickerAction, PickerMode};
//! use std::path::PathBuf;
//!
//! struct Host {
//!     picker: Option<FilePickerDialog>,
//!     picked: Option<PathBuf>,
//! }
//!
//! fn ui(host: &mut Host, ctx: &egui::Context) {
//!     if let Some(picker) = host.picker.as_mut() {
//!         match picker.show(ctx) {
//!             Some(PickerAction::Picked(path)) => {
//!                 host.picked = Some(path);
//!                 host.picker = None;
//!             }
//!             Some(PickerAction::Cancelled) => host.picker = None,
//!             None => {}
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod dialog;
pub mod entry;
pub mod error;
pub mod io;
pub mod picker;
pub mod state;
mod style;

pub use config::{Labels, PickerConfig};
pub use dialog::{FilePickerDialog, PickerAction};
pub use entry::PickerEntry;
pub use error::PickerError;
pub use picker::{Picker, PickerOutcome};
pub use state::{NavigationState, PickerMode};
