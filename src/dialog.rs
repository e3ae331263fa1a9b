//! egui frontend over the headless [`Picker`].

use crate::config::{Labels, PickerConfig};
use crate::entry::PickerEntry;
use crate::error::PickerError;
use crate::picker::{Picker, PickerOutcome};
use crate::state::PickerMode;
use crate::style;
use chrono::{DateTime, Local};
use egui_extras::{Column, TableBuilder};
use std::path::PathBuf;

/// What [`FilePickerDialog::show`] hands back to the host.
///
/// Reported at most once per session; the dialog closes itself right
/// after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Picked(PathBuf),
    Cancelled,
}

#[derive(Default)]
struct NewFolderModal {
    name: String,
    error: Option<String>,
    focus_input: bool,
}

/// Modal file/folder picker dialog.
///
/// Construct one when the host wants a path, call [`show`](Self::show)
/// every frame, and drop it once it returns an action.
pub struct FilePickerDialog {
    picker: Picker,
    open: bool,
    new_folder: Option<NewFolderModal>,
}

impl FilePickerDialog {
    pub fn new(mode: PickerMode) -> Self {
        Self::with_config(mode, PickerConfig::default())
    }

    pub fn with_config(mode: PickerMode, config: PickerConfig) -> Self {
        Self {
            picker: Picker::new(mode, config),
            open: true,
            new_folder: None,
        }
    }

    /// Replaces the enumerated storage roots, see [`Picker::with_roots`].
    pub fn with_roots(mut self, roots: Vec<PickerEntry>) -> Self {
        self.picker = self.picker.with_roots(roots);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Renders the dialog and reports the terminal action, if any.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PickerAction> {
        if !self.open {
            return None;
        }
        let labels = self.picker.config().labels.clone();

        // Clicks observed while the table renders are applied afterwards,
        // so the listing is never mutated mid-frame.
        let mut activated: Option<usize> = None;
        let mut confirm_clicked = false;
        let mut cancel_clicked = false;
        let mut new_folder_clicked = false;

        let title = match self.picker.mode() {
            PickerMode::FilePick => labels.select_file_title.clone(),
            PickerMode::FolderPick => labels.select_folder_title.clone(),
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                style::truncated_label(ui, egui::RichText::new(self.picker.subtitle()).weak());
                ui.separator();

                let list_height = style::modal_max_height(ctx).max(style::LIST_MIN_HEIGHT);
                egui::ScrollArea::vertical()
                    .max_height(list_height)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        activated = self.entry_table(ui, &labels);
                    });

                if let Some(notice) = self.picker.notice() {
                    ui.add_space(4.0);
                    ui.colored_label(ui.visuals().warn_fg_color, notice);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    let can_create = self.picker.can_create_folder();
                    if ui
                        .add_enabled(can_create, egui::Button::new(&labels.new_folder_button))
                        .clicked()
                    {
                        new_folder_clicked = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(&labels.cancel_button).clicked() {
                            cancel_clicked = true;
                        }
                        if self.picker.mode() == PickerMode::FolderPick {
                            let can_confirm = self.picker.can_confirm();
                            if ui
                                .add_enabled(
                                    can_confirm,
                                    egui::Button::new(&labels.select_button),
                                )
                                .clicked()
                            {
                                confirm_clicked = true;
                            }
                        }
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.new_folder.is_some() {
                self.new_folder = None;
            } else {
                cancel_clicked = true;
            }
        }

        if new_folder_clicked {
            self.new_folder = Some(NewFolderModal {
                focus_input: true,
                ..Default::default()
            });
        }
        self.show_new_folder_modal(ctx, &labels);

        if cancel_clicked {
            self.open = false;
            return Some(PickerAction::Cancelled);
        }
        if confirm_clicked {
            if let Some(outcome) = self.picker.confirm() {
                return self.finish(outcome);
            }
        }
        if let Some(index) = activated {
            if let Some(outcome) = self.picker.activate(index) {
                return self.finish(outcome);
            }
        }
        None
    }

    fn finish(&mut self, outcome: PickerOutcome) -> Option<PickerAction> {
        self.open = false;
        self.new_folder = None;
        Some(PickerAction::Picked(outcome.into_path()))
    }

    /// The entry listing. Returns the clicked row index, if any.
    fn entry_table(&self, ui: &mut egui::Ui, labels: &Labels) -> Option<usize> {
        let mut activated = None;
        let entries = self.picker.entries();

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(style::ICON_COL_WIDTH))
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .header(style::HEADER_HEIGHT, |mut header| {
                header.col(|_ui| {});
                header.col(|ui| {
                    ui.label("Name");
                });
                header.col(|ui| {
                    ui.label("Size");
                });
                header.col(|ui| {
                    ui.label("Modified");
                });
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, entries.len(), |mut row| {
                    let index = row.index();
                    let entry = &entries[index];

                    row.col(|ui| {
                        ui.label(entry.icon());
                    });
                    row.col(|ui| {
                        let name = match entry {
                            PickerEntry::Up => labels.up.as_str(),
                            entry => entry.name(),
                        };
                        if ui.selectable_label(false, name).clicked() {
                            activated = Some(index);
                        }
                    });
                    row.col(|ui| {
                        if let PickerEntry::File { is_dir: false, size, .. } = entry {
                            ui.label(bytesize::ByteSize(*size).to_string());
                        }
                    });
                    row.col(|ui| {
                        if let PickerEntry::File { modified: Some(at), .. } = entry {
                            let at: DateTime<Local> = (*at).into();
                            ui.label(at.format("%Y-%m-%d %H:%M").to_string());
                        }
                    });
                });
            });

        activated
    }

    fn show_new_folder_modal(&mut self, ctx: &egui::Context, labels: &Labels) {
        let mut submit: Option<String> = None;
        let mut close = false;

        if let Some(modal) = self.new_folder.as_mut() {
            egui::Window::new(&labels.new_folder_title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    let response = ui.text_edit_singleline(&mut modal.name);
                    if modal.focus_input {
                        response.request_focus();
                        modal.focus_input = false;
                    }
                    // Typing a non-blank name clears the validation error.
                    if !modal.name.trim().is_empty() {
                        modal.error = None;
                    }
                    if let Some(error) = &modal.error {
                        ui.colored_label(ui.visuals().error_fg_color, error);
                    }

                    let submitted = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if ui.button(&labels.ok_button).clicked() || submitted {
                            submit = Some(modal.name.clone());
                        }
                        if ui.button(&labels.cancel_button).clicked() {
                            close = true;
                        }
                    });
                });
        }

        if let Some(name) = submit {
            match self.picker.create_folder(&name) {
                Ok(()) => close = true,
                Err(err) => {
                    let message = match err {
                        PickerError::BlankFolderName => labels.blank_folder_name.clone(),
                        other => other.to_string(),
                    };
                    if let Some(modal) = self.new_folder.as_mut() {
                        modal.error = Some(message);
                    }
                }
            }
        }
        if close {
            self.new_folder = None;
        }
    }
}
