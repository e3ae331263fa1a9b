use eframe::egui;
use egui_file_picker::{FilePickerDialog, PickerAction, PickerMode};
use std::path::PathBuf;

#[derive(Default)]
struct PickerDemo {
    picker: Option<FilePickerDialog>,
    picked: Option<PathBuf>,
    cancelled: bool,
}

impl eframe::App for PickerDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("egui-file-picker demo");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Pick a file…").clicked() {
                    self.picker = Some(FilePickerDialog::new(PickerMode::FilePick));
                }
                if ui.button("Pick a folder…").clicked() {
                    self.picker = Some(FilePickerDialog::new(PickerMode::FolderPick));
                }
            });

            ui.add_space(12.0);
            if let Some(path) = &self.picked {
                ui.label(format!("Picked: {}", path.display()));
            } else if self.cancelled {
                ui.label("Cancelled");
            }
        });

        if let Some(picker) = self.picker.as_mut() {
            match picker.show(ctx) {
                Some(PickerAction::Picked(path)) => {
                    self.picked = Some(path);
                    self.cancelled = false;
                    self.picker = None;
                }
                Some(PickerAction::Cancelled) => {
                    self.cancelled = true;
                    self.picker = None;
                }
                None => {}
            }
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("egui-file-picker demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui-file-picker demo",
        options,
        Box::new(|_cc| Ok(Box::new(PickerDemo::default()))),
    )
}
