use eframe::egui;
use eframe::egui::RichText;
use poll_promise::Promise;

use uelaunch::core::settings::Settings;
use uelaunch::core::tools::{locate, DetectedTools};
use uelaunch::ops::CHECK_INTERVAL;

use crate::utils::defines::text_color;

/// Edits a copy of the settings; nothing is applied until Save.
#[derive(Default)]
pub struct SettingsWindow {
    draft: Settings,
    detecting: Option<Promise<DetectedTools>>,
    detect_message: String,
    saved: Option<Settings>,
    close_requested: bool,
}

impl SettingsWindow {
    pub fn edit(&mut self, settings: &Settings) {
        self.draft = settings.clone();
        self.detect_message.clear();
        self.saved = None;
        self.close_requested = false;
    }

    /// settings confirmed with Save since the last call
    pub fn take_saved(&mut self) -> Option<Settings> {
        self.saved.take()
    }

    fn start_detect(&mut self) {
        let engine_dir = self.draft.engine_dir.trim().to_string();
        self.detect_message = "searching...".to_string();
        self.detecting = Some(Promise::spawn_thread("detect_tools", move || {
            locate(engine_dir)
        }));
    }

    fn poll_detect(&mut self, ui: &mut egui::Ui) {
        let found = match &self.detecting {
            Some(promise) => promise.ready().cloned(),
            None => return,
        };

        let Some(tools) = found else {
            ui.ctx().request_repaint();
            return;
        };
        self.detecting = None;

        let mut names = Vec::new();
        if let Some(path) = &tools.build_tool {
            self.draft.build_tool = path.to_string_lossy().into_owned();
            names.push("UnrealBuildTool.exe");
        }
        if let Some(path) = &tools.editor {
            self.draft.editor = path.to_string_lossy().into_owned();
            names.push("UnrealEditor.exe");
        }
        self.detect_message = match names.is_empty() {
            true => "no tools found in the engine folder".to_string(),
            false => format!("found {}", names.join(" and ")),
        };
    }
}

fn path_edit(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(420.0),
    );
}

fn pick_file(title: &str, filter_name: &str, extension: &str) -> Option<String> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter(filter_name, &[extension])
        .pick_file()
        .map(|path| path.to_string_lossy().into_owned())
}

impl super::WindowBase for SettingsWindow {
    fn name(&self) -> String {
        "Settings".to_string()
    }

    fn width(&self) -> f32 {
        680.0
    }

    fn height(&self) -> f32 {
        320.0
    }

    fn after_show(&mut self, _ctx: &egui::Context, _eframe: &mut eframe::Frame, open: &mut bool) {
        if self.close_requested {
            self.close_requested = false;
            *open = false;
        }
    }
}

impl super::View for SettingsWindow {
    fn ui(&mut self, ui: &mut egui::Ui) {
        self.poll_detect(ui);

        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 10.0);

            egui::Grid::new("settings_grid")
                .num_columns(3)
                .min_col_width(80.0)
                .striped(false)
                .show(ui, |ui| {
                    ui.label("Engine Folder");
                    path_edit(ui, &mut self.draft.engine_dir, "E:/UE_5.4");
                    if ui.button("Browse").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_title("Select UE Engine Folder")
                            .pick_folder()
                        {
                            self.draft.engine_dir = path.to_string_lossy().into_owned();
                        }
                    }
                    ui.end_row();

                    ui.label(".uproject");
                    path_edit(ui, &mut self.draft.project_file, "E:/Project/MyProj.uproject");
                    if ui.button("Browse").clicked() {
                        if let Some(path) = pick_file("Select .uproject", "Unreal Project", "uproject") {
                            self.draft.project_file = path;
                        }
                    }
                    ui.end_row();

                    ui.label("UnrealBuildTool.exe");
                    path_edit(ui, &mut self.draft.build_tool, ".../UnrealBuildTool.exe");
                    let detect = ui.add_enabled(self.detecting.is_none(), egui::Button::new("Detect"));
                    if detect.clicked() {
                        self.start_detect();
                    }
                    ui.end_row();

                    ui.label("UnrealEditor.exe");
                    path_edit(ui, &mut self.draft.editor, ".../UnrealEditor.exe");
                    if ui.button("Browse").clicked() {
                        if let Some(path) = pick_file("Select UnrealEditor.exe", "Executable", "exe") {
                            self.draft.editor = path;
                        }
                    }
                    ui.end_row();
                });

            if !self.detect_message.is_empty() {
                ui.label(RichText::new(&self.detect_message).color(text_color::BLUE));
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.draft.autogen, "Generate Project Files before opening");
                ui.checkbox(&mut self.draft.autobuild, "Build Editor before opening");
                ui.checkbox(
                    &mut self.draft.auto_check,
                    format!("Auto-check Git every {}s", CHECK_INTERVAL.as_secs()),
                );
            });

            ui.separator();

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    self.saved = Some(self.draft.clone());
                    self.close_requested = true;
                }
                if ui.button("Cancel").clicked() {
                    self.close_requested = true;
                }
            });
        });
    }
}
