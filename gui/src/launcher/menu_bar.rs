use eframe::egui;

use crate::launcher::misc::open_in_file_explorer;
use crate::launcher::Launcher;
use crate::utils::command::CommandType;
use crate::utils::defines::MENU_BOX_WIDTH;
use crate::utils::logger::LOG_DIR;

impl Launcher {
    pub(crate) fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            // Project menu
            ui.menu_button("Project", |ui| {
                ui.set_min_width(MENU_BOX_WIDTH);
                if ui.button("  Open Project").clicked() {
                    self.exec_ops(CommandType::OpenProject);
                    ui.close_menu();
                }

                if ui.button("  Check Git Now").clicked() {
                    self.exec_ops(CommandType::CheckNow);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("  Push to origin").clicked() {
                    self.exec_ops(CommandType::Push);
                    ui.close_menu();
                }
            });

            // Settings menu
            ui.menu_button("Settings", |ui| {
                ui.set_min_width(MENU_BOX_WIDTH);
                if ui.button("  Settings").clicked() {
                    self.open_settings_window();
                    ui.close_menu();
                }

                // theme button
                ui.menu_button("  Theme", |ui| {
                    egui::widgets::global_dark_light_mode_buttons(ui);
                });
            });

            // Help menu
            ui.menu_button("Help", |ui| {
                ui.set_min_width(MENU_BOX_WIDTH);
                if ui.button("  Open Log Folder").clicked() {
                    open_in_file_explorer(&LOG_DIR.to_string_lossy());
                    ui.close_menu();
                }
            });
        });
    }
}
