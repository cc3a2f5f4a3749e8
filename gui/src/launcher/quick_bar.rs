use eframe::egui;

use crate::launcher::Launcher;
use crate::utils::command::CommandType;

impl Launcher {
    pub(crate) fn quick_bar(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::left_to_right(egui::Align::LEFT), |ui| {
            let button_size = [140.0, 36.0];

            // open project button
            let open_button_response = ui.add_sized(button_size, egui::Button::new("Open Project"));
            if open_button_response.clicked() {
                self.exec_ops(CommandType::OpenProject);
            }

            // check button
            let check_button_response =
                ui.add_sized(button_size, egui::Button::new("Check Git Now"));
            if check_button_response.clicked() {
                self.exec_ops(CommandType::CheckNow);
            }

            // settings button
            let settings_button_response = ui.add_sized(button_size, egui::Button::new("Settings"));
            if settings_button_response.clicked() {
                self.open_settings_window();
            }
        });
    }
}
