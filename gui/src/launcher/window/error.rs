use eframe::egui;
use eframe::egui::RichText;

use crate::utils::defines::text_color;

#[derive(Default)]
pub struct ErrorWindow {
    content: String,
}

impl ErrorWindow {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

impl super::WindowBase for ErrorWindow {
    fn name(&self) -> String {
        "Errors".to_string()
    }

    fn width(&self) -> f32 {
        320.0
    }

    fn height(&self) -> f32 {
        100.0
    }
}

impl super::View for ErrorWindow {
    fn ui(&mut self, ui: &mut egui::Ui) {
        use super::WindowBase;
        ui.set_min_size(egui::vec2(self.width(), self.height()));
        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.add_space(5.0);

            ui.label(RichText::new(&self.content).color(text_color::RED));
            ui.label("Git checks fail until a suitable git is installed.");

            ui.add_space(5.0);

            ui.hyperlink_to("git official website".to_string(), "https://git-scm.com/");
        });
    }
}
