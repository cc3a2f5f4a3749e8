use eframe::egui;
use eframe::egui::{Ui, Vec2};

use crate::launcher::Launcher;

pub(crate) mod dialog;
pub(crate) mod error;
pub(crate) mod settings;

impl Launcher {
    /// part of app
    pub(crate) fn handle_windows(&mut self, ctx: &egui::Context, eframe: &mut eframe::Frame) {
        // show settings window
        if self.settings_is_open {
            self.settings_window
                .show(ctx, eframe, &mut self.settings_is_open);
        }

        if let Some(settings) = self.settings_window.take_saved() {
            self.apply_settings(settings);
        }

        // show dialogs, oldest first
        if self.prompt_dialog.is_open() {
            let mut open = true;
            self.prompt_dialog.show(ctx, eframe, &mut open);
            if !open {
                self.prompt_dialog.dismiss();
            }
        }

        // show error window
        if self.error_is_open {
            self.error_window
                .show(ctx, eframe, &mut self.error_is_open);
        }
    }
}

pub trait View {
    fn ui(&mut self, ui: &mut Ui);
}

pub trait WindowBase: View {
    fn name(&self) -> String;

    fn width(&self) -> f32;

    fn height(&self) -> f32;

    fn default_pos(&self, screen_rect: &Vec2) -> [f32; 2] {
        [
            ((screen_rect.x - self.width()) * 0.5).max(0.0),
            ((screen_rect.y - self.height()) * 0.5).max(0.0),
        ]
    }

    #[allow(unused_variables)]
    fn before_show(&mut self, ctx: &egui::Context, eframe: &mut eframe::Frame, open: &mut bool) {}

    // show window
    fn show(&mut self, ctx: &egui::Context, eframe: &mut eframe::Frame, open: &mut bool) {
        let default_pos = self.default_pos(&eframe.info().window_info.size);

        self.before_show(ctx, eframe, open);
        egui::Window::new(self.name())
            .fixed_pos(default_pos)
            .fixed_size([self.width(), self.height()])
            .collapsible(false)
            .open(open)
            .show(ctx, |ui| {
                self.ui(ui);
            });
        self.after_show(ctx, eframe, open);
    }

    #[allow(unused_variables)]
    fn after_show(&mut self, ctx: &egui::Context, eframe: &mut eframe::Frame, open: &mut bool) {}
}
