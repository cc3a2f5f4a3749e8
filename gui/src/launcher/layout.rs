use eframe::egui;
use eframe::egui::style::Margin;
use eframe::egui::{Frame, RichText, Rounding, Stroke};

use crate::launcher::Launcher;
use crate::utils::defines::text_color;

// ========================================
// ui design for app
// ========================================
impl Launcher {
    /// menu and quick bar panel of app
    pub(crate) fn top_view(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("uelaunch_top_bar")
            .frame(Frame {
                inner_margin: Margin::symmetric(8.0, 2.0),
                rounding: Rounding::none(),
                fill: ctx.style().visuals.window_fill(),
                stroke: Stroke::none(),
                ..Default::default()
            })
            .show(ctx, |ui| {
                ui.set_enabled(!self.is_modal());
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 5.0);

                // menu bar
                self.menu_bar(ui);

                // quick bar
                self.quick_bar(ui);

                ui.add_space(4.0);
            });
    }

    /// status line at the bottom of app
    pub(crate) fn status_view(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("uelaunch_status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.status).color(text_color::GRAY));

                if !self.tasks.is_empty() {
                    let running: Vec<String> =
                        self.tasks.iter().map(|(command, _)| command.to_string()).collect();
                    ui.label(
                        RichText::new(format!("running: {}", running.join(", ")))
                            .color(text_color::YELLOW),
                    );
                }

                if self.auto_check_task.is_some() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("auto-check on").color(text_color::GREEN));
                    });
                }
            });
        });
    }

    /// project summary and log of app
    pub(crate) fn content_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(!self.is_modal());
            ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                ui.heading("Project");
                self.project_panel(ui);

                ui.separator();

                ui.horizontal(|ui| {
                    ui.heading("Log");
                    if ui.small_button("Clear").clicked() {
                        self.log_lines.clear();
                    }
                });

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in &self.log_lines {
                            ui.monospace(line.as_str());
                        }
                    });
            });
        });
    }

    fn project_panel(&mut self, ui: &mut egui::Ui) {
        let unset = |value: &str| match value.trim().is_empty() {
            true => RichText::new("(not set)").color(text_color::RED),
            false => RichText::new(value.trim().to_string()).color(text_color::BLUE),
        };

        egui::Grid::new("project_grid")
            .num_columns(2)
            .min_col_width(140.0)
            .striped(false)
            .show(ui, |ui| {
                ui.label("Project");
                ui.label(unset(&self.settings.project_file));
                ui.end_row();

                ui.label("Editor");
                ui.label(unset(&self.settings.editor));
                ui.end_row();

                ui.label("Before opening");
                let mut steps = Vec::new();
                if self.settings.autogen {
                    steps.push("generate project files");
                }
                if self.settings.autobuild {
                    steps.push("build editor");
                }
                match steps.is_empty() {
                    true => ui.label("launch only"),
                    false => ui.label(steps.join(", ")),
                };
                ui.end_row();
            });
    }
}
