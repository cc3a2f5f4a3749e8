use eframe::egui::Color32;

pub const DEFAULT_WIDTH: f32 = 760.0;
pub const DEFAULT_HEIGHT: f32 = 560.0;
pub const MIN_WIDTH: f32 = 560.0;
pub const MIN_HEIGHT: f32 = 400.0;

pub const MENU_BOX_WIDTH: f32 = 180.0;

/// written to the working directory when the launcher panics
pub const CRASH_LOG_FILE: &str = "launcher_error.log";

pub const LOG_FILE: &str = "launcher.log";

pub mod text_color {
    use super::*;
    pub const BLUE: Color32 = Color32::from_rgb(87, 167, 250);
    pub const RED: Color32 = Color32::from_rgb(202, 86, 44);
    pub const GREEN: Color32 = Color32::from_rgb(0, 200, 0);
    pub const YELLOW: Color32 = Color32::from_rgb(194, 169, 19);
    pub const GRAY: Color32 = Color32::GRAY;
}
