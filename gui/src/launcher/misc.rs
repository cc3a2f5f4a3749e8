use std::any::Any;

use eframe::egui;
use eframe::egui::FontFamily::{Monospace, Proportional};
use eframe::egui::{FontId, TextStyle};

use uelaunch::core::git::Git;

pub fn configure_text_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Body, FontId::new(15.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Button, FontId::new(15.0, Proportional)),
        (TextStyle::Small, FontId::new(12.0, Proportional)),
    ]
    .into();
    ctx.set_style(style);
}

/// make sure git is installed and new enough
pub fn check_git_valid(git: &Git) -> Result<(), String> {
    match git.check_version() {
        Ok(version) => {
            log::info!("git {}", version);
            Ok(())
        }
        Err(e) => {
            log::error!("{}", e);
            Err(format!("{}\n", e))
        }
    }
}

/// text of a panic payload caught from a task
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(msg) => msg.to_string(),
            Err(_) => "unknown panic".to_string(),
        },
    }
}

pub fn open_in_file_explorer(path: &str) {
    let (explorer, path) = if cfg!(target_os = "windows") {
        ("explorer", path.replace('/', "\\"))
    } else if cfg!(target_os = "macos") {
        ("open", path.to_string())
    } else {
        ("xdg-open", path.to_string())
    };
    if let Err(e) = std::process::Command::new(explorer).arg(&path).spawn() {
        log::error!("open in file explorer failed: {}", e);
    }
}
