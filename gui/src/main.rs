// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::NativeOptions;

use launcher::Launcher;

use crate::utils::defines::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::utils::logger::{init_log, install_panic_hook};
use crate::utils::runtime::init_runtime;

pub(crate) mod launcher;
pub(crate) mod utils;

fn main() {
    if let Err(e) = init_log() {
        eprintln!("failed to init log: {:#}", e);
    }
    install_panic_hook();

    if let Err(e) = init_runtime() {
        log::error!("failed to start tokio runtime: {}", e);
        eprintln!("failed to start tokio runtime: {}", e);
        return;
    }

    let native_options = NativeOptions {
        initial_window_size: Some([DEFAULT_WIDTH, DEFAULT_HEIGHT].into()),
        min_window_size: Some(eframe::egui::vec2(MIN_WIDTH, MIN_HEIGHT)),
        decorated: true,
        transparent: false,
        resizable: true,
        ..NativeOptions::default()
    };

    eframe::run_native(
        &format!(
            "{} {}",
            std::env!("CARGO_PKG_NAME"),
            std::env!("CARGO_PKG_VERSION")
        ),
        native_options,
        Box::new(|cc| Box::new(Launcher::new(cc))),
    );
}
