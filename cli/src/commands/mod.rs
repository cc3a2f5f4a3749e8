use std::path::PathBuf;

use tokio::task::JoinHandle;

use uelaunch::core::settings::Settings;
use uelaunch::ops::{SyncChoice, UiHandle};

use crate::term::TerminalShell;

mod check;
mod config;
mod detect;
mod open;
mod push;

pub(crate) use check::CheckCommand;
pub(crate) use config::ConfigCommand;
pub(crate) use detect::DetectCommand;
pub(crate) use open::OpenCommand;
pub(crate) use push::PushCommand;

pub(crate) trait CliCommand {
    async fn exec(self) -> anyhow::Result<()>;
}

pub(crate) fn settings_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(Settings::default_path)
}

/// A UI channel whose requests are printed by the terminal shell.
pub(crate) struct Session {
    pub ui: UiHandle,
    shell: JoinHandle<()>,
}

impl Session {
    pub fn start(choice: Option<SyncChoice>) -> Self {
        let (ui, recv) = UiHandle::channel();
        let shell = tokio::spawn(TerminalShell::new(choice).run(recv));
        Self { ui, shell }
    }

    /// wait until everything sent has been printed
    pub async fn finish(self) {
        drop(self.ui);
        if let Err(e) = self.shell.await {
            log::error!("terminal shell stopped: {}", e);
        }
    }
}
