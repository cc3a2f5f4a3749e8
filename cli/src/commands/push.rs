use clap::Args;
use std::path::PathBuf;

use uelaunch::core::git::Git;
use uelaunch::core::settings::Settings;
use uelaunch::ops::{push_current, CheckGate};

use crate::commands::{settings_path, CliCommand, Session};

#[derive(Debug, Clone, Default, Args)]
/// Push the current branch to origin
pub(crate) struct PushCommand {
    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliCommand for PushCommand {
    async fn exec(self) -> anyhow::Result<()> {
        let settings = Settings::load_or_default(settings_path(self.config));
        let git: Git = Git::default();
        let gate = CheckGate::default();

        let session = Session::start(None);
        let pushed = push_current(&git, &gate, settings.project_file.trim(), &session.ui).await;
        session.finish().await;

        if !pushed {
            anyhow::bail!("push failed");
        }
        Ok(())
    }
}
