use clap::Args;
use std::path::PathBuf;

use uelaunch::core::git::Git;
use uelaunch::core::settings::Settings;
use uelaunch::ops::{check_now, CheckGate};

use crate::commands::{settings_path, CliCommand, Session};

#[derive(Debug, Clone, Default, Args)]
/// Compare the project repo with origin and upstream
pub(crate) struct CheckCommand {
    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliCommand for CheckCommand {
    async fn exec(self) -> anyhow::Result<()> {
        let settings = Settings::load_or_default(settings_path(self.config));
        let git: Git = Git::default();
        let gate = CheckGate::default();

        let session = Session::start(None);
        let outcome = check_now(&git, &gate, settings.project_file.trim(), &session.ui).await;
        session.finish().await;

        if !outcome.is_ok() {
            anyhow::bail!("git check failed");
        }
        Ok(())
    }
}
