use clap::{Args, ValueEnum};
use std::path::PathBuf;

use uelaunch::core::build_tool::BuildTool;
use uelaunch::core::git::Git;
use uelaunch::core::settings::Settings;
use uelaunch::ops::{open_project, CheckGate, OpenOutcome, SyncChoice};

use crate::commands::{settings_path, CliCommand, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ChoiceArg {
    Pull,
    Continue,
    Abort,
}

impl From<ChoiceArg> for SyncChoice {
    fn from(value: ChoiceArg) -> Self {
        match value {
            ChoiceArg::Pull => SyncChoice::Pull,
            ChoiceArg::Continue => SyncChoice::Continue,
            ChoiceArg::Abort => SyncChoice::Abort,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
/// Check git, then generate, build and launch the editor
pub(crate) struct OpenCommand {
    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer the sync prompt without asking
    #[arg(long, value_enum, value_name = "CHOICE")]
    pub choice: Option<ChoiceArg>,
}

impl CliCommand for OpenCommand {
    async fn exec(self) -> anyhow::Result<()> {
        let settings = Settings::load_or_default(settings_path(self.config));
        let git: Git = Git::default();
        let build_tool: BuildTool = BuildTool::default();
        let gate = CheckGate::default();

        let session = Session::start(self.choice.map(Into::into));
        let outcome = open_project(&settings, &git, &build_tool, &gate, &session.ui).await;
        session.finish().await;

        match outcome {
            OpenOutcome::Launched | OpenOutcome::Aborted => Ok(()),
            OpenOutcome::Failed(e) => Err(e.into()),
        }
    }
}
