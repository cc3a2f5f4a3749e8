use clap::Args;
use std::path::PathBuf;

use uelaunch::core::settings::Settings;

use crate::commands::{settings_path, CliCommand};

#[derive(Debug, Clone, Default, Args)]
/// Print the settings file
pub(crate) struct ConfigCommand {
    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliCommand for ConfigCommand {
    async fn exec(self) -> anyhow::Result<()> {
        let path = settings_path(self.config);
        let settings = Settings::load_or_default(&path);

        eprintln!("# {}", path.display());
        println!("{}", serde_json::to_string_pretty(&settings)?);
        if settings.needs_setup() {
            eprintln!("the .uproject file and UnrealEditor.exe still need to be set");
        }
        Ok(())
    }
}
