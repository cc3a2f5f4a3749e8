use clap::{ArgAction, Args};
use console::style;
use std::path::PathBuf;

use uelaunch::core::settings::Settings;
use uelaunch::core::tools::{try_locate, BUILD_TOOL_NAME, EDITOR_NAME};

use crate::commands::{settings_path, CliCommand};

#[derive(Debug, Clone, Default, Args)]
/// Find UnrealBuildTool.exe and UnrealEditor.exe in an engine folder
pub(crate) struct DetectCommand {
    /// The engine folder, defaults to the one in the settings
    #[arg(value_name = "ENGINE_DIR")]
    pub engine_dir: Option<PathBuf>,

    /// Use specified config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the found paths into the settings file
    #[arg(long, action = ArgAction::SetTrue)]
    pub save: bool,
}

impl CliCommand for DetectCommand {
    async fn exec(self) -> anyhow::Result<()> {
        let path = settings_path(self.config);
        let mut settings = Settings::load_or_default(&path);
        let engine_dir = self
            .engine_dir
            .unwrap_or_else(|| PathBuf::from(settings.engine_dir.trim()));

        let search_dir = engine_dir.clone();
        let tools = tokio::task::spawn_blocking(move || try_locate(search_dir)).await??;

        for (name, found) in [(BUILD_TOOL_NAME, &tools.build_tool), (EDITOR_NAME, &tools.editor)] {
            match found {
                Some(found) => println!("{}: {}", style(name).green().bold(), found.display()),
                None => println!("{}: not found", style(name).yellow().bold()),
            }
        }

        if !self.save {
            return Ok(());
        }

        settings.engine_dir = engine_dir.to_string_lossy().into_owned();
        if let Some(found) = tools.build_tool {
            settings.build_tool = found.to_string_lossy().into_owned();
        }
        if let Some(found) = tools.editor {
            settings.editor = found.to_string_lossy().into_owned();
        }
        settings.save_to(&path)?;
        println!("saved to {}", path.display());
        Ok(())
    }
}
