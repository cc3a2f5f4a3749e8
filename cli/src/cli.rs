use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{CheckCommand, ConfigCommand, DetectCommand, OpenCommand, PushCommand};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help(true)
)]
pub(crate) struct Cli {
    /// More log output, repeat for debug
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Compare the project repo with origin and upstream
    Check(CheckCommand),

    /// Check git, then generate, build and launch the editor
    Open(OpenCommand),

    /// Find UnrealBuildTool.exe and UnrealEditor.exe in an engine folder
    Detect(DetectCommand),

    /// Push the current branch to origin
    Push(PushCommand),

    /// Print the settings file
    Config(ConfigCommand),
}
