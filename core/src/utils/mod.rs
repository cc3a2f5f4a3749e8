pub mod cmd;
pub mod error;

pub use cmd::{CmdOutput, Runner, SystemRunner};
pub use error::{LauncherError, LauncherResult, OpenError, SettingsError};
