use std::path::Path;

use crate::utils::cmd::{CmdOutput, Runner, SystemRunner};

pub const BUILD_PLATFORM: &str = "Win64";
pub const BUILD_CONFIGURATION: &str = "Development";

/// `-ProjectFiles` run covering both game and engine
pub fn generate_args(project_file: &str) -> Vec<String> {
    vec![
        "-ProjectFiles".to_string(),
        format!("-Project={}", project_file),
        "-game".to_string(),
        "-engine".to_string(),
    ]
}

/// build of `<Project>Editor`, waiting on other builds and skipping IDE hot reload
pub fn build_args(project_file: &str) -> Vec<String> {
    let project_name = Path::new(project_file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    vec![
        format!("{}Editor", project_name),
        BUILD_PLATFORM.to_string(),
        BUILD_CONFIGURATION.to_string(),
        format!("-Project={}", project_file),
        "-WaitMutex".to_string(),
        "-NoHotReloadFromIDE".to_string(),
    ]
}

/// Wrapper around the build tool and editor executables.
#[derive(Clone, Default)]
pub struct BuildTool<R: Runner = SystemRunner> {
    runner: R,
}

impl<R: Runner> BuildTool<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn exec(&self, build_tool: &str, project_file: &str, args: &[String]) -> CmdOutput {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run(build_tool, &args, Path::new(project_file).parent())
    }

    pub fn generate_project_files(&self, build_tool: &str, project_file: &str) -> CmdOutput {
        self.exec(build_tool, project_file, &generate_args(project_file))
    }

    pub fn build_editor(&self, build_tool: &str, project_file: &str) -> CmdOutput {
        self.exec(build_tool, project_file, &build_args(project_file))
    }

    /// fire and forget, the editor is never waited on
    pub fn launch_editor(&self, editor: &str, project_file: &str) -> anyhow::Result<()> {
        self.runner
            .spawn_detached(editor, &[project_file], Path::new(project_file).parent())
    }
}
