use std::path::Path;

use crate::core::build_tool::{build_args, generate_args, BuildTool};
use crate::core::git::Git;
use crate::core::settings::Settings;
use crate::ops::{blocking, log_output, run_check, CheckGate, CheckMode, SyncChoice, UiHandle};
use crate::utils::cmd::{command_line, CmdOutput, Runner};
use crate::utils::error::OpenError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// the editor process was started
    Launched,
    /// the user stopped at the sync prompt
    Aborted,
    Failed(OpenError),
}

fn is_file(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_file()
}

async fn fail(ui: &UiHandle, err: OpenError) -> OpenOutcome {
    ui.error("Error", err.to_string()).await;
    OpenOutcome::Failed(err)
}

/// Check sync state, optionally pull, generate and build, then launch the editor.
pub async fn open_project<R: Runner>(
    settings: &Settings,
    git: &Git<R>,
    tools: &BuildTool<R>,
    gate: &CheckGate,
    ui: &UiHandle,
) -> OpenOutcome {
    let outcome = run_check(git, gate, settings.project_file.trim(), CheckMode::Manual, ui).await;
    match outcome.into_report() {
        None => {
            ui.warning("Git", "Could not check Git, opening the project anyway")
                .await;
        }
        Some(report) if report.needs_attention() => {
            match ui.confirm_sync(report.clone()).await {
                SyncChoice::Pull => {
                    let (remote, branch) = report.pull_target();
                    // no fetch of a periodic check may run under the rebase
                    let _flight = gate.enter(&report.repo).await;
                    ui.log(format!("Pull --rebase from {} {}", remote, branch));
                    let task_git = git.clone();
                    let output = blocking(move || task_git.pull(&report.repo, &remote, &branch))
                        .await
                        .unwrap_or_else(|| CmdOutput::spawn_failed("git pull was cancelled"));
                    // a failed pull is logged, opening goes on
                    log_output(ui, &output, "git pull failed");
                }
                SyncChoice::Continue => {}
                SyncChoice::Abort => {
                    ui.log("Opening the project was cancelled");
                    return OpenOutcome::Aborted;
                }
            }
        }
        Some(_) => {}
    }

    continue_open(settings, tools, ui).await
}

async fn continue_open<R: Runner>(
    settings: &Settings,
    tools: &BuildTool<R>,
    ui: &UiHandle,
) -> OpenOutcome {
    let project_file = settings.project_file.trim().to_string();
    let build_tool = settings.build_tool.trim().to_string();
    let editor = settings.editor.trim().to_string();

    if !is_file(&project_file) {
        return fail(ui, OpenError::ProjectFileNotSet).await;
    }

    if settings.autogen {
        if !is_file(&build_tool) {
            return fail(ui, OpenError::BuildToolNotSet).await;
        }
        ui.log("=== Generate Project Files ===");
        ui.log(command_line(&build_tool, &generate_args(&project_file)));

        let (task_tools, ubt, project) = (tools.clone(), build_tool.clone(), project_file.clone());
        let output = blocking(move || task_tools.generate_project_files(&ubt, &project))
            .await
            .unwrap_or_else(|| CmdOutput::spawn_failed("Generate Project Files was cancelled"));
        log_output(ui, &output, "Generate Project Files failed");
        if !output.success() {
            return fail(ui, OpenError::GenerateFailed).await;
        }
    }

    if settings.autobuild {
        if !is_file(&build_tool) {
            return fail(ui, OpenError::BuildToolNotSet).await;
        }
        ui.log("=== Build Editor ===");
        ui.log(command_line(&build_tool, &build_args(&project_file)));

        let (task_tools, ubt, project) = (tools.clone(), build_tool.clone(), project_file.clone());
        let output = blocking(move || task_tools.build_editor(&ubt, &project))
            .await
            .unwrap_or_else(|| CmdOutput::spawn_failed("Build Editor was cancelled"));
        log_output(ui, &output, "Build Editor failed");
        if !output.success() {
            return fail(ui, OpenError::BuildFailed).await;
        }
    }

    if !is_file(&editor) {
        return fail(ui, OpenError::EditorNotSet).await;
    }

    ui.log("=== Open Project ===");
    ui.log(command_line(&editor, &[&project_file]));
    match tools.launch_editor(&editor, &project_file) {
        Ok(()) => {
            let name = settings.project_name().unwrap_or_default();
            ui.status(format!("{} launched", name));
            OpenOutcome::Launched
        }
        Err(e) => {
            ui.log(format!("Failed to launch editor: {:#}", e));
            fail(ui, OpenError::LaunchFailed(e.to_string())).await
        }
    }
}
