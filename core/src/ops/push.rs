use crate::core::git::{Git, ORIGIN_REMOTE};
use crate::core::repo::find_repo_root;
use crate::ops::{blocking, log_output, CheckGate, UiHandle};
use crate::utils::cmd::Runner;

/// Push the current branch of the project repository to origin.
pub async fn push_current<R: Runner>(
    git: &Git<R>,
    gate: &CheckGate,
    project_file: &str,
    ui: &UiHandle,
) -> bool {
    let Some(repo) = find_repo_root(project_file) else {
        ui.log("No .git found near the .uproject file");
        return false;
    };

    let _flight = gate.enter(&repo).await;

    let task_git = git.clone();
    let pushed = blocking(move || {
        let branch = task_git.current_branch(&repo)?;
        let output = task_git.push(&repo, ORIGIN_REMOTE, &branch);
        Some((branch, output))
    })
    .await
    .flatten();

    match pushed {
        Some((branch, output)) => {
            ui.log(format!("Push {} {}", ORIGIN_REMOTE, branch));
            log_output(ui, &output, "git push failed");
            if output.success() {
                ui.status(format!("pushed {} to {}", branch, ORIGIN_REMOTE));
            }
            output.success()
        }
        None => {
            ui.log("Could not determine the current branch");
            false
        }
    }
}
