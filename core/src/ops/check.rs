use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::OwnedMutexGuard;

use crate::core::git::{Git, ORIGIN_REMOTE, UPSTREAM_REMOTE};
use crate::core::repo::find_repo_root;
use crate::ops::{blocking, log_output, UiHandle};
use crate::utils::cmd::Runner;

/// Period of the background auto-check.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// How many one-line commit summaries are collected per direction.
pub const COMMIT_LIST_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Idle,
    Fetching,
    ComparingUpstream,
    ComparingOrigin,
    Decided,
}

impl Display for CheckState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let desc = match self {
            CheckState::Idle => "idle",
            CheckState::Fetching => "fetching remotes...",
            CheckState::ComparingUpstream => "comparing with upstream...",
            CheckState::ComparingOrigin => "comparing with origin...",
            CheckState::Decided => "git check finished",
        };
        write!(f, "{}", desc)
    }
}

/// Result of one completed synchronization check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub repo: PathBuf,
    pub branch: String,
    pub upstream_target: Option<String>,
    pub origin_target: String,
    pub behind_upstream: u32,
    pub ahead_origin: u32,
    pub behind_list: Vec<String>,
    pub ahead_list: Vec<String>,
}

impl SyncReport {
    pub fn needs_attention(&self) -> bool {
        self.behind_upstream > 0 || self.ahead_origin > 0
    }

    fn upstream_desc(&self) -> &str {
        self.upstream_target.as_deref().unwrap_or(UPSTREAM_REMOTE)
    }

    /// (remote, branch) to pull from: upstream when present, origin otherwise
    pub fn pull_target(&self) -> (String, String) {
        let (remote, target) = match &self.upstream_target {
            Some(target) => (UPSTREAM_REMOTE, target.as_str()),
            None => (ORIGIN_REMOTE, self.origin_target.as_str()),
        };
        let branch = target
            .split_once('/')
            .map(|(_, branch)| branch)
            .unwrap_or(target);
        (remote.to_string(), branch.to_string())
    }

    /// body of the "Git Status" dialog
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.behind_upstream > 0 {
            lines.push(format!(
                "- You are {} commit(s) behind {}",
                self.behind_upstream,
                self.upstream_desc()
            ));
            lines.extend(self.behind_list.iter().map(|l| format!("    {}", l)));
        } else {
            lines.push("- No new commits from upstream".to_string());
        }

        if self.ahead_origin > 0 {
            lines.push(format!(
                "- You are {} commit(s) ahead of {} (not pushed yet)",
                self.ahead_origin, self.origin_target
            ));
            lines.extend(self.ahead_list.iter().map(|l| format!("    {}", l)));
        } else {
            lines.push("- No unpushed commits".to_string());
        }
        lines
    }

    /// body of the pull / continue / abort prompt
    pub fn warning_text(&self) -> String {
        let mut lines = vec![format!("Branch: {}", self.branch)];
        if self.behind_upstream > 0 {
            lines.push(format!(
                "\nBehind {} by {} commit(s):",
                self.upstream_desc(),
                self.behind_upstream
            ));
            lines.extend(self.behind_list.iter().map(|l| format!("  {}", l)));
        }
        if self.ahead_origin > 0 {
            lines.push(format!(
                "\n{} commit(s) not pushed to {}:",
                self.ahead_origin, self.origin_target
            ));
            lines.extend(self.ahead_list.iter().map(|l| format!("  {}", l)));
        }
        lines.join("\n")
    }

    /// one log line for the periodic check, `None` when in sync
    pub fn auto_message(&self) -> Option<String> {
        let mut msgs = Vec::new();
        if self.behind_upstream > 0 {
            msgs.push(format!(
                "[Auto] behind {} by {} commit(s)",
                self.upstream_desc(),
                self.behind_upstream
            ));
        }
        if self.ahead_origin > 0 {
            msgs.push(format!(
                "[Auto] {} commit(s) not pushed to {}",
                self.ahead_origin, self.origin_target
            ));
        }
        match msgs.is_empty() {
            true => None,
            false => Some(msgs.join(" / ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// no `.git` above the project file
    NoRepo,
    /// HEAD could not be resolved
    NoBranch { repo: PathBuf },
    /// another check owns the repository
    Skipped { repo: PathBuf },
    Decided(SyncReport),
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckOutcome::Decided(_))
    }

    pub fn report(&self) -> Option<&SyncReport> {
        match self {
            CheckOutcome::Decided(report) => Some(report),
            _ => None,
        }
    }

    pub fn into_report(self) -> Option<SyncReport> {
        match self {
            CheckOutcome::Decided(report) => Some(report),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// user triggered, waits for a running check and reports everything
    Manual,
    /// timer triggered, skips a busy repository and stays quiet
    Auto,
}

impl CheckMode {
    fn silent(self) -> bool {
        self == CheckMode::Auto
    }
}

/// Single-flight guard: at most one check per repository at a time.
#[derive(Clone, Default)]
pub struct CheckGate {
    flights: Arc<Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>>,
}

impl CheckGate {
    fn slot(&self, repo: &Path) -> Arc<tokio::sync::Mutex<()>> {
        let mut flights = self.flights.lock().unwrap_or_else(|e| e.into_inner());
        flights.entry(repo.to_path_buf()).or_default().clone()
    }

    pub async fn enter(&self, repo: &Path) -> OwnedMutexGuard<()> {
        self.slot(repo).lock_owned().await
    }

    pub fn try_enter(&self, repo: &Path) -> Option<OwnedMutexGuard<()>> {
        self.slot(repo).try_lock_owned().ok()
    }
}

const NO_REPO_MSG: &str = "No .git found near the .uproject file";

fn enter_state(ui: &UiHandle, state: CheckState) {
    log::debug!("git check: {:?}", state);
    ui.status(state.to_string());
}

/// Full synchronous check starting from the project file.
pub fn check_sync<R: Runner>(
    git: &Git<R>,
    project_file: impl AsRef<Path>,
    silent: bool,
    ui: &UiHandle,
) -> CheckOutcome {
    match find_repo_root(project_file) {
        Some(repo) => check_repo(git, &repo, silent, ui),
        None => {
            if !silent {
                ui.log(NO_REPO_MSG);
            }
            CheckOutcome::NoRepo
        }
    }
}

/// fetch, then compare HEAD with the upstream default branch and with origin/<branch>
pub fn check_repo<R: Runner>(
    git: &Git<R>,
    repo: &Path,
    silent: bool,
    ui: &UiHandle,
) -> CheckOutcome {
    enter_state(ui, CheckState::Fetching);
    // a failed fetch still leaves a local view worth comparing
    log_output(ui, &git.fetch_all(repo), "git fetch failed");

    let Some(branch) = git.current_branch(repo) else {
        ui.log("Could not determine the current branch");
        enter_state(ui, CheckState::Idle);
        return CheckOutcome::NoBranch {
            repo: repo.to_path_buf(),
        };
    };

    let mut report = SyncReport {
        repo: repo.to_path_buf(),
        branch: branch.clone(),
        ..SyncReport::default()
    };

    if git.has_remote(repo, UPSTREAM_REMOTE) {
        enter_state(ui, CheckState::ComparingUpstream);
        let upstream_target = git
            .default_remote_branch(repo, UPSTREAM_REMOTE)
            .unwrap_or_else(|| format!("{}/{}", UPSTREAM_REMOTE, branch));

        if let Some(counts) = git.ahead_behind(repo, &upstream_target, "HEAD") {
            report.behind_upstream = counts.behind;
            if counts.behind > 0 {
                let range = format!("HEAD..{}", upstream_target);
                report.behind_list = git.list_commits(repo, &range, COMMIT_LIST_LIMIT);
            }
        }
        report.upstream_target = Some(upstream_target);
    } else if !silent {
        ui.log("No 'upstream' remote, comparing with origin only");
    }

    enter_state(ui, CheckState::ComparingOrigin);
    let origin_target = format!("{}/{}", ORIGIN_REMOTE, branch);
    if let Some(counts) = git.ahead_behind(repo, &origin_target, "HEAD") {
        report.ahead_origin = counts.ahead;
        if counts.ahead > 0 {
            let range = format!("{}..HEAD", origin_target);
            report.ahead_list = git.list_commits(repo, &range, COMMIT_LIST_LIMIT);
        }
    }
    report.origin_target = origin_target;

    enter_state(ui, CheckState::Decided);
    CheckOutcome::Decided(report)
}

/// Run the check on the blocking pool behind the gate.
pub async fn run_check<R: Runner>(
    git: &Git<R>,
    gate: &CheckGate,
    project_file: &str,
    mode: CheckMode,
    ui: &UiHandle,
) -> CheckOutcome {
    let silent = mode.silent();
    let Some(repo) = find_repo_root(project_file) else {
        if !silent {
            ui.log(NO_REPO_MSG);
        }
        return CheckOutcome::NoRepo;
    };

    let _flight = match mode {
        CheckMode::Manual => gate.enter(&repo).await,
        CheckMode::Auto => match gate.try_enter(&repo) {
            Some(flight) => flight,
            None => {
                log::debug!("{} is busy, auto-check skipped", repo.display());
                return CheckOutcome::Skipped { repo };
            }
        },
    };

    let (git, ui, task_repo) = (git.clone(), ui.clone(), repo.clone());
    blocking(move || check_repo(&git, &task_repo, silent, &ui))
        .await
        .unwrap_or(CheckOutcome::Skipped { repo })
}

/// "Check Git Now": full report in an info dialog
pub async fn check_now<R: Runner>(
    git: &Git<R>,
    gate: &CheckGate,
    project_file: &str,
    ui: &UiHandle,
) -> CheckOutcome {
    ui.log("=== Git Check ===");
    let outcome = run_check(git, gate, project_file, CheckMode::Manual, ui).await;
    match outcome.report() {
        Some(report) => ui.info("Git Status", report.status_lines().join("\n")).await,
        None => ui.log("Git check failed"),
    }
    outcome
}

/// periodic check, only speaks up when something is out of sync
pub async fn auto_check<R: Runner>(
    git: &Git<R>,
    gate: &CheckGate,
    project_file: &str,
    ui: &UiHandle,
) -> CheckOutcome {
    let outcome = run_check(git, gate, project_file, CheckMode::Auto, ui).await;
    if let Some(msg) = outcome.report().and_then(SyncReport::auto_message) {
        ui.log(msg);
    }
    outcome
}
