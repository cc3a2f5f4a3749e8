mod check;
mod open;
mod prompt;
mod push;

pub use check::{
    auto_check, check_now, check_repo, check_sync, run_check, CheckGate, CheckMode,
    CheckOutcome, CheckState, SyncReport, CHECK_INTERVAL, COMMIT_LIST_LIMIT,
};
pub use open::{open_project, OpenOutcome};
pub use prompt::{MessageKind, SyncChoice, UiHandle, UiRequest};
pub use push::push_current;

pub use crate::utils::error::OpenError;

use crate::utils::cmd::CmdOutput;

/// Run process work on the blocking pool. A panic inside is re-raised on the caller.
pub(crate) async fn blocking<T, F>(f: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => Some(value),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => {
            log::error!("blocking task was cancelled: {}", e);
            None
        }
    }
}

/// log stdout, and stderr (or `fallback`) when the command failed
pub(crate) fn log_output(ui: &UiHandle, output: &CmdOutput, fallback: &str) {
    if !output.stdout.is_empty() {
        ui.log(&output.stdout);
    }
    if !output.success() {
        match output.stderr.is_empty() {
            true => ui.log(fallback),
            false => ui.log(&output.stderr),
        }
    }
}
