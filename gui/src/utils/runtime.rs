use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Runtime shared by every background task of the window.
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

pub fn init_runtime() -> std::io::Result<()> {
    if TOKIO_RUNTIME.get().is_none() {
        let _ = TOKIO_RUNTIME.set(Runtime::new()?);
    }
    Ok(())
}

/// Panics if [`init_runtime`] was never called.
#[track_caller]
pub fn runtime() -> &'static Runtime {
    TOKIO_RUNTIME
        .get()
        .expect("Tokio runtime not initialized. Call init_runtime() first.")
}

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    runtime().block_on(future)
}

pub fn spawn<F>(future: F) -> tokio::task::JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send,
{
    runtime().spawn(future)
}
