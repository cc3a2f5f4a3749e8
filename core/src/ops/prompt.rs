use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use super::SyncReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// Answer to the sync warning shown before opening the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncChoice {
    /// pull --rebase, then continue opening
    Pull,
    /// open without pulling
    Continue,
    /// stop the open sequence
    Abort,
}

/// Work a background task needs done by whoever owns the screen.
pub enum UiRequest {
    Log(String),
    Status(String),
    Message {
        kind: MessageKind,
        title: String,
        body: String,
        reply: oneshot::Sender<()>,
    },
    ConfirmSync {
        report: SyncReport,
        reply: oneshot::Sender<SyncChoice>,
    },
}

impl Debug for UiRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UiRequest::Log(line) => f.debug_tuple("Log").field(line).finish(),
            UiRequest::Status(status) => f.debug_tuple("Status").field(status).finish(),
            UiRequest::Message {
                kind, title, body, ..
            } => f
                .debug_struct("Message")
                .field("kind", kind)
                .field("title", title)
                .field("body", body)
                .finish(),
            UiRequest::ConfirmSync { report, .. } => f
                .debug_struct("ConfirmSync")
                .field("report", report)
                .finish(),
        }
    }
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Sending half of the UI channel, cloned into every background task.
/// Requests that need an answer are awaited, never blocked on.
#[derive(Clone)]
pub struct UiHandle {
    send: mpsc::UnboundedSender<UiRequest>,
    waker: Option<Waker>,
}

impl UiHandle {
    pub fn channel() -> (UiHandle, mpsc::UnboundedReceiver<UiRequest>) {
        let (send, recv) = mpsc::unbounded_channel();
        (UiHandle { send, waker: None }, recv)
    }

    /// called after every request, e.g. to repaint the window
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    fn send(&self, request: UiRequest) -> bool {
        let sent = self.send.send(request).is_ok();
        if let Some(waker) = &self.waker {
            waker();
        }
        sent
    }

    pub fn log(&self, line: impl Into<String>) {
        let line = line.into();
        log::info!("{}", line);
        self.send(UiRequest::Log(line));
    }

    pub fn status(&self, status: impl Into<String>) {
        self.send(UiRequest::Status(status.into()));
    }

    pub async fn message(&self, kind: MessageKind, title: impl Into<String>, body: impl Into<String>) {
        let (title, body) = (title.into(), body.into());
        match kind {
            MessageKind::Error => log::error!("{}: {}", title, body),
            MessageKind::Warning => log::warn!("{}: {}", title, body),
            MessageKind::Info => log::info!("{}: {}", title, body),
        }

        let (reply, answer) = oneshot::channel();
        if self.send(UiRequest::Message {
            kind,
            title,
            body,
            reply,
        }) {
            let _ = answer.await;
        }
    }

    pub async fn info(&self, title: impl Into<String>, body: impl Into<String>) {
        self.message(MessageKind::Info, title, body).await
    }

    pub async fn warning(&self, title: impl Into<String>, body: impl Into<String>) {
        self.message(MessageKind::Warning, title, body).await
    }

    pub async fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.message(MessageKind::Error, title, body).await
    }

    /// ask pull / continue / abort; a closed UI counts as abort
    pub async fn confirm_sync(&self, report: SyncReport) -> SyncChoice {
        let (reply, answer) = oneshot::channel();
        if !self.send(UiRequest::ConfirmSync { report, reply }) {
            return SyncChoice::Abort;
        }
        answer.await.unwrap_or(SyncChoice::Abort)
    }
}
