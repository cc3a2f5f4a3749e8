pub mod progress;

use std::io::{self, Write};

use console::{style, user_attended_stderr};
use tokio::sync::mpsc::UnboundedReceiver;

use uelaunch::ops::{MessageKind, SyncChoice, UiRequest};

use crate::term::progress::Spinner;

/// Prints what background tasks send and answers their prompts.
pub(crate) struct TerminalShell {
    choice: Option<SyncChoice>,
    spinner: Spinner,
}

impl TerminalShell {
    /// `choice` answers the sync prompt up front
    pub fn new(choice: Option<SyncChoice>) -> Self {
        Self {
            choice,
            spinner: Spinner::new(),
        }
    }

    pub async fn run(self, mut recv: UnboundedReceiver<UiRequest>) {
        while let Some(request) = recv.recv().await {
            match request {
                UiRequest::Log(text) => self.spinner.println(text),
                UiRequest::Status(status) => self.spinner.set_status(status),
                UiRequest::Message {
                    kind,
                    title,
                    body,
                    reply,
                } => {
                    self.print_message(kind, &title, &body);
                    let _ = reply.send(());
                }
                UiRequest::ConfirmSync { report, reply } => {
                    self.spinner.println(style(report.warning_text()).yellow().to_string());
                    let choice = self.ask_sync().await;
                    let _ = reply.send(choice);
                }
            }
        }
        self.spinner.finish();
    }

    fn print_message(&self, kind: MessageKind, title: &str, body: &str) {
        let title = match kind {
            MessageKind::Info => style(format!("[{}]", title)).cyan().bold(),
            MessageKind::Warning => style(format!("[{}]", title)).yellow().bold(),
            MessageKind::Error => style(format!("[{}]", title)).red().bold(),
        };
        self.spinner.println(format!("{}\n{}", title, body));
    }

    async fn ask_sync(&self) -> SyncChoice {
        if let Some(choice) = self.choice {
            self.spinner.println(format!("-> {:?}", choice));
            return choice;
        }
        if !user_attended_stderr() {
            self.spinner.println("no terminal to ask, aborting (use --choice)");
            return SyncChoice::Abort;
        }

        let answer = self.spinner.suspend(|| {
            Self::prompt_line("[p]ull and continue / [c]ontinue without pulling / [a]bort: ")
        });
        match answer {
            Ok(answer) => parse_choice(&answer),
            Err(e) => {
                log::warn!("could not read the answer: {}", e);
                SyncChoice::Abort
            }
        }
    }

    fn prompt_line(prompt: &str) -> io::Result<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", prompt)?;
        stderr.flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

/// anything unrecognised aborts
fn parse_choice(answer: &str) -> SyncChoice {
    match answer.to_lowercase().as_str() {
        "p" | "pull" => SyncChoice::Pull,
        "c" | "continue" => SyncChoice::Continue,
        _ => SyncChoice::Abort,
    }
}
