use tokio::time::{interval_at, Instant, MissedTickBehavior};

use uelaunch::core::settings::Settings;
use uelaunch::ops::{
    auto_check, check_now, open_project, push_current, MessageKind, UiRequest, CHECK_INTERVAL,
};

use crate::launcher::misc::panic_message;
use crate::launcher::window::dialog::Prompt;
use crate::launcher::Launcher;
use crate::utils::command::CommandType;
use crate::utils::runtime;

impl Launcher {
    fn is_running(&self, command: CommandType) -> bool {
        self.tasks.iter().any(|(running, _)| *running == command)
    }

    /// start a background task for `command`
    pub(crate) fn exec_ops(&mut self, command: CommandType) {
        if self.is_running(command) {
            self.ui_handle.log(format!("{} is already running", command));
            return;
        }

        let settings = self.settings.clone();
        let git = self.git.clone();
        let gate = self.gate.clone();
        let ui = self.ui_handle.clone();

        let handle = match command {
            CommandType::OpenProject => {
                let build_tool = self.build_tool.clone();
                runtime::spawn(async move {
                    open_project(&settings, &git, &build_tool, &gate, &ui).await;
                })
            }
            CommandType::CheckNow => runtime::spawn(async move {
                check_now(&git, &gate, settings.project_file.trim(), &ui).await;
            }),
            CommandType::Push => runtime::spawn(async move {
                push_current(&git, &gate, settings.project_file.trim(), &ui).await;
            }),
        };
        self.tasks.push((command, handle));
    }

    /// (re)start the periodic check according to the settings
    pub(crate) fn schedule_auto_check(&mut self) {
        self.stop_auto_check();
        if !self.settings.auto_check {
            return;
        }

        let project_file = self.settings.project_file.trim().to_string();
        let git = self.git.clone();
        let gate = self.gate.clone();
        let ui = self.ui_handle.clone();

        log::info!("auto-check every {}s", CHECK_INTERVAL.as_secs());
        self.auto_check_task = Some(runtime::spawn(async move {
            let mut interval = interval_at(Instant::now() + CHECK_INTERVAL, CHECK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                auto_check(&git, &gate, &project_file, &ui).await;
            }
        }));
    }

    pub(crate) fn stop_auto_check(&mut self) {
        if let Some(handle) = self.auto_check_task.take() {
            handle.abort();
        }
    }

    /// report tasks that ended by panicking
    pub(crate) fn poll_tasks(&mut self) {
        let (finished, running): (Vec<_>, Vec<_>) = self
            .tasks
            .drain(..)
            .partition(|(_, handle)| handle.is_finished());
        self.tasks = running;

        for (command, handle) in finished {
            if let Err(e) = runtime::block_on(handle) {
                if e.is_panic() {
                    self.report_panic(&command.to_string(), e.into_panic());
                }
            }
        }

        let auto_check_ended = self
            .auto_check_task
            .as_ref()
            .map_or(false, |handle| handle.is_finished());
        if auto_check_ended {
            if let Some(handle) = self.auto_check_task.take() {
                if let Err(e) = runtime::block_on(handle) {
                    if e.is_panic() {
                        self.report_panic("Auto-check", e.into_panic());
                    }
                }
            }
        }
    }

    fn report_panic(&mut self, name: &str, payload: Box<dyn std::any::Any + Send>) {
        let msg = panic_message(payload);
        log::error!("{} stopped unexpectedly: {}", name, msg);
        self.prompt_dialog.push(Prompt::notice(
            MessageKind::Error,
            "Unexpected error",
            format!("{} stopped unexpectedly:\n{}", name, msg),
        ));
    }

    /// drain requests sent by background tasks
    pub(crate) fn handle_channel_recv(&mut self) {
        while let Ok(request) = self.recv.try_recv() {
            match request {
                UiRequest::Log(text) => self.log_lines.extend(text.lines().map(str::to_string)),
                UiRequest::Status(status) => self.status = status,
                UiRequest::Message {
                    kind,
                    title,
                    body,
                    reply,
                } => self.prompt_dialog.push(Prompt::Message {
                    kind,
                    title,
                    body,
                    reply: Some(reply),
                }),
                UiRequest::ConfirmSync { report, reply } => self.prompt_dialog.push(Prompt::Sync {
                    report,
                    reply: Some(reply),
                }),
            }
        }
    }

    /// take the settings from the settings window
    pub(crate) fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
        match self.settings.save() {
            Ok(()) => self.ui_handle.log("Settings saved"),
            Err(e) => {
                log::error!("{}", e);
                self.prompt_dialog
                    .push(Prompt::notice(MessageKind::Error, "Settings", e.to_string()));
            }
        }
        self.schedule_auto_check();
    }

    pub(crate) fn shutdown(&mut self) {
        self.stop_auto_check();
        if let Err(e) = self.settings.save() {
            log::error!("{}", e);
        }
    }
}
