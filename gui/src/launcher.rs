use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use eframe::egui;
use poll_promise::Promise;

use uelaunch::core::build_tool::BuildTool;
use uelaunch::core::git::Git;
use uelaunch::core::settings::Settings;
use uelaunch::ops::{CheckGate, UiHandle, UiRequest};

use crate::launcher::misc::{check_git_valid, configure_text_styles};
use crate::launcher::window::dialog::PromptDialog;
use crate::launcher::window::error::ErrorWindow;
use crate::launcher::window::settings::SettingsWindow;
use crate::utils::command::CommandType;

pub(crate) mod layout;
pub(crate) mod menu_bar;
pub(crate) mod misc;
pub(crate) mod quick_bar;
pub(crate) mod tasks;
pub(crate) mod window;

pub struct Launcher {
    settings: Settings,

    git: Git,
    build_tool: BuildTool,
    gate: CheckGate,

    ui_handle: UiHandle,
    recv: UnboundedReceiver<UiRequest>,

    log_lines: Vec<String>,
    status: String,

    tasks: Vec<(CommandType, JoinHandle<()>)>,
    auto_check_task: Option<JoinHandle<()>>,
    git_check: Option<Promise<Result<(), String>>>,

    // settings window
    settings_window: SettingsWindow,
    settings_is_open: bool,

    // error window
    error_window: ErrorWindow,
    error_is_open: bool,

    // messages and the sync prompt, one at a time
    prompt_dialog: PromptDialog,
}

impl Launcher {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_text_styles(&cc.egui_ctx);

        let ctx = cc.egui_ctx.clone();
        let (ui_handle, recv) = UiHandle::channel();
        let ui_handle = ui_handle.with_waker(move || ctx.request_repaint());

        let mut app = Self {
            settings: Settings::load(),

            git: Git::default(),
            build_tool: BuildTool::default(),
            gate: CheckGate::default(),

            ui_handle,
            recv,

            log_lines: Vec::new(),
            status: "ready".to_string(),

            tasks: Vec::new(),
            auto_check_task: None,
            git_check: None,

            settings_window: SettingsWindow::default(),
            settings_is_open: false,

            error_window: ErrorWindow::default(),
            error_is_open: false,

            prompt_dialog: PromptDialog::default(),
        };

        // the launcher stays usable without git, only the checks fail
        let git = app.git.clone();
        app.git_check = Some(Promise::spawn_thread("check_git", move || {
            check_git_valid(&git)
        }));

        if app.settings.needs_setup() {
            app.open_settings_window();
        }

        app.schedule_auto_check();
        app
    }

    pub(crate) fn open_settings_window(&mut self) {
        self.settings_window.edit(&self.settings);
        self.settings_is_open = true;
    }

    fn poll_git_check(&mut self, ctx: &egui::Context) {
        let result = match &self.git_check {
            Some(promise) => promise.ready().cloned(),
            None => return,
        };
        let Some(result) = result else {
            ctx.request_repaint();
            return;
        };
        self.git_check = None;

        if let Err(msg) = result {
            self.error_window = ErrorWindow::new(msg);
            self.error_is_open = true;
        }
    }

    /// a modal window blocks the main view
    pub(crate) fn is_modal(&self) -> bool {
        self.error_is_open || self.prompt_dialog.is_open()
    }
}

/// main app ui update
impl eframe::App for Launcher {
    fn update(&mut self, ctx: &egui::Context, eframe: &mut eframe::Frame) {
        // top view
        self.top_view(ctx);

        // status line
        self.status_view(ctx);

        // log view
        self.content_view(ctx);

        // show windows
        self.handle_windows(ctx, eframe);

        // handle channel recv
        self.handle_channel_recv();

        // git version result
        self.poll_git_check(ctx);

        // collect finished tasks
        self.poll_tasks();
    }

    fn on_close_event(&mut self) -> bool {
        self.shutdown();
        true
    }
}
