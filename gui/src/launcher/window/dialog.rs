use std::collections::VecDeque;

use eframe::egui;
use eframe::epaint::text::LayoutJob;
use eframe::egui::{Color32, RichText};
use tokio::sync::oneshot;

use uelaunch::ops::{MessageKind, SyncChoice, SyncReport};

use crate::utils::defines::text_color;

/// A question or message waiting for the user.
pub enum Prompt {
    Message {
        kind: MessageKind,
        title: String,
        body: String,
        reply: Option<oneshot::Sender<()>>,
    },
    Sync {
        report: SyncReport,
        reply: Option<oneshot::Sender<SyncChoice>>,
    },
}

impl Prompt {
    /// a message nobody waits for
    pub fn notice(kind: MessageKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Prompt::Message {
            kind,
            title: title.into(),
            body: body.into(),
            reply: None,
        }
    }

    fn title(&self) -> String {
        match self {
            Prompt::Message { title, .. } => title.clone(),
            Prompt::Sync { .. } => "Git Sync Warning".to_string(),
        }
    }

    /// a dismissed message counts as read, a dismissed sync prompt as abort
    fn answer(self, choice: SyncChoice) {
        match self {
            Prompt::Message { reply, .. } => {
                if let Some(reply) = reply {
                    let _ = reply.send(());
                }
            }
            Prompt::Sync { reply, .. } => {
                if let Some(reply) = reply {
                    let _ = reply.send(choice);
                }
            }
        }
    }
}

/// Shows queued prompts one at a time, first in first out.
#[derive(Default)]
pub struct PromptDialog {
    queue: VecDeque<Prompt>,
    choice: Option<SyncChoice>,
}

impl PromptDialog {
    pub fn push(&mut self, prompt: Prompt) {
        self.queue.push_back(prompt);
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// closed through the title bar
    pub fn dismiss(&mut self) {
        self.choice = None;
        if let Some(prompt) = self.queue.pop_front() {
            prompt.answer(SyncChoice::Abort);
        }
    }
}

fn colored_button(text: &str, color: Color32) -> egui::Button {
    let mut job = LayoutJob::default();
    job.append(
        text,
        0.0,
        egui::TextFormat {
            color,
            ..Default::default()
        },
    );
    egui::Button::new(job)
}

impl super::WindowBase for PromptDialog {
    fn name(&self) -> String {
        self.queue
            .front()
            .map(Prompt::title)
            .unwrap_or_default()
    }

    fn width(&self) -> f32 {
        380.0
    }

    fn height(&self) -> f32 {
        220.0
    }

    fn after_show(&mut self, _ctx: &egui::Context, _eframe: &mut eframe::Frame, open: &mut bool) {
        if let Some(choice) = self.choice.take() {
            if let Some(prompt) = self.queue.pop_front() {
                prompt.answer(choice);
            }
            *open = !self.queue.is_empty();
        }
    }
}

impl super::View for PromptDialog {
    fn ui(&mut self, ui: &mut egui::Ui) {
        let Some(prompt) = self.queue.front() else {
            return;
        };

        let mut choice = None;
        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 12.0);

            match prompt {
                Prompt::Message { kind, body, .. } => {
                    let color = match kind {
                        MessageKind::Info => ui.visuals().text_color(),
                        MessageKind::Warning => text_color::YELLOW,
                        MessageKind::Error => text_color::RED,
                    };
                    ui.label(RichText::new(body).color(color));

                    if ui.add(colored_button("Ok", text_color::GREEN)).clicked() {
                        choice = Some(SyncChoice::Continue);
                    }
                }
                Prompt::Sync { report, .. } => {
                    egui::ScrollArea::vertical()
                        .max_height(140.0)
                        .show(ui, |ui| {
                            ui.monospace(report.warning_text());
                        });

                    ui.horizontal(|ui| {
                        if ui.add(colored_button("Pull", text_color::GREEN)).clicked() {
                            choice = Some(SyncChoice::Pull);
                        }
                        if ui.add(colored_button("Continue", text_color::BLUE)).clicked() {
                            choice = Some(SyncChoice::Continue);
                        }
                        if ui.add(colored_button("Abort", text_color::RED)).clicked() {
                            choice = Some(SyncChoice::Abort);
                        }
                    });
                    ui.label(
                        RichText::new("Pull runs git pull --rebase before opening.")
                            .color(text_color::GRAY)
                            .small(),
                    );
                }
            }
        });
        self.choice = choice;
    }
}
