// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the contact page.
//! Handles layout, the alert modal, and wiring to background image decoding.

pub mod components;

use crate::config::AppConfig;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::image_strip::ImageStripMsg;
use crate::ui::components::{contact_form, image_strip};

/// Stateful egui application hosting the contact form and preloaded images.
pub struct ContactFormApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ContactFormApp {
    /// Spawn the command workers and queue the startup messages.
    pub fn new(config: &AppConfig) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        tracing::debug!(threads, "starting command workers");
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::new(config),
            inbox: mvu::startup_messages(config),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ContactFormApp {
    /// Drives a single UI frame: drains worker results, applies queued messages, and renders the page.
    ///
    /// Decoded images are turned into textures here because only the UI thread owns the egui
    /// context. Commands produced by updates are handed to the worker pool.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process in arrival order until exhausted.
        let mut msgs: std::collections::VecDeque<Msg> = std::mem::take(&mut self.inbox).into();
        while let Some(msg) = msgs.pop_front() {
            match msg {
                Msg::ImageDecoded { index, image } => {
                    let texture = ctx.load_texture(
                        format!("preload-{index}"),
                        image,
                        egui::TextureOptions::default(),
                    );
                    msgs.push_front(Msg::Images(ImageStripMsg::ImageReady { index, texture }));
                }
                other => {
                    let mut commands = Vec::new();
                    mvu::update(&mut self.model, other, &mut commands);
                    for cmd in commands {
                        if self.cmd_tx.send(cmd).is_ok() {
                            self.model.pending_commands += 1;
                        }
                    }
                }
            }
        }

        if self.model.pending_commands > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Contact");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
            let strip_msgs = image_strip::view(ui, &self.model.images);
            self.inbox.extend(strip_msgs.into_iter().map(Msg::Images));
            ui.add_space(6.0);
        });

        self.render_alert_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("All fields are required.")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(4.0);
            // The alert blocks the form until it is acknowledged.
            let enabled = self.model.error.is_none();
            let form_msgs = contact_form::view(ui, &self.model.form, enabled);
            self.inbox.extend(form_msgs.into_iter().map(Msg::Form));
        });
    }

    /// Required by eframe 0.34; rendering is driven by `update`, which eframe still calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl ContactFormApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Render the blocking alert for validation failures.
    fn render_alert_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Validation error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} task(s) running in background",
                            self.model.pending_commands
                        ));
                }
            });
        }
    }
}
