use std::time::Duration;

use anyhow::Result;
use eframe::egui;

use crate::{
    controller::Controller,
    launcher::{LaunchMode, Launcher},
};

const TITLE: &str = "Black Screen Controller";
const MAX_MONITOR_INDEX: i64 = 10;

pub struct ControllerApp {
    controller: Controller,
    monitor_index: i64,
    poll_interval: Duration,
    grace: Duration,
}

impl ControllerApp {
    pub fn new(
        launcher: Launcher,
        monitor_index: i64,
        grace: Duration,
        poll_interval: Duration,
    ) -> Self {
        Self {
            controller: Controller::new(launcher, grace),
            monitor_index: monitor_index.clamp(0, MAX_MONITOR_INDEX),
            poll_interval,
            grace,
        }
    }

    fn diagnostics(&self, ui: &mut egui::Ui) {
        let mode = match self.controller.launcher().mode() {
            LaunchMode::ChildFlag => "self (--child)",
            LaunchMode::Positional => "display binary",
        };
        egui::CollapsingHeader::new("Diagnostics")
            .default_open(false)
            .show(ui, |ui| {
                ui.small(format!("Launch mode: {mode}"));
                ui.small(format!(
                    "Child command: {}",
                    self.controller.command(self.monitor_index)
                ));
                ui.small(format!("Terminate grace: {} ms", self.grace.as_millis()));
            });
    }
}

impl eframe::App for ControllerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_width = egui::vec2(ui.available_width(), 0.0);

            ui.horizontal(|ui| {
                ui.label("Monitor index (0 = primary):");
                ui.add(
                    egui::DragValue::new(&mut self.monitor_index).range(0..=MAX_MONITOR_INDEX),
                );
            });

            let open = egui::Button::new("Open Black Screen").min_size(full_width);
            if ui.add_enabled(self.controller.can_open(), open).clicked() {
                if let Ok(pid) = self.controller.open(self.monitor_index) {
                    tracing::info!(pid, monitor = self.monitor_index, "black screen opened");
                }
            }

            let close = egui::Button::new("Close Black Screen").min_size(full_width);
            if ui.add_enabled(self.controller.can_close(), close).clicked() {
                self.controller.close();
            }

            ui.label(self.controller.status().to_string());

            if ui.add(egui::Button::new("Quit").min_size(full_width)).clicked() {
                self.controller.close();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            ui.separator();
            self.diagnostics(ui);
        });

        if self.controller.is_running() {
            ctx.request_repaint_after(self.poll_interval);
        }
    }
}

pub fn run(app: ControllerApp) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 220.0])
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("controller UI failed: {err}"))
}
