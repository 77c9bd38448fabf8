//! Per-frame rendering for [`SpectrometerApp`].

use std::time::{Duration, Instant};

use eframe::egui;

use crate::panels::Panel;

use super::SpectrometerApp;

/// Fallback repaint interval so status changes show up while idle.
const IDLE_REPAINT: Duration = Duration::from_millis(500);

impl eframe::App for SpectrometerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        let now = Instant::now();
        self.update_data(now);

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            self.status_panel.render_panel(ui, &mut self.device);
        });

        egui::SidePanel::right("settings_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.button_panel.render_panel(ui, &mut self.device);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_panel.render_panel(ui, &mut self.device);
        });

        // Wake up in time for the next reading.
        let next = self
            .device
            .next_read_in(now)
            .map_or(IDLE_REPAINT, |d| d.min(IDLE_REPAINT));
        ctx.request_repaint_after(next);
    }
}
