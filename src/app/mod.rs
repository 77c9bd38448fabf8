//! Main application module.
//!
//! | Sub-module  | Responsibility |
//! | ----------- | -------------- |
//! | [`update`]  | [`eframe::App`] implementation: window layout and per-frame rendering |
//! | [`run`]     | [`run_spectrometer_gui()`] entry points and icon loading |

mod run;
mod update;

pub use run::{run_spectrometer_gui, run_spectrometer_gui_with_link};

use std::sync::mpsc::Receiver;
use std::time::Instant;

use crate::config::{SpectrometerConfig, Theme};
use crate::data::settings::SettingChange;
use crate::device::Spectrometer;
use crate::panels::{ButtonPanel, Panel, PlotPanel, StatusPanel};

/// The controller window: status bar on top, spectrum plot on the left and
/// settings controls on the right, all sharing one [`Spectrometer`].
pub struct SpectrometerApp {
    pub device: Spectrometer,
    pub plot_panel: PlotPanel,
    pub button_panel: ButtonPanel,
    pub status_panel: StatusPanel,

    /// Setting changes published by the device handle, consumed by the plot.
    setting_changes: Receiver<SettingChange>,

    pub theme: Theme,
    /// Flag so we only apply the theme on the very first frame.
    theme_applied: bool,
}

impl SpectrometerApp {
    pub fn new(mut device: Spectrometer) -> Self {
        let setting_changes = device.subscribe_settings();
        let status_panel = StatusPanel::new(device.connection());
        Self {
            device,
            plot_panel: PlotPanel::default(),
            button_panel: ButtonPanel::default(),
            status_panel,
            setting_changes,
            theme: Theme::default(),
            theme_applied: false,
        }
    }

    pub(crate) fn apply_config(&mut self, cfg: &SpectrometerConfig) {
        self.theme = cfg.theme;
        self.theme_applied = false;
    }

    /// Data-only part of a frame: forward setting changes, refresh the status,
    /// and take a reading if one is due at `now`.
    pub fn update_data(&mut self, now: Instant) {
        while let Ok(change) = self.setting_changes.try_recv() {
            self.plot_panel.on_setting_changed(&change);
        }

        match self.device.poll(now) {
            Some(Ok(spectrum)) => {
                log::debug!("reading: {:?}", spectrum.values);
                let average = self.device.settings().average_reads;
                self.plot_panel.push(spectrum, average);
            }
            Some(Err(e)) => log::warn!("reading failed: {}", e),
            None => {}
        }

        self.status_panel.update(&mut self.device);
    }
}
