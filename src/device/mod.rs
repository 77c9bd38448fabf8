//! Device handle: owns the USB link, the current settings and the
//! connection observable.
//!
//! Every settings mutation goes through [`Spectrometer::apply`], which updates
//! [`DeviceSettings`] first, tells setting subscribers, then forwards the
//! change to the link when the sensor needs to know about it.

mod link;
mod simulated;
mod status;

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

pub use link::{NoDevice, SpectrometerLink};
pub use simulated::SimulatedAs7262;
pub use status::{ConnectionFlags, ConnectionStatus};

use crate::controllers::ConnectionController;
use crate::data::settings::{DeviceSettings, SettingChange};
use crate::data::spectrum::Spectrum;
use crate::error::Result;

pub struct Spectrometer {
    link: Box<dyn SpectrometerLink>,
    settings: DeviceSettings,
    connection: ConnectionController,
    setting_listeners: Vec<Sender<SettingChange>>,
    last_read: Option<Instant>,
}

impl Spectrometer {
    /// Wrap a link. When a sensor is present the settings are written to it.
    pub fn new(link: Box<dyn SpectrometerLink>, settings: DeviceSettings) -> Self {
        let status = ConnectionStatus::from_flags(&link.flags());
        log::info!("startup: {}", status);
        let mut device = Self {
            link,
            settings,
            connection: ConnectionController::new(status),
            setting_listeners: Vec::new(),
            last_read: None,
        };
        device.sync_settings();
        device
    }

    pub fn settings(&self) -> &DeviceSettings {
        &self.settings
    }

    pub fn connection(&self) -> &ConnectionController {
        &self.connection
    }

    pub fn status(&self) -> ConnectionStatus {
        self.connection.status()
    }

    /// Receive every setting change applied from now on.
    pub fn subscribe_settings(&mut self) -> Receiver<SettingChange> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.setting_listeners.push(tx);
        rx
    }

    /// Apply one setting change.
    ///
    /// The settings are updated even when the link rejects the change; the
    /// error is returned and the connection status is refreshed.
    pub fn apply(&mut self, change: SettingChange) -> Result<()> {
        self.settings.apply(change);
        log::debug!("setting: {:?}", change);
        self.setting_listeners.retain(|s| s.send(change).is_ok());
        let res = match change {
            SettingChange::Led(on) => self.link.set_led(on),
            SettingChange::RunState(state) => {
                if state.is_running() {
                    // read immediately on start
                    self.last_read = None;
                }
                Ok(())
            }
            c if c.touches_device() => self.link.configure(&c),
            _ => Ok(()),
        };
        if res.is_err() {
            self.refresh_connection();
        }
        res
    }

    /// Physically switch the LED, keeping `settings.led_on` in step.
    pub fn toggle_led(&mut self, on: bool) -> Result<()> {
        self.apply(SettingChange::Led(on))
    }

    /// Re-read the link flags and publish the resulting status.
    pub fn refresh_connection(&mut self) -> ConnectionStatus {
        let status = ConnectionStatus::from_flags(&self.link.flags());
        self.connection.publish(status.clone());
        status
    }

    /// Ask the link to re-probe the bus; a newly found sensor gets the
    /// current settings.
    pub fn reconnect(&mut self) -> ConnectionStatus {
        let status = ConnectionStatus::from_flags(&self.link.reconnect());
        self.connection.publish(status.clone());
        self.sync_settings();
        status
    }

    fn sync_settings(&mut self) {
        if !self.connection.status().is_connected() {
            return;
        }
        for change in self.settings.device_changes() {
            let res = match change {
                SettingChange::Led(on) => self.link.set_led(on),
                c => self.link.configure(&c),
            };
            if let Err(e) = res {
                log::warn!("failed to write {:?} to sensor: {}", change, e);
            }
        }
    }

    /// Whether a reading is due at `now`.
    pub fn read_due(&self, now: Instant) -> bool {
        self.settings.run_state.is_running()
            && self.last_read.map_or(true, |t| {
                now.saturating_duration_since(t) >= self.settings.read_rate.period()
            })
    }

    /// Time left until the next reading, `None` when idle.
    pub fn next_read_in(&self, now: Instant) -> Option<Duration> {
        if !self.settings.run_state.is_running() {
            return None;
        }
        Some(match self.last_read {
            Some(t) => self
                .settings
                .read_rate
                .period()
                .saturating_sub(now.saturating_duration_since(t)),
            None => Duration::ZERO,
        })
    }

    /// Take a reading if one is due. A failed read refreshes the connection status.
    pub fn poll(&mut self, now: Instant) -> Option<Result<Spectrum>> {
        if !self.read_due(now) {
            return None;
        }
        self.last_read = Some(now);
        let res = self.link.read_spectrum(&self.settings);
        if res.is_err() {
            self.refresh_connection();
        }
        Some(res)
    }
}
