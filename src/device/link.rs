//! The seam between the GUI and the USB driver.

use crate::data::settings::{DeviceSettings, SettingChange};
use crate::data::spectrum::Spectrum;
use crate::error::{Error, Result};

use super::status::ConnectionFlags;

/// A USB connection to a PSoC with a spectral sensor behind it.
///
/// Implementations perform blocking I/O; every call is made from the GUI
/// thread, so they should return promptly.
pub trait SpectrometerLink {
    /// Last known connectivity flags.
    fn flags(&self) -> ConnectionFlags;

    /// Re-probe the bus and return the fresh flags.
    fn reconnect(&mut self) -> ConnectionFlags;

    /// Switch the illumination LED.
    fn set_led(&mut self, on: bool) -> Result<()>;

    /// Write a single setting to the sensor.
    ///
    /// Only called with changes for which [`SettingChange::touches_device`]
    /// holds; LED on/off goes through [`SpectrometerLink::set_led`].
    fn configure(&mut self, change: &SettingChange) -> Result<()>;

    /// Take one reading with the given settings.
    fn read_spectrum(&mut self, settings: &DeviceSettings) -> Result<Spectrum>;
}

/// Link used when no driver is available: nothing is ever found.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDevice;

impl SpectrometerLink for NoDevice {
    fn flags(&self) -> ConnectionFlags {
        ConnectionFlags::default()
    }

    fn reconnect(&mut self) -> ConnectionFlags {
        ConnectionFlags::default()
    }

    fn set_led(&mut self, _on: bool) -> Result<()> {
        Err(Error::NotFound)
    }

    fn configure(&mut self, _change: &SettingChange) -> Result<()> {
        Err(Error::NotFound)
    }

    fn read_spectrum(&mut self, _settings: &DeviceSettings) -> Result<Spectrum> {
        Err(Error::NotFound)
    }
}
