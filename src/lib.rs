//! Desktop controller for AS726X spectral sensors behind a PSoC USB bridge.
//!
//! The crate is organised into:
//! - `data`: settings model, option tables and spectrum types
//! - `device`: the device handle and the [`SpectrometerLink`] seam to the USB driver
//! - `controllers`: observable connection state
//! - `panels`: status bar, settings controls and spectrum plot
//! - `app`: window composition and run helpers
//! - `config`: configuration and its YAML file

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod device;
pub mod error;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_spectrometer_gui, run_spectrometer_gui_with_link, SpectrometerApp};
pub use config::{SpectrometerConfig, Theme};
pub use controllers::ConnectionController;
pub use data::settings::{
    DeviceSettings, Gain, IntegrationTime, LedPower, ReadRate, RunState, SettingChange,
    SettingOption,
};
pub use data::spectrum::{Spectrum, SpectrumAverage};
pub use device::{
    ConnectionFlags, ConnectionStatus, NoDevice, SimulatedAs7262, Spectrometer, SpectrometerLink,
};
pub use error::{Error, Result};
