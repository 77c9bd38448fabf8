//! Application configuration.
//!
//! [`SpectrometerConfig`] can be built in code (every field has a default) or
//! loaded from a YAML file, by default `~/.psoc-spectro/config.yaml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use eframe::egui::{Context, Visuals};
use serde::{Deserialize, Serialize};

use crate::data::settings::DeviceSettings;
use crate::error::{Error, Result};

/// Visual theme applied on the first frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn apply(self, ctx: &Context) {
        let visuals = match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }
}

/// Top-level configuration for the controller window.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `title`          | Native window title |
/// | `window_size`    | Initial inner size in logical pixels |
/// | `theme`          | Dark or light visuals |
/// | `simulate`       | Use the built-in simulated sensor instead of the USB link |
/// | `settings`       | Device settings applied at startup |
/// | `native_options` | eframe options; not stored in the file |
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrometerConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub theme: Theme,
    pub simulate: bool,
    pub settings: DeviceSettings,
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for SpectrometerConfig {
    fn default() -> Self {
        Self {
            title: "Spectrograph".to_string(),
            window_size: [900.0, 650.0],
            theme: Theme::default(),
            simulate: false,
            settings: DeviceSettings::default(),
            native_options: None,
        }
    }
}

impl SpectrometerConfig {
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var_os("HOME").ok_or(Error::NoHome)?;
        Ok(PathBuf::from(home)
            .join(".psoc-spectro")
            .join("config.yaml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg = serde_yaml::from_str(&s)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(path)?;
        f.write_all(s.as_bytes())?;
        Ok(())
    }

    pub fn load_from_default_path() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Save to the default path and return it.
    pub fn save_to_default_path(&self) -> Result<PathBuf> {
        let path = Self::default_path()?;
        self.save(&path)?;
        Ok(path)
    }
}
