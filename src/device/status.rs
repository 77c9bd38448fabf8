use std::fmt;

/// Connectivity flags reported by the USB link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionFlags {
    /// The PSoC answered on USB.
    pub connected: bool,
    /// A PSoC with the expected vendor/product id is attached.
    pub found: bool,
    /// Model name of the sensor detected behind the PSoC.
    pub spectrometer: Option<String>,
}

/// What the status bar reports, derived from [`ConnectionFlags`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected(String),
    SensorMissing,
    NotResponding,
    NoDevice,
}

impl ConnectionStatus {
    /// Evaluated in priority order: sensor name, connected, found.
    pub fn from_flags(flags: &ConnectionFlags) -> Self {
        if let Some(name) = &flags.spectrometer {
            ConnectionStatus::Connected(name.clone())
        } else if flags.connected {
            ConnectionStatus::SensorMissing
        } else if flags.found {
            ConnectionStatus::NotResponding
        } else {
            ConnectionStatus::NoDevice
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected(_))
    }

    pub fn message(&self) -> String {
        match self {
            ConnectionStatus::Connected(name) => format!("Spectrometer: {} connected", name),
            ConnectionStatus::SensorMissing => "Sensor not found on PSoC".to_string(),
            ConnectionStatus::NotResponding => {
                "Device found but not responding properly".to_string()
            }
            ConnectionStatus::NoDevice => "No device found".to_string(),
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
