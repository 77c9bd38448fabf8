//! Error type shared by the device layer, settings parsing and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("device not connected")]
    NotFound,
    #[error("device not responding: {0}")]
    NotResponding(String),
    #[error("integration time {0} ms is not a valid duration")]
    InvalidIntegrationTime(f64),
    #[error("integration time step {0} is out of range")]
    InvalidIntegrationSteps(u8),
    #[error("unknown {kind} option '{label}'")]
    UnknownLabel { kind: &'static str, label: String },
    #[error("HOME env var not set")]
    NoHome,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
