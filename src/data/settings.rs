//! User-selectable AS7262 parameters and the option tables behind each control.
//!
//! Every categorical setting is an explicit enum with a bidirectional mapping
//! between the label shown in the UI and the value written to the device.
//! Integration time is a step count, so it can only ever hold whole
//! multiples of [`INTEGRATION_STEP_MS`].

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Duration of one integration step in milliseconds.
pub const INTEGRATION_STEP_MS: f64 = 5.6;

/// Number of selectable integration steps (`0..INTEGRATION_STEPS`).
pub const INTEGRATION_STEPS: usize = 255;

static INTEGRATION_LABELS: Lazy<Vec<String>> = Lazy::new(|| {
    (0..INTEGRATION_STEPS)
        .map(|i| format!("{:.1}", i as f64 * INTEGRATION_STEP_MS))
        .collect()
});

/// A fixed table of options with human-readable labels.
pub trait SettingOption: Copy + PartialEq + 'static {
    /// All options, in the order they are offered in the UI.
    const ALL: &'static [Self];
    /// Name used in error messages.
    const KIND: &'static str;

    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Result<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.label() == label)
            .ok_or_else(|| Error::UnknownLabel {
                kind: Self::KIND,
                label: label.to_string(),
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gain
// ─────────────────────────────────────────────────────────────────────────────

/// Sensor amplification applied to the photodiode channels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gain {
    #[default]
    X1,
    X3_7,
    X16,
    X64,
}

impl SettingOption for Gain {
    const ALL: &'static [Self] = &[Gain::X1, Gain::X3_7, Gain::X16, Gain::X64];
    const KIND: &'static str = "gain";

    fn label(&self) -> &'static str {
        match self {
            Gain::X1 => "1",
            Gain::X3_7 => "3.7",
            Gain::X16 => "16",
            Gain::X64 => "64",
        }
    }
}

impl Gain {
    /// Value of the GAIN field in the sensor's control register.
    pub fn register(self) -> u8 {
        match self {
            Gain::X1 => 0,
            Gain::X3_7 => 1,
            Gain::X16 => 2,
            Gain::X64 => 3,
        }
    }

    pub fn from_register(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.register() == value)
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Gain::X1 => 1.0,
            Gain::X3_7 => 3.7,
            Gain::X16 => 16.0,
            Gain::X64 => 64.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integration time
// ─────────────────────────────────────────────────────────────────────────────

/// Integration time as a count of 5.6 ms steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct IntegrationTime(u8);

impl IntegrationTime {
    pub const MAX_STEPS: u8 = (INTEGRATION_STEPS - 1) as u8;

    pub fn from_steps(steps: u8) -> Result<Self> {
        if steps > Self::MAX_STEPS {
            return Err(Error::InvalidIntegrationSteps(steps));
        }
        Ok(Self(steps))
    }

    /// Quantize a free-form duration down to a whole number of steps.
    ///
    /// Durations past the last step clamp to it; negative and non-finite
    /// input is rejected.
    pub fn from_millis(ms: f64) -> Result<Self> {
        if !ms.is_finite() || ms < 0.0 {
            return Err(Error::InvalidIntegrationTime(ms));
        }
        // tolerance absorbs binary error for exact multiples (16.8 / 5.6 < 3.0)
        let steps = (ms / INTEGRATION_STEP_MS + 1e-9).floor();
        Ok(Self(steps.min(Self::MAX_STEPS as f64) as u8))
    }

    /// Parse one of the labels produced by [`IntegrationTime::options`].
    pub fn from_label(label: &str) -> Result<Self> {
        let label = label.trim();
        INTEGRATION_LABELS
            .iter()
            .position(|l| l == label)
            .map(|i| Self(i as u8))
            .ok_or_else(|| Error::UnknownLabel {
                kind: "integration time",
                label: label.to_string(),
            })
    }

    /// The precomputed option labels, ascending, one per step.
    pub fn options() -> &'static [String] {
        &INTEGRATION_LABELS
    }

    pub fn all() -> impl Iterator<Item = IntegrationTime> {
        (0..=Self::MAX_STEPS).map(IntegrationTime)
    }

    pub fn steps(self) -> u8 {
        self.0
    }

    pub fn millis(self) -> f64 {
        self.0 as f64 * INTEGRATION_STEP_MS
    }

    pub fn label(self) -> &'static str {
        &INTEGRATION_LABELS[self.0 as usize]
    }
}

impl Default for IntegrationTime {
    fn default() -> Self {
        // 280 ms
        Self(50)
    }
}

impl TryFrom<u8> for IntegrationTime {
    type Error = Error;
    fn try_from(steps: u8) -> Result<Self> {
        Self::from_steps(steps)
    }
}

impl From<IntegrationTime> for u8 {
    fn from(t: IntegrationTime) -> u8 {
        t.0
    }
}

impl fmt::Display for IntegrationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Read rate
// ─────────────────────────────────────────────────────────────────────────────

/// Interval between readings while the run state is [`RunState::Running`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadRate {
    Ms200,
    Ms500,
    #[default]
    Sec1,
    Sec5,
    Sec10,
    Sec30,
}

impl SettingOption for ReadRate {
    const ALL: &'static [Self] = &[
        ReadRate::Ms200,
        ReadRate::Ms500,
        ReadRate::Sec1,
        ReadRate::Sec5,
        ReadRate::Sec10,
        ReadRate::Sec30,
    ];
    const KIND: &'static str = "read rate";

    fn label(&self) -> &'static str {
        match self {
            ReadRate::Ms200 => "200 ms",
            ReadRate::Ms500 => "500 ms",
            ReadRate::Sec1 => "1 sec",
            ReadRate::Sec5 => "5 sec",
            ReadRate::Sec10 => "10 sec",
            ReadRate::Sec30 => "30 sec",
        }
    }
}

impl ReadRate {
    pub fn millis(self) -> u64 {
        match self {
            ReadRate::Ms200 => 200,
            ReadRate::Ms500 => 500,
            ReadRate::Sec1 => 1_000,
            ReadRate::Sec5 => 5_000,
            ReadRate::Sec10 => 10_000,
            ReadRate::Sec30 => 30_000,
        }
    }

    pub fn from_millis(ms: u64) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.millis() == ms)
    }

    pub fn period(self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LED power
// ─────────────────────────────────────────────────────────────────────────────

/// Drive current of the illumination LED.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedPower {
    #[default]
    Ma12_5,
    Ma25,
    Ma50,
    Ma100,
}

impl SettingOption for LedPower {
    const ALL: &'static [Self] = &[
        LedPower::Ma12_5,
        LedPower::Ma25,
        LedPower::Ma50,
        LedPower::Ma100,
    ];
    const KIND: &'static str = "LED power";

    fn label(&self) -> &'static str {
        match self {
            LedPower::Ma12_5 => "12.5 mA",
            LedPower::Ma25 => "25 mA",
            LedPower::Ma50 => "50 mA",
            LedPower::Ma100 => "100 mA",
        }
    }
}

impl LedPower {
    /// Value of the ICL_DRV field in the LED control register.
    pub fn register(self) -> u8 {
        match self {
            LedPower::Ma12_5 => 0,
            LedPower::Ma25 => 1,
            LedPower::Ma50 => 2,
            LedPower::Ma100 => 3,
        }
    }

    pub fn from_register(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.register() == value)
    }

    pub fn milliamps(self) -> f64 {
        match self {
            LedPower::Ma12_5 => 12.5,
            LedPower::Ma25 => 25.0,
            LedPower::Ma50 => 50.0,
            LedPower::Ma100 => 100.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Run state
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    /// Label of the run button while in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Idle => "Start",
            RunState::Running => "Stop",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DeviceSettings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    pub gain: Gain,
    pub integration_time: IntegrationTime,
    pub read_rate: ReadRate,
    /// Average consecutive readings instead of showing each one.
    pub average_reads: bool,
    pub led_power: LedPower,
    pub led_on: bool,
    /// Always starts idle.
    #[serde(skip)]
    pub run_state: RunState,
}

/// A mutation of exactly one [`DeviceSettings`] field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SettingChange {
    Gain(Gain),
    IntegrationTime(IntegrationTime),
    ReadRate(ReadRate),
    AverageReads(bool),
    LedPower(LedPower),
    Led(bool),
    RunState(RunState),
}

impl SettingChange {
    /// Whether the change has to be written to the sensor.
    pub fn touches_device(&self) -> bool {
        matches!(
            self,
            SettingChange::Gain(_)
                | SettingChange::IntegrationTime(_)
                | SettingChange::LedPower(_)
                | SettingChange::Led(_)
        )
    }
}

impl DeviceSettings {
    pub fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::Gain(g) => self.gain = g,
            SettingChange::IntegrationTime(t) => self.integration_time = t,
            SettingChange::ReadRate(r) => self.read_rate = r,
            SettingChange::AverageReads(a) => self.average_reads = a,
            SettingChange::LedPower(p) => self.led_power = p,
            SettingChange::Led(on) => self.led_on = on,
            SettingChange::RunState(s) => self.run_state = s,
        }
    }

    /// The changes that bring a freshly connected sensor in line with these settings.
    pub fn device_changes(&self) -> [SettingChange; 4] {
        [
            SettingChange::Gain(self.gain),
            SettingChange::IntegrationTime(self.integration_time),
            SettingChange::LedPower(self.led_power),
            SettingChange::Led(self.led_on),
        ]
    }
}
