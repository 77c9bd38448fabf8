//! In-process stand-in for an AS7262 behind a PSoC, for demos and tests.

use crate::data::settings::{DeviceSettings, Gain, IntegrationTime, LedPower, SettingChange};
use crate::data::spectrum::Spectrum;
use crate::error::{Error, Result};

use super::link::SpectrometerLink;
use super::status::ConnectionFlags;

/// Counts per 100 ms of integration at unity gain with the LED off.
const AMBIENT: [f64; 6] = [120.0, 180.0, 260.0, 240.0, 210.0, 150.0];
/// Relative LED emission per channel (white phosphor LED).
const LED_WEIGHTS: [f64; 6] = [0.6, 0.9, 0.7, 0.65, 0.55, 0.35];
/// Counts per mA per 100 ms at unity gain.
const LED_COUNTS_PER_MA: f64 = 8.0;
/// 16-bit channel ADC.
const FULL_SCALE: f64 = 65_535.0;

#[derive(Debug, Clone)]
pub struct SimulatedAs7262 {
    flags: ConnectionFlags,
    gain: Gain,
    integration_time: IntegrationTime,
    led_power: LedPower,
    led_on: bool,
    reads: u64,
}

impl Default for SimulatedAs7262 {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAs7262 {
    /// A fully working sensor.
    pub fn new() -> Self {
        Self::with_flags(ConnectionFlags {
            connected: true,
            found: true,
            spectrometer: Some("AS7262".to_string()),
        })
    }

    /// A simulated bus in an arbitrary connectivity state.
    pub fn with_flags(flags: ConnectionFlags) -> Self {
        Self {
            flags,
            gain: Gain::default(),
            integration_time: IntegrationTime::default(),
            led_power: LedPower::default(),
            led_on: false,
            reads: 0,
        }
    }

    pub fn led_on(&self) -> bool {
        self.led_on
    }

    pub fn reads(&self) -> u64 {
        self.reads
    }

    fn ensure_sensor(&self) -> Result<()> {
        match (&self.flags.spectrometer, self.flags.connected, self.flags.found) {
            (Some(_), _, _) => Ok(()),
            (None, true, _) => Err(Error::NotResponding("sensor not found on PSoC".into())),
            (None, false, true) => Err(Error::NotResponding("PSoC did not answer".into())),
            (None, false, false) => Err(Error::NotFound),
        }
    }

    fn channel_counts(&self, channel: usize) -> f64 {
        let led = if self.led_on {
            LED_WEIGHTS[channel] * self.led_power.milliamps() * LED_COUNTS_PER_MA
        } else {
            0.0
        };
        let ripple = 1.0 + 0.02 * (self.reads as f64 * 0.9 + channel as f64).sin();
        let counts = (AMBIENT[channel] + led)
            * self.gain.multiplier()
            * (self.integration_time.millis() / 100.0)
            * ripple;
        counts.clamp(0.0, FULL_SCALE).round()
    }
}

impl SpectrometerLink for SimulatedAs7262 {
    fn flags(&self) -> ConnectionFlags {
        self.flags.clone()
    }

    fn reconnect(&mut self) -> ConnectionFlags {
        log::debug!("simulated link: reconnect ({:?})", self.flags);
        self.flags.clone()
    }

    fn set_led(&mut self, on: bool) -> Result<()> {
        self.ensure_sensor()?;
        self.led_on = on;
        Ok(())
    }

    fn configure(&mut self, change: &SettingChange) -> Result<()> {
        self.ensure_sensor()?;
        match *change {
            SettingChange::Gain(g) => self.gain = g,
            SettingChange::IntegrationTime(t) => self.integration_time = t,
            SettingChange::LedPower(p) => self.led_power = p,
            SettingChange::Led(on) => self.led_on = on,
            _ => {}
        }
        Ok(())
    }

    fn read_spectrum(&mut self, _settings: &DeviceSettings) -> Result<Spectrum> {
        self.ensure_sensor()?;
        let mut values = [0.0; 6];
        for (i, v) in values.iter_mut().enumerate() {
            *v = self.channel_counts(i);
        }
        self.reads += 1;
        Ok(Spectrum::as7262(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_raises_every_channel() {
        let mut dev = SimulatedAs7262::new();
        let settings = DeviceSettings::default();
        let dark = dev.read_spectrum(&settings).unwrap();
        dev.set_led(true).unwrap();
        let lit = dev.read_spectrum(&settings).unwrap();
        for (d, l) in dark.values.iter().zip(&lit.values) {
            assert!(l > d, "{l} <= {d}");
        }
    }

    #[test]
    fn zero_integration_reads_zero() {
        let mut dev = SimulatedAs7262::new();
        let zero = IntegrationTime::from_steps(0).unwrap();
        dev.configure(&SettingChange::IntegrationTime(zero)).unwrap();
        let s = dev.read_spectrum(&DeviceSettings::default()).unwrap();
        assert!(s.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn high_gain_saturates_at_full_scale() {
        let mut dev = SimulatedAs7262::new();
        dev.configure(&SettingChange::Gain(Gain::X64)).unwrap();
        let longest = IntegrationTime::from_steps(IntegrationTime::MAX_STEPS).unwrap();
        dev.configure(&SettingChange::IntegrationTime(longest)).unwrap();
        let s = dev.read_spectrum(&DeviceSettings::default()).unwrap();
        assert!(s.values.iter().all(|&v| v == FULL_SCALE));
    }

    #[test]
    fn missing_sensor_is_not_responding() {
        let mut dev = SimulatedAs7262::with_flags(ConnectionFlags {
            connected: true,
            found: true,
            spectrometer: None,
        });
        assert!(matches!(dev.set_led(true), Err(Error::NotResponding(_))));
        assert!(!dev.led_on());
        let mut gone = SimulatedAs7262::with_flags(ConnectionFlags::default());
        assert!(matches!(
            gone.read_spectrum(&DeviceSettings::default()),
            Err(Error::NotFound)
        ));
    }
}
