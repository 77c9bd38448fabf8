#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use psoc_spectro::{
    ConnectionFlags, DeviceSettings, Error, Result, SettingChange, Spectrometer, SpectrometerLink,
    Spectrum,
};

/// What a [`ScriptedLink`] saw, plus the flags it reports.
#[derive(Default)]
pub struct LinkState {
    pub flags: ConnectionFlags,
    pub configured: Vec<SettingChange>,
    pub led: Vec<bool>,
    pub reads: usize,
}

/// Link whose flags can be changed by the test after it was boxed.
///
/// Reading `n` returns `n` on every channel.
pub struct ScriptedLink {
    pub state: Rc<RefCell<LinkState>>,
}

impl ScriptedLink {
    pub fn new(flags: ConnectionFlags) -> (Self, Rc<RefCell<LinkState>>) {
        let state = Rc::new(RefCell::new(LinkState {
            flags,
            ..Default::default()
        }));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }

    fn check(&self) -> Result<()> {
        if self.state.borrow().flags.spectrometer.is_some() {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }
}

impl SpectrometerLink for ScriptedLink {
    fn flags(&self) -> ConnectionFlags {
        self.state.borrow().flags.clone()
    }

    fn reconnect(&mut self) -> ConnectionFlags {
        self.flags()
    }

    fn set_led(&mut self, on: bool) -> Result<()> {
        self.check()?;
        self.state.borrow_mut().led.push(on);
        Ok(())
    }

    fn configure(&mut self, change: &SettingChange) -> Result<()> {
        self.check()?;
        self.state.borrow_mut().configured.push(*change);
        Ok(())
    }

    fn read_spectrum(&mut self, _settings: &DeviceSettings) -> Result<Spectrum> {
        self.check()?;
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        Ok(Spectrum::as7262([state.reads as f64; 6]))
    }
}

pub fn as7262_flags() -> ConnectionFlags {
    ConnectionFlags {
        connected: true,
        found: true,
        spectrometer: Some("AS7262".to_string()),
    }
}

/// A device on a connected scripted link, with the startup sync cleared from the log.
pub fn scripted_device() -> (Spectrometer, Rc<RefCell<LinkState>>) {
    let (link, state) = ScriptedLink::new(as7262_flags());
    let device = Spectrometer::new(Box::new(link), DeviceSettings::default());
    {
        let mut s = state.borrow_mut();
        s.configured.clear();
        s.led.clear();
    }
    (device, state)
}
