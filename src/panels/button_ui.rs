use egui::Ui;
use egui_phosphor::regular::{LIGHTBULB, LIGHTBULB_FILAMENT, PLAY, SLIDERS, STOP};

use super::panel_trait::{Panel, PanelState};
use crate::data::settings::{
    Gain, IntegrationTime, LedPower, ReadRate, RunState, SettingChange, SettingOption,
};
use crate::device::Spectrometer;

/// Vertical spacing between controls.
pub const BUTTON_PADY: f32 = 7.0;

/// Label and pressed state of the LED button for a given LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedLook {
    pub label: &'static str,
    pub pressed: bool,
}

impl LedLook {
    pub fn for_state(led_on: bool) -> Self {
        if led_on {
            Self {
                label: "Turn LED off",
                pressed: true,
            }
        } else {
            Self {
                label: "Turn LED on",
                pressed: false,
            }
        }
    }
}

/// One control per device setting.
///
/// Each control has a method that performs its action without a UI, so the
/// same code path runs from [`Panel::render_panel`] and from tests.
pub struct ButtonPanel {
    pub state: PanelState,
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Settings", SLIDERS),
        }
    }
}

impl ButtonPanel {
    pub const GAIN_LABEL: &'static str = "Gain Setting:";
    pub const INTEGRATION_LABEL: &'static str = "Integration time (ms):";
    pub const READ_RATE_LABEL: &'static str = "Set read rate:";
    pub const AVERAGE_LABEL: &'static str = "Integrate multiple reads";
    pub const LED_POWER_LABEL: &'static str = "LED power (mA):";

    pub fn select_gain(&self, device: &mut Spectrometer, gain: Gain) {
        forward(device, SettingChange::Gain(gain));
    }

    pub fn select_integration_time(&self, device: &mut Spectrometer, time: IntegrationTime) {
        forward(device, SettingChange::IntegrationTime(time));
    }

    pub fn select_read_rate(&self, device: &mut Spectrometer, rate: ReadRate) {
        forward(device, SettingChange::ReadRate(rate));
    }

    pub fn set_average_reads(&self, device: &mut Spectrometer, average: bool) {
        log::info!("average reads: {}", average);
        forward(device, SettingChange::AverageReads(average));
    }

    pub fn select_led_power(&self, device: &mut Spectrometer, power: LedPower) {
        forward(device, SettingChange::LedPower(power));
    }

    /// Invert the LED and return the button look matching the new state.
    pub fn toggle_led(&self, device: &mut Spectrometer) -> LedLook {
        let on = !device.settings().led_on;
        if let Err(e) = device.toggle_led(on) {
            log::warn!("LED toggle failed: {}", e);
        }
        self.led_look(device)
    }

    pub fn led_look(&self, device: &Spectrometer) -> LedLook {
        LedLook::for_state(device.settings().led_on)
    }

    /// Flip between idle and running and return the new state.
    pub fn toggle_run(&self, device: &mut Spectrometer) -> RunState {
        let next = device.settings().run_state.toggled();
        log::info!("run state: {:?}", next);
        forward(device, SettingChange::RunState(next));
        device.settings().run_state
    }
}

fn forward(device: &mut Spectrometer, change: SettingChange) {
    if let Err(e) = device.apply(change) {
        log::warn!("failed to apply {:?}: {}", change, e);
    }
}

/// Combo box over a fixed option table; returns the new selection if it changed.
fn option_combo<T: SettingOption>(ui: &mut Ui, id: &str, current: T) -> Option<T> {
    let mut selected = current;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for opt in T::ALL {
                ui.selectable_value(&mut selected, *opt, opt.label());
            }
        });
    (selected != current).then_some(selected)
}

impl Panel for ButtonPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, device: &mut Spectrometer) {
        let settings = device.settings().clone();
        ui.spacing_mut().item_spacing.y = BUTTON_PADY;
        ui.vertical_centered(|ui| {
            ui.heading(self.title_and_icon());
            ui.separator();

            ui.label(Self::GAIN_LABEL);
            if let Some(gain) = option_combo(ui, "gain", settings.gain) {
                self.select_gain(device, gain);
            }

            ui.label(Self::INTEGRATION_LABEL);
            let mut time = settings.integration_time;
            egui::ComboBox::from_id_salt("integration_time")
                .selected_text(time.label())
                .height(300.0)
                .show_ui(ui, |ui| {
                    for t in IntegrationTime::all() {
                        ui.selectable_value(&mut time, t, t.label());
                    }
                });
            if time != settings.integration_time {
                self.select_integration_time(device, time);
            }

            ui.label(Self::READ_RATE_LABEL);
            if let Some(rate) = option_combo(ui, "read_rate", settings.read_rate) {
                self.select_read_rate(device, rate);
            }

            let mut average = settings.average_reads;
            if ui.checkbox(&mut average, Self::AVERAGE_LABEL).changed() {
                self.set_average_reads(device, average);
            }

            ui.label(Self::LED_POWER_LABEL);
            if let Some(power) = option_combo(ui, "led_power", settings.led_power) {
                self.select_led_power(device, power);
            }

            let look = self.led_look(device);
            let icon = if look.pressed { LIGHTBULB_FILAMENT } else { LIGHTBULB };
            if ui
                .add(egui::Button::new(format!("{} {}", icon, look.label)).selected(look.pressed))
                .clicked()
            {
                self.toggle_led(device);
            }

            let run = device.settings().run_state;
            let icon = if run.is_running() { STOP } else { PLAY };
            if ui
                .add(
                    egui::Button::new(format!("{} {}", icon, run.button_label()))
                        .selected(run.is_running()),
                )
                .clicked()
            {
                self.toggle_run(device);
            }
        });
    }
}
