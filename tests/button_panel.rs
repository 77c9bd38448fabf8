mod common;

use common::scripted_device;
use psoc_spectro::panels::{ButtonPanel, LedLook};
use psoc_spectro::{
    ConnectionStatus, DeviceSettings, Gain, IntegrationTime, LedPower, NoDevice, ReadRate,
    RunState, SettingChange, Spectrometer,
};

#[test]
fn led_toggle_twice_restores_flag_and_look() {
    let (mut device, state) = scripted_device();
    let panel = ButtonPanel::default();
    let initial = panel.led_look(&device);
    assert_eq!(
        initial,
        LedLook {
            label: "Turn LED on",
            pressed: false
        }
    );

    let look = panel.toggle_led(&mut device);
    assert!(device.settings().led_on);
    assert_eq!(look, LedLook::for_state(true));
    assert_eq!(look.label, "Turn LED off");
    assert!(look.pressed);

    let look = panel.toggle_led(&mut device);
    assert!(!device.settings().led_on);
    assert_eq!(look, initial);
    assert_eq!(state.borrow().led, vec![true, false]);
}

#[test]
fn led_look_tracks_flag_without_a_device() {
    let mut device = Spectrometer::new(Box::new(NoDevice), DeviceSettings::default());
    let panel = ButtonPanel::default();
    let look = panel.toggle_led(&mut device);
    assert!(device.settings().led_on);
    assert_eq!(look, LedLook::for_state(device.settings().led_on));
    assert_eq!(device.status(), ConnectionStatus::NoDevice);
}

#[test]
fn averaging_checkbox_reads_back() {
    let (mut device, state) = scripted_device();
    let panel = ButtonPanel::default();
    panel.set_average_reads(&mut device, true);
    assert!(device.settings().average_reads);
    panel.set_average_reads(&mut device, false);
    assert!(!device.settings().average_reads);
    // host-side only
    assert!(state.borrow().configured.is_empty());
}

#[test]
fn run_toggle_keeps_label_in_sync() {
    let (mut device, _state) = scripted_device();
    let panel = ButtonPanel::default();
    assert_eq!(device.settings().run_state.button_label(), "Start");
    assert_eq!(panel.toggle_run(&mut device), RunState::Running);
    assert_eq!(device.settings().run_state.button_label(), "Stop");
    assert_eq!(panel.toggle_run(&mut device), RunState::Idle);
    assert_eq!(device.settings().run_state.button_label(), "Start");
}

#[test]
fn selections_reach_settings_and_sensor() {
    let (mut device, state) = scripted_device();
    let panel = ButtonPanel::default();
    let time = IntegrationTime::from_label("56.0").unwrap();

    panel.select_gain(&mut device, Gain::X16);
    panel.select_integration_time(&mut device, time);
    panel.select_read_rate(&mut device, ReadRate::Ms200);
    panel.select_led_power(&mut device, LedPower::Ma100);

    let s = device.settings();
    assert_eq!(s.gain, Gain::X16);
    assert_eq!(s.integration_time, time);
    assert_eq!(s.read_rate, ReadRate::Ms200);
    assert_eq!(s.led_power, LedPower::Ma100);
    assert_eq!(
        state.borrow().configured,
        vec![
            SettingChange::Gain(Gain::X16),
            SettingChange::IntegrationTime(time),
            SettingChange::LedPower(LedPower::Ma100),
        ]
    );
}

#[test]
fn setting_subscribers_see_every_change() {
    let (mut device, _state) = scripted_device();
    let rx = device.subscribe_settings();
    let panel = ButtonPanel::default();
    panel.select_read_rate(&mut device, ReadRate::Sec5);
    panel.toggle_led(&mut device);
    let seen: Vec<SettingChange> = rx.try_iter().collect();
    assert_eq!(
        seen,
        vec![
            SettingChange::ReadRate(ReadRate::Sec5),
            SettingChange::Led(true)
        ]
    );
}
