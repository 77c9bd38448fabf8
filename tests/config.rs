use psoc_spectro::{Gain, IntegrationTime, RunState, SettingOption, SpectrometerConfig, Theme};

#[test]
fn defaults_match_the_classic_window() {
    let cfg = SpectrometerConfig::default();
    assert_eq!(cfg.title, "Spectrograph");
    assert_eq!(cfg.window_size, [900.0, 650.0]);
    assert!(!cfg.simulate);
    assert_eq!(cfg.settings.run_state, RunState::Idle);
}

#[test]
fn config_round_trips_through_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut cfg = SpectrometerConfig::default();
    cfg.theme = Theme::Light;
    cfg.simulate = true;
    cfg.settings.gain = Gain::X64;
    cfg.settings.integration_time = IntegrationTime::from_steps(100).unwrap();
    cfg.settings.led_on = true;
    cfg.settings.run_state = RunState::Running;
    cfg.save(&path).unwrap();

    let loaded = SpectrometerConfig::load(&path).unwrap();
    assert_eq!(loaded.theme, Theme::Light);
    assert!(loaded.simulate);
    assert_eq!(loaded.settings.gain, Gain::X64);
    assert_eq!(loaded.settings.integration_time.label(), "560.0");
    assert!(loaded.settings.led_on);
    // never starts running
    assert_eq!(loaded.settings.run_state, RunState::Idle);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "simulate: true\nsettings:\n  read_rate: Ms500\n").unwrap();
    let cfg = SpectrometerConfig::load(&path).unwrap();
    assert!(cfg.simulate);
    assert_eq!(cfg.title, "Spectrograph");
    assert_eq!(cfg.settings.read_rate.label(), "500 ms");
    assert_eq!(cfg.settings.gain, Gain::X1);
}

#[test]
fn bad_integration_step_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "settings:\n  integration_time: 300\n").unwrap();
    assert!(SpectrometerConfig::load(&path).is_err());
}
