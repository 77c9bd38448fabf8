use psoc_spectro::data::spectrum::AS7262_CHANNELS;
use psoc_spectro::panels::plot_ui::wavelength_color;
use psoc_spectro::panels::PlotPanel;
use psoc_spectro::{Gain, LedPower, SettingChange, Spectrum, SpectrumAverage};

#[test]
fn as7262_spectrum_pairs_channels_with_values() {
    let s = Spectrum::as7262([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let pts = s.points();
    assert_eq!(pts.len(), 6);
    assert_eq!(pts[0], [450.0, 1.0]);
    assert_eq!(pts[5], [650.0, 6.0]);
    assert_eq!(AS7262_CHANNELS[3].name, "Y");
}

#[test]
fn average_is_running_mean() {
    let mut avg = SpectrumAverage::default();
    avg.add(&Spectrum::as7262([2.0; 6]));
    let mean = avg.add(&Spectrum::as7262([4.0; 6]));
    assert_eq!(mean.values, vec![3.0; 6]);
    assert_eq!(avg.count(), 2);
    avg.reset();
    assert_eq!(avg.count(), 0);
}

#[test]
fn average_restarts_on_different_channels() {
    let mut avg = SpectrumAverage::default();
    avg.add(&Spectrum::as7262([2.0; 6]));
    let other = Spectrum::new(vec![610.0, 680.0], vec![8.0, 9.0]);
    let mean = avg.add(&other);
    assert_eq!(avg.count(), 1);
    assert_eq!(mean.values, vec![8.0, 9.0]);
}

#[test]
fn plot_without_averaging_shows_latest() {
    let mut plot = PlotPanel::default();
    assert!(plot.displayed().is_none());
    plot.push(Spectrum::as7262([1.0; 6]), false);
    plot.push(Spectrum::as7262([5.0; 6]), false);
    assert_eq!(plot.displayed().unwrap().values, vec![5.0; 6]);
    assert_eq!(plot.reads_averaged(), 0);
    plot.clear();
    assert!(plot.displayed().is_none());
}

#[test]
fn sensor_setting_change_resets_average() {
    let mut plot = PlotPanel::default();
    plot.push(Spectrum::as7262([1.0; 6]), true);
    plot.push(Spectrum::as7262([3.0; 6]), true);
    assert_eq!(plot.reads_averaged(), 2);
    plot.on_setting_changed(&SettingChange::Gain(Gain::X16));
    assert_eq!(plot.reads_averaged(), 0);
    // the last mean stays on screen until the next reading
    assert_eq!(plot.displayed().unwrap().values, vec![2.0; 6]);
}

#[test]
fn channel_colors_are_distinct() {
    let colors: Vec<_> = AS7262_CHANNELS
        .iter()
        .map(|c| wavelength_color(c.wavelength_nm))
        .collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn led_power_change_resets_average() {
    let mut plot = PlotPanel::default();
    plot.push(Spectrum::as7262([1.0; 6]), true);
    plot.push(Spectrum::as7262([3.0; 6]), true);
    plot.on_setting_changed(&SettingChange::LedPower(LedPower::Ma100));
    assert_eq!(plot.reads_averaged(), 0);
    plot.push(Spectrum::as7262([7.0; 6]), true);
    assert_eq!(plot.displayed().unwrap().values, vec![7.0; 6]);
}
