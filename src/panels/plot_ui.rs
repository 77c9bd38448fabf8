use egui::{Color32, Ui};
use egui_phosphor::regular::CHART_BAR;
use egui_plot::{Bar, BarChart, Legend, Plot};

use super::panel_trait::{Panel, PanelState};
use crate::data::settings::SettingChange;
use crate::data::spectrum::{Spectrum, SpectrumAverage};
use crate::device::Spectrometer;

/// Width of each channel bar in nm.
const BAR_WIDTH_NM: f64 = 16.0;

/// Approximate display color for a visible wavelength.
pub fn wavelength_color(nm: f64) -> Color32 {
    match nm {
        x if x < 475.0 => Color32::from_rgb(138, 43, 226),
        x if x < 525.0 => Color32::from_rgb(30, 144, 255),
        x if x < 560.0 => Color32::from_rgb(50, 205, 50),
        x if x < 585.0 => Color32::from_rgb(255, 215, 0),
        x if x < 625.0 => Color32::from_rgb(255, 140, 0),
        _ => Color32::from_rgb(220, 20, 60),
    }
}

/// Bar chart of the latest reading, or of the running mean while averaging.
pub struct PlotPanel {
    pub state: PanelState,
    current: Option<Spectrum>,
    average: SpectrumAverage,
    reset_view: bool,
}

impl Default for PlotPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Spectrum", CHART_BAR),
            current: None,
            average: SpectrumAverage::default(),
            reset_view: false,
        }
    }
}

impl PlotPanel {
    pub const X_AXIS_LABEL: &'static str = "Wavelength (nm)";
    pub const Y_AXIS_LABEL: &'static str = "Counts";

    pub fn push(&mut self, spectrum: Spectrum, average: bool) {
        let shown = if average {
            self.average.add(&spectrum)
        } else {
            spectrum
        };
        // rescale once the first reading arrives
        self.reset_view |= self.current.is_none();
        self.current = Some(shown);
    }

    /// React to a setting change published by the device handle.
    pub fn on_setting_changed(&mut self, change: &SettingChange) {
        match change {
            // a new average starts from the next reading either way;
            // dark and lit readings do not mix
            SettingChange::AverageReads(_)
            | SettingChange::Led(_)
            | SettingChange::LedPower(_) => self.average.reset(),
            // neither do readings taken under different sensor settings,
            // and their scale changes too
            SettingChange::Gain(_) | SettingChange::IntegrationTime(_) => {
                self.average.reset();
                self.reset_view = true;
            }
            _ => {}
        }
    }

    pub fn displayed(&self) -> Option<&Spectrum> {
        self.current.as_ref()
    }

    /// Readings folded into the displayed mean (0 when not averaging).
    pub fn reads_averaged(&self) -> usize {
        self.average.count()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.average.reset();
    }

    fn caption(&self) -> String {
        match &self.current {
            None => "No reading yet".to_string(),
            Some(s) if self.average.count() > 1 => format!(
                "Mean of {} readings, last at {}",
                self.average.count(),
                s.taken_at.format("%H:%M:%S")
            ),
            Some(s) => format!("Reading at {}", s.taken_at.format("%H:%M:%S")),
        }
    }
}

impl Panel for PlotPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, _device: &mut Spectrometer) {
        ui.horizontal(|ui| {
            ui.label(self.caption());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                if ui.button("Reset View").clicked() {
                    self.reset_view = true;
                }
            });
        });

        let mut plot = Plot::new("spectrum_plot")
            .legend(Legend::default())
            .allow_scroll(false)
            .allow_zoom(true)
            .allow_boxed_zoom(true)
            .x_axis_label(Self::X_AXIS_LABEL)
            .y_axis_label(Self::Y_AXIS_LABEL)
            .include_x(425.0)
            .include_x(675.0)
            .include_y(0.0);
        if self.reset_view {
            plot = plot.reset();
            self.reset_view = false;
        }

        let bars: Vec<Bar> = self
            .current
            .as_ref()
            .map(|s| {
                s.points()
                    .into_iter()
                    .map(|[nm, v]| {
                        Bar::new(nm, v)
                            .width(BAR_WIDTH_NM)
                            .fill(wavelength_color(nm))
                            .name(format!("{:.0} nm", nm))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let _ = plot.show(ui, |plot_ui| {
            if !bars.is_empty() {
                plot_ui.bar_chart(BarChart::new("Spectrum", bars));
            }
        });
    }
}
