use egui::Ui;

use crate::device::Spectrometer;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: Option<&'static str>,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon: Some(icon),
        }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn icon_only(&self) -> Option<&'static str> {
        self.state().icon
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{} {}", icon, self.title()),
            None => self.title().to_string(),
        }
    }

    // Optional hooks with default empty impls
    fn update(&mut self, _device: &mut Spectrometer) {}
    fn render_panel(&mut self, _ui: &mut Ui, _device: &mut Spectrometer) {}
}
