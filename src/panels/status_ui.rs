use std::sync::mpsc::Receiver;

use egui::Ui;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PLUGS, PLUGS_CONNECTED};

use super::panel_trait::{Panel, PanelState};
use crate::controllers::ConnectionController;
use crate::device::{ConnectionStatus, Spectrometer};

/// Status bar showing the connectivity message.
///
/// Subscribes to the [`ConnectionController`] and re-renders whenever the
/// device handle publishes a new status.
pub struct StatusPanel {
    pub state: PanelState,
    status: ConnectionStatus,
    updates: Receiver<ConnectionStatus>,
}

impl StatusPanel {
    pub const RECONNECT_LABEL: &'static str = "Reconnect";

    pub fn new(connection: &ConnectionController) -> Self {
        let updates = connection.subscribe();
        Self {
            state: PanelState::new("Status", PLUGS),
            status: connection.status(),
            updates,
        }
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    pub fn message(&self) -> String {
        self.status.message()
    }
}

impl Panel for StatusPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn update(&mut self, _device: &mut Spectrometer) {
        while let Ok(status) = self.updates.try_recv() {
            self.status = status;
        }
    }

    fn render_panel(&mut self, ui: &mut Ui, device: &mut Spectrometer) {
        ui.horizontal(|ui| {
            let icon = if self.status.is_connected() {
                PLUGS_CONNECTED
            } else {
                PLUGS
            };
            ui.label(icon);
            ui.label(self.message());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} {}", ARROWS_CLOCKWISE, Self::RECONNECT_LABEL))
                    .on_hover_text("Probe the USB bus for the PSoC again")
                    .clicked()
                {
                    device.reconnect();
                }
            });
        });
    }
}
