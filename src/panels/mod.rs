pub mod button_ui;
pub mod panel_trait;
pub mod plot_ui;
pub mod status_ui;

pub use button_ui::{ButtonPanel, LedLook};
pub use panel_trait::{Panel, PanelState};
pub use plot_ui::PlotPanel;
pub use status_ui::StatusPanel;
