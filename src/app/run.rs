//! Top-level entry points for running the controller as a native window.

use eframe::egui;

use crate::config::SpectrometerConfig;
use crate::device::{NoDevice, SimulatedAs7262, Spectrometer, SpectrometerLink};

use super::SpectrometerApp;

/// Launch the controller with the link selected by `cfg.simulate`.
///
/// Without a simulated sensor the window opens on [`NoDevice`]; hardware
/// drivers plug in through [`run_spectrometer_gui_with_link`].
pub fn run_spectrometer_gui(cfg: SpectrometerConfig) -> eframe::Result<()> {
    let link: Box<dyn SpectrometerLink> = if cfg.simulate {
        Box::new(SimulatedAs7262::new())
    } else {
        Box::new(NoDevice)
    };
    run_spectrometer_gui_with_link(link, cfg)
}

/// Launch the controller on the given link. Blocks until the window is closed.
pub fn run_spectrometer_gui_with_link(
    link: Box<dyn SpectrometerLink>,
    mut cfg: SpectrometerConfig,
) -> eframe::Result<()> {
    let device = Spectrometer::new(link, cfg.settings.clone());
    let mut app = SpectrometerApp::new(device);
    app.apply_config(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = window_icon() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the `icon.svg` compiled into the binary into an [`egui::IconData`],
/// so the installed binary needs no asset files next to it.
fn window_icon() -> Option<egui::IconData> {
    let data = include_bytes!("../../icon.svg");

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
