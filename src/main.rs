use eframe::egui;

mod app;

use app::LandingApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QP — Quest your way out of doom-scrolling",
        options,
        Box::new(|cc| Ok(Box::new(LandingApp::new(cc)))),
    )
}
