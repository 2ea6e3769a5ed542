use eframe::egui;
use log::info;

mod ui;

use ui::app_state::CircleGraphApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting circle graph demo application");

    // A compact portrait window suits the single ring plus button
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([300.0, 380.0])
            .with_title("Circle Graph")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Circle Graph",
        options,
        Box::new(|_cc| Ok(Box::new(CircleGraphApp::new()))),
    )
}
