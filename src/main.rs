mod config;
mod docker;
mod installer;
mod probe;
mod ui;
mod utils;

use ui::app::InstallerApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting VX0 installer v0.1.0");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 640.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("VX0 Network - Easy Setup")
            .with_app_id("net.vx0.installer"),
        persistence_path: None,
        ..Default::default()
    };

    eframe::run_native(
        "VX0 Installer",
        options,
        Box::new(|cc| Ok(Box::new(InstallerApp::new(cc)))),
    )
}
