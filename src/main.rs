#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use week_lanes::logging;
use week_lanes::Settings;

fn main() -> eframe::Result<()> {
    let settings_path = Settings::default_path();
    let (settings, problem) = Settings::load_or_init(&settings_path);

    if let Err(e) = logging::init_logging(&logging::effective_level(&settings.log_level)) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    if let Some(problem) = problem {
        Settings::report_problem(&settings_path, &problem);
    }
    log::info!("settings loaded from {}", settings_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 560.0])
            .with_min_inner_size([720.0, 360.0])
            .with_title("Week Lanes"),
        ..Default::default()
    };

    eframe::run_native(
        "Week Lanes",
        options,
        Box::new(move |cc| Ok(Box::new(app::PlannerApp::new(cc, &settings)))),
    )
}
