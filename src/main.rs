use eframe::egui;
use prism3d::{
    core::{
        PrismError,
        Settings,
    },
    gui::PrismApp,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), PrismError> {
    let settings = Settings::from_env();

    let subscriber = FmtSubscriber::builder().with_max_level(settings.log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PrismError::Custom(format!("Failed to install logger: {e}")))?;

    info!(model = %settings.model, api_base = %settings.api_base, "Starting Prism 3D");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prism 3D")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prism 3D",
        options,
        Box::new(move |cc| Ok(Box::new(PrismApp::new(cc, &settings)?))),
    )?;

    Ok(())
}
