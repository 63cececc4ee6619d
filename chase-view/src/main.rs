//! Application entry point for the mouse-chase game.
//!
//! This binary sets up eframe/egui and delegates all interactive
//! logic and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Logging goes through the `log` facade with `env_logger` as the sink,
/// so `RUST_LOG=info` enables the startup and reset messages. The
/// window is sized to fit the arena plus the side panel; all game state
/// and rendering are handled by [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting mouse-chase");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1080.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mouse Chase - Try to catch K!",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
