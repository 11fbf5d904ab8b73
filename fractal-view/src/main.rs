//! Application entry point for the fractal tree viewer.
//!
//! This binary installs the tracing subscriber, sets up eframe/egui and
//! delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod viewer;

use fractal_core::config::Config;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Log output is controlled by `RUST_LOG` and defaults to `info`.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the default configuration is rejected, or if eframe fails to
///   create the native window or event loop.
fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let viewer =
        Viewer::new(Config::default()).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    tracing::info!("starting fractal tree viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Fractal Tree",
        options,
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
}
