//! Greeter GUI - Main Entry Point
//!
//! A single-window greeting card demo built on GPUI.

use greeter_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Greeter GUI...");

    // Run the GPUI application
    run_app();
}
