//! Ripple Player - library search and waveform scrubbing demo shell
//!
//! This is the main entry point for the GUI application. It:
//! 1. Initializes logging and loads the YAML config
//! 2. Launches the iced GUI application
//!
//! There is no audio engine; playback is a simulated clock that exercises
//! the scrubber and search widgets end to end.

mod config;
mod library;
mod ui;

use iced::{Size, Task};

use ui::app::Message;
use ui::RippleApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("ripple-player starting up");

    let config_path = config::default_config_path();
    let first_boot = !config_path.exists();
    let config = config::load_config(&config_path);

    // Write the defaults on first boot so users have a file to edit
    if first_boot {
        if let Err(e) = config::save_config(&config, &config_path) {
            log::warn!("Failed to write default config: {:#}", e);
        }
    }

    // Run the iced application using the functional API
    iced::application(
        move || {
            let app = RippleApp::new(config.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Ripple Player")
    .window_size(Size::new(560.0, 680.0))
    .run()
}

/// Update function for iced
fn update(app: &mut RippleApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &RippleApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &RippleApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &RippleApp) -> iced::Theme {
    app.theme()
}
