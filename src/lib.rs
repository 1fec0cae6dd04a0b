use wasm_bindgen::prelude::*;

use crate::domain::logging::{get_logger, LogComponent};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

/// Wire up logging and mount the chart screen.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "Mounting chart screen");

    leptos::mount_to_body(app::App);
}
