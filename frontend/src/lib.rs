pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

mod test_support;

/// Browser entry point: logging, runtime config, then the router.
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    log::info!("Starting WFH Attendance frontend");

    // Endpoints resolve lazily and the display zone is a signal, so mounting
    // does not wait for config.json.
    router::mount_app();
}
