pub mod activity;
#[cfg(feature = "csr")]
pub mod app;
pub mod data;
pub mod radar;
pub mod ui;

#[cfg(feature = "csr")]
pub fn mount() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("logger was already initialized");
    }
    log::info!("portfolio-dash {} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(App);
}
