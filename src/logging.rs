//! Browser Logging
//!
//! Routes `log` records to the developer console.

pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[LOG] Logger already set: {}", e).into());
    }
}
