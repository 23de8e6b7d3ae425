//! `log` backend that writes to the browser console
//!
//! The console only exists on wasm32. Native builds leave the choice of
//! backend to the embedding program and only adjust the level.

use log::{LevelFilter, Record};
#[cfg(target_arch = "wasm32")]
use log::{debug, Level, Log, Metadata};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Forwards log records to `console.debug` / `console.info` / ...
#[cfg(target_arch = "wasm32")]
pub struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static INSTALL: std::sync::Once = std::sync::Once::new();

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

/// Install the console logger and set the maximum level
///
/// Only the first call installs anything; later calls just adjust the
/// level. A logger installed elsewhere beforehand takes precedence.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    log::set_max_level(level);
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_err() {
            debug!("a logger is already installed, console logger not used");
        }
    });
}

/// Set the maximum level; the embedding program installs the backend
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    log::set_max_level(level);
}
