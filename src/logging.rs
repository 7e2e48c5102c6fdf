//! Console Logging
//!
//! `log` backend that writes to the browser console, one console method
//! per level so the devtools level filter works.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    // messages carry their own [TAG]; fall back to the module path
    if message.starts_with('[') {
        format!("{level:<5} {message}")
    } else {
        format!("{level:<5} [{target}] {message}")
    }
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_messages_keep_their_tag() {
        assert_eq!(format_record(Level::Info, "portfolio_ui::app", "[APP] mounted"), "INFO  [APP] mounted");
        assert_eq!(
            format_record(Level::Warn, "portfolio_ui::content", "fallback"),
            "WARN  [portfolio_ui::content] fallback"
        );
    }
}
