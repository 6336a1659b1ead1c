//! Console Logger
//!
//! Routes `log` records to the browser console.

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
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let msg = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug => web_sys::console::log_1(&msg),
            Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, target, message)
}

/// Debug builds log state transitions, release builds only info and up
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the console logger. A second call is ignored.
pub fn init() {
    init_with_level(default_level());
}

pub fn init_with_level(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(Level::Info, "todo_board::board", "[BOARD] add #1"),
            "INFO  todo_board::board: [BOARD] add #1"
        );
    }

    #[test]
    fn test_default_level() {
        let level = default_level();
        assert!(level == LevelFilter::Debug || level == LevelFilter::Info);
    }
}
