//! Console Logger
//!
//! `log::Log` backend that forwards records to the browser console,
//! picking `console.error` / `console.warn` / `console.info` / `console.debug`
//! by level so the devtools filter buttons keep working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Console-backed logger
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Format one console line: `[LEVEL target] message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    // Crate-local targets are long module paths; keep only the last segment
    let short_target = target.rsplit("::").next().unwrap_or(target);
    format!("[{} {}] {}", level, short_target, message)
}

/// Parse a level name, falling back to `Info` for anything unrecognised
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger as the global `log` backend.
///
/// Can only succeed once per page load.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = Box::new(ConsoleLogger::new(max_level));
    log::set_boxed_logger(logger)?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_module_path() {
        let line = format_line(Level::Warn, "harvest_market_ui::api::client", "slow response");
        assert_eq!(line, "[WARN client] slow response");
    }

    #[test]
    fn test_format_line_plain_target() {
        let line = format_line(Level::Info, "app", "mounted");
        assert_eq!(line, "[INFO app] mounted");
    }

    #[test]
    fn test_enabled_respects_max_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).target("t").build();
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_init_installs_once() {
        assert!(init(LevelFilter::Debug).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(init(LevelFilter::Warn).is_err());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
