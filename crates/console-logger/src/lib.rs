//! Console Logger
//!
//! `log` backend for wasm frontends. Records go to the browser console,
//! or to stderr when not running on wasm32.
//!
//! The level can be changed after installation, so a page can start
//! logging before its own settings have been read.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: AtomicUsize,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level: AtomicUsize::new(level as usize),
        }
    }

    pub fn level(&self) -> LevelFilter {
        match self.level.load(Ordering::Relaxed) {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Change the level of this logger and of the `log` facade
    pub fn set_level(&self, level: LevelFilter) {
        self.level.store(level as usize, Ordering::Relaxed);
        log::set_max_level(level);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_line(record));
    }

    fn flush(&self) {}
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a logger as the global `log` backend.
///
/// Returns the installed instance so its level can be changed later.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
