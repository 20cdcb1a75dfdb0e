use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use colored::{ColoredString, Colorize as _};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn, true))
}

/// Installs the logger. `verbosity` counts the `-v` flags.
pub fn init(verbosity: u8, color: bool) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level_for_verbosity(verbosity));
    logger.set_color(color);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Writes records to stderr as `level source -> message`.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
    color: RwLock<bool>,
}

impl AppLogger {
    fn new(min_level: LevelFilter, color: bool) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            color: RwLock::new(color),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    pub fn color(&self) -> bool {
        *self.color.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_color(&self, color: bool) {
        *self.color.write().unwrap_or_else(|e| e.into_inner()) = color;
    }

    pub fn format(&self, record: &Record) -> String {
        let source = record.module_path().unwrap_or("unknown");
        let level = format!("{:<5}", record.level());

        if self.color() {
            format!(
                "{} {} -> {}",
                level_style(record.level(), &level),
                source.dimmed(),
                record.args()
            )
        } else {
            format!("{} {} -> {}", level, source, record.args())
        }
    }
}

fn level_style(level: Level, text: &str) -> ColoredString {
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.white(),
        Level::Debug => text.blue(),
        Level::Trace => text.bright_black(),
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere left to report a failing stderr
            let _ = writeln!(std::io::stderr().lock(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
