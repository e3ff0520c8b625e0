use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Prints `log` records as bracket-tagged console lines, e.g. `[builder] ...`.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    Ok(())
}

/// Last path segment of a module target: `psychro_core::chart::builder` -> `builder`.
pub fn tag(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => {
                eprintln!("[{}] {}: {}", tag(record.target()), record.level(), record.args())
            }
            _ => println!("[{}] {}", tag(record.target()), record.args()),
        }
    }

    fn flush(&self) {}
}
