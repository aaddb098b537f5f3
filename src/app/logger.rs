use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::io::{self, BufWriter, Error as IoError, Stdout, Write};
use std::sync::Mutex;

/// How much the program prints to standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Nothing at all.
    Quiet,
    /// Only the solution count.
    Normal,
    /// Grid dump, progress and counters as well.
    Verbose,
}

struct Logger {
    verbosity: Verbosity,
    writer: BufWriter<Stdout>,
}

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<Logger>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger with the given verbosity.
/// Messages logged before initialization are dropped.
pub fn init_global_logger(verbosity: Verbosity) {
    let logger = Logger {
        verbosity,
        writer: BufWriter::new(io::stdout()),
    };
    match LOGGER.lock() {
        Ok(mut guard) => *guard = Some(logger),
        Err(poisoned) => *poisoned.into_inner() = Some(logger),
    }
}

/// Writes `args` if the logger's verbosity is at least `level`.
pub fn log_args(level: Verbosity, args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(logger) = logger_guard.as_mut() {
            if level <= logger.verbosity && logger.writer.write_fmt(args).is_err() {
                // Fallback to stderr if stdout is gone
                eprintln!("Fallback (log write failed): {}", args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error): {}", args);
    }
}

/// Flushes buffered output, e.g. so progress dots show up immediately.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(logger) => logger.writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}
