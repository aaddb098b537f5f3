mod cli;
mod error;
mod logger;
mod orchestrator;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::run_app;

// Macros for use by child modules of app (orchestrator)
// These macros call functions from the app::logger module.
macro_rules! normal_print {
    ($($arg:tt)*) => {
        super::logger::log_args(super::logger::Verbosity::Normal, format_args!($($arg)*))
    };
}

macro_rules! verbose_print {
    ($($arg:tt)*) => {
        super::logger::log_args(super::logger::Verbosity::Verbose, format_args!($($arg)*))
    };
}

use normal_print;
use verbose_print;
