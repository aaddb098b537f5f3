//! Main application orchestrator.
//!
//! Coordinates one run of the path counter:
//! 1. Initializes the stdout logger at the requested verbosity.
//! 2. Reads the grid description from a file or standard input.
//! 3. Parses and validates it into a `GridLayout`.
//! 4. Runs the search, printing progress dots in verbose mode.
//! 5. Prints the solution count and, in verbose mode, the search counters.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::{normal_print, verbose_print};
use duct_paths::path::{PathExplorer, Progress, Pruning, SearchStats};
use duct_paths::{parse_layout, GridLayout};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Prints a dot per progress report so long searches show signs of life.
struct DotProgress;

impl Progress for DotProgress {
    fn report(&mut self, _stats: &SearchStats) {
        verbose_print!(".");
        // Progress output is best-effort.
        let _ = logger::flush_global_logger();
    }
}

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the input cannot be read or does not describe a
/// valid grid. No search is attempted in that case.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    logger::init_global_logger(cli.verbosity());

    let text = read_input(cli.input.as_deref())?;
    let layout = parse_layout(&text)?;
    print_layout(&layout);

    let pruning = if cli.no_prune {
        Pruning::Disabled
    } else {
        Pruning::Enabled
    };
    let explorer = PathExplorer::new(&layout).with_pruning(pruning);
    verbose_print!(
        "free cells: {}, flood threshold: {:.2}\n",
        layout.free_cells(),
        explorer.policy().threshold()
    );

    let report = if cli.parallel {
        explorer.run_parallel()
    } else {
        explorer.run_with_progress(&mut DotProgress)
    };

    verbose_print!("\nsolutions: ");
    normal_print!("{}\n", report.solutions);
    print_stats(&report.stats);

    logger::flush_global_logger()?;
    Ok(())
}

/// Reads the whole grid description into memory.
fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_layout(layout: &GridLayout) {
    verbose_print!("len: {}, width: {}\n", layout.length(), layout.width());
    verbose_print!("{}", layout);
}

fn print_stats(stats: &SearchStats) {
    verbose_print!("search calls: {}\n", stats.search_calls);
    verbose_print!("flood fills: {}\n", stats.flood_calls);
    verbose_print!("  stopped early: {}\n", stats.flood_early_stops);
    verbose_print!("  exhausted: {}\n", stats.flood_exhausted);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = read_input(Some(Path::new("does/not/exist.grid"))).unwrap_err();
        assert!(matches!(err, AppError::ReadInput { ref path, .. } if path == "does/not/exist.grid"));
        assert!(err.to_string().starts_with("Failed to read 'does/not/exist.grid'"));
    }

    #[test]
    fn input_errors_are_wrapped() {
        let err: AppError = parse_layout("2 2 2 0 0").unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Invalid grid: Missing value for cell 3 (column 1, row 1)"
        );
    }
}
