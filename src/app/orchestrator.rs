//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging (`branchwalk.log`) unless quiet.
//! 2. Loads the expression from a file or from `--expression` and builds the tree.
//! 3. Opens the tree-details log (`tree_details.log`) unless quiet.
//! 4. Delegates measuring to `processing::analyze_tree`.
//! 5. Prints the report to stdout.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use std::io::Write; // For BufWriter::flush
use std::path::Path;

const LOG_FILE: &str = "branchwalk.log";
const DETAILS_LOG_FILE: &str = "tree_details.log";

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the input cannot be read or parsed. Failures of the
/// log files are reported and otherwise ignored.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(LOG_FILE) {
            // The run continues without the verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                LOG_FILE, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", LOG_FILE);
        }
    }

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    match &cli.input_file {
        Some(path) => verbose_println!(quiet_mode, "Processing File: {}", path.display()),
        None => verbose_println!(quiet_mode, "Processing inline expression"),
    }
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let tree = match processing::load_tree(
        cli.input_file.as_deref(),
        cli.expression.as_deref(),
        quiet_mode,
    ) {
        Ok(tree) => tree,
        Err(e) => {
            verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
            flush_log(quiet_mode);
            return Err(e);
        }
    };

    let mut details_writer = if quiet_mode {
        None
    } else {
        match file_handler::init_details_log_writer(Path::new(DETAILS_LOG_FILE)) {
            Ok(writer) => Some(writer),
            Err(e) => {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to open tree details log ({}): {}. The outline will not be written.",
                    DETAILS_LOG_FILE,
                    e
                );
                None
            }
        }
    };

    let report = processing::analyze_tree(
        &tree,
        cli.threshold,
        quiet_mode,
        details_writer.as_mut().map(|w| w as &mut dyn Write),
    );

    if let Some(writer) = details_writer.as_mut() {
        if let Err(e) = writer.flush() {
            verbose_eprintln!(
                quiet_mode,
                "[WARNING] Failed to flush tree details log ({}): {}",
                DETAILS_LOG_FILE,
                e
            );
        }
    }
    flush_log(quiet_mode);

    print!("{}", report.render(quiet_mode));
    if !quiet_mode {
        println!(
            "\nSee '{}' for verbose output and '{}' for the tree outline.",
            LOG_FILE, DETAILS_LOG_FILE
        );
    }

    Ok(())
}

/// Flushes the verbose log, reporting failures on stderr since the log itself may be failing.
fn flush_log(quiet_mode: bool) {
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to flush {}: {}", LOG_FILE, e);
        }
    }
}
