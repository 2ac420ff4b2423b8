//! Handles the core work of a run: loading an expression into a `PathTree`
//! and measuring it with the tree analyzer and the room map.

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grammar::{self, LoadError};
use crate::path::{PathMetrics, RoomMap, TreeAnalyzer};
use crate::tree::PathTree;
use std::io::Write;
use std::path::Path;

/// Everything a run reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub threshold: usize,
    pub metrics: PathMetrics,
    pub furthest_room: usize,
    pub distant_rooms: usize,
}

impl Report {
    /// Formats the report for stdout. Quiet output is just the numbers.
    pub fn render(&self, quiet_mode: bool) -> String {
        if quiet_mode {
            format!(
                "{} {}\n{} {}\n",
                self.metrics.longest_path,
                self.metrics.threshold_count,
                self.furthest_room,
                self.distant_rooms
            )
        } else {
            format!(
                "Longest path: {}\nPositions past {}: {}\nFurthest room: {}\nRooms at or beyond {}: {}\n",
                self.metrics.longest_path,
                self.threshold,
                self.metrics.threshold_count,
                self.furthest_room,
                self.threshold,
                self.distant_rooms
            )
        }
    }
}

/// Loads the expression from `input_file`, or from `expression` when no file is given.
///
/// # Errors
/// Returns `AppError` when the file is invalid or unreadable, or when the
/// expression is malformed.
pub fn load_tree(
    input_file: Option<&Path>,
    expression: Option<&str>,
    quiet_mode: bool,
) -> Result<PathTree, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Parsing expression...");
    let tree = match (input_file, expression) {
        (Some(path), _) => {
            file_handler::validate_input_file(path, quiet_mode)?;
            grammar::load_expression_from_file(path).map_err(|e| {
                if let LoadError::Grammar(_, grammar_error) = &e {
                    verbose_eprintln!(
                        quiet_mode,
                        "   Malformed expression near byte {}",
                        grammar_error.position()
                    );
                }
                AppError::Load(e)
            })?
        }
        (None, Some(text)) => grammar::parse_expression(text).map_err(|e| {
            verbose_eprintln!(
                quiet_mode,
                "   Malformed expression near byte {}",
                e.position()
            );
            AppError::Grammar(e)
        })?,
        (None, None) => return Err(AppError::MissingInput),
    };

    verbose_println!(
        quiet_mode,
        "   => {} root(s), {} node(s), {} leaf path(s), {} step(s).",
        tree.roots().len(),
        tree.node_count(),
        tree.leaf_count(),
        tree.step_count()
    );
    Ok(tree)
}

/// Measures `tree` against `threshold`.
///
/// When `details_log` is given, an outline of the tree is written to it first.
/// A failure to write the outline is logged and otherwise ignored.
pub fn analyze_tree(
    tree: &PathTree,
    threshold: usize,
    quiet_mode: bool,
    details_log: Option<&mut dyn Write>,
) -> Report {
    if let Some(writer) = details_log {
        verbose_println!(quiet_mode, "[STEP 2] Writing tree outline...");
        if let Err(e) = tree.write_outline(writer) {
            verbose_eprintln!(quiet_mode, "   [ERROR] Failed to write tree outline: {}", e);
        }
    }

    verbose_println!(quiet_mode, "[STEP 3] Measuring branch paths...");
    let metrics = TreeAnalyzer::new(threshold).analyze(tree);
    verbose_println!(
        quiet_mode,
        "   => Longest path {}, {} position(s) past {}.",
        metrics.longest_path,
        metrics.threshold_count,
        threshold
    );

    verbose_println!(quiet_mode, "[STEP 4] Tracing rooms...");
    let rooms = RoomMap::trace(tree);
    verbose_println!(
        quiet_mode,
        "   => {} room(s) joined by {} door(s).",
        rooms.room_count(),
        rooms.door_count()
    );

    Report {
        threshold,
        metrics,
        furthest_room: rooms.furthest_room(),
        distant_rooms: rooms.rooms_at_least(threshold),
    }
}
