use clap::Parser;
use std::path::PathBuf;

use crate::path::DEFAULT_THRESHOLD;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Measures the branching paths described by a ^...$ direction expression.", long_about = None)]
pub struct Cli {
    /// File containing the expression
    #[clap(required_unless_present = "expression")]
    pub input_file: Option<PathBuf>,

    /// Expression given inline instead of a file, e.g. '^EN(W|S)$'
    #[clap(short, long, conflicts_with = "input_file")]
    pub expression: Option<String>,

    /// Distance from the start at which positions and rooms are counted.
    #[clap(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: usize,

    /// Suppress verbose output, only printing the four numbers on success or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
