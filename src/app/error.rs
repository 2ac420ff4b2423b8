use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Expression loading error: {0}")]
    Load(#[from] crate::grammar::LoadError),
    #[error("Expression parsing error: {0}")]
    Grammar(#[from] crate::grammar::GrammarError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("No expression given: pass an input file or --expression")]
    MissingInput,
}
