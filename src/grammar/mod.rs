// error module
pub mod error;
// loader module
pub mod loader;
// token module
mod token;

#[cfg(test)]
pub(crate) mod strategies;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the grammar module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::{GrammarError, LoadError};
pub use loader::{load_expression_from_file, parse_expression};
pub use token::{Direction, Position, Spanned, Token, TokenStream};
