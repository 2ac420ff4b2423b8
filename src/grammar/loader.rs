use std::fs;
use std::path::Path;

use super::error::{GrammarError, LoadError};
use super::token::{tokenize, TokenStream};
use crate::tree::{build_tree, PathTree};

//─────────────────────────────────────────────────────────────────────────────

/// Loads an expression from a file and parses it into a `PathTree`.
pub fn load_expression_from_file(file_path: &Path) -> Result<PathTree, LoadError> {
    let display = file_path.display().to_string();
    let file_content =
        fs::read_to_string(file_path).map_err(|e| LoadError::ReadFile(display.clone(), e))?;

    parse_expression(&file_content).map_err(|e| LoadError::Grammar(display, e))
}

/// Parses an anchored expression such as `^EN(W|S)$`.
///
/// Surrounding whitespace is ignored. `^$` parses to a tree with a single
/// empty root.
pub fn parse_expression(text: &str) -> Result<PathTree, GrammarError> {
    let (body, offset) = strip_anchors(text)?;
    let mut stream = TokenStream::new(tokenize(body, offset)?);
    build_tree(&mut stream)
}

/// Returns the text between `^` and `$` and its byte offset in `text`.
fn strip_anchors(text: &str) -> Result<(&str, usize), GrammarError> {
    let leading = text.len() - text.trim_start().len();
    let trimmed = text.trim();

    if !trimmed.starts_with('^') {
        return Err(GrammarError::MissingAnchor {
            position: leading,
            expected: '^',
        });
    }
    // The '^' alone does not also count as the closing anchor.
    if trimmed.len() < 2 || !trimmed.ends_with('$') {
        return Err(GrammarError::MissingAnchor {
            position: leading + trimmed.len(),
            expected: '$',
        });
    }

    Ok((&trimmed[1..trimmed.len() - 1], leading + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn anchors_are_stripped_and_offsets_kept() {
        assert_eq!(strip_anchors("^NE$").unwrap(), ("NE", 1));
        assert_eq!(strip_anchors("  ^NE$\n").unwrap(), ("NE", 3));
        assert_eq!(strip_anchors("^$").unwrap(), ("", 1));
    }

    #[test]
    fn missing_anchors_are_reported() {
        assert_eq!(
            strip_anchors("NE$").unwrap_err(),
            GrammarError::MissingAnchor {
                position: 0,
                expected: '^'
            }
        );
        assert_eq!(
            strip_anchors("^NE").unwrap_err(),
            GrammarError::MissingAnchor {
                position: 3,
                expected: '$'
            }
        );
        assert_eq!(
            strip_anchors("^").unwrap_err(),
            GrammarError::MissingAnchor {
                position: 1,
                expected: '$'
            }
        );
        assert!(strip_anchors("").is_err());
    }

    #[test]
    fn positions_refer_to_the_full_text() {
        let err = parse_expression("^NE(S|X)$").unwrap_err();
        assert_eq!(
            err,
            GrammarError::UnexpectedCharacter {
                position: 6,
                found: 'X'
            }
        );
        assert_eq!(err.position(), 6);

        let err = parse_expression("^N(E$").unwrap_err();
        assert_eq!(err, GrammarError::UnclosedGroup { position: 2 });
    }

    #[test]
    fn inner_anchor_is_an_unexpected_character() {
        assert_eq!(
            parse_expression("^N^E$").unwrap_err(),
            GrammarError::UnexpectedCharacter {
                position: 2,
                found: '^'
            }
        );
    }

    #[test]
    fn empty_expression_is_not_an_error() {
        let tree = parse_expression("^$").unwrap();
        assert_eq!(tree.roots().len(), 1);
        assert!(tree.roots()[0].is_empty_branch());
    }

    #[test]
    fn loads_from_file_with_trailing_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "^ENWWW(NEEE|SSE(EE|N))$").unwrap();
        let tree = load_expression_from_file(file.path()).unwrap();
        assert_eq!(tree.step_count(), 15);
    }

    #[test]
    fn load_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "^N)$").unwrap();
        let err = load_expression_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Grammar(_, GrammarError::UnmatchedClose { position: 2 })
        ));
        assert!(err.to_string().contains(&file.path().display().to_string()));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            load_expression_from_file(&missing),
            Err(LoadError::ReadFile(_, _))
        ));
    }
}
