//! Recursive descent over a `TokenStream`.
//!
//! Grammar (the body of an expression, anchors already removed):
//!
//! ```text
//! alternatives := sequence ('|' sequence)*
//! sequence     := step* ( '(' alternatives ')' sequence )?
//! ```
//!
//! A sequence becomes one `PathNode`: its leading steps, and the alternatives
//! of the first group as children. Whatever follows that group's `)` is parsed
//! into a continuation node and pushed after those alternatives, so every step
//! of the input lands in exactly one node. Groups that follow one another are
//! read in a loop; only nested groups recurse.

use super::node::{PathNode, PathTree};
use crate::grammar::{Direction, GrammarError, Spanned, Token, TokenStream};

/// How a sequence ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Boundary {
    Alternative,
    Close(usize),
    End,
}

/// Builds the whole tree, consuming `stream` to its end.
///
/// # Errors
/// Returns a `GrammarError` on a stray `)` or a group that is never closed.
pub fn build_tree(stream: &mut TokenStream) -> Result<PathTree, GrammarError> {
    let roots = parse_alternatives(stream, None)?;
    Ok(PathTree::new(roots))
}

/// Parses sibling alternatives until the `)` closing the group opened at
/// `opened_at`, or until the end of input when `opened_at` is `None`.
fn parse_alternatives(
    stream: &mut TokenStream,
    opened_at: Option<usize>,
) -> Result<Vec<PathNode>, GrammarError> {
    let mut alternatives = Vec::new();
    loop {
        let (node, boundary) = parse_sequence(stream)?;
        alternatives.push(node);
        match (boundary, opened_at) {
            (Boundary::Alternative, _) => continue,
            (Boundary::Close(_), Some(_)) | (Boundary::End, None) => return Ok(alternatives),
            (Boundary::Close(position), None) => {
                return Err(GrammarError::UnmatchedClose { position })
            }
            (Boundary::End, Some(position)) => {
                return Err(GrammarError::UnclosedGroup { position })
            }
        }
    }
}

/// Parses one alternative and consumes the token that ended it.
fn parse_sequence(stream: &mut TokenStream) -> Result<(PathNode, Boundary), GrammarError> {
    // A run of steps and the alternatives of the group that closed after it.
    let mut segments: Vec<(Vec<Direction>, Vec<PathNode>)> = Vec::new();
    let mut steps = Vec::new();
    let boundary = loop {
        match stream.next_token() {
            Some(Spanned {
                token: Token::Step(direction),
                ..
            }) => steps.push(direction),
            Some(Spanned {
                token: Token::GroupOpen,
                position,
            }) => {
                let alternatives = parse_alternatives(stream, Some(position))?;
                segments.push((std::mem::take(&mut steps), alternatives));
            }
            Some(Spanned {
                token: Token::Alternative,
                ..
            }) => break Boundary::Alternative,
            Some(Spanned {
                token: Token::GroupClose,
                position,
            }) => break Boundary::Close(position),
            None => break Boundary::End,
        }
    };

    // Fold from the last segment back, each one continuing the one before it.
    let mut node = PathNode::new(steps, Vec::new());
    for (steps, mut children) in segments.into_iter().rev() {
        if !node.is_empty_branch() {
            children.push(node.into_continuation());
        }
        node = PathNode::new(steps, children);
    }
    Ok((node, boundary))
}


#[cfg(test)]
mod proptest_tests {
    use crate::grammar::parse_expression;
    use crate::grammar::strategies::{direction_count, expression};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_step_lands_in_exactly_one_node(text in expression()) {
            let tree = parse_expression(&text);
            prop_assert!(tree.is_ok(), "Failed to parse: {}", text);
            let tree = tree.unwrap();
            prop_assert_eq!(tree.step_count(), direction_count(&text));
        }

        #[test]
        fn one_root_per_top_level_alternative(text in expression()) {
            let tree = parse_expression(&text).unwrap();
            let mut depth = 0usize;
            let mut top_level_bars = 0;
            for c in text.chars() {
                match c {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    '|' if depth == 0 => top_level_bars += 1,
                    _ => {}
                }
            }
            prop_assert_eq!(tree.roots().len(), top_level_bars + 1);
        }
    }
}
