//! Proptest strategies producing well-formed anchored expressions.

use proptest::prelude::*;

/// One alternative: steps, optionally followed by a group and more of the same.
pub fn alternative_body() -> impl Strategy<Value = String> {
    "[NESW]{0,5}".prop_recursive(4, 48, 4, |inner| {
        (
            "[NESW]{0,4}",
            prop::collection::vec(inner.clone(), 1..4),
            prop::option::of(inner),
        )
            .prop_map(|(head, alternatives, tail)| {
                format!(
                    "{}({}){}",
                    head,
                    alternatives.join("|"),
                    tail.unwrap_or_default()
                )
            })
    })
}

/// A full expression, possibly with top-level alternation.
pub fn expression() -> impl Strategy<Value = String> {
    prop::collection::vec(alternative_body(), 1..3)
        .prop_map(|alternatives| format!("^{}$", alternatives.join("|")))
}

/// Number of direction characters in `text`.
pub fn direction_count(text: &str) -> usize {
    text.chars().filter(|c| "NESW".contains(*c)).count()
}
