use std::io::{self, Write};
use std::iter;

use crate::grammar::Direction;

// ──────────────────────────────────────────────────────────────────────────────
// PathTree – the parsed form of a path expression.
// Each node is a straight run of steps followed by zero or more alternative
// continuations. Children are owned by their parent, so the structure is a
// strict tree; it is only ever built by `tree::builder` and never changed
// afterwards.
//
// Steps written after a group's `)` form a continuation node. It is kept as
// the last child of the node that opened the group, next to the group's
// alternatives, so explicit empty alternatives stay empty leaves.
// ──────────────────────────────────────────────────────────────────────────────

/// A straight run of steps and the alternatives that may follow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathNode {
    steps: Vec<Direction>,
    children: Vec<PathNode>, // Empty for a leaf.
    follows_group: bool,
}

impl PathNode {
    pub(super) fn new(steps: Vec<Direction>, children: Vec<PathNode>) -> Self {
        Self {
            steps,
            children,
            follows_group: false,
        }
    }

    /// Marks this node as the steps that follow its siblings' group.
    pub(super) fn into_continuation(mut self) -> Self {
        self.follows_group = true;
        self
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn children(&self) -> &[PathNode] {
        &self.children
    }

    /// Children that are alternatives of the group this node opened.
    pub fn alternatives(&self) -> impl Iterator<Item = &PathNode> + '_ {
        self.children.iter().filter(|child| !child.follows_group)
    }

    /// The child holding whatever was written after this node's group.
    pub fn continuation(&self) -> Option<&PathNode> {
        self.children.last().filter(|child| child.follows_group)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for an explicit empty alternative such as the second branch of `(N|)`.
    pub fn is_empty_branch(&self) -> bool {
        self.steps.is_empty() && self.children.is_empty()
    }

    /// Number of steps owned by this node and all of its descendants.
    pub fn step_count(&self) -> usize {
        self.subtree().map(|node| node.steps.len()).sum()
    }

    pub fn node_count(&self) -> usize {
        self.subtree().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.subtree().filter(|node| node.is_leaf()).count()
    }

    /// Pre-order walk over this node and its descendants.
    fn subtree(&self) -> impl Iterator<Item = &PathNode> + '_ {
        let mut pending = vec![self];
        iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Continuations are written at the depth of the node they follow, marked `+`.
    fn write_outline(&self, writer: &mut dyn Write) -> io::Result<()> {
        let mut pending = vec![(self, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            let steps: String = node.steps.iter().map(|d| d.as_char()).collect();
            let label = if steps.is_empty() { "<empty>" } else { steps.as_str() };
            let marker = if node.follows_group { '+' } else { '-' };
            writeln!(writer, "{:indent$}{} {}", "", marker, label, indent = depth * 2)?;
            for child in node.children.iter().rev() {
                let child_depth = if child.follows_group { depth } else { depth + 1 };
                pending.push((child, child_depth));
            }
        }
        Ok(())
    }
}

// Chains of continuations can be thousands of nodes deep.
impl Drop for PathNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// The sibling alternatives of the outermost scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTree {
    roots: Vec<PathNode>,
}

impl PathTree {
    pub(super) fn new(roots: Vec<PathNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathNode] {
        &self.roots
    }

    /// Total number of steps in the tree; equals the number of direction
    /// characters in the parsed expression.
    pub fn step_count(&self) -> usize {
        self.roots.iter().map(PathNode::step_count).sum()
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(PathNode::node_count).sum()
    }

    pub fn leaf_count(&self) -> usize {
        self.roots.iter().map(PathNode::leaf_count).sum()
    }

    /// Writes an indented outline of the tree, one node per line.
    pub fn write_outline(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "=== PATH TREE ===")?;
        writeln!(
            writer,
            "Roots: {}, nodes: {}, leaves: {}, steps: {}",
            self.roots.len(),
            self.node_count(),
            self.leaf_count(),
            self.step_count()
        )?;
        for root in &self.roots {
            root.write_outline(writer)?;
        }
        writeln!(writer)
    }
}
