// builder module
mod builder;
// node module
mod node;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree module.
//─────────────────────────────────────────────────────────────────────────────
pub use builder::build_tree;
pub use node::{PathNode, PathTree};
