use crate::tree::{PathNode, PathTree};

/// Threshold used when none is given on the command line.
pub const DEFAULT_THRESHOLD: usize = 1000;

/// Aggregate lengths of a `PathTree`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathMetrics {
    /// Length of the longest root-to-leaf path.
    pub longest_path: usize,
    /// Number of step positions that run past the threshold.
    pub threshold_count: usize,
}

/// `TreeAnalyzer` walks a `PathTree` depth-first, measuring path lengths.
pub struct TreeAnalyzer {
    threshold: usize,
}

impl TreeAnalyzer {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Returns the longest path and the threshold count of `tree`.
    ///
    /// Each node is visited once with the length of the path leading to it.
    /// Its steps are attributed to the threshold count there, so positions
    /// shared by several downstream branches count once.
    pub fn analyze(&self, tree: &PathTree) -> PathMetrics {
        let mut metrics = PathMetrics::default();
        let mut pending: Vec<(&PathNode, usize)> =
            tree.roots().iter().rev().map(|root| (root, 0)).collect();

        while let Some((node, base)) = pending.pop() {
            let end = base + node.steps().len();
            metrics.threshold_count += self.steps_past_threshold(base, end);
            if node.is_leaf() {
                metrics.longest_path = metrics.longest_path.max(end);
            }
            pending.extend(node.children().iter().rev().map(|child| (child, end)));
        }
        metrics
    }

    /// Steps of a run from `base` to `end` that count towards the threshold:
    /// all of them once `base` has reached it, otherwise `end - threshold`.
    fn steps_past_threshold(&self, base: usize, end: usize) -> usize {
        end.saturating_sub(base.max(self.threshold))
    }
}

impl Default for TreeAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
