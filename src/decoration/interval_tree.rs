use std::ops::Range;

/// Balanced interval tree over ranges that arrive sorted by start.
///
/// Nodes are stored in input order, so iterating `nodes` is ascending and
/// the tree links are laid over them by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    range: Range<usize>,
    val: T,
    max: usize, // Max end point in this subtree
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> IntervalTree<T> {
    /// Build from items already sorted by `range.start`.
    pub fn from_sorted(items: Vec<(Range<usize>, T)>) -> Self {
        let mut nodes: Vec<Node<T>> = items
            .into_iter()
            .map(|(range, val)| Node {
                max: range.end,
                range,
                val,
                left: None,
                right: None,
            })
            .collect();

        let len = nodes.len();
        let root = Self::link(&mut nodes, 0, len);
        Self { nodes, root }
    }

    // Links nodes[lo..hi] into a balanced subtree rooted at the midpoint
    fn link(nodes: &mut [Node<T>], lo: usize, hi: usize) -> Option<usize> {
        if lo >= hi {
            return None;
        }

        let mid = lo + (hi - lo) / 2;
        let left = Self::link(nodes, lo, mid);
        let right = Self::link(nodes, mid + 1, hi);

        let mut max_end = nodes[mid].range.end;
        for child in [left, right].into_iter().flatten() {
            max_end = max_end.max(nodes[child].max);
        }

        let node = &mut nodes[mid];
        node.left = left;
        node.right = right;
        node.max = max_end;

        Some(mid)
    }

    /// All items that OVERLAP the query range, ascending by start
    pub fn query(&self, query_range: Range<usize>) -> Vec<(Range<usize>, &T)> {
        let mut results = Vec::new();
        if let Some(root) = self.root {
            self.query_recursive(root, &query_range, &mut results);
        }
        results
    }

    fn query_recursive<'a>(
        &'a self,
        node_idx: usize,
        query: &Range<usize>,
        results: &mut Vec<(Range<usize>, &'a T)>,
    ) {
        let node = &self.nodes[node_idx];

        // Left child: visit if `max > query.start`
        if let Some(left) = node.left {
            if self.nodes[left].max > query.start {
                self.query_recursive(left, query, results);
            }
        }

        // Check overlap: start < query.end && end > query.start
        if node.range.start < query.end && node.range.end > query.start {
            results.push((node.range.clone(), &node.val));
        }

        if let Some(right) = node.right {
            if self.nodes[right].max > query.start && node.range.start < query.end {
                self.query_recursive(right, query, results);
            }
        }
    }

    /// Items in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&Range<usize>, &T)> {
        self.nodes.iter().map(|n| (&n.range, &n.val))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for IntervalTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}
