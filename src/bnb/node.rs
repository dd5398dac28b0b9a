//! Search nodes.

use std::cmp::Ordering;

use super::config::NodeOrdering;
use crate::distance::CostMatrix;

/// One partial tour in the search tree.
///
/// Each node owns its reduced matrix; children copy it before committing
/// their edge, so expanding one node never affects its siblings.
#[derive(Debug, Clone)]
pub struct SearchNode {
    id: usize,
    bound: f64,
    key: f64,
    path: Vec<usize>,
    matrix: CostMatrix,
}

impl SearchNode {
    /// Builds the root node: `path = [start]`, bound = reduction of the
    /// full matrix with self-loops forbidden.
    pub fn root(mut matrix: CostMatrix, start: usize, ordering: &NodeOrdering) -> Self {
        matrix.forbid_self_loops();
        let bound = matrix.reduce();
        Self {
            id: 0,
            bound,
            key: ordering.key(bound, 1),
            path: vec![start],
            matrix,
        }
    }

    /// Builds the child that extends this path with `to`.
    ///
    /// The child's bound is the parent bound plus the reduced cost of the
    /// committed edge plus the reduction of the child matrix, so it is never
    /// smaller than the parent's.
    ///
    /// Returns `None` if `to` is unreachable from the last city.
    pub fn child(&self, to: usize, id: usize, ordering: &NodeOrdering) -> Option<Self> {
        let from = self.last();
        let edge = self.matrix.get(from, to);
        if !edge.is_finite() {
            return None;
        }

        let mut matrix = self.matrix.clone();
        matrix.close_edge(from, to);
        let bound = self.bound + edge + matrix.reduce();

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(to);

        let depth = path.len();
        Some(Self {
            id,
            bound,
            key: ordering.key(bound, depth),
            path,
            matrix,
        })
    }

    /// Creation sequence number; the root is `0`.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Lower bound on any tour that extends this path.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Number of cities on the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Cities visited so far, starting with the start city.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The reduced matrix owned by this node.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// The city the path currently ends at.
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Returns `true` if the path covers all cities.
    pub fn is_leaf(&self) -> bool {
        self.path.len() == self.matrix.size()
    }

    /// Cities not yet on the path.
    pub fn unvisited(&self) -> Vec<usize> {
        let mut visited = vec![false; self.matrix.size()];
        for &c in &self.path {
            visited[c] = true;
        }
        (0..visited.len()).filter(|&c| !visited[c]).collect()
    }

    /// Unvisited cities reachable from the last city in the reduced matrix.
    pub fn successors(&self) -> Vec<usize> {
        let from = self.last();
        self.unvisited()
            .into_iter()
            .filter(|&to| self.matrix.get(from, to).is_finite())
            .collect()
    }

    /// Consumes the node and returns its path.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}

/// Queue order: ascending key, then descending depth, then ascending id.
///
/// `BinaryHeap` is a max-heap, so the comparison is inverted: the node that
/// should be expanded first compares greatest.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| self.depth().cmp(&other.depth()))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn classic() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_root() {
        let root = SearchNode::root(classic(), 0, &NodeOrdering::BoundThenDepth);
        assert_eq!(root.bound(), 70.0);
        assert_eq!(root.depth(), 1);
        assert_eq!(root.path(), &[0]);
        assert!(root.matrix().is_reduced());
        assert!(!root.is_leaf());
        assert_eq!(root.unvisited(), vec![1, 2, 3]);
    }

    #[test]
    fn test_child_bound_monotone() {
        let ordering = NodeOrdering::BoundThenDepth;
        let root = SearchNode::root(classic(), 0, &ordering);
        for (id, to) in root.unvisited().into_iter().enumerate() {
            let child = root.child(to, id + 1, &ordering).expect("reachable");
            assert!(child.bound() >= root.bound());
            assert_eq!(child.depth(), 2);
            assert_eq!(child.last(), to);
            assert!(child.matrix().is_reduced());
        }
    }

    #[test]
    fn test_child_does_not_touch_parent() {
        let ordering = NodeOrdering::BoundThenDepth;
        let root = SearchNode::root(classic(), 0, &ordering);
        let before = root.matrix().clone();
        let _ = root.child(1, 1, &ordering);
        assert_eq!(root.matrix(), &before);
    }

    #[test]
    fn test_child_unreachable() {
        let ordering = NodeOrdering::BoundThenDepth;
        let root = SearchNode::root(classic(), 0, &ordering);
        let child = root.child(1, 1, &ordering).expect("reachable");
        // Row 0 was closed when committing 0 -> 1; 1 -> 0 is closed as the reverse edge.
        assert!(child.child(0, 2, &ordering).is_none());
    }

    #[test]
    fn test_successors_skip_unreachable() {
        let ordering = NodeOrdering::BoundThenDepth;
        let root = SearchNode::root(classic(), 0, &ordering);
        assert_eq!(root.successors(), vec![1, 2, 3]);

        let child = root.child(1, 1, &ordering).expect("reachable");
        assert_eq!(child.successors(), vec![2, 3]);

        let mut m = classic();
        m.set(0, 2, f64::INFINITY);
        let root = SearchNode::root(m, 0, &ordering);
        assert_eq!(root.unvisited(), vec![1, 2, 3]);
        assert_eq!(root.successors(), vec![1, 3]);

        let leaf_parent = root
            .child(1, 1, &ordering)
            .and_then(|n| n.child(3, 2, &ordering))
            .expect("reachable");
        let leaf = leaf_parent.child(2, 3, &ordering).expect("reachable");
        assert!(leaf.is_leaf());
        assert!(leaf.successors().is_empty());
    }

    #[test]
    fn test_heap_order_bound_then_depth() {
        let ordering = NodeOrdering::BoundThenDepth;
        let mut a = SearchNode::root(classic(), 0, &ordering);
        let mut b = a.clone();
        let mut c = a.clone();
        a.bound = 5.0;
        a.key = 5.0;
        b.bound = 3.0;
        b.key = 3.0;
        c.bound = 3.0;
        c.key = 3.0;
        c.path = vec![0, 1];
        c.id = 2;
        b.id = 1;

        let mut heap = BinaryHeap::new();
        heap.push(a);
        heap.push(b);
        heap.push(c);

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.id())).collect();
        // c: bound 3, depth 2; b: bound 3, depth 1; a: bound 5
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_heap_ties_by_id() {
        let ordering = NodeOrdering::BoundThenDepth;
        let a = SearchNode::root(classic(), 0, &ordering);
        let mut b = a.clone();
        b.id = 7;
        assert!(a > b);
    }

    #[test]
    fn test_depth_biased_key() {
        let ordering = NodeOrdering::DepthBiased { weight: 100.0 };
        let root = SearchNode::root(classic(), 0, &ordering);
        let child = root.child(1, 1, &ordering).expect("reachable");
        assert_eq!(child.key, child.bound() - 200.0);
        assert!(child > root);
    }
}
