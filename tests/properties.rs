//! Property tests for reduction, bounds and search optimality.

use proptest::prelude::*;
use u_tsp::bnb::{BnbConfig, BnbSolver, NodeOrdering, SearchNode};
use u_tsp::distance::CostMatrix;
use u_tsp::models::{CostModel, Tour};
use u_tsp::sa::{Annealer, AnnealingConfig};

const INF: f64 = f64::INFINITY;

/// Symmetric complete instance with small integer costs.
fn symmetric_matrix(max_n: usize) -> impl Strategy<Value = CostMatrix> {
    (2..=max_n).prop_flat_map(|n| {
        prop::collection::vec(1u32..100, n * n).prop_map(move |raw| {
            let mut m = CostMatrix::new(n);
            for i in 0..n {
                for j in (i + 1)..n {
                    let c = f64::from(raw[i * n + j]);
                    m.set(i, j, c);
                    m.set(j, i, c);
                }
            }
            m
        })
    })
}

/// Asymmetric instance where roughly one edge in five is unreachable.
fn sparse_matrix(max_n: usize) -> impl Strategy<Value = CostMatrix> {
    (2..=max_n).prop_flat_map(|n| {
        prop::collection::vec(prop::option::weighted(0.8, 0u32..50), n * n).prop_map(
            move |raw| {
                let mut m = CostMatrix::new(n);
                for i in 0..n {
                    for j in 0..n {
                        if i != j {
                            m.set(i, j, raw[i * n + j].map_or(INF, f64::from));
                        }
                    }
                }
                m
            },
        )
    })
}

/// Cheapest closed tour by enumerating every permutation starting at 0.
fn brute_force(m: &CostMatrix) -> f64 {
    fn extend(m: &CostMatrix, order: &mut Vec<usize>, used: &mut [bool], best: &mut f64) {
        if order.len() == m.size() {
            *best = best.min(m.tour_cost(order));
            return;
        }
        for c in 0..m.size() {
            if !used[c] {
                used[c] = true;
                order.push(c);
                extend(m, order, used, best);
                order.pop();
                used[c] = false;
            }
        }
    }

    let mut used = vec![false; m.size()];
    used[0] = true;
    let mut best = INF;
    extend(m, &mut vec![0], &mut used, &mut best);
    best
}

fn unlimited() -> BnbConfig {
    BnbConfig::default().with_time_limit(f64::INFINITY)
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reduction_is_idempotent(mut m in sparse_matrix(8)) {
        m.forbid_self_loops();
        m.reduce();
        prop_assert!(m.is_reduced());
        let snapshot = m.clone();
        prop_assert_eq!(m.reduce(), 0.0);
        prop_assert_eq!(m, snapshot);
    }

    #[test]
    fn root_bound_never_exceeds_optimum(m in sparse_matrix(7)) {
        let root = SearchNode::root(m.clone(), 0, &NodeOrdering::default());
        let optimum = brute_force(&m);
        prop_assert!(root.bound() <= optimum);
    }

    #[test]
    fn child_bounds_are_monotone(m in sparse_matrix(7)) {
        let ordering = NodeOrdering::default();
        let root = SearchNode::root(m, 0, &ordering);
        let mut id = 1;
        for a in root.unvisited() {
            let Some(child) = root.child(a, id, &ordering) else { continue };
            id += 1;
            prop_assert!(child.bound() >= root.bound());
            for b in child.unvisited() {
                let Some(grandchild) = child.child(b, id, &ordering) else { continue };
                id += 1;
                prop_assert!(grandchild.bound() >= child.bound());
                prop_assert_eq!(grandchild.depth(), 3);
            }
        }
    }

    #[test]
    fn branch_and_bound_matches_brute_force_symmetric(m in symmetric_matrix(7)) {
        let result = BnbSolver::solve(&m, &unlimited()).unwrap();
        prop_assert!(result.exhaustive);
        prop_assert_eq!(result.best_cost, brute_force(&m));
        prop_assert!(result.best_cost <= result.seed_cost);
    }

    #[test]
    fn branch_and_bound_matches_brute_force_sparse(m in sparse_matrix(6)) {
        let result = BnbSolver::solve(&m, &unlimited()).unwrap();
        prop_assert!(result.exhaustive);
        prop_assert_eq!(result.best_cost, brute_force(&m));
        if result.best_cost.is_infinite() {
            prop_assert_eq!(result.improvements, 0);
        }
    }

    #[test]
    fn best_tour_is_valid(m in sparse_matrix(7)) {
        let n = m.size();
        let result = BnbSolver::solve(&m, &unlimited()).unwrap();
        if let Some(best) = result.best {
            prop_assert!(is_permutation(best.order(), n));
            prop_assert_eq!(best.order()[0], 0);
            prop_assert_eq!(best.cost(), m.tour_cost(best.order()));
            prop_assert_eq!(best.cost(), result.best_cost);
        } else {
            prop_assert!(result.best_cost.is_infinite());
        }
    }

    #[test]
    fn annealing_never_worse_than_seed(m in symmetric_matrix(9), seed in any::<u64>()) {
        let n = m.size();
        let start = Tour::new((0..n).rev().collect(), &m).unwrap();
        let config = AnnealingConfig::default().with_seed(seed).with_alpha(0.95);
        let result = Annealer::refine(&m, &start, &config).unwrap();
        prop_assert!(result.best_cost <= start.cost());
        prop_assert!(is_permutation(result.best.order(), n));
        prop_assert_eq!(result.best.order()[0], n - 1);
    }
}
