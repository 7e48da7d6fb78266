#![allow(dead_code)]

use hierarchy_filter::hierarchy::ancestors;
use hierarchy_filter::{ArrayHierarchy, Depth, Hierarchy, NodeId};
use proptest::prelude::*;

/// The eleven-node forest used throughout the docs.
pub fn sample_forest() -> ArrayHierarchy {
    ArrayHierarchy::new(
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        vec![0, 1, 2, 3, 1, 0, 1, 0, 1, 1, 2],
    )
    .expect("sample forest is consistent")
}

/// Turn raw step choices into a well-formed depth sequence.
///
/// Each choice picks a depth in `0..=previous + 1`.
pub fn depths_from_steps(steps: &[u32]) -> Vec<Depth> {
    let mut depths: Vec<Depth> = Vec::with_capacity(steps.len());
    for (i, &step) in steps.iter().enumerate() {
        let depth = if i == 0 { 0 } else { step % (depths[i - 1] + 2) };
        depths.push(depth);
    }
    depths
}

/// Well-formed forests with ids `0..n`.
pub fn forest_strategy(max_len: usize) -> impl Strategy<Value = ArrayHierarchy> {
    proptest::collection::vec(any::<u32>(), 0..max_len).prop_map(|steps| {
        let depths = depths_from_steps(&steps);
        let ids = (0..depths.len() as NodeId).collect();
        ArrayHierarchy::new(ids, depths).expect("generated forest is consistent")
    })
}

/// Reference answer: keep index `i` iff it and all its ancestors pass.
pub fn expected_by_ancestry<P: Fn(NodeId) -> bool>(
    h: &ArrayHierarchy,
    predicate: P,
) -> ArrayHierarchy {
    let passes = |j: usize| predicate(h.node_id(j).expect("readable"));
    (0..h.size())
        .filter(|&i| {
            passes(i)
                && ancestors(h, i)
                    .expect("ancestors readable")
                    .into_iter()
                    .all(|j| passes(j))
        })
        .map(|i| h.entry(i).expect("readable"))
        .collect()
}
