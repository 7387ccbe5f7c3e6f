//! Polynomial-time greedy structures used as lower bounds.
//!
//! - a maximal matching bounds the vertex cover number from below (every matched edge needs its
//!   own cover vertex);
//! - a clique bounds the chromatic number from below;
//! - a distance-2 independent set bounds the domination number from below (closed
//!   neighborhoods of its members are disjoint, so each needs its own dominator).

use crate::graphlib::{Graph, VertexIndex};
use crate::view::UndirectedView;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// A maximal matching built over the edges in a seeded random order.
pub fn greedy_matching<V, L>(g: &Graph<V, L>, random_seed: u64) -> Vec<(VertexIndex, VertexIndex)> {
    let view = UndirectedView::new(g);
    let mut rng = StdRng::seed_from_u64(random_seed);
    matching(&view, &mut rng)
        .into_iter()
        .map(|(i, j)| (view.id(i), view.id(j)))
        .collect()
}

/// A maximal clique grown greedily by degree.
pub fn greedy_clique<V, L>(g: &Graph<V, L>) -> BTreeSet<VertexIndex> {
    let view = UndirectedView::new(g);
    view.to_ids(clique(&view))
}

/// A maximal set of vertices pairwise at distance at least 3, in a seeded random order.
pub fn greedy_distance2_independent_set<V, L>(
    g: &Graph<V, L>,
    random_seed: u64,
) -> BTreeSet<VertexIndex> {
    let view = UndirectedView::new(g);
    let mut rng = StdRng::seed_from_u64(random_seed);
    view.to_ids(distance2_independent_set(&view, &mut rng))
}

pub(crate) fn matching(view: &UndirectedView, rng: &mut StdRng) -> Vec<(usize, usize)> {
    let mut edges = view.edges();
    edges.shuffle(rng);
    let mut matched = vec![false; view.len()];
    let mut out = Vec::new();
    for (i, j) in edges {
        if !matched[i] && !matched[j] {
            matched[i] = true;
            matched[j] = true;
            out.push((i, j));
        }
    }
    out
}

pub(crate) fn clique(view: &UndirectedView) -> Vec<usize> {
    let mut best: Vec<usize> = Vec::new();
    for seed in 0..view.len() {
        if view.degree(seed) < best.len() {
            continue;
        }
        let mut candidates: Vec<usize> = view.neighbors(seed).to_vec();
        candidates.sort_by_key(|&u| std::cmp::Reverse(view.degree(u)));
        let mut current = vec![seed];
        for u in candidates {
            if current.iter().all(|&c| view.adjacent(c, u)) {
                current.push(u);
            }
        }
        if current.len() > best.len() {
            best = current;
        }
    }
    best
}

pub(crate) fn distance2_independent_set(view: &UndirectedView, rng: &mut StdRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..view.len()).collect();
    order.shuffle(rng);
    let mut blocked = vec![false; view.len()];
    let mut out = Vec::new();
    for v in order {
        if blocked[v] {
            continue;
        }
        out.push(v);
        blocked[v] = true;
        for &u in view.neighbors(v) {
            blocked[u] = true;
            for &w in view.neighbors(u) {
                blocked[w] = true;
            }
        }
    }
    out
}
