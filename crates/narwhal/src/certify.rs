//! Validity predicates for solver certificates.
//!
//! [`is_feedback_vertex_set`] and [`is_quasi_kernel`] look at arcs only, every other predicate
//! at undirected edges only. A set naming a vertex that is not in the graph is never valid.

use crate::graphlib::{Graph, VertexIndex, alg};
use std::collections::{BTreeMap, BTreeSet};

fn all_present<V, L>(g: &Graph<V, L>, set: &BTreeSet<VertexIndex>) -> bool {
    set.iter().all(|&v| g.has_vertex(v))
}

/// Every undirected edge has at least one endpoint in `cover`.
pub fn is_vertex_cover<V, L>(g: &Graph<V, L>, cover: &BTreeSet<VertexIndex>) -> bool {
    all_present(g, cover)
        && g.edges()
            .all(|e| cover.contains(&e.start()) || cover.contains(&e.end()))
}

/// Members are pairwise adjacent.
pub fn is_clique<V, L>(g: &Graph<V, L>, clique: &BTreeSet<VertexIndex>) -> bool {
    all_present(g, clique)
        && clique.iter().all(|&u| {
            let Some(vertex) = g.vertex(u) else {
                return false;
            };
            clique.iter().all(|&w| w == u || vertex.is_neighbor(w))
        })
}

/// Members are pairwise non-adjacent.
pub fn is_independent_set<V, L>(g: &Graph<V, L>, set: &BTreeSet<VertexIndex>) -> bool {
    all_present(g, set)
        && set.iter().all(|&u| {
            g.vertex(u)
                .is_some_and(|vertex| vertex.neighbors().all(|w| !set.contains(&w)))
        })
}

/// Every vertex is in `set` or adjacent to a member.
pub fn is_dominating_set<V, L>(g: &Graph<V, L>, set: &BTreeSet<VertexIndex>) -> bool {
    all_present(g, set)
        && g.vertices().all(|vertex| {
            set.contains(&vertex.index()) || vertex.neighbors().any(|w| set.contains(&w))
        })
}

/// `set` induces a connected subgraph. The empty set counts as connected.
pub fn is_connected_subset<V, L>(g: &Graph<V, L>, set: &BTreeSet<VertexIndex>) -> bool {
    if !all_present(g, set) {
        return false;
    }
    let Some(&start) = set.first() else {
        return true;
    };
    let mut seen: BTreeSet<VertexIndex> = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        let Some(vertex) = g.vertex(u) else {
            continue;
        };
        for w in vertex.neighbors() {
            if set.contains(&w) && seen.insert(w) {
                stack.push(w);
            }
        }
    }
    seen.len() == set.len()
}

/// Every vertex has a color `>= 1` and no undirected edge joins two vertices of the same color.
pub fn is_proper_coloring<V, L>(g: &Graph<V, L>, coloring: &BTreeMap<VertexIndex, usize>) -> bool {
    if coloring.len() != g.vertex_count() {
        return false;
    }
    let color_ok = g
        .vertices()
        .all(|v| coloring.get(&v.index()).is_some_and(|&c| c >= 1));
    color_ok
        && g.edges()
            .all(|e| coloring.get(&e.start()) != coloring.get(&e.end()))
}

/// Number of distinct colors in `coloring`.
pub fn colors_used(coloring: &BTreeMap<VertexIndex, usize>) -> usize {
    coloring.values().collect::<BTreeSet<_>>().len()
}

/// Removing `set` leaves no directed cycle among the arcs.
pub fn is_feedback_vertex_set<V, L>(g: &Graph<V, L>, set: &BTreeSet<VertexIndex>) -> bool {
    if !all_present(g, set) {
        return false;
    }
    let rest: Vec<VertexIndex> = g
        .vertex_indices()
        .into_iter()
        .filter(|v| !set.contains(v))
        .collect();
    alg::find_directed_cycle(&rest, move |v| {
        g.vertex(v).into_iter().flat_map(|x| x.out_neighbors())
    })
    .is_none()
}

/// Removing `set` leaves the undirected edges without a cycle.
pub fn is_undirected_feedback_vertex_set<V, L>(
    g: &Graph<V, L>,
    set: &BTreeSet<VertexIndex>,
) -> bool {
    if !all_present(g, set) {
        return false;
    }
    let rest: Vec<VertexIndex> = g
        .vertex_indices()
        .into_iter()
        .filter(|v| !set.contains(v))
        .collect();
    alg::find_undirected_cycle(&rest, move |v| {
        g.vertex(v).into_iter().flat_map(|x| x.neighbors())
    })
    .is_none()
}

/// No arc joins two members, and every vertex is a member or reaches one along at most two arcs.
pub fn is_quasi_kernel<V, L>(g: &Graph<V, L>, set: &BTreeSet<VertexIndex>) -> bool {
    if !all_present(g, set) {
        return false;
    }
    let independent = set.iter().all(|&u| {
        g.vertex(u)
            .is_some_and(|vertex| vertex.out_neighbors().all(|w| !set.contains(&w)))
    });
    independent
        && g.vertices().all(|vertex| {
            set.contains(&vertex.index())
                || vertex.out_neighbors().any(|w| {
                    set.contains(&w)
                        || g.vertex(w)
                            .is_some_and(|x| x.out_neighbors().any(|y| set.contains(&y)))
                })
        })
}
