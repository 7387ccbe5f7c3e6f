//! Structural primitives over [`Graph`]: strongly connected components, cycle detection,
//! all-pairs shortest paths and the distance invariants built on them, components, bridges and
//! girth.
//!
//! The generic entry points ([`kosaraju`], [`find_directed_cycle`], [`find_undirected_cycle`])
//! take the adjacency as
//! closures so solver-side working copies of a graph can reuse them.

mod cycle;
mod distance;
mod scc;
mod shortest_path;

pub use cycle::{directed_cycle, find_directed_cycle, find_undirected_cycle, undirected_cycle};
pub use distance::{Stretch, radius, stretch};
pub use scc::{kosaraju, strongly_connected_components};
pub use shortest_path::{EdgeLength, ShortestPaths, floyd_warshall};

use crate::{Error, Graph, LinkIndex, Result, VertexIndex};
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

fn successors_of<V, L>(g: &Graph<V, L>, v: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
    g.vertex(v).into_iter().flat_map(|x| x.out_neighbors())
}

fn predecessors_of<V, L>(g: &Graph<V, L>, v: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
    g.vertex(v).into_iter().flat_map(|x| x.in_neighbors())
}

fn undirected_neighbors_of<V, L>(
    g: &Graph<V, L>,
    v: VertexIndex,
) -> impl Iterator<Item = VertexIndex> + '_ {
    g.vertex(v).into_iter().flat_map(|x| x.neighbors())
}

/// Weakly connected components: every link counts, whatever its orientation.
pub fn components<V, L>(g: &Graph<V, L>) -> Vec<Vec<VertexIndex>> {
    let mut seen: HashSet<VertexIndex> = HashSet::default();
    let mut out: Vec<Vec<VertexIndex>> = Vec::new();

    for start in g.vertex_indices() {
        if !seen.insert(start) {
            continue;
        }
        let mut comp: Vec<VertexIndex> = Vec::new();
        let mut q: VecDeque<VertexIndex> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            comp.push(v);
            let Some(vertex) = g.vertex(v) else {
                continue;
            };
            for n in vertex
                .neighbors()
                .chain(vertex.out_neighbors())
                .chain(vertex.in_neighbors())
            {
                if seen.insert(n) {
                    q.push_back(n);
                }
            }
        }
        out.push(comp);
    }

    out
}

pub fn is_connected<V, L>(g: &Graph<V, L>) -> bool {
    components(g).len() <= 1
}

/// Number of vertices in the weakly connected component of `v`.
pub fn component_size<V, L>(g: &Graph<V, L>, v: VertexIndex) -> Result<usize> {
    if !g.has_vertex(v) {
        return Err(Error::MissingVertex { index: v });
    }
    let mut seen: HashSet<VertexIndex> = HashSet::default();
    seen.insert(v);
    let mut stack = vec![v];
    while let Some(u) = stack.pop() {
        let Some(vertex) = g.vertex(u) else {
            continue;
        };
        for w in vertex
            .neighbors()
            .chain(vertex.out_neighbors())
            .chain(vertex.in_neighbors())
        {
            if seen.insert(w) {
                stack.push(w);
            }
        }
    }
    Ok(seen.len())
}

/// Vertices reachable from `start` over undirected edges, never crossing link `skip`.
fn edge_reach<V, L>(g: &Graph<V, L>, start: VertexIndex, skip: LinkIndex) -> HashSet<VertexIndex> {
    let mut seen: HashSet<VertexIndex> = HashSet::default();
    seen.insert(start);
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        let Some(vertex) = g.vertex(u) else {
            continue;
        };
        for l in vertex.incident_links() {
            if l == skip {
                continue;
            }
            let Some(link) = g.link(l) else {
                continue;
            };
            if link.is_directed() {
                continue;
            }
            if let Some(w) = link.other_end(u) {
                if seen.insert(w) {
                    stack.push(w);
                }
            }
        }
    }
    seen
}

/// The bridge (an undirected edge whose removal disconnects its endpoints) splitting its
/// component most evenly: the one maximizing the smaller side. Ties go to the link listed
/// first. `None` when the undirected part has no bridge.
pub fn balanced_cut_edge<V, L>(g: &Graph<V, L>) -> Option<LinkIndex> {
    let mut best: Option<(usize, LinkIndex)> = None;
    for link in g.edges() {
        let side = edge_reach(g, link.start(), link.index());
        if side.contains(&link.end()) {
            continue;
        }
        let other = edge_reach(g, link.end(), link.index()).len();
        let smaller = side.len().min(other);
        if best.is_none_or(|(s, _)| smaller > s) {
            best = Some((smaller, link.index()));
        }
    }
    best.map(|(_, l)| l)
}

/// Length of a shortest cycle made of undirected edges, `None` if there is none.
pub fn girth<V, L>(g: &Graph<V, L>) -> Option<usize> {
    let mut best: Option<usize> = None;

    for source in g.vertex_indices() {
        let mut dist: HashMap<VertexIndex, usize> = HashMap::default();
        let mut parent: HashMap<VertexIndex, VertexIndex> = HashMap::default();
        let mut q: VecDeque<VertexIndex> = VecDeque::new();
        dist.insert(source, 0);
        q.push_back(source);

        while let Some(u) = q.pop_front() {
            let du = dist.get(&u).copied().unwrap_or(0);
            if best.is_some_and(|b| 2 * du >= b) {
                break;
            }
            for w in undirected_neighbors_of(g, u) {
                if parent.get(&u) == Some(&w) {
                    continue;
                }
                match dist.get(&w) {
                    Some(&dw) => {
                        let len = du + dw + 1;
                        if best.is_none_or(|b| len < b) {
                            best = Some(len);
                        }
                    }
                    None => {
                        dist.insert(w, du + 1);
                        parent.insert(w, u);
                        q.push_back(w);
                    }
                }
            }
        }
    }

    best
}
