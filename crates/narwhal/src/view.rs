//! Dense, solver-side snapshots of a graph's adjacency.
//!
//! Solvers address vertices by stacked index (`0..n`) and translate back to [`VertexIndex`]
//! only when building certificates.

use crate::graphlib::{Graph, VertexIndex};
use rustc_hash::FxBuildHasher;
use std::collections::BTreeSet;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
struct Ids {
    ids: Vec<VertexIndex>,
    position: HashMap<VertexIndex, usize>,
}

impl Ids {
    fn new<V, L>(g: &Graph<V, L>) -> Self {
        let ids = g.vertex_indices();
        let position = ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Self { ids, position }
    }
}

/// Undirected edges only, with an adjacency bit matrix for O(1) edge tests.
#[derive(Debug, Clone)]
pub(crate) struct UndirectedView {
    ids: Ids,
    adj: Vec<Vec<usize>>,
    bits: Vec<Vec<bool>>,
}

impl UndirectedView {
    pub(crate) fn new<V, L>(g: &Graph<V, L>) -> Self {
        let ids = Ids::new(g);
        let n = ids.ids.len();
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut bits: Vec<Vec<bool>> = vec![vec![false; n]; n];
        for (i, vertex) in g.vertices().enumerate() {
            for w in vertex.neighbors() {
                let Some(&j) = ids.position.get(&w) else {
                    continue;
                };
                adj[i].push(j);
                bits[i][j] = true;
            }
        }
        Self { ids, adj, bits }
    }

    pub(crate) fn len(&self) -> usize {
        self.adj.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub(crate) fn neighbors(&self, i: usize) -> &[usize] {
        &self.adj[i]
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adj
    }

    pub(crate) fn degree(&self, i: usize) -> usize {
        self.adj[i].len()
    }

    pub(crate) fn adjacent(&self, i: usize, j: usize) -> bool {
        self.bits[i][j]
    }

    /// Every undirected edge once, as `(i, j)` with `i < j`.
    pub(crate) fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, ns) in self.adj.iter().enumerate() {
            out.extend(ns.iter().filter(|&&j| i < j).map(|&j| (i, j)));
        }
        out
    }

    pub(crate) fn position(&self, v: VertexIndex) -> Option<usize> {
        self.ids.position.get(&v).copied()
    }

    pub(crate) fn id(&self, i: usize) -> VertexIndex {
        self.ids.ids[i]
    }

    pub(crate) fn to_ids(&self, positions: impl IntoIterator<Item = usize>) -> BTreeSet<VertexIndex> {
        positions.into_iter().map(|i| self.ids.ids[i]).collect()
    }

    /// Whether `members` induce a connected subgraph. The empty set is connected.
    pub(crate) fn is_connected_among(&self, members: &[usize]) -> bool {
        let Some(&start) = members.first() else {
            return true;
        };
        let mut inside = vec![false; self.len()];
        for &m in members {
            inside[m] = true;
        }
        let mut seen = vec![false; self.len()];
        seen[start] = true;
        let mut stack = vec![start];
        let mut reached = 1;
        while let Some(u) = stack.pop() {
            for &w in &self.adj[u] {
                if inside[w] && !seen[w] {
                    seen[w] = true;
                    reached += 1;
                    stack.push(w);
                }
            }
        }
        reached == members.len()
    }
}

/// Arcs only.
#[derive(Debug, Clone)]
pub(crate) struct DirectedView {
    ids: Ids,
    pub(crate) out: Vec<Vec<usize>>,
    pub(crate) inc: Vec<Vec<usize>>,
}

impl DirectedView {
    pub(crate) fn new<V, L>(g: &Graph<V, L>) -> Self {
        let ids = Ids::new(g);
        let n = ids.ids.len();
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut inc: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (i, vertex) in g.vertices().enumerate() {
            for w in vertex.out_neighbors() {
                let Some(&j) = ids.position.get(&w) else {
                    continue;
                };
                out[i].push(j);
                inc[j].push(i);
            }
        }
        Self { ids, out, inc }
    }

    pub(crate) fn len(&self) -> usize {
        self.out.len()
    }

    pub(crate) fn to_ids(&self, positions: impl IntoIterator<Item = usize>) -> BTreeSet<VertexIndex> {
        positions.into_iter().map(|i| self.ids.ids[i]).collect()
    }
}
