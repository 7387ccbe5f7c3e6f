//! All-pairs shortest paths (Floyd–Warshall).

use super::HashMap;
use crate::{Graph, Link, VertexIndex};

/// How the length of a link is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeLength {
    /// Every link has length 1.
    #[default]
    Unit,
    /// `Link::weight`, defaulting to 1 when unset.
    Weight,
    /// Euclidean distance between the endpoint positions.
    Euclidean,
}

#[derive(Debug, Clone)]
pub struct ShortestPaths {
    ids: Vec<VertexIndex>,
    position: HashMap<VertexIndex, usize>,
    dist: Vec<Vec<Option<f64>>>,
    next: Vec<Vec<Option<usize>>>,
}

impl ShortestPaths {
    /// Length of a shortest `u -> v` path, `None` when `v` is unreachable from `u`.
    pub fn distance(&self, u: VertexIndex, v: VertexIndex) -> Option<f64> {
        let (i, j) = self.positions(u, v)?;
        self.dist[i][j]
    }

    /// The vertex following `u` on a shortest `u -> v` path.
    pub fn next_hop(&self, u: VertexIndex, v: VertexIndex) -> Option<VertexIndex> {
        let (i, j) = self.positions(u, v)?;
        self.next[i][j].map(|k| self.ids[k])
    }

    /// A shortest `u -> v` path, both endpoints included.
    pub fn path(&self, u: VertexIndex, v: VertexIndex) -> Option<Vec<VertexIndex>> {
        let (mut i, j) = self.positions(u, v)?;
        self.dist[i][j]?;
        let mut path = vec![self.ids[i]];
        while i != j {
            i = self.next[i][j]?;
            path.push(self.ids[i]);
        }
        Some(path)
    }

    /// Vertices in stacked order.
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.ids
    }

    /// The largest distance from `u` to any vertex, `None` when some vertex is unreachable.
    pub fn eccentricity(&self, u: VertexIndex) -> Option<f64> {
        let i = *self.position.get(&u)?;
        self.dist[i]
            .iter()
            .try_fold(0.0_f64, |acc, d| d.map(|d| acc.max(d)))
    }

    fn positions(&self, u: VertexIndex, v: VertexIndex) -> Option<(usize, usize)> {
        Some((*self.position.get(&u)?, *self.position.get(&v)?))
    }
}

fn link_length<V, L>(g: &Graph<V, L>, link: &Link<L>, length: EdgeLength) -> f64 {
    match length {
        EdgeLength::Unit => 1.0,
        EdgeLength::Weight => link.weight.unwrap_or(1.0),
        EdgeLength::Euclidean => match (g.vertex(link.start()), g.vertex(link.end())) {
            (Some(s), Some(e)) => s.pos.distance(&e.pos),
            _ => 1.0,
        },
    }
}

/// Floyd–Warshall over every link of `g`: edges are traversable both ways, arcs only forward.
pub fn floyd_warshall<V, L>(g: &Graph<V, L>, length: EdgeLength) -> ShortestPaths {
    let n = g.vertex_count();
    let ids: Vec<VertexIndex> = g.vertex_indices();
    let position: HashMap<VertexIndex, usize> =
        ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut dist: Vec<Vec<Option<f64>>> = vec![vec![None; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
    for i in 0..n {
        dist[i][i] = Some(0.0);
        next[i][i] = Some(i);
    }

    let mut relax_link = |i: usize, j: usize, w: f64| {
        if dist[i][j].is_none_or(|d| w < d) {
            dist[i][j] = Some(w);
            next[i][j] = Some(j);
        }
    };
    for link in g.links() {
        let (Some(&i), Some(&j)) = (position.get(&link.start()), position.get(&link.end())) else {
            continue;
        };
        let w = link_length(g, link, length);
        relax_link(i, j, w);
        if !link.is_directed() {
            relax_link(j, i, w);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = dist[k][j] else {
                    continue;
                };
                let through = ik + kj;
                if dist[i][j].is_none_or(|d| through < d) {
                    dist[i][j] = Some(through);
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    ShortestPaths {
        ids,
        position,
        dist,
        next,
    }
}
