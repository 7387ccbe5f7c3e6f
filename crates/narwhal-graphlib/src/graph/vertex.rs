//! Vertices stored by [`Graph`](super::Graph).

use super::{IndexSet, LinkIndex, VertexIndex};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<V> {
    pub(in crate::graph) index: VertexIndex,
    pub(in crate::graph) stacked_index: usize,
    pub pos: Point,
    pub weight: Option<f64>,
    pub data: V,
    pub(in crate::graph) neighbors: IndexSet<VertexIndex>,
    pub(in crate::graph) in_neighbors: IndexSet<VertexIndex>,
    pub(in crate::graph) out_neighbors: IndexSet<VertexIndex>,
    pub(in crate::graph) incident_links: IndexSet<LinkIndex>,
}

impl<V> Vertex<V> {
    pub(in crate::graph) fn new(index: VertexIndex, stacked_index: usize, data: V) -> Self {
        Self {
            index,
            stacked_index,
            pos: Point::default(),
            weight: None,
            data,
            neighbors: IndexSet::default(),
            in_neighbors: IndexSet::default(),
            out_neighbors: IndexSet::default(),
            incident_links: IndexSet::default(),
        }
    }

    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Dense position of this vertex in `0..n`, the row/column of the adjacency matrix.
    ///
    /// Deleting a vertex shifts the stacked index of every vertex added after it down by one.
    pub fn stacked_index(&self) -> usize {
        self.stacked_index
    }

    /// Neighbors through undirected edges.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.neighbors.iter().copied()
    }

    pub fn in_neighbors(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.in_neighbors.iter().copied()
    }

    pub fn out_neighbors(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.out_neighbors.iter().copied()
    }

    pub fn incident_links(&self) -> impl Iterator<Item = LinkIndex> + '_ {
        self.incident_links.iter().copied()
    }

    pub fn is_neighbor(&self, v: VertexIndex) -> bool {
        self.neighbors.contains(&v)
    }

    pub fn is_in_neighbor(&self, v: VertexIndex) -> bool {
        self.in_neighbors.contains(&v)
    }

    pub fn is_out_neighbor(&self, v: VertexIndex) -> bool {
        self.out_neighbors.contains(&v)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn indegree(&self) -> usize {
        self.in_neighbors.len()
    }

    pub fn outdegree(&self) -> usize {
        self.out_neighbors.len()
    }
}
