//! The [`Graph`] container.
//!
//! Vertices and links are addressed by caller-chosen integer handles. Iteration over vertices,
//! links and neighbor sets follows insertion order; deletions preserve the relative order of
//! what remains, so the stacked index of a vertex is always its position in [`Graph::vertices`].

mod link;
mod matrix;
mod vertex;

pub use link::{Link, Orientation};
pub use vertex::{Point, Vertex};

use crate::error::{Error, Result};
use indexmap::map::Entry;
use matrix::AdjacencyMatrix;
use rustc_hash::FxBuildHasher;

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;
pub(crate) type IndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

pub type VertexIndex = usize;
pub type LinkIndex = usize;

#[derive(Debug, Clone)]
pub struct Graph<V = (), L = ()> {
    vertices: IndexMap<VertexIndex, Vertex<V>>,
    links: IndexMap<LinkIndex, Link<L>>,
    matrix: AdjacencyMatrix,
    next_link_index: LinkIndex,
}

impl<V, L> Default for Graph<V, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, L> Graph<V, L> {
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::default(),
            links: IndexMap::default(),
            matrix: AdjacencyMatrix::default(),
            next_link_index: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_vertex(&self, index: VertexIndex) -> bool {
        self.vertices.contains_key(&index)
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&Vertex<V>> {
        self.vertices.get(&index)
    }

    pub fn vertex_mut(&mut self, index: VertexIndex) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(&index)
    }

    pub fn link(&self, index: LinkIndex) -> Option<&Link<L>> {
        self.links.get(&index)
    }

    pub fn link_mut(&mut self, index: LinkIndex) -> Option<&mut Link<L>> {
        self.links.get_mut(&index)
    }

    /// Vertices in stacked-index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.values()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link<L>> {
        self.links.values()
    }

    pub fn vertex_indices(&self) -> Vec<VertexIndex> {
        self.vertices.keys().copied().collect()
    }

    /// Undirected links, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Link<L>> {
        self.links.values().filter(|l| !l.is_directed())
    }

    /// Directed links, in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = &Link<L>> {
        self.links.values().filter(|l| l.is_directed())
    }

    pub fn stacked_index(&self, index: VertexIndex) -> Option<usize> {
        self.vertices.get_index_of(&index)
    }

    /// The vertex currently occupying stacked position `stacked`.
    pub fn vertex_at(&self, stacked: usize) -> Option<&Vertex<V>> {
        self.vertices.get_index(stacked).map(|(_, v)| v)
    }

    /// Number of edges/arcs going from `u` to `v` (an undirected edge counts both ways).
    pub fn adjacency_count(&self, u: VertexIndex, v: VertexIndex) -> Result<u32> {
        let i = self.try_vertex(u)?.stacked_index;
        let j = self.try_vertex(v)?.stacked_index;
        Ok(self.matrix.get(i, j))
    }

    /// The adjacency-count matrix, rows and columns in stacked-index order.
    pub fn matrix(&self) -> &[Vec<u32>] {
        self.matrix.rows()
    }

    /// Smallest vertex index not in use.
    pub fn next_vertex_index(&self) -> VertexIndex {
        let mut index = 0;
        while self.vertices.contains_key(&index) {
            index += 1;
        }
        index
    }

    /// Inserts a vertex, or replaces the payload of an existing one.
    ///
    /// Replacing keeps the links of the existing vertex and its stacked index.
    pub fn add_vertex_with(&mut self, index: VertexIndex, data: V) -> &mut Vertex<V> {
        let stacked_index = self.vertices.len();
        match self.vertices.entry(index) {
            Entry::Occupied(o) => {
                let vertex = o.into_mut();
                vertex.data = data;
                vertex
            }
            Entry::Vacant(slot) => {
                self.matrix.push_vertex();
                slot.insert(Vertex::new(index, stacked_index, data))
            }
        }
    }

    /// Returns `true` if a `start`–`end` link of the given orientation may be inserted: it is
    /// not a self-loop and no link with the same signature exists.
    pub fn check_link(&self, start: VertexIndex, end: VertexIndex, orientation: Orientation) -> bool {
        if start == end {
            return false;
        }
        let Some(s) = self.vertices.get(&start) else {
            return true;
        };
        match orientation {
            Orientation::Undirected => !s.is_neighbor(end),
            Orientation::Directed => !s.is_out_neighbor(end),
        }
    }

    pub fn add_link(
        &mut self,
        start: VertexIndex,
        end: VertexIndex,
        orientation: Orientation,
        data: L,
    ) -> Result<&Link<L>> {
        self.try_vertex(start)?;
        self.try_vertex(end)?;
        if start == end {
            return Err(Error::SelfLoop { index: start });
        }
        if !self.check_link(start, end, orientation) {
            return Err(Error::DuplicateLink {
                start,
                end,
                orientation,
            });
        }

        let index = self.next_link_index;
        self.next_link_index += 1;

        let mut stacked = (0, 0);
        if let Some(s) = self.vertices.get_mut(&start) {
            match orientation {
                Orientation::Undirected => s.neighbors.insert(end),
                Orientation::Directed => s.out_neighbors.insert(end),
            };
            s.incident_links.insert(index);
            stacked.0 = s.stacked_index;
        }
        if let Some(e) = self.vertices.get_mut(&end) {
            match orientation {
                Orientation::Undirected => e.neighbors.insert(start),
                Orientation::Directed => e.in_neighbors.insert(start),
            };
            e.incident_links.insert(index);
            stacked.1 = e.stacked_index;
        }
        self.matrix.increment(stacked.0, stacked.1);
        if orientation == Orientation::Undirected {
            self.matrix.increment(stacked.1, stacked.0);
        }

        let link = self.links.entry(index).or_insert(Link {
            index,
            start,
            end,
            orientation,
            weight: None,
            data,
        });
        Ok(&*link)
    }

    pub fn add_edge_with(&mut self, u: VertexIndex, v: VertexIndex, data: L) -> Result<&Link<L>> {
        self.add_link(u, v, Orientation::Undirected, data)
    }

    pub fn add_arc_with(&mut self, u: VertexIndex, v: VertexIndex, data: L) -> Result<&Link<L>> {
        self.add_link(u, v, Orientation::Directed, data)
    }

    pub fn delete_link(&mut self, index: LinkIndex) -> bool {
        let Some(link) = self.links.shift_remove(&index) else {
            return false;
        };

        let mut stacked = (0, 0);
        if let Some(s) = self.vertices.get_mut(&link.start) {
            match link.orientation {
                Orientation::Undirected => s.neighbors.shift_remove(&link.end),
                Orientation::Directed => s.out_neighbors.shift_remove(&link.end),
            };
            s.incident_links.shift_remove(&index);
            stacked.0 = s.stacked_index;
        }
        if let Some(e) = self.vertices.get_mut(&link.end) {
            match link.orientation {
                Orientation::Undirected => e.neighbors.shift_remove(&link.start),
                Orientation::Directed => e.in_neighbors.shift_remove(&link.start),
            };
            e.incident_links.shift_remove(&index);
            stacked.1 = e.stacked_index;
        }
        self.matrix.decrement(stacked.0, stacked.1);
        if link.orientation == Orientation::Undirected {
            self.matrix.decrement(stacked.1, stacked.0);
        }
        true
    }

    /// Removes a vertex together with every incident link, then compacts stacked indices.
    pub fn delete_vertex(&mut self, index: VertexIndex) -> bool {
        let Some(vertex) = self.vertices.get(&index) else {
            return false;
        };
        let incident: Vec<LinkIndex> = vertex.incident_links().collect();
        for link in incident {
            self.delete_link(link);
        }

        let Some((pos, _, _)) = self.vertices.shift_remove_full(&index) else {
            return false;
        };
        self.matrix.remove_vertex(pos);
        for (_, v) in self.vertices.iter_mut().skip(pos) {
            v.stacked_index -= 1;
        }
        debug_assert_eq!(self.matrix.len(), self.vertices.len());
        true
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.links.clear();
        self.matrix.clear();
    }

    pub fn has_edge(&self, a: VertexIndex, b: VertexIndex) -> Result<bool> {
        self.try_vertex(b)?;
        Ok(self.try_vertex(a)?.is_neighbor(b))
    }

    pub fn has_arc(&self, a: VertexIndex, b: VertexIndex) -> Result<bool> {
        self.try_vertex(b)?;
        Ok(self.try_vertex(a)?.is_out_neighbor(b))
    }

    pub fn degree(&self, v: VertexIndex) -> Result<usize> {
        Ok(self.try_vertex(v)?.degree())
    }

    pub fn indegree(&self, v: VertexIndex) -> Result<usize> {
        Ok(self.try_vertex(v)?.indegree())
    }

    pub fn outdegree(&self, v: VertexIndex) -> Result<usize> {
        Ok(self.try_vertex(v)?.outdegree())
    }

    fn try_vertex(&self, index: VertexIndex) -> Result<&Vertex<V>> {
        self.vertices
            .get(&index)
            .ok_or(Error::MissingVertex { index })
    }
}

impl<V: Default, L> Graph<V, L> {
    pub fn add_vertex(&mut self, index: VertexIndex) -> &mut Vertex<V> {
        self.add_vertex_with(index, V::default())
    }

    pub fn add_vertex_at(&mut self, index: VertexIndex, x: f64, y: f64) -> &mut Vertex<V> {
        let vertex = self.add_vertex(index);
        vertex.pos = Point::new(x, y);
        vertex
    }

    fn ensure_vertex(&mut self, index: VertexIndex) {
        if !self.has_vertex(index) {
            self.add_vertex(index);
        }
    }
}

impl<V: Default, L: Default> Graph<V, L> {
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex) -> Result<&Link<L>> {
        self.add_edge_with(u, v, L::default())
    }

    pub fn add_arc(&mut self, u: VertexIndex, v: VertexIndex) -> Result<&Link<L>> {
        self.add_arc_with(u, v, L::default())
    }

    /// Builds a graph from undirected edges, creating vertices in order of first appearance.
    pub fn from_edges(edges: &[(VertexIndex, VertexIndex)]) -> Result<Self> {
        let mut g = Self::new();
        for &(u, v) in edges {
            g.ensure_vertex(u);
            g.ensure_vertex(v);
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Builds a graph from arcs, creating vertices in order of first appearance.
    pub fn from_arcs(arcs: &[(VertexIndex, VertexIndex)]) -> Result<Self> {
        let mut g = Self::new();
        for &(u, v) in arcs {
            g.ensure_vertex(u);
            g.ensure_vertex(v);
            g.add_arc(u, v)?;
        }
        Ok(g)
    }
}
