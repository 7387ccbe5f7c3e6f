//! Links (edges and arcs) stored by [`Graph`](super::Graph).

use super::{LinkIndex, VertexIndex};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Undirected,
    Directed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Undirected => f.write_str("undirected"),
            Orientation::Directed => f.write_str("directed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Link<L> {
    pub(in crate::graph) index: LinkIndex,
    pub(in crate::graph) start: VertexIndex,
    pub(in crate::graph) end: VertexIndex,
    pub(in crate::graph) orientation: Orientation,
    pub weight: Option<f64>,
    pub data: L,
}

impl<L> Link<L> {
    pub fn index(&self) -> LinkIndex {
        self.index
    }

    pub fn start(&self) -> VertexIndex {
        self.start
    }

    pub fn end(&self) -> VertexIndex {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an endpoint.
    pub fn other_end(&self, v: VertexIndex) -> Option<VertexIndex> {
        if v == self.start {
            Some(self.end)
        } else if v == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Two links share a signature when they have the same orientation and the same endpoints
    /// (unordered for edges, ordered for arcs).
    pub fn signature_equals(
        &self,
        start: VertexIndex,
        end: VertexIndex,
        orientation: Orientation,
    ) -> bool {
        if self.orientation != orientation {
            return false;
        }
        match orientation {
            Orientation::Undirected => {
                (self.start == start && self.end == end) || (self.start == end && self.end == start)
            }
            Orientation::Directed => self.start == start && self.end == end,
        }
    }
}
