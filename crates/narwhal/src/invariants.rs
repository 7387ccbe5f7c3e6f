//! Method-style access to the solvers.
//!
//! ```
//! use narwhal::Invariants;
//! use narwhal::graphlib::Graph;
//!
//! let k4: Graph = Graph::from_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
//! assert_eq!(k4.vertex_cover_number(), 3);
//! assert_eq!(k4.clique_number(None), 4);
//! assert_eq!(k4.chromatic_number(&[]), 4);
//! ```

use crate::graphlib::{Graph, VertexIndex};
use crate::{
    DominationVariant, clique, coloring, dfvs, domination, fvs, quasi_kernel, vertex_cover,
};
use std::collections::{BTreeMap, BTreeSet};

pub trait Invariants {
    fn vertex_cover_number(&self) -> usize;
    fn min_vertex_cover(&self) -> BTreeSet<VertexIndex>;

    fn clique_number(&self, sample: Option<&[VertexIndex]>) -> usize;
    fn maximum_clique(&self, sample: Option<&[VertexIndex]>) -> BTreeSet<VertexIndex>;

    fn domination_number(&self) -> usize;
    fn independent_domination_number(&self) -> usize;
    /// `None` when the graph is disconnected.
    fn connected_domination_number(&self) -> Option<usize>;
    fn min_dominating_set(&self, variant: DominationVariant) -> Option<BTreeSet<VertexIndex>>;
    fn min_connected_dominating_set(&self) -> Option<BTreeSet<VertexIndex>>;

    fn chromatic_number(&self, cliques: &[Vec<VertexIndex>]) -> usize;
    fn minimal_proper_coloring(&self, cliques: &[Vec<VertexIndex>]) -> BTreeMap<VertexIndex, usize>;

    fn directed_feedback_vertex_set_number(&self) -> usize;
    fn min_directed_feedback_vertex_set(&self) -> BTreeSet<VertexIndex>;

    fn feedback_vertex_set_number(&self) -> usize;
    fn min_feedback_vertex_set(&self) -> BTreeSet<VertexIndex>;

    fn quasi_kernel_number(&self) -> usize;
    fn min_quasi_kernel(&self) -> BTreeSet<VertexIndex>;
}

impl<V, L> Invariants for Graph<V, L> {
    fn vertex_cover_number(&self) -> usize {
        vertex_cover::vertex_cover_number(self)
    }

    fn min_vertex_cover(&self) -> BTreeSet<VertexIndex> {
        vertex_cover::min_vertex_cover(self)
    }

    fn clique_number(&self, sample: Option<&[VertexIndex]>) -> usize {
        clique::clique_number(self, sample)
    }

    fn maximum_clique(&self, sample: Option<&[VertexIndex]>) -> BTreeSet<VertexIndex> {
        clique::maximum_clique(self, sample)
    }

    fn domination_number(&self) -> usize {
        domination::domination_number(self)
    }

    fn independent_domination_number(&self) -> usize {
        domination::independent_domination_number(self)
    }

    fn connected_domination_number(&self) -> Option<usize> {
        domination::connected_domination_number(self)
    }

    fn min_dominating_set(&self, variant: DominationVariant) -> Option<BTreeSet<VertexIndex>> {
        domination::min_dominating_set(self, variant)
    }

    fn min_connected_dominating_set(&self) -> Option<BTreeSet<VertexIndex>> {
        domination::min_connected_dominating_set(self)
    }

    fn chromatic_number(&self, cliques: &[Vec<VertexIndex>]) -> usize {
        coloring::chromatic_number(self, cliques)
    }

    fn minimal_proper_coloring(&self, cliques: &[Vec<VertexIndex>]) -> BTreeMap<VertexIndex, usize> {
        coloring::minimal_proper_coloring(self, cliques)
    }

    fn directed_feedback_vertex_set_number(&self) -> usize {
        dfvs::directed_feedback_vertex_set_number(self)
    }

    fn min_directed_feedback_vertex_set(&self) -> BTreeSet<VertexIndex> {
        dfvs::min_directed_feedback_vertex_set(self)
    }

    fn feedback_vertex_set_number(&self) -> usize {
        fvs::feedback_vertex_set_number(self)
    }

    fn min_feedback_vertex_set(&self) -> BTreeSet<VertexIndex> {
        fvs::min_feedback_vertex_set(self)
    }

    fn quasi_kernel_number(&self) -> usize {
        quasi_kernel::quasi_kernel_number(self)
    }

    fn min_quasi_kernel(&self) -> BTreeSet<VertexIndex> {
        quasi_kernel::min_quasi_kernel(self)
    }
}
