//! Exhaustive search over all `2^n` vertex subsets.
//!
//! Exponential in the vertex count; meant as an optimality oracle for small graphs.

use crate::graphlib::{Graph, VertexIndex};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSubsetSummary {
    /// Size of the smallest subset with the property, `None` when no subset has it.
    pub minimum: Option<usize>,
    /// Number of subsets of size `minimum` with the property.
    pub min_solutions: u64,
    /// Number of subsets of any size with the property.
    pub solutions: u64,
}

impl MinSubsetSummary {
    const NONE: Self = Self {
        minimum: None,
        min_solutions: 0,
        solutions: 0,
    };

    fn merge(self, other: Self) -> Self {
        let solutions = self.solutions + other.solutions;
        match (self.minimum, other.minimum) {
            (Some(a), Some(b)) if a == b => Self {
                minimum: Some(a),
                min_solutions: self.min_solutions + other.min_solutions,
                solutions,
            },
            (Some(a), Some(b)) if a < b => Self { solutions, ..self },
            (Some(_), None) => Self { solutions, ..self },
            _ => Self { solutions, ..other },
        }
    }
}

/// Tests `property` on every vertex subset of `g`.
pub fn min_subset<V, L, P>(g: &Graph<V, L>, property: P) -> MinSubsetSummary
where
    P: Fn(&Graph<V, L>, &BTreeSet<VertexIndex>) -> bool,
{
    let mut choosable = g.vertex_indices();
    let mut current = BTreeSet::new();
    visit(g, &property, &mut choosable, &mut current)
}

fn visit<V, L, P>(
    g: &Graph<V, L>,
    property: &P,
    choosable: &mut Vec<VertexIndex>,
    current: &mut BTreeSet<VertexIndex>,
) -> MinSubsetSummary
where
    P: Fn(&Graph<V, L>, &BTreeSet<VertexIndex>) -> bool,
{
    let Some(v) = choosable.pop() else {
        return if property(g, current) {
            MinSubsetSummary {
                minimum: Some(current.len()),
                min_solutions: 1,
                solutions: 1,
            }
        } else {
            MinSubsetSummary::NONE
        };
    };

    let without = visit(g, property, choosable, current);
    current.insert(v);
    let with = visit(g, property, choosable, current);
    current.remove(&v);
    choosable.push(v);

    without.merge(with)
}
