//! Strongly connected components (Kosaraju).

use super::{HashSet, successors_of, predecessors_of};
use crate::{Graph, VertexIndex};

/// Kosaraju's algorithm over an adjacency given as closures.
///
/// Only vertices listed in `vertices` take part; neighbors outside that set are ignored. The
/// first pass records DFS finish order along successors, the second consumes that order and
/// collects each component along predecessors among still-unassigned vertices. Both passes use
/// explicit stacks, so deep graphs do not grow the call stack.
///
/// Components come out in topological order of the condensation (sources first).
pub fn kosaraju<S, SI, P, PI>(
    vertices: &[VertexIndex],
    successors: S,
    predecessors: P,
) -> Vec<Vec<VertexIndex>>
where
    S: Fn(VertexIndex) -> SI,
    SI: IntoIterator<Item = VertexIndex>,
    P: Fn(VertexIndex) -> PI,
    PI: IntoIterator<Item = VertexIndex>,
{
    let members: HashSet<VertexIndex> = vertices.iter().copied().collect();
    let mut visited: HashSet<VertexIndex> = HashSet::default();
    let mut finished: Vec<VertexIndex> = Vec::with_capacity(vertices.len());

    for &root in vertices {
        if !visited.insert(root) {
            continue;
        }
        let mut stack: Vec<(VertexIndex, SI::IntoIter)> = vec![(root, successors(root).into_iter())];
        loop {
            let Some((v, children)) = stack.last_mut() else {
                break;
            };
            let v = *v;
            let next = children.find(|w| members.contains(w) && !visited.contains(w));
            match next {
                Some(w) => {
                    visited.insert(w);
                    stack.push((w, successors(w).into_iter()));
                }
                None => {
                    finished.push(v);
                    stack.pop();
                }
            }
        }
    }

    let mut assigned: HashSet<VertexIndex> = HashSet::default();
    let mut components: Vec<Vec<VertexIndex>> = Vec::new();
    while let Some(head) = finished.pop() {
        if !assigned.insert(head) {
            continue;
        }
        let mut component = vec![head];
        let mut stack = vec![head];
        while let Some(u) = stack.pop() {
            for w in predecessors(u) {
                if members.contains(&w) && assigned.insert(w) {
                    component.push(w);
                    stack.push(w);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Strongly connected components of the directed part of `g` (undirected edges are ignored).
pub fn strongly_connected_components<V, L>(g: &Graph<V, L>) -> Vec<Vec<VertexIndex>> {
    kosaraju(
        &g.vertex_indices(),
        |v| successors_of(g, v),
        |v| predecessors_of(g, v),
    )
}
