//! Iterative cycle detection.

use super::{HashMap, HashSet, successors_of, undirected_neighbors_of};
use crate::{Graph, VertexIndex};

enum Step {
    Descend(VertexIndex),
    Close(VertexIndex),
    Finish,
}

/// Finds a directed cycle among `vertices`, following `successors`.
///
/// The returned vertices are in arc order: `c[i] -> c[i + 1]` and `c[last] -> c[0]`.
pub fn find_directed_cycle<S, SI>(vertices: &[VertexIndex], successors: S) -> Option<Vec<VertexIndex>>
where
    S: Fn(VertexIndex) -> SI,
    SI: IntoIterator<Item = VertexIndex>,
{
    let members: HashSet<VertexIndex> = vertices.iter().copied().collect();
    // Present and `true`: on the current DFS path. Present and `false`: fully explored.
    let mut on_path: HashMap<VertexIndex, bool> = HashMap::default();

    for &root in vertices {
        if on_path.contains_key(&root) {
            continue;
        }
        on_path.insert(root, true);
        let mut stack: Vec<(VertexIndex, SI::IntoIter)> = vec![(root, successors(root).into_iter())];
        loop {
            let Some((v, children)) = stack.last_mut() else {
                break;
            };
            let v = *v;
            let mut step = Step::Finish;
            for w in children.by_ref() {
                if !members.contains(&w) {
                    continue;
                }
                match on_path.get(&w) {
                    None => {
                        step = Step::Descend(w);
                        break;
                    }
                    Some(true) => {
                        step = Step::Close(w);
                        break;
                    }
                    Some(false) => {}
                }
            }
            match step {
                Step::Descend(w) => {
                    on_path.insert(w, true);
                    stack.push((w, successors(w).into_iter()));
                }
                Step::Close(w) => {
                    let start = stack.iter().position(|(u, _)| *u == w)?;
                    return Some(stack[start..].iter().map(|(u, _)| *u).collect());
                }
                Step::Finish => {
                    on_path.insert(v, false);
                    stack.pop();
                }
            }
        }
    }
    None
}

/// A directed cycle made of arcs of `g`, if any.
pub fn directed_cycle<V, L>(g: &Graph<V, L>) -> Option<Vec<VertexIndex>> {
    find_directed_cycle(&g.vertex_indices(), |v| successors_of(g, v))
}

/// Finds a cycle among `vertices` in the undirected graph given by `neighbors`.
///
/// `neighbors` must be symmetric and free of parallel edges. Consecutive vertices of the result
/// (and the last and the first) are adjacent.
pub fn find_undirected_cycle<N, NI>(vertices: &[VertexIndex], neighbors: N) -> Option<Vec<VertexIndex>>
where
    N: Fn(VertexIndex) -> NI,
    NI: IntoIterator<Item = VertexIndex>,
{
    let members: HashSet<VertexIndex> = vertices.iter().copied().collect();
    let mut visited: HashSet<VertexIndex> = HashSet::default();

    for &root in vertices {
        if !visited.insert(root) {
            continue;
        }
        // Depth of every vertex on the current DFS path.
        let mut depth: HashMap<VertexIndex, usize> = HashMap::default();
        depth.insert(root, 0);
        let mut stack: Vec<(VertexIndex, Option<VertexIndex>, NI::IntoIter)> =
            vec![(root, None, neighbors(root).into_iter())];
        loop {
            let Some((v, parent, children)) = stack.last_mut() else {
                break;
            };
            let v = *v;
            let parent = *parent;
            let mut step = Step::Finish;
            for w in children.by_ref() {
                if Some(w) == parent || !members.contains(&w) {
                    continue;
                }
                if depth.contains_key(&w) {
                    step = Step::Close(w);
                    break;
                }
                if visited.insert(w) {
                    step = Step::Descend(w);
                    break;
                }
            }
            match step {
                Step::Descend(w) => {
                    depth.insert(w, stack.len());
                    stack.push((w, Some(v), neighbors(w).into_iter()));
                }
                Step::Close(w) => {
                    let start = depth.get(&w).copied()?;
                    return Some(stack[start..].iter().map(|(u, _, _)| *u).collect());
                }
                Step::Finish => {
                    depth.remove(&v);
                    stack.pop();
                }
            }
        }
    }
    None
}

/// A cycle made of undirected edges of `g`, if any.
pub fn undirected_cycle<V, L>(g: &Graph<V, L>) -> Option<Vec<VertexIndex>> {
    find_undirected_cycle(&g.vertex_indices(), |v| undirected_neighbors_of(g, v))
}
