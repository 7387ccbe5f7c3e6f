//! Distance-based invariants: radius and geometric stretch.

use super::{EdgeLength, floyd_warshall};
use crate::{Graph, VertexIndex};

/// Smallest eccentricity over all vertices, together with the first vertex (in stacked order)
/// attaining it. `None` for the empty graph, and when no vertex reaches every other one.
pub fn radius<V, L>(g: &Graph<V, L>, length: EdgeLength) -> Option<(f64, VertexIndex)> {
    let paths = floyd_warshall(g, length);
    let mut best: Option<(f64, VertexIndex)> = None;
    for &v in paths.vertices() {
        let Some(e) = paths.eccentricity(v) else {
            continue;
        };
        if best.is_none_or(|(r, _)| e < r) {
            best = Some((e, v));
        }
    }
    best
}

/// The worst detour of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Stretch {
    /// Shortest path length over straight-line distance, maximized over vertex pairs.
    /// Infinite when some pair is disconnected.
    pub ratio: f64,
    /// A shortest path realizing `ratio`, or just the two endpoints when they are disconnected.
    /// Empty when there is no pair to compare.
    pub path: Vec<VertexIndex>,
}

/// Stretch of `g` as drawn: path lengths and straight-line distances are both Euclidean in the
/// vertex positions. Pairs at the same position are skipped. A graph with fewer than two
/// vertices has ratio `1`.
pub fn stretch<V, L>(g: &Graph<V, L>) -> Stretch {
    let paths = floyd_warshall(g, EdgeLength::Euclidean);
    let mut best: Option<Stretch> = None;

    for u in g.vertices() {
        for v in g.vertices() {
            if u.index() == v.index() {
                continue;
            }
            let straight = u.pos.distance(&v.pos);
            if straight <= 0.0 {
                continue;
            }
            let candidate = match paths.path(u.index(), v.index()) {
                Some(path) => Stretch {
                    ratio: paths.distance(u.index(), v.index()).unwrap_or(f64::INFINITY)
                        / straight,
                    path,
                },
                None => Stretch {
                    ratio: f64::INFINITY,
                    path: vec![u.index(), v.index()],
                },
            };
            if best.as_ref().is_none_or(|b| candidate.ratio > b.ratio) {
                best = Some(candidate);
            }
        }
    }

    best.unwrap_or(Stretch {
        ratio: 1.0,
        path: Vec::new(),
    })
}
