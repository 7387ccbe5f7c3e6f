//! Minimum quasi-kernel of the arcs.
//!
//! A quasi-kernel is a set `Q` with no arc between two of its members such that every vertex
//! lies in `Q` or reaches a member of `Q` along at most two arcs. Every digraph has one, so the
//! minimum always exists. Undirected edges are ignored: a vertex without outgoing arcs belongs
//! to every quasi-kernel.
//!
//! The search picks the first vertex not yet reached and branches on each of the at most
//! `1 + d + d²` vertices that could reach it. A candidate that has been tried is banned for its
//! later siblings, so every set is explored once.

use crate::graphlib::{Graph, VertexIndex};
use crate::search::{Budget, SolverOptions, Unbounded};
use crate::view::DirectedView;
use std::collections::BTreeSet;

pub fn min_quasi_kernel<V, L>(g: &Graph<V, L>) -> BTreeSet<VertexIndex> {
    let Ok(set) = min_quasi_kernel_with(g, &SolverOptions::default(), &mut Unbounded::default());
    set
}

pub fn quasi_kernel_number<V, L>(g: &Graph<V, L>) -> usize {
    min_quasi_kernel(g).len()
}

pub fn quasi_kernel_number_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<usize, B::Interrupt> {
    Ok(min_quasi_kernel_with(g, opts, budget)?.len())
}

pub fn min_quasi_kernel_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    _opts: &SolverOptions,
    budget: &mut B,
) -> Result<BTreeSet<VertexIndex>, B::Interrupt> {
    let view = DirectedView::new(g);
    let mut search = KernelSearch::new(&view);
    search.search(budget)?;
    debug_assert!(search.selection.is_empty());
    let best = search.best.unwrap_or_default();
    tracing::debug!(size = best.len(), explored = budget.explored(), "quasi-kernel: done");
    Ok(view.to_ids(best))
}

struct KernelSearch {
    /// `reach[v]`: `v` and every vertex at most two arcs ahead of it.
    reach: Vec<Vec<usize>>,
    /// `reached_by[q]`: the vertices whose `reach` contains `q`.
    reached_by: Vec<Vec<usize>>,
    /// `v` and its in- and out-neighbors.
    touching: Vec<Vec<usize>>,
    /// Members of the selection within reach.
    covered: Vec<u32>,
    /// Members of the selection equal or adjacent to the vertex.
    blocked: Vec<u32>,
    banned: Vec<bool>,
    selection: Vec<usize>,
    best: Option<Vec<usize>>,
}

impl KernelSearch {
    fn new(view: &DirectedView) -> Self {
        let n = view.len();
        let mut reach: Vec<Vec<usize>> = Vec::with_capacity(n);
        let mut touching: Vec<Vec<usize>> = Vec::with_capacity(n);
        for v in 0..n {
            let mut r = vec![v];
            for &w in &view.out[v] {
                r.push(w);
                r.extend(view.out[w].iter().copied());
            }
            dedup_keep_first(&mut r);
            reach.push(r);

            let mut t = vec![v];
            t.extend(view.out[v].iter().copied());
            t.extend(view.inc[v].iter().copied());
            dedup_keep_first(&mut t);
            touching.push(t);
        }
        let mut reached_by: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (w, r) in reach.iter().enumerate() {
            for &q in r {
                reached_by[q].push(w);
            }
        }
        Self {
            reach,
            reached_by,
            touching,
            covered: vec![0; n],
            blocked: vec![0; n],
            banned: vec![false; n],
            selection: Vec::new(),
            best: None,
        }
    }

    fn select(&mut self, q: usize) {
        self.selection.push(q);
        for &w in &self.reached_by[q] {
            self.covered[w] += 1;
        }
        for &u in &self.touching[q] {
            self.blocked[u] += 1;
        }
    }

    fn unselect(&mut self, q: usize) {
        self.selection.pop();
        for &w in &self.reached_by[q] {
            self.covered[w] -= 1;
        }
        for &u in &self.touching[q] {
            self.blocked[u] -= 1;
        }
    }

    fn beaten(&self) -> bool {
        self.best
            .as_ref()
            .is_some_and(|b| self.selection.len() + 1 >= b.len())
    }

    fn search<B: Budget>(&mut self, budget: &mut B) -> Result<(), B::Interrupt> {
        budget.tick()?;
        let Some(v) = (0..self.covered.len()).find(|&v| self.covered[v] == 0) else {
            if self
                .best
                .as_ref()
                .is_none_or(|b| self.selection.len() < b.len())
            {
                tracing::trace!(size = self.selection.len(), "quasi-kernel: new record");
                self.best = Some(self.selection.clone());
            }
            return Ok(());
        };
        if self.beaten() {
            return Ok(());
        }

        let candidates: Vec<usize> = self.reach[v]
            .iter()
            .copied()
            .filter(|&c| self.blocked[c] == 0 && !self.banned[c])
            .collect();
        let mut tried: Vec<usize> = Vec::new();
        let mut result = Ok(());
        for c in candidates {
            self.select(c);
            let explored = self.search(budget);
            self.unselect(c);
            if explored.is_err() {
                result = explored;
                break;
            }
            self.banned[c] = true;
            tried.push(c);
            if self.beaten() {
                break;
            }
        }
        for c in tried {
            self.banned[c] = false;
        }
        result
    }
}

fn dedup_keep_first(list: &mut Vec<usize>) {
    let mut seen = BTreeSet::new();
    list.retain(|&x| seen.insert(x));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Limits;

    #[test]
    fn reach_covers_two_arcs_ahead() {
        let g: Graph = Graph::from_arcs(&[(0, 1), (1, 2), (2, 3), (1, 0)]).unwrap();
        let search = KernelSearch::new(&DirectedView::new(&g));
        assert_eq!(search.reach[0], vec![0, 1, 2]);
        assert_eq!(search.reach[3], vec![3]);
        assert_eq!(search.touching[1], vec![1, 2, 0]);
        assert!(search.reached_by[2].contains(&0));
    }

    #[test]
    fn interrupted_searches_restore_the_counters() {
        let arcs: Vec<(usize, usize)> = (0..13).map(|v| (v, (v + 1) % 13)).collect();
        let g: Graph = Graph::from_arcs(&arcs).unwrap();
        let view = DirectedView::new(&g);
        let mut interrupted = 0;
        for cap in 1..80 {
            let mut search = KernelSearch::new(&view);
            let mut limits = Limits::new().with_max_nodes(cap);
            if search.search(&mut limits).is_err() {
                interrupted += 1;
            }
            assert!(search.selection.is_empty(), "cap {cap}");
            assert!(search.covered.iter().all(|&c| c == 0), "cap {cap}");
            assert!(search.blocked.iter().all(|&b| b == 0), "cap {cap}");
            assert!(search.banned.iter().all(|&b| !b), "cap {cap}");
        }
        assert!(interrupted > 0);
    }
}
