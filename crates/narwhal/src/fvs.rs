//! Minimum feedback vertex set of the undirected part: a smallest vertex set whose removal
//! leaves a forest.
//!
//! Each search node looks for a cycle among the remaining vertices. One of its vertices has to
//! go, so the search branches on the cycle vertex of highest degree that is still allowed:
//! first removing it, then keeping it for the rest of the branch. Kept vertices are never
//! selected; a cycle made only of kept vertices closes the branch.
//!
//! Removing `S` deletes at most the sum of the degrees of `S`, and a forest on `r` vertices has
//! at most `r - 1` edges. The smallest `|S|` compatible with both is a lower bound checked at
//! every node.

use crate::graphlib::{Graph, VertexIndex, alg};
use crate::search::{Budget, SolverOptions, Unbounded};
use crate::view::UndirectedView;
use std::collections::BTreeSet;

pub fn min_feedback_vertex_set<V, L>(g: &Graph<V, L>) -> BTreeSet<VertexIndex> {
    let Ok(set) =
        min_feedback_vertex_set_with(g, &SolverOptions::default(), &mut Unbounded::default());
    set
}

pub fn feedback_vertex_set_number<V, L>(g: &Graph<V, L>) -> usize {
    min_feedback_vertex_set(g).len()
}

pub fn feedback_vertex_set_number_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<usize, B::Interrupt> {
    Ok(min_feedback_vertex_set_with(g, opts, budget)?.len())
}

pub fn min_feedback_vertex_set_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    _opts: &SolverOptions,
    budget: &mut B,
) -> Result<BTreeSet<VertexIndex>, B::Interrupt> {
    let view = UndirectedView::new(g);
    let n = view.len();
    let mut search = ForestSearch::new(&view);
    let members: Vec<usize> = (0..n).collect();
    // With nothing kept, removing every vertex is always feasible.
    let best = search.solve(members, n + 1, budget)?.unwrap_or_default();
    debug_assert_eq!(search.adj, view.adjacency());
    tracing::debug!(size = best.len(), explored = budget.explored(), "fvs: done");
    Ok(view.to_ids(best))
}

/// `adj[owner]` held the removed vertex at `position`.
struct Stripped {
    owner: usize,
    position: usize,
}

struct ForestSearch {
    adj: Vec<Vec<usize>>,
    kept: Vec<bool>,
}

impl ForestSearch {
    fn new(view: &UndirectedView) -> Self {
        Self {
            adj: view.adjacency().to_vec(),
            kept: vec![false; view.len()],
        }
    }

    fn remove_vertex(&mut self, v: usize) -> Vec<Stripped> {
        let mut stripped = Vec::new();
        for i in 0..self.adj[v].len() {
            let w = self.adj[v][i];
            if let Some(position) = self.adj[w].iter().position(|&x| x == v) {
                self.adj[w].remove(position);
                stripped.push(Stripped { owner: w, position });
            }
        }
        stripped
    }

    fn restore_vertex(&mut self, v: usize, stripped: Vec<Stripped>) {
        for s in stripped.into_iter().rev() {
            self.adj[s.owner].insert(s.position, v);
        }
    }

    /// Fewest removable vertices that can turn `members` into a forest.
    fn lower_bound(&self, members: &[usize]) -> usize {
        let edges: usize = members.iter().map(|&v| self.adj[v].len()).sum::<usize>() / 2;
        let mut degrees: Vec<usize> = members
            .iter()
            .filter(|&&v| !self.kept[v])
            .map(|&v| self.adj[v].len())
            .collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));

        let n = members.len();
        let mut removed = 0;
        for (k, d) in std::iter::once(0).chain(degrees).enumerate() {
            removed += d;
            // `n - k` remaining vertices keep at most `n - k - 1` edges.
            if k == n || edges <= removed + (n - k - 1) {
                return k;
            }
        }
        n + 1
    }

    /// A minimum feedback vertex set of the subgraph induced by `members`, avoiding kept
    /// vertices, provided one smaller than `limit` exists.
    fn solve<B: Budget>(
        &mut self,
        members: Vec<usize>,
        limit: usize,
        budget: &mut B,
    ) -> Result<Option<Vec<usize>>, B::Interrupt> {
        budget.tick()?;
        let adj = &self.adj;
        let Some(cycle) = alg::find_undirected_cycle(&members, move |v| adj[v].iter().copied())
        else {
            return Ok(Some(Vec::new()));
        };
        if limit <= 1 || self.lower_bound(&members) >= limit {
            return Ok(None);
        }
        let Some(v) = cycle
            .into_iter()
            .filter(|&v| !self.kept[v])
            .max_by_key(|&v| self.adj[v].len())
        else {
            return Ok(None);
        };

        let mut best: Option<Vec<usize>> = None;
        let mut bound = limit;

        let rest: Vec<usize> = members.iter().copied().filter(|&u| u != v).collect();
        let stripped = self.remove_vertex(v);
        let removed = self.solve(rest, bound - 1, budget);
        self.restore_vertex(v, stripped);
        if let Some(mut found) = removed? {
            found.push(v);
            tracing::trace!(size = found.len(), "fvs: new record");
            bound = found.len();
            best = Some(found);
        }

        self.kept[v] = true;
        let kept = self.solve(members, bound, budget);
        self.kept[v] = false;
        if let Some(found) = kept? {
            best = Some(found);
        }
        Ok(best)
    }
}
