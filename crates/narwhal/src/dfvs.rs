//! Minimum directed feedback vertex set.
//!
//! The active vertex set is split into strongly connected components. Cycles never cross
//! components, so several non-trivial components are solved independently and their solutions
//! united. A single component is solved by branching on one of its vertices: first keeping it
//! (it becomes excluded from the solution for the rest of that branch), then removing it from
//! the working digraph.
//!
//! Removing a vertex strips it from the successor and predecessor lists of its neighbors. Every
//! stripped entry is recorded with its position and re-inserted at that exact position before
//! the branch returns.

use crate::graphlib::{Graph, VertexIndex, alg};
use crate::search::{Budget, SolverOptions, Unbounded};
use crate::view::DirectedView;
use std::collections::BTreeSet;

pub fn min_directed_feedback_vertex_set<V, L>(g: &Graph<V, L>) -> BTreeSet<VertexIndex> {
    let Ok(set) = min_directed_feedback_vertex_set_with(
        g,
        &SolverOptions::default(),
        &mut Unbounded::default(),
    );
    set
}

pub fn directed_feedback_vertex_set_number<V, L>(g: &Graph<V, L>) -> usize {
    min_directed_feedback_vertex_set(g).len()
}

pub fn directed_feedback_vertex_set_number_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<usize, B::Interrupt> {
    Ok(min_directed_feedback_vertex_set_with(g, opts, budget)?.len())
}

pub fn min_directed_feedback_vertex_set_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    _opts: &SolverOptions,
    budget: &mut B,
) -> Result<BTreeSet<VertexIndex>, B::Interrupt> {
    let view = DirectedView::new(g);
    let n = view.len();
    let mut search = FeedbackSearch {
        out: view.out.clone(),
        inc: view.inc.clone(),
        excluded: vec![false; n],
    };
    let members: Vec<usize> = (0..n).collect();
    // With nothing excluded, removing every vertex is always feasible.
    let best = search.solve(members, n + 1, budget)?.unwrap_or_default();
    debug_assert_eq!(search.out, view.out);
    debug_assert_eq!(search.inc, view.inc);
    tracing::debug!(size = best.len(), explored = budget.explored(), "dfvs: done");
    Ok(view.to_ids(best))
}

/// One stripped adjacency entry: `list[owner]` held the removed vertex at `position`.
struct Stripped {
    successors: bool,
    owner: usize,
    position: usize,
}

struct FeedbackSearch {
    out: Vec<Vec<usize>>,
    inc: Vec<Vec<usize>>,
    /// Vertices kept by an ancestor branch; they may not be selected.
    excluded: Vec<bool>,
}

impl FeedbackSearch {
    fn remove_vertex(&mut self, v: usize) -> Vec<Stripped> {
        let mut stripped = Vec::new();
        for i in 0..self.out[v].len() {
            let w = self.out[v][i];
            if let Some(position) = self.inc[w].iter().position(|&x| x == v) {
                self.inc[w].remove(position);
                stripped.push(Stripped {
                    successors: false,
                    owner: w,
                    position,
                });
            }
        }
        for i in 0..self.inc[v].len() {
            let u = self.inc[v][i];
            if let Some(position) = self.out[u].iter().position(|&x| x == v) {
                self.out[u].remove(position);
                stripped.push(Stripped {
                    successors: true,
                    owner: u,
                    position,
                });
            }
        }
        stripped
    }

    fn restore_vertex(&mut self, v: usize, stripped: Vec<Stripped>) {
        for s in stripped.into_iter().rev() {
            let list = if s.successors {
                &mut self.out[s.owner]
            } else {
                &mut self.inc[s.owner]
            };
            list.insert(s.position, v);
        }
    }

    /// A minimum feedback vertex set of the subgraph induced by `members`, avoiding excluded
    /// vertices, provided one smaller than `limit` exists.
    fn solve<B: Budget>(
        &mut self,
        members: Vec<usize>,
        limit: usize,
        budget: &mut B,
    ) -> Result<Option<Vec<usize>>, B::Interrupt> {
        budget.tick()?;
        if members.len() <= 1 {
            return Ok(Some(Vec::new()));
        }

        let (out, inc) = (&self.out, &self.inc);
        let components: Vec<Vec<usize>> = alg::kosaraju(
            &members,
            move |v| out[v].iter().copied(),
            move |v| inc[v].iter().copied(),
        )
        .into_iter()
        .filter(|c| c.len() > 1)
        .collect();

        match components.len() {
            0 => Ok(Some(Vec::new())),
            1 if components[0].len() == members.len() => self.branch(members, limit, budget),
            _ => {
                let mut total: Vec<usize> = Vec::new();
                let count = components.len();
                for (k, component) in components.into_iter().enumerate() {
                    // Each later component needs at least one vertex of its own.
                    let later = count - k - 1;
                    let Some(sub_limit) = limit.checked_sub(total.len() + later) else {
                        return Ok(None);
                    };
                    match self.solve(component, sub_limit, budget)? {
                        Some(part) => total.extend(part),
                        None => return Ok(None),
                    }
                }
                Ok(Some(total))
            }
        }
    }

    /// `members` form one strongly connected component of at least two vertices.
    fn branch<B: Budget>(
        &mut self,
        members: Vec<usize>,
        limit: usize,
        budget: &mut B,
    ) -> Result<Option<Vec<usize>>, B::Interrupt> {
        // A cycle remains, so at least one vertex is needed.
        if limit <= 1 {
            return Ok(None);
        }
        let Some(v) = members
            .iter()
            .copied()
            .filter(|&v| !self.excluded[v])
            .max_by_key(|&v| self.out[v].len() * self.inc[v].len())
        else {
            return Ok(None);
        };

        let mut best: Option<Vec<usize>> = None;
        let mut bound = limit;

        self.excluded[v] = true;
        let kept = self.solve(members.clone(), bound, budget);
        self.excluded[v] = false;
        if let Some(found) = kept? {
            bound = found.len();
            best = Some(found);
        }

        if bound > 1 {
            let rest: Vec<usize> = members.into_iter().filter(|&u| u != v).collect();
            let stripped = self.remove_vertex(v);
            let removed = self.solve(rest, bound - 1, budget);
            self.restore_vertex(v, stripped);
            if let Some(mut found) = removed? {
                found.push(v);
                tracing::trace!(size = found.len(), "dfvs: new record");
                best = Some(found);
            }
        }
        Ok(best)
    }
}
