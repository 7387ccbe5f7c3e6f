//! Chromatic number and a proper coloring achieving it.
//!
//! Backtracking over colors `1..=k` for increasing `k`, starting from the size of a greedy clique.
//! Every uncolored vertex keeps a domain of still-available colors; the most constrained vertex
//! is colored first, and assigning a color removes it from the domains of uncolored neighbors.
//! Those removals are recorded and reverted exactly on backtrack.
//!
//! Known cliques can be passed as hints: a branch is infeasible as soon as the uncolored members
//! of a clique have fewer available colors between them than there are uncolored members.

use crate::bounds;
use crate::graphlib::{Graph, VertexIndex};
use crate::search::{Budget, SolverOptions, Unbounded, UndoLog};
use crate::view::UndirectedView;
use std::collections::BTreeMap;

pub fn minimal_proper_coloring<V, L>(
    g: &Graph<V, L>,
    cliques: &[Vec<VertexIndex>],
) -> BTreeMap<VertexIndex, usize> {
    let Ok(coloring) = minimal_proper_coloring_with(
        g,
        cliques,
        &SolverOptions::default(),
        &mut Unbounded::default(),
    );
    coloring
}

pub fn chromatic_number<V, L>(g: &Graph<V, L>, cliques: &[Vec<VertexIndex>]) -> usize {
    let Ok(k) = chromatic_number_with(
        g,
        cliques,
        &SolverOptions::default(),
        &mut Unbounded::default(),
    );
    k
}

pub fn chromatic_number_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    cliques: &[Vec<VertexIndex>],
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<usize, B::Interrupt> {
    let coloring = minimal_proper_coloring_with(g, cliques, opts, budget)?;
    Ok(coloring.values().copied().max().unwrap_or(0))
}

/// A proper coloring with colors `1..=k`, `k` being the chromatic number.
pub fn minimal_proper_coloring_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    cliques: &[Vec<VertexIndex>],
    _opts: &SolverOptions,
    budget: &mut B,
) -> Result<BTreeMap<VertexIndex, usize>, B::Interrupt> {
    let view = UndirectedView::new(g);
    let n = view.len();
    if n == 0 {
        return Ok(BTreeMap::new());
    }

    let hints = valid_hints(&view, cliques);
    let lower = hints
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(bounds::clique(&view).len()))
        .max()
        .unwrap_or(1)
        .max(1);
    tracing::debug!(lower, hints = hints.len(), "coloring: clique bound");

    for k in lower..=n {
        tracing::trace!(k, "coloring: trying colors");
        let mut search = ColoringSearch::new(&view, &hints, k);
        if search.search(0, budget)? {
            debug_assert!(search.log.is_empty());
            tracing::debug!(k, explored = budget.explored(), "coloring: done");
            let colors = search.found.unwrap_or_default();
            return Ok(colors
                .into_iter()
                .enumerate()
                .map(|(i, c)| (view.id(i), c))
                .collect());
        }
    }
    // `n` colors always suffice.
    Ok((0..n).map(|i| (view.id(i), i + 1)).collect())
}

fn valid_hints(view: &UndirectedView, cliques: &[Vec<VertexIndex>]) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for clique in cliques {
        let positions: Option<Vec<usize>> = clique.iter().map(|&v| view.position(v)).collect();
        let Some(mut positions) = positions else {
            tracing::warn!(?clique, "coloring: hint names unknown vertices, ignored");
            continue;
        };
        positions.sort_unstable();
        positions.dedup();
        let is_clique = positions
            .iter()
            .enumerate()
            .all(|(k, &a)| positions[k + 1..].iter().all(|&b| view.adjacent(a, b)));
        if !is_clique {
            tracing::warn!(?clique, "coloring: hint is not a clique, ignored");
            continue;
        }
        if positions.len() > 1 {
            out.push(positions);
        }
    }
    out
}

enum Undo {
    Assign(usize),
    Remove(usize, usize),
}

struct ColoringSearch<'a> {
    view: &'a UndirectedView,
    hints: &'a [Vec<usize>],
    k: usize,
    /// `0` while uncolored.
    color: Vec<usize>,
    /// `domain[v][c]` for colors `1..=k`; index `0` is unused.
    domain: Vec<Vec<bool>>,
    domain_size: Vec<usize>,
    log: UndoLog<Undo>,
    found: Option<Vec<usize>>,
}

impl<'a> ColoringSearch<'a> {
    fn new(view: &'a UndirectedView, hints: &'a [Vec<usize>], k: usize) -> Self {
        let n = view.len();
        let mut row = vec![true; k + 1];
        row[0] = false;
        Self {
            view,
            hints,
            k,
            color: vec![0; n],
            domain: vec![row; n],
            domain_size: vec![k; n],
            log: UndoLog::default(),
            found: None,
        }
    }

    /// The uncolored vertex with the smallest domain, preferring higher degree on ties.
    fn most_constrained(&self) -> Option<usize> {
        (0..self.color.len())
            .filter(|&v| self.color[v] == 0)
            .min_by_key(|&v| (self.domain_size[v], std::cmp::Reverse(self.view.degree(v))))
    }

    fn hints_feasible(&self) -> bool {
        self.hints.iter().all(|clique| {
            let open: Vec<usize> = clique.iter().copied().filter(|&v| self.color[v] == 0).collect();
            if open.is_empty() {
                return true;
            }
            let available = (1..=self.k)
                .filter(|&c| open.iter().any(|&v| self.domain[v][c]))
                .count();
            available >= open.len()
        })
    }

    fn assign(&mut self, v: usize, c: usize) {
        self.color[v] = c;
        self.log.record(Undo::Assign(v));
        for &u in self.view.neighbors(v) {
            if self.color[u] == 0 && self.domain[u][c] {
                self.domain[u][c] = false;
                self.domain_size[u] -= 1;
                self.log.record(Undo::Remove(u, c));
            }
        }
    }

    fn undo_to(&mut self, mark: usize) {
        while let Some(op) = self.log.pop_to(mark) {
            match op {
                Undo::Assign(v) => self.color[v] = 0,
                Undo::Remove(u, c) => {
                    self.domain[u][c] = true;
                    self.domain_size[u] += 1;
                }
            }
        }
    }

    /// Colors the remaining vertices using colors `1..=k`, where `1..=max_used` already appear.
    fn search<B: Budget>(&mut self, max_used: usize, budget: &mut B) -> Result<bool, B::Interrupt> {
        budget.tick()?;
        let Some(v) = self.most_constrained() else {
            self.found = Some(self.color.clone());
            return Ok(true);
        };
        if self.domain_size[v] == 0 || !self.hints_feasible() {
            return Ok(false);
        }

        // Colors above `max_used` are interchangeable; trying the lowest one is enough.
        let limit = self.k.min(max_used + 1);
        for c in 1..=limit {
            if !self.domain[v][c] {
                continue;
            }
            let mark = self.log.mark();
            self.assign(v, c);
            let colored = self.search(max_used.max(c), budget);
            self.undo_to(mark);
            if colored? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
