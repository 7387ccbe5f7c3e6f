//! Minimum vertex cover.
//!
//! Iterative deepening over the cover size `k`, starting from the size of a greedy maximal
//! matching. Each round runs a bounded search tree: vertices whose live degree exceeds the
//! remaining budget are forced into the cover (they must belong to every cover of size `k`),
//! then the search branches on the two endpoints of a live edge.

use crate::bounds;
use crate::graphlib::{Graph, VertexIndex};
use crate::search::{Budget, SolverOptions, Unbounded, UndoLog};
use crate::view::UndirectedView;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

pub fn min_vertex_cover<V, L>(g: &Graph<V, L>) -> BTreeSet<VertexIndex> {
    let Ok(cover) = min_vertex_cover_with(g, &SolverOptions::default(), &mut Unbounded::default());
    cover
}

pub fn vertex_cover_number<V, L>(g: &Graph<V, L>) -> usize {
    min_vertex_cover(g).len()
}

pub fn vertex_cover_number_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<usize, B::Interrupt> {
    Ok(min_vertex_cover_with(g, opts, budget)?.len())
}

pub fn min_vertex_cover_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<BTreeSet<VertexIndex>, B::Interrupt> {
    let view = UndirectedView::new(g);
    let mut search = CoverSearch::new(&view);
    if search.edges.is_empty() {
        return Ok(BTreeSet::new());
    }

    let mut rng = StdRng::seed_from_u64(opts.random_seed);
    let lower = bounds::matching(&view, &mut rng).len();
    tracing::debug!(lower, edges = search.edges.len(), "vertex cover: matching bound");

    // Without self-loops any `n - 1` vertices cover every edge.
    let n = view.len();
    for k in lower..n {
        tracing::trace!(k, "vertex cover: trying size");
        if search.search(k, budget)? {
            debug_assert!(search.log.is_empty());
            let found = search.found.take().unwrap_or_default();
            tracing::debug!(size = found.len(), explored = budget.explored(), "vertex cover: done");
            return Ok(view.to_ids(found));
        }
    }
    Ok(view.to_ids(0..n))
}

enum Undo {
    Kill(usize),
    Select,
}

struct CoverSearch {
    edges: Vec<(usize, usize)>,
    incident: Vec<Vec<usize>>,
    alive: Vec<bool>,
    alive_count: usize,
    degree: Vec<usize>,
    selection: Vec<usize>,
    log: UndoLog<Undo>,
    found: Option<Vec<usize>>,
}

impl CoverSearch {
    fn new(view: &UndirectedView) -> Self {
        let edges = view.edges();
        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); view.len()];
        for (e, &(a, b)) in edges.iter().enumerate() {
            incident[a].push(e);
            incident[b].push(e);
        }
        let degree = incident.iter().map(Vec::len).collect();
        Self {
            alive: vec![true; edges.len()],
            alive_count: edges.len(),
            edges,
            incident,
            degree,
            selection: Vec::new(),
            log: UndoLog::default(),
            found: None,
        }
    }

    fn select(&mut self, v: usize) {
        self.selection.push(v);
        self.log.record(Undo::Select);
        for i in 0..self.incident[v].len() {
            let e = self.incident[v][i];
            if !self.alive[e] {
                continue;
            }
            let (a, b) = self.edges[e];
            self.alive[e] = false;
            self.alive_count -= 1;
            self.degree[a] -= 1;
            self.degree[b] -= 1;
            self.log.record(Undo::Kill(e));
        }
    }

    fn undo_to(&mut self, mark: usize) {
        while let Some(op) = self.log.pop_to(mark) {
            match op {
                Undo::Kill(e) => {
                    let (a, b) = self.edges[e];
                    self.alive[e] = true;
                    self.alive_count += 1;
                    self.degree[a] += 1;
                    self.degree[b] += 1;
                }
                Undo::Select => {
                    self.selection.pop();
                }
            }
        }
    }

    /// Looks for a cover of size at most `k` extending the current selection.
    fn search<B: Budget>(&mut self, k: usize, budget: &mut B) -> Result<bool, B::Interrupt> {
        budget.tick()?;
        let mark = self.log.mark();
        let result = self.kernelize_and_branch(k, budget);
        self.undo_to(mark);
        result
    }

    fn kernelize_and_branch<B: Budget>(
        &mut self,
        k: usize,
        budget: &mut B,
    ) -> Result<bool, B::Interrupt> {
        loop {
            if self.selection.len() > k {
                return Ok(false);
            }
            let slack = k - self.selection.len();
            match (0..self.degree.len()).find(|&v| self.degree[v] > slack) {
                Some(v) => self.select(v),
                None => break,
            }
        }

        if self.alive_count == 0 {
            self.found = Some(self.selection.clone());
            return Ok(true);
        }
        let slack = k - self.selection.len();
        // Every live degree is now at most `slack`, so `slack` vertices cover at most
        // `slack * slack` edges.
        if slack == 0 || self.alive_count > slack * slack {
            return Ok(false);
        }

        let Some(e) = (0..self.edges.len()).find(|&e| self.alive[e]) else {
            return Ok(false);
        };
        let (a, b) = self.edges[e];
        for v in [a, b] {
            let mark = self.log.mark();
            self.select(v);
            let found = self.search(k, budget);
            self.undo_to(mark);
            if found? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
