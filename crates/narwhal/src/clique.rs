//! Maximum clique.
//!
//! Every vertex seeds a clique that is extended only with vertices of the common neighborhood
//! of its members. The record is shared across seeds, and a branch is cut as soon as
//! `|clique| + |candidates|` cannot beat it.

use crate::graphlib::{Graph, VertexIndex};
use crate::search::{Budget, SolverOptions, Unbounded};
use crate::view::UndirectedView;
use std::collections::BTreeSet;

/// A maximum clique. `sample`, when it is a clique of `g`, seeds the record.
pub fn maximum_clique<V, L>(g: &Graph<V, L>, sample: Option<&[VertexIndex]>) -> BTreeSet<VertexIndex> {
    let Ok(clique) = maximum_clique_with(
        g,
        sample,
        &SolverOptions::default(),
        &mut Unbounded::default(),
    );
    clique
}

pub fn clique_number<V, L>(g: &Graph<V, L>, sample: Option<&[VertexIndex]>) -> usize {
    maximum_clique(g, sample).len()
}

pub fn clique_number_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    sample: Option<&[VertexIndex]>,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<usize, B::Interrupt> {
    Ok(maximum_clique_with(g, sample, opts, budget)?.len())
}

pub fn maximum_clique_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    sample: Option<&[VertexIndex]>,
    _opts: &SolverOptions,
    budget: &mut B,
) -> Result<BTreeSet<VertexIndex>, B::Interrupt> {
    let view = UndirectedView::new(g);
    let mut search = CliqueSearch {
        view: &view,
        best: seed_record(&view, sample),
        current: Vec::new(),
    };
    tracing::debug!(record = search.best.len(), "clique: initial record");

    for v in 0..view.len() {
        let mut candidates: Vec<usize> = view.neighbors(v).iter().copied().filter(|&u| u > v).collect();
        candidates.sort_unstable();
        search.current.push(v);
        let extended = search.extend(&candidates, budget);
        search.current.pop();
        extended?;
    }

    tracing::debug!(size = search.best.len(), explored = budget.explored(), "clique: done");
    Ok(view.to_ids(search.best))
}

fn seed_record(view: &UndirectedView, sample: Option<&[VertexIndex]>) -> Vec<usize> {
    let Some(sample) = sample else {
        return Vec::new();
    };
    let positions: Option<Vec<usize>> = sample.iter().map(|&v| view.position(v)).collect();
    let Some(mut positions) = positions else {
        tracing::warn!(?sample, "clique: sample names unknown vertices, ignored");
        return Vec::new();
    };
    positions.sort_unstable();
    positions.dedup();
    let is_clique = positions
        .iter()
        .enumerate()
        .all(|(k, &a)| positions[k + 1..].iter().all(|&b| view.adjacent(a, b)));
    if !is_clique {
        tracing::warn!(?sample, "clique: sample is not a clique, ignored");
        return Vec::new();
    }
    positions
}

struct CliqueSearch<'a> {
    view: &'a UndirectedView,
    best: Vec<usize>,
    current: Vec<usize>,
}

impl CliqueSearch<'_> {
    fn extend<B: Budget>(&mut self, candidates: &[usize], budget: &mut B) -> Result<(), B::Interrupt> {
        budget.tick()?;
        if self.current.len() > self.best.len() {
            self.best = self.current.clone();
            tracing::trace!(size = self.best.len(), "clique: new record");
        }
        for (i, &u) in candidates.iter().enumerate() {
            if self.current.len() + (candidates.len() - i) <= self.best.len() {
                break;
            }
            let next: Vec<usize> = candidates[i + 1..]
                .iter()
                .copied()
                .filter(|&w| self.view.adjacent(u, w))
                .collect();
            self.current.push(u);
            let extended = self.extend(&next, budget);
            self.current.pop();
            extended?;
        }
        Ok(())
    }
}
