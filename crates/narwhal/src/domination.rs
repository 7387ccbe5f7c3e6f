//! Minimum dominating sets: plain, independent and connected.
//!
//! A greedy distance-2 independent set is computed first. Its size is a lower bound (the closed
//! neighborhoods of its members are disjoint), and when it already dominates the graph it is
//! returned as is. Otherwise a branch-and-bound search picks, at every node, the candidate
//! dominating the most undominated vertices and branches on taking or skipping it.
//!
//! The variants share that skeleton. Each one contributes which vertices are candidates and
//! which complete selections are accepted:
//!
//! | variant       | candidates                                     | accepted when             |
//! |---------------|------------------------------------------------|---------------------------|
//! | `Dominating`  | any vertex that dominates something new        | always                    |
//! | `Independent` | same as `Dominating`                           | no two members adjacent   |
//! | `Connected`   | neighbors of the selection, even with no gain  | selection is connected    |

use crate::bounds;
use crate::graphlib::{Graph, VertexIndex};
use crate::search::{Budget, SolverOptions, Unbounded};
use crate::view::UndirectedView;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DominationVariant {
    #[default]
    Dominating,
    /// Dominating sets that are also independent.
    Independent,
    /// Dominating sets inducing a connected subgraph. Only connected graphs have one.
    Connected,
}

impl DominationVariant {
    fn accepts(self, view: &UndirectedView, subset: &[usize]) -> bool {
        match self {
            Self::Dominating => true,
            Self::Independent => subset
                .iter()
                .enumerate()
                .all(|(k, &a)| subset[k + 1..].iter().all(|&b| !view.adjacent(a, b))),
            Self::Connected => view.is_connected_among(subset),
        }
    }

    /// Whether candidates must touch the current selection once it is non-empty.
    fn grows_from_selection(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Whether a candidate dominating nothing new may still be taken (as a connector).
    fn admits_connectors(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// A minimum dominating set of the requested variant, `None` when the variant has no solution
/// (a connected dominating set of a disconnected graph).
pub fn min_dominating_set<V, L>(
    g: &Graph<V, L>,
    variant: DominationVariant,
) -> Option<BTreeSet<VertexIndex>> {
    let Ok(set) = min_dominating_set_with(
        g,
        variant,
        &SolverOptions::default(),
        &mut Unbounded::default(),
    );
    set
}

pub fn min_connected_dominating_set<V, L>(g: &Graph<V, L>) -> Option<BTreeSet<VertexIndex>> {
    min_dominating_set(g, DominationVariant::Connected)
}

pub fn domination_number<V, L>(g: &Graph<V, L>) -> usize {
    min_dominating_set(g, DominationVariant::Dominating).map_or(0, |s| s.len())
}

pub fn independent_domination_number<V, L>(g: &Graph<V, L>) -> usize {
    min_dominating_set(g, DominationVariant::Independent).map_or(0, |s| s.len())
}

pub fn connected_domination_number<V, L>(g: &Graph<V, L>) -> Option<usize> {
    min_connected_dominating_set(g).map(|s| s.len())
}

pub fn min_dominating_set_with<V, L, B: Budget>(
    g: &Graph<V, L>,
    variant: DominationVariant,
    opts: &SolverOptions,
    budget: &mut B,
) -> Result<Option<BTreeSet<VertexIndex>>, B::Interrupt> {
    let view = UndirectedView::new(g);
    if view.is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    let all: Vec<usize> = (0..view.len()).collect();
    if variant == DominationVariant::Connected && !view.is_connected_among(&all) {
        tracing::debug!("connected domination: graph is disconnected");
        return Ok(None);
    }

    let mut rng = StdRng::seed_from_u64(opts.random_seed);
    let packing = bounds::distance2_independent_set(&view, &mut rng);
    let lower = packing.len();
    tracing::debug!(?variant, lower, "domination: packing bound");

    let mut search = DominationSearch::new(&view, variant, lower);
    for &v in &packing {
        search.select(v);
    }
    if search.undominated == 0 && variant.accepts(&view, &search.subset) {
        tracing::debug!(?variant, size = lower, "domination: packing already dominates");
        return Ok(Some(view.to_ids(packing)));
    }
    for &v in packing.iter().rev() {
        search.unselect(v);
    }

    search.explore(budget)?;
    tracing::debug!(
        ?variant,
        size = search.best.as_ref().map(Vec::len),
        explored = budget.explored(),
        "domination: done"
    );
    Ok(search.best.map(|best| view.to_ids(best)))
}

struct DominationSearch<'a> {
    view: &'a UndirectedView,
    variant: DominationVariant,
    lower: usize,
    /// Number of selected vertices in the closed neighborhood of each vertex.
    covered: Vec<u32>,
    undominated: usize,
    /// Number of selected neighbors of each vertex.
    touching: Vec<u32>,
    selected: Vec<bool>,
    skipped: Vec<bool>,
    subset: Vec<usize>,
    best: Option<Vec<usize>>,
}

impl<'a> DominationSearch<'a> {
    fn new(view: &'a UndirectedView, variant: DominationVariant, lower: usize) -> Self {
        let n = view.len();
        Self {
            view,
            variant,
            lower,
            covered: vec![0; n],
            undominated: n,
            touching: vec![0; n],
            selected: vec![false; n],
            skipped: vec![false; n],
            subset: Vec::new(),
            best: None,
        }
    }

    fn best_len(&self) -> usize {
        self.best.as_ref().map_or(usize::MAX, Vec::len)
    }

    fn gain(&self, v: usize) -> usize {
        usize::from(self.covered[v] == 0)
            + self
                .view
                .neighbors(v)
                .iter()
                .filter(|&&u| self.covered[u] == 0)
                .count()
    }

    fn cover(&mut self, u: usize) {
        if self.covered[u] == 0 {
            self.undominated -= 1;
        }
        self.covered[u] += 1;
    }

    fn uncover(&mut self, u: usize) {
        self.covered[u] -= 1;
        if self.covered[u] == 0 {
            self.undominated += 1;
        }
    }

    fn select(&mut self, v: usize) {
        self.selected[v] = true;
        self.subset.push(v);
        self.cover(v);
        for &u in self.view.neighbors(v) {
            self.cover(u);
            self.touching[u] += 1;
        }
    }

    fn unselect(&mut self, v: usize) {
        for &u in self.view.neighbors(v) {
            self.touching[u] -= 1;
            self.uncover(u);
        }
        self.uncover(v);
        self.subset.pop();
        self.selected[v] = false;
    }

    fn is_open(&self, v: usize) -> bool {
        !self.selected[v] && !self.skipped[v]
    }

    /// The open vertex to branch on, with the most undominated vertices in its closed
    /// neighborhood (lowest index on ties).
    fn candidate(&self) -> Option<usize> {
        let frontier = self.variant.grows_from_selection() && !self.subset.is_empty();
        let mut pick: Option<(usize, usize)> = None;
        for v in 0..self.view.len() {
            if !self.is_open(v) || (frontier && self.touching[v] == 0) {
                continue;
            }
            let gain = self.gain(v);
            if gain == 0 && !self.variant.admits_connectors() {
                continue;
            }
            if pick.is_none_or(|(_, best)| gain > best) {
                pick = Some((v, gain));
            }
        }
        pick.map(|(v, _)| v)
    }

    fn explore<B: Budget>(&mut self, budget: &mut B) -> Result<(), B::Interrupt> {
        budget.tick()?;
        if self.undominated == 0 {
            if self.subset.len() < self.best_len() && self.variant.accepts(self.view, &self.subset) {
                tracing::trace!(size = self.subset.len(), "domination: new record");
                self.best = Some(self.subset.clone());
            }
            return Ok(());
        }
        let best_len = self.best_len();
        if best_len <= self.lower || self.subset.len() + 1 >= best_len {
            return Ok(());
        }

        // Gains only shrink as the selection grows, so the largest open gain bounds how many
        // more vertices are needed.
        let max_gain = (0..self.view.len())
            .filter(|&v| self.is_open(v))
            .map(|v| self.gain(v))
            .max()
            .unwrap_or(0);
        if max_gain == 0 {
            return Ok(());
        }
        let needed = self.undominated.div_ceil(max_gain);
        if self.subset.len() + needed >= best_len {
            return Ok(());
        }

        let Some(v) = self.candidate() else {
            return Ok(());
        };

        self.select(v);
        let taken = self.explore(budget);
        self.unselect(v);
        taken?;

        self.skipped[v] = true;
        let skipped = self.explore(budget);
        self.skipped[v] = false;
        skipped
    }
}
