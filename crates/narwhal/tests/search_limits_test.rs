mod common;

use common::*;
use narwhal::{
    DominationVariant, Error, Limits, SolverOptions, clique, coloring, dfvs, domination, fvs,
    quasi_kernel, vertex_cover,
};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[test]
fn node_limit_interrupts_every_solver() {
    let opts = SolverOptions::default();
    let g = paley(17);
    let t = random_tournament(10, 1);

    let limited = || Limits::new().with_max_nodes(2);
    assert!(matches!(
        vertex_cover::min_vertex_cover_with(&g, &opts, &mut limited()),
        Err(Error::NodeLimit { explored: 2 })
    ));
    assert!(matches!(
        clique::maximum_clique_with(&g, None, &opts, &mut limited()),
        Err(Error::NodeLimit { .. })
    ));
    assert!(matches!(
        domination::min_dominating_set_with(&g, DominationVariant::Connected, &opts, &mut limited()),
        Err(Error::NodeLimit { .. })
    ));
    assert!(matches!(
        coloring::minimal_proper_coloring_with(&g, &[], &opts, &mut limited()),
        Err(Error::NodeLimit { .. })
    ));
    assert!(matches!(
        dfvs::min_directed_feedback_vertex_set_with(&t, &opts, &mut limited()),
        Err(Error::NodeLimit { .. })
    ));
    assert!(matches!(
        fvs::min_feedback_vertex_set_with(&g, &opts, &mut limited()),
        Err(Error::NodeLimit { .. })
    ));
    assert!(matches!(
        quasi_kernel::min_quasi_kernel_with(&oriented_cycle(12), &opts, &mut limited()),
        Err(Error::NodeLimit { .. })
    ));
}

#[test]
fn a_raised_cancel_flag_stops_the_search_immediately() {
    let flag = Arc::new(AtomicBool::new(true));
    let mut limits = Limits::new().with_cancel_flag(flag);
    let result = clique::clique_number_with(&paley(13), None, &SolverOptions::default(), &mut limits);
    assert_eq!(result, Err(Error::Cancelled { explored: 0 }));
}

#[test]
fn generous_limits_give_the_unbounded_answer() {
    let opts = SolverOptions::default();
    let g = petersen();
    let mut limits = Limits::new().with_max_nodes(1_000_000);
    assert_eq!(vertex_cover::vertex_cover_number_with(&g, &opts, &mut limits), Ok(6));
    assert_eq!(
        coloring::chromatic_number_with(&g, &[], &opts, &mut limits),
        Ok(3)
    );
    assert_eq!(
        domination::min_dominating_set_with(&g, DominationVariant::Dominating, &opts, &mut limits)
            .map(|s| s.map(|s| s.len())),
        Ok(Some(3))
    );
    let t = digraph(&[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
    assert_eq!(
        dfvs::directed_feedback_vertex_set_number_with(&t, &opts, &mut limits),
        Ok(2)
    );
}

#[test]
fn the_same_graph_can_be_solved_again_after_an_interrupt() {
    let opts = SolverOptions::default();
    let t = random_tournament(9, 7);
    for max in [1, 3, 10, 30] {
        let _ = dfvs::min_directed_feedback_vertex_set_with(
            &t,
            &opts,
            &mut Limits::new().with_max_nodes(max),
        );
    }
    let set = dfvs::min_directed_feedback_vertex_set(&t);
    assert!(narwhal::certify::is_feedback_vertex_set(&t, &set));
}
