mod common;

use common::*;
use narwhal::graphlib::Graph;
use narwhal::{DominationVariant, bruteforce, certify, domination};

#[test]
fn domination_of_the_empty_graph() {
    let g: Graph = Graph::new();
    assert_eq!(domination::domination_number(&g), 0);
    assert_eq!(domination::independent_domination_number(&g), 0);
    assert_eq!(domination::connected_domination_number(&g), Some(0));
}

#[test]
fn domination_number_of_paths() {
    let cases = [(4, 2), (6, 2), (7, 3), (20, 7), (22, 8), (23, 8), (24, 8)];
    for (n, expected) in cases {
        assert_eq!(domination::domination_number(&path(n)), expected, "P{n}");
    }
}

#[test]
fn domination_number_of_dense_and_symmetric_graphs() {
    assert_eq!(domination::domination_number(&complete(4)), 1);
    assert_eq!(domination::domination_number(&paley(5)), 2);
    assert_eq!(domination::domination_number(&paley(13)), 3);
    assert_eq!(domination::domination_number(&paley(29)), 4);
    assert_eq!(domination::domination_number(&petersen()), 3);
    assert_eq!(domination::domination_number(&g1()), 2);
}

#[test]
fn isolated_vertices_dominate_themselves() {
    assert_eq!(domination::domination_number(&empty(4)), 4);
    let mut g = path(3);
    g.add_vertex(9);
    assert_eq!(domination::domination_number(&g), 2);
}

#[test]
fn independent_domination_number() {
    assert_eq!(domination::independent_domination_number(&g1()), 3);
    assert_eq!(domination::independent_domination_number(&petersen()), 3);
    assert_eq!(domination::independent_domination_number(&path(7)), 3);

    let set = domination::min_dominating_set(&g1(), DominationVariant::Independent).unwrap();
    assert!(certify::is_dominating_set(&g1(), &set));
    assert!(certify::is_independent_set(&g1(), &set));
}

#[test]
fn connected_domination_number() {
    assert_eq!(domination::connected_domination_number(&path(2)), Some(1));
    assert_eq!(domination::connected_domination_number(&path(5)), Some(3));
    assert_eq!(domination::connected_domination_number(&complete(4)), Some(1));
    assert_eq!(domination::connected_domination_number(&paley(5)), Some(3));
    assert_eq!(domination::connected_domination_number(&paley(13)), Some(4));
    assert_eq!(domination::connected_domination_number(&petersen()), Some(4));
    assert_eq!(domination::connected_domination_number(&empty(1)), Some(1));
}

#[test]
fn connected_domination_needs_a_connected_graph() {
    let g = graph(&[(0, 1), (2, 3)]);
    assert_eq!(domination::connected_domination_number(&g), None);
    assert_eq!(domination::min_connected_dominating_set(&g), None);
    // The other variants still exist.
    assert_eq!(domination::domination_number(&g), 2);
}

#[test]
fn connected_dominating_sets_are_connected() {
    for g in [path(8), cycle(9), petersen(), paley(13), g1()] {
        let set = domination::min_connected_dominating_set(&g).unwrap();
        assert!(certify::is_dominating_set(&g, &set));
        assert!(certify::is_connected_subset(&g, &set));
    }
}

#[test]
fn domination_ignores_arcs() {
    let mut g = empty(3);
    g.add_arc(0, 1).unwrap();
    g.add_arc(0, 2).unwrap();
    assert_eq!(domination::domination_number(&g), 3);
}

#[test]
fn every_variant_matches_brute_force_on_random_graphs() {
    for seed in 0..12 {
        let g = random_graph(9, 0.3, seed);

        let plain = bruteforce::min_subset(&g, certify::is_dominating_set).minimum;
        let set = domination::min_dominating_set(&g, DominationVariant::Dominating).unwrap();
        assert!(certify::is_dominating_set(&g, &set), "seed {seed}");
        assert_eq!(Some(set.len()), plain, "seed {seed}");

        let independent = bruteforce::min_subset(&g, |h, s| {
            certify::is_dominating_set(h, s) && certify::is_independent_set(h, s)
        })
        .minimum;
        assert_eq!(
            Some(domination::independent_domination_number(&g)),
            independent,
            "seed {seed}"
        );

        let connected = bruteforce::min_subset(&g, |h, s| {
            certify::is_dominating_set(h, s) && certify::is_connected_subset(h, s)
        })
        .minimum;
        let found = domination::connected_domination_number(&g);
        if narwhal::graphlib::alg::is_connected(&g) {
            assert_eq!(found, connected, "seed {seed}");
        } else {
            assert_eq!(found, None, "seed {seed}");
        }
    }
}
