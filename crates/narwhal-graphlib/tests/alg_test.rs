use narwhal_graphlib::alg::{self, EdgeLength};
use narwhal_graphlib::{Graph, VertexIndex};

const PETERSEN: [(usize, usize); 15] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 0),
    (0, 5),
    (1, 6),
    (2, 7),
    (3, 8),
    (4, 9),
    (5, 7),
    (7, 9),
    (9, 6),
    (6, 8),
    (8, 5),
];

fn graph(edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(edges).unwrap()
}

fn digraph(arcs: &[(usize, usize)]) -> Graph {
    Graph::from_arcs(arcs).unwrap()
}

fn complete(n: usize) -> Graph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            edges.push((u, v));
        }
    }
    graph(&edges)
}

fn path(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    graph(&edges)
}

fn assert_directed_cycle(g: &Graph, cycle: &[VertexIndex]) {
    assert!(!cycle.is_empty());
    for (i, &u) in cycle.iter().enumerate() {
        let v = cycle[(i + 1) % cycle.len()];
        assert!(g.has_arc(u, v).unwrap(), "{u} -> {v} is not an arc");
    }
}

fn assert_undirected_cycle(g: &Graph, cycle: &[VertexIndex]) {
    assert!(cycle.len() >= 3);
    for (i, &u) in cycle.iter().enumerate() {
        let v = cycle[(i + 1) % cycle.len()];
        assert!(g.has_edge(u, v).unwrap(), "{u} - {v} is not an edge");
    }
}

#[test]
fn acyclic_digraphs_have_no_directed_cycle() {
    let cases: [&[(usize, usize)]; 5] = [
        &[],
        &[(2, 3)],
        &[(0, 1), (1, 2), (0, 2)],
        &[(0, 1), (2, 1), (0, 2)],
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 4),
            (3, 5),
            (5, 4),
        ],
    ];
    for arcs in cases {
        let g = digraph(arcs);
        assert_eq!(alg::directed_cycle(&g), None, "arcs {arcs:?}");
    }
}

#[test]
fn directed_cycle_is_returned_in_arc_order() {
    let g = digraph(&[(1, 3), (3, 0), (0, 1)]);
    let cycle = alg::directed_cycle(&g).unwrap();
    assert_eq!(cycle.len(), 3);
    assert_directed_cycle(&g, &cycle);
}

#[test]
fn directed_cycle_behind_a_tail_is_found() {
    let g = digraph(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 2)]);
    let cycle = alg::directed_cycle(&g).unwrap();
    assert_eq!(cycle.len(), 3);
    assert_directed_cycle(&g, &cycle);
}

#[test]
fn directed_cycle_ignores_undirected_edges() {
    let g = complete(3);
    assert_eq!(alg::directed_cycle(&g), None);
    assert!(alg::undirected_cycle(&g).is_some());
}

#[test]
fn find_directed_cycle_respects_the_vertex_subset() {
    let g = digraph(&[(0, 1), (1, 2), (2, 0)]);
    let succ = |v: VertexIndex| g.vertex(v).unwrap().out_neighbors().collect::<Vec<_>>();
    assert!(alg::find_directed_cycle(&[0, 1, 2], succ).is_some());
    assert_eq!(alg::find_directed_cycle(&[0, 1], succ), None);
}

#[test]
fn undirected_cycle_detection() {
    let g = graph(&[(2, 3)]);
    assert_eq!(alg::undirected_cycle(&g), None);

    let g = graph(&[(0, 1), (1, 2), (2, 0)]);
    let cycle = alg::undirected_cycle(&g).unwrap();
    assert_eq!(cycle.len(), 3);
    assert_undirected_cycle(&g, &cycle);

    let g = graph(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)]);
    let cycle = alg::undirected_cycle(&g).unwrap();
    assert_eq!(cycle.len(), 4);
    assert_undirected_cycle(&g, &cycle);
}

#[test]
fn undirected_cycle_on_a_forest_is_none() {
    let g = graph(&[(0, 1), (0, 2), (2, 3), (2, 4), (5, 6)]);
    assert_eq!(alg::undirected_cycle(&g), None);
}

#[test]
fn kosaraju_returns_components_sources_first() {
    let g = digraph(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)]);
    let mut sccs = alg::strongly_connected_components(&g);
    for c in &mut sccs {
        c.sort_unstable();
    }
    assert_eq!(sccs, vec![vec![0, 1, 2], vec![3, 4]]);
}

#[test]
fn kosaraju_partitions_every_vertex() {
    let g = digraph(&[(0, 1), (1, 2), (3, 4), (4, 3), (5, 3)]);
    let sccs = alg::strongly_connected_components(&g);
    let mut all: Vec<_> = sccs.iter().flatten().copied().collect();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(sccs.len(), 5);
    assert!(sccs.iter().any(|c| c.len() == 2));
}

#[test]
fn kosaraju_and_cycle_search_handle_deep_chains() {
    let n = 200_000;
    let vertices: Vec<VertexIndex> = (0..n).collect();
    let succ = |v: VertexIndex| (v + 1 < n).then_some(v + 1);
    let pred = |v: VertexIndex| v.checked_sub(1);

    let sccs = alg::kosaraju(&vertices, succ, pred);
    assert_eq!(sccs.len(), n);
    assert_eq!(sccs[0], vec![0]);
    assert_eq!(alg::find_directed_cycle(&vertices, succ), None);

    let closing = |v: VertexIndex| Some((v + 1) % n);
    let cycle = alg::find_directed_cycle(&vertices, closing).unwrap();
    assert_eq!(cycle.len(), n);
}

#[test]
fn floyd_warshall_on_a_triangle_with_a_pendant() {
    let g = graph(&[(0, 1), (1, 2), (2, 3), (3, 1)]);
    let sp = alg::floyd_warshall(&g, EdgeLength::Unit);
    assert_eq!(sp.distance(0, 2), Some(2.0));
    assert_eq!(sp.next_hop(0, 2), Some(1));
    assert_eq!(sp.distance(0, 3), Some(2.0));
    assert_eq!(sp.next_hop(0, 3), Some(1));
    assert_eq!(sp.distance(2, 2), Some(0.0));
}

#[test]
fn floyd_warshall_on_two_triangles_through_a_hub() {
    let g = graph(&[(0, 3), (3, 1), (1, 2), (2, 5), (5, 1), (1, 4), (4, 0)]);
    let sp = alg::floyd_warshall(&g, EdgeLength::Unit);
    assert_eq!(sp.distance(3, 2), Some(2.0));
    assert_eq!(sp.next_hop(3, 2), Some(1));
    assert_eq!(sp.distance(0, 5), Some(3.0));
    assert_eq!(sp.next_hop(5, 0), Some(1));
    let p = sp.path(5, 0).unwrap();
    assert_eq!(p.len(), 4);
    assert_eq!(p.first(), Some(&5));
    assert_eq!(p.last(), Some(&0));
}

#[test]
fn floyd_warshall_follows_arcs_forward_only() {
    let g = digraph(&[(0, 1), (1, 2)]);
    let sp = alg::floyd_warshall(&g, EdgeLength::Unit);
    assert_eq!(sp.distance(0, 2), Some(2.0));
    assert_eq!(sp.distance(2, 0), None);
    assert_eq!(sp.next_hop(2, 0), None);
    assert_eq!(sp.path(2, 0), None);
    assert_eq!(sp.path(0, 2), Some(vec![0, 1, 2]));
}

#[test]
fn floyd_warshall_uses_weights_and_positions() {
    let mut g: Graph = Graph::new();
    g.add_vertex_at(0, 0.0, 0.0);
    g.add_vertex_at(1, 3.0, 4.0);
    g.add_vertex_at(2, 3.0, 0.0);
    let direct = g.add_edge(0, 1).unwrap().index();
    g.add_edge(0, 2).unwrap();
    g.add_edge(2, 1).unwrap();

    let sp = alg::floyd_warshall(&g, EdgeLength::Euclidean);
    assert_eq!(sp.distance(0, 1), Some(5.0));

    g.link_mut(direct).unwrap().weight = Some(10.0);
    let sp = alg::floyd_warshall(&g, EdgeLength::Weight);
    assert_eq!(sp.distance(0, 1), Some(2.0));
    assert_eq!(sp.next_hop(0, 1), Some(2));
}

#[test]
fn components_group_weakly_connected_vertices() {
    let mut g = graph(&[(0, 1), (2, 3)]);
    g.add_vertex(4);
    g.add_vertex(5);
    g.add_arc(3, 5).unwrap();

    let mut comps = alg::components(&g);
    for c in &mut comps {
        c.sort_unstable();
    }
    comps.sort();
    assert_eq!(comps, vec![vec![0, 1], vec![2, 3, 5], vec![4]]);
    assert!(!alg::is_connected(&g));
    assert!(alg::is_connected(&path(4)));
    let empty: Graph = Graph::new();
    assert!(alg::is_connected(&empty));
}

#[test]
fn girth_of_classic_graphs() {
    assert_eq!(alg::girth(&graph(&PETERSEN)), Some(5));
    assert_eq!(alg::girth(&complete(4)), Some(3));
    assert_eq!(alg::girth(&complete(5)), Some(3));
    assert_eq!(alg::girth(&path(6)), None);

    let c6: Vec<_> = (0..6).map(|v| (v, (v + 1) % 6)).collect();
    assert_eq!(alg::girth(&graph(&c6)), Some(6));
}

#[test]
fn find_undirected_cycle_respects_the_vertex_subset() {
    let g = graph(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
    let adj = |v: VertexIndex| g.vertex(v).unwrap().neighbors().collect::<Vec<_>>();
    let cycle = alg::find_undirected_cycle(&[2, 3, 4], adj).unwrap();
    let mut sorted = cycle.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![2, 3, 4]);
    assert_undirected_cycle(&g, &cycle);
    assert_eq!(alg::find_undirected_cycle(&[0, 1, 3, 4], adj), None);
}

#[test]
fn radius_of_paths_and_stars() {
    assert_eq!(alg::radius(&path(3), EdgeLength::Unit), Some((1.0, 1)));
    assert_eq!(alg::radius(&path(4), EdgeLength::Unit), Some((2.0, 1)));
    let star = graph(&[(0, 1), (0, 2), (0, 3)]);
    assert_eq!(alg::radius(&star, EdgeLength::Unit), Some((1.0, 0)));
    assert_eq!(alg::radius(&graph(&PETERSEN), EdgeLength::Unit).map(|r| r.0), Some(2.0));
}

#[test]
fn radius_needs_a_vertex_reaching_every_other() {
    let empty: Graph = Graph::new();
    assert_eq!(alg::radius(&empty, EdgeLength::Unit), None);
    assert_eq!(alg::radius(&graph(&[(0, 1), (2, 3)]), EdgeLength::Unit), None);

    let g = digraph(&[(0, 1), (1, 2)]);
    assert_eq!(alg::radius(&g, EdgeLength::Unit), Some((2.0, 0)));
    let sp = alg::floyd_warshall(&g, EdgeLength::Unit);
    assert_eq!(sp.eccentricity(1), None);
    assert_eq!(sp.eccentricity(7), None);
}

#[test]
fn stretch_of_small_drawings() {
    let mut single: Graph = Graph::new();
    single.add_vertex_at(0, 0.0, 0.0);
    let s = alg::stretch(&single);
    assert_eq!(s.ratio, 1.0);
    assert!(s.path.is_empty());

    let mut segment: Graph = Graph::new();
    segment.add_vertex_at(0, 0.0, 0.0);
    segment.add_vertex_at(1, 0.0, 10.0);
    segment.add_edge(0, 1).unwrap();
    let s = alg::stretch(&segment);
    assert_eq!(s.ratio, 1.0);
    assert_eq!(s.path.len(), 2);

    let mut corner: Graph = Graph::new();
    corner.add_vertex_at(0, 0.0, 0.0);
    corner.add_vertex_at(1, 0.0, 10.0);
    corner.add_vertex_at(2, 10.0, 10.0);
    corner.add_edge(0, 1).unwrap();
    corner.add_edge(1, 2).unwrap();
    let s = alg::stretch(&corner);
    assert!((s.ratio - 2f64.sqrt()).abs() < 1e-4);
    assert_eq!(s.path.len(), 3);
}

#[test]
fn stretch_of_a_disconnected_drawing_is_infinite() {
    let mut g: Graph = Graph::new();
    g.add_vertex_at(0, 0.0, 0.0);
    g.add_vertex_at(1, 1.0, 1.0);
    let s = alg::stretch(&g);
    assert_eq!(s.ratio, f64::INFINITY);
    assert_eq!(s.path, vec![0, 1]);
}

#[test]
fn component_size_counts_the_weak_component() {
    let g = graph(&[(0, 1), (1, 2), (3, 4), (4, 5)]);
    assert_eq!(alg::component_size(&g, 0), Ok(3));
    assert_eq!(alg::component_size(&g, 1), Ok(3));
    assert_eq!(alg::component_size(&g, 3), Ok(3));
    assert_eq!(
        alg::component_size(&graph(&[(0, 1), (1, 2), (2, 0), (3, 4)]), 0),
        Ok(3)
    );
    assert_eq!(
        alg::component_size(&graph(&[(0, 1), (1, 2), (2, 3), (2, 4), (1, 5)]), 1),
        Ok(6)
    );

    let mut d = digraph(&[(0, 1)]);
    d.add_arc(2, 1).unwrap();
    assert_eq!(alg::component_size(&d, 2), Ok(3));
    assert!(alg::component_size(&d, 9).is_err());
}

#[test]
fn balanced_cut_edge_splits_the_tree_in_halves() {
    let g = graph(&[(0, 1), (1, 2), (2, 3), (2, 4), (1, 5)]);
    assert_eq!(alg::balanced_cut_edge(&g), Some(1));
    assert_eq!(alg::balanced_cut_edge(&complete(4)), None);
    assert_eq!(alg::balanced_cut_edge(&path(5)), Some(1));
}
