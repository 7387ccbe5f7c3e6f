#![allow(dead_code)]

use narwhal::graphlib::{Graph, VertexIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn graph(edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(edges).unwrap()
}

pub fn digraph(arcs: &[(usize, usize)]) -> Graph {
    Graph::from_arcs(arcs).unwrap()
}

/// `n` vertices and no links.
pub fn empty(n: usize) -> Graph {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    g
}

pub fn path(n: usize) -> Graph {
    let mut g = empty(n);
    for v in 1..n {
        g.add_edge(v - 1, v).unwrap();
    }
    g
}

pub fn cycle(n: usize) -> Graph {
    let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    graph(&edges)
}

pub fn complete(n: usize) -> Graph {
    let mut g = empty(n);
    for u in 0..n {
        for v in u + 1..n {
            g.add_edge(u, v).unwrap();
        }
    }
    g
}

pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = empty(a + b);
    for u in 0..a {
        for v in a..a + b {
            g.add_edge(u, v).unwrap();
        }
    }
    g
}

/// Paley graph on `q` vertices (`q` a prime with `q % 4 == 1`): `i ~ j` when `i - j` is a
/// nonzero square mod `q`.
pub fn paley(q: usize) -> Graph {
    let squares: Vec<bool> = {
        let mut s = vec![false; q];
        for x in 1..q {
            s[x * x % q] = true;
        }
        s
    };
    let mut g = empty(q);
    for u in 0..q {
        for v in u + 1..q {
            if squares[(v - u) % q] {
                g.add_edge(u, v).unwrap();
            }
        }
    }
    g
}

pub const PETERSEN: [(usize, usize); 15] = [
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

pub fn petersen() -> Graph {
    graph(&PETERSEN)
}

/// Eight vertices where the only dominating pairs are adjacent: domination number 2,
/// independent domination number 3.
pub fn g1() -> Graph {
    graph(&[
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 6),
        (3, 7),
        (4, 6),
        (4, 7),
        (5, 6),
        (5, 7),
    ])
}

/// The line graph of `K_n`, with the `n` cliques formed by the edges at each vertex of `K_n`.
pub fn line_graph_of_complete(n: usize) -> (Graph, Vec<Vec<VertexIndex>>) {
    let mut ends: Vec<(usize, usize)> = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            ends.push((u, v));
        }
    }
    let mut g = empty(ends.len());
    for i in 0..ends.len() {
        for j in i + 1..ends.len() {
            let (a, b) = ends[i];
            let (c, d) = ends[j];
            if a == c || a == d || b == c || b == d {
                g.add_edge(i, j).unwrap();
            }
        }
    }
    let cliques = (0..n)
        .map(|x| {
            ends.iter()
                .enumerate()
                .filter(|(_, (a, b))| *a == x || *b == x)
                .map(|(i, _)| i)
                .collect()
        })
        .collect();
    (g, cliques)
}

pub fn random_graph(n: usize, p: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = empty(n);
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                g.add_edge(u, v).unwrap();
            }
        }
    }
    g
}

pub fn random_digraph(n: usize, p: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = empty(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(p) {
                g.add_arc(u, v).unwrap();
            }
        }
    }
    g
}

pub fn random_tournament(n: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = empty(n);
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(0.5) {
                g.add_arc(u, v).unwrap();
            } else {
                g.add_arc(v, u).unwrap();
            }
        }
    }
    g
}

/// Paley tournament on `p` vertices (`p` a prime with `p % 4 == 3`): `i -> j` when `j - i` is a
/// nonzero square mod `p`.
pub fn paley_tournament(p: usize) -> Graph {
    let mut squares = vec![false; p];
    for x in 1..p {
        squares[x * x % p] = true;
    }
    let mut g = empty(p);
    for u in 0..p {
        for v in 0..p {
            if u != v && squares[(v + p - u) % p] {
                g.add_arc(u, v).unwrap();
            }
        }
    }
    g
}

/// The transitive tournament `i -> j` (`i < j`) with its Hamiltonian path reversed.
pub fn reversed_path_tournament(n: usize) -> Graph {
    let mut g = empty(n);
    for u in 0..n {
        for v in u + 1..n {
            if v == u + 1 {
                g.add_arc(v, u).unwrap();
            } else {
                g.add_arc(u, v).unwrap();
            }
        }
    }
    g
}

/// `0 -> 1 -> .. -> n - 1`.
pub fn oriented_path(n: usize) -> Graph {
    let mut g = empty(n);
    for v in 1..n {
        g.add_arc(v - 1, v).unwrap();
    }
    g
}

pub fn oriented_cycle(n: usize) -> Graph {
    let arcs: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    digraph(&arcs)
}
