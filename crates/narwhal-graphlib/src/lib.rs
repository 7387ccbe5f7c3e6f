#![forbid(unsafe_code)]

//! Vertex/link adjacency model used by `narwhal`.
//!
//! A [`Graph`] owns its vertices and links. Every vertex keeps three neighbor views (undirected
//! neighbors, in-neighbors, out-neighbors) and the graph mirrors them in a dense adjacency-count
//! matrix addressed by each vertex's *stacked index*, a compact position in `0..n` that is
//! recompacted whenever a vertex is deleted.
//!
//! Structural primitives (strongly connected components, cycle detection, all-pairs shortest
//! paths) live in [`alg`].

pub mod alg;
mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Graph, Link, LinkIndex, Orientation, Point, Vertex, VertexIndex};
