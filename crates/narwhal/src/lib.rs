#![forbid(unsafe_code)]

//! Exact solvers for NP-hard graph invariants.
//!
//! Every solver works on a [`graphlib::Graph`] and returns a numeric invariant together with a
//! certificate (the vertex set or coloring achieving it). Undirected solvers read the
//! undirected edges of the graph; the directed feedback vertex set and quasi-kernel solvers
//! read its arcs.
//!
//! Each solver has a plain entry point that searches without limits, and a `*_with` entry point
//! taking [`SolverOptions`] and a [`Budget`] so callers can cap or cancel the search.

pub use narwhal_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bounds;
pub mod bruteforce;
pub mod certify;
pub mod clique;
pub mod coloring;
pub mod dfvs;
pub mod domination;
mod error;
pub mod fvs;
pub mod invariants;
pub mod quasi_kernel;
pub mod search;
pub mod vertex_cover;
mod view;

pub use domination::DominationVariant;
pub use error::{Error, Result};
pub use invariants::Invariants;
pub use search::{Budget, Limits, SolverOptions, Unbounded};
