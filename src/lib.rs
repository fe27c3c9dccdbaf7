//! Topological ordering and cycle detection over dependency graphs.
//!
//! A graph here is a mapping from a node to the set of nodes it depends on:
//! an edge from `A` to `B` reads "`A` depends on `B`", so `B` must appear
//! before `A` in any valid ordering.
//! Node identifiers are an opaque generic type, constrained only to
//! equality, hashing and cloning.
//!
//! The crate splits into two halves.
//! [`graph`] holds representations: the [`graph::DependencyGraph`] seam
//! trait, the concrete [`graph::MapBackedGraph`] backing, and the derived
//! [`graph::InvertedGraph`] reverse-dependency view.
//! [`algorithm`] holds the algorithms as extension traits over the seam:
//! [`algorithm::TopologicalSort`] produces an ordering or a
//! [`algorithm::CycleDetected`] signal, and [`algorithm::CycleCheck`] is an
//! independent exhaustive check kept around to cross-validate the former.
//!
//! ```
//! use deporder::algorithm::*;
//! use deporder::graph::*;
//!
//! let graph: MapBackedGraph<&str> = [("bin", "lib"), ("lib", "core")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(graph.toposort(), Ok(vec!["core", "lib", "bin"]));
//! ```
//!
//! A cycle is an expected outcome, not an error to panic on:
//!
//! ```
//! use deporder::algorithm::*;
//! use deporder::graph::*;
//!
//! let graph: MapBackedGraph<u32> = [(0, 1), (1, 0)].into_iter().collect();
//! assert_eq!(graph.toposort(), Err(CycleDetected));
//! assert!(!graph.is_acyclic());
//! ```

pub mod algorithm;
pub mod graph;
