//! Dependency-graph representations.
//!
//! # Edge direction
//!
//! An edge from `A` to `B` means "`A` depends on `B`": `B` has to be
//! placed before `A` in any valid ordering.
//! A node with no outgoing edges is *terminal* and may be placed first.
//!
//! # Total lookups
//!
//! Dependency sets may mention nodes that are never declared themselves
//! (terminal dependencies).
//! Those nodes belong to the graph all the same: they are part of
//! [`DependencyGraph::node_set`], and asking for their dependencies gives
//! an empty set rather than a missing-key failure.
//! The same totality holds for [`InvertedGraph`] lookups.

mod r#trait;
pub use self::r#trait::*;
mod map_backed;
pub use self::map_backed::*;
mod inverted;
pub use self::inverted::*;

#[cfg(test)]
pub use self::tests::*;
