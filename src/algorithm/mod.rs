//! Ordering and cycle-detection algorithms over [`crate::graph::DependencyGraph`].
mod toposort;
pub use self::toposort::*;
mod cycle_check;
pub use self::cycle_check::*;
