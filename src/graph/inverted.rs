use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// The reverse-dependency view of a graph: given a node, which nodes
/// depend on it.
///
/// Built once in O(|E|) from a borrowed graph and read-only afterwards.
/// It borrows node identifiers from the underlying graph rather than
/// cloning them, so it lives at most as long as that graph; the sort
/// engine builds one per invocation and drops it on return.
pub struct InvertedGraph<'a, G>
where
    G: DependencyGraph,
{
    dependents: HashMap<&'a G::Node, HashSet<&'a G::Node, RandomState>, RandomState>,
}

impl<'a, G> InvertedGraph<'a, G>
where
    G: DependencyGraph,
{
    pub fn new(graph: &'a G) -> Self {
        let mut dependents: HashMap<_, HashSet<_, RandomState>, _> =
            HashMap::with_hasher(RandomState::new());
        for (dependent, dependency) in graph.iter_edges() {
            dependents
                .entry(dependency)
                .or_insert_with(|| HashSet::with_hasher(RandomState::new()))
                .insert(dependent);
        }
        Self { dependents }
    }

    /// Nodes that directly depend on `node`.
    ///
    /// Total, like every lookup on the forward graph: a node nothing
    /// depends on yields an empty iterator, whether or not it appears in
    /// the graph at all.
    pub fn dependents(&self, node: &G::Node) -> Box<dyn Iterator<Item = &'a G::Node> + '_> {
        match self.dependents.get(node) {
            Some(set) => Box::new(set.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
