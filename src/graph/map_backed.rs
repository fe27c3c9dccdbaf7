use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A dependency graph backed by a hash map from each declared node to its
/// set of dependencies.
///
/// |                    | Complexity                              |
/// | ------------------ | --------------------------------------- |
/// | `add_node`         | amortized O(1)                          |
/// | `add_dependency`   | amortized O(1)                          |
/// | `dependencies`     | O(1) to return, O(1) per `.next()`      |
/// | `dependency_count` | O(1)                                    |
/// | `iter_edges`       | O(1) per `.next()`                      |
/// | `iter_declared`    | O(1) per `.next()`                      |
/// | `node_set`         | O(\|E\| + \|V\|)                        |
///
/// Parallel edges collapse: declaring the same dependency twice leaves a
/// single edge.
#[derive(Clone)]
pub struct MapBackedGraph<T>
where
    T: Eq + Hash + Clone,
{
    deps: HashMap<T, HashSet<T, RandomState>, RandomState>,
    edge_size: usize,
}

impl<T> MapBackedGraph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            deps: HashMap::with_hasher(RandomState::new()),
            edge_size: 0,
        }
    }

    /// Declares `node` with an empty dependency set.
    ///
    /// A no-op when `node` is already declared; dependencies recorded
    /// earlier are kept.
    pub fn add_node(&mut self, node: T) {
        self.deps
            .entry(node)
            .or_insert_with(|| HashSet::with_hasher(RandomState::new()));
    }

    /// Records that `dependent` depends on `dependency`.
    ///
    /// `dependency` itself stays undeclared unless separately added; it
    /// still shows up in [`DependencyGraph::node_set`].
    /// A node may depend on itself; such a graph is cyclic.
    pub fn add_dependency(&mut self, dependent: T, dependency: T) {
        let set = self
            .deps
            .entry(dependent)
            .or_insert_with(|| HashSet::with_hasher(RandomState::new()));
        if set.insert(dependency) {
            self.edge_size += 1;
        }
    }

    /// Number of declared nodes.
    pub fn declared_size(&self) -> usize {
        self.deps.len()
    }

    /// Number of distinct edges.
    pub fn edge_size(&self) -> usize {
        self.edge_size
    }
}

impl<T> Default for MapBackedGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, T)> for MapBackedGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Builds a graph out of `(dependent, dependency)` pairs.
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut res = Self::new();
        for (dependent, dependency) in iter {
            res.add_dependency(dependent, dependency);
        }
        res
    }
}

impl<T> DependencyGraph for MapBackedGraph<T>
where
    T: Eq + Hash + Clone,
{
    type Node = T;

    fn dependencies<'a>(&'a self, node: &T) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        match self.deps.get(node) {
            Some(set) => Box::new(set.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn dependency_count(&self, node: &T) -> usize {
        self.deps.get(node).map_or(0, HashSet::len)
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = (&T, &T)> + '_> {
        let it = self
            .deps
            .iter()
            .flat_map(|(dependent, set)| set.iter().map(move |dep| (dependent, dep)));
        Box::new(it)
    }

    fn iter_declared(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.deps.keys())
    }
}

impl<T> std::fmt::Debug for MapBackedGraph<T>
where
    T: Eq + Hash + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MapBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use std::collections::HashSet;

    #[test]
    fn lookups_are_total() {
        let mut g = MapBackedGraph::new();
        g.add_dependency(0, 1);
        assert_eq!(g.dependencies(&42).count(), 0);
        assert_eq!(g.dependency_count(&42), 0);
        assert_eq!(g.dependency_count(&1), 0);
    }

    #[test]
    fn node_set_covers_dependency_only_nodes() {
        let g: MapBackedGraph<i32> = [(0, 1), (1, 2), (1, 3)].into_iter().collect();
        let trial: HashSet<i32> = g.node_set().into_iter().copied().collect();
        let oracle: HashSet<i32> = [0, 1, 2, 3].into_iter().collect();
        assert_eq!(trial, oracle);
        assert_eq!(g.declared_size(), 2);
    }

    #[test]
    fn node_set_of_empty_graph_is_empty() {
        let g: MapBackedGraph<i32> = MapBackedGraph::new();
        assert!(g.node_set().is_empty());
    }

    #[test]
    fn parallel_edges_collapse() {
        let mut g = MapBackedGraph::new();
        g.add_dependency("a", "b");
        g.add_dependency("a", "b");
        g.add_dependency("a", "c");
        assert_eq!(g.edge_size(), 2);
        assert_eq!(g.dependency_count(&"a"), 2);
    }

    #[test]
    fn declaring_keeps_recorded_dependencies() {
        let mut g = MapBackedGraph::new();
        g.add_dependency(0, 1);
        g.add_node(0);
        assert_eq!(g.dependency_count(&0), 1);
        g.add_node(7);
        assert_eq!(g.declared_size(), 2);
        assert_eq!(g.dependency_count(&7), 0);
    }
}
