use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// The graph contains a dependency cycle, so no valid linear ordering
/// exists.
///
/// A cycle is an expected outcome of sorting arbitrary input, not a
/// failure; callers branch on it like any other result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dependency cycle detected: no valid ordering exists")]
pub struct CycleDetected;

pub trait TopologicalSort
where
    Self: DependencyGraph + Sized,
{
    /// Returns an ordering of every node in the graph such that each node
    /// appears after all of its dependencies, or [`CycleDetected`] when no
    /// such ordering exists.
    ///
    /// Mutually independent nodes are ordered arbitrarily; callers get
    /// *some* valid linear extension, not a canonical one. On a cycle no
    /// partial ordering is returned.
    ///
    /// The frontier starts at the terminal nodes and walks the inverted
    /// edges forward, counting satisfied dependencies per node instead of
    /// re-checking them from scratch, which bounds the sort by O(n^2) for
    /// n nodes.
    fn toposort(&self) -> Result<Vec<Self::Node>, CycleDetected> {
        let nodes = self.node_set();
        let inverted = InvertedGraph::new(self);

        let mut satisfied: HashMap<&Self::Node, usize, RandomState> =
            HashMap::with_capacity_and_hasher(nodes.len(), RandomState::new());
        for node in nodes.iter().copied() {
            satisfied.insert(node, 0);
        }

        // Terminal nodes have all dependencies trivially met.
        let mut frontier: Vec<&Self::Node> = nodes
            .iter()
            .copied()
            .filter(|node| self.dependency_count(node) == 0)
            .collect();
        let mut placed: HashSet<&Self::Node, RandomState> =
            HashSet::with_capacity_and_hasher(nodes.len(), RandomState::new());
        let mut ordering: Vec<&Self::Node> = Vec::with_capacity(nodes.len());

        while let Some(node) = frontier.pop() {
            // A node is pushed once per satisfied dependency, so stale
            // entries for already-placed nodes can surface here.
            if placed.contains(node) {
                continue;
            }
            // Not every dependency is placed yet; the push that satisfies
            // the last one will bring the node back.
            if satisfied[node] < self.dependency_count(node) {
                continue;
            }
            ordering.push(node);
            placed.insert(node);
            for dependent in inverted.dependents(node) {
                *satisfied.get_mut(dependent).unwrap() += 1;
                frontier.push(dependent);
            }
        }

        if ordering.len() == nodes.len() {
            Ok(ordering.into_iter().cloned().collect())
        } else {
            Err(CycleDetected)
        }
    }

    /// Whether the graph admits any valid ordering at all.
    ///
    /// Backed by [`TopologicalSort::toposort`]; this is the predicate to
    /// use in production code.
    fn is_acyclic(&self) -> bool {
        self.toposort().is_ok()
    }
}

impl<G: DependencyGraph> TopologicalSort for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::*;
    use quickcheck_macros::quickcheck;

    fn graph(edges: &[(i32, i32)]) -> MapBackedGraph<i32> {
        edges.iter().copied().collect()
    }

    fn assert_linear_extension<G>(g: &G, ordering: &[G::Node])
    where
        G: DependencyGraph,
        G::Node: std::fmt::Debug,
    {
        let nodes = g.node_set();
        assert_eq!(ordering.len(), nodes.len());
        let position: HashMap<&G::Node, usize> = ordering
            .iter()
            .enumerate()
            .map(|(idx, node)| (node, idx))
            .collect();
        assert_eq!(position.len(), ordering.len());
        for node in nodes {
            assert!(position.contains_key(node), "missing {node:?}");
        }
        for (dependent, dependency) in g.iter_edges() {
            assert!(
                position[dependency] < position[dependent],
                "{dependency:?} must precede {dependent:?}"
            );
        }
    }

    #[test]
    fn empty_graph_sorts_to_empty() {
        assert_eq!(MapBackedGraph::<i32>::new().toposort(), Ok(vec![]));
    }

    #[test]
    fn chains_have_a_unique_ordering() {
        assert_eq!(graph(&[(0, 1)]).toposort(), Ok(vec![1, 0]));
        assert_eq!(graph(&[(0, 1), (1, 2)]).toposort(), Ok(vec![2, 1, 0]));
    }

    #[test]
    fn merges_allow_either_extension() {
        let trial = graph(&[(0, 1), (1, 2), (1, 3)]).toposort().unwrap();
        assert!(trial == [3, 2, 1, 0] || trial == [2, 3, 1, 0], "{trial:?}");
        let trial = graph(&[(0, 1), (1, 2), (1, 3), (2, 4), (3, 4)])
            .toposort()
            .unwrap();
        assert!(trial == [4, 3, 2, 1, 0] || trial == [4, 2, 3, 1, 0], "{trial:?}");
    }

    #[test]
    fn self_loop_is_a_cycle() {
        assert_eq!(graph(&[(0, 0)]).toposort(), Err(CycleDetected));
    }

    #[test]
    fn cyclic_graphs_have_no_ordering() {
        let cyclic: &[&[(i32, i32)]] = &[
            // 2-cycle
            &[(0, 1), (1, 0)],
            // 2-cycle with extra edges
            &[(0, 1), (0, 2), (1, 0), (1, 3)],
            // 2-cycle plus a disjoint acyclic component
            &[(0, 1), (1, 0), (3, 4), (3, 5)],
            // 4-cycle
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
            // 4-cycle with tails
            &[(-1, 0), (0, 1), (1, 2), (2, 3), (3, 0), (3, 4)],
        ];
        for edges in cyclic {
            assert_eq!(graph(edges).toposort(), Err(CycleDetected), "{edges:?}");
        }
    }

    #[test]
    fn disjoint_components_both_appear() {
        let g = graph(&[(0, 1), (1, 2), (1, 3), (2, 4), (3, 4), (5, 6)]);
        let trial = g.toposort().unwrap();
        assert_linear_extension(&g, &trial);
    }

    #[test]
    fn dependency_only_nodes_seed_the_frontier() {
        // 1 and 2 never appear as keys; they still come out first.
        let g = graph(&[(0, 1), (0, 2)]);
        let trial = g.toposort().unwrap();
        assert_eq!(trial.len(), 3);
        assert_eq!(trial[2], 0);
    }

    #[quickcheck]
    fn orderings_are_linear_extensions(deps: RandomDeps) {
        let g = deps.graph();
        if let Ok(ordering) = g.toposort() {
            assert_linear_extension(&g, &ordering);
        }
    }
}
