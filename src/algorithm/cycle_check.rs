use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Acyclicity by exhaustive path enumeration.
pub trait CycleCheck
where
    Self: DependencyGraph + Sized,
{
    /// Walks every dependency path from every node, watching for a node
    /// that is already on the active path.
    ///
    /// Exponential in the worst case, since paths are enumerated without
    /// memoization. [`crate::algorithm::TopologicalSort::is_acyclic`]
    /// answers the same question in O(n^2) and is the predicate to use;
    /// this one exists to cross-validate it, and the two must agree on
    /// every graph.
    ///
    /// The traversal keeps its frames on the heap instead of recursing,
    /// so path depth is bounded by memory, not by the call stack.
    fn is_acyclic_dfs(&self) -> bool {
        self.node_set()
            .into_iter()
            .all(|start| acyclic_from(self, start))
    }
}

impl<G: DependencyGraph> CycleCheck for G {}

/// Explores every path out of `start`, returning `false` on the first
/// repeated node along an active path.
///
/// Each frame pairs a node with its half-consumed dependency iterator;
/// `on_path` mirrors the frame stack. A node is released from `on_path`
/// when its frame is fully explored, so it may be revisited along a
/// different path.
fn acyclic_from<'a, G>(graph: &'a G, start: &'a G::Node) -> bool
where
    G: DependencyGraph,
{
    let mut on_path: HashSet<&'a G::Node, RandomState> = HashSet::with_hasher(RandomState::new());
    let mut stack: Vec<(&'a G::Node, Box<dyn Iterator<Item = &'a G::Node> + 'a>)> = vec![];
    on_path.insert(start);
    stack.push((start, graph.dependencies(start)));
    loop {
        let next = match stack.last_mut() {
            Some((_, deps)) => deps.next(),
            None => return true,
        };
        match next {
            Some(next) => {
                if !on_path.insert(next) {
                    return false;
                }
                stack.push((next, graph.dependencies(next)));
            }
            None => {
                if let Some((node, _)) = stack.pop() {
                    on_path.remove(node);
                }
            }
        }
    }
}
