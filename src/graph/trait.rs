use ahash::RandomState;
use std::collections::HashSet;
use std::hash::Hash;

/// Read access to a dependency graph.
///
/// Every lookup is total.
/// Asking about a node the graph has never heard of yields an empty
/// dependency set, not a failure; such nodes simply have no outgoing
/// edges.
pub trait DependencyGraph {
    /// Opaque node identifier.
    type Node: Eq + Hash + Clone;

    /// Direct dependencies of `node`, i.e., the nodes that must be ordered
    /// before it.
    fn dependencies<'a>(
        &'a self,
        node: &Self::Node,
    ) -> Box<dyn Iterator<Item = &'a Self::Node> + 'a>;

    /// Number of direct dependencies of `node`.
    fn dependency_count(&self, node: &Self::Node) -> usize;

    /// Every edge as a `(dependent, dependency)` pair.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (&Self::Node, &Self::Node)> + '_>;

    /// Nodes declared with an explicit dependency set, possibly empty.
    ///
    /// Nodes appearing only inside dependency sets are not listed here;
    /// [`DependencyGraph::node_set`] covers both.
    fn iter_declared(&self) -> Box<dyn Iterator<Item = &Self::Node> + '_>;

    /// Every node in the graph: declared ones plus those referenced only
    /// as a dependency of something else.
    ///
    /// Runs in time linear in the number of edges.
    fn node_set(&self) -> HashSet<&Self::Node, RandomState> {
        let mut res = HashSet::with_hasher(RandomState::new());
        res.extend(self.iter_declared());
        for (dependent, dependency) in self.iter_edges() {
            res.insert(dependent);
            res.insert(dependency);
        }
        res
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
        Self::Node: std::fmt::Debug,
    {
        GraphDebug::new(self)
    }
}

/// A default implementation of inspecting into a graph with customized
/// indentation.
pub struct GraphDebug<'a, G>
where
    G: DependencyGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: DependencyGraph,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: DependencyGraph,
    G::Node: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in self.graph.iter_declared() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", node)?;
            for dep in self.graph.dependencies(node) {
                self.display_indent(f, 1)?;
                writeln!(f, "-> {:?}", dep)?;
            }
        }
        Ok(())
    }
}
