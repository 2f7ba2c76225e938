//! Module dependency graph implementation using petgraph.
//!
//! Provides a directed graph structure for modeling module dependencies,
//! with idempotent node and edge insertion keyed by module name.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Display shape used for every module node, matching the circle nodes of
/// the rendered dependency tree.
pub const NODE_SHAPE: &str = "circle";

/// Represents a node in the module graph.
///
/// Each node is one environment module, identified by its full name
/// (e.g., "gcc/11.2.0"). Names are compared exactly; no normalization.
#[derive(Debug, Clone)]
pub struct ModuleNode {
    /// Full module name, version included
    pub name: String,
    /// Display shape attribute for rendering
    pub shape: &'static str,
}

impl ModuleNode {
    /// Creates a new module node with the default display shape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: NODE_SHAPE,
        }
    }
}

/// Represents an edge in the module graph.
///
/// Edges run from a dependency to the module that depends on it, carrying
/// the display attributes the renderer emits.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
    /// Edge color attribute for rendering
    pub color: &'static str,
    /// Arrow direction attribute; "forward" points at the dependent module
    pub dir: &'static str,
}

impl Default for DependencyEdge {
    fn default() -> Self {
        Self {
            color: "black",
            dir: "forward",
        }
    }
}

/// A directed graph of module dependency relationships.
///
/// The graph uses petgraph's `DiGraph` internally, with a name-to-index map
/// for O(1) lookup. Node insertion is idempotent per name, and edge
/// insertion is idempotent per (from, to) pair, so repeated discovery of
/// the same module or relationship never duplicates output.
///
/// # Example
///
/// ```rust
/// use modgraph::graph::ModuleGraph;
///
/// let mut graph = ModuleGraph::new("dependency_tree gcc/11.2.0");
/// graph.add_module("gcc/11.2.0");
/// graph.add_module("binutils/2.38");
/// graph.add_dependency_edge("binutils/2.38", "gcc/11.2.0");
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    /// Graph label, shown in the rendered output
    label: String,
    /// The underlying directed graph
    graph: DiGraph<ModuleNode, DependencyEdge>,
    /// Maps module names to their node indices
    node_indices: HashMap<String, NodeIndex>,
}

impl ModuleGraph {
    /// Creates a new empty graph with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Returns the graph label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Adds a module to the graph.
    ///
    /// If a module with the same name already exists, returns its existing
    /// node index without modification.
    pub fn add_module(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(ModuleNode::new(name));
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Adds a dependency edge from `dep` to `module`.
    ///
    /// The arrow points at the dependent module: `dep` enables `module`.
    /// Both nodes must already exist. Re-adding an existing edge replaces
    /// its attributes instead of duplicating it.
    ///
    /// # Returns
    ///
    /// `true` if the edge exists after the call, `false` if either node is
    /// missing from the graph.
    pub fn add_dependency_edge(&mut self, dep: &str, module: &str) -> bool {
        let Some(&from_idx) = self.node_indices.get(dep) else {
            return false;
        };
        let Some(&to_idx) = self.node_indices.get(module) else {
            return false;
        };

        self.graph
            .update_edge(from_idx, to_idx, DependencyEdge::default());
        true
    }

    /// Checks if a module exists in the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Checks if the graph holds an edge from `dep` to `module`.
    pub fn contains_edge(&self, dep: &str, module: &str) -> bool {
        let (Some(&from_idx), Some(&to_idx)) =
            (self.node_indices.get(dep), self.node_indices.get(module))
        else {
            return false;
        };
        self.graph.contains_edge(from_idx, to_idx)
    }

    /// Gets the modules that depend on `name` (outgoing edges).
    pub fn get_dependents(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter_map(|edge| self.graph.node_weight(edge.target()))
            .map(|node| node.name.as_str())
            .collect()
    }

    /// Gets the dependencies of `name` (incoming edges).
    pub fn get_dependencies(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter_map(|edge| self.graph.node_weight(edge.source()))
            .map(|node| node.name.as_str())
            .collect()
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &ModuleNode> {
        self.graph.node_weights()
    }

    /// Iterates over all edges as (dep, module, attributes) in insertion
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &DependencyEdge)> {
        self.graph.edge_references().map(|edge| {
            let from = &self.graph[edge.source()];
            let to = &self.graph[edge.target()];
            (from.name.as_str(), to.name.as_str(), edge.weight())
        })
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_graph() {
        let graph = ModuleGraph::new("dependency_tree list");
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        assert_eq!(graph.label(), "dependency_tree list");
    }

    #[test]
    fn test_add_module_idempotent() {
        let mut graph = ModuleGraph::new("t");
        let idx = graph.add_module("gcc/11.2.0");

        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains("gcc/11.2.0"));

        // Adding the same module again returns the same index
        let idx2 = graph.add_module("gcc/11.2.0");
        assert_eq!(idx, idx2);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_names_compared_exactly() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("gcc/11.2.0");
        graph.add_module("GCC/11.2.0");

        // Case differs, so these are distinct modules
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_add_dependency_edge() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("gcc/11.2.0");
        graph.add_module("binutils/2.38");

        assert!(graph.add_dependency_edge("binutils/2.38", "gcc/11.2.0"));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge("binutils/2.38", "gcc/11.2.0"));
        assert!(!graph.contains_edge("gcc/11.2.0", "binutils/2.38"));

        // Missing endpoint fails without panicking
        assert!(!graph.add_dependency_edge("nonexistent", "gcc/11.2.0"));
        assert!(!graph.add_dependency_edge("gcc/11.2.0", "nonexistent"));
    }

    #[test]
    fn test_add_dependency_edge_idempotent() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("a");
        graph.add_module("b");

        assert!(graph.add_dependency_edge("a", "b"));
        assert!(graph.add_dependency_edge("a", "b"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_get_dependents_and_dependencies() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("gcc/11.2.0");
        graph.add_module("binutils/2.38");
        graph.add_module("mpfr/4.1");
        graph.add_dependency_edge("binutils/2.38", "gcc/11.2.0");
        graph.add_dependency_edge("mpfr/4.1", "gcc/11.2.0");

        let deps = graph.get_dependencies("gcc/11.2.0");
        assert_eq!(deps.len(), 2);
        assert!(deps.contains(&"binutils/2.38"));
        assert!(deps.contains(&"mpfr/4.1"));

        let dependents = graph.get_dependents("binutils/2.38");
        assert_eq!(dependents, vec!["gcc/11.2.0"]);

        assert!(graph.get_dependencies("nonexistent").is_empty());
        assert!(graph.get_dependents("nonexistent").is_empty());
    }

    #[test]
    fn test_edges_in_insertion_order() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("a");
        graph.add_module("b");
        graph.add_module("c");
        graph.add_dependency_edge("b", "a");
        graph.add_dependency_edge("c", "a");

        let edges: Vec<(&str, &str)> = graph.edges().map(|(f, t, _)| (f, t)).collect();
        assert_eq!(edges, vec![("b", "a"), ("c", "a")]);
    }

    #[test]
    fn test_edge_attributes() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("a");
        graph.add_module("b");
        graph.add_dependency_edge("a", "b");

        let (_, _, edge) = graph.edges().next().unwrap();
        assert_eq!(edge.color, "black");
        assert_eq!(edge.dir, "forward");
    }

    #[test]
    fn test_node_shape() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("a");
        assert_eq!(graph.nodes().next().unwrap().shape, "circle");
    }
}
