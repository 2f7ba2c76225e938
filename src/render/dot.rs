//! DOT serialization of a module graph.
//!
//! Emits the graph as Graphviz DOT text: an undirected `graph` whose edges
//! carry a `dir=forward` attribute, so the rendered arrow points from each
//! dependency to the module that depends on it.

use crate::graph::ModuleGraph;

/// Serializes a graph to DOT text.
///
/// Nodes appear in insertion order with their display shape, then edges in
/// insertion order with their color and direction attributes. Module names
/// are quoted since they usually contain `/`.
pub fn to_dot(graph: &ModuleGraph) -> String {
    let mut lines = Vec::new();
    lines.push(format!("graph \"{}\" {{", graph.label()));
    lines.push("    bgcolor=white;".to_string());

    for node in graph.nodes() {
        lines.push(format!("    \"{}\" [shape={}];", node.name, node.shape));
    }

    for (dep, module, edge) in graph.edges() {
        lines.push(format!(
            "    \"{}\" -- \"{}\" [color={}, dir={}];",
            dep, module, edge.color, edge.dir
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = ModuleGraph::new("dependency_tree_list");
        let dot = to_dot(&graph);

        assert!(dot.starts_with("graph \"dependency_tree_list\" {"));
        assert!(dot.contains("bgcolor=white;"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn test_nodes_and_edges() {
        let mut graph = ModuleGraph::new("dependency_tree gcc/11");
        graph.add_module("gcc/11");
        graph.add_module("binutils/2.38");
        graph.add_dependency_edge("binutils/2.38", "gcc/11");

        let dot = to_dot(&graph);

        assert!(dot.contains("\"gcc/11\" [shape=circle];"));
        assert!(dot.contains("\"binutils/2.38\" [shape=circle];"));
        assert!(dot.contains("\"binutils/2.38\" -- \"gcc/11\" [color=black, dir=forward];"));
    }

    #[test]
    fn test_idempotent_insertion_emits_node_once() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("gcc/11");
        graph.add_module("gcc/11");

        let dot = to_dot(&graph);
        assert_eq!(dot.matches("\"gcc/11\" [shape=circle];").count(), 1);
    }

    #[test]
    fn test_idempotent_edges_emit_once() {
        let mut graph = ModuleGraph::new("t");
        graph.add_module("a");
        graph.add_module("b");
        graph.add_dependency_edge("a", "b");
        graph.add_dependency_edge("a", "b");

        let dot = to_dot(&graph);
        assert_eq!(dot.matches(" -- ").count(), 1);
    }
}
