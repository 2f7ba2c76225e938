//! Graph module for module dependency modeling.
//!
//! This module provides the [`ModuleGraph`] struct for accumulating
//! dependency relationships discovered during traversal, built on a
//! directed graph structure.
//!
//! # Example
//!
//! ```rust
//! use modgraph::graph::ModuleGraph;
//!
//! let mut graph = ModuleGraph::new("dependency_tree gcc/11.2.0");
//! graph.add_module("gcc/11.2.0");
//! graph.add_module("binutils/2.38");
//! graph.add_dependency_edge("binutils/2.38", "gcc/11.2.0");
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod module_graph;

pub use module_graph::{DependencyEdge, ModuleGraph, ModuleNode, NODE_SHAPE};
