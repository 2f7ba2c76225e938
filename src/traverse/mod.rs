//! Traversal engine for ModGraph.
//!
//! Drives repeated `module show` queries, extracts each module's declared
//! dependencies, and accumulates the results into one [`ModuleGraph`]. A
//! visited set shared across the whole run guarantees at most one query per
//! module and termination even when the dependency relation contains cycles.
//!
//! Two entry points exist with deliberately different expansion behavior:
//! [`expand_module`] follows transitive dependencies recursively, while
//! [`expand_all`] records only the direct dependencies of each starting
//! module.

use std::collections::HashSet;

use crate::graph::ModuleGraph;
use crate::parser::extract_dependencies;
use crate::query::ModuleQuery;

/// Behavior switches threaded through every traversal call.
///
/// Passed explicitly rather than read from ambient state so the traversal
/// stays re-entrant and testable in isolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversalOptions {
    /// Print each module's dependency listing to stdout as it is discovered
    pub show_parsing: bool,
    /// Add a node for a module even when it declares no dependencies
    pub include_independent: bool,
}

/// Expands a single module recursively into a new graph.
///
/// Creates a graph labeled after the module, then walks its dependency
/// declarations depth-first, following each not-yet-visited dependency in
/// declaration order. Revisits are suppressed by the visited set, so a
/// dependency cycle terminates after recording each edge once.
///
/// Query failures are reported to stderr and skipped; the traversal
/// continues with whatever was accumulated.
pub fn expand_module<Q: ModuleQuery + ?Sized>(
    query: &Q,
    module: &str,
    options: &TraversalOptions,
) -> ModuleGraph {
    let mut graph = ModuleGraph::new(format!("dependency_tree {module}"));
    let mut visited = HashSet::new();
    expand_into(query, module, &mut graph, true, &mut visited, options);
    graph
}

/// Expands a batch of starting modules into one graph.
///
/// Each starting module contributes only its direct dependencies: batch
/// expansion intentionally does not follow transitive dependencies. The
/// visited set is shared across the batch, so a module listed twice is
/// still queried once.
pub fn expand_all<Q: ModuleQuery + ?Sized>(
    query: &Q,
    modules: &[String],
    label: &str,
    options: &TraversalOptions,
) -> ModuleGraph {
    let mut graph = ModuleGraph::new(format!("dependency_tree_{label}"));
    let mut visited = HashSet::new();
    for module in modules {
        expand_into(query, module, &mut graph, false, &mut visited, options);
    }
    graph
}

/// Expands one module into an existing graph.
///
/// Marks the module visited before recursing so that a cycle back to it is
/// not re-expanded, and never issues a second query for a module already in
/// the visited set.
fn expand_into<Q: ModuleQuery + ?Sized>(
    query: &Q,
    module: &str,
    graph: &mut ModuleGraph,
    recursive: bool,
    visited: &mut HashSet<String>,
    options: &TraversalOptions,
) {
    if visited.contains(module) {
        return;
    }

    let raw = match query.show(module) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("Error showing module '{module}': {err}");
            visited.insert(module.to_string());
            return;
        }
    };

    let dependencies = extract_dependencies(raw.split('\n'));

    visited.insert(module.to_string());

    if options.show_parsing {
        print_module_dependencies(module, &dependencies);
    }

    if options.include_independent {
        graph.add_module(module);
    }

    if !dependencies.is_empty() {
        graph.add_module(module);
        for dep in &dependencies {
            graph.add_module(dep);
            graph.add_dependency_edge(dep, module);
            if recursive && !visited.contains(dep) {
                expand_into(query, dep, graph, true, visited, options);
            }
        }
    }
}

/// Prints one module's dependency listing to stdout.
fn print_module_dependencies(module: &str, dependencies: &[String]) {
    if dependencies.is_empty() {
        println!("{module} has no dependencies");
    } else {
        println!("{module} depends on:");
        for dep in dependencies {
            println!("- {dep}");
        }
    }
    println!();
}
