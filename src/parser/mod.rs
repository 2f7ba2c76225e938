//! Parser module for ModGraph.
//!
//! Turns the free-form text of a module description into a normalized,
//! ordered list of dependency module names.
//!
//! # Example
//!
//! ```
//! use modgraph::parser::extract_dependencies;
//!
//! let raw = "whatis(\"GCC\")\ndepends_on(\"binutils/2.38\")";
//! let deps = extract_dependencies(raw.split('\n'));
//! assert_eq!(deps, vec!["binutils/2.38"]);
//! ```

pub mod show_output;

pub use show_output::extract_dependencies;
