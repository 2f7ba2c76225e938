//! ModGraph - dependency graph tool for lmod-style environment modules
//!
//! This crate discovers the dependency relationships that environment modules
//! declare in their `module show` output and assembles them into a directed
//! graph that can be rendered as DOT text or, through Graphviz, as PNG/SVG.

pub mod graph;
pub mod parser;
pub mod query;
pub mod render;
pub mod traverse;
