//! Rendering for accumulated module graphs.
//!
//! The traversal hands its finished [`ModuleGraph`](crate::graph::ModuleGraph)
//! to this module, which serializes it as DOT text and optionally delegates
//! to Graphviz for raster/vector output. The output file's extension selects
//! the format; anything unrecognized falls back to raw DOT on stdout.

pub mod dot;
pub mod graphviz;

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::graph::ModuleGraph;

/// Output format options, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// DOT text written to a file
    Dot,
    /// PNG raster image rendered through Graphviz
    Png,
    /// SVG vector image rendered through Graphviz
    Svg,
    /// DOT text printed to stdout
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(OutputFormat::Dot),
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: dot, png, svg, raw",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Raw => write!(f, "raw"),
        }
    }
}

/// Errors that can occur while rendering a graph.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to write the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Graphviz failed to produce the image.
    #[error(transparent)]
    Graphviz(#[from] graphviz::GraphvizError),
}

/// Where and how to emit the rendered graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    /// Selected output format
    pub format: OutputFormat,
    /// Output file; `None` means stdout (raw format only)
    pub path: Option<PathBuf>,
}

impl RenderTarget {
    /// Resolves the output argument into a format and file path.
    ///
    /// The argument's file extension picks the format. A missing or
    /// unrecognized extension is not fatal: a warning goes to stderr and
    /// the target falls back to raw DOT on stdout. An argument that is only
    /// an extension (e.g. `.png`) gets a file name derived from
    /// `default_stem`, with `/` replaced by `-` so module names make valid
    /// file names.
    pub fn resolve(output: Option<&str>, default_stem: &str) -> Self {
        let raw = Self {
            format: OutputFormat::Raw,
            path: None,
        };

        let Some(file) = output else {
            return raw;
        };

        let Some(period) = file.rfind('.') else {
            eprintln!("Output file format not valid. Defaulting to raw");
            return raw;
        };

        let format = match file[period + 1..].parse::<OutputFormat>() {
            Ok(format) => format,
            Err(_) => {
                eprintln!("Output file format not valid. Defaulting to raw");
                return raw;
            }
        };

        if format == OutputFormat::Raw {
            return raw;
        }

        let path = if file[..period].is_empty() {
            PathBuf::from(format!(
                "{}_module_dependencies.{format}",
                default_stem.replace('/', "-")
            ))
        } else {
            PathBuf::from(file)
        };

        Self {
            format,
            path: Some(path),
        }
    }
}

/// Renders a graph to the given target.
///
/// Raw output goes to stdout; everything else is written to the target's
/// file, through Graphviz for PNG and SVG.
pub fn render(graph: &ModuleGraph, target: &RenderTarget) -> Result<(), RenderError> {
    let dot_text = dot::to_dot(graph);

    match (target.format, &target.path) {
        (OutputFormat::Raw, _) | (_, None) => {
            println!("{dot_text}");
            Ok(())
        }
        (OutputFormat::Dot, Some(path)) => {
            fs::write(path, dot_text)?;
            Ok(())
        }
        (OutputFormat::Png, Some(path)) => {
            graphviz::write_image(&dot_text, path, "png")?;
            Ok(())
        }
        (OutputFormat::Svg, Some(path)) => {
            graphviz::write_image(&dot_text, path, "svg")?;
            Ok(())
        }
    }
}
