//! Image rendering through the Graphviz `dot` executable.
//!
//! DOT text is piped to `dot -T<format> -o <file>` in one short-lived
//! process per render, with stdin fully written and the process waited on
//! before returning.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Errors from a Graphviz invocation.
#[derive(Debug, thiserror::Error)]
pub enum GraphvizError {
    /// The renderer could not be started, typically because Graphviz is
    /// not installed.
    #[error("Failed to run '{binary}' (is Graphviz installed?): {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the DOT text to the renderer failed.
    #[error("Failed to send graph to '{binary}': {source}")]
    Pipe {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The renderer exited with a failure status.
    #[error("'{binary}' failed: {stderr}")]
    Failed { binary: String, stderr: String },
}

/// Renders DOT text to an image file via the `dot` executable.
pub fn write_image(dot_text: &str, path: &Path, format: &str) -> Result<(), GraphvizError> {
    run_renderer("dot", dot_text, path, format)
}

fn run_renderer(
    binary: &str,
    dot_text: &str,
    path: &Path,
    format: &str,
) -> Result<(), GraphvizError> {
    let mut child = Command::new(binary)
        .arg(format!("-T{format}"))
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| GraphvizError::Spawn {
            binary: binary.to_string(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(dot_text.as_bytes())
            .map_err(|source| GraphvizError::Pipe {
                binary: binary.to_string(),
                source,
            })?;
        // Dropping stdin closes the pipe so the renderer sees EOF.
    }

    let output = child
        .wait_with_output()
        .map_err(|source| GraphvizError::Pipe {
            binary: binary.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(GraphvizError::Failed {
            binary: binary.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_renderer_is_spawn_error() {
        let result = run_renderer(
            "definitely-not-a-real-renderer",
            "graph g {}",
            &PathBuf::from("/tmp/out.png"),
            "png",
        );
        assert!(matches!(result, Err(GraphvizError::Spawn { .. })));
    }

    #[test]
    fn test_failing_renderer_reports_status() {
        // `false` accepts no stdin and exits 1; depending on timing the
        // write can also fail with a broken pipe. Either way it is an
        // error, never a panic.
        let result = run_renderer("false", "graph g {}", &PathBuf::from("/tmp/out.png"), "png");
        assert!(result.is_err());
    }
}
