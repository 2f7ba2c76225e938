//! Query module for ModGraph.
//!
//! Defines the interface the traversal engine uses to ask the environment's
//! module system about modules, plus the shell-backed implementation that
//! talks to lmod. The trait seam keeps the traversal testable without a
//! module system installed.

pub mod lmod;

pub use lmod::LmodCli;

/// Errors that can occur while querying the module system.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The module command could not be spawned at all.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The module command ran but exited with a failure status.
    #[error("Command '{command}' exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },

    /// The command produced output that was not valid UTF-8.
    #[error("Command '{command}' produced non-UTF-8 output")]
    InvalidOutput { command: String },
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Interface to an environment-module system.
///
/// Implemented by [`LmodCli`] for real runs and by in-memory fakes in tests.
pub trait ModuleQuery {
    /// Returns the raw text the module system prints when asked to show
    /// `module` (the full description, dependency declarations included).
    fn show(&self, module: &str) -> QueryResult<String>;

    /// Returns the module names matching a listing mode such as `list`,
    /// `avail` or `spider`.
    fn list(&self, mode: &str) -> QueryResult<Vec<String>>;
}
