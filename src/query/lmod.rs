//! Shell-backed lmod queries.
//!
//! The `module` command is a shell function defined by lmod's init script,
//! so every query runs through `bash -c` with the init script sourced first.
//! Each query spawns one short-lived process and captures its combined
//! stdout/stderr before returning; lmod writes parts of its output to
//! stderr, so both streams are kept.

use std::process::Command;

use super::{ModuleQuery, QueryError, QueryResult};

/// Default location of the lmod init script on most installations.
pub const DEFAULT_INIT_SCRIPT: &str = "/etc/profile.d/lmod.sh";

/// Queries lmod by shelling out to the `module` command.
#[derive(Debug, Clone)]
pub struct LmodCli {
    /// Init script sourced before each `module` invocation.
    init_script: String,
}

impl Default for LmodCli {
    fn default() -> Self {
        Self::new(DEFAULT_INIT_SCRIPT)
    }
}

impl LmodCli {
    /// Creates a query backend sourcing the given lmod init script.
    pub fn new(init_script: impl Into<String>) -> Self {
        Self {
            init_script: init_script.into(),
        }
    }

    /// Runs one `module ...` invocation and returns its combined output.
    fn run_module_command(&self, args: &str) -> QueryResult<String> {
        let command = format!("source {} && module {}", self.init_script, args);

        let output = Command::new("bash")
            .arg("-c")
            .arg(&command)
            .output()
            .map_err(|source| QueryError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(QueryError::Failed {
                command,
                status: output.status,
            });
        }

        let mut text = String::from_utf8(output.stdout)
            .map_err(|_| QueryError::InvalidOutput {
                command: command.clone(),
            })?;
        let stderr = String::from_utf8(output.stderr)
            .map_err(|_| QueryError::InvalidOutput { command })?;
        text.push_str(&stderr);

        Ok(text)
    }
}

impl ModuleQuery for LmodCli {
    fn show(&self, module: &str) -> QueryResult<String> {
        self.run_module_command(&format!("--raw show {module}"))
    }

    fn list(&self, mode: &str) -> QueryResult<Vec<String>> {
        let output = self.run_module_command(&format!("--terse {mode}"))?;
        Ok(output.split_whitespace().map(str::to_string).collect())
    }
}
