//! # Directory Listing Tool
//!
//! Enumerates the immediate children of a directory inside the sandbox and
//! formats them as one `* [file] name` or `* [directory] name` line per
//! entry. Entries come back in directory order; no sorting is applied.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::error::ToolError;
use crate::sandbox::Sandbox;
use crate::tool::{Tool, object_schema, optional_str_arg};

/// Success string returned when the listed directory has no entries.
pub const EMPTY_LISTING: &str = "No file nor directory found.";

/// Lists files and subdirectories inside the sandbox.
#[derive(Debug, Clone)]
pub struct FileListTool {
    sandbox: Sandbox,
}

impl FileListTool {
    /// Creates a list tool sandboxed to `root`.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ToolError> {
        Ok(Self {
            sandbox: Sandbox::new(root)?,
        })
    }

    /// Creates a list tool over an existing sandbox.
    pub fn with_sandbox(sandbox: Sandbox) -> Self {
        Self { sandbox }
    }

    /// Lists the immediate children of `dir_name` (relative to the sandbox
    /// root; pass `"."` for the root itself).
    ///
    /// Returns the formatted listing, or [`EMPTY_LISTING`] when the
    /// directory has no entries.
    ///
    /// # Errors
    ///
    /// - [`ToolError::InvalidInput`] / [`ToolError::Escape`] from path
    ///   resolution.
    /// - [`ToolError::NotFound`] if the resolved path is not an existing
    ///   directory.
    /// - [`ToolError::Io`] if the directory cannot be enumerated.
    pub fn list(&self, dir_name: &str) -> Result<String, ToolError> {
        let dir = self.sandbox.resolve(dir_name)?;

        if !dir.is_dir() {
            return Err(ToolError::NotFound { path: dir });
        }

        tracing::debug!("Listing directory {:?}", dir);

        let entries = fs::read_dir(&dir).map_err(|e| ToolError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let mut lines = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ToolError::Io {
                path: dir.clone(),
                source: e,
            })?;
            // is_dir follows symlinks, so a link to a directory lists as one.
            let kind = if entry.path().is_dir() {
                "[directory]"
            } else {
                "[file]"
            };
            lines.push(format!("* {} {}", kind, entry.file_name().to_string_lossy()));
        }

        if lines.is_empty() {
            return Ok(EMPTY_LISTING.to_string());
        }
        Ok(lines.join("\n"))
    }
}

impl Tool for FileListTool {
    fn name(&self) -> &str {
        "file_list"
    }

    fn description(&self) -> &str {
        "List all files and directories in a directory in the local filesystem and return the list."
    }

    fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(
            "dir_name".to_string(),
            json!({
                "type": "string",
                "description": "Relative path of the directory to list. Defaults to '.', the sandbox root. The path MUST be relative."
            }),
        );
        object_schema(properties, &[])
    }

    fn invoke(&self, args: &Map<String, Value>) -> Result<String, ToolError> {
        let dir_name = optional_str_arg(args, "dir_name", ".");
        self.list(dir_name)
    }
}
