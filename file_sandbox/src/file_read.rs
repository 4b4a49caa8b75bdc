//! # File Reading Tool
//!
//! Returns the full UTF-8 text content of a regular file inside the
//! sandbox. Reads are whole-file and synchronous; the file handle is scoped
//! to the single call on every path, including failures.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::error::ToolError;
use crate::sandbox::Sandbox;
use crate::tool::{Tool, object_schema, required_str_arg};

/// Reads file contents from inside the sandbox.
#[derive(Debug, Clone)]
pub struct FileReadTool {
    sandbox: Sandbox,
}

impl FileReadTool {
    /// Creates a read tool sandboxed to `root`.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ToolError> {
        Ok(Self {
            sandbox: Sandbox::new(root)?,
        })
    }

    /// Creates a read tool over an existing sandbox.
    pub fn with_sandbox(sandbox: Sandbox) -> Self {
        Self { sandbox }
    }

    /// Reads the entire content of `file_name` (relative to the sandbox
    /// root) as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// - [`ToolError::InvalidInput`] / [`ToolError::Escape`] from path
    ///   resolution.
    /// - [`ToolError::NotFound`] if the resolved path is not an existing
    ///   regular file.
    /// - [`ToolError::Io`] on read failure, including invalid UTF-8.
    pub fn read(&self, file_name: &str) -> Result<String, ToolError> {
        let file = self.sandbox.resolve(file_name)?;

        if !file.is_file() {
            return Err(ToolError::NotFound { path: file });
        }

        tracing::debug!("Reading file {:?}", file);

        fs::read_to_string(&file).map_err(|e| ToolError::Io {
            path: file,
            source: e,
        })
    }
}

impl Tool for FileReadTool {
    fn name(&self) -> &str {
        "file_read"
    }

    fn description(&self) -> &str {
        "Read or load content from a file in the local filesystem and return the content."
    }

    fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(
            "file_name".to_string(),
            json!({
                "type": "string",
                "description": "Relative path of the file to read. The path MUST be relative."
            }),
        );
        object_schema(properties, &["file_name"])
    }

    fn invoke(&self, args: &Map<String, Value>) -> Result<String, ToolError> {
        let file_name = required_str_arg(args, "file_name")?;
        self.read(file_name)
    }
}
