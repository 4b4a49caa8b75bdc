//! # File Writing Tool
//!
//! Creates or overwrites a file inside the sandbox, governed by a
//! [`WritePolicy`] fixed at construction: whether missing parent
//! directories are created, and whether an existing file may be
//! overwritten.
//!
//! The existence check and the subsequent write are two separate
//! filesystem calls; if the sandboxed tree is mutated externally between
//! them, the policy gate can be stale. The write itself always truncates.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::error::ToolError;
use crate::sandbox::Sandbox;
use crate::tool::{Tool, object_schema, required_str_arg};

/// Construction-time flags governing write behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct WritePolicy {
    /// Create missing parent directories (and all their ancestors) instead
    /// of failing with [`ToolError::NotFound`].
    pub create_missing_dirs: bool,
    /// Overwrite an existing regular file instead of failing with
    /// [`ToolError::AlreadyExists`].
    pub allow_overwrite: bool,
}

/// Writes file contents inside the sandbox.
#[derive(Debug, Clone)]
pub struct FileWriteTool {
    sandbox: Sandbox,
    policy: WritePolicy,
}

impl FileWriteTool {
    /// Creates a write tool sandboxed to `root` with the default policy
    /// (no directory creation, no overwriting).
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ToolError> {
        Self::with_policy(root, WritePolicy::default())
    }

    /// Creates a write tool sandboxed to `root` with an explicit policy.
    pub fn with_policy(root: impl AsRef<Path>, policy: WritePolicy) -> Result<Self, ToolError> {
        Ok(Self {
            sandbox: Sandbox::new(root)?,
            policy,
        })
    }

    /// Creates a write tool over an existing sandbox.
    pub fn with_sandbox(sandbox: Sandbox, policy: WritePolicy) -> Self {
        Self { sandbox, policy }
    }

    /// Writes `content` to `file_name` (relative to the sandbox root) as
    /// UTF-8 text, truncating any prior content.
    ///
    /// Validation gates run in order; the first failing gate determines the
    /// reported error.
    ///
    /// # Errors
    ///
    /// - [`ToolError::InvalidInput`] / [`ToolError::Escape`] from path
    ///   resolution, or if `content` is empty.
    /// - [`ToolError::AlreadyExists`] if the target is an existing regular
    ///   file and the policy forbids overwriting.
    /// - [`ToolError::InvalidPath`] if the target or its parent exists with
    ///   the wrong type (e.g. the target is a directory, or the parent is a
    ///   regular file).
    /// - [`ToolError::NotFound`] if the parent directory is missing and the
    ///   policy forbids creating it.
    /// - [`ToolError::Io`] on any OS failure during directory creation or
    ///   the write itself.
    pub fn write(&self, file_name: &str, content: &str) -> Result<(), ToolError> {
        let file = self.sandbox.resolve(file_name)?;

        if content.is_empty() {
            return Err(ToolError::InvalidInput(
                "content was not provided or is empty".to_string(),
            ));
        }

        let parent = match file.parent() {
            Some(p) => p.to_path_buf(),
            // Only the filesystem root has no parent; it is never a file target.
            None => return Err(ToolError::InvalidPath { path: file }),
        };

        if parent.exists() {
            if !parent.is_dir() {
                return Err(ToolError::InvalidPath { path: file });
            }
            if file.exists() {
                if !file.is_file() {
                    return Err(ToolError::InvalidPath { path: file });
                }
                if !self.policy.allow_overwrite {
                    return Err(ToolError::AlreadyExists { path: file });
                }
            }
        } else if self.policy.create_missing_dirs {
            tracing::debug!("Creating missing directories {:?}", parent);
            fs::create_dir_all(&parent).map_err(|e| ToolError::Io {
                path: parent.clone(),
                source: e,
            })?;
        } else {
            return Err(ToolError::NotFound { path: parent });
        }

        tracing::debug!("Writing {} bytes to {:?}", content.len(), file);

        fs::write(&file, content).map_err(|e| ToolError::Io {
            path: file,
            source: e,
        })
    }
}

impl Tool for FileWriteTool {
    fn name(&self) -> &str {
        "file_write"
    }

    fn description(&self) -> &str {
        "Write or save content to a file in the local filesystem."
    }

    fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(
            "file_name".to_string(),
            json!({
                "type": "string",
                "description": "Relative path of the file to write. The path MUST be relative."
            }),
        );
        properties.insert(
            "content".to_string(),
            json!({
                "type": "string",
                "description": "Content to write to the file. Must not be empty."
            }),
        );
        object_schema(properties, &["file_name", "content"])
    }

    fn invoke(&self, args: &Map<String, Value>) -> Result<String, ToolError> {
        let file_name = required_str_arg(args, "file_name")?;
        let content = required_str_arg(args, "content")?;
        self.write(file_name, content)?;
        Ok(format!("Content written to '{file_name}'."))
    }
}
