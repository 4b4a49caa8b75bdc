//! # File Tools Configuration
//!
//! Declarative construction of the three file tools from a JSON document.
//! A [`FileToolsConfig`] names the sandbox root and the write policy flags;
//! [`FileToolsConfig::build_tools`] turns it into the polymorphic tool
//! registry handed to the caller.
//!
//! Unknown fields are rejected at parse time so that a typo in a config
//! file surfaces as an error instead of a silently ignored flag.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::file_list::FileListTool;
use crate::file_read::FileReadTool;
use crate::file_write::{FileWriteTool, WritePolicy};
use crate::sandbox::Sandbox;
use crate::tool::Tool;

/// Configuration for a set of file tools sharing one sandbox root.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FileToolsConfig {
    /// Root directory of the sandbox. Must exist and be a directory.
    pub root_dir: String,
    /// Create missing parent directories on write (default: false).
    #[serde(default)]
    pub create_missing_dirs: bool,
    /// Allow the write tool to overwrite existing files (default: false).
    #[serde(default)]
    pub allow_overwrite: bool,
}

impl FileToolsConfig {
    /// Creates a configuration with the default (most restrictive) write
    /// policy.
    pub fn new(root_dir: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            create_missing_dirs: false,
            allow_overwrite: false,
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file tools config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse file tools config {}", path.display()))?;
        Ok(config)
    }

    /// The write policy described by this configuration.
    pub fn write_policy(&self) -> WritePolicy {
        WritePolicy {
            create_missing_dirs: self.create_missing_dirs,
            allow_overwrite: self.allow_overwrite,
        }
    }

    /// Builds the three file tools over one shared sandbox.
    ///
    /// Fails with [`ToolError::Config`] if the root directory is invalid.
    pub fn build_tools(&self) -> Result<Vec<Box<dyn Tool>>, ToolError> {
        let sandbox = Sandbox::new(&self.root_dir)?;
        tracing::debug!("Building file tools for sandbox root {:?}", sandbox.root());

        Ok(vec![
            Box::new(FileListTool::with_sandbox(sandbox.clone())),
            Box::new(FileReadTool::with_sandbox(sandbox.clone())),
            Box::new(FileWriteTool::with_sandbox(sandbox, self.write_policy())),
        ])
    }

    /// Builds the tools keyed by name, for callers that dispatch by tool
    /// name instead of iterating.
    pub fn build_tool_map(&self) -> Result<HashMap<String, Box<dyn Tool>>, ToolError> {
        Ok(self
            .build_tools()?
            .into_iter()
            .map(|tool| (tool.name().to_string(), tool))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_restrictive() {
        let config: FileToolsConfig = serde_json::from_str(r#"{ "root_dir": "." }"#).unwrap();
        assert!(!config.create_missing_dirs);
        assert!(!config.allow_overwrite);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<FileToolsConfig, _> =
            serde_json::from_str(r#"{ "root_dir": ".", "alow_overwrite": true }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_policy_mapping() {
        let config: FileToolsConfig = serde_json::from_str(
            r#"{ "root_dir": ".", "create_missing_dirs": true, "allow_overwrite": true }"#,
        )
        .unwrap();
        let policy = config.write_policy();
        assert!(policy.create_missing_dirs);
        assert!(policy.allow_overwrite);
    }
}
