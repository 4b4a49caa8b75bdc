//! # Tool Capability Interface
//!
//! Each file operation is exposed to the caller as a [`Tool`]: a named,
//! described, JSON-schema'd capability that can be invoked with a map of
//! JSON arguments. The caller (an agent loop, an MCP handler, a test
//! harness) holds tools as `Box<dyn Tool>` and needs no knowledge of the
//! concrete operation behind the handle.
//!
//! Argument parsing follows the same pattern as the invocation handlers it
//! serves: values are pulled out of the JSON map by key, with missing
//! required keys reported as [`ToolError::InvalidInput`] so the caller can
//! retry with corrected arguments.

use serde_json::{Map, Value};

use crate::error::ToolError;

/// A named filesystem capability invokable with JSON arguments.
///
/// All state behind a tool is fixed at construction (sandbox root, write
/// policy), so tools are safe to invoke from multiple threads.
pub trait Tool: Send + Sync {
    /// Stable identifier, e.g. `"file_list"`.
    fn name(&self) -> &str;

    /// Agent-facing description of what the tool does.
    fn description(&self) -> &str;

    /// JSON schema for the `invoke` arguments.
    fn input_schema(&self) -> Map<String, Value>;

    /// Runs the operation with the given arguments.
    fn invoke(&self, args: &Map<String, Value>) -> Result<String, ToolError>;
}

/// Pulls a required string argument out of the args map.
pub(crate) fn required_str_arg<'a>(
    args: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, ToolError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidInput(format!("missing required argument '{key}'")))
}

/// Pulls an optional string argument, falling back to `default`.
pub(crate) fn optional_str_arg<'a>(
    args: &'a Map<String, Value>,
    key: &str,
    default: &'a str,
) -> &'a str {
    args.get(key).and_then(|v| v.as_str()).unwrap_or(default)
}

/// Assembles an object schema from per-property schemas.
pub(crate) fn object_schema(
    properties: Map<String, Value>,
    required: &[&str],
) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".to_string(),
            Value::Array(
                required
                    .iter()
                    .map(|k| Value::String((*k).to_string()))
                    .collect(),
            ),
        );
    }
    schema
}
