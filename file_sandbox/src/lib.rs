//! # file_sandbox
//!
//! Sandboxed filesystem tools (list, read, write) safe to hand to an
//! untrusted caller such as an AI agent. Every caller-supplied path is
//! resolved through a [`Sandbox`] that confines it to a fixed root
//! directory; traversal segments, mixed separators, symlinks, and
//! sibling-prefix tricks all fail the containment check instead of
//! escaping.
//!
//! ## Architecture
//!
//! Three thin operation wrappers compose over one [`Sandbox`]:
//!
//! - [`FileListTool`] enumerates the immediate children of a directory.
//! - [`FileReadTool`] returns the full UTF-8 content of a file.
//! - [`FileWriteTool`] creates or overwrites a file, governed by a
//!   [`WritePolicy`] fixed at construction.
//!
//! Each tool also implements the [`Tool`] capability trait (name,
//! description, JSON input schema, invoke-with-JSON-args), so a caller can
//! hold the set as `Box<dyn Tool>` handles and dispatch by name. The
//! [`FileToolsConfig`] module builds that registry from a declarative JSON
//! configuration.
//!
//! All failures are distinguishable [`ToolError`] variants; the operations
//! never retry internally and hold no mutable state between calls, so the
//! tools are `Send + Sync` and safe to invoke concurrently.
//!
//! ## Example
//!
//! ```no_run
//! use file_sandbox::{FileReadTool, FileWriteTool, WritePolicy};
//!
//! # fn main() -> Result<(), file_sandbox::ToolError> {
//! let writer = FileWriteTool::with_policy(
//!     "workspace",
//!     WritePolicy { create_missing_dirs: true, allow_overwrite: false },
//! )?;
//! writer.write("notes/todo.txt", "ship it")?;
//!
//! let reader = FileReadTool::new("workspace")?;
//! assert_eq!(reader.read("notes/todo.txt")?, "ship it");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file_list;
pub mod file_read;
pub mod file_write;
pub mod logging;
pub mod sandbox;
pub mod tool;

pub use config::FileToolsConfig;
pub use error::ToolError;
pub use file_list::{EMPTY_LISTING, FileListTool};
pub use file_read::FileReadTool;
pub use file_write::{FileWriteTool, WritePolicy};
pub use sandbox::Sandbox;
pub use tool::Tool;
