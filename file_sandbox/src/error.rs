//! # Error Taxonomy for Sandboxed File Tools
//!
//! Every failure a tool can report to its caller is a distinct variant of
//! [`ToolError`]. The caller (typically an agent loop relaying the message
//! back to an LLM) is expected to match on the variant to decide whether a
//! retry with corrected input makes sense: `InvalidInput` is always
//! retryable, `Escape` is always rejected, `Io` carries the original OS
//! error text.
//!
//! No tool retries internally and nothing is silently clamped to a default;
//! the only non-error sentinel is the empty-listing string returned by the
//! list tool, which is a success value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the sandboxed file tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The sandbox root handed to a tool constructor is unusable. Raised
    /// once, at construction; aborts construction.
    #[error("Invalid sandbox root {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The caller supplied missing, empty, absolute, or otherwise malformed
    /// input. Recoverable by retrying with corrected input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The resolved path falls outside the sandbox root.
    #[error("Path {path:?} is outside the sandbox root {root:?}")]
    Escape { path: PathBuf, root: PathBuf },

    /// An expected filesystem entity is absent.
    #[error("Path {path:?} does not exist")]
    NotFound { path: PathBuf },

    /// The write target exists and the policy does not permit overwriting.
    #[error("File {path:?} already exists and cannot be overwritten")]
    AlreadyExists { path: PathBuf },

    /// A path component exists but has the wrong type (a file where a
    /// directory was expected, or vice versa).
    #[error("Path {path:?} is not a valid target")]
    InvalidPath { path: PathBuf },

    /// An underlying OS failure (permissions, disk errors, bad encoding).
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
