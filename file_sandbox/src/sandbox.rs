//! # Sandbox Root and Path Containment
//!
//! A [`Sandbox`] owns the canonicalized root directory that every file tool
//! operates under. All caller-supplied paths pass through [`Sandbox::resolve`]
//! before any filesystem call is made; it is the single security-critical
//! routine in this crate.
//!
//! ## Containment model
//!
//! - The root is canonicalized once at construction, so it is absolute and
//!   symlink-free for the lifetime of the sandbox.
//! - A caller path must be relative. It is joined onto the root and then
//!   resolved: existing targets are canonicalized (so a symlink pointing
//!   outside the root is seen for what it is), targets that do not exist yet
//!   are normalized lexically so that write destinations can still be
//!   validated.
//! - The resolved candidate must start with the root, compared
//!   component-wise via [`Path::starts_with`]. A raw substring comparison
//!   would wrongly accept sibling directories sharing a string prefix
//!   (root `/a/b` vs candidate `/a/bc`).

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::ToolError;

/// A canonicalized root directory plus the containment check that keeps
/// caller-supplied paths inside it. Cheap to clone and share between tools.
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    /// Creates a sandbox rooted at `root`.
    ///
    /// The root is canonicalized and must be an existing directory;
    /// otherwise construction fails with [`ToolError::Config`].
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ToolError> {
        let root = root.as_ref();
        let canonical = fs::canonicalize(root).map_err(|e| ToolError::Config {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !canonical.is_dir() {
            return Err(ToolError::Config {
                path: root.to_path_buf(),
                reason: "expected a directory".to_string(),
            });
        }
        Ok(Self { root: canonical })
    }

    /// The canonicalized sandbox root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a caller-supplied relative path to an absolute path inside
    /// the sandbox, or rejects it.
    ///
    /// Existence of the target is deliberately not checked here; each
    /// operation decides what must exist.
    ///
    /// # Errors
    ///
    /// - [`ToolError::InvalidInput`] if `relative` is empty or absolute.
    /// - [`ToolError::Escape`] if the resolved path leaves the root.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ToolError> {
        if relative.is_empty() {
            return Err(ToolError::InvalidInput(
                "path was not provided".to_string(),
            ));
        }

        let relative_path = Path::new(relative);
        if relative_path.is_absolute() {
            return Err(ToolError::InvalidInput(format!(
                "path '{relative}' must be relative to the sandbox root"
            )));
        }

        let joined = self.root.join(relative_path);

        // Canonicalize when the target exists so symlinked components cannot
        // smuggle the path outside the root. Nonexistent targets (write
        // destinations) fall back to lexical normalization.
        let candidate = match fs::canonicalize(&joined) {
            Ok(p) => p,
            Err(_) => normalize_path_lexically(&joined),
        };

        if candidate.starts_with(&self.root) {
            Ok(candidate)
        } else {
            tracing::warn!(
                "Rejected path '{}': resolves outside sandbox root {:?}",
                relative,
                self.root
            );
            Err(ToolError::Escape {
                path: candidate,
                root: self.root.clone(),
            })
        }
    }
}

/// Normalize a path lexically (without filesystem access).
/// Resolves `.` and `..` components; `..` at the root stays at the root.
fn normalize_path_lexically(path: &Path) -> PathBuf {
    let mut stack = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if stack.last().is_some_and(|c| *c != Component::RootDir) {
                    stack.pop();
                }
            }
            c => stack.push(c),
        }
    }

    stack.iter().collect()
}
