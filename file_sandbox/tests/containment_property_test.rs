//! Property-based tests for the path containment invariant.
//!
//! For every generated relative input, `Sandbox::resolve` must either
//! return a path whose components start with the root's components, or
//! reject the input with `Escape`/`InvalidInput`. The generator leans on
//! traversal segments and a sibling directory sharing a string prefix with
//! the root, the two classic ways to break naive containment checks.

use std::fs;
use std::path::Path;

use file_sandbox::{Sandbox, ToolError};
use proptest::prelude::*;
use tempfile::TempDir;

/// One path segment: traversal, current-dir, empty (doubled separators and
/// absolute-looking inputs), plain names, and the sibling-prefix bait.
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("..".to_string()),
        1 => Just(".".to_string()),
        1 => Just(String::new()),
        3 => "[a-z]{1,8}",
        1 => Just("data".to_string()),
        1 => Just("data-evil".to_string()),
    ]
}

/// Sandbox root `data` next to a `data-evil` sibling.
fn sandbox_with_sibling() -> (TempDir, Sandbox) {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("data")).unwrap();
    fs::create_dir(temp.path().join("data-evil")).unwrap();
    fs::write(temp.path().join("data-evil/loot.txt"), "loot").unwrap();
    let sandbox = Sandbox::new(temp.path().join("data")).unwrap();
    (temp, sandbox)
}

proptest! {
    /// Resolution is contained or rejected, never both and never neither.
    #[test]
    fn prop_resolve_contained_or_rejected(
        segments in prop::collection::vec(segment(), 0..6)
    ) {
        let (_temp, sandbox) = sandbox_with_sibling();
        let input = segments.join("/");

        match sandbox.resolve(&input) {
            Ok(resolved) => {
                prop_assert!(
                    resolved.starts_with(sandbox.root()),
                    "accepted path {:?} leaves root {:?} (input {:?})",
                    resolved,
                    sandbox.root(),
                    input
                );
            }
            Err(ToolError::Escape { path, .. }) => {
                prop_assert!(
                    !path.starts_with(sandbox.root()),
                    "rejected path {:?} is inside root {:?} (input {:?})",
                    path,
                    sandbox.root(),
                    input
                );
            }
            Err(ToolError::InvalidInput(_)) => {
                prop_assert!(
                    input.is_empty() || Path::new(&input).is_absolute(),
                    "InvalidInput for plausible relative input {:?}",
                    input
                );
            }
            Err(other) => {
                prop_assert!(false, "unexpected error kind for {:?}: {}", input, other);
            }
        }
    }

    /// Any path reaching into the sibling-prefix directory is an escape.
    #[test]
    fn prop_sibling_prefix_always_rejected(
        rest in prop::collection::vec("[a-z]{1,8}", 0..4)
    ) {
        let (_temp, sandbox) = sandbox_with_sibling();
        let mut input = "../data-evil".to_string();
        for part in &rest {
            input.push('/');
            input.push_str(part);
        }

        prop_assert!(
            matches!(sandbox.resolve(&input), Err(ToolError::Escape { .. })),
            "sibling-prefix input {:?} not rejected as Escape",
            input
        );
    }
}

#[test]
fn test_repeated_traversal_always_rejected() {
    let (_temp, sandbox) = sandbox_with_sibling();

    for depth in 1..8 {
        let input = format!("{}etc/passwd", "../".repeat(depth));
        assert!(
            matches!(sandbox.resolve(&input), Err(ToolError::Escape { .. })),
            "depth {depth} not rejected"
        );
    }
}

#[test]
fn test_traversal_that_returns_inside_is_accepted() {
    let (_temp, sandbox) = sandbox_with_sibling();

    // Leaves and re-enters the root lexically; canonical result is inside.
    let resolved = sandbox.resolve("../data/kept.txt").unwrap();
    assert_eq!(resolved, sandbox.root().join("kept.txt"));
}
