use crate::ingress::{ConvertError, discover, resolve_glob};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn discover_finds_matching_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.yaml"), "").unwrap();
    fs::write(root.join("b.yaml"), "").unwrap();
    fs::write(root.join("c.txt"), "").unwrap();

    // Act
    let result = discover(root, "*.yaml").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.yaml"), root.join("b.yaml")]);
}

#[test]
fn discover_returns_sorted_paths() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("z.yaml"), "").unwrap();
    fs::write(root.join("a.yaml"), "").unwrap();
    fs::write(root.join("m.yaml"), "").unwrap();

    // Act
    let result = discover(root, "*.yaml").unwrap();

    // Assert
    assert_eq!(
        result,
        vec![root.join("a.yaml"), root.join("m.yaml"), root.join("z.yaml")]
    );
}

#[test]
fn discover_supports_recursive_globs_and_skips_directories() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("nested/inner.yaml")).unwrap();
    fs::write(root.join("root.yaml"), "").unwrap();
    fs::write(root.join("nested/a.yaml"), "").unwrap();

    // Act
    let result = discover(root, "**/*.yaml").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("nested/a.yaml"), root.join("root.yaml")]);
}

#[test]
fn discover_rejects_malformed_pattern() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let result = discover(dir.path(), "[");

    // Assert
    assert!(matches!(result, Err(ConvertError::Glob { .. })));
}

#[test]
fn resolve_glob_joins_root_and_pattern() {
    let resolved = resolve_glob(Path::new("/manifests"), "**/*.yaml");

    assert_eq!(resolved, "/manifests/**/*.yaml");
}
