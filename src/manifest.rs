/// package.json manifest utilities
///
/// This module handles:
/// - Finding the enclosing npm package of a directory
/// - Extracting its name
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// Name declared in `<dir>/package.json`, if the file exists, parses and
/// has a non-empty name
pub fn read_package_name(dir: &Path) -> Option<String> {
    let path = dir.join("package.json");
    let text = fs::read_to_string(&path).ok()?;
    let manifest: PackageJson = match serde_json::from_str(&text) {
        Ok(m) => m,
        Err(e) => {
            debug!("ignoring unparsable {}: {}", path.display(), e);
            return None;
        }
    };
    manifest.name.filter(|n| !n.trim().is_empty())
}

/// Walk up from `start` and return the first package name found. The walk
/// stops after `ceiling` when given, otherwise at the filesystem root.
pub fn find_package_name(start: &Path, ceiling: Option<&Path>) -> Option<String> {
    let mut found = None;
    for dir in start.ancestors() {
        found = read_package_name(dir);
        if found.is_some() || Some(dir) == ceiling {
            break;
        }
    }
    debug!("package name discovered from {}: {:?}", start.display(), found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finds_name_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "foo", "version": "1.0.0"}"#).unwrap();
        assert_eq!(find_package_name(dir.path(), None), Some("foo".to_string()));
    }

    #[test]
    fn test_walks_up_to_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "@scope/parent"}"#).unwrap();
        let nested = dir.path().join("src").join("lib");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_package_name(&nested, None), Some("@scope/parent".to_string()));
    }

    #[test]
    fn test_skips_broken_and_nameless_manifests() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "outer"}"#).unwrap();
        let middle = dir.path().join("middle");
        let inner = middle.join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(middle.join("package.json"), r#"{"private": true}"#).unwrap();
        fs::write(inner.join("package.json"), "{ broken").unwrap();
        assert_eq!(find_package_name(&inner, None), Some("outer".to_string()));
    }

    #[test]
    fn test_walk_stops_at_ceiling() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "outside"}"#).unwrap();
        let ceiling = dir.path().join("project");
        let nested = ceiling.join("src");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_package_name(&nested, Some(&ceiling)), None);

        fs::write(ceiling.join("package.json"), r#"{"name": "inside"}"#).unwrap();
        assert_eq!(find_package_name(&nested, Some(&ceiling)), Some("inside".to_string()));
    }

    #[test]
    fn test_read_package_name_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_package_name(dir.path()), None);
    }
}
