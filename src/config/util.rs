//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute names are returned as-is if they exist.
///
/// # Example
/// ```text
/// /home/user/docs/zh/        ← start
/// /home/user/docs/nav.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("zh").join("manual");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("nav.toml"), "").unwrap();

        let found = find_config_file(Path::new("nav.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("nav.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        assert!(find_config_file(&path, dir.path()).is_none());

        fs::write(&path, "{}").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let name = Path::new("tola-nav-test-does-not-exist.toml");
        assert!(find_config_file(name, dir.path()).is_none());
    }
}
