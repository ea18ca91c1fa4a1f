//! Config file discovery.

use std::path::{Path, PathBuf};

/// Name of the config file looked up in the CWD and home directory.
pub const CONFIG_FILE: &str = ".diffmark.toml";

/// Locations checked for a config file, in priority order.
///
/// The relative CWD entry comes first, then `~/.diffmark.toml` when the home
/// directory is known.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

/// First candidate that exists as a regular file.
pub fn find_config_file(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_start_with_cwd() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
        assert!(candidates.iter().all(|p| p.ends_with(CONFIG_FILE)));
    }

    #[test]
    fn test_find_first_existing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "").unwrap();
        std::fs::write(&second, "").unwrap();

        let candidates = vec![missing.clone(), first.clone(), second];
        assert_eq!(find_config_file(&candidates), Some(first.as_path()));
        assert_eq!(find_config_file(&[missing]), None);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        let candidates = vec![dir.path().to_path_buf()];
        assert_eq!(find_config_file(&candidates), None);
    }
}
