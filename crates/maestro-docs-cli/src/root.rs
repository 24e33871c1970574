use maestro_docs_core::config::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// Resolve the project root directory.
///
/// Priority:
/// 1. `--root` flag / `MAESTRO_DOCS_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `maestro-docs.yaml`
/// 3. Walk upward from `cwd` looking for `package.json`
/// 4. Walk upward from `cwd` looking for `.git/`
/// 5. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Some(dir) = walk_up(&cwd, |d| d.join(CONFIG_FILE).is_file()) {
        return dir;
    }
    if let Some(dir) = walk_up(&cwd, |d| d.join("package.json").is_file()) {
        return dir;
    }
    if let Some(dir) = walk_up(&cwd, |d| d.join(".git").is_dir()) {
        return dir;
    }

    cwd
}

fn walk_up(start: &Path, found: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if found(&dir) {
            return Some(dir);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn walk_up_finds_marker_in_ancestor() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "version: 1\n").unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let result = walk_up(&subdir, |d| d.join(CONFIG_FILE).is_file());
        assert_eq!(result.as_deref(), Some(dir.path()));
    }

    #[test]
    fn walk_up_returns_none_without_marker() {
        let dir = TempDir::new().unwrap();
        let result = walk_up(dir.path(), |d| d.join("does-not-exist.marker").is_file());
        assert_eq!(result, None);
    }
}
