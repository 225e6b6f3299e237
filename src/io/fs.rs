use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

/// Create the directory if it doesn't exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Error unless the directory already exists.
pub(crate) fn require_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Path exists but is not a directory: {}", path.display());
    }
    Ok(())
}

/// Create the parent directory of an output file.
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_parents() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a/b/out.csv");
        ensure_parent_exists(&file).unwrap();
        assert!(dir.path().join("a/b").is_dir());
        require_dir_exists(&dir.path().join("a")).unwrap();
    }

    #[test]
    fn file_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(ensure_dir_exists(&file).is_err());
        assert!(require_dir_exists(&file).is_err());
        assert!(require_dir_exists(&dir.path().join("missing")).is_err());
    }
}
