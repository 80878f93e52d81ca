//! File system utilities for bundling.
//!
//! Provides directory creation, staging directories and atomic file replacement
//! with errors that name the operation and path.

use crate::bundler::error::{Context, ErrorExt, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Prefix of staging directories created inside the output directory.
pub const STAGING_PREFIX: &str = ".form_bundler-";

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating output directory", path)
}

/// A scratch directory the engine writes into before outputs are committed.
///
/// Lives directly inside the output directory so that committing is a same-filesystem
/// rename.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Creates a uniquely named staging directory under `parent`.
    pub async fn create(parent: &Path) -> Result<Self> {
        let path = parent.join(format!("{STAGING_PREFIX}{}", uuid::Uuid::new_v4()));
        fs::create_dir(&path)
            .await
            .fs_context("creating staging directory", &path)?;
        log::debug!("Staging build in {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists regular files the engine produced, sorted by name.
    pub async fn files(&self) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(&self.path)
            .await
            .fs_context("reading staging directory", &self.path)?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .fs_context("reading staging directory", &self.path)?
        {
            let file_type = entry
                .file_type()
                .await
                .fs_context("reading file type", entry.path())?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Deletes the directory and anything left in it.
    ///
    /// Failure is logged, never returned: a leftover staging directory does not
    /// invalidate a build.
    pub async fn remove(self) {
        match fs::remove_dir_all(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "Failed to remove staging directory {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Moves `from` over `to`, replacing any existing file.
///
/// Unix `rename()` replaces the target atomically. On Windows it fails if the
/// target exists, so the old file is removed first.
pub async fn replace_file(from: &Path, to: &Path) -> Result<()> {
    #[cfg(windows)]
    {
        match fs::remove_file(to).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("removing previous output", to),
        }
    }

    fs::rename(from, to)
        .await
        .fs_context("moving output into place", to)
}

/// Writes `contents` to a sibling temporary file and renames it over `path`,
/// so readers observe either the old file or the complete new one.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .context(format!("{} has no file name", path.display()))?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
    let temp_path = path.with_file_name(temp_name);

    if let Err(e) = fs::write(&temp_path, contents).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e).fs_context("writing", &temp_path);
    }

    if let Err(e) = replace_file(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_all_builds_missing_parents() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a/b/c");
        create_dir_all(&nested).await.unwrap();
        assert!(nested.is_dir());
        create_dir_all(&nested).await.unwrap();
    }

    #[tokio::test]
    async fn staging_dir_lists_files_and_removes_itself() {
        let temp = tempfile::tempdir().unwrap();
        let staging = StagingDir::create(temp.path()).await.unwrap();
        let staged = staging.path().to_path_buf();
        assert!(
            staged
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(STAGING_PREFIX)
        );

        fs::write(staged.join("b.js.map"), "{}").await.unwrap();
        fs::write(staged.join("b.js"), "x").await.unwrap();
        fs::create_dir(staged.join("nested")).await.unwrap();

        let files = staging.files().await.unwrap();
        assert_eq!(files, vec![staged.join("b.js"), staged.join("b.js.map")]);

        staging.remove().await;
        assert!(!staged.exists());
    }

    #[tokio::test]
    async fn write_atomic_replaces_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("form.meta.json");
        fs::write(&target, "old").await.unwrap();

        write_atomic(&target, b"new").await.unwrap();

        assert_eq!(fs::read_to_string(&target).await.unwrap(), "new");
        let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
