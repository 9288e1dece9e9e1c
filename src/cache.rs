//! Deterministic on-disk locations for chapter archives and their page images.
//!
//! A chapter counts as cached as soon as its archive path exists; the content is
//! never inspected.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::errors::Result;

#[derive(Debug, Clone)]
pub struct CacheStore {
    base_dir: PathBuf,
}

impl CacheStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base>/<name>-<chapter>.cbz`
    pub fn archive_path(&self, display_name: &str, chapter: i64) -> PathBuf {
        self.base_dir.join(format!("{display_name}-{chapter}.cbz"))
    }

    /// `<base>/<name>-<chapter>-<page>.jpg`, `page` being 1-based.
    pub fn page_path(&self, display_name: &str, chapter: i64, page: usize) -> PathBuf {
        self.base_dir.join(format!("{display_name}-{chapter}-{page}.jpg"))
    }

    pub async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await?;
        Ok(())
    }
}
