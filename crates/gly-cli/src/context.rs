//! Shared application resources initialized once at startup.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gly_config::GalleyConfig;
use gly_db::service::GalleyService;

pub struct AppContext {
    pub service: GalleyService,
    pub config: GalleyConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the database under `<project_root>/.galley/` and build the context.
    pub async fn init(project_root: PathBuf, config: GalleyConfig) -> anyhow::Result<Self> {
        let db_path = project_root.join(".galley").join(&config.database.filename);
        let db_path_str = db_path.to_string_lossy();

        let service = GalleyService::new_local(&db_path_str)
            .await
            .context("failed to open galley database")?;

        Ok(Self {
            service,
            config,
            project_root,
        })
    }
}

/// Walk up from `start` looking for a directory containing `.galley`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(".galley").is_dir() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_project_root_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("workspace");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(root.join(".galley")).unwrap();
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_project_root(&nested).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn find_project_root_misses_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(find_project_root(tmp.path()).is_none());
    }
}
