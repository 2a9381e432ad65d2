use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Optional file-based settings for the serve command
///
/// CLI flags take precedence over anything loaded from here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookshelfConfig {
    pub port: Option<u16>,
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("bookshelf.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<BookshelfConfig>> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: BookshelfConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
