use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::view::DEFAULT_PAGE_SIZE;

const DATA_DIR_ENV: &str = "LEASE_DESK_DATA_DIR";

pub const PAGE_SIZE_CHOICES: [NonZeroUsize; 3] = [
    DEFAULT_PAGE_SIZE,
    match NonZeroUsize::new(25) {
        Some(size) => size,
        None => unreachable!(),
    },
    match NonZeroUsize::new(50) {
        Some(size) => size,
        None => unreachable!(),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppPaths {
    pub fn in_dir(data_dir: PathBuf) -> Self {
        Self {
            db_path: data_dir.join("lease-desk.sqlite"),
            log_path: data_dir.join("lease-desk.log"),
            data_dir,
        }
    }

    /// `LEASE_DESK_DATA_DIR` when set and non-empty, else the platform data
    /// directory.
    pub fn resolve() -> Result<Self> {
        if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
            return Ok(Self::in_dir(PathBuf::from(dir)));
        }

        let project_dirs = ProjectDirs::from("com", "leasedesk", "lease-desk")
            .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
        Ok(Self::in_dir(project_dirs.data_local_dir().to_path_buf()))
    }

    pub fn webview_data_dir(&self) -> Result<PathBuf> {
        ensure_webview_data_dir(&self.data_dir)
    }
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
