use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// All `*.csv` files directly inside `dir`, sorted by name.
pub fn discover_logs(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}
